use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::stack::ModifierStack;

/// Host object type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectKind {
    #[default]
    Mesh,
    Curve,
    Surface,
    Font,
    Meta,
    Lattice,
    Armature,
    Camera,
    Light,
    Empty,
}

impl ObjectKind {
    pub fn identifier(&self) -> &'static str {
        match self {
            ObjectKind::Mesh => "MESH",
            ObjectKind::Curve => "CURVE",
            ObjectKind::Surface => "SURFACE",
            ObjectKind::Font => "FONT",
            ObjectKind::Meta => "META",
            ObjectKind::Lattice => "LATTICE",
            ObjectKind::Armature => "ARMATURE",
            ObjectKind::Camera => "CAMERA",
            ObjectKind::Light => "LIGHT",
            ObjectKind::Empty => "EMPTY",
        }
    }

    /// Kinds that accept pasted modifiers unless configured otherwise.
    pub fn default_paste_targets() -> Vec<ObjectKind> {
        vec![
            ObjectKind::Mesh,
            ObjectKind::Curve,
            ObjectKind::Lattice,
            ObjectKind::Surface,
            ObjectKind::Font,
            ObjectKind::Meta,
        ]
    }

    /// Kinds whose geometry is built from curves or text outlines.
    pub fn is_curve_like(&self) -> bool {
        matches!(self, ObjectKind::Curve | ObjectKind::Surface | ObjectKind::Font)
    }
}

/// A scene object that can carry modifiers.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
#[require(ModifierStack)]
pub struct HostObject {
    pub kind: ObjectKind,
}

impl HostObject {
    pub fn new(kind: ObjectKind) -> Self {
        Self { kind }
    }
}

/// Marks objects that paste operations should target.
#[derive(Component)]
pub struct Selected;

/// Named vertex groups belonging to an object's geometry.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexGroups {
    names: Vec<String>,
}

impl VertexGroups {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_kind_serializes_as_identifier() {
        let json = serde_json::to_string(&ObjectKind::Lattice).unwrap();
        assert_eq!(json, "\"LATTICE\"");
        let parsed: ObjectKind = serde_json::from_str("\"FONT\"").unwrap();
        assert_eq!(parsed, ObjectKind::Font);
        assert_eq!(parsed.identifier(), "FONT");
    }

    #[test]
    fn test_default_paste_targets_exclude_non_geometry() {
        let targets = ObjectKind::default_paste_targets();
        assert!(targets.contains(&ObjectKind::Mesh));
        assert!(targets.contains(&ObjectKind::Meta));
        assert!(!targets.contains(&ObjectKind::Camera));
        assert!(!targets.contains(&ObjectKind::Empty));
        assert!(!targets.contains(&ObjectKind::Armature));
    }

    #[test]
    fn test_vertex_groups_lookup() {
        let groups = VertexGroups::new(["Left", "Right"]);
        assert_eq!(groups.index_of("Right"), Some(1));
        assert_eq!(groups.index_of("Top"), None);
        assert_eq!(groups.name(0), Some("Left"));
        assert_eq!(groups.name(2), None);
    }
}
