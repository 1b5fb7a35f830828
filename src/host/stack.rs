//! Per-object ordered modifier stack.

use bevy::prelude::*;
use thiserror::Error;

use super::modifier::{Modifier, ModifierType};
use super::object::ObjectKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModifierError {
    #[error("{modifier_type} modifiers cannot be added to {object_kind} objects")]
    Unsupported {
        modifier_type: &'static str,
        object_kind: &'static str,
    },
    #[error("unknown modifier type `{0}`")]
    UnknownType(String),
}

/// Ordered modifiers on one object. At most one is active.
#[derive(Component, Debug, Clone, Default)]
pub struct ModifierStack {
    modifiers: Vec<Modifier>,
    next_uid: i64,
}

impl ModifierStack {
    /// Append a new modifier with default settings and make it active.
    ///
    /// An empty `name` falls back to the type's default; a taken name gets a
    /// numeric suffix.
    pub fn add(
        &mut self,
        host_kind: ObjectKind,
        modifier_type: ModifierType,
        name: &str,
    ) -> Result<&mut Modifier, ModifierError> {
        if !modifier_type.supported_on(host_kind) {
            return Err(ModifierError::Unsupported {
                modifier_type: modifier_type.identifier(),
                object_kind: host_kind.identifier(),
            });
        }

        let requested = if name.is_empty() {
            modifier_type.default_name()
        } else {
            name
        };
        let unique = self.unique_name(requested, None);

        self.next_uid += 1;
        for existing in &mut self.modifiers {
            existing.active = false;
        }
        let mut modifier = Modifier::new(modifier_type, unique, self.next_uid);
        modifier.active = true;
        self.modifiers.push(modifier);

        let index = self.modifiers.len() - 1;
        Ok(&mut self.modifiers[index])
    }

    /// Like [`ModifierStack::add`] but keyed by the type identifier.
    pub fn add_by_identifier(
        &mut self,
        host_kind: ObjectKind,
        identifier: &str,
        name: &str,
    ) -> Result<&mut Modifier, ModifierError> {
        let modifier_type = ModifierType::from_identifier(identifier)
            .ok_or_else(|| ModifierError::UnknownType(identifier.to_string()))?;
        self.add(host_kind, modifier_type, name)
    }

    pub fn get(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Modifier> {
        self.modifiers.iter_mut().find(|m| m.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modifiers.iter().map(|m| m.name.as_str())
    }

    pub fn active(&self) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.active)
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Re-apply the uniqueness rule to the last modifier, after its name was
    /// written directly.
    pub fn make_last_name_unique(&mut self) {
        let Some(index) = self.modifiers.len().checked_sub(1) else {
            return;
        };
        let current = self.modifiers[index].name.clone();
        let unique = self.unique_name(&current, Some(index));
        if unique != current {
            debug!("Renamed modifier `{}` to `{}`", current, unique);
            self.modifiers[index].name = unique;
        }
    }

    fn unique_name(&self, requested: &str, ignore: Option<usize>) -> String {
        let taken = |candidate: &str| {
            self.modifiers
                .iter()
                .enumerate()
                .any(|(i, m)| Some(i) != ignore && m.name == candidate)
        };

        if !taken(requested) {
            return requested.to_string();
        }

        let base = strip_numeric_suffix(requested);
        (1..)
            .map(|n| format!("{}.{:03}", base, n))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| requested.to_string())
    }
}

/// `"Bevel.002"` -> `"Bevel"`. Names without a three-digit suffix are kept.
fn strip_numeric_suffix(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((base, suffix))
            if !base.is_empty() && suffix.len() == 3 && suffix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_makes_new_modifier_active() {
        let mut stack = ModifierStack::default();
        stack.add(ObjectKind::Mesh, ModifierType::Bevel, "Bevel").unwrap();
        stack.add(ObjectKind::Mesh, ModifierType::Array, "Array").unwrap();

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.active().map(|m| m.name.as_str()), Some("Array"));
        assert_eq!(stack.iter().filter(|m| m.active).count(), 1);
    }

    #[test]
    fn test_duplicate_names_get_suffix() {
        let mut stack = ModifierStack::default();
        stack.add(ObjectKind::Mesh, ModifierType::Bevel, "Bevel").unwrap();
        stack.add(ObjectKind::Mesh, ModifierType::Bevel, "Bevel").unwrap();
        stack.add(ObjectKind::Mesh, ModifierType::Bevel, "Bevel.001").unwrap();

        let names: Vec<&str> = stack.names().collect();
        assert_eq!(names, vec!["Bevel", "Bevel.001", "Bevel.002"]);
    }

    #[test]
    fn test_empty_name_uses_type_default() {
        let mut stack = ModifierStack::default();
        let modifier = stack.add(ObjectKind::Mesh, ModifierType::Subsurf, "").unwrap();
        assert_eq!(modifier.name, "Subdivision");
    }

    #[test]
    fn test_unsupported_type_is_rejected() {
        let mut stack = ModifierStack::default();
        let err = stack
            .add(ObjectKind::Camera, ModifierType::Bevel, "Bevel")
            .unwrap_err();
        assert_eq!(
            err,
            ModifierError::Unsupported {
                modifier_type: "BEVEL",
                object_kind: "CAMERA",
            }
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn test_unknown_identifier() {
        let mut stack = ModifierStack::default();
        let err = stack
            .add_by_identifier(ObjectKind::Mesh, "OCEAN", "Ocean")
            .unwrap_err();
        assert_eq!(err, ModifierError::UnknownType("OCEAN".to_string()));
    }

    #[test]
    fn test_make_last_name_unique_after_rename() {
        let mut stack = ModifierStack::default();
        stack.add(ObjectKind::Mesh, ModifierType::Mirror, "Mirror").unwrap();
        let second = stack.add(ObjectKind::Mesh, ModifierType::Mirror, "Other").unwrap();
        second.name = "Mirror".to_string();

        stack.make_last_name_unique();
        let names: Vec<&str> = stack.names().collect();
        assert_eq!(names, vec!["Mirror", "Mirror.001"]);
    }

    #[test]
    fn test_persistent_uids_are_distinct() {
        let mut stack = ModifierStack::default();
        let a = stack.add(ObjectKind::Mesh, ModifierType::Array, "").unwrap().persistent_uid();
        let b = stack.add(ObjectKind::Mesh, ModifierType::Array, "").unwrap().persistent_uid();
        assert_ne!(a, b);
    }
}
