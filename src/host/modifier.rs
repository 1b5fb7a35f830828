//! Modifiers and their reflected member lists.

use serde::{Deserialize, Serialize};

use crate::property::{PropertyBag, PropertyDescriptor, PropertyError, PropertyValue};

use super::object::ObjectKind;
use super::settings::ModifierSettings;

/// Every modifier type the host knows how to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModifierType {
    Array,
    Bevel,
    Mirror,
    Subsurf,
    Solidify,
    Armature,
    Displace,
    VertexWeightEdit,
    DataTransfer,
}

impl ModifierType {
    pub const ALL: [ModifierType; 9] = [
        ModifierType::Array,
        ModifierType::Bevel,
        ModifierType::Mirror,
        ModifierType::Subsurf,
        ModifierType::Solidify,
        ModifierType::Armature,
        ModifierType::Displace,
        ModifierType::VertexWeightEdit,
        ModifierType::DataTransfer,
    ];

    pub fn identifier(&self) -> &'static str {
        match self {
            ModifierType::Array => "ARRAY",
            ModifierType::Bevel => "BEVEL",
            ModifierType::Mirror => "MIRROR",
            ModifierType::Subsurf => "SUBSURF",
            ModifierType::Solidify => "SOLIDIFY",
            ModifierType::Armature => "ARMATURE",
            ModifierType::Displace => "DISPLACE",
            ModifierType::VertexWeightEdit => "VERTEX_WEIGHT_EDIT",
            ModifierType::DataTransfer => "DATA_TRANSFER",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|modifier_type| modifier_type.identifier() == identifier)
    }

    /// Name given to a new modifier when none is requested.
    pub fn default_name(&self) -> &'static str {
        match self {
            ModifierType::Array => "Array",
            ModifierType::Bevel => "Bevel",
            ModifierType::Mirror => "Mirror",
            ModifierType::Subsurf => "Subdivision",
            ModifierType::Solidify => "Solidify",
            ModifierType::Armature => "Armature",
            ModifierType::Displace => "Displace",
            ModifierType::VertexWeightEdit => "VertexWeightEdit",
            ModifierType::DataTransfer => "DataTransfer",
        }
    }

    /// Deform-only modifiers move existing points without changing topology.
    pub fn is_deform(&self) -> bool {
        matches!(self, ModifierType::Armature | ModifierType::Displace)
    }

    /// Modifiers that read or write per-vertex data layers.
    pub fn uses_vertex_data(&self) -> bool {
        matches!(
            self,
            ModifierType::VertexWeightEdit | ModifierType::DataTransfer
        )
    }

    pub fn supported_on(&self, kind: ObjectKind) -> bool {
        match kind {
            ObjectKind::Mesh => true,
            ObjectKind::Lattice => self.is_deform(),
            kind if kind.is_curve_like() => !self.uses_vertex_data(),
            _ => false,
        }
    }

    /// Types whose result depends on data that rarely matches across objects
    /// (bones, vertex groups, mirror centres).
    pub fn needs_manual_adjustment(&self) -> bool {
        matches!(
            self,
            ModifierType::Armature | ModifierType::VertexWeightEdit | ModifierType::Mirror
        )
    }
}

const INTERNAL_TYPE_NAME: &str = "Modifier";

const LEADING_MEMBERS: &[PropertyDescriptor] = &[
    PropertyDescriptor::internal("bl_rna"),
    PropertyDescriptor::internal("rna_type"),
    PropertyDescriptor::read_only("is_override_data"),
    PropertyDescriptor::property("name"),
    PropertyDescriptor::read_only("type"),
    PropertyDescriptor::property("show_viewport"),
    PropertyDescriptor::property("show_render"),
    PropertyDescriptor::property("show_in_editmode"),
    PropertyDescriptor::property("show_on_cage"),
    PropertyDescriptor::property("show_expanded"),
    PropertyDescriptor::property("active"),
    PropertyDescriptor::property("use_pin_to_last"),
];

const TRAILING_MEMBERS: &[PropertyDescriptor] = &[
    PropertyDescriptor::read_only("persistent_uid"),
    PropertyDescriptor::read_only("execution_time"),
    PropertyDescriptor::method("is_property_set"),
    PropertyDescriptor::method("path_from_id"),
    PropertyDescriptor::method("driver_add"),
    PropertyDescriptor::method("keyframe_insert"),
];

/// A named, typed stage in an object's modifier stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub name: String,
    pub show_viewport: bool,
    pub show_render: bool,
    pub show_in_editmode: bool,
    pub show_on_cage: bool,
    pub show_expanded: bool,
    pub active: bool,
    pub use_pin_to_last: bool,
    pub settings: ModifierSettings,
    persistent_uid: i64,
    execution_time: f64,
}

impl Modifier {
    pub(super) fn new(modifier_type: ModifierType, name: String, persistent_uid: i64) -> Self {
        Self {
            name,
            show_viewport: true,
            show_render: true,
            show_in_editmode: false,
            show_on_cage: false,
            show_expanded: true,
            active: false,
            use_pin_to_last: false,
            settings: ModifierSettings::new(modifier_type),
            persistent_uid,
            execution_time: 0.0,
        }
    }

    pub fn modifier_type(&self) -> ModifierType {
        self.settings.modifier_type()
    }

    pub fn persistent_uid(&self) -> i64 {
        self.persistent_uid
    }

    /// `"name (TYPE)"`, as shown in checklists.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.modifier_type().identifier())
    }

    fn flag_mut(&mut self, name: &str) -> Option<&mut bool> {
        match name {
            "show_viewport" => Some(&mut self.show_viewport),
            "show_render" => Some(&mut self.show_render),
            "show_in_editmode" => Some(&mut self.show_in_editmode),
            "show_on_cage" => Some(&mut self.show_on_cage),
            "show_expanded" => Some(&mut self.show_expanded),
            "active" => Some(&mut self.active),
            "use_pin_to_last" => Some(&mut self.use_pin_to_last),
            _ => None,
        }
    }

    fn flag(&self, name: &str) -> Option<bool> {
        match name {
            "show_viewport" => Some(self.show_viewport),
            "show_render" => Some(self.show_render),
            "show_in_editmode" => Some(self.show_in_editmode),
            "show_on_cage" => Some(self.show_on_cage),
            "show_expanded" => Some(self.show_expanded),
            "active" => Some(self.active),
            "use_pin_to_last" => Some(self.use_pin_to_last),
            _ => None,
        }
    }
}

impl PropertyBag for Modifier {
    fn object_type(&self) -> String {
        self.modifier_type().identifier().to_string()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn members(&self) -> Vec<PropertyDescriptor> {
        LEADING_MEMBERS
            .iter()
            .chain(self.settings.members())
            .chain(TRAILING_MEMBERS)
            .copied()
            .collect()
    }

    fn read(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        if let Some(flag) = self.flag(name) {
            return Ok(PropertyValue::Bool(flag));
        }
        match name {
            "bl_rna" | "rna_type" => Ok(PropertyValue::Text(INTERNAL_TYPE_NAME.to_string())),
            "is_override_data" => Ok(PropertyValue::Bool(false)),
            "name" => Ok(PropertyValue::Text(self.name.clone())),
            "type" => Ok(PropertyValue::Text(self.object_type())),
            "persistent_uid" => Ok(PropertyValue::Int(self.persistent_uid)),
            "execution_time" => Ok(PropertyValue::Float(self.execution_time)),
            _ => self.settings.read(name),
        }
    }

    fn write(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        if let Some(flag) = self.flag_mut(name) {
            *flag = value.as_bool(name)?;
            return Ok(());
        }
        match name {
            "name" => {
                self.name = value.as_text(name)?;
                Ok(())
            }
            _ if self
                .members()
                .iter()
                .any(|member| member.name == name && !member.is_writable()) =>
            {
                Err(PropertyError::ReadOnly(name.to_string()))
            }
            _ => self.settings.write(name, &value),
        }
    }
}
