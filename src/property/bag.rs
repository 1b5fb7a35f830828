//! Uniform access to an object's named members.

use super::error::PropertyError;
use super::value::{Primitive, PropertyValue};

/// How a member behaves under reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Readable and writable.
    Property,
    /// Readable; writes fail.
    ReadOnly,
    /// Runtime bookkeeping (type descriptors, override flags).
    Internal,
    /// Callable member; never captured.
    Method,
}

/// One entry of an object's reflected member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub kind: MemberKind,
}

impl PropertyDescriptor {
    pub const fn property(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Property,
        }
    }

    pub const fn read_only(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::ReadOnly,
        }
    }

    pub const fn internal(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Internal,
        }
    }

    pub const fn method(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Method,
        }
    }

    pub fn is_callable(&self) -> bool {
        self.kind == MemberKind::Method
    }

    pub fn is_writable(&self) -> bool {
        self.kind == MemberKind::Property
    }
}

/// An object whose members can be listed, read and written by name.
pub trait PropertyBag {
    /// Tag identifying which kind of object this is (e.g. `"ARRAY"`).
    fn object_type(&self) -> String;

    /// The object's own name.
    fn name(&self) -> &str;

    /// Member holding the polymorphic type tag. Captured separately as the
    /// snapshot's object type, so never stored as a property.
    fn discriminator(&self) -> &'static str {
        "type"
    }

    /// Every reflectively discoverable member, in declaration order.
    fn members(&self) -> Vec<PropertyDescriptor>;

    fn read(&self, name: &str) -> Result<PropertyValue, PropertyError>;

    fn write(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError>;

    /// Element-wise import into a list-like member.
    ///
    /// `None` when the member is not list-like; the caller then falls back to
    /// direct assignment.
    fn import_list(&mut self, name: &str, items: &[Primitive]) -> Option<Result<(), PropertyError>> {
        match self.read(name) {
            Ok(PropertyValue::Array(current)) => {
                if current.len() != items.len() {
                    return Some(Err(PropertyError::LengthMismatch {
                        name: name.to_string(),
                        expected: current.len(),
                        found: items.len(),
                    }));
                }
                Some(self.write(name, PropertyValue::Array(items.to_vec())))
            }
            _ => None,
        }
    }
}
