//! Live property values and their portable encodings.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::host::DataHandle;

use super::error::PropertyError;

/// A single plain value: what a snapshot can hold without any host context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Primitive {
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Null => "none",
            Primitive::Bool(_) => "bool",
            Primitive::Int(_) => "int",
            Primitive::Float(_) => "float",
            Primitive::Text(_) => "text",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Primitive::Int(i) => Some(*i as f64),
            Primitive::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Null => write!(f, "None"),
            Primitive::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Primitive::Int(i) => write!(f, "{}", i),
            Primitive::Float(v) => write!(f, "{:?}", v),
            Primitive::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Result of duplicating a value that is neither list-like nor a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Opaque {
    Flags(BTreeSet<String>),
    /// Text rendering used when duplication failed.
    Text(String),
}

/// Portable, type-tagged capture of one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EncodedValue {
    Scalar(Primitive),
    SequenceOfScalars(Vec<Primitive>),
    OpaqueCopy(Opaque),
    Reference { kind: String, name: String },
    /// Never stored in a snapshot; the property is omitted instead.
    Unrepresentable,
}

impl EncodedValue {
    pub fn is_storable(&self) -> bool {
        !matches!(self, EncodedValue::Unrepresentable)
    }

    /// Decode into a live value for direct assignment.
    ///
    /// References cannot be decoded without a namespace and yield `None`.
    pub fn to_value(&self) -> Option<PropertyValue> {
        match self {
            EncodedValue::Scalar(p) => Some(PropertyValue::from(p.clone())),
            EncodedValue::SequenceOfScalars(items) => Some(PropertyValue::Array(items.clone())),
            EncodedValue::OpaqueCopy(Opaque::Flags(flags)) => {
                Some(PropertyValue::Flags(flags.clone()))
            }
            EncodedValue::OpaqueCopy(Opaque::Text(text)) => Some(PropertyValue::Text(text.clone())),
            EncodedValue::Reference { .. } | EncodedValue::Unrepresentable => None,
        }
    }
}

/// A value as read from, or written to, a live property bag.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Fixed-length vector/array (offsets, axis toggles, colors).
    Array(Vec<Primitive>),
    /// Set of enum identifiers.
    Flags(BTreeSet<String>),
    /// Pointer to another named data-block.
    Data(DataHandle),
}

impl PropertyValue {
    pub fn floats(values: &[f64]) -> Self {
        PropertyValue::Array(values.iter().map(|v| Primitive::Float(*v)).collect())
    }

    pub fn bools(values: &[bool]) -> Self {
        PropertyValue::Array(values.iter().map(|v| Primitive::Bool(*v)).collect())
    }

    pub fn flags<'a>(items: impl IntoIterator<Item = &'a str>) -> Self {
        PropertyValue::Flags(items.into_iter().map(str::to_string).collect())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "none",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Float(_) => "float",
            PropertyValue::Text(_) => "text",
            PropertyValue::Array(_) => "array",
            PropertyValue::Flags(_) => "flag set",
            PropertyValue::Data(handle) => handle.kind(),
        }
    }

    pub fn as_bool(&self, name: &str) -> Result<bool, PropertyError> {
        match self {
            PropertyValue::Bool(b) => Ok(*b),
            other => Err(PropertyError::mismatch(name, "bool", other.type_name())),
        }
    }

    pub fn as_int(&self, name: &str) -> Result<i64, PropertyError> {
        match self {
            PropertyValue::Int(i) => Ok(*i),
            other => Err(PropertyError::mismatch(name, "int", other.type_name())),
        }
    }

    /// Ints are accepted where floats are expected.
    pub fn as_float(&self, name: &str) -> Result<f64, PropertyError> {
        match self {
            PropertyValue::Float(f) => Ok(*f),
            PropertyValue::Int(i) => Ok(*i as f64),
            other => Err(PropertyError::mismatch(name, "float", other.type_name())),
        }
    }

    pub fn as_text(&self, name: &str) -> Result<String, PropertyError> {
        match self {
            PropertyValue::Text(s) => Ok(s.clone()),
            other => Err(PropertyError::mismatch(name, "text", other.type_name())),
        }
    }

    /// Text that must be one of `options`.
    pub fn as_enum(&self, name: &str, options: &[&'static str]) -> Result<&'static str, PropertyError> {
        let value = self.as_text(name)?;
        options
            .iter()
            .find(|option| **option == value)
            .copied()
            .ok_or(PropertyError::InvalidEnum {
                name: name.to_string(),
                value,
            })
    }

    /// Flag set whose members must all be in `options`.
    pub fn as_flags(
        &self,
        name: &str,
        options: &[&'static str],
    ) -> Result<BTreeSet<String>, PropertyError> {
        let PropertyValue::Flags(flags) = self else {
            return Err(PropertyError::mismatch(name, "flag set", self.type_name()));
        };
        if let Some(bad) = flags.iter().find(|f| !options.contains(&f.as_str())) {
            return Err(PropertyError::InvalidEnum {
                name: name.to_string(),
                value: bad.clone(),
            });
        }
        Ok(flags.clone())
    }

    pub fn as_float_array<const N: usize>(&self, name: &str) -> Result<[f64; N], PropertyError> {
        let items = self.array_items(name, N)?;
        let mut out = [0.0; N];
        for (slot, item) in out.iter_mut().zip(items) {
            *slot = item
                .as_f64()
                .ok_or_else(|| PropertyError::mismatch(name, "float array", item.type_name()))?;
        }
        Ok(out)
    }

    pub fn as_bool_array<const N: usize>(&self, name: &str) -> Result<[bool; N], PropertyError> {
        let items = self.array_items(name, N)?;
        let mut out = [false; N];
        for (slot, item) in out.iter_mut().zip(items) {
            *slot = match item {
                Primitive::Bool(b) => *b,
                other => {
                    return Err(PropertyError::mismatch(name, "bool array", other.type_name()));
                }
            };
        }
        Ok(out)
    }

    fn array_items(&self, name: &str, expected: usize) -> Result<&[Primitive], PropertyError> {
        let PropertyValue::Array(items) = self else {
            return Err(PropertyError::mismatch(name, "array", self.type_name()));
        };
        if items.len() != expected {
            return Err(PropertyError::LengthMismatch {
                name: name.to_string(),
                expected,
                found: items.len(),
            });
        }
        Ok(items)
    }
}

impl From<Primitive> for PropertyValue {
    fn from(p: Primitive) -> Self {
        match p {
            Primitive::Null => PropertyValue::Null,
            Primitive::Bool(b) => PropertyValue::Bool(b),
            Primitive::Int(i) => PropertyValue::Int(i),
            Primitive::Float(f) => PropertyValue::Float(f),
            Primitive::Text(s) => PropertyValue::Text(s),
        }
    }
}

impl From<Option<DataHandle>> for PropertyValue {
    fn from(handle: Option<DataHandle>) -> Self {
        handle.map(PropertyValue::Data).unwrap_or(PropertyValue::Null)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => write!(f, "None"),
            PropertyValue::Bool(b) => fmt::Display::fmt(&Primitive::Bool(*b), f),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Float(v) => write!(f, "{:?}", v),
            PropertyValue::Text(s) => write!(f, "{:?}", s),
            PropertyValue::Array(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            PropertyValue::Flags(flags) => {
                let parts: Vec<String> = flags.iter().map(|s| format!("{:?}", s)).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
            PropertyValue::Data(handle) => write!(f, "<{}>", handle.kind()),
        }
    }
}
