//! Classification of live values into portable encodings.
//!
//! Shape is decided by capability, highest priority first:
//! list export, then duplication, then reference identity, then plain
//! scalar. A value exposing several capabilities is classified by the first
//! one that applies.

use std::fmt;

use bevy::prelude::*;

use crate::host::{DataHandle, EntityNamespace};

use super::error::PropertyError;
use super::reference;
use super::value::{EncodedValue, Opaque, Primitive, PropertyValue};

/// Capabilities the classifier looks for on a value.
///
/// `Display` provides the text rendering used when duplication fails.
pub trait Probe: fmt::Display {
    /// Export as an ordered list of scalars, if the value is list-like.
    fn export_list(&self) -> Option<Vec<Primitive>> {
        None
    }

    /// Duplicate the value. `None` means the value cannot be duplicated at
    /// all; `Some(Err(_))` means it can but this attempt failed.
    fn duplicate(&self) -> Option<Result<Opaque, PropertyError>> {
        None
    }

    /// Handle to a named data-block, if the value points at one.
    fn data_handle(&self) -> Option<DataHandle> {
        None
    }

    /// The value as a plain scalar.
    fn primitive(&self) -> Option<Primitive>;
}

impl Probe for PropertyValue {
    fn export_list(&self) -> Option<Vec<Primitive>> {
        match self {
            PropertyValue::Array(items) => Some(items.clone()),
            _ => None,
        }
    }

    fn duplicate(&self) -> Option<Result<Opaque, PropertyError>> {
        match self {
            PropertyValue::Flags(flags) => Some(Ok(Opaque::Flags(flags.clone()))),
            _ => None,
        }
    }

    fn data_handle(&self) -> Option<DataHandle> {
        match self {
            PropertyValue::Data(handle) => Some(*handle),
            _ => None,
        }
    }

    fn primitive(&self) -> Option<Primitive> {
        match self {
            PropertyValue::Null => Some(Primitive::Null),
            PropertyValue::Bool(b) => Some(Primitive::Bool(*b)),
            PropertyValue::Int(i) => Some(Primitive::Int(*i)),
            PropertyValue::Float(f) => Some(Primitive::Float(*f)),
            PropertyValue::Text(s) => Some(Primitive::Text(s.clone())),
            PropertyValue::Array(_) | PropertyValue::Flags(_) | PropertyValue::Data(_) => None,
        }
    }
}

/// Produce the portable encoding of `value`.
///
/// References are named through `namespace`; a dangling handle yields
/// [`EncodedValue::Unrepresentable`].
pub fn classify<V>(value: &V, namespace: &dyn EntityNamespace) -> EncodedValue
where
    V: Probe + ?Sized,
{
    if let Some(items) = value.export_list() {
        return EncodedValue::SequenceOfScalars(items);
    }

    if let Some(copy) = value.duplicate() {
        return match copy {
            Ok(opaque) => EncodedValue::OpaqueCopy(opaque),
            Err(e) => {
                debug!("Duplication failed ({}), storing text rendering", e);
                EncodedValue::OpaqueCopy(Opaque::Text(value.to_string()))
            }
        };
    }

    if let Some(handle) = value.data_handle() {
        return reference::encode(&handle, namespace);
    }

    value
        .primitive()
        .map(EncodedValue::Scalar)
        .unwrap_or(EncodedValue::Unrepresentable)
}
