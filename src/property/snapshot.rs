//! Capturing a property bag into a [`PropertySnapshot`].

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::host::EntityNamespace;

use super::bag::{PropertyBag, PropertyDescriptor};
use super::classify::classify;
use super::error::SkipReason;
use super::skip::SkipList;
use super::value::EncodedValue;

/// Portable capture of one object's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySnapshot {
    /// Which kind of object to recreate (e.g. `"BEVEL"`).
    pub object_type: String,
    /// Name of the object the snapshot was taken from.
    pub source_name: String,
    /// Name to give the recreated object.
    pub display_name: String,
    properties: Vec<(String, EncodedValue)>,
}

impl PropertySnapshot {
    pub fn new(
        object_type: impl Into<String>,
        source_name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            object_type: object_type.into(),
            source_name: source_name.into(),
            display_name: display_name.into(),
            properties: Vec::new(),
        }
    }

    /// Add a property. Duplicate names and unrepresentable values are
    /// rejected; the first value seen for a name wins.
    pub fn insert(&mut self, name: impl Into<String>, value: EncodedValue) -> bool {
        let name = name.into();
        if !value.is_storable() || self.contains(&name) {
            return false;
        }
        self.properties.push((name, value));
        true
    }

    pub fn get(&self, name: &str) -> Option<&EncodedValue> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.iter().any(|(n, _)| n == name)
    }

    /// Properties in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EncodedValue)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// `"name (TYPE)"`, as shown in clipboard listings.
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.object_type)
    }
}

/// Capture every readable, non-skipped member of `source`.
///
/// Never fails: members that cannot be read or encoded are left out and
/// logged at debug level.
pub fn capture<B>(
    source: &B,
    source_name: &str,
    skip: &SkipList,
    namespace: &dyn EntityNamespace,
) -> PropertySnapshot
where
    B: PropertyBag + ?Sized,
{
    let mut snapshot = PropertySnapshot::new(source.object_type(), source_name, source.name());
    let discriminator = source.discriminator();

    for member in source.members() {
        match capture_member(source, &member, discriminator, skip, namespace) {
            Ok(value) => {
                snapshot.insert(member.name, value);
            }
            Err(SkipReason::SkipListed | SkipReason::Callable) => {}
            Err(reason) => {
                debug!(
                    "Omitting `{}` from snapshot of {}: {}",
                    member.name,
                    source.name(),
                    reason
                );
            }
        }
    }

    snapshot
}

fn capture_member<B>(
    source: &B,
    member: &PropertyDescriptor,
    discriminator: &str,
    skip: &SkipList,
    namespace: &dyn EntityNamespace,
) -> Result<EncodedValue, SkipReason>
where
    B: PropertyBag + ?Sized,
{
    if member.name == discriminator || skip.contains(member.name) {
        return Err(SkipReason::SkipListed);
    }
    if member.is_callable() {
        return Err(SkipReason::Callable);
    }

    let value = source.read(member.name).map_err(SkipReason::Unreadable)?;
    match classify(&value, namespace) {
        EncodedValue::Unrepresentable => Err(SkipReason::Unrepresentable),
        encoded => Ok(encoded),
    }
}
