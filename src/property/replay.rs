//! Replaying a [`PropertySnapshot`] onto another property bag.

use bevy::prelude::*;

use crate::host::EntityNamespace;

use super::bag::PropertyBag;
use super::error::SkipReason;
use super::reference;
use super::skip::SkipList;
use super::snapshot::PropertySnapshot;
use super::value::{EncodedValue, PropertyValue};

/// Outcome of replaying one snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
    /// Names written successfully, in snapshot order.
    pub applied: Vec<String>,
    /// Names left alone and why.
    pub skipped: Vec<(String, SkipReason)>,
}

impl ApplyReport {
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Write every entry of `snapshot` to `destination`, in snapshot order.
///
/// `owner` is the entity the destination belongs to; references are
/// resolved relative to it. A failing entry is recorded and skipped, the
/// remaining entries are still applied.
pub fn apply<B>(
    destination: &mut B,
    owner: Entity,
    snapshot: &PropertySnapshot,
    skip: &SkipList,
    namespace: &dyn EntityNamespace,
) -> ApplyReport
where
    B: PropertyBag + ?Sized,
{
    let mut report = ApplyReport::default();

    for (name, encoded) in snapshot.iter() {
        match apply_entry(destination, owner, name, encoded, skip, namespace) {
            Ok(()) => report.applied.push(name.to_string()),
            Err(reason) => {
                if reason != SkipReason::SkipListed {
                    debug!(
                        "Skipping `{}` on {}: {}",
                        name,
                        destination.name(),
                        reason
                    );
                }
                report.skipped.push((name.to_string(), reason));
            }
        }
    }

    report
}

fn apply_entry<B>(
    destination: &mut B,
    owner: Entity,
    name: &str,
    encoded: &EncodedValue,
    skip: &SkipList,
    namespace: &dyn EntityNamespace,
) -> Result<(), SkipReason>
where
    B: PropertyBag + ?Sized,
{
    if skip.contains(name) {
        return Err(SkipReason::SkipListed);
    }

    match encoded {
        EncodedValue::Reference { kind, name: target } => {
            let handle = reference::resolve(kind, target, owner, namespace).ok_or_else(|| {
                SkipReason::UnresolvedReference {
                    kind: kind.clone(),
                    name: target.clone(),
                }
            })?;
            destination
                .write(name, PropertyValue::Data(handle))
                .map_err(SkipReason::Unwritable)
        }
        EncodedValue::SequenceOfScalars(items) => match destination.import_list(name, items) {
            Some(result) => result.map_err(SkipReason::Unwritable),
            None => destination
                .write(name, PropertyValue::Array(items.clone()))
                .map_err(SkipReason::Unwritable),
        },
        other => {
            let value = other.to_value().ok_or(SkipReason::Unrepresentable)?;
            destination
                .write(name, value)
                .map_err(SkipReason::Unwritable)
        }
    }
}
