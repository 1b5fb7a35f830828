//! Clipboard data types for modifier copy/paste.

use std::fmt;

use bevy::prelude::*;
use serde::Serialize;

use crate::host::ModifierType;
use crate::property::PropertySnapshot;

/// Resource holding the most recently copied modifier snapshots.
///
/// Contents are only ever replaced as a whole; there is no append.
#[derive(Resource, Debug, Clone, Default, Serialize)]
pub struct ClipboardStore {
    snapshots: Vec<PropertySnapshot>,
}

impl ClipboardStore {
    /// Discard prior contents and store `snapshots`.
    pub fn replace_all(&mut self, snapshots: Vec<PropertySnapshot>) {
        self.snapshots = snapshots;
    }

    pub fn replace_with_single(&mut self, snapshot: PropertySnapshot) {
        self.replace_all(vec![snapshot]);
    }

    pub fn current(&self) -> &[PropertySnapshot] {
        &self.snapshots
    }

    /// Most recently captured snapshot.
    pub fn latest(&self) -> Option<&PropertySnapshot> {
        self.snapshots.last()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn summary(&self) -> ClipboardSummary {
        ClipboardSummary {
            entries: self.snapshots.iter().map(PropertySnapshot::label).collect(),
            needs_manual_adjustment: self.snapshots.iter().any(|s| {
                ModifierType::from_identifier(&s.object_type)
                    .is_some_and(|t| t.needs_manual_adjustment())
            }),
        }
    }
}

/// Listing of the clipboard contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardSummary {
    /// `"name (TYPE)"` per snapshot, in clipboard order.
    pub entries: Vec<String>,
    /// Set when the clipboard holds types that usually need fixing up after
    /// a paste.
    pub needs_manual_adjustment: bool,
}

impl fmt::Display for ClipboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Copied Modifiers: {}", self.entries.len())?;
        for entry in &self.entries {
            write!(f, "\n  • {}", entry)?;
        }
        if self.needs_manual_adjustment {
            write!(f, "\nNote: Some modifiers may need manual adjustment")?;
        }
        Ok(())
    }
}
