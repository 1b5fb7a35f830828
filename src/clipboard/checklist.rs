//! Per-modifier enable list for multi-copy.

use bevy::prelude::*;

use crate::host::ModifierStack;

/// One checkbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub name: String,
    /// `"name (TYPE)"`.
    pub label: String,
    pub enabled: bool,
}

/// Modifiers offered for copying, filled when the checklist is opened.
#[derive(Resource, Debug, Default)]
pub struct ModifierChecklist {
    pub source: Option<Entity>,
    pub items: Vec<ChecklistItem>,
}

impl ModifierChecklist {
    /// Replace the rows with every modifier on `stack`, all enabled.
    pub fn populate(&mut self, source: Entity, stack: &ModifierStack) {
        self.source = Some(source);
        self.items = stack
            .iter()
            .map(|modifier| ChecklistItem {
                name: modifier.name.clone(),
                label: modifier.label(),
                enabled: true,
            })
            .collect();
    }

    /// Returns false if no row has that name.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn enabled_names(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(|item| item.enabled)
            .map(|item| item.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.source = None;
        self.items.clear();
    }
}
