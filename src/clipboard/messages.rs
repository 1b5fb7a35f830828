//! Requests driving the clipboard systems.

use bevy::prelude::*;

/// Fill the checklist with `source`'s modifiers.
#[derive(Message)]
pub struct OpenModifierChecklist {
    pub source: Entity,
}

/// Copy every enabled checklist entry, replacing the clipboard.
#[derive(Message)]
pub struct CopyCheckedModifiers;

/// Copy one named modifier, replacing the clipboard.
#[derive(Message)]
pub struct CopySingleModifier {
    pub source: Entity,
    pub name: String,
}

/// Paste onto every selected object that accepts modifiers.
#[derive(Message)]
pub struct PasteModifiers {
    pub mode: PasteMode,
}

/// Which part of the clipboard a paste uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasteMode {
    /// Every snapshot, in clipboard order.
    #[default]
    All,
    /// Only the most recently captured snapshot.
    Latest,
}
