//! Clipboard system for copying and pasting modifiers between objects.
//!
//! Copies capture each chosen modifier into a [`PropertySnapshot`] and
//! replace the whole [`ClipboardStore`]. Pastes recreate every snapshot on
//! each selected object whose kind is a configured paste target, replaying
//! the captured properties onto the new modifier.
//!
//! ## Module Structure
//!
//! - [`types`] - [`ClipboardStore`] and its summary
//! - [`checklist`] - Enable/disable rows for multi-copy
//! - [`messages`] - Request messages
//! - [`report`] - User-facing outcomes and operation errors
//! - [`copy`] - Checklist and copy systems
//! - [`paste`] - Paste system
//!
//! ## Systems
//!
//! - [`open_checklist`]: Fill the checklist from a source object
//! - [`copy_checked_modifiers`]: Copy enabled checklist rows
//! - [`copy_single_modifier`]: Copy one modifier by name
//! - [`paste_modifiers`]: Paste onto the selection
//! - [`report_config_reset`]: Surface a config reset at startup
//!
//! [`PropertySnapshot`]: crate::property::PropertySnapshot

mod checklist;
mod copy;
mod messages;
mod paste;
mod report;
mod tests;
mod types;

use bevy::prelude::*;

use crate::config::{ClipboardConfig, ConfigLoaded, ConfigResetNotification};

// Re-exports - Types
pub use checklist::ModifierChecklist;
pub use messages::{
    CopyCheckedModifiers, CopySingleModifier, OpenModifierChecklist, PasteMode, PasteModifiers,
};
pub use report::{OperationReport, OperationStatus};
pub use types::ClipboardStore;

// Used in tests and by embedders reading outcomes
#[allow(unused_imports)]
pub use checklist::ChecklistItem;
#[allow(unused_imports)]
pub use report::{ClipboardError, DestinationSummary, PasteSummary, ReportLevel};
#[allow(unused_imports)]
pub use types::ClipboardSummary;

// Re-exports - Systems
pub use copy::{copy_checked_modifiers, copy_single_modifier, open_checklist};
pub use paste::paste_modifiers;
pub use report::report_config_reset;

/// System set for the clipboard request handlers
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipboardSystems;

pub struct ModifierClipboardPlugin;

impl Plugin for ModifierClipboardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClipboardStore>()
            .init_resource::<ModifierChecklist>()
            .init_resource::<OperationStatus>()
            .init_resource::<ClipboardConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<OpenModifierChecklist>()
            .add_message::<CopyCheckedModifiers>()
            .add_message::<CopySingleModifier>()
            .add_message::<PasteModifiers>()
            .add_systems(Startup, report_config_reset.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    open_checklist.run_if(on_message::<OpenModifierChecklist>),
                    copy_checked_modifiers.run_if(on_message::<CopyCheckedModifiers>),
                    copy_single_modifier.run_if(on_message::<CopySingleModifier>),
                    paste_modifiers.run_if(on_message::<PasteModifiers>),
                )
                    .chain()
                    .in_set(ClipboardSystems),
            );
    }
}
