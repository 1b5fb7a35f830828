//! Checklist and copy systems.

use bevy::prelude::*;

use crate::config::ClipboardConfig;
use crate::host::{ModifierStack, SceneNames};
use crate::property::{PropertySnapshot, capture};

use super::checklist::ModifierChecklist;
use super::messages::{CopyCheckedModifiers, CopySingleModifier, OpenModifierChecklist};
use super::report::{ClipboardError, OperationReport, OperationStatus, plural};
use super::types::ClipboardStore;

/// Fill the checklist from the requested source object
pub fn open_checklist(
    mut requests: MessageReader<OpenModifierChecklist>,
    objects: Query<&ModifierStack>,
    mut checklist: ResMut<ModifierChecklist>,
    mut status: ResMut<OperationStatus>,
) {
    for request in requests.read() {
        let Ok(stack) = objects.get(request.source) else {
            checklist.clear();
            status.report_error(&ClipboardError::MissingSource);
            continue;
        };

        checklist.populate(request.source, stack);
        if checklist.is_empty() {
            status.report(OperationReport::warning(
                ClipboardError::NoModifiers.to_string(),
            ));
        } else {
            debug!("Checklist opened with {} entries", checklist.items.len());
        }
    }
}

/// Copy every enabled checklist entry, replacing the clipboard
pub fn copy_checked_modifiers(
    mut requests: MessageReader<CopyCheckedModifiers>,
    checklist: Res<ModifierChecklist>,
    objects: Query<(&Name, &ModifierStack)>,
    names: SceneNames,
    config: Res<ClipboardConfig>,
    mut store: ResMut<ClipboardStore>,
    mut status: ResMut<OperationStatus>,
) {
    for _ in requests.read() {
        let Some((source_name, stack)) = checklist.source.and_then(|e| objects.get(e).ok()) else {
            status.report_error(&ClipboardError::MissingSource);
            continue;
        };

        let skip = config.capture_skip();
        let snapshots: Vec<PropertySnapshot> = checklist
            .enabled_names()
            .filter_map(|name| stack.get(name))
            .map(|modifier| capture(modifier, source_name.as_str(), &skip, &names))
            .collect();

        if snapshots.is_empty() {
            status.report_error(&ClipboardError::NothingSelected);
            continue;
        }

        let count = snapshots.len();
        store.replace_all(snapshots);
        status.report(OperationReport::info(format!(
            "Copied {}",
            plural(count, "modifier")
        )));
    }
}

/// Copy one named modifier, replacing the clipboard
pub fn copy_single_modifier(
    mut requests: MessageReader<CopySingleModifier>,
    objects: Query<(&Name, &ModifierStack)>,
    names: SceneNames,
    config: Res<ClipboardConfig>,
    mut store: ResMut<ClipboardStore>,
    mut status: ResMut<OperationStatus>,
) {
    for request in requests.read() {
        let Ok((source_name, stack)) = objects.get(request.source) else {
            status.report_error(&ClipboardError::MissingSource);
            continue;
        };
        if stack.is_empty() {
            status.report_error(&ClipboardError::NoModifiers);
            continue;
        }
        let Some(modifier) = stack.get(&request.name) else {
            status.report_error(&ClipboardError::ModifierNotFound(request.name.clone()));
            continue;
        };

        let snapshot = capture(modifier, source_name.as_str(), &config.capture_skip(), &names);
        debug!(
            "Captured {} with {} properties",
            snapshot.label(),
            snapshot.len()
        );
        store.replace_with_single(snapshot);
        status.report(OperationReport::info(format!(
            "Copied modifier: {}",
            modifier.name
        )));
    }
}
