//! Paste system for clipboard operations.

use bevy::prelude::*;

use crate::config::ClipboardConfig;
use crate::host::{HostObject, ModifierStack, SceneNames, Selected};
use crate::property::{PropertySnapshot, apply};

use super::messages::{PasteMode, PasteModifiers};
use super::report::{
    ClipboardError, DestinationSummary, OperationReport, OperationStatus, PasteSummary, plural,
};
use super::types::ClipboardStore;

/// Recreate clipboard modifiers on every selected object that accepts them
pub fn paste_modifiers(
    mut requests: MessageReader<PasteModifiers>,
    store: Res<ClipboardStore>,
    config: Res<ClipboardConfig>,
    names: SceneNames,
    mut targets: Query<(Entity, &Name, &HostObject, &mut ModifierStack), With<Selected>>,
    mut status: ResMut<OperationStatus>,
) {
    for request in requests.read() {
        let snapshots: &[PropertySnapshot] = match request.mode {
            PasteMode::All => store.current(),
            PasteMode::Latest => store.latest().map(std::slice::from_ref).unwrap_or(&[]),
        };
        if snapshots.is_empty() {
            status.report_error(&ClipboardError::EmptyClipboard);
            continue;
        }

        let eligible = targets
            .iter()
            .filter(|(_, _, host, _)| config.accepts_paste(host.kind))
            .count();
        if eligible == 0 {
            status.report_error(&ClipboardError::NoEligibleDestination);
            continue;
        }

        let skip = config.replay_skip();
        let mut summary = PasteSummary::default();

        for (entity, object_name, host, mut stack) in &mut targets {
            if !config.accepts_paste(host.kind) {
                debug!(
                    "Skipping {} ({}): not a paste target",
                    object_name,
                    host.kind.identifier()
                );
                continue;
            }

            let mut destination = DestinationSummary {
                object: object_name.to_string(),
                ..default()
            };
            for snapshot in snapshots {
                let modifier = match stack.add_by_identifier(
                    host.kind,
                    &snapshot.object_type,
                    &snapshot.display_name,
                ) {
                    Ok(modifier) => modifier,
                    Err(source) => {
                        let err = ClipboardError::CreationFailed {
                            modifier: snapshot.display_name.clone(),
                            object: object_name.to_string(),
                            source,
                        };
                        summary
                            .failures
                            .push(format!("{} -> {}", snapshot.display_name, object_name));
                        status.report_error(&err);
                        continue;
                    }
                };

                let report = apply(modifier, entity, snapshot, &skip, &names);
                destination.properties_applied += report.applied_count();
                destination.properties_skipped += report.skipped_count();
                stack.make_last_name_unique();
                destination.modifiers_created += 1;
            }

            if destination.modifiers_created > 0 {
                summary.objects_affected += 1;
                summary.modifiers_pasted += destination.modifiers_created;
            }
            summary.properties_applied += destination.properties_applied;
            summary.properties_skipped += destination.properties_skipped;
            summary.destinations.push(destination);
        }

        if summary.objects_affected > 0 {
            status.report(OperationReport::info(format!(
                "Pasted {} to {}",
                plural(summary.modifiers_pasted, "modifier"),
                plural(summary.objects_affected, "object")
            )));
        } else {
            status.report(OperationReport::warning(
                "No modifiers were pasted to any objects",
            ));
        }
        status.last_paste = Some(summary);
    }
}
