//! Unit tests for clipboard operations.

#![cfg(test)]

use bevy::prelude::*;

use crate::host::{
    DataHandle, HostObject, ModifierStack, ModifierType, ObjectKind, Selected, VertexGroups,
};
use crate::config::ConfigResetNotification;
use crate::property::{
    EncodedValue, Opaque, Primitive, PropertyBag, PropertySnapshot, PropertyValue,
};

use super::*;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(ModifierClipboardPlugin);
    app
}

fn spawn_object(
    app: &mut App,
    name: &str,
    kind: ObjectKind,
    modifiers: &[(ModifierType, &str)],
) -> Entity {
    let mut stack = ModifierStack::default();
    for (modifier_type, modifier_name) in modifiers {
        stack.add(kind, *modifier_type, modifier_name).unwrap();
    }
    app.world_mut()
        .spawn((Name::new(name.to_string()), HostObject::new(kind), stack))
        .id()
}

fn select(app: &mut App, entity: Entity) {
    app.world_mut().entity_mut(entity).insert(Selected);
}

fn stack(app: &App, entity: Entity) -> &ModifierStack {
    app.world().get::<ModifierStack>(entity).unwrap()
}

fn stack_mut(app: &mut App, entity: Entity) -> Mut<'_, ModifierStack> {
    app.world_mut().get_mut::<ModifierStack>(entity).unwrap()
}

fn last_message(app: &App) -> String {
    app.world()
        .resource::<OperationStatus>()
        .last_report
        .as_ref()
        .map(|r| r.message.clone())
        .unwrap_or_default()
}

fn snapshot(name: &str, object_type: &str) -> PropertySnapshot {
    let mut snapshot = PropertySnapshot::new(object_type, "Cube", name);
    snapshot.insert("name", EncodedValue::Scalar(Primitive::Text(name.to_string())));
    snapshot
}

fn copy_all(app: &mut App, source: Entity) {
    app.world_mut()
        .write_message(OpenModifierChecklist { source });
    app.update();
    app.world_mut().write_message(CopyCheckedModifiers);
    app.update();
}

fn paste(app: &mut App, mode: PasteMode) {
    app.world_mut().write_message(PasteModifiers { mode });
    app.update();
}

// ClipboardStore tests
#[test]
fn test_clipboard_default_is_empty() {
    let store = ClipboardStore::default();
    assert!(store.is_empty());
    assert!(store.latest().is_none());
}

#[test]
fn test_replace_leaves_no_residue() {
    let mut store = ClipboardStore::default();
    let s1 = snapshot("Bevel", "BEVEL");
    let s2 = snapshot("Array", "ARRAY");
    let s3 = snapshot("Solidify", "SOLIDIFY");

    store.replace_with_single(s1);
    store.replace_all(vec![s2.clone(), s3.clone()]);

    assert_eq!(store.current(), &[s2, s3.clone()]);
    assert_eq!(store.latest(), Some(&s3));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_summary_lists_entries_and_flags_special_types() {
    let mut store = ClipboardStore::default();
    store.replace_all(vec![snapshot("Bevel", "BEVEL"), snapshot("Array", "ARRAY")]);
    let summary = store.summary();
    assert_eq!(summary.entries, vec!["Bevel (BEVEL)", "Array (ARRAY)"]);
    assert!(!summary.needs_manual_adjustment);

    store.replace_with_single(snapshot("Mirror", "MIRROR"));
    let summary = store.summary();
    assert!(summary.needs_manual_adjustment);
    assert!(summary.to_string().contains("may need manual adjustment"));
}

// Checklist and copy tests
#[test]
fn test_checklist_lists_all_modifiers_enabled() {
    let mut app = test_app();
    let source = spawn_object(
        &mut app,
        "Cube",
        ObjectKind::Mesh,
        &[(ModifierType::Bevel, "Bevel"), (ModifierType::Subsurf, "")],
    );

    app.world_mut()
        .write_message(OpenModifierChecklist { source });
    app.update();

    let checklist = app.world().resource::<ModifierChecklist>();
    assert_eq!(checklist.source, Some(source));
    let labels: Vec<&str> = checklist.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["Bevel (BEVEL)", "Subdivision (SUBSURF)"]);
    assert!(checklist.items.iter().all(|i| i.enabled));
}

#[test]
fn test_copy_checked_respects_checklist() {
    let mut app = test_app();
    let source = spawn_object(
        &mut app,
        "Cube",
        ObjectKind::Mesh,
        &[
            (ModifierType::Bevel, "Bevel"),
            (ModifierType::Array, "Array"),
            (ModifierType::Mirror, "Mirror"),
        ],
    );

    app.world_mut()
        .write_message(OpenModifierChecklist { source });
    app.update();
    assert!(
        app.world_mut()
            .resource_mut::<ModifierChecklist>()
            .set_enabled("Array", false)
    );
    app.world_mut().write_message(CopyCheckedModifiers);
    app.update();

    let store = app.world().resource::<ClipboardStore>();
    let labels: Vec<String> = store.current().iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Bevel (BEVEL)", "Mirror (MIRROR)"]);
    assert!(store.current().iter().all(|s| s.source_name == "Cube"));
    assert_eq!(last_message(&app), "Copied 2 modifiers");
}

#[test]
fn test_copy_with_nothing_enabled_keeps_clipboard() {
    let mut app = test_app();
    let source = spawn_object(&mut app, "Cube", ObjectKind::Mesh, &[(ModifierType::Bevel, "")]);
    app.world_mut()
        .resource_mut::<ClipboardStore>()
        .replace_with_single(snapshot("Old", "ARRAY"));

    app.world_mut()
        .write_message(OpenModifierChecklist { source });
    app.update();
    app.world_mut()
        .resource_mut::<ModifierChecklist>()
        .set_enabled("Bevel", false);
    app.world_mut().write_message(CopyCheckedModifiers);
    app.update();

    let store = app.world().resource::<ClipboardStore>();
    assert_eq!(store.len(), 1);
    assert_eq!(store.current()[0].display_name, "Old");
    let status = app.world().resource::<OperationStatus>();
    assert_eq!(
        status.last_report,
        Some(OperationReport::warning("No modifiers were selected for copying"))
    );
}

#[test]
fn test_copy_single_replaces_clipboard() {
    let mut app = test_app();
    let source = spawn_object(
        &mut app,
        "Cube",
        ObjectKind::Mesh,
        &[(ModifierType::Bevel, "Bevel"), (ModifierType::Solidify, "Shell")],
    );
    copy_all(&mut app, source);
    assert_eq!(app.world().resource::<ClipboardStore>().len(), 2);

    app.world_mut().write_message(CopySingleModifier {
        source,
        name: "Shell".to_string(),
    });
    app.update();

    let store = app.world().resource::<ClipboardStore>();
    assert_eq!(store.len(), 1);
    assert_eq!(store.current()[0].label(), "Shell (SOLIDIFY)");
    assert_eq!(last_message(&app), "Copied modifier: Shell");
}

#[test]
fn test_copy_single_errors_leave_clipboard() {
    let mut app = test_app();
    let source = spawn_object(&mut app, "Cube", ObjectKind::Mesh, &[(ModifierType::Bevel, "")]);
    let bare = spawn_object(&mut app, "Plane", ObjectKind::Mesh, &[]);
    copy_all(&mut app, source);

    app.world_mut().write_message(CopySingleModifier {
        source,
        name: "Missing".to_string(),
    });
    app.update();
    assert_eq!(last_message(&app), "Selected modifier not found: Missing");

    app.world_mut().write_message(CopySingleModifier {
        source: bare,
        name: "Bevel".to_string(),
    });
    app.update();
    assert_eq!(last_message(&app), "Selected object has no modifiers");

    let store = app.world().resource::<ClipboardStore>();
    assert_eq!(store.current()[0].label(), "Bevel (BEVEL)");
}

// Paste tests
#[test]
fn test_paste_to_multiple_destinations() {
    let mut app = test_app();
    let source = spawn_object(
        &mut app,
        "Source",
        ObjectKind::Mesh,
        &[(ModifierType::Bevel, "Bevel"), (ModifierType::Subsurf, "Smooth")],
    );
    let destinations = [
        spawn_object(&mut app, "A", ObjectKind::Mesh, &[]),
        spawn_object(&mut app, "B", ObjectKind::Curve, &[]),
        spawn_object(&mut app, "C", ObjectKind::Mesh, &[]),
    ];
    let camera = spawn_object(&mut app, "Camera", ObjectKind::Camera, &[]);
    for entity in destinations.into_iter().chain([camera]) {
        select(&mut app, entity);
    }

    copy_all(&mut app, source);
    paste(&mut app, PasteMode::All);

    for entity in destinations {
        let names: Vec<&str> = stack(&app, entity).names().collect();
        assert_eq!(names, vec!["Bevel", "Smooth"]);
    }
    assert!(stack(&app, camera).is_empty());

    let status = app.world().resource::<OperationStatus>();
    let summary = status.last_paste.as_ref().unwrap();
    assert_eq!(summary.modifiers_pasted, 6);
    assert_eq!(summary.objects_affected, 3);
    assert!(summary.failures.is_empty());
    assert_eq!(last_message(&app), "Pasted 6 modifiers to 3 objects");
}

#[test]
fn test_paste_latest_uses_last_snapshot() {
    let mut app = test_app();
    let source = spawn_object(
        &mut app,
        "Source",
        ObjectKind::Mesh,
        &[(ModifierType::Bevel, "Bevel"), (ModifierType::Array, "Array")],
    );
    let target = spawn_object(&mut app, "Target", ObjectKind::Mesh, &[]);
    select(&mut app, target);

    copy_all(&mut app, source);
    paste(&mut app, PasteMode::Latest);

    let names: Vec<&str> = stack(&app, target).names().collect();
    assert_eq!(names, vec!["Array"]);
    assert_eq!(last_message(&app), "Pasted 1 modifier to 1 object");
}

#[test]
fn test_paste_replays_settings() {
    let mut app = test_app();
    let source = spawn_object(&mut app, "Source", ObjectKind::Mesh, &[(ModifierType::Bevel, "")]);
    {
        let mut source_stack = stack_mut(&mut app, source);
        let bevel = source_stack.get_mut("Bevel").unwrap();
        bevel.write("width", PropertyValue::Float(0.25)).unwrap();
        bevel.write("segments", PropertyValue::Int(4)).unwrap();
        bevel.show_render = false;
    }
    let target = spawn_object(&mut app, "Target", ObjectKind::Mesh, &[]);
    select(&mut app, target);

    copy_all(&mut app, source);
    paste(&mut app, PasteMode::All);

    let pasted = stack(&app, target).get("Bevel").unwrap();
    assert_eq!(pasted.read("width"), Ok(PropertyValue::Float(0.25)));
    assert_eq!(pasted.read("segments"), Ok(PropertyValue::Int(4)));
    assert!(!pasted.show_render);
    assert!(pasted.active);
}

#[test]
fn test_paste_resolves_references_in_destination_scene() {
    let mut app = test_app();
    let empty = spawn_object(&mut app, "Empty", ObjectKind::Empty, &[]);
    let source = spawn_object(
        &mut app,
        "Source",
        ObjectKind::Mesh,
        &[
            (ModifierType::Array, "Array"),
            (ModifierType::VertexWeightEdit, "Weights"),
        ],
    );
    app.world_mut()
        .entity_mut(source)
        .insert(VertexGroups::new(["Spine"]));
    {
        let mut source_stack = stack_mut(&mut app, source);
        source_stack
            .get_mut("Array")
            .unwrap()
            .write("offset_object", PropertyValue::Data(DataHandle::Object(empty)))
            .unwrap();
        source_stack
            .get_mut("Weights")
            .unwrap()
            .write(
                "vertex_group",
                PropertyValue::Data(DataHandle::VertexGroup {
                    owner: source,
                    index: 0,
                }),
            )
            .unwrap();
    }

    let with_group = spawn_object(&mut app, "WithGroup", ObjectKind::Mesh, &[]);
    app.world_mut()
        .entity_mut(with_group)
        .insert((VertexGroups::new(["Root", "Spine"]), Selected));
    let without_group = spawn_object(&mut app, "WithoutGroup", ObjectKind::Mesh, &[]);
    select(&mut app, without_group);

    copy_all(&mut app, source);
    let captured = app.world().resource::<ClipboardStore>().current()[0].clone();
    assert_eq!(
        captured.get("offset_object"),
        Some(&EncodedValue::Reference {
            kind: "Object".to_string(),
            name: "Empty".to_string(),
        })
    );

    paste(&mut app, PasteMode::All);

    let pasted = stack(&app, with_group);
    assert_eq!(
        pasted.get("Array").unwrap().read("offset_object"),
        Ok(PropertyValue::Data(DataHandle::Object(empty)))
    );
    assert_eq!(
        pasted.get("Weights").unwrap().read("vertex_group"),
        Ok(PropertyValue::Data(DataHandle::VertexGroup {
            owner: with_group,
            index: 1,
        }))
    );

    // Unresolved group: modifier still created, member left at default.
    let pasted = stack(&app, without_group);
    assert_eq!(
        pasted.get("Weights").unwrap().read("vertex_group"),
        Ok(PropertyValue::Null)
    );
    let summary = app
        .world()
        .resource::<OperationStatus>()
        .last_paste
        .clone()
        .unwrap();
    assert_eq!(summary.modifiers_pasted, 4);

    // The missing group costs exactly one property on that object only.
    let destination = |object: &str| {
        summary
            .destinations
            .iter()
            .find(|d| d.object == object)
            .cloned()
            .unwrap()
    };
    let resolved = destination("WithGroup");
    let unresolved = destination("WithoutGroup");
    assert_eq!(resolved.modifiers_created, 2);
    assert_eq!(unresolved.modifiers_created, 2);
    assert_eq!(resolved.properties_applied, unresolved.properties_applied + 1);
    assert_eq!(resolved.properties_skipped + 1, unresolved.properties_skipped);
    assert_eq!(
        summary.properties_applied,
        resolved.properties_applied + unresolved.properties_applied
    );
}

#[test]
fn test_paste_replays_flag_sets() {
    let mut app = test_app();
    let source = spawn_object(
        &mut app,
        "Source",
        ObjectKind::Mesh,
        &[(ModifierType::DataTransfer, "Transfer")],
    );
    stack_mut(&mut app, source)
        .get_mut("Transfer")
        .unwrap()
        .write(
            "data_types_verts",
            PropertyValue::flags(["VGROUP_WEIGHTS", "BEVEL_WEIGHT_VERT"]),
        )
        .unwrap();
    let target = spawn_object(&mut app, "Target", ObjectKind::Mesh, &[]);
    select(&mut app, target);

    copy_all(&mut app, source);
    let captured = app.world().resource::<ClipboardStore>().current()[0].clone();
    assert!(matches!(
        captured.get("data_types_verts"),
        Some(EncodedValue::OpaqueCopy(Opaque::Flags(_)))
    ));

    paste(&mut app, PasteMode::All);

    let pasted = stack(&app, target).get("Transfer").unwrap();
    assert_eq!(
        pasted.read("data_types_verts"),
        Ok(PropertyValue::flags(["BEVEL_WEIGHT_VERT", "VGROUP_WEIGHTS"]))
    );
}

#[test]
fn test_paste_creation_failure_is_isolated() {
    let mut app = test_app();
    let source = spawn_object(
        &mut app,
        "Source",
        ObjectKind::Mesh,
        &[(ModifierType::Bevel, "Bevel"), (ModifierType::Displace, "Displace")],
    );
    let lattice = spawn_object(&mut app, "Lattice", ObjectKind::Lattice, &[]);
    select(&mut app, lattice);

    copy_all(&mut app, source);
    paste(&mut app, PasteMode::All);

    let names: Vec<&str> = stack(&app, lattice).names().collect();
    assert_eq!(names, vec!["Displace"]);

    let status = app.world().resource::<OperationStatus>();
    let summary = status.last_paste.as_ref().unwrap();
    assert_eq!(summary.modifiers_pasted, 1);
    assert_eq!(summary.failures, vec!["Bevel -> Lattice"]);
    assert_eq!(last_message(&app), "Pasted 1 modifier to 1 object");
}

#[test]
fn test_pasted_names_stay_unique() {
    let mut app = test_app();
    let source = spawn_object(&mut app, "Source", ObjectKind::Mesh, &[(ModifierType::Bevel, "")]);
    let target = spawn_object(&mut app, "Target", ObjectKind::Mesh, &[(ModifierType::Bevel, "")]);
    select(&mut app, target);

    copy_all(&mut app, source);
    paste(&mut app, PasteMode::All);
    paste(&mut app, PasteMode::All);

    let names: Vec<&str> = stack(&app, target).names().collect();
    assert_eq!(names, vec!["Bevel", "Bevel.001", "Bevel.002"]);
}

#[test]
fn test_paste_with_empty_clipboard() {
    let mut app = test_app();
    let target = spawn_object(&mut app, "Target", ObjectKind::Mesh, &[]);
    select(&mut app, target);

    paste(&mut app, PasteMode::All);

    assert!(stack(&app, target).is_empty());
    let status = app.world().resource::<OperationStatus>();
    assert!(status.last_paste.is_none());
    assert_eq!(
        status.last_report,
        Some(OperationReport::warning("No modifiers have been copied"))
    );
}

#[test]
fn test_paste_without_eligible_selection() {
    let mut app = test_app();
    let source = spawn_object(&mut app, "Source", ObjectKind::Mesh, &[(ModifierType::Bevel, "")]);
    let light = spawn_object(&mut app, "Light", ObjectKind::Light, &[]);
    select(&mut app, light);

    copy_all(&mut app, source);
    paste(&mut app, PasteMode::All);

    assert!(stack(&app, light).is_empty());
    assert_eq!(last_message(&app), "No selected objects can receive modifiers");
}

// Startup tests
#[test]
fn test_config_reset_is_reported_at_startup() {
    let mut app = test_app();
    app.insert_resource(ConfigResetNotification {
        show: true,
        reason: Some("Configuration file was corrupted".to_string()),
    });
    app.update();

    let status = app.world().resource::<OperationStatus>();
    assert_eq!(
        status.last_report,
        Some(OperationReport::warning(
            "Settings were reset to defaults: Configuration file was corrupted"
        ))
    );
    assert!(!app.world().resource::<ConfigResetNotification>().show);
}

#[test]
fn test_no_startup_report_without_reset() {
    let mut app = test_app();
    app.update();
    assert!(app.world().resource::<OperationStatus>().last_report.is_none());
}
