//! Headless walk-through: build a small scene, copy from one object and
//! paste onto the selection.

use bevy::prelude::*;

use crate::clipboard::{
    ClipboardStore, CopyCheckedModifiers, CopySingleModifier, ModifierChecklist,
    OpenModifierChecklist, OperationStatus, PasteMode, PasteModifiers,
};
use crate::host::{
    DataHandle, HostObject, ModifierError, ModifierStack, ModifierType, ObjectKind, Selected,
    VertexGroups,
};
use crate::property::{PropertyBag, PropertyError, PropertyValue};

struct DemoScene {
    cube: Entity,
    targets: Vec<Entity>,
}

#[derive(Debug, thiserror::Error)]
enum SceneError {
    #[error(transparent)]
    Modifier(#[from] ModifierError),
    #[error(transparent)]
    Property(#[from] PropertyError),
}

fn spawn_scene(world: &mut World) -> Result<DemoScene, SceneError> {
    let empty = world
        .spawn((Name::new("Empty"), HostObject::new(ObjectKind::Empty)))
        .id();

    let cube = world
        .spawn((
            Name::new("Cube"),
            HostObject::new(ObjectKind::Mesh),
            VertexGroups::new(["Top", "Bottom"]),
        ))
        .id();

    let mut stack = ModifierStack::default();
    {
        let array = stack.add(ObjectKind::Mesh, ModifierType::Array, "")?;
        array.write("count", PropertyValue::Int(4))?;
        array.write("use_object_offset", PropertyValue::Bool(true))?;
        array.write("offset_object", PropertyValue::Data(DataHandle::Object(empty)))?;
    }
    {
        let bevel = stack.add(ObjectKind::Mesh, ModifierType::Bevel, "")?;
        bevel.write("width", PropertyValue::Float(0.05))?;
        bevel.write("segments", PropertyValue::Int(3))?;
    }
    {
        let weights = stack.add(ObjectKind::Mesh, ModifierType::VertexWeightEdit, "Weights")?;
        weights.write(
            "vertex_group",
            PropertyValue::Data(DataHandle::VertexGroup {
                owner: cube,
                index: 0,
            }),
        )?;
    }
    {
        let transfer = stack.add(ObjectKind::Mesh, ModifierType::DataTransfer, "")?;
        transfer.write("use_vert_data", PropertyValue::Bool(true))?;
        transfer.write("data_types_verts", PropertyValue::flags(["VGROUP_WEIGHTS"]))?;
    }
    world.entity_mut(cube).insert(stack);

    let targets = vec![
        world
            .spawn((
                Name::new("Sphere"),
                HostObject::new(ObjectKind::Mesh),
                VertexGroups::new(["Top"]),
                Selected,
            ))
            .id(),
        world
            .spawn((Name::new("Curve"), HostObject::new(ObjectKind::Curve), Selected))
            .id(),
        world
            .spawn((Name::new("Camera"), HostObject::new(ObjectKind::Camera), Selected))
            .id(),
    ];

    Ok(DemoScene { cube, targets })
}

fn log_status(world: &World) {
    let status = world.resource::<OperationStatus>();
    if let Some(paste) = &status.last_paste {
        debug!("Last paste: {:?}", paste);
    }
}

fn log_stacks(world: &mut World, entities: &[Entity]) {
    let mut query = world.query::<(&Name, &ModifierStack)>();
    for entity in entities {
        if let Ok((name, stack)) = query.get(world, *entity) {
            let labels: Vec<String> = stack.iter().map(|m| m.label()).collect();
            info!("{}: [{}]", name, labels.join(", "));
        }
    }
}

/// Drive `app` through checklist, copy and paste.
pub fn run(app: &mut App) {
    // First update runs Startup (config load).
    app.update();

    let scene = match spawn_scene(app.world_mut()) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Failed to build demo scene: {}", e);
            return;
        }
    };

    app.world_mut()
        .write_message(OpenModifierChecklist { source: scene.cube });
    app.update();

    app.world_mut()
        .resource_mut::<ModifierChecklist>()
        .set_enabled("Weights", false);
    app.world_mut().write_message(CopyCheckedModifiers);
    app.update();

    let store = app.world().resource::<ClipboardStore>();
    info!("{}", store.summary());
    match serde_json::to_string_pretty(store) {
        Ok(json) => debug!("Clipboard contents:\n{}", json),
        Err(e) => error!("Failed to serialize clipboard: {}", e),
    }

    app.world_mut().write_message(PasteModifiers {
        mode: PasteMode::All,
    });
    app.update();
    log_status(app.world());
    log_stacks(app.world_mut(), &scene.targets);

    app.world_mut().write_message(CopySingleModifier {
        source: scene.cube,
        name: "Weights".to_string(),
    });
    app.update();
    app.world_mut().write_message(PasteModifiers {
        mode: PasteMode::Latest,
    });
    app.update();
    log_status(app.world());
    log_stacks(app.world_mut(), &scene.targets);
}
