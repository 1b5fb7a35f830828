//! Name lookups across the scene.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::property::reference::{OBJECT_KIND, VERTEX_GROUP_KIND};

use super::object::VertexGroups;

/// Live pointer to a named data-block in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataHandle {
    Object(Entity),
    VertexGroup { owner: Entity, index: usize },
}

impl DataHandle {
    /// Runtime type name of the pointed-at data.
    pub fn kind(&self) -> &'static str {
        match self {
            DataHandle::Object(_) => OBJECT_KIND,
            DataHandle::VertexGroup { .. } => VERTEX_GROUP_KIND,
        }
    }
}

/// Read-only view of the names in the scene graph.
pub trait EntityNamespace {
    fn find_object(&self, name: &str) -> Option<Entity>;

    fn object_name(&self, entity: Entity) -> Option<&str>;

    /// Index of `name` in `owner`'s vertex group table. `None` if the owner
    /// has no table or no such group.
    fn vertex_group_index(&self, owner: Entity, name: &str) -> Option<usize>;

    fn vertex_group_name(&self, owner: Entity, index: usize) -> Option<&str>;

    fn name_of(&self, handle: &DataHandle) -> Option<String> {
        match *handle {
            DataHandle::Object(entity) => self.object_name(entity),
            DataHandle::VertexGroup { owner, index } => self.vertex_group_name(owner, index),
        }
        .map(str::to_string)
    }
}

/// Scene namespace backed by the `Name` and [`VertexGroups`] components.
#[derive(SystemParam)]
pub struct SceneNames<'w, 's> {
    objects: Query<'w, 's, (Entity, &'static Name, Option<&'static VertexGroups>)>,
}

impl EntityNamespace for SceneNames<'_, '_> {
    fn find_object(&self, name: &str) -> Option<Entity> {
        self.objects
            .iter()
            .find(|(_, object_name, _)| object_name.as_str() == name)
            .map(|(entity, _, _)| entity)
    }

    fn object_name(&self, entity: Entity) -> Option<&str> {
        self.objects
            .get(entity)
            .ok()
            .map(|(_, name, _)| name.as_str())
    }

    fn vertex_group_index(&self, owner: Entity, name: &str) -> Option<usize> {
        let (_, _, groups) = self.objects.get(owner).ok()?;
        groups?.index_of(name)
    }

    fn vertex_group_name(&self, owner: Entity, index: usize) -> Option<&str> {
        let (_, _, groups) = self.objects.get(owner).ok()?;
        groups?.name(index)
    }
}
