//! Portable `(kind, name)` tokens for pointers into the host graph.

use bevy::prelude::*;

use crate::host::{DataHandle, EntityNamespace};

use super::value::EncodedValue;

/// Runtime type name of object references.
pub const OBJECT_KIND: &str = "Object";

/// Runtime type name of vertex group references.
pub const VERTEX_GROUP_KIND: &str = "VertexGroup";

/// Reference kinds that can be looked up again at paste time.
///
/// Anything else fails closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Object,
    VertexGroup,
}

impl ReferenceKind {
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            OBJECT_KIND => Some(ReferenceKind::Object),
            VERTEX_GROUP_KIND => Some(ReferenceKind::VertexGroup),
            _ => None,
        }
    }
}

/// Capture a handle as `Reference { kind, name }`.
pub fn encode(handle: &DataHandle, namespace: &dyn EntityNamespace) -> EncodedValue {
    match namespace.name_of(handle) {
        Some(name) => EncodedValue::Reference {
            kind: handle.kind().to_string(),
            name,
        },
        None => {
            debug!("Dangling {} handle, cannot encode reference", handle.kind());
            EncodedValue::Unrepresentable
        }
    }
}

/// Look a reference up again in the destination's namespace.
///
/// `owner` is the entity receiving the value; vertex groups are searched in
/// its own group table. Returns `None` for unknown kinds and missing names.
pub fn resolve(
    kind: &str,
    name: &str,
    owner: Entity,
    namespace: &dyn EntityNamespace,
) -> Option<DataHandle> {
    match ReferenceKind::from_kind(kind)? {
        ReferenceKind::Object => namespace.find_object(name).map(DataHandle::Object),
        ReferenceKind::VertexGroup => namespace
            .vertex_group_index(owner, name)
            .map(|index| DataHandle::VertexGroup { owner, index }),
    }
}
