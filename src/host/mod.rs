//! Host object model: objects, their modifier stacks and the name tables
//! references are resolved against.

mod modifier;
mod namespace;
mod object;
mod settings;
mod stack;

pub use modifier::{Modifier, ModifierType};
pub use namespace::{DataHandle, EntityNamespace, SceneNames};
pub use object::{HostObject, ObjectKind, Selected, VertexGroups};
#[allow(unused_imports)]
pub use settings::ModifierSettings;
pub use stack::{ModifierError, ModifierStack};
