//! Reflective property copy engine.
//!
//! Walks an object's members, encodes each value into a portable,
//! type-tagged form and replays those encodings onto another object. Every
//! step is best-effort: one bad member never aborts a capture or a replay.
//!
//! ## Module Structure
//!
//! - [`bag`] - The [`PropertyBag`] trait and member descriptors
//! - [`value`] - Live values ([`PropertyValue`]) and encodings ([`EncodedValue`])
//! - [`classify`] - Capability-ordered classification of a value
//! - [`reference`] - `(kind, name)` tokens for pointers into the host graph
//! - [`skip`] - Names never captured or written back
//! - [`snapshot`] - [`PropertySnapshot`] and [`capture`]
//! - [`replay`] - [`apply`] and [`ApplyReport`]

mod bag;
mod classify;
mod error;
pub mod reference;
mod replay;
mod skip;
mod snapshot;
mod value;


pub use bag::{PropertyBag, PropertyDescriptor};
pub use error::PropertyError;
pub use replay::apply;
pub use skip::SkipList;
pub use snapshot::{PropertySnapshot, capture};
pub use value::{EncodedValue, Primitive, PropertyValue};

// Engine internals, used by tests and custom property bags
#[allow(unused_imports)]
pub use bag::MemberKind;
#[allow(unused_imports)]
pub use classify::{Probe, classify};
#[allow(unused_imports)]
pub use error::SkipReason;
#[allow(unused_imports)]
pub use replay::ApplyReport;
#[allow(unused_imports)]
pub use value::Opaque;
