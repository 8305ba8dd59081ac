//! Live keyed property objects and their value representation.
//!
//! A *live object* is an externally-owned, mutable, string-keyed property container. It
//! is the sole source of truth for the adapters in [`crate::map`]: nothing in this crate
//! caches its keys or values across calls, so every observation reflects the object at
//! the moment of the call and a write through one handle is visible to every other
//! holder on their very next read.
//!
//! # Key Components
//!
//! - [`PropertyObject`] - The capability interface an object must provide
//! - [`PropValue`] - The object's native (opaque) value representation
//! - [`PropType`] - Two-way coercion between [`PropValue`] and typed views
//! - [`SharedObject`] - In-memory, insertion-ordered reference implementation

mod shared;
mod value;

pub use shared::SharedObject;
pub use value::{PropType, PropValue};

/// Capability interface of a live keyed property object.
///
/// All methods take `&self`; implementations that support mutation through shared
/// handles do so with interior mutability (see [`SharedObject`]). The adapter layer
/// imposes no synchronization of its own, so whatever concurrency guarantees an
/// implementation makes are inherited verbatim by every view built on top of it.
pub trait PropertyObject {
    /// Returns the names of all currently-set properties.
    ///
    /// The order is implementation-defined but must be stable and repeatable across
    /// back-to-back calls with no intervening mutation. Iteration and index-addressed
    /// views rely on that stability; they never impose an ordering of their own.
    fn property_names(&self) -> Vec<String>;

    /// Returns `true` if a property with the given name is currently set.
    fn has_property(&self, name: &str) -> bool;

    /// Returns the value of the named property, or [`PropValue::Undefined`] if the
    /// property is not currently set.
    fn get_property(&self, name: &str) -> PropValue;

    /// Sets the named property, creating it if absent.
    fn set_property(&self, name: &str, value: PropValue);

    /// Deletes the named property. Deleting an absent property is a no-op.
    fn delete_property(&self, name: &str);
}
