//! In-memory reference implementation of a live property object.
//!
//! [`SharedObject`] stores its properties in an insertion-ordered table behind an
//! `Arc<RwLock<…>>`. Cloning the handle is cheap and yields another reference to the
//! *same* object, so several adapters (or unrelated code) can mutate one object and
//! observe each other's writes immediately.
//!
//! # Interior Mutability
//!
//! All property operations take `&self` and synchronize through an `RwLock`. Each call
//! acquires the lock once; there is no cross-call isolation, so a sequence like
//! "enumerate names, then fetch each" can interleave with writers. That per-call
//! consistency is exactly the contract [`PropertyObject`] asks for.
//!
//! # Ordering
//!
//! Enumeration follows insertion order. Overwriting an existing property keeps its
//! position; deleting and re-adding moves the name to the end, as with JavaScript
//! own-property order.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;

use crate::object::{PropValue, PropertyObject};

/// A shareable, insertion-ordered, in-memory property object.
///
/// # Examples
///
/// ```rust
/// use livemap::{PropValue, PropertyObject, SharedObject};
///
/// let object = SharedObject::new();
/// object.set_property("answer", PropValue::I32(42));
///
/// // A clone is a second handle to the same object
/// let alias = object.clone();
/// assert_eq!(alias.get_property("answer"), PropValue::I32(42));
///
/// alias.delete_property("answer");
/// assert!(!object.has_property("answer"));
/// ```
#[derive(Clone, Default)]
pub struct SharedObject {
    properties: Arc<RwLock<IndexMap<String, PropValue>>>,
}

impl SharedObject {
    /// Creates a new object with no properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new object pre-populated from `entries`, in their iteration order.
    #[must_use]
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, PropValue)>,
    {
        let object = Self::new();
        {
            let mut properties = object.properties.write().expect("property table poisoned");
            for (name, value) in entries {
                properties.insert(name.into(), value);
            }
        }
        object
    }

    /// Returns `true` if `other` is a handle to the same underlying object.
    #[must_use]
    pub fn same_object(&self, other: &SharedObject) -> bool {
        Arc::ptr_eq(&self.properties, &other.properties)
    }
}

impl PropertyObject for SharedObject {
    fn property_names(&self) -> Vec<String> {
        let properties = self.properties.read().expect("property table poisoned");
        properties.keys().cloned().collect()
    }

    fn has_property(&self, name: &str) -> bool {
        let properties = self.properties.read().expect("property table poisoned");
        properties.contains_key(name)
    }

    fn get_property(&self, name: &str) -> PropValue {
        let properties = self.properties.read().expect("property table poisoned");
        properties.get(name).cloned().unwrap_or(PropValue::Undefined)
    }

    fn set_property(&self, name: &str, value: PropValue) {
        let mut properties = self.properties.write().expect("property table poisoned");
        properties.insert(name.to_string(), value);
    }

    fn delete_property(&self, name: &str) {
        let mut properties = self.properties.write().expect("property table poisoned");
        // shift_remove keeps the relative order of the remaining names
        properties.shift_remove(name);
    }
}

impl std::fmt::Debug for SharedObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let properties = self.properties.read().expect("property table poisoned");
        f.debug_map().entries(properties.iter()).finish()
    }
}
