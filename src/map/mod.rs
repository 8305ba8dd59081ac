//! Typed map views over live property objects.
//!
//! [`LiveMapView`] exposes a [`PropertyObject`] through a familiar associative-map
//! surface: size, membership tests, get/insert/remove, bulk copy, key/value/entry views,
//! and a removal-capable entry iterator. The view owns no data — every operation is a
//! stateless translation to property operations on the underlying object, which may be
//! mutated concurrently by other holders of a handle to the same object.
//!
//! # No Caching
//!
//! A view never caches keys or values across calls. Every observation is re-derived from
//! the object at the moment of the call, so a write through any handle is visible to
//! every view on its very next read. The flip side is that multi-step operations
//! (`clear`, `insert_all`, iteration) have no snapshot isolation; their behaviour under
//! concurrent mutation is specified per operation below and is deliberate.
//!
//! # Key Components
//!
//! - [`LiveMapView`] - The adapter itself
//! - [`ValuesView`] - Live, index-addressed view of the current values
//! - [`EntriesView`] - Set-shaped entry view with a cursor iterator
//! - [`Entries`] / [`Entry`] - Key-tracking cursor and the live entries it produces

mod entries;

pub use entries::{Entries, EntriesView, Entry};

use std::collections::HashSet;
use std::marker::PhantomData;

use crate::object::{PropType, PropertyObject};
use crate::Result;

/// A typed map view over a live keyed property object.
///
/// The view pairs one object handle `O` with a value type `T`; values are coerced
/// through [`PropType`] on every read and write. Several views (of the same or
/// different value types) may wrap handles to one object and will observe each other's
/// writes immediately.
///
/// # Examples
///
/// ```rust
/// use livemap::{LiveMapView, SharedObject};
///
/// let view: LiveMapView<SharedObject, i32> = LiveMapView::default();
/// view.insert("a", 1)?;
/// view.insert("b", 2)?;
///
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.get("a")?, Some(1));
/// assert_eq!(view.remove("a")?, Some(1));
/// assert!(!view.contains_key("a"));
/// # Ok::<(), livemap::Error>(())
/// ```
pub struct LiveMapView<O, T> {
    object: O,
    _value: PhantomData<fn() -> T>,
}

impl<O: PropertyObject + Default, T: PropType> Default for LiveMapView<O, T> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<O: PropertyObject, T: PropType> LiveMapView<O, T> {
    /// Wraps an existing object.
    ///
    /// The view holds the handle for its lifetime but never destroys the object; other
    /// handles to the same object remain valid and fully independent.
    pub fn new(object: O) -> Self {
        LiveMapView {
            object,
            _value: PhantomData,
        }
    }

    /// Creates a fresh object and pre-populates it from `entries`, in their iteration
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`](crate::Error::Coercion) if a supplied value has no
    /// native representation. Entries before the failing one are already committed.
    pub fn from_entries<K, I>(entries: I) -> Result<Self>
    where
        O: Default,
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        let view = Self::new(O::default());
        view.insert_all(entries)?;
        Ok(view)
    }

    /// Returns a reference to the underlying object handle.
    pub fn object(&self) -> &O {
        &self.object
    }

    /// Consumes the view and returns the underlying object handle.
    pub fn into_object(self) -> O {
        self.object
    }

    /// Number of properties currently set on the object.
    pub fn len(&self) -> usize {
        self.object.property_names().len()
    }

    /// Returns `true` if the object currently has no properties.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the object currently has a property named `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.object.has_property(key)
    }

    /// Returns `true` if any current property value coerces to a `T` equal to `value`.
    ///
    /// Linear scan in the object's enumeration order; the first match wins. Properties
    /// whose stored value does not coerce to `T` cannot equal the probe and are skipped.
    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        for name in self.object.property_names() {
            if let Ok(Some(stored)) = self.get(&name) {
                if stored == *value {
                    return true;
                }
            }
        }
        false
    }

    /// Reads the property named `key`.
    ///
    /// Returns `Ok(None)` if the object reports the property as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`](crate::Error::Coercion) if the stored value does not
    /// coerce to `T`.
    pub fn get(&self, key: &str) -> Result<Option<T>> {
        let raw = self.object.get_property(key);
        if raw.is_undefined() {
            return Ok(None);
        }
        T::from_prop(raw).map(Some)
    }

    /// Sets the property named `key` to `value` and returns the prior value, if any.
    ///
    /// The prior value is read first, then the property is written. The two steps are
    /// **not atomic**: a concurrent writer between them can make the returned prior
    /// value stale. Callers that need atomicity must synchronize externally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`](crate::Error::Coercion) if the prior stored value
    /// does not coerce to `T`; in that case the write does not happen.
    pub fn insert(&self, key: &str, value: T) -> Result<Option<T>> {
        let prior = self.get(key)?;
        self.object.set_property(key, value.into_prop());
        Ok(prior)
    }

    /// Deletes the property named `key` and returns the prior value, if any.
    ///
    /// Deleting an absent key returns `Ok(None)` and is a no-op. The read-then-delete
    /// sequence has the same non-atomicity caveat as [`LiveMapView::insert`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`](crate::Error::Coercion) if the stored value does not
    /// coerce to `T`; in that case the property is not deleted.
    pub fn remove(&self, key: &str) -> Result<Option<T>> {
        let prior = self.get(key)?;
        self.object.delete_property(key);
        Ok(prior)
    }

    /// Inserts every entry of `entries`, in the supplied iteration order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`LiveMapView::insert`]. There is no rollback:
    /// entries before the failing one are already committed to the object.
    pub fn insert_all<K, I>(&self, entries: I) -> Result<()>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        for (key, value) in entries {
            self.insert(key.as_ref(), value)?;
        }
        Ok(())
    }

    /// Deletes every property of the object.
    ///
    /// The name list is snapshotted once, then each name is deleted. Properties added
    /// concurrently during the sweep are not in the snapshot and survive.
    pub fn clear(&self) {
        for name in self.object.property_names() {
            self.object.delete_property(&name);
        }
    }

    /// Returns a **disconnected snapshot** of the current property names.
    ///
    /// The returned set is a point-in-time copy: mutating it has no effect on the
    /// object, and properties added or removed afterwards are not reflected. Call again
    /// for a fresh snapshot.
    pub fn keys(&self) -> HashSet<String> {
        self.object.property_names().into_iter().collect()
    }

    /// Returns a **live**, index-addressed view of the current values.
    ///
    /// Unlike [`LiveMapView::keys`], this view holds nothing: every access re-fetches
    /// the name list and reads through it. See [`ValuesView`] for the consistency
    /// hazard this implies under concurrent mutation.
    pub fn values(&self) -> ValuesView<'_, O, T> {
        ValuesView { view: self }
    }

    /// Returns the set-shaped entry view.
    ///
    /// Its size delegates to the live property count and its iterator is the
    /// key-tracking cursor described on [`Entries`].
    pub fn entries(&self) -> EntriesView<'_, O, T> {
        EntriesView::new(self)
    }
}

impl<O: PropertyObject, T: PropType> std::fmt::Debug for LiveMapView<O, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveMapView")
            .field("keys", &self.object.property_names())
            .finish()
    }
}

/// Live, index-addressed view of a map's values.
///
/// Every access re-fetches the object's name list and indexes into it, then reads the
/// value under that name. Because nothing is cached, the apparent contents can change
/// between two accesses if the object is mutated in between; iterating this view while
/// mutating the object has undefined ordering and consistency. This mirrors the
/// adapter-wide no-caching rule and is the deliberate counterpart to the snapshot
/// returned by [`LiveMapView::keys`].
pub struct ValuesView<'a, O, T> {
    view: &'a LiveMapView<O, T>,
}

impl<'a, O: PropertyObject, T: PropType> ValuesView<'a, O, T> {
    /// Current number of values (the live property count).
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Returns `true` if the object currently has no properties.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Reads the value at `index` in the current enumeration order.
    ///
    /// Returns `Ok(None)` if `index` is outside the current name list, or if the slot
    /// vanished between fetching the list and reading the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`](crate::Error::Coercion) if the stored value does not
    /// coerce to `T`.
    pub fn get(&self, index: usize) -> Result<Option<T>> {
        let names = self.view.object.property_names();
        match names.get(index) {
            Some(name) => self.view.get(name),
            None => Ok(None),
        }
    }

    /// Returns `true` if any current value equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.view.contains_value(value)
    }

    /// Iterates the values by re-deriving the name list on every step.
    pub fn iter(&self) -> ValuesIter<'a, O, T> {
        ValuesIter {
            view: self.view,
            index: 0,
        }
    }
}

impl<'a, O: PropertyObject, T: PropType> IntoIterator for &'_ ValuesView<'a, O, T> {
    type Item = Result<T>;
    type IntoIter = ValuesIter<'a, O, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`ValuesView`].
///
/// Positional, not keyed: each step re-fetches the name list and reads the value at the
/// next index. Slots that vanish between the two reads are skipped; coercion failures
/// are yielded as errors and iteration may continue past them.
pub struct ValuesIter<'a, O, T> {
    view: &'a LiveMapView<O, T>,
    index: usize,
}

impl<O: PropertyObject, T: PropType> Iterator for ValuesIter<'_, O, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let names = self.view.object.property_names();
            let name = names.get(self.index)?;
            self.index += 1;
            match self.view.get(name) {
                Ok(Some(value)) => return Some(Ok(value)),
                Ok(None) => {} // deleted between the list fetch and the read
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
