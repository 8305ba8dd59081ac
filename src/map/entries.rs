//! Entry view and the key-tracking cursor iterator.
//!
//! Iterating a live object is the one place the adapter keeps any state at all: a
//! cursor remembering the key of the entry to produce next. The cursor deliberately
//! holds the **key string, never a position** — positions shift when keys ahead of the
//! cursor are deleted, so an index-based cursor would skip or repeat entries under
//! concurrent deletion. Every step re-fetches the current name list and re-resolves the
//! remembered key by linear search, so the cursor is valid exactly as long as its key is
//! still present.

use crate::map::LiveMapView;
use crate::object::{PropType, PropertyObject};
use crate::{Error, Result};

/// Set-shaped view of a map's entries.
///
/// The view holds nothing: [`EntriesView::len`] delegates to the live property count,
/// and each call to [`EntriesView::iter`] starts a fresh [`Entries`] cursor at the
/// first property currently enumerated.
pub struct EntriesView<'a, O, T> {
    view: &'a LiveMapView<O, T>,
}

impl<'a, O: PropertyObject, T: PropType> EntriesView<'a, O, T> {
    pub(crate) fn new(view: &'a LiveMapView<O, T>) -> Self {
        EntriesView { view }
    }

    /// Current number of entries (the live property count).
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Returns `true` if the object currently has no properties.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Starts a cursor at the first property in the current enumeration order.
    pub fn iter(&self) -> Entries<'a, O, T> {
        Entries::new(self.view)
    }
}

impl<'a, O: PropertyObject, T: PropType> IntoIterator for EntriesView<'a, O, T> {
    type Item = Entry<'a, O, T>;
    type IntoIter = Entries<'a, O, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One entry of a map view, bound to a key.
///
/// An entry is live on both sides: [`Entry::value`] reads the current value under the
/// key, and [`Entry::set_value`] writes through to the underlying object, visible to
/// every other view and handle immediately. An entry outlives nothing — if the key is
/// deleted after the entry was produced, `value` reports `Ok(None)`.
pub struct Entry<'a, O, T> {
    view: &'a LiveMapView<O, T>,
    key: String,
}

impl<O: PropertyObject, T: PropType> Entry<'_, O, T> {
    /// The key this entry is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Consumes the entry and returns its key.
    pub fn into_key(self) -> String {
        self.key
    }

    /// Reads the current value under this entry's key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`] if the stored value does not coerce to `T`.
    pub fn value(&self) -> Result<Option<T>> {
        self.view.get(&self.key)
    }

    /// Writes `value` under this entry's key and returns the prior value, if any.
    ///
    /// Equivalent to [`LiveMapView::insert`] with this entry's key, including the
    /// non-atomic read-then-write caveat.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`] if the prior stored value does not coerce to `T`.
    pub fn set_value(&self, value: T) -> Result<Option<T>> {
        self.view.insert(&self.key, value)
    }
}

impl<O: PropertyObject, T: PropType> std::fmt::Debug for Entry<'_, O, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry").field("key", &self.key).finish()
    }
}

/// Cursor iterator over a map's entries.
///
/// # Semantics Under Concurrent Mutation
///
/// The cursor remembers only the key it will produce next and re-validates it against
/// the freshly fetched name list on every step:
///
/// - Deleting a key **behind** the cursor has no effect on the remaining iteration.
/// - Deleting a key **ahead of** the cursor simply drops it from the iteration.
/// - Deleting the **remembered key itself** ends the iteration: [`Entries::has_next`]
///   reports `false` and [`Entries::next_entry`] reports [`Error::NoSuchElement`]. This
///   is an exhausted-iterator condition, not a fault.
/// - Keys **added** during iteration appear if the object enumerates them after the
///   remembered key.
///
/// The `Iterator` impl folds the error case into `None`, so `for` loops end cleanly
/// either way; use [`Entries::next_entry`] directly to distinguish exhaustion.
pub struct Entries<'a, O, T> {
    view: &'a LiveMapView<O, T>,
    current: Option<String>,
}

impl<'a, O: PropertyObject, T: PropType> Entries<'a, O, T> {
    pub(crate) fn new(view: &'a LiveMapView<O, T>) -> Self {
        let current = view.object().property_names().into_iter().next();
        Entries { view, current }
    }

    /// Returns `true` if the remembered key is still present in the object.
    ///
    /// Re-validates against the live name list on every call; a `true` result can still
    /// be invalidated by a concurrent deletion before the next [`Entries::next_entry`].
    pub fn has_next(&self) -> bool {
        match &self.current {
            Some(current) => self
                .view
                .object()
                .property_names()
                .iter()
                .any(|name| name == current),
            None => false,
        }
    }

    /// Produces the entry for the remembered key and advances the cursor.
    ///
    /// The name list is re-fetched and the remembered key re-located by linear search.
    /// The cursor then advances to the name following it in that just-fetched list, or
    /// becomes exhausted at the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] if the cursor is exhausted, or if the remembered
    /// key was deleted concurrently since the previous step. In the latter case the
    /// cursor becomes exhausted; it does not attempt to resynchronize.
    pub fn next_entry(&mut self) -> Result<Entry<'a, O, T>> {
        let Some(current) = self.current.take() else {
            return Err(Error::NoSuchElement);
        };

        let names = self.view.object().property_names();
        let Some(index) = names.iter().position(|name| *name == current) else {
            return Err(Error::NoSuchElement);
        };

        self.current = names.get(index + 1).cloned();
        Ok(Entry {
            view: self.view,
            key: current,
        })
    }

    /// Produces the next entry and deletes its key from the object.
    ///
    /// This always advances **and** deletes the just-advanced-to entry; there is no
    /// "delete the previously returned entry" operation. Because the advancement was
    /// computed from the name list before the deletion, the deleted key's successor is
    /// produced next, not skipped — provided no other key was deleted concurrently.
    ///
    /// Returns the deleted key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] under the same conditions as
    /// [`Entries::next_entry`].
    pub fn remove_next(&mut self) -> Result<String> {
        let entry = self.next_entry()?;
        self.view.object().delete_property(entry.key());
        Ok(entry.into_key())
    }
}

impl<'a, O: PropertyObject, T: PropType> Iterator for Entries<'a, O, T> {
    type Item = Entry<'a, O, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().ok()
    }
}
