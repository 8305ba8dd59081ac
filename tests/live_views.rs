//! Integration tests for map views over shared live objects.
//!
//! These tests exercise realistic scenarios where several adapters and outside code hold
//! handles to the same object: write-read consistency, the snapshot/live asymmetry of the
//! collection views, and iteration while the key set changes underneath the cursor.

use livemap::prelude::*;

/// Test the full accessor surface against one object: put/get consistency, removal of
/// present and absent keys, and size tracking.
#[test]
fn test_accessor_contract() -> Result<()> {
    let view: LiveMapView<SharedObject, i32> = LiveMapView::default();

    view.insert("a", 1)?;
    view.insert("b", 2)?;
    view.insert("c", 3)?;

    assert_eq!(view.len(), 3);
    assert_eq!(view.get("a")?, Some(1));
    assert_eq!(view.get("missing")?, None);

    assert_eq!(view.remove("b")?, Some(2));
    assert!(!view.contains_key("b"));
    assert_eq!(view.remove("b")?, None);
    assert_eq!(view.len(), 2);

    Ok(())
}

/// Test that draining the entry iterator produces exactly `len()` entries.
#[test]
fn test_entry_count_matches_len() -> Result<()> {
    let view: LiveMapView<SharedObject, i32> =
        LiveMapView::from_entries([("a", 1), ("b", 2), ("c", 3), ("d", 4)])?;

    let drained = view.entries().iter().count();
    assert_eq!(drained, view.len());

    view.clear();
    assert_eq!(view.entries().iter().count(), 0);
    assert_eq!(view.len(), 0);

    Ok(())
}

/// Test the iterator-removal scenario: remove the first produced entry, then verify the
/// survivors and the new size.
#[test]
fn test_iterator_remove_first_entry() -> Result<()> {
    let view: LiveMapView<SharedObject, i32> = LiveMapView::default();
    view.insert("a", 1)?;
    view.insert("b", 2)?;
    view.insert("c", 3)?;
    assert_eq!(view.len(), 3);

    let mut entries = view.entries().iter();
    let removed = entries.remove_next()?;
    assert_eq!(removed, "a");

    assert_eq!(view.len(), 2);
    assert!(!view.contains_key("a"));
    assert!(view.contains_key("b"));
    assert!(view.contains_key("c"));

    Ok(())
}

/// Test the snapshot contract of `keys()` against a direct mutation of the object.
#[test]
fn test_key_snapshot_vs_live_rederivation() -> Result<()> {
    let view: LiveMapView<SharedObject, String> =
        LiveMapView::from_entries([("first", "1".to_string())])?;

    let snapshot = view.keys();

    // Mutate the object directly, bypassing the view
    view.object().set_property("second", PropValue::from("2"));

    assert!(!snapshot.contains("second"));
    assert!(view.keys().contains("second"));

    Ok(())
}

/// Test constructing a view by copying from a plain map.
#[test]
fn test_from_entries_copies_source_map() -> Result<()> {
    let mut source = std::collections::BTreeMap::new();
    source.insert("x", 10);
    source.insert("y", 20);

    let view: LiveMapView<SharedObject, i32> = LiveMapView::from_entries(source)?;

    assert_eq!(view.entries().len(), 2);
    assert_eq!(view.get("x")?, Some(10));
    assert_eq!(view.get("y")?, Some(20));

    Ok(())
}

/// Test that `next_entry` on a fully drained cursor reports `NoSuchElement`.
#[test]
fn test_exhausted_cursor_errors() -> Result<()> {
    let view: LiveMapView<SharedObject, i32> = LiveMapView::from_entries([("only", 1)])?;

    let mut entries = view.entries().iter();
    while entries.has_next() {
        entries.next_entry()?;
    }

    assert!(matches!(entries.next_entry(), Err(Error::NoSuchElement)));
    Ok(())
}

/// Test that entry-level `set_value` writes through to the object and is visible to
/// subsequent reads on the same key, including through a second adapter.
#[test]
fn test_entry_set_value_writes_through() -> Result<()> {
    let object = SharedObject::new();
    let view: LiveMapView<SharedObject, i32> = LiveMapView::new(object.clone());
    let other: LiveMapView<SharedObject, i32> = LiveMapView::new(object);

    view.insert("k", 1)?;

    for entry in view.entries() {
        entry.set_value(99)?;
    }

    assert_eq!(view.get("k")?, Some(99));
    assert_eq!(other.get("k")?, Some(99));

    Ok(())
}

/// A delegating object that sets an extra property the first time a given key is
/// deleted, simulating a writer racing a multi-step operation.
struct InjectOnDelete {
    inner: SharedObject,
    trigger: &'static str,
}

impl PropertyObject for InjectOnDelete {
    fn property_names(&self) -> Vec<String> {
        self.inner.property_names()
    }

    fn has_property(&self, name: &str) -> bool {
        self.inner.has_property(name)
    }

    fn get_property(&self, name: &str) -> PropValue {
        self.inner.get_property(name)
    }

    fn set_property(&self, name: &str, value: PropValue) {
        self.inner.set_property(name, value);
    }

    fn delete_property(&self, name: &str) {
        self.inner.delete_property(name);
        if name == self.trigger && !self.inner.has_property("late") {
            self.inner.set_property("late", PropValue::Bool(true));
        }
    }
}

/// Test that `clear` sweeps its one-shot snapshot only: a property added while the sweep
/// is in progress survives.
#[test]
fn test_clear_misses_concurrent_addition() -> Result<()> {
    let object = InjectOnDelete {
        inner: SharedObject::from_entries([("a", PropValue::I32(1)), ("b", PropValue::I32(2))]),
        trigger: "a",
    };
    let view: LiveMapView<InjectOnDelete, i32> = LiveMapView::new(object);

    view.clear();

    assert!(!view.contains_key("a"));
    assert!(!view.contains_key("b"));
    assert!(view.object().has_property("late"));
    assert_eq!(view.len(), 1);

    Ok(())
}

/// Test mixed-type storage read through a raw `PropValue` view next to a typed view.
#[test]
fn test_raw_and_typed_views_coexist() -> Result<()> {
    let object = SharedObject::new();
    object.set_property("n", PropValue::I32(7));
    object.set_property("s", PropValue::from("seven"));

    let raw: LiveMapView<SharedObject, PropValue> = LiveMapView::new(object.clone());
    let ints: LiveMapView<SharedObject, i32> = LiveMapView::new(object);

    assert_eq!(raw.get("s")?, Some(PropValue::from("seven")));
    assert_eq!(ints.get("n")?, Some(7));
    assert!(ints.get("s").is_err());

    // The typed view still enumerates both properties; only the read coerces
    assert_eq!(ints.len(), 2);

    Ok(())
}
