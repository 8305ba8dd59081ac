use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers the failure modes of a thin, synchronous adapter: there is no recovery
/// state to fall back to, so every error is surfaced to the caller immediately and affects
/// only the triggering call. Prior and subsequent independent calls are unaffected — the
/// adapter holds no state of its own beyond an ephemeral iteration cursor.
///
/// # Error Categories
///
/// ## Iteration Errors
/// - [`Error::NoSuchElement`] - Cursor advanced past the available entries
///
/// ## Value Conversion Errors
/// - [`Error::Coercion`] - A value could not be converted to or from the requested type
///
/// # Examples
///
/// ```rust
/// use livemap::{Error, LiveMapView, SharedObject};
///
/// let view: LiveMapView<SharedObject, i32> = LiveMapView::default();
/// let mut entries = view.entries().iter();
///
/// match entries.next_entry() {
///     Ok(entry) => println!("first key: {}", entry.key()),
///     Err(Error::NoSuchElement) => println!("object has no properties"),
///     Err(e) => eprintln!("unexpected: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The entry cursor has no element to produce.
    ///
    /// Raised when `next_entry` is called on an exhausted cursor, or when the cursor's
    /// remembered key was deleted from the underlying object between two cursor steps by
    /// another holder of the object. The second case can occur even immediately after
    /// `has_next` returned `true`; it is an exhausted-iterator condition, not a crash.
    #[error("No more elements in the property enumeration")]
    NoSuchElement,

    /// A value could not be coerced between the object's native representation and the
    /// view's value type.
    ///
    /// Occurs on the read path when a stored property value does not convert to the
    /// requested type (for example a string property read through an `i32` view), and on
    /// the write path when a supplied value has no native representation. Lossy numeric
    /// narrowing is rejected rather than truncated.
    ///
    /// # Fields
    ///
    /// * `from` - Type name of the value that was offered
    /// * `to` - Type name of the requested destination
    #[error("Cannot coerce {from} to {to}")]
    Coercion {
        /// Type name of the source value
        from: &'static str,
        /// Type name of the requested destination type
        to: &'static str,
    },
}

/// Specialized `Result` type for this crate's operations.
pub type Result<T> = std::result::Result<T, Error>;
