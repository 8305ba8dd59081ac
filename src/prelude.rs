//! # livemap Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the livemap library. Import this module to get quick access to the essential
//! types for building and consuming live map views.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all livemap operations
pub use crate::Error;

/// The result type used throughout livemap
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The typed map-view adapter
pub use crate::map::LiveMapView;

/// In-memory, shareable live object implementation
pub use crate::object::SharedObject;

// ================================================================================================
// Object Capability and Values
// ================================================================================================

/// Capability interface consumed by every view
pub use crate::object::PropertyObject;

/// Native value representation and typed coercion
pub use crate::object::{PropType, PropValue};

// ================================================================================================
// Views and Iteration
// ================================================================================================

/// Entry view, cursor iterator, and live entries
pub use crate::map::{Entries, EntriesView, Entry};

/// Live value view and its iterator
pub use crate::map::{ValuesIter, ValuesView};
