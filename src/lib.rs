// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # livemap
//!
//! [![Crates.io](https://img.shields.io/crates/v/livemap.svg)](https://crates.io/crates/livemap)
//! [![Documentation](https://docs.rs/livemap/badge.svg)](https://docs.rs/livemap)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/livemap/blob/main/LICENSE-APACHE)
//!
//! Typed map views over live, externally-mutable keyed property objects.
//!
//! `livemap` adapts any string-keyed property container — a scripting-engine object, a
//! registry, an in-memory table shared between components — to a familiar associative-map
//! surface. The adapter owns no data: every call translates directly to property
//! operations on the underlying object, so mutations by other holders of the same object
//! are visible on the very next read, and iteration stays correct even while the key set
//! changes underneath it.
//!
//! ## Features
//!
//! - **🔌 Capability-based** - Adapt anything that implements the small [`PropertyObject`] trait
//! - **🔄 Always current** - No caching layer; every observation re-derives from the live object
//! - **🔢 Typed access** - Values coerce through [`PropType`] on every read and write, strictly
//! - **🧭 Mutation-safe iteration** - A key-tracking cursor that survives concurrent deletion
//! - **📸 Explicit view contracts** - Snapshot key sets, live value and entry views
//! - **🛡️ No silent failures** - Lossy coercions and exhausted cursors are hard errors
//!
//! ## Quick Start
//!
//! Add `livemap` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! livemap = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use livemap::prelude::*;
//!
//! let view: LiveMapView<SharedObject, i32> = LiveMapView::default();
//! view.insert("one", 1)?;
//! view.insert("two", 2)?;
//!
//! assert_eq!(view.len(), 2);
//! assert_eq!(view.get("one")?, Some(1));
//! # Ok::<(), livemap::Error>(())
//! ```
//!
//! ### Shared Objects
//!
//! Several views can wrap handles to one object and observe each other's writes:
//!
//! ```rust
//! use livemap::{LiveMapView, PropValue, SharedObject};
//!
//! let object = SharedObject::new();
//! let ints: LiveMapView<SharedObject, i32> = LiveMapView::new(object.clone());
//! let raw: LiveMapView<SharedObject, PropValue> = LiveMapView::new(object);
//!
//! ints.insert("n", 5)?;
//! assert_eq!(raw.get("n")?, Some(PropValue::I32(5)));
//! # Ok::<(), livemap::Error>(())
//! ```
//!
//! ### Iterating While Mutating
//!
//! The entry iterator tracks the key it will produce next, never a position, so keys
//! deleted behind or ahead of the cursor do not make it skip or repeat entries:
//!
//! ```rust
//! use livemap::{LiveMapView, SharedObject};
//!
//! let view: LiveMapView<SharedObject, i32> =
//!     LiveMapView::from_entries([("a", 1), ("b", 2), ("c", 3)])?;
//!
//! let mut entries = view.entries().iter();
//! entries.remove_next()?; // deletes "a", cursor moves on to "b"
//!
//! assert_eq!(view.len(), 2);
//! assert_eq!(entries.next_entry()?.key(), "b");
//! # Ok::<(), livemap::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `livemap` is organized into two modules:
//!
//! - [`object`] - The [`PropertyObject`] capability interface, the [`PropValue`] native
//!   value representation with [`PropType`] coercion, and the in-memory [`SharedObject`]
//! - [`map`] - The [`LiveMapView`] adapter with its key, value, and entry views
//!
//! ### View Contracts
//!
//! The three collection views deliberately differ in how they relate to the live object:
//!
//! | View | Contract |
//! |------|----------|
//! | [`LiveMapView::keys`] | Disconnected snapshot; never reflects later mutation |
//! | [`LiveMapView::values`] | Live; re-derives the name list on every access |
//! | [`LiveMapView::entries`] | Live; cursor re-validates its key on every step |
//!
//! ### Concurrency
//!
//! The adapter adds no locking and no snapshot isolation. Whatever guarantees the
//! underlying object makes are inherited verbatim; multi-step operations (`clear`,
//! `insert_all`, iteration) interleave with concurrent writers in the specific,
//! documented ways described on each method. Callers that need atomic read-modify-write
//! must synchronize externally — see [`LiveMapView::insert`].

pub mod map;
pub mod object;
pub mod prelude;

mod error;

pub use error::{Error, Result};
pub use map::{Entries, EntriesView, Entry, LiveMapView, ValuesIter, ValuesView};
pub use object::{PropType, PropValue, PropertyObject, SharedObject};
