//! Lazy symbolic-reference resolution for in-memory configuration maps.
//!
//! A backing map ([`VarMap`]) holds plain values and descriptors: a named
//! [`reference`], a first-defined fallback chain ([`first_of`]) or a
//! deep-merge object composition ([`object_merge`]). [`resolve_value`]
//! follows indirection transitively until only concrete data remains, and
//! [`create_lookup`] wraps a validated map in a reusable resolving lookup.
//!
//! ```
//! use conflate::{Entry, Lookup, VarMap, first_of, reference};
//!
//! let mut vars = VarMap::new();
//! vars.insert("color.primary".into(), Entry::from("blue"));
//! vars.insert(
//!     "accent".into(),
//!     first_of([reference("color.accent"), reference("color.primary")]),
//! );
//!
//! let lookup = Lookup::new(vars);
//! assert_eq!(lookup.get("accent")?, Some(Entry::from("blue")));
//! # Ok::<(), conflate::ConflateError>(())
//! ```
//!
//! Backing maps can also be declared as JSON using `$ref`, `$first` and
//! `$merge` marker objects; see the [`Entry`] serde implementations.
//!
//! Resolution never mutates the map and caches nothing between calls.
//! Reference cycles are rejected with [`ConflateError::CyclicReference`]
//! rather than recursing without bound.

mod display;
mod entry;
mod error;
mod json;
mod lookup;
mod resolve;

pub use display::format;
pub use entry::{Entry, VarMap, first_of, object_merge, reference};
pub use error::ConflateError;
pub use lookup::{Lookup, create_lookup};
pub use resolve::resolve_value;
