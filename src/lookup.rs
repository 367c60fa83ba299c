//! The lookup-function factory: validate a backing map once, resolve keys
//! many times.

use crate::entry::{Entry, VarMap, reference};
use crate::error::ConflateError;
use crate::resolve::resolve_value;

/// A resolving lookup over a validated backing map.
///
/// Built with [`create_lookup`] or [`Lookup::new`]. Each [`Lookup::get`]
/// wraps the key in a [`Entry::Reference`] and resolves it; nothing is cached
/// between calls.
#[derive(Debug, Clone)]
pub struct Lookup {
    variables: VarMap,
}

impl Lookup {
    /// Build a lookup from an already-typed backing map.
    #[must_use]
    pub const fn new(variables: VarMap) -> Self {
        Self { variables }
    }

    /// Resolve a dotted key against the backing map.
    ///
    /// Returns `Ok(None)` when the key (or the chain it leads to) resolves to
    /// nothing; unknown keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConflateError::CyclicReference`] when resolution runs into a
    /// reference cycle.
    pub fn get(&self, key: &str) -> Result<Option<Entry>, ConflateError> {
        resolve_value(&self.variables, &reference(key))
    }

    /// Borrow the backing map.
    #[must_use]
    pub const fn variables(&self) -> &VarMap {
        &self.variables
    }
}

/// Build a [`Lookup`] from an untyped entry, validating it is a mapping.
///
/// ```
/// use conflate::{Entry, create_lookup, reference};
///
/// let mut vars = conflate::VarMap::new();
/// vars.insert("secondary".into(), Entry::from("red"));
/// vars.insert("accent".into(), reference("secondary"));
/// let lookup = create_lookup(Entry::Map(vars))?;
/// assert_eq!(lookup.get("accent")?, Some(Entry::from("red")));
/// # Ok::<(), conflate::ConflateError>(())
/// ```
///
/// # Errors
///
/// Returns [`ConflateError::InvalidVariables`] for anything that is not a
/// plain mapping: null, booleans, numbers, strings, lists and descriptors are
/// all rejected before any closure over them is handed out.
pub fn create_lookup(variables: Entry) -> Result<Lookup, ConflateError> {
    match variables {
        Entry::Map(map) => Ok(Lookup::new(map)),
        other => Err(ConflateError::InvalidVariables {
            found: kind_name(&other),
        }),
    }
}

const fn kind_name(entry: &Entry) -> &'static str {
    match entry {
        Entry::Null => "null",
        Entry::Bool(_) => "a boolean",
        Entry::Number(_) => "a number",
        Entry::String(_) => "a string",
        Entry::List(_) => "a list",
        Entry::Map(_) => "a mapping",
        Entry::Reference(_) => "a reference descriptor",
        Entry::FirstOf(_) => "a fallback descriptor",
        Entry::ObjectMerge(_) => "a merge descriptor",
    }
}
