//! The `Entry` value model: plain data plus the three reference descriptors.
//!
//! A backing map holds [`Entry`] values. An entry is either plain JSON-like
//! data (null, scalar, list, mapping) or one of three descriptors interpreted
//! by the resolver: [`Entry::Reference`], [`Entry::FirstOf`] and
//! [`Entry::ObjectMerge`]. Descriptors are immutable once constructed and
//! compare structurally.

use indexmap::IndexMap;
use serde_json::Number;

/// The backing map type: an insertion-ordered mapping from key to [`Entry`].
///
/// Keys may contain literal dots (flat namespacing such as `"color.primary"`)
/// or nest as [`Entry::Map`] values; dotted-path lookup dereferences both
/// forms, including paths that cross from one form into the other.
pub type VarMap = IndexMap<String, Entry>;

/// A value held by a backing map: plain data or a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// An explicit null. Present, and distinct from an absent lookup result.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer or floating-point number.
    Number(Number),
    /// A string.
    String(String),
    /// A list. Lists resolve as-is; their elements are not deep-resolved.
    List(Vec<Entry>),
    /// A nested mapping. Mapping values are deep-resolved.
    Map(VarMap),
    /// Descriptor: resolve to whatever the backing map holds at this dotted
    /// path.
    Reference(String),
    /// Descriptor: resolve each candidate in order and yield the first whose
    /// resolution is not absent.
    FirstOf(Vec<Entry>),
    /// Descriptor: resolve each candidate property set and merge the
    /// resulting mappings left-to-right, first set's keys winning.
    ObjectMerge(Vec<Entry>),
}

/// Construct a [`Entry::Reference`] to a dotted path.
///
/// ```
/// use conflate::{format, reference};
///
/// let r = reference("color.primary");
/// assert!(r.is_reference());
/// assert_eq!(format(&r), "<color.primary>");
/// ```
#[must_use]
pub fn reference(name: impl Into<String>) -> Entry {
    Entry::Reference(name.into())
}

/// Construct a [`Entry::FirstOf`] from ordered candidates.
///
/// Candidate order is preserved exactly; the empty list is legal and always
/// resolves to absent.
#[must_use]
pub fn first_of(values: impl IntoIterator<Item = Entry>) -> Entry {
    Entry::FirstOf(values.into_iter().collect())
}

/// Construct a [`Entry::ObjectMerge`] from ordered property sets.
///
/// Set order is preserved exactly; the empty list is legal and resolves to an
/// empty mapping.
#[must_use]
pub fn object_merge(prop_sets: impl IntoIterator<Item = Entry>) -> Entry {
    Entry::ObjectMerge(prop_sets.into_iter().collect())
}

impl Entry {
    /// Returns `true` only for [`Entry::Reference`].
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }

    /// Returns `true` only for [`Entry::FirstOf`].
    #[must_use]
    pub const fn is_first_of(&self) -> bool {
        matches!(self, Self::FirstOf(_))
    }

    /// Returns `true` only for [`Entry::ObjectMerge`].
    #[must_use]
    pub const fn is_object_merge(&self) -> bool {
        matches!(self, Self::ObjectMerge(_))
    }

    /// Returns `true` for any of the three descriptor variants.
    #[must_use]
    pub const fn is_descriptor(&self) -> bool {
        matches!(
            self,
            Self::Reference(_) | Self::FirstOf(_) | Self::ObjectMerge(_)
        )
    }

    /// Returns the nested mapping when this entry is [`Entry::Map`].
    #[must_use]
    pub const fn as_map(&self) -> Option<&VarMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for Entry {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Entry {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for Entry {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Entry {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Entry>> for Entry {
    fn from(value: Vec<Entry>) -> Self {
        Self::List(value)
    }
}

impl From<VarMap> for Entry {
    fn from(value: VarMap) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Entry>> From<Option<T>> for Entry {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
