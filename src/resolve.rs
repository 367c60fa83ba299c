//! Recursive resolution of entries against a backing map.
//!
//! [`resolve_value`] interprets the three descriptor variants and deep-resolves
//! plain mappings, returning a fully concrete value or `None` for absent.
//! Dotted-path lookup walks a reference path segment by segment and re-roots
//! whenever an intermediate value turns out to be a descriptor, so a path may
//! drill into the resolution of another reference.

use tracing::trace;

use crate::entry::{Entry, VarMap};
use crate::error::ConflateError;

/// Resolve `entry` against `variables` to a fully concrete value.
///
/// Returns `Ok(None)` when the entry (or the reference chain it starts)
/// resolves to nothing. An explicit [`Entry::Null`] is a present value and
/// resolves to `Some(Entry::Null)`.
///
/// The backing map is never mutated; every call is independent and no
/// resolution results are cached across calls.
///
/// # Errors
///
/// Returns [`ConflateError::CyclicReference`] when a reference chain loops
/// back on itself.
pub fn resolve_value(
    variables: &VarMap,
    entry: &Entry,
) -> Result<Option<Entry>, ConflateError> {
    Resolver::new(variables).resolve(entry)
}

/// Traversal root for dotted-path lookup.
///
/// Starts at the backing map and is replaced by the resolution of any
/// intermediate descriptor encountered along the path. A root that resolved
/// to absent or to a non-mapping yields absent for every later segment.
enum Root<'a> {
    Vars(&'a VarMap),
    Value(Entry),
    Dead,
}

struct Resolver<'a> {
    variables: &'a VarMap,
    /// Reference paths currently being dereferenced, outermost first.
    in_flight: Vec<String>,
}

impl<'a> Resolver<'a> {
    const fn new(variables: &'a VarMap) -> Self {
        Self {
            variables,
            in_flight: Vec::new(),
        }
    }

    fn resolve(&mut self, entry: &Entry) -> Result<Option<Entry>, ConflateError> {
        match entry {
            Entry::FirstOf(values) => self.resolve_first_of(values),
            Entry::ObjectMerge(prop_sets) => self.resolve_merge(prop_sets),
            Entry::Reference(name) => self.resolve_reference(name),
            Entry::Map(map) => self.resolve_map(map).map(Some),
            other => Ok(Some(other.clone())),
        }
    }

    /// First non-absent candidate wins; later candidates are never evaluated.
    fn resolve_first_of(
        &mut self,
        values: &[Entry],
    ) -> Result<Option<Entry>, ConflateError> {
        for value in values {
            if let Some(resolved) = self.resolve(value)? {
                return Ok(Some(resolved));
            }
        }
        Ok(None)
    }

    /// Left-to-right merge of resolved property sets, first set's keys win.
    ///
    /// A set that resolves to absent or to a non-mapping contributes no keys.
    /// Set values are resolved before merging, so a value that resolves to
    /// absent leaves its key free for a later set to supply.
    fn resolve_merge(
        &mut self,
        prop_sets: &[Entry],
    ) -> Result<Option<Entry>, ConflateError> {
        let mut merged = VarMap::new();
        for prop_set in prop_sets {
            let Some(Entry::Map(resolved)) = self.resolve(prop_set)? else {
                continue;
            };
            for (key, value) in resolved {
                merged.entry(key).or_insert(value);
            }
        }
        Ok(Some(Entry::Map(merged)))
    }

    fn resolve_reference(&mut self, name: &str) -> Result<Option<Entry>, ConflateError> {
        if self.in_flight.iter().any(|path| path == name) {
            let cycle = self
                .in_flight
                .iter()
                .map(String::as_str)
                .chain([name])
                .collect::<Vec<_>>()
                .join(" -> ");
            trace!(%cycle, "rejecting cyclic reference");
            return Err(ConflateError::CyclicReference { cycle });
        }
        self.in_flight.push(name.to_owned());
        trace!(path = name, "dereferencing");
        let raw = self.traverse(name)?;
        let resolved = match raw {
            Some(value) => self.resolve(&value)?,
            None => None,
        };
        self.in_flight.pop();
        Ok(resolved)
    }

    /// Deep-resolve a plain mapping, preserving key order.
    ///
    /// Keys whose values resolve to absent are dropped.
    fn resolve_map(&mut self, map: &VarMap) -> Result<Entry, ConflateError> {
        let mut out = VarMap::with_capacity(map.len());
        for (key, value) in map {
            if let Some(resolved) = self.resolve(value)? {
                out.insert(key.clone(), resolved);
            }
        }
        Ok(Entry::Map(out))
    }

    /// Walk a dotted path, re-rooting through intermediate descriptors.
    ///
    /// Accumulates segments since the last re-root and looks the accumulated
    /// sub-path up against the current root each step. A descriptor found at
    /// any step is resolved immediately and becomes the new root, with the
    /// accumulated sub-path reset. The raw value found by the final step is
    /// returned unresolved; the caller applies the final resolution pass.
    fn traverse(&mut self, path: &str) -> Result<Option<Entry>, ConflateError> {
        let mut root = Root::Vars(self.variables);
        let mut acc: Vec<&str> = Vec::new();
        let mut last: Option<Entry> = None;
        for segment in path.split('.') {
            acc.push(segment);
            last = match &root {
                Root::Vars(map) => path_get(map, &acc).cloned(),
                Root::Value(Entry::Map(map)) => path_get(map, &acc).cloned(),
                Root::Value(_) | Root::Dead => None,
            };
            if let Some(found) = &last
                && found.is_descriptor()
            {
                trace!(sub_path = acc.join("."), "re-rooting through descriptor");
                root = self.resolve(found)?.map_or(Root::Dead, Root::Value);
                acc.clear();
            }
        }
        Ok(last)
    }
}

/// Look up an accumulated sub-path within one traversal root.
///
/// The whole joined path is tried as a single flat key first, so keys that
/// contain literal dots shadow nested structure. Failing that, the path is
/// split at each prefix in turn (shortest first) and the remainder looked up
/// inside the nested mapping found there, which lets a path cross from
/// flat-dot keys into nested maps mid-way.
fn path_get<'m>(map: &'m VarMap, segments: &[&str]) -> Option<&'m Entry> {
    let joined = segments.join(".");
    if let Some(found) = map.get(joined.as_str()) {
        return Some(found);
    }
    for split in 1..segments.len() {
        let prefix = segments[..split].join(".");
        if let Some(Entry::Map(inner)) = map.get(prefix.as_str())
            && let Some(found) = path_get(inner, &segments[split..])
        {
            return Some(found);
        }
    }
    None
}
