//! Rendering entries and descriptors to debug strings.
//!
//! Purely presentational: formatting never consults a backing map and never
//! resolves anything. References render as `<name>`, fallback chains as
//! `#first[..]` and merge descriptors as the opaque placeholder
//! `#object{...}`.

use std::fmt;

use crate::entry::Entry;

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::List(items) => write_joined(f, items.iter()),
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Reference(name) => write!(f, "<{name}>"),
            Self::FirstOf(values) => {
                f.write_str("#first[")?;
                write_joined(f, values.iter())?;
                f.write_str("]")
            }
            Self::ObjectMerge(_) => f.write_str("#object{...}"),
        }
    }
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Entry>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Render an entry to its debug string form.
///
/// Equivalent to `entry.to_string()`; provided as a free function to mirror
/// the constructor and predicate surface.
#[must_use]
pub fn format(entry: &Entry) -> String {
    entry.to_string()
}
