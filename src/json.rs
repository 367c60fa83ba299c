//! JSON interop for entries and backing maps.
//!
//! Plain data maps to plain JSON. Descriptors use single-key marker objects:
//! `{"$ref": "color.primary"}`, `{"$first": [..]}` and `{"$merge": [..]}`,
//! so a whole backing map can be declared as a JSON document. A plain map
//! that needs a literal marker-shaped key escapes it with a second dollar
//! sign (`$$ref`); deserialization strips one `$` from any `$$`-prefixed key.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::entry::Entry;

const REF_KEY: &str = "$ref";
const FIRST_KEY: &str = "$first";
const MERGE_KEY: &str = "$merge";

impl Entry {
    /// Convert to a [`Value`], emitting descriptor markers.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (escape_key(key), value.to_json()))
                    .collect(),
            ),
            Self::Reference(name) => marker(REF_KEY, Value::String(name.clone())),
            Self::FirstOf(values) => marker(
                FIRST_KEY,
                Value::Array(values.iter().map(Self::to_json).collect()),
            ),
            Self::ObjectMerge(prop_sets) => marker(
                MERGE_KEY,
                Value::Array(prop_sets.iter().map(Self::to_json).collect()),
            ),
        }
    }
}

fn marker(key: &str, value: Value) -> Value {
    let mut object = Map::with_capacity(1);
    object.insert(key.to_owned(), value);
    Value::Object(object)
}

fn escape_key(key: &str) -> String {
    if key == REF_KEY || key == FIRST_KEY || key == MERGE_KEY || key.starts_with("$$") {
        format!("${key}")
    } else {
        key.to_owned()
    }
}

fn unescape_key(key: String) -> String {
    match key.strip_prefix("$$") {
        Some(rest) => format!("${rest}"),
        None => key,
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(object) => from_object(object),
        }
    }
}

fn from_object(object: Map<String, Value>) -> Entry {
    if object.len() == 1
        && let Some((key, value)) = object.iter().next()
    {
        match (key.as_str(), value) {
            (REF_KEY, Value::String(name)) => return Entry::Reference(name.clone()),
            (FIRST_KEY, Value::Array(items)) => {
                return Entry::FirstOf(items.iter().cloned().map(Entry::from).collect());
            }
            (MERGE_KEY, Value::Array(items)) => {
                return Entry::ObjectMerge(items.iter().cloned().map(Entry::from).collect());
            }
            _ => {}
        }
    }
    Entry::Map(
        object
            .into_iter()
            .map(|(key, value)| (unescape_key(key), Entry::from(value)))
            .collect(),
    )
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}
