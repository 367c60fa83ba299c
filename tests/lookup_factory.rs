//! Tests for the lookup factory: argument validation and the resolving
//! closure it hands out.

use anyhow::{Result, ensure};
use conflate::{ConflateError, Entry, Lookup, VarMap, create_lookup, reference};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Entry::Null)]
#[case(Entry::from(1_i64))]
#[case(Entry::from("text"))]
#[case(Entry::List(vec![Entry::from(1_i64)]))]
#[case(reference("a"))]
fn rejects_anything_that_is_not_a_mapping(#[case] bad: Entry) {
    let err = create_lookup(bad).expect_err("non-mapping accepted");
    assert!(matches!(err, ConflateError::InvalidVariables { .. }));
}

#[test]
fn an_empty_map_is_valid_and_resolves_to_absent() -> Result<()> {
    let lookup = create_lookup(Entry::Map(VarMap::new()))?;
    ensure!(lookup.get("anything")?.is_none());
    Ok(())
}

#[test]
fn looks_keys_up_through_indirection() -> Result<()> {
    let entry: Entry = serde_json::from_value(json!({
        "secondary": "red",
        "accent": {"$ref": "secondary"}
    }))?;
    let lookup = create_lookup(entry)?;
    ensure!(lookup.get("accent")? == Some(Entry::from("red")));
    ensure!(lookup.get("secondary")? == Some(Entry::from("red")));
    Ok(())
}

#[test]
fn typed_construction_skips_validation() -> Result<()> {
    let mut map = VarMap::new();
    map.insert("k".to_owned(), Entry::from(true));
    let lookup = Lookup::new(map);
    ensure!(lookup.get("k")? == Some(Entry::from(true)));
    ensure!(lookup.variables().len() == 1);
    Ok(())
}

#[test]
fn each_call_resolves_afresh() -> Result<()> {
    // No caching: the lookup owns its map, and repeated calls agree.
    let entry: Entry = serde_json::from_value(json!({
        "n": {"$first": [{"$ref": "missing"}, 3]}
    }))?;
    let lookup = create_lookup(entry)?;
    ensure!(lookup.get("n")? == Some(Entry::from(3_i64)));
    ensure!(lookup.get("n")? == Some(Entry::from(3_i64)));
    Ok(())
}
