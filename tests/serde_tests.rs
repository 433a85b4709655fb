#![cfg(all(feature = "serde", feature = "immutables"))]
//! Integration tests for serde support of the immutable collections.

use rstest::rstest;
use setwise::immutables::{ImmutableList, ImmutableMap, ImmutableSet};

#[rstest]
fn test_list_round_trip() {
    let list = ImmutableList::of([3, 1, 2]);
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[3,1,2]");
    let restored: ImmutableList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
}

#[rstest]
fn test_set_round_trip_keeps_insertion_order() {
    let set = ImmutableSet::of(["b", "a"]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["b","a"]"#);
    let restored: ImmutableSet<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.as_slice(), ["b".to_string(), "a".to_string()]);
}

#[rstest]
fn test_map_round_trip() {
    let map = ImmutableMap::try_copy_of([("one".to_string(), 1), ("two".to_string(), 2)]).unwrap();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"one":1,"two":2}"#);
    let restored: ImmutableMap<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, map);
}

#[rstest]
fn test_map_rejects_duplicate_keys() {
    let result: Result<ImmutableMap<String, i32>, _> = serde_json::from_str(r#"{"k":1,"k":2}"#);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Multiple entries with same key"));
}
