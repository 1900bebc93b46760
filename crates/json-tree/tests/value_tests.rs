use json_tree::{append, serialize, JsonError, Map, Value};

fn obj(pairs: &[(&str, Value)]) -> Value {
    Value::Object(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<Map>(),
    )
}

// ============================================================================
// Keyed access
// ============================================================================

#[test]
fn keyed_access_vivifies_null_into_object() {
    let mut v = Value::Null;
    v.at_key("a").unwrap();
    assert_eq!(serialize(&v), r#"{"a":null}"#);
}

#[test]
fn keyed_access_returns_existing_entry() {
    let mut v = obj(&[("a", Value::Int(1))]);
    assert_eq!(*v.at_key("a").unwrap(), Value::Int(1));
    assert_eq!(v.len(), 1);
}

#[test]
fn keyed_access_nests() {
    let mut v = Value::Null;
    v.at_key("a")
        .unwrap()
        .at_key("b")
        .unwrap()
        .at_key("c")
        .unwrap()
        .assign(Value::Array(vec![]));
    assert_eq!(serialize(&v), r#"{"a":{"b":{"c":[]}}}"#);
}

#[test]
fn keyed_access_on_array_is_type_error() {
    let mut v = Value::Array(vec![]);
    let err = v.at_key("a").unwrap_err();
    assert_eq!(
        err,
        JsonError::Type {
            expected: "object",
            found: "array"
        }
    );
    assert_eq!(err.message(), "not an object");
    assert!(err.is_type_error());
}

#[test]
fn keyed_access_on_scalars_is_type_error() {
    for mut v in [
        Value::Bool(true),
        Value::Int(1),
        Value::Float(1.0),
        Value::String("s".into()),
    ] {
        assert!(v.at_key("k").unwrap_err().is_type_error());
    }
}

// ============================================================================
// Positional access
// ============================================================================

#[test]
fn positional_access_vivifies_null_into_array() {
    let mut v = Value::Null;
    v.at(0).unwrap();
    assert_eq!(serialize(&v), "[null]");
}

#[test]
fn positional_access_auto_extends_with_null() {
    let mut v = Value::Array(vec![]);
    v.at(5).unwrap().assign(1);
    assert_eq!(v.len(), 6);
    assert_eq!(serialize(&v), "[null,null,null,null,null,1]");
}

#[test]
fn positional_access_within_bounds_does_not_grow() {
    let mut v = Value::from(vec![1, 2, 3]);
    v.at(1).unwrap().assign("two");
    assert_eq!(serialize(&v), r#"[1,"two",3]"#);
}

#[test]
fn positional_access_on_object_is_type_error() {
    let mut v = obj(&[]);
    let err = v.at(0).unwrap_err();
    assert_eq!(err.message(), "not an array");
    assert_eq!(err.to_string(), "not an array (found object)");
}

#[test]
fn positional_access_past_addressable_range_is_an_error() {
    let mut v = Value::Null;
    let err = v.at(usize::MAX).unwrap_err();
    assert_eq!(err, JsonError::IndexOutOfRange { index: usize::MAX });
    assert_eq!(
        err.to_string(),
        format!("index {} out of range", usize::MAX)
    );
    assert_eq!(serialize(&v), "[]");
}

// ============================================================================
// Append
// ============================================================================

#[test]
fn append_vivifies_null_into_array() {
    let mut v = Value::Null;
    v.append(1).unwrap();
    v.append("x").unwrap();
    assert_eq!(serialize(&v), r#"[1,"x"]"#);
}

#[test]
fn append_on_string_is_type_error() {
    let mut v = Value::from("s");
    assert!(v.append(1).unwrap_err().is_type_error());
    assert_eq!(v, Value::from("s"));
}

#[test]
fn append_macro_preserves_argument_order() {
    let mut v = Value::Null;
    append!(v, 1, 1.1, true, (), "aaa").unwrap();
    assert_eq!(serialize(&v), r#"[1,1.100000,true,null,"aaa"]"#);
}

#[test]
fn append_macro_on_nested_node() {
    let mut v = Value::Null;
    append!(v.at_key("zz").unwrap(), 1, 2).unwrap();
    assert_eq!(serialize(&v), r#"{"zz":[1,2]}"#);
}

#[test]
fn append_all_extends_existing_array() {
    let mut v = Value::from(vec![1]);
    v.append_all(["2", "3"]).unwrap();
    assert_eq!(serialize(&v), r#"[1,"2","3"]"#);
}

#[test]
fn append_all_with_no_items_still_vivifies() {
    let mut v = Value::Null;
    v.append_all(Vec::<Value>::new()).unwrap();
    assert_eq!(serialize(&v), "[]");
}

// ============================================================================
// Append pair (insert-if-absent)
// ============================================================================

#[test]
fn append_pair_vivifies_null_into_object() {
    let mut v = Value::Null;
    v.append_pair("yy", "zz").unwrap();
    assert_eq!(serialize(&v), r#"{"yy":"zz"}"#);
}

#[test]
fn append_pair_never_overwrites_existing_key() {
    let mut v = Value::Null;
    v.append_pair("k", 1).unwrap();
    v.append_pair("k", 2).unwrap();
    assert_eq!(serialize(&v), r#"{"k":1}"#);
}

#[test]
fn assignment_through_key_does_overwrite() {
    let mut v = Value::Null;
    v.append_pair("k", 1).unwrap();
    v.at_key("k").unwrap().assign(2);
    assert_eq!(serialize(&v), r#"{"k":2}"#);
}

#[test]
fn append_pair_on_array_is_type_error() {
    let mut v = Value::from(vec![1]);
    let err = v.append_pair("k", 1).unwrap_err();
    assert_eq!(err.message(), "not an object");
}

// ============================================================================
// Remove
// ============================================================================

#[test]
fn remove_existing_key() {
    let mut v = obj(&[("a", Value::Int(1)), ("b", Value::Int(2))]);
    assert_eq!(v.remove("a").unwrap(), Some(Value::Int(1)));
    assert_eq!(serialize(&v), r#"{"b":2}"#);
}

#[test]
fn remove_missing_key_is_not_an_error() {
    let mut v = obj(&[("a", Value::Int(1))]);
    assert_eq!(v.remove("zzz").unwrap(), None);
    assert_eq!(v.len(), 1);
}

#[test]
fn remove_on_null_materializes_empty_object() {
    let mut v = Value::Null;
    assert_eq!(v.remove("a").unwrap(), None);
    assert_eq!(serialize(&v), "{}");
}

#[test]
fn remove_on_array_is_type_error() {
    let mut v = Value::from(vec![1]);
    assert!(v.remove("a").unwrap_err().is_type_error());
}

// ============================================================================
// Assign
// ============================================================================

#[test]
fn assign_replaces_variant_entirely() {
    let mut v = Value::from(vec![1, 2, 3]);
    v.assign(114);
    assert_eq!(v, Value::Int(114));
    v.assign(114.514);
    assert_eq!(v, Value::Float(114.514));
    v.assign("data");
    assert_eq!(v, Value::String("data".into()));
    v.assign(());
    assert!(v.is_null());
}

#[test]
fn assign_then_structured_access_requires_null() {
    let mut v = Value::Null;
    v.assign(true);
    assert!(v.at(0).is_err());
    v.assign(());
    assert!(v.at(0).is_ok());
}

// ============================================================================
// Index sugar
// ============================================================================

#[test]
fn index_mut_vivifies_like_accessors() {
    let mut v = Value::Null;
    v["a"]["b"]["c"] = Value::Array(vec![]);
    v["a"]["c"][1] = Value::from(1);
    v["xx"].append_pair("yy", "zz").unwrap();
    assert_eq!(
        serialize(&v),
        r#"{"a":{"b":{"c":[]},"c":[null,1]},"xx":{"yy":"zz"}}"#
    );
}

#[test]
fn index_read_only_misses_are_null() {
    let v = Value::from(vec![1]);
    assert!(v[5].is_null());
    assert!(v["key"].is_null());
    assert_eq!(v.len(), 1);
}

#[test]
#[should_panic(expected = "not an array")]
fn index_mut_panics_on_type_mismatch() {
    let mut v = Value::Bool(true);
    v[0] = Value::Null;
}

// ============================================================================
// Accessors and conversions
// ============================================================================

#[test]
fn read_accessors() {
    let v = obj(&[
        ("b", Value::Bool(true)),
        ("i", Value::Int(-3)),
        ("f", Value::Float(2.5)),
        ("s", Value::from("x")),
        ("a", Value::from(vec![1])),
    ]);
    assert_eq!(v.get("b").and_then(Value::as_bool), Some(true));
    assert_eq!(v.get("i").and_then(Value::as_i64), Some(-3));
    assert_eq!(v.get("f").and_then(Value::as_f64), Some(2.5));
    assert_eq!(v.get("s").and_then(Value::as_str), Some("x"));
    assert_eq!(v.get("a").and_then(|a| a.get_index(0)), Some(&Value::Int(1)));
    assert!(v.get("missing").is_none());
    assert!(v.as_object().is_some());
    assert!(v.as_array().is_none());
}

#[test]
fn numeric_conversions_pick_variant() {
    assert_eq!(Value::from(7u8), Value::Int(7));
    assert_eq!(Value::from(-7i32), Value::Int(-7));
    assert_eq!(Value::from(u32::MAX), Value::Int(u32::MAX as i64));
    assert_eq!(Value::from(0.5f32), Value::Float(0.5));
    assert_eq!(Value::from('c'), Value::String("c".into()));
}

#[test]
fn collect_into_object_keeps_first_duplicate() {
    let v: Value = vec![
        ("k".to_string(), Value::Int(1)),
        ("k".to_string(), Value::Int(2)),
    ]
    .into_iter()
    .collect();
    assert_eq!(serialize(&v), r#"{"k":1}"#);
}

#[test]
fn collect_into_array() {
    let v: Value = (1..=3).map(Value::from).collect();
    assert_eq!(serialize(&v), "[1,2,3]");
}

#[test]
fn len_and_is_empty() {
    assert_eq!(Value::Null.len(), 0);
    assert!(Value::Null.is_empty());
    assert!(Value::Array(vec![]).is_empty());
    assert_eq!(Value::from(vec![1, 2]).len(), 2);
    assert!(!obj(&[("a", Value::Null)]).is_empty());
}
