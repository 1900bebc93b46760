//! Canonical serializer: converts a [`Value`] tree into JSON text.
//!
//! The output is whitespace-free and deterministic:
//!
//! - **Objects** emit entries in key-sorted order (the `BTreeMap` order)
//! - **Floats** always use fixed-point notation with six fractional digits
//!   (`1.5` → `1.500000`, `1.3e9` → `1300000000.000000`), never an exponent
//! - **Strings** escape `\n`, `\t`, `\r`, `\\`, `'` and `"` only; every other
//!   character, including other control characters and non-ASCII text, is
//!   written as-is
//!
//! The single-quote escape (`\'`) is not part of RFC 8259. It is kept because
//! existing consumers of this output format expect it, and the parser accepts
//! it back.
//!
//! # Example
//! ```
//! use json_tree::{parse, serialize};
//! let value = parse(r#"{ "b": [1, 2.5], "a": "it's" }"#).unwrap();
//! assert_eq!(serialize(&value), r#"{"a":"it\'s","b":[1,2.500000]}"#);
//! ```

use std::fmt;
use std::io;

use crate::value::{Map, Value};

/// Serialize a value tree into canonical JSON text.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    serialize_into(value, &mut out);
    out
}

/// Append the canonical serialization of `value` to `out`.
pub fn serialize_into(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&format_float(*f)),
        Value::String(s) => serialize_string(s, out),
        Value::Array(arr) => serialize_array(arr, out),
        Value::Object(map) => serialize_object(map, out),
    }
}

/// Write the canonical serialization of `value` to an output sink.
///
/// Produces exactly the bytes of [`serialize`]; nothing is appended.
pub fn write_to<W: io::Write>(value: &Value, mut writer: W) -> io::Result<()> {
    writer.write_all(serialize(value).as_bytes())
}

/// Fixed six-digit fixed-point rendering, matching C's `%f`.
/// Non-finite values render as `nan`, `inf` and `-inf`.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    format!("{:.6}", f)
}

fn serialize_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn serialize_array(arr: &[Value], out: &mut String) {
    out.push('[');
    for (i, item) in arr.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        serialize_into(item, out);
    }
    out.push(']');
}

fn serialize_object(map: &Map, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        serialize_string(key, out);
        out.push(':');
        serialize_into(value, out);
    }
    out.push('}');
}

impl fmt::Display for Value {
    /// Renders the canonical serialization, so `value.to_string()` equals
    /// `serialize(&value)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
