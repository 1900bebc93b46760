//! # json-tree
//!
//! A mutable JSON value tree with a recursive-descent parser and a canonical,
//! whitespace-free serializer.
//!
//! ## Quick start
//!
//! ```rust
//! use json_tree::{parse, serialize, Value};
//!
//! // Text → tree
//! let mut doc = parse(r#"{"name": "Alice", "scores": [95, 87]}"#).unwrap();
//!
//! // Mutate in place; missing containers are created on first access
//! doc.at_key("scores").unwrap().append(92).unwrap();
//! doc["meta"]["tags"][1] = Value::from("rust");
//!
//! // Tree → canonical text (keys sorted, no whitespace)
//! assert_eq!(
//!     serialize(&doc),
//!     r#"{"meta":{"tags":[null,"rust"]},"name":"Alice","scores":[95,87,92]}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value` tree and its vivifying mutation API
//! - [`parser`]: JSON text → `Value`
//! - [`serializer`]: `Value` → canonical JSON text
//! - [`path`]: `$.a.0.b` lookups
//! - [`interop`]: serde `Serialize` and `serde_json::Value` conversions
//! - [`error`]: Error types for access and parse failures

pub mod error;
pub mod interop;
pub mod parser;
pub mod path;
pub mod serializer;
pub mod value;

pub use error::{JsonError, Result};
pub use parser::{parse, parse_strict, parse_with, ParseOptions, Parser};
pub use serializer::{serialize, serialize_into, write_to};
pub use value::{Map, Value};
