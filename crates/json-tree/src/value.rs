//! The JSON value tree and its mutation API.
//!
//! A [`Value`] is a tagged union over the seven JSON node kinds. Containers own
//! their children, so a tree is a strict ownership hierarchy: dropping a node
//! drops everything below it.
//!
//! # Auto-vivification
//!
//! The structured accessors treat a `Null` node as an empty container of
//! whatever shape is requested first:
//!
//! - keyed access ([`Value::at_key`], [`Value::append_pair`], [`Value::remove`])
//!   turns `Null` into `{}`
//! - positional access ([`Value::at`], [`Value::append`]) turns `Null` into `[]`
//!
//! Only `Null` materializes. Keyed access on an array, or positional access on
//! a string, is a [`JsonError::Type`].
//!
//! ```
//! use json_tree::Value;
//!
//! let mut root = Value::Null;
//! root.at_key("a")?.at(2)?.assign(1);
//! assert_eq!(root.to_string(), r#"{"a":[null,null,1]}"#);
//! # Ok::<(), json_tree::JsonError>(())
//! ```

use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use crate::error::{JsonError, Result};

/// Object payload. A `BTreeMap` keeps keys unique and iterates in sorted order,
/// which is the order the serializer emits.
pub type Map = BTreeMap<String, Value>;

/// A JSON node.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`. Also the state of a freshly constructed node.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Decoded text (escape sequences already resolved).
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// Shared `Null` handed out by the read-only `Index` impls on a miss.
static NULL: Value = Value::Null;

impl Value {
    /// A new `Null` node.
    pub fn new() -> Self {
        Value::Null
    }

    /// Materialize `Null` as `{}` and return the map, or fail for any other
    /// non-object variant.
    fn object_mut_or_vivify(&mut self) -> Result<&mut Map> {
        if self.is_null() {
            *self = Value::Object(Map::new());
        }
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.type_error("object")),
        }
    }

    /// Materialize `Null` as `[]` and return the vector, or fail for any other
    /// non-array variant.
    fn array_mut_or_vivify(&mut self) -> Result<&mut Vec<Value>> {
        if self.is_null() {
            *self = Value::Array(Vec::new());
        }
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(other.type_error("array")),
        }
    }

    fn type_error(&self, expected: &'static str) -> JsonError {
        JsonError::Type {
            expected,
            found: self.type_name(),
        }
    }

    /// Keyed access. Returns the entry for `key`, inserting `Null` if absent.
    ///
    /// A `Null` node becomes an empty object first. Fails with a type error if
    /// the node is neither `Null` nor an object.
    pub fn at_key(&mut self, key: &str) -> Result<&mut Value> {
        let map = self.object_mut_or_vivify()?;
        Ok(map.entry(key.to_string()).or_default())
    }

    /// Positional access. Grows the array with `Null` until `index` is in range
    /// and returns that element.
    ///
    /// A `Null` node becomes an empty array first. Fails with a type error if
    /// the node is neither `Null` nor an array, and with
    /// [`JsonError::IndexOutOfRange`] if the grown array cannot be allocated.
    pub fn at(&mut self, index: usize) -> Result<&mut Value> {
        let arr = self.array_mut_or_vivify()?;
        if arr.len() <= index {
            let out_of_range = || JsonError::IndexOutOfRange { index };
            let new_len = index.checked_add(1).ok_or_else(out_of_range)?;
            arr.try_reserve(new_len - arr.len())
                .map_err(|_| out_of_range())?;
            arr.resize_with(new_len, Value::default);
        }
        Ok(&mut arr[index])
    }

    /// Push `item` onto the end of this array (`Null` becomes `[]` first).
    pub fn append(&mut self, item: impl Into<Value>) -> Result<()> {
        self.array_mut_or_vivify()?.push(item.into());
        Ok(())
    }

    /// Append every item in order, left to right.
    ///
    /// The node is checked (and a `Null` materialized) before the first item,
    /// so a type error leaves the node untouched.
    pub fn append_all<I, V>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let arr = self.array_mut_or_vivify()?;
        arr.extend(items.into_iter().map(Into::into));
        Ok(())
    }

    /// Insert a key/value pair into this object (`Null` becomes `{}` first).
    ///
    /// Insert-if-absent: when `key` already exists the stored value is kept and
    /// `value` is discarded. Use [`Value::at_key`] + [`Value::assign`] to
    /// overwrite.
    pub fn append_pair(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.object_mut_or_vivify()?
            .entry(key.into())
            .or_insert_with(|| value.into());
        Ok(())
    }

    /// Remove `key` from this object, returning the removed value if present.
    ///
    /// A `Null` node is materialized as `{}` even though nothing can be removed
    /// from it.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>> {
        Ok(self.object_mut_or_vivify()?.remove(key))
    }

    /// Replace this node's variant and payload.
    pub fn assign(&mut self, value: impl Into<Value>) -> &mut Value {
        *self = value.into();
        self
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns true for both `Int` and `Float`.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as `f64`. `Int` values are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up `key` without vivifying. `None` for misses and non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Look up `index` without extending. `None` for misses and non-arrays.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Number of elements of an array or entries of an object; 0 otherwise.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the variant name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

// ---------------------------------------------------------------------------
// Index sugar
// ---------------------------------------------------------------------------

impl Index<&str> for Value {
    type Output = Value;

    /// Read-only keyed lookup; misses and non-objects yield `Null`.
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// Read-only positional lookup; misses and non-arrays yield `Null`.
    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for Value {
    /// Vivifying keyed access, see [`Value::at_key`].
    ///
    /// # Panics
    ///
    /// Panics if the node is neither `Null` nor an object.
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.at_key(key).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl IndexMut<usize> for Value {
    /// Vivifying, auto-extending positional access, see [`Value::at`].
    ///
    /// # Panics
    ///
    /// Panics if the node is neither `Null` nor an array.
    fn index_mut(&mut self, index: usize) -> &mut Value {
        self.at(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    /// Collects into an object with the same first-wins rule as
    /// [`Value::append_pair`].
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.entry(key).or_insert(value);
        }
        Value::Object(map)
    }
}

/// Append several heterogeneous payloads to an array node, left to right.
///
/// Expands to [`Value::append_all`], so it evaluates to a
/// `json_tree::Result<()>`.
///
/// ```
/// use json_tree::{append, Value};
///
/// let mut node = Value::Null;
/// append!(node, 1, 1.5, true, (), "aaa")?;
/// assert_eq!(node.to_string(), r#"[1,1.500000,true,null,"aaa"]"#);
/// # Ok::<(), json_tree::JsonError>(())
/// ```
#[macro_export]
macro_rules! append {
    ($node:expr, $($item:expr),+ $(,)?) => {
        ($node).append_all([$($crate::Value::from($item)),+])
    };
}
