//! `$`-rooted dotted paths for addressing nodes inside a tree.
//!
//! # Path syntax
//!
//! - `"$"` -- the root itself
//! - `"$.name"` -- key `name` of the root object
//! - `"$.3.two.two-one"` -- element 3 of the root array, then keys `two` and
//!   `two-one`
//!
//! A segment made only of ASCII digits addresses an array element when the
//! node is an array; on an object it is an ordinary key. Keys that contain a
//! `.` cannot be addressed.

use crate::error::{JsonError, Result};
use crate::value::Value;

/// A parsed path, split on dots.
#[derive(Debug, Clone)]
struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    fn parse(path: &'a str) -> Result<Self> {
        let rest = path
            .strip_prefix('$')
            .ok_or_else(|| JsonError::parse(0, "path must start with '$'"))?;
        if rest.is_empty() {
            return Ok(Self {
                segments: Vec::new(),
            });
        }
        let rest = rest
            .strip_prefix('.')
            .ok_or_else(|| JsonError::parse(1, "expected '.' after '$'"))?;

        let mut segments = Vec::new();
        let mut offset = 2;
        for segment in rest.split('.') {
            if segment.is_empty() {
                return Err(JsonError::parse(offset, "empty path segment"));
            }
            segments.push(segment);
            offset += segment.len() + 1;
        }
        Ok(Self { segments })
    }
}

/// Array index for an all-digit segment.
fn as_index(segment: &str) -> Option<usize> {
    if segment.bytes().all(|b| b.is_ascii_digit()) {
        segment.parse().ok()
    } else {
        None
    }
}

impl Value {
    /// Look up the node at `path` without modifying the tree.
    ///
    /// Returns `Ok(None)` when any step is missing or has the wrong shape, and
    /// an error only when `path` itself is malformed.
    ///
    /// ```
    /// use json_tree::parse;
    ///
    /// let doc = parse(r#"[0, {"two": {"two-one": 1}}]"#)?;
    /// assert_eq!(doc.pointer("$.1.two.two-one")?, Some(&json_tree::Value::Int(1)));
    /// assert_eq!(doc.pointer("$.5")?, None);
    /// # Ok::<(), json_tree::JsonError>(())
    /// ```
    pub fn pointer(&self, path: &str) -> Result<Option<&Value>> {
        let path = Path::parse(path)?;
        let mut node = self;
        for segment in path.segments {
            let next = match node {
                Value::Object(map) => map.get(segment),
                Value::Array(arr) => as_index(segment).and_then(|i| arr.get(i)),
                _ => None,
            };
            match next {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }

    /// Walk to the node at `path` with the vivifying accessors, creating
    /// missing containers on the way.
    ///
    /// Digit segments use [`Value::at`] on `Null` and array nodes; every other
    /// step uses [`Value::at_key`]. Type errors from either accessor propagate.
    pub fn pointer_mut(&mut self, path: &str) -> Result<&mut Value> {
        let path = Path::parse(path)?;
        let mut node = self;
        for segment in path.segments {
            node = match as_index(segment) {
                Some(index) if node.is_null() || node.is_array() => node.at(index)?,
                _ => node.at_key(segment)?,
            };
        }
        Ok(node)
    }
}
