//! Error types for value access and parsing.

use thiserror::Error;

/// Errors raised by the value API and the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// A value access method was called on an incompatible variant
    /// (e.g., keyed access on a `Bool`).
    #[error("not an {expected} (found {found})")]
    Type {
        expected: &'static str,
        found: &'static str,
    },

    /// Positional access asked for an array longer than can be allocated.
    #[error("index {index} out of range")]
    IndexOutOfRange { index: usize },

    /// The input text was not valid JSON.
    /// `offset` is the byte position where the violation was detected.
    #[error("parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: String },
}

impl JsonError {
    pub(crate) fn parse(offset: usize, message: impl Into<String>) -> Self {
        JsonError::Parse {
            offset,
            message: message.into(),
        }
    }

    /// True for errors raised by the value access API.
    pub fn is_type_error(&self) -> bool {
        matches!(self, JsonError::Type { .. })
    }

    /// True for errors raised while parsing text.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, JsonError::Parse { .. })
    }

    /// The bare message without the offset prefix, e.g. `"illegal word: 'x'"`
    /// or `"not an array"`.
    pub fn message(&self) -> String {
        match self {
            JsonError::Type { expected, .. } => format!("not an {expected}"),
            JsonError::IndexOutOfRange { index } => format!("index {index} out of range"),
            JsonError::Parse { message, .. } => message.clone(),
        }
    }
}

/// Convenience alias used throughout json-tree.
pub type Result<T> = std::result::Result<T, JsonError>;
