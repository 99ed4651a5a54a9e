//! Registry entries
use serde::Serialize;

/// Numeric error code
pub type Code = i64;

/// A `(code, description)` pair as handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub code: Code,
    pub description: String,
}

impl Entry {
    pub fn new(code: Code, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

impl From<(Code, String)> for Entry {
    fn from((code, description): (Code, String)) -> Self {
        Self { code, description }
    }
}
