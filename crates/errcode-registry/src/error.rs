//! Registry error model
use std::fmt;
use thiserror::Error;

use crate::entry::Code;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("DUPLICATE/error code {code} already exists")]
    DuplicateKey { code: Code },

    #[error("TYPE/{field} must be {expected}, found {found}")]
    InvalidType {
        field: ValueField,
        expected: &'static str,
        found: &'static str,
    },
}

/// Coarse classification of [`RegistryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateKey,
    InvalidType,
}

/// Argument of `add_error_value` that failed its type check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    Code,
    Description,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            RegistryError::InvalidType { .. } => ErrorKind::InvalidType,
        }
    }
}

impl fmt::Display for ValueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueField::Code => f.write_str("error code"),
            ValueField::Description => f.write_str("error description"),
        }
    }
}
