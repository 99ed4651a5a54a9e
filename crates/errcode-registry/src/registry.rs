//! Code Registry
//!
//! Insertion-ordered map from [`Code`] to description. The map is private:
//! every mutation goes through `add_error`, `remove_error` or `clear`.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::entry::{Code, Entry};
use crate::error::RegistryError;
use crate::value::{expect_code, expect_description};

/// Returned by [`CodeRegistry::translate`] for codes that are not registered
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, Default)]
pub struct CodeRegistry {
    errors: IndexMap<Code, String>,
}

impl CodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry by adding every pair in order.
    ///
    /// Fails on the first duplicate code, like repeated `add_error` calls would.
    pub fn from_entries<I, D>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (Code, D)>,
        D: Into<String>,
    {
        let mut registry = Self::new();
        for (code, description) in entries {
            registry.add_error(code, description)?;
        }
        Ok(registry)
    }

    /// Register `description` under `code`.
    ///
    /// Returns [`RegistryError::DuplicateKey`] if `code` is already present;
    /// the stored description is left untouched in that case.
    pub fn add_error(
        &mut self,
        code: Code,
        description: impl Into<String>,
    ) -> Result<(), RegistryError> {
        if self.errors.contains_key(&code) {
            warn!(code, "rejected duplicate error code");
            return Err(RegistryError::DuplicateKey { code });
        }

        self.errors.insert(code, description.into());
        debug!(code, size = self.errors.len(), "error code added");
        Ok(())
    }

    /// Register a pair whose types are only known at runtime.
    ///
    /// `code` must be an integral JSON number and `description` a JSON string,
    /// otherwise [`RegistryError::InvalidType`] is returned. Both type checks
    /// run before the duplicate check.
    pub fn add_error_value(
        &mut self,
        code: &Value,
        description: &Value,
    ) -> Result<(), RegistryError> {
        let checked = expect_code(code)
            .and_then(|code| expect_description(description).map(|desc| (code, desc)));

        match checked {
            Ok((code, description)) => self.add_error(code, description),
            Err(err) => {
                warn!(%err, "rejected error entry");
                Err(err)
            }
        }
    }

    /// Description for `code`, or [`UNKNOWN_ERROR`] when absent
    pub fn translate(&self, code: Code) -> &str {
        self.get(code).unwrap_or(UNKNOWN_ERROR)
    }

    /// Stored description for `code` without the fallback
    pub fn get(&self, code: Code) -> Option<&str> {
        self.errors.get(&code).map(String::as_str)
    }

    /// Returns whether an entry was removed
    pub fn remove_error(&mut self, code: Code) -> bool {
        let removed = self.errors.shift_remove(&code).is_some();
        if removed {
            debug!(code, size = self.errors.len(), "error code removed");
        }
        removed
    }

    pub fn has_error(&self, code: Code) -> bool {
        self.errors.contains_key(&code)
    }

    pub fn size(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        debug!(removed = self.errors.len(), "registry cleared");
        self.errors.clear();
    }

    // ========================================================================
    // Enumeration (insertion order, consistent across the three views)
    // ========================================================================

    pub fn codes(&self) -> Vec<Code> {
        self.errors.keys().copied().collect()
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.errors.values().cloned().collect()
    }

    pub fn entries(&self) -> Vec<(Code, String)> {
        self.errors
            .iter()
            .map(|(code, description)| (*code, description.clone()))
            .collect()
    }

    /// Entries as serializable records
    pub fn entry_list(&self) -> Vec<Entry> {
        self.entries().into_iter().map(Entry::from).collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.errors.iter(),
        }
    }
}

/// Borrowing iterator over `(code, description)` pairs
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, Code, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Code, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(code, description)| (*code, description.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CodeRegistry {
    type Item = (Code, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
