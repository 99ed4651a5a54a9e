//! Error code registry
//!
//! Keeps a unique-key mapping from numeric error codes to human-readable
//! descriptions. Lookups never fail: unknown codes translate to
//! [`UNKNOWN_ERROR`].
//!
//! # Example
//!
//! ```
//! use errcode_registry::{CodeRegistry, UNKNOWN_ERROR};
//!
//! let mut registry = CodeRegistry::new();
//! registry.add_error(404, "Not Found").unwrap();
//! registry.add_error(500, "Internal Server Error").unwrap();
//!
//! assert_eq!(registry.size(), 2);
//! assert_eq!(registry.translate(404), "Not Found");
//! assert_eq!(registry.translate(999), UNKNOWN_ERROR);
//!
//! assert!(registry.remove_error(404));
//! assert_eq!(registry.translate(404), UNKNOWN_ERROR);
//!
//! registry.clear();
//! assert!(registry.is_empty());
//! ```

pub mod entry;
pub mod error;
pub mod registry;
mod value;

pub use entry::{Code, Entry};
pub use error::{ErrorKind, RegistryError, ValueField};
pub use registry::{CodeRegistry, Iter, UNKNOWN_ERROR};
