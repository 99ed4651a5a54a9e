//! Console and HTML rendering for the error code registry
//!
//! This crate turns registry contents into human-readable output. It only
//! uses the registry's read-only queries, except for the console demo which
//! drives a registry of its own through every operation.
//!
//! # Example
//!
//! ```
//! use errcode_out::{page, render_html_page, Locale};
//!
//! let registry = page::display_registry().unwrap();
//! let html = render_html_page(&registry, &page::DISPLAY_PROBE_CODES, Locale::En).unwrap();
//! assert!(html.contains("class=\"unknown\""));
//! ```

pub mod console;
pub mod locale;
pub mod page;
pub mod renderer;
pub mod templates;

pub use console::{ConsoleDemo, ConsoleReport, DemoOutcome};
pub use locale::Locale;
pub use page::{render_html_page, PageRenderer, PageRow};
pub use renderer::{Markup, TemplateRenderer};
pub use templates::TemplatesFile;

use handlebars::Handlebars;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum OutError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Template not found: {0}")]
    MissingTemplate(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Unsupported locale: {0}")]
    Locale(String),
}

/// Render an inline template string as plain text
pub fn render_string(template: &str, data: &Value) -> Result<String, OutError> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .render_template(template, data)
        .map_err(|e| OutError::Render(e.to_string()))
}
