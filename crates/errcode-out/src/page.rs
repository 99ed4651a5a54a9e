//! HTML page rendering
//!
//! Renders a table row per probe code with the stored description and the
//! `translate` result. The translate cell is classed `unknown` when the
//! registry fell back to [`UNKNOWN_ERROR`], `known` otherwise.

use errcode_registry::{Code, CodeRegistry, RegistryError, UNKNOWN_ERROR};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::locale::Locale;
use crate::renderer::{Markup, TemplateRenderer};
use crate::templates::TemplatesFile;
use crate::OutError;

/// Entries of the registry shown on the page
pub const DISPLAY_SEED: [(Code, &str); 5] = [
    (100, "Continue"),
    (200, "OK"),
    (301, "Moved Permanently"),
    (400, "Bad Request"),
    (503, "Service Unavailable"),
];

/// Codes the page looks up
pub const DISPLAY_PROBE_CODES: [Code; 6] = [100, 200, 301, 400, 503, 999];

/// Description cell for codes that are not registered
pub const MISSING_DESCRIPTION: &str = "—";

pub const KNOWN_CLASS: &str = "known";
pub const UNKNOWN_CLASS: &str = "unknown";

/// Registry pre-filled with [`DISPLAY_SEED`]
pub fn display_registry() -> Result<CodeRegistry, RegistryError> {
    CodeRegistry::from_entries(DISPLAY_SEED)
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRow {
    pub code: Code,
    pub description: String,
    pub translation: String,
    pub class: &'static str,
}

impl PageRow {
    pub fn probe(registry: &CodeRegistry, code: Code) -> Self {
        let translation = registry.translate(code);
        let description = if registry.has_error(code) {
            translation
        } else {
            MISSING_DESCRIPTION
        };
        let class = if translation == UNKNOWN_ERROR {
            UNKNOWN_CLASS
        } else {
            KNOWN_CLASS
        };

        Self {
            code,
            description: description.to_string(),
            translation: translation.to_string(),
            class,
        }
    }
}

pub struct PageRenderer<'a> {
    renderer: TemplateRenderer<'a>,
}

impl<'a> PageRenderer<'a> {
    pub fn new(templates: TemplatesFile, locale: Locale) -> Result<Self, OutError> {
        Ok(Self {
            renderer: TemplateRenderer::new(templates, Markup::Html, locale)?,
        })
    }

    pub fn builtin(locale: Locale) -> Result<Self, OutError> {
        Self::new(TemplatesFile::builtin()?, locale)
    }

    pub fn render(
        &self,
        registry: &CodeRegistry,
        probe_codes: &[Code],
    ) -> Result<String, OutError> {
        let rows: Vec<PageRow> = probe_codes
            .iter()
            .map(|&code| PageRow::probe(registry, code))
            .collect();
        debug!(rows = rows.len(), total = registry.size(), "rendering registry page");

        self.renderer.render(
            "page",
            &json!({ "total": registry.size(), "rows": rows }),
        )
    }
}

/// Render the page with the embedded templates
pub fn render_html_page(
    registry: &CodeRegistry,
    probe_codes: &[Code],
    locale: Locale,
) -> Result<String, OutError> {
    PageRenderer::builtin(locale)?.render(registry, probe_codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_for_known_code() {
        let registry = display_registry().unwrap();
        let row = PageRow::probe(&registry, 301);
        assert_eq!(
            row,
            PageRow {
                code: 301,
                description: "Moved Permanently".to_string(),
                translation: "Moved Permanently".to_string(),
                class: KNOWN_CLASS,
            }
        );
    }

    #[test]
    fn test_row_for_unknown_code() {
        let registry = display_registry().unwrap();
        let row = PageRow::probe(&registry, 999);
        assert_eq!(row.description, MISSING_DESCRIPTION);
        assert_eq!(row.translation, UNKNOWN_ERROR);
        assert_eq!(row.class, UNKNOWN_CLASS);
    }

    #[test]
    fn test_page_lists_every_probe() {
        let registry = display_registry().unwrap();
        let html = render_html_page(&registry, &DISPLAY_PROBE_CODES, Locale::En).unwrap();

        assert!(html.contains("<p>Total errors: 5</p>"));
        assert_eq!(
            html.matches("<td style=\"text-align: center;\">").count(),
            DISPLAY_PROBE_CODES.len()
        );
        assert_eq!(html.matches("class=\"known\"").count(), 5);
        assert_eq!(html.matches("class=\"unknown\"").count(), 1);
        assert!(html.contains("<td class=\"unknown\">Unknown error</td>"));
    }
}
