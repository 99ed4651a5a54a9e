//! Console demo
//!
//! Walks a registry through every public operation and narrates each step as
//! localized text lines.

use errcode_registry::{Code, CodeRegistry};
use serde_json::json;
use std::fmt;
use tracing::{debug, info};

use crate::locale::Locale;
use crate::renderer::{Markup, TemplateRenderer};
use crate::templates::TemplatesFile;
use crate::OutError;

/// Entries the demo registers
pub const DEMO_SEED: [(Code, &str); 4] = [
    (404, "Not Found"),
    (500, "Internal Server Error"),
    (403, "Forbidden"),
    (401, "Unauthorized"),
];

/// Codes passed to `translate` after seeding
pub const DEMO_PROBE_CODES: [Code; 6] = [404, 500, 999, 403, 401, 0];

const HAS_PROBE_CODES: [Code; 2] = [404, 999];
const REMOVED_CODE: Code = 403;
const CLEARED_PROBE_CODE: Code = 404;

/// Rendered demo output, one entry per printed line
#[derive(Debug, Clone, Default)]
pub struct ConsoleReport {
    pub lines: Vec<String>,
}

impl ConsoleReport {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl fmt::Display for ConsoleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Report plus the registry the demo left behind (cleared by its last step)
#[derive(Debug)]
pub struct DemoOutcome {
    pub report: ConsoleReport,
    pub registry: CodeRegistry,
}

pub struct ConsoleDemo<'a> {
    renderer: TemplateRenderer<'a>,
}

impl<'a> ConsoleDemo<'a> {
    pub fn new(templates: TemplatesFile, locale: Locale) -> Result<Self, OutError> {
        Ok(Self {
            renderer: TemplateRenderer::new(templates, Markup::Text, locale)?,
        })
    }

    pub fn builtin(locale: Locale) -> Result<Self, OutError> {
        Self::new(TemplatesFile::builtin()?, locale)
    }

    /// Run the demo on a fresh registry
    pub fn run(&self) -> Result<DemoOutcome, OutError> {
        self.run_on(CodeRegistry::new())
    }

    /// Run the demo on `registry`.
    ///
    /// Seeding failures (e.g. a code that is already present) are reported as
    /// a single line each and the demo carries on. Every seed insertion is
    /// attempted on its own, so a rejected code does not skip the seeds after
    /// it.
    pub fn run_on(&self, mut registry: CodeRegistry) -> Result<DemoOutcome, OutError> {
        info!(locale = %self.renderer.locale(), "running console demo");
        let mut lines = Vec::new();

        lines.push(self.line("demo_header", json!({}))?);

        for (code, description) in DEMO_SEED {
            match registry.add_error(code, description) {
                Ok(()) => lines.push(self.line(
                    "added",
                    json!({ "code": code, "description": description }),
                )?),
                Err(err) => {
                    lines.push(self.line("add_failed", json!({ "message": err.to_string() }))?)
                }
            }
        }

        lines.push(self.line("total", json!({ "size": registry.size() }))?);

        lines.push(self.line("translate_header", json!({}))?);
        for code in DEMO_PROBE_CODES {
            lines.push(self.line(
                "translate_line",
                json!({ "code": code, "description": registry.translate(code) }),
            )?);
        }

        lines.push(self.line("extra_header", json!({}))?);
        for code in HAS_PROBE_CODES {
            lines.push(self.line(
                "has_line",
                json!({ "code": code, "present": registry.has_error(code) }),
            )?);
        }

        lines.push(self.line("all_codes", json!({ "codes": registry.codes() }))?);
        lines.push(self.line(
            "all_descriptions",
            json!({ "descriptions": registry.descriptions() }),
        )?);

        lines.push(self.line("entries_header", json!({}))?);
        for entry in registry.entry_list() {
            let data = serde_json::to_value(&entry).map_err(|e| OutError::Render(e.to_string()))?;
            lines.push(self.line("entry_line", data)?);
        }

        lines.push(self.line("remove_header", json!({ "code": REMOVED_CODE }))?);
        let removed = registry.remove_error(REMOVED_CODE);
        lines.push(self.line(
            "remove_result",
            json!({ "removed": removed, "size": registry.size() }),
        )?);
        lines.push(self.line(
            "after_remove",
            json!({ "code": REMOVED_CODE, "description": registry.translate(REMOVED_CODE) }),
        )?);

        lines.push(self.line("clear_header", json!({}))?);
        registry.clear();
        lines.push(self.line("size_after_clear", json!({ "size": registry.size() }))?);
        lines.push(self.line(
            "after_clear",
            json!({
                "code": CLEARED_PROBE_CODE,
                "description": registry.translate(CLEARED_PROBE_CODE),
            }),
        )?);

        debug!(lines = lines.len(), "console demo finished");
        Ok(DemoOutcome {
            report: ConsoleReport { lines },
            registry,
        })
    }

    fn line(&self, name: &str, data: serde_json::Value) -> Result<String, OutError> {
        self.renderer.render(name, &data)
    }
}
