//! Error code registry demo: wires the registry to its console and HTML renderers.
pub mod config;

pub use config::{ConfigError, DemoConfig, OutputMode};

use anyhow::Context;
use errcode_out::{page, ConsoleDemo, PageRenderer, TemplatesFile};
use tracing::info;

/// Produce the demo output selected by `config`.
///
/// With [`OutputMode::Both`] the console report comes first, followed by a
/// blank line and the HTML page.
pub fn run(config: &DemoConfig) -> anyhow::Result<String> {
    let templates = load_templates(config)?;
    let mut sections = Vec::new();

    if matches!(config.output, OutputMode::Console | OutputMode::Both) {
        let outcome = ConsoleDemo::new(templates.clone(), config.locale)?.run()?;
        sections.push(outcome.report.to_string());
    }

    if matches!(config.output, OutputMode::Html | OutputMode::Both) {
        let registry = page::display_registry()?;
        let html = PageRenderer::new(templates, config.locale)?
            .render(&registry, &page::DISPLAY_PROBE_CODES)?;
        sections.push(html);
    }

    Ok(sections.join("\n\n"))
}

fn load_templates(config: &DemoConfig) -> anyhow::Result<TemplatesFile> {
    match &config.templates_path {
        Some(path) => {
            info!(path = %path, "loading templates");
            TemplatesFile::load(path).with_context(|| format!("templates from {}", path))
        }
        None => Ok(TemplatesFile::builtin()?),
    }
}
