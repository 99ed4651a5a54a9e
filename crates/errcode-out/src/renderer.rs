//! Template rendering for the registry reports.
//!
//! Uses Handlebars with one custom helper:
//! - join: Join array with separator
//!
//! Console output is rendered without escaping; HTML output escapes every
//! `{{value}}` expression and every `join` result.

use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext};
use serde_json::Value;

use crate::locale::Locale;
use crate::templates::TemplatesFile;
use crate::OutError;

/// Escaping mode of a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Text,
    Html,
}

/// Compiled renderer with registered helpers
pub struct TemplateRenderer<'a> {
    handlebars: Handlebars<'a>,
    locale: Locale,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer from a templates file
    pub fn new(
        templates: TemplatesFile,
        markup: Markup,
        locale: Locale,
    ) -> Result<Self, OutError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        if markup == Markup::Text {
            handlebars.register_escape_fn(handlebars::no_escape);
        }

        handlebars.register_helper("join", Box::new(JoinHelper));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| OutError::Template(format!("{}: {}", name, e)))?;
        }

        Ok(TemplateRenderer { handlebars, locale })
    }

    /// Renderer over the embedded templates
    pub fn builtin(markup: Markup, locale: Locale) -> Result<Self, OutError> {
        Self::new(TemplatesFile::builtin()?, markup, locale)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render the localized variant of `name` with data.
    ///
    /// Looks up `<name>.<locale>` first and falls back to `<name>.en`.
    pub fn render(&self, name: &str, data: &Value) -> Result<String, OutError> {
        let key = self.resolve(name)?;
        self.handlebars
            .render(&key, data)
            .map_err(|e| OutError::Render(format!("{}: {}", key, e)))
    }

    fn resolve(&self, name: &str) -> Result<String, OutError> {
        let localized = format!("{}.{}", name, self.locale);
        if self.handlebars.has_template(&localized) {
            return Ok(localized);
        }

        let fallback = format!("{}.{}", name, Locale::En);
        if self.handlebars.has_template(&fallback) {
            return Ok(fallback);
        }

        Err(OutError::MissingTemplate(name.to_string()))
    }
}

// ============================================================================
// Custom Helpers
// ============================================================================

/// Join an array with a separator, escaped like any other expression
struct JoinHelper;

impl HelperDef for JoinHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let array = h.param(0).and_then(|v| v.value().as_array());

        let separator = h
            .param(1)
            .and_then(|v| v.value().as_str())
            .unwrap_or(", ");

        if let Some(arr) = array {
            let strings: Vec<String> = arr
                .iter()
                .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                .collect();
            let escape = r.get_escape_fn();
            out.write(&escape(&strings.join(separator)))?;
        }

        Ok(())
    }
}
