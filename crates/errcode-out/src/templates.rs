//! Template loading for the registry reports.
//!
//! Templates live in a YAML file with one entry per template name. Names carry
//! a locale suffix (`added.en`, `added.ru`); see [`crate::renderer`] for the
//! lookup rules.

use serde::Deserialize;
use std::collections::HashMap;

use crate::OutError;

/// Templates shipped with the crate
const DEFAULT_TEMPLATES: &str = include_str!("../templates/report-templates.yaml");

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

impl TemplatesFile {
    /// Load templates from a YAML file
    pub fn load(path: &str) -> Result<Self, OutError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            OutError::Template(format!("Failed to read templates file {}: {}", path, e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, OutError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| OutError::Template(format!("Failed to parse templates YAML: {}", e)))
    }

    /// The embedded default templates
    pub fn builtin() -> Result<Self, OutError> {
        Self::from_yaml(DEFAULT_TEMPLATES)
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// List all template names
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_parse() {
        let file = TemplatesFile::builtin().unwrap();
        assert_eq!(file.version, "1.0");
        assert!(file.get("page.en").is_some());
        assert!(file.get("page.ru").is_some());
    }

    #[test]
    fn test_builtin_locales_are_complete() {
        let file = TemplatesFile::builtin().unwrap();
        for name in file.list_templates() {
            if let Some(base) = name.strip_suffix(".en") {
                assert!(
                    file.get(&format!("{}.ru", base)).is_some(),
                    "missing ru translation for {}",
                    base
                );
            }
        }
    }

    #[test]
    fn test_custom_yaml() {
        let yaml = r#"
version: "2.0"
templates:
  added.en:
    description: Seed entry accepted
    template: "+ {{code}}"
"#;

        let file = TemplatesFile::from_yaml(yaml).unwrap();
        assert_eq!(file.get("added.en").unwrap().template, "+ {{code}}");
    }

    #[test]
    fn test_malformed_yaml() {
        let err = TemplatesFile::from_yaml("templates: [").unwrap_err();
        assert!(matches!(err, OutError::Template(_)));
    }
}
