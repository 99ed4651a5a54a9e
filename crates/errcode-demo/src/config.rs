//! Demo configuration, read from the environment
use errcode_out::Locale;
use std::str::FromStr;
use thiserror::Error;

pub const LOCALE_VAR: &str = "ERRCODE_LOCALE";
pub const OUTPUT_VAR: &str = "ERRCODE_OUTPUT";
pub const TEMPLATES_VAR: &str = "ERRCODE_TEMPLATES";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CONFIG/{var}: unsupported value {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// What the demo prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Console,
    Html,
    Both,
}

impl FromStr for OutputMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(OutputMode::Console),
            "html" => Ok(OutputMode::Html),
            "both" => Ok(OutputMode::Both),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    pub locale: Locale,
    pub output: OutputMode,
    /// Replacement for the embedded templates file
    pub templates_path: Option<String>,
}

impl DemoConfig {
    /// Read `ERRCODE_LOCALE`, `ERRCODE_OUTPUT` and `ERRCODE_TEMPLATES`.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`DemoConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DemoConfig::default();

        if let Some(value) = lookup(LOCALE_VAR) {
            config.locale = value.parse::<Locale>().map_err(|_| ConfigError::InvalidValue {
                var: LOCALE_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(OUTPUT_VAR) {
            config.output = value.parse::<OutputMode>().map_err(|_| ConfigError::InvalidValue {
                var: OUTPUT_VAR,
                value,
            })?;
        }

        config.templates_path = lookup(TEMPLATES_VAR).filter(|path| !path.trim().is_empty());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.output, OutputMode::Console);
        assert_eq!(config.templates_path, None);
    }

    #[test]
    fn test_all_variables() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (LOCALE_VAR, "ru"),
            (OUTPUT_VAR, "Both"),
            (TEMPLATES_VAR, "/etc/errcode/templates.yaml"),
        ]))
        .unwrap();

        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.output, OutputMode::Both);
        assert_eq!(
            config.templates_path.as_deref(),
            Some("/etc/errcode/templates.yaml")
        );
    }

    #[test]
    fn test_blank_templates_path_is_ignored() {
        let config = DemoConfig::from_lookup(lookup_from(&[(TEMPLATES_VAR, "  ")])).unwrap();
        assert_eq!(config.templates_path, None);
    }

    #[test]
    fn test_invalid_values() {
        let err = DemoConfig::from_lookup(lookup_from(&[(LOCALE_VAR, "fr")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: LOCALE_VAR,
                value: "fr".to_string()
            }
        );

        let err = DemoConfig::from_lookup(lookup_from(&[(OUTPUT_VAR, "pdf")])).unwrap_err();
        assert_eq!(err.to_string(), "CONFIG/ERRCODE_OUTPUT: unsupported value \"pdf\"");
    }
}
