use std::collections::BTreeMap;
use std::path::Path;

use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

/// Error kinds loaded from configuration.
///
/// ```toml
/// [errors.invalid_format]
/// code = 400
/// reason = "FormatError"
/// template = "Expected format is '[a-z]*', actual %{format}"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub errors: BTreeMap<String, ErrorKindConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorKindConfig {
    /// HTTP status code
    pub code: u16,
    pub reason: String,
    /// Message template with %{name} placeholders
    pub template: String,
}

impl CatalogSettings {
    /// Load from a file; the format is picked from the extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }

    /// Load from in-memory text
    pub fn from_source(source: &str, format: FileFormat) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, format))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml() {
        let settings = CatalogSettings::from_source(
            r#"
            [errors.invalid_format]
            code = 400
            reason = "FormatError"
            template = "Expected format is '[a-z]*', actual %{format}"
            "#,
            FileFormat::Toml,
        )
        .unwrap();

        let kind = &settings.errors["invalid_format"];
        assert_eq!(kind.code, 400);
        assert_eq!(kind.reason, "FormatError");
        assert_eq!(kind.template, "Expected format is '[a-z]*', actual %{format}");
    }

    #[test]
    fn test_from_json() {
        let settings = CatalogSettings::from_source(
            r#"{"errors": {"not_found": {"code": 404, "reason": "NotFound", "template": "%{id} not found"}}}"#,
            FileFormat::Json,
        )
        .unwrap();
        assert_eq!(settings.errors["not_found"].code, 404);
    }

    #[test]
    fn test_default_values() {
        let settings = CatalogSettings::from_source("", FileFormat::Toml).unwrap();
        assert!(settings.errors.is_empty());
    }

    #[test]
    fn test_missing_field_fails() {
        let result = CatalogSettings::from_source(
            r#"
            [errors.broken]
            code = 400
            "#,
            FileFormat::Toml,
        );
        assert!(result.is_err());
    }
}
