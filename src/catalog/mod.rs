//! Named error kinds compiled from configuration.
//!
//! The catalog only looks factories up by name; callers still decide which
//! error to raise.
//!
//! # Example
//!
//! ```ignore
//! let settings = CatalogSettings::from_file("config/errors.toml")?;
//! let catalog = ErrorCatalog::from_settings(&settings)?;
//!
//! let err = catalog
//!     .get("invalid_format")
//!     .map(|factory| factory.new_error(["a0"]));
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use axum::http::StatusCode;
use thiserror::Error;

use crate::config::{CatalogSettings, FileFormat};
use crate::factory::ErrorFactory;
use crate::template::TemplateError;

/// Catalog-specific error type
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid status code {code} for error kind '{kind}'")]
    InvalidStatus { kind: String, code: u16 },

    #[error("Invalid template for error kind '{kind}': {source}")]
    Template {
        kind: String,
        #[source]
        source: TemplateError,
    },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error factories keyed by kind name
#[derive(Debug, Clone, Default)]
pub struct ErrorCatalog {
    factories: BTreeMap<String, ErrorFactory>,
}

impl ErrorCatalog {
    /// Compile every configured error kind
    pub fn from_settings(settings: &CatalogSettings) -> CatalogResult<Self> {
        let mut factories = BTreeMap::new();

        for (kind, cfg) in &settings.errors {
            if StatusCode::from_u16(cfg.code).is_err() {
                return Err(CatalogError::InvalidStatus {
                    kind: kind.clone(),
                    code: cfg.code,
                });
            }

            let factory = ErrorFactory::new(cfg.code, cfg.reason.clone(), &cfg.template)
                .map_err(|source| CatalogError::Template {
                    kind: kind.clone(),
                    source,
                })?;
            factories.insert(kind.clone(), factory);
        }

        tracing::info!(kinds = factories.len(), "Error catalog loaded");

        Ok(Self { factories })
    }

    /// Load and compile a catalog file
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let settings = CatalogSettings::from_file(path)?;
        Self::from_settings(&settings)
    }

    /// Load and compile catalog text
    pub fn from_source(source: &str, format: FileFormat) -> CatalogResult<Self> {
        let settings = CatalogSettings::from_source(source, format)?;
        Self::from_settings(&settings)
    }

    /// Get a factory by kind name
    pub fn get(&self, kind: &str) -> Option<&ErrorFactory> {
        self.factories.get(kind)
    }

    /// Kind names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
