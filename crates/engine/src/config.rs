//! Intake configuration via `intake.toml`
//!
//! On first open of a data directory, a default `intake.toml` is created next
//! to the stored forms. To change settings, edit the file and restart.

pub use intake_core::catalog::DEFAULT_PAGE_SIZE;
use intake_core::{Error, FieldSchema, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "intake.toml";

/// Store key of the saved-forms blob used by the original web client.
pub const DEFAULT_FORMS_KEY: &str = "santaRosaForms";
/// Store key of the draft blob used by the original web client.
pub const DEFAULT_DRAFT_KEY: &str = "currentForm";

/// Configuration loaded from `intake.toml`.
///
/// # Example
///
/// ```toml
/// forms_key = "santaRosaForms"
/// draft_key = "currentForm"
/// page_size = 10
///
/// [fields]
/// given_name = "nombre"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Store key holding all saved forms.
    #[serde(default = "default_forms_key")]
    pub forms_key: String,
    /// Store key holding the current draft.
    #[serde(default = "default_draft_key")]
    pub draft_key: String,
    /// Default page size of the response table.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Field names the response table and statistics read.
    #[serde(default)]
    pub fields: FieldSchema,
}

fn default_forms_key() -> String {
    DEFAULT_FORMS_KEY.to_string()
}

fn default_draft_key() -> String {
    DEFAULT_DRAFT_KEY.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            forms_key: default_forms_key(),
            draft_key: default_draft_key(),
            page_size: default_page_size(),
            fields: FieldSchema::default(),
        }
    }
}

impl IntakeConfig {
    /// Check the values a hand-edited file could get wrong.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is empty, both keys are equal, or the page
    /// size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.forms_key.is_empty() || self.draft_key.is_empty() {
            return Err(Error::Config("store keys must not be empty".to_string()));
        }
        if self.forms_key == self.draft_key {
            return Err(Error::Config(format!(
                "forms_key and draft_key must differ (both are '{}')",
                self.forms_key
            )));
        }
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Intake configuration
#
# Store keys of the two persisted blobs. The defaults match the keys the
# original web client used in browser local storage.
forms_key = "santaRosaForms"
draft_key = "currentForm"

# Rows per page in the response table (default: 10).
page_size = 10

# Field names read by search, sorting, filtering and charts.
# [fields]
# given_name = "nombre"
# family_name = "apellido"
# national_id = "dni"
# housing_type = "tipoVivienda"
# modality = "modalidad"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: IntakeConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        debug!(target: "intake::config", path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            debug!(target: "intake::config", path = %path.display(), "Wrote default config");
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
