//! Config loading, validation, and utility operations.

use super::filter::FileFilter;
use super::model::Config;
use super::types::MIN_COLUMN_WIDTH;
use crate::context::RepoContext;
use crate::error::{DiffcovError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the `.diffcov.yaml` file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DiffcovError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffcovError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the repository's config file, or defaults when it does not exist.
    pub fn load_or_default(ctx: &RepoContext) -> Result<Self> {
        let path = ctx.config_path();
        if path.is_file() {
            debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            DiffcovError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `include_globs` must not be empty
    /// - every include and exclude glob must compile
    /// - `column_width` must be at least 10
    pub fn validate(&self) -> Result<()> {
        if self.include_globs.is_empty() {
            return Err(DiffcovError::ConfigError(
                "include_globs must contain at least one pattern".to_string(),
            ));
        }

        if self.column_width < MIN_COLUMN_WIDTH {
            return Err(DiffcovError::ConfigError(format!(
                "column_width must be at least {} (found {})",
                MIN_COLUMN_WIDTH, self.column_width
            )));
        }

        self.file_filter().map(|_| ())
    }

    /// Compile the include and exclude globs.
    pub fn file_filter(&self) -> Result<FileFilter> {
        FileFilter::new(&self.include_globs, &self.exclude_globs)
    }
}
