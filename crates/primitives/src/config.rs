//! Accumulator configuration via `accum.toml`
//!
//! The file is optional. When it is absent, [`AccumConfig::default`] applies.

use accum_core::{Error, Number, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file name looked up by callers that keep one on disk.
pub const CONFIG_FILE_NAME: &str = "accum.toml";

/// Starting representation of a dynamically typed tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericMode {
    /// Start at `Int(0)` and widen only when a fractional amount arrives
    #[default]
    Integer,
    /// Start at `Float(0.0)`
    Float,
}

impl NumericMode {
    /// Zero in this representation
    pub fn zero(self) -> Number {
        match self {
            NumericMode::Integer => Number::Int(0),
            NumericMode::Float => Number::Float(0.0),
        }
    }
}

/// Accumulator configuration loaded from `accum.toml`.
///
/// # Example
///
/// ```toml
/// # "integer" (default) or "float"
/// numeric = "integer"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumConfig {
    /// Representation of a fresh dynamically typed tally.
    #[serde(default)]
    pub numeric: NumericMode,
}

impl AccumConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# accum configuration
#
# Starting representation of a dynamically typed tally:
#   "integer" = start at 0 and widen to float on the first fractional amount
#   "float"   = start at 0.0
numeric = "integer"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming `path` if the file cannot be read or
    /// parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config: {e}")))
            .and_then(|content| Self::from_toml_str(&content))
            .map_err(|e| at_path(path, e))?;
        debug!(path = %path.display(), numeric = ?config.numeric, "Loaded accum config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        write_config(path, Self::default_toml())?;
        debug!(path = %path.display(), "Wrote default accum config");
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;
        write_config(path, &content)
    }
}

fn write_config(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .map_err(|e| at_path(path, Error::config(format!("Failed to write config: {e}"))))
}

/// Prefix a config error with the file it came from.
fn at_path(path: &Path, err: Error) -> Error {
    match err {
        Error::Config(msg) => Error::config(format!("{}: {}", path.display(), msg)),
        other => other,
    }
}
