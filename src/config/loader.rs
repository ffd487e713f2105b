//! Configuration file loading.
//!
//! Reads the YAML configuration from disk and decodes it into
//! [`EnvgenConfig`]. Any failure here is fatal for the run.

use crate::config::schema::EnvgenConfig;
use crate::error::{EnvgenError, Result};
use std::fs;
use std::path::Path;

/// Load a config file and parse it into EnvgenConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<EnvgenConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvgenError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvgenError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    tracing::debug!(
        "Loaded config from {} ({} packages, {} globals)",
        path.display(),
        config.packages.len(),
        config.globals.len()
    );
    Ok(config)
}

/// Parse YAML content into EnvgenConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<EnvgenConfig> {
    // An empty document has no mapping to decode into.
    if content.trim().is_empty() {
        return Ok(EnvgenConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnvgenError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
