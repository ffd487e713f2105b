//! Configuration loading and parsing for envgen.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - YAML file loading in [`loader`]
//! - Supplementary `.env` files in [`env_file`]
//!
//! # Example
//!
//! ```
//! use envgen::config::load_config_file;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("envgen.yml");
//! fs::write(&path, "packages:\n  - package: api\n    variables: [PORT]\n").unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! assert_eq!(config.packages[0].package, "api");
//! assert_eq!(config.packages[0].env_file_name(), ".env");
//! ```

pub mod env_file;
pub mod loader;
pub mod schema;

pub use env_file::EnvFileParser;
pub use loader::{load_config_file, parse_config};
pub use schema::{BranchConfig, EnvgenConfig, PackageConfig, DEFAULT_ENV_FILE_NAME};
