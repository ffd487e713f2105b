//! Configuration schema definitions for envgen.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format. Keys use camelCase in YAML.

use serde::{Deserialize, Serialize};

/// File name used when a package does not declare `envFile`.
pub const DEFAULT_ENV_FILE_NAME: &str = ".env";

/// Root configuration structure.
///
/// Every key is optional; missing keys decode to empty values so that a
/// config with no packages is a valid no-op run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvgenConfig {
    /// Environment variable holding the current CI branch.
    pub branch_var_name: String,

    /// Branch value to use when `branch_var_name` is not set.
    pub branch_var_default: String,

    /// Branch to suffix mappings, matched in declared order.
    pub branches: Vec<BranchConfig>,

    /// Packages to generate env files for.
    pub packages: Vec<PackageConfig>,

    /// Variables written to every package, resolved without a suffix.
    pub globals: Vec<String>,
}

/// A branch name and the suffix applied to variable lookups on that branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchConfig {
    pub name: String,
    pub suffix: String,
}

/// A package directory and the variables its env file declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageConfig {
    /// Package directory, relative to the project root.
    pub package: String,

    /// Output file name (defaults to `.env`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_file: Option<String>,

    /// Variable names to resolve for this package.
    pub variables: Vec<String>,
}

impl PackageConfig {
    /// The output file name, falling back to [`DEFAULT_ENV_FILE_NAME`].
    ///
    /// An empty `envFile` is treated the same as an absent one.
    pub fn env_file_name(&self) -> &str {
        match self.env_file.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_ENV_FILE_NAME,
        }
    }
}
