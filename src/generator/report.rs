//! Generation results.
//!
//! Missing variables and write failures are collected here per scope
//! instead of being raised, so one package never aborts another.

use std::path::PathBuf;

use crate::environment::ResolvedBranch;
use crate::error::EnvgenError;

/// What happened to a single package.
#[derive(Debug)]
pub struct PackageOutcome {
    /// Package directory as declared in the config.
    pub package: String,
    /// Path of the env file that was (or would have been) written.
    pub path: PathBuf,
    /// Package variables that were missing in the environment.
    pub missing: Vec<String>,
    /// Number of lines written, or why the write failed.
    pub result: Result<usize, EnvgenError>,
}

impl PackageOutcome {
    /// Whether the env file was written.
    pub fn is_written(&self) -> bool {
        self.result.is_ok()
    }

    /// The write error, if any.
    pub fn error(&self) -> Option<&EnvgenError> {
        self.result.as_ref().err()
    }
}

/// Summary of one generation run.
#[derive(Debug)]
pub struct GenerationReport {
    /// Branch and suffix used for package variables.
    pub branch: ResolvedBranch,
    /// Global variables that were missing in the environment.
    pub missing_globals: Vec<String>,
    /// One entry per configured package, in configuration order.
    pub packages: Vec<PackageOutcome>,
}

impl GenerationReport {
    /// Number of env files written.
    pub fn written(&self) -> usize {
        self.packages.iter().filter(|p| p.is_written()).count()
    }

    /// Packages whose env file could not be written.
    pub fn failures(&self) -> impl Iterator<Item = &PackageOutcome> {
        self.packages.iter().filter(|p| !p.is_written())
    }

    /// Whether any global or package variable was missing.
    pub fn has_missing(&self) -> bool {
        !self.missing_globals.is_empty() || self.packages.iter().any(|p| !p.missing.is_empty())
    }

    /// True when nothing was missing and every file was written.
    pub fn is_clean(&self) -> bool {
        !self.has_missing() && self.failures().next().is_none()
    }
}
