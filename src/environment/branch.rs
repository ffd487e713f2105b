//! Branch suffix resolution.
//!
//! Determines the branch the run is on and the suffix applied to package
//! variable lookups:
//! 1. The variable named by `branchVarName`, if set
//! 2. Otherwise `branchVarDefault`
//!
//! The branch value is then matched against `branches` in declared order.

use std::env::VarError;

use crate::config::EnvgenConfig;

/// How the branch value was determined.
#[derive(Debug, Clone, PartialEq)]
pub enum BranchSource {
    /// Read from the named environment variable.
    Variable(String),
    /// Taken from `branchVarDefault`.
    Default,
}

impl std::fmt::Display for BranchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(var) => write!(f, "from {}", var),
            Self::Default => write!(f, "default"),
        }
    }
}

/// The branch in effect for a run and the suffix it selects.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBranch {
    /// The branch value (may be empty).
    pub name: String,
    /// How the branch value was determined.
    pub source: BranchSource,
    /// Whether a configured branch matched `name`.
    pub matched: bool,
    /// Suffix for package variable lookups; empty when nothing matched.
    pub suffix: String,
}

impl ResolvedBranch {
    /// Resolve the branch from the process environment.
    ///
    /// # Example
    ///
    /// ```
    /// use envgen::config::{BranchConfig, EnvgenConfig};
    /// use envgen::environment::{BranchSource, ResolvedBranch};
    ///
    /// let config = EnvgenConfig {
    ///     branch_var_name: "ENVGEN_DOC_UNSET_BRANCH".to_string(),
    ///     branch_var_default: "main".to_string(),
    ///     branches: vec![BranchConfig {
    ///         name: "main".to_string(),
    ///         suffix: "_PROD".to_string(),
    ///     }],
    ///     ..Default::default()
    /// };
    ///
    /// let branch = ResolvedBranch::resolve(&config);
    /// assert_eq!(branch.source, BranchSource::Default);
    /// assert_eq!(branch.suffix, "_PROD");
    /// ```
    pub fn resolve(config: &EnvgenConfig) -> Self {
        Self::resolve_with_env(config, |key| std::env::var(key))
    }

    /// Resolve with a custom env var lookup (for testing).
    pub fn resolve_with_env<F>(config: &EnvgenConfig, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let var_name = config.branch_var_name.as_str();
        let value = if var_name.is_empty() {
            None
        } else {
            env_fn(var_name).ok()
        };
        let (name, source) = match value {
            Some(value) => (value, BranchSource::Variable(var_name.to_string())),
            None => (config.branch_var_default.clone(), BranchSource::Default),
        };

        let matching = config.branches.iter().find(|b| b.name == name);

        Self {
            matched: matching.is_some(),
            suffix: matching.map(|b| b.suffix.clone()).unwrap_or_default(),
            name,
            source,
        }
    }
}
