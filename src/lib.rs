//! envgen - generate per-package `.env` files from one YAML configuration.
//!
//! Each package in the configuration lists the variables it needs. envgen
//! reads them from the environment (using a suffix chosen by the current CI
//! branch), appends the shared global variables and writes one env file per
//! package, in parallel.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration schema, loading and `.env` preloading
//! - [`environment`] - Branch suffix and variable resolution
//! - [`error`] - Error types and result aliases
//! - [`generator`] - Concurrent env file generation
//!
//! # Example
//!
//! ```
//! use envgen::config::parse_config;
//! use envgen::environment::{ResolvedBranch, ResolvedVariables};
//! use std::env::VarError;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "branchVarName: CI_BRANCH\nbranches:\n  - {name: main, suffix: _PROD}\n",
//!     Path::new("envgen.yml"),
//! )
//! .unwrap();
//!
//! let env = |key: &str| match key {
//!     "CI_BRANCH" => Ok("main".to_string()),
//!     "DB_URL_PROD" => Ok("postgres://prod".to_string()),
//!     _ => Err(VarError::NotPresent),
//! };
//!
//! let branch = ResolvedBranch::resolve_with_env(&config, env);
//! let vars = ResolvedVariables::resolve_with_env(&["DB_URL".to_string()], &branch.suffix, env);
//! assert_eq!(vars.lines, vec!["DB_URL=postgres://prod"]);
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod generator;

pub use error::{EnvgenError, Result};
