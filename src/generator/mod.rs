//! Env file generation.
//!
//! [`Generator`] owns the loaded configuration and drives a run:
//!
//! 1. Resolve the branch suffix once
//! 2. Resolve the global variables once, without a suffix
//! 3. Start one worker thread per package, which resolves the package's
//!    variables with the branch suffix, appends the globals and writes the file
//! 4. Wait for every worker and return a [`GenerationReport`]
//!
//! Missing variables and write failures are logged and recorded in the
//! report; they never stop other packages.
//!
//! # Example
//!
//! ```
//! use envgen::config::{EnvgenConfig, PackageConfig};
//! use envgen::generator::Generator;
//! use std::env::VarError;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! std::fs::create_dir(temp.path().join("api")).unwrap();
//!
//! let config = EnvgenConfig {
//!     packages: vec![PackageConfig {
//!         package: "api".to_string(),
//!         env_file: None,
//!         variables: vec!["PORT".to_string()],
//!     }],
//!     globals: vec!["ENV".to_string()],
//!     ..Default::default()
//! };
//!
//! let generator = Generator::new(config, temp.path());
//! let report = generator.generate_with_env(|key| match key {
//!     "PORT" => Ok("8080".to_string()),
//!     "ENV" => Ok("prod".to_string()),
//!     _ => Err(VarError::NotPresent),
//! });
//!
//! assert!(report.is_clean());
//! let written = std::fs::read_to_string(temp.path().join("api/.env")).unwrap();
//! assert_eq!(written, "PORT=8080\nENV=prod\n");
//! ```

pub mod report;
pub mod writer;

pub use report::{GenerationReport, PackageOutcome};
pub use writer::write_env_file;

use std::env::VarError;
use std::path::{Path, PathBuf};
use std::thread;

use crate::config::{load_config_file, EnvgenConfig, PackageConfig};
use crate::environment::{ResolvedBranch, ResolvedVariables};
use crate::error::{EnvgenError, Result};

/// Generates env files for every package in a configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: EnvgenConfig,
    root: PathBuf,
}

impl Generator {
    /// Create a generator. Package paths are resolved against `root`.
    pub fn new(config: EnvgenConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    /// Load the configuration file and create a generator for it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` or `ConfigParseError` when the file cannot
    /// be read or decoded.
    pub fn from_file(config_path: &Path, root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(load_config_file(config_path)?, root))
    }

    /// The loaded configuration.
    pub fn config(&self) -> &EnvgenConfig {
        &self.config
    }

    /// Directory package paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Output path for a package: `<root>/<package>/<envFile or .env>`.
    pub fn env_file_path(&self, package: &PackageConfig) -> PathBuf {
        self.root
            .join(&package.package)
            .join(package.env_file_name())
    }

    /// Generate all env files from the process environment.
    pub fn generate(&self) -> GenerationReport {
        self.generate_with_env(|key| std::env::var(key))
    }

    /// Generate with a custom env var lookup (for testing).
    ///
    /// The lookup is shared by every worker thread, hence `Sync`.
    pub fn generate_with_env<F>(&self, env_fn: F) -> GenerationReport
    where
        F: Fn(&str) -> std::result::Result<String, VarError> + Sync,
    {
        let branch = ResolvedBranch::resolve_with_env(&self.config, &env_fn);
        tracing::debug!(
            "Branch '{}' ({}), suffix '{}'",
            branch.name,
            branch.source,
            branch.suffix
        );

        let globals = ResolvedVariables::resolve_with_env(&self.config.globals, "", &env_fn);
        if globals.has_missing() {
            tracing::warn!("[globals] missing env vars: {}", globals.missing.join(", "));
        }

        let suffix = branch.suffix.as_str();
        let global_lines = globals.lines.as_slice();
        let env_fn = &env_fn;

        let packages: Vec<PackageOutcome> = thread::scope(|scope| {
            let workers: Vec<_> = self
                .config
                .packages
                .iter()
                .enumerate()
                .map(|(idx, package)| {
                    let worker = thread::Builder::new()
                        .name(format!("envgen-worker-{}", idx))
                        .spawn_scoped(scope, move || {
                            self.generate_package(package, suffix, global_lines, env_fn)
                        });
                    (package, worker)
                })
                .collect();

            workers
                .into_iter()
                .map(|(package, worker)| {
                    let joined = worker.map_err(EnvgenError::Io).and_then(|handle| {
                        handle.join().map_err(|_| EnvgenError::WorkerPanicked {
                            package: package.package.clone(),
                        })
                    });
                    self.worker_outcome(package, joined)
                })
                .collect()
        });

        GenerationReport {
            branch,
            missing_globals: globals.missing,
            packages,
        }
    }

    /// Turn a failed spawn or a panicked worker into a failed outcome.
    fn worker_outcome(
        &self,
        package: &PackageConfig,
        joined: Result<PackageOutcome>,
    ) -> PackageOutcome {
        joined.unwrap_or_else(|e| {
            tracing::error!("[{}] {}", package.package, e);
            PackageOutcome {
                package: package.package.clone(),
                path: self.env_file_path(package),
                missing: Vec::new(),
                result: Err(e),
            }
        })
    }

    /// Resolve, merge and write the env file for one package.
    fn generate_package<F>(
        &self,
        package: &PackageConfig,
        suffix: &str,
        globals: &[String],
        env_fn: F,
    ) -> PackageOutcome
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let resolved = ResolvedVariables::resolve_with_env(&package.variables, suffix, env_fn);
        if resolved.has_missing() {
            tracing::warn!(
                "[{}] missing env vars: {}",
                package.package,
                resolved.missing.join(", ")
            );
        }

        let mut lines = resolved.lines;
        lines.extend_from_slice(globals);

        let path = self.env_file_path(package);
        let result = match write_env_file(&path, &lines) {
            Ok(()) => {
                tracing::info!("[{}] generated env file {}", package.package, path.display());
                Ok(lines.len())
            }
            Err(source) => {
                let err = EnvgenError::EnvFileWrite {
                    path: path.clone(),
                    source,
                };
                tracing::error!("[{}] {}", package.package, err);
                Err(err)
            }
        };

        PackageOutcome {
            package: package.package.clone(),
            path,
            missing: resolved.missing,
            result,
        }
    }
}
