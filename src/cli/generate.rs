//! Generate command implementation.
//!
//! Preloads supplementary env files, loads the configuration, runs the
//! generator and turns its report into an exit status.

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::cli::theme::Theme;
use crate::config::EnvFileParser;
use crate::error::Result;
use crate::generator::{GenerationReport, Generator};

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The generate command implementation.
pub struct GenerateCommand {
    project_root: PathBuf,
    args: Cli,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(project_root: &Path, args: Cli) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Create the command rooted at `--project` or the current directory.
    pub fn from_cli(args: Cli) -> Self {
        Self::from_cli_with_cwd(args, std::env::current_dir)
    }

    /// Create the command with a custom current directory lookup (for testing).
    ///
    /// An unreadable current directory falls back to `.` with a warning.
    pub fn from_cli_with_cwd<F>(args: Cli, cwd_fn: F) -> Self
    where
        F: FnOnce() -> std::io::Result<PathBuf>,
    {
        let project_root = match args.project.clone() {
            Some(dir) => dir,
            None => cwd_fn().unwrap_or_else(|e| {
                tracing::warn!("Cannot read current directory ({}), using '.'", e);
                PathBuf::from(".")
            }),
        };

        Self { project_root, args }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Execute the command.
    ///
    /// Only configuration errors are returned as `Err`. Missing variables
    /// and write failures fail the command only in strict mode.
    pub fn execute(&self, theme: &Theme) -> Result<CommandResult> {
        if !self.args.env_files.is_empty() {
            // A bad env file should not block generation.
            match EnvFileParser::preload(&self.args.env_files) {
                Ok(applied) => tracing::debug!("Preloaded {} variables", applied.len()),
                Err(e) => tracing::warn!("{}", e),
            }
        }

        let generator = Generator::from_file(&self.args.config, &self.project_root)?;
        let report = generator.generate();

        if !self.args.quiet {
            self.print_summary(&report, theme);
        }

        if self.args.strict && !report.is_clean() {
            eprintln!(
                "{}",
                theme.format_error("Strict mode: missing variables or failed writes")
            );
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }

    fn print_summary(&self, report: &GenerationReport, theme: &Theme) {
        let failed: Vec<_> = report.failures().map(|p| p.package.as_str()).collect();
        if !failed.is_empty() {
            let msg = format!("Could not write env files for: {}", failed.join(", "));
            println!("{}", theme.format_warning(&msg));
        }

        println!(
            "{}",
            theme.format_dim(&format!(
                "{} of {} env files written",
                report.written(),
                report.packages.len()
            ))
        );
        println!("{}", theme.format_success("Finished env files generation!"));
    }
}
