//! Command-line interface for envgen.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`generate`] - The generate command
//! - [`theme`] - Terminal styling for summary output

pub mod args;
pub mod generate;
pub mod theme;

pub use args::Cli;
pub use generate::{CommandResult, GenerateCommand};
pub use theme::{should_color_logs, should_use_colors, Theme};
