//! Environment lookups for generation.
//!
//! - [`branch`] picks the branch suffix for the run
//! - [`variables`] resolves declared names into `NAME=value` lines
//!
//! Both accept an injectable lookup function so callers can resolve
//! against something other than the process environment.

pub mod branch;
pub mod variables;

pub use branch::{BranchSource, ResolvedBranch};
pub use variables::ResolvedVariables;
