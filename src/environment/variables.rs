//! Variable resolution.
//!
//! Looks up declared variable names (with an optional suffix) in the
//! environment and splits them into `NAME=value` lines and missing names.

use std::env::VarError;

/// The outcome of resolving a list of variable names.
///
/// Every input name ends up in exactly one of `lines` or `missing`, and
/// both keep the input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedVariables {
    /// `NAME=value` lines for variables with a non-empty value.
    pub lines: Vec<String>,
    /// Names that were unset, empty, or not valid unicode.
    pub missing: Vec<String>,
}

impl ResolvedVariables {
    /// Resolve names against the process environment.
    ///
    /// Each name `V` is looked up as `V` + `suffix`; the output line keeps
    /// the bare name.
    ///
    /// # Example
    ///
    /// ```
    /// use envgen::environment::ResolvedVariables;
    ///
    /// std::env::set_var("ENVGEN_DOC_PORT_DEV", "3000");
    /// let names = vec!["ENVGEN_DOC_PORT".to_string(), "ENVGEN_DOC_UNSET".to_string()];
    /// let resolved = ResolvedVariables::resolve(&names, "_DEV");
    /// assert_eq!(resolved.lines, vec!["ENVGEN_DOC_PORT=3000"]);
    /// assert_eq!(resolved.missing, vec!["ENVGEN_DOC_UNSET"]);
    /// ```
    pub fn resolve(names: &[String], suffix: &str) -> Self {
        Self::resolve_with_env(names, suffix, |key| std::env::var(key))
    }

    /// Resolve with a custom env var lookup (for testing).
    pub fn resolve_with_env<F>(names: &[String], suffix: &str, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut resolved = Self::default();

        for name in names {
            match env_fn(&format!("{}{}", name, suffix)) {
                Ok(value) if !value.is_empty() => {
                    resolved.lines.push(format!("{}={}", name, value));
                }
                _ => resolved.missing.push(name.clone()),
            }
        }

        resolved
    }

    /// Whether any declared variable was missing.
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}
