//! .env file parsing and preloading.
//!
//! Supplementary env files given on the command line are parsed here and
//! loaded into the process environment before generation starts.

use crate::error::{EnvgenError, Result as EnvgenResult};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment` or `KEY=value # trailing`
/// - Escapes in double quotes: `KEY="line one\nline two"`
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// # Example
///
/// ```
/// use envgen::config::EnvFileParser;
///
/// let content = r#"
/// # Database config
/// export DATABASE_URL=postgres://localhost/db
/// DEBUG="true"
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content).unwrap();
/// assert_eq!(vars.get("DATABASE_URL"), Some(&"postgres://localhost/db".to_string()));
/// assert_eq!(vars.get("DEBUG"), Some(&"true".to_string()));
/// assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse an env file content string into a map of variables.
    pub fn parse(content: &str) -> Result<HashMap<String, String>> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        Ok(vars)
    }

    /// Parse a single line.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").map_or(line, str::trim_start);
        let eq_pos = line.find('=')?;
        let key = line[..eq_pos].trim();
        if key.is_empty() {
            return None;
        }
        let value = Self::parse_value(line[eq_pos + 1..].trim());

        Some((key.to_string(), value))
    }

    /// Unquote a raw value.
    ///
    /// Double-quoted values expand `\n`, `\r`, `\t`, `\"` and `\\`.
    /// Single-quoted values are literal. Unquoted values lose a trailing
    /// ` # comment`. Text after a closing quote is ignored.
    fn parse_value(raw: &str) -> String {
        if let Some(rest) = raw.strip_prefix('"') {
            if let Some(end) = Self::closing_double_quote(rest) {
                return Self::unescape(&rest[..end]);
            }
        } else if let Some(rest) = raw.strip_prefix('\'') {
            if let Some(end) = rest.find('\'') {
                return rest[..end].to_string();
            }
        }

        Self::strip_inline_comment(raw).to_string()
    }

    /// Byte offset of the first unescaped `"`.
    fn closing_double_quote(value: &str) -> Option<usize> {
        let mut escaped = false;
        for (i, c) in value.char_indices() {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => return Some(i),
                _ => {}
            }
        }
        None
    }

    fn unescape(value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        let mut chars = value.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some(other @ ('"' | '\\')) => out.push(other),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        }
        out
    }

    /// `#` only starts a comment after whitespace, so `a#b` is kept whole.
    fn strip_inline_comment(value: &str) -> &str {
        let mut prev_space = false;
        for (i, c) in value.char_indices() {
            if c == '#' && prev_space {
                return value[..i].trim_end();
            }
            prev_space = c.is_whitespace();
        }
        value
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::parse(&content)
    }

    /// Load env files into the process environment.
    ///
    /// Files are applied in order. A variable is only set when it is not
    /// already present, so the real environment and earlier files take
    /// precedence. Loading stops at the first file that cannot be read;
    /// files before it stay applied.
    ///
    /// Must run before any generation worker is spawned.
    ///
    /// Returns the names of the variables that were set, per file in
    /// sorted order.
    pub fn preload(paths: &[PathBuf]) -> EnvgenResult<Vec<String>> {
        let mut applied = Vec::new();

        for path in paths {
            let vars = Self::load(path).map_err(|e| EnvgenError::EnvFile {
                path: path.clone(),
                message: format!("{:#}", e),
            })?;

            let mut keys: Vec<_> = vars.keys().cloned().collect();
            keys.sort();

            let before = applied.len();
            for key in keys {
                if std::env::var_os(&key).is_some() {
                    continue;
                }
                std::env::set_var(&key, &vars[&key]);
                applied.push(key);
            }

            tracing::debug!(
                "Loaded {} variables from {}",
                applied.len() - before,
                path.display()
            );
        }

        Ok(applied)
    }
}
