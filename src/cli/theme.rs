//! Visual theme and styling.

use console::Style;

/// Styles for the summary lines printed after a run.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (blue bold).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().blue().bold(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn detect(no_color: bool) -> Self {
        if no_color || !should_use_colors() {
            Self::plain()
        } else {
            Self::new()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(msg))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_dim(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

/// Check if log lines on stderr should carry ANSI colors.
pub fn should_color_logs(no_color: bool) -> bool {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stderr().is_term()
}
