//! Report colors.

use console::Style;

use crate::evaluate::Severity;

/// Styles used when rendering a report.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Style for Good findings (green).
    pub good: Style,
    /// Style for Maybe findings (yellow).
    pub maybe: Style,
    /// Style for Bad findings (red).
    pub bad: Style,
    /// Style for Neutral findings (unstyled).
    pub neutral: Style,
    /// Style for report and section titles (bold).
    pub title: Style,
    /// Style for the rules framing titles (dim).
    pub rule: Style,
}

impl Default for DoctorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            good: Style::new().green(),
            maybe: Style::new().yellow(),
            bad: Style::new().red(),
            neutral: Style::new(),
            title: Style::new().bold(),
            rule: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            good: Style::new(),
            maybe: Style::new(),
            bad: Style::new(),
            neutral: Style::new(),
            title: Style::new(),
            rule: Style::new(),
        }
    }

    /// Pick the theme for the current terminal.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Style for a finding of the given severity.
    pub fn severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Good => &self.good,
            Severity::Maybe => &self.maybe,
            Severity::Bad => &self.bad,
            Severity::Neutral => &self.neutral,
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
