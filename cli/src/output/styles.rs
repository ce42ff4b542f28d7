//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Styles used by `azd` output. `Default` is plain text.
#[derive(Default, Clone)]
pub struct Styles {
    /// `✓` marks
    pub success: Style,
    /// `⚠` marks
    pub warning: Style,
    /// `ℹ` and `→` marks
    pub info: Style,
    /// Resource type constants and key labels
    pub dim: Style,
    pub bold: Style,
    /// Section titles
    pub header: Style,
}

impl Styles {
    /// Stylesheet for a color-capable terminal.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            info: Style::new().blue(),
            dim: Style::new().dimmed(),
            bold: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }
}
