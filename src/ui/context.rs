use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, verbose, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            caps,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }

    /// Per-entry lines for unchanged entries too
    pub fn detailed(&self) -> bool {
        self.verbose > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: true,
            supports_unicode: true,
            is_ci,
            is_github_actions: false,
        }
    }

    #[test]
    fn auto_color_follows_terminal() {
        let ui = UiContext::from_caps(false, 0, None, tty_caps(false));
        assert!(ui.color);
    }

    #[test]
    fn ci_disables_auto_color() {
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Auto), tty_caps(true));
        assert!(!ui.color);
    }

    #[test]
    fn always_overrides_ci() {
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Always), tty_caps(true));
        assert!(ui.color);
    }

    #[test]
    fn json_never_colors() {
        let ui = UiContext::from_caps(true, 0, Some(ColorWhen::Always), tty_caps(false));
        assert!(!ui.color);
    }

    #[test]
    fn verbose_enables_detail() {
        assert!(UiContext::from_caps(false, 1, None, tty_caps(false)).detailed());
        assert!(!UiContext::from_caps(false, 0, None, tty_caps(false)).detailed());
    }
}
