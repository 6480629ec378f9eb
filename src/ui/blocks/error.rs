use std::path::PathBuf;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// A failure with an optional location and fix hint
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: Option<PathBuf>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            file: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );
        if let Some(file) = &self.file {
            out.push_str(&format!("  {}\n", file.display()));
        }
        for line in self.message.lines() {
            out.push_str(&format!("  {}\n", line));
        }
        if let Some(fix) = &self.fix {
            out.push_str(&format!(
                "  {} {}\n",
                ColoredText::info("FIX:").render(supports_color),
                fix
            ));
        }
        out
    }
}
