use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Closing block of a run: a title line, counts, and an optional hint
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            success: true,
            stats: Vec::new(),
            next_step: None,
        }
    }

    pub fn failure(title: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(title)
        }
    }

    /// Zero counts are left out
    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        if count > 0 {
            self.stats.push((label.into(), count));
        }
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title) = if self.success {
            (
                Icon::Success,
                ColoredText::success(self.title.as_str()).bold(),
            )
        } else {
            (Icon::Error, ColoredText::error(self.title.as_str()).bold())
        };

        let mut out = format!(
            "{} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.render(supports_color)
        );

        if !self.stats.is_empty() {
            let stats: Vec<String> = self
                .stats
                .iter()
                .map(|(label, count)| format!("{} {}", count, label))
                .collect();
            out.push_str(&format!("  {}\n", stats.join(", ")));
        }

        if let Some(hint) = &self.next_step {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim(hint.as_str()).render(supports_color)
            ));
        }

        out
    }
}
