use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Stale,
    Unchanged,
    Skipped,
    Arrow,
    Generate,
    Check,
    Diff,
    List,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            match self {
                Icon::Success => theme::icons::SUCCESS,
                Icon::Error => theme::icons::ERROR,
                Icon::Warning => theme::icons::WARNING,
                Icon::Stale => theme::icons::STALE,
                Icon::Unchanged => theme::icons::UNCHANGED,
                Icon::Skipped => theme::icons::SKIPPED,
                Icon::Arrow => theme::icons::ARROW,
                Icon::Generate => theme::icons::GENERATE,
                Icon::Check => theme::icons::CHECK,
                Icon::Diff => theme::icons::DIFF,
                Icon::List => theme::icons::LIST,
            }
        } else {
            match self {
                Icon::Success => theme::icons_ascii::SUCCESS,
                Icon::Error => theme::icons_ascii::ERROR,
                Icon::Warning => theme::icons_ascii::WARNING,
                Icon::Stale => theme::icons_ascii::STALE,
                Icon::Unchanged => theme::icons_ascii::UNCHANGED,
                Icon::Skipped => theme::icons_ascii::SKIPPED,
                Icon::Arrow => theme::icons_ascii::ARROW,
                Icon::Generate => theme::icons_ascii::GENERATE,
                Icon::Check => theme::icons_ascii::CHECK,
                Icon::Diff => theme::icons_ascii::DIFF,
                Icon::List => theme::icons_ascii::LIST,
            }
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Stale => theme::colors::WARNING,
            Icon::Unchanged | Icon::Skipped | Icon::Arrow => theme::colors::DIM,
            Icon::Generate | Icon::Check | Icon::Diff | Icon::List => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
