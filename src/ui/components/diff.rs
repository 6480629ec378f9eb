use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Unified diff of `old` (the header on disk, `None` when missing) against
/// `new`, with both line numbers in the gutter. Long equal runs are
/// collapsed to `context` lines around each change.
pub fn render_header_diff(
    path: &str,
    old: Option<&str>,
    new: &str,
    context: usize,
    supports_color: bool,
) -> String {
    let old_text = old.unwrap_or("");
    let diff = TextDiff::from_lines(old_text, new);
    let width = old_text
        .lines()
        .count()
        .max(new.lines().count())
        .max(1)
        .to_string()
        .len();

    let mut out = String::new();
    let header_a = match old {
        Some(_) => format!("--- a/{}", path),
        None => "--- /dev/null".to_string(),
    };
    let header_b = format!("+++ b/{}", path);
    out.push_str(&paint(&header_a, None, supports_color));
    out.push('\n');
    out.push_str(&paint(&header_b, None, supports_color));
    out.push('\n');

    for (i, group) in diff.grouped_ops(context).iter().enumerate() {
        if i > 0 {
            out.push_str(&paint("...", Some(ChangeTag::Equal), supports_color));
            out.push('\n');
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let old_col = change
                    .old_index()
                    .map(|n| format!("{:>width$}", n + 1))
                    .unwrap_or_else(|| " ".repeat(width));
                let new_col = change
                    .new_index()
                    .map(|n| format!("{:>width$}", n + 1))
                    .unwrap_or_else(|| " ".repeat(width));
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                let value = change.value().trim_end_matches('\n');
                let line = format!("{old_col} {new_col} {sign} {value}");
                out.push_str(&paint(&line, Some(change.tag()), supports_color));
                out.push('\n');
            }
        }
    }

    out
}

fn paint(s: &str, tag: Option<ChangeTag>, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }
    let color = match tag {
        None => theme::colors::INFO,
        Some(ChangeTag::Delete) => theme::colors::ERROR,
        Some(ChangeTag::Insert) => theme::colors::SUCCESS,
        Some(ChangeTag::Equal) => theme::colors::DIM,
    };
    format!("{}", s.with(color))
}
