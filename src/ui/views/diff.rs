use assetgen::{EntryOutcome, EntryStatus, RunReport};

use crate::ui::components::diff::render_header_diff;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::display_path;

/// Lines of unchanged context around each change
const CONTEXT: usize = 3;

/// Unified diff for a stale entry; `None` for any other status
pub fn render_entry_diff(outcome: &EntryOutcome, supports_color: bool) -> Option<String> {
    match &outcome.status {
        EntryStatus::Stale {
            previous,
            generated,
        } => Some(render_header_diff(
            &display_path(outcome.entry.output()),
            previous.as_deref(),
            generated,
            CONTEXT,
            supports_color,
        )),
        _ => None,
    }
}

pub fn render_diff_summary(report: &RunReport, supports_color: bool, supports_unicode: bool) -> String {
    let created = report
        .outcomes()
        .iter()
        .filter(|o| matches!(o.status, EntryStatus::Stale { previous: None, .. }))
        .count();
    let modified = report.stale_count() - created;

    format!(
        "{} {} new, {} modified, {} unchanged, {} failed\n",
        Icon::Diff.colored(supports_color, supports_unicode),
        created,
        modified,
        report.unchanged_count(),
        report.failed_count()
    )
}
