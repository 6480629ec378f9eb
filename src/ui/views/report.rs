use std::path::Path;

use assetgen::{EntryOutcome, EntryStatus, Mode, RunReport};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::{command_icon, display_path};

pub fn render_run_header(
    command: &str,
    manifest: Option<&Path>,
    output_root: &Path,
    entries: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(command_icon(command), format!("assetgen {}", command));
    header.add(
        "Manifest",
        manifest
            .map(display_path)
            .unwrap_or_else(|| "(directory scan)".to_string()),
    );
    header.add("Output", display_path(output_root));
    header.add("Entries", entries.to_string());
    header.render(supports_color, supports_unicode)
}

/// One line per entry; unchanged entries only when `detailed`
pub fn render_outcome(
    outcome: &EntryOutcome,
    detailed: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let path = display_path(outcome.entry.output());
    let (icon, note) = match &outcome.status {
        EntryStatus::Written { created: true } => (Icon::Success, ColoredText::dim("created")),
        EntryStatus::Written { created: false } => (Icon::Success, ColoredText::dim("updated")),
        EntryStatus::Unchanged if detailed => (Icon::Unchanged, ColoredText::dim("unchanged")),
        EntryStatus::Unchanged => return None,
        EntryStatus::Stale { previous: None, .. } => (Icon::Stale, ColoredText::warning("missing")),
        EntryStatus::Stale { .. } => (Icon::Stale, ColoredText::warning("out of date")),
        EntryStatus::Failed(_) => (Icon::Error, ColoredText::error("failed")),
        EntryStatus::Cancelled => (Icon::Skipped, ColoredText::dim("cancelled")),
    };

    let mut line = format!(
        "{} {} {}",
        icon.colored(supports_color, supports_unicode),
        path,
        note.render(supports_color)
    );

    if let EntryStatus::Failed(err) = &outcome.status {
        line.push_str(&format!(
            "\n    {} {}",
            Icon::Arrow.colored(supports_color, supports_unicode),
            err
        ));
    } else if detailed {
        let mut details = vec![outcome.entry.constant_name()];
        if let Some(hash) = &outcome.hash {
            details.push(format!("sha256:{}", hash.short()));
        }
        if let Some(delimiter) = &outcome.delimiter {
            details.push(format!("delimiter {}", delimiter));
        }
        line.push_str(&format!(
            "\n    {}",
            ColoredText::dim(details.join("  ")).render(supports_color)
        ));
    }

    Some(line)
}

/// One block per failed entry, keyed by source; `None` when nothing failed
pub fn render_failure_list(
    report: &RunReport,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    if report.failed_count() == 0 {
        return None;
    }

    let mut out = String::new();
    for (entry, err) in report.failures() {
        out.push_str(&format!(
            "{} {}
    {} {}
",
            Icon::Error.colored(supports_color, supports_unicode),
            display_path(entry.source()),
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::error(err.to_string()).render(supports_color),
        ));
    }
    Some(out)
}

pub fn render_run_summary(
    report: &RunReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = match report.mode() {
        Mode::Write if report.is_success() && report.written_count() == 0 => {
            ResultSummary::success(format!("All {} headers up to date", report.len()))
        }
        Mode::Write if report.is_success() => {
            ResultSummary::success(format!("Generated {} headers", report.len()))
        }
        Mode::Check if report.is_success() => {
            ResultSummary::success(format!("All {} headers up to date", report.len()))
        }
        Mode::Check if report.stale_count() > 0 => {
            let mut s = ResultSummary::failure(format!(
                "{} of {} headers out of date",
                report.stale_count(),
                report.len()
            ));
            s.with_next_step("Run `assetgen generate` to update them");
            s
        }
        _ if report.cancelled_count() > 0 => ResultSummary::failure("Interrupted"),
        _ => ResultSummary::failure(format!(
            "{} of {} entries failed",
            report.failed_count(),
            report.len()
        )),
    };

    summary.add_stat("written", report.written_count());
    summary.add_stat("unchanged", report.unchanged_count());
    summary.add_stat("stale", report.stale_count());
    summary.add_stat("failed", report.failed_count());
    summary.add_stat("cancelled", report.cancelled_count());
    summary.render(supports_color, supports_unicode)
}
