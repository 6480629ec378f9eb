use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use assetgen::Mode;

use crate::cli::RunArgs;
use crate::commands::generate::{announce, report_failures, run};
use crate::commands::load::load_plan;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, EntryEvent};
use crate::ui::views::diff::{render_diff_summary, render_entry_diff};
use crate::ui::views::report::render_outcome;

/// Like `check`, plus a unified diff per stale header
pub fn cmd_diff(args: &RunArgs, ui: &UiContext, cancel: Arc<AtomicBool>) -> Result<i32> {
    let loaded = load_plan(&args.source)?;
    announce("diff", &loaded, ui)?;

    let report = run(&loaded, args, Mode::Check, cancel);
    report_failures(&report, ui);

    if ui.json {
        for outcome in report.outcomes() {
            let mut event = EntryEvent::from_outcome("diff", outcome);
            if let Some(diff) = render_entry_diff(outcome, false) {
                event = event.with_diff(diff);
            }
            emit_event(&event)?;
        }
        emit_event(&CompleteEvent::from_report("diff", &report))?;
        return Ok(report.exit_code());
    }

    for outcome in report.outcomes() {
        match render_entry_diff(outcome, ui.color) {
            Some(diff) => println!("{}", diff),
            None => {
                if let Some(line) = render_outcome(outcome, ui.detailed(), ui.color, ui.unicode) {
                    println!("{}", line);
                }
            }
        }
    }
    print!("{}", render_diff_summary(&report, ui.color, ui.unicode));

    Ok(report.exit_code())
}
