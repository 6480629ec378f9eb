use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use assetgen::{EmbedEngine, EmbedOptions, LocalFs, Mode, RunReport};

use crate::cli::RunArgs;
use crate::commands::load::{load_plan, Loaded};
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, EntryEvent, StartEvent, WarningEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::views::report::{
    render_failure_list, render_outcome, render_run_header, render_run_summary,
};

/// `generate` (mode `Write`) and `check` (mode `Check`)
pub fn cmd_generate(
    args: &RunArgs,
    mode: Mode,
    ui: &UiContext,
    cancel: Arc<AtomicBool>,
) -> Result<i32> {
    let command = match mode {
        Mode::Write => "generate",
        Mode::Check => "check",
    };
    let loaded = load_plan(&args.source)?;
    announce(command, &loaded, ui)?;

    let started = Instant::now();
    let report = run(&loaded, args, mode, cancel);
    report_failures(&report, ui);

    if ui.json {
        for outcome in report.outcomes() {
            emit_event(&EntryEvent::from_outcome(command, outcome))?;
        }
        emit_event(
            &CompleteEvent::from_report(command, &report)
                .with_duration(started.elapsed().as_millis() as u64),
        )?;
    } else {
        for outcome in report.outcomes() {
            if let Some(line) = render_outcome(outcome, ui.detailed(), ui.color, ui.unicode) {
                println!("{}", line);
            }
        }
        println!();
        print!("{}", render_run_summary(&report, ui.color, ui.unicode));
    }

    Ok(report.exit_code())
}

/// Start event or header, then warnings
pub(crate) fn announce(command: &str, loaded: &Loaded, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new(command, loaded.plan.len()))?;
        for warning in &loaded.warnings {
            emit_event(&WarningEvent::new(command, warning.as_str()))?;
        }
        return Ok(());
    }

    print!(
        "{}",
        render_run_header(
            command,
            loaded.manifest_path.as_deref(),
            loaded.plan.output_root(),
            loaded.plan.len(),
            ui.color,
            ui.unicode,
        )
    );
    for warning in &loaded.warnings {
        eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
    }
    println!();
    Ok(())
}

pub(crate) fn run(loaded: &Loaded, args: &RunArgs, mode: Mode, cancel: Arc<AtomicBool>) -> RunReport {
    let options = EmbedOptions {
        mode,
        jobs: args.jobs.unwrap_or(loaded.manifest.run.jobs),
        validate_svg: loaded.manifest.validate.svg,
    };
    EmbedEngine::new(LocalFs::new(), options)
        .with_cancel_flag(cancel)
        .run(&loaded.plan)
}

/// List failed entries on stderr (in every output mode), plus GitHub
/// annotations when running there
pub(crate) fn report_failures(report: &RunReport, ui: &UiContext) {
    if let Some(list) = render_failure_list(report, ui.color, ui.unicode) {
        eprint!("{}", list);
    }
    if ui.json || !ui.caps.is_github_actions {
        return;
    }
    for (entry, err) in report.failures() {
        let file = entry.source().display().to_string();
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                Some(&file),
                Some("assetgen"),
            )
        );
    }
}
