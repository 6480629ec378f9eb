use anyhow::Result;

use crate::cli::SourceArgs;
use crate::commands::generate::announce;
use crate::commands::load::load_plan;
use crate::commands::EXIT_OK;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{AssetEvent, CompleteEvent};
use crate::ui::views::list::render_entry_list;

/// Print resolved entries; sources are not read
pub fn cmd_list(args: &SourceArgs, ui: &UiContext) -> Result<i32> {
    let loaded = load_plan(args)?;
    announce("list", &loaded, ui)?;

    if ui.json {
        for entry in loaded.plan.entries() {
            emit_event(&AssetEvent::new(entry))?;
        }
        emit_event(&CompleteEvent::listed("list"))?;
    } else {
        print!("{}", render_entry_list(loaded.plan.entries(), ui.color));
    }

    Ok(EXIT_OK)
}
