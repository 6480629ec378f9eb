//! assetgen CLI - embeds SVG and other text assets into C++ headers
//!
//! Usage: assetgen <COMMAND>
//!
//! Commands:
//!   generate  Write headers that are missing or out of date
//!   check     Fail if any header is missing or out of date
//!   diff      Show what generate would change
//!   list      Print the resolved entries

mod cli;
mod commands;
mod ui;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use assetgen::Mode;
use clap::Parser;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        if !cli.json {
            eprintln!("[WARN] Cannot install Ctrl+C handler: {}", e);
        }
    }

    let result = match &cli.command {
        Commands::Generate(args) => commands::generate::cmd_generate(args, Mode::Write, &ui, cancel),
        Commands::Check(args) => commands::generate::cmd_generate(args, Mode::Check, &ui, cancel),
        Commands::Diff(args) => commands::diff::cmd_diff(args, &ui, cancel),
        Commands::List(args) => commands::list::cmd_list(args, &ui),
    };

    let code = match result {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err, &ui);
            commands::exit_code_for(&err)
        }
    };
    std::process::exit(code);
}
