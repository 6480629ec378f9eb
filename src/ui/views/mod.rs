pub mod diff;
pub mod list;
pub mod report;

use std::path::Path;

use crate::ui::primitives::icon::Icon;

/// Header icon for a command name
pub fn command_icon(command: &str) -> Icon {
    match command {
        "check" => Icon::Check,
        "diff" => Icon::Diff,
        "list" => Icon::List,
        _ => Icon::Generate,
    }
}

/// `path` relative to the working directory when it lies below it
pub fn display_path(path: &Path) -> String {
    match std::env::current_dir() {
        Ok(cwd) => relative_to(path, &cwd),
        Err(_) => path.display().to_string(),
    }
}

fn relative_to(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
