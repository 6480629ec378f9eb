use assetgen::AssetgenError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::ErrorEvent};

fn format_assetgen_error(err: &AssetgenError, supports_color: bool, supports_unicode: bool) -> String {
    let block = match err {
        AssetgenError::ManifestParse { file, message } => ErrorBlock::new(message.as_str())
            .with_file(file)
            .with_fix("Pass --manifest <PATH>, or --scan <DIR> to discover assets by directory."),
        AssetgenError::DuplicateOutput { .. } => ErrorBlock::new(err.to_string())
            .with_fix("Give one of the entries a different name, platform or `output`."),
        AssetgenError::DuplicateSymbol { .. } => ErrorBlock::new(err.to_string())
            .with_fix("Constants must be unique per platform; rename one of the assets."),
        AssetgenError::InvalidName { asset, .. } => ErrorBlock::new(err.to_string())
            .with_file(asset)
            .with_fix("Use letters, digits and single inner '_', e.g. `run_icon` instead of `run-icon`."),
        AssetgenError::PathEscape { .. } => ErrorBlock::new(err.to_string())
            .with_fix("Use a relative `output` path without '..'."),
        AssetgenError::Scan { path, message } => ErrorBlock::new(message.as_str()).with_file(path),
        AssetgenError::Io(_) => ErrorBlock::new(err.to_string()),
    };
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(assetgen) = err.downcast_ref::<AssetgenError>() {
        return format_assetgen_error(assetgen, supports_color, supports_unicode);
    }

    ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode)
}

/// Report a run-level error: NDJSON on stdout with `--json`, otherwise a
/// block on stderr (plus an annotation on GitHub Actions).
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = emit_event(&ErrorEvent::from_error(err));
        return;
    }

    if ui.caps.is_github_actions {
        println!(
            "{}",
            github_actions_annotation(AnnotationLevel::Error, &err.to_string(), None, Some("assetgen"))
        );
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
