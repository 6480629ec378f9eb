use assetgen::AssetEntry;

use crate::ui::primitives::text::ColoredText;
use crate::ui::views::display_path;

/// Table of resolved entries: constant, source, output
pub fn render_entry_list(entries: &[AssetEntry], supports_color: bool) -> String {
    let width = entries
        .iter()
        .map(|e| e.constant_name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let constant = format!("{:<width$}", entry.constant_name());
        out.push_str(&format!(
            "{}  {} {} {}\n",
            ColoredText::info(constant).render(supports_color),
            display_path(entry.source()),
            ColoredText::dim("->").render(supports_color),
            display_path(entry.output()),
        ));
    }
    if entries.is_empty() {
        out.push_str(&ColoredText::dim("(no entries)").render(supports_color));
        out.push('\n');
    }
    out
}
