use quill_core::view::DashboardView;

use crate::commands::common::{
    entry_to_list_item, format_entry_lines, EntryListItem, StoreOptions,
};
use crate::error::CliError;

pub fn run_list(
    query: &str,
    show_all: bool,
    as_json: bool,
    options: &StoreOptions,
) -> Result<(), CliError> {
    let store = options.open()?;
    let view = DashboardView::build(&store.load(), query, show_all);

    if as_json {
        let json_items = view
            .entries
            .iter()
            .map(entry_to_list_item)
            .collect::<Vec<EntryListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
        return Ok(());
    }

    for line in format_dashboard_lines(&view) {
        println!("{line}");
    }

    Ok(())
}

pub fn format_dashboard_lines(view: &DashboardView) -> Vec<String> {
    if view.entries.is_empty() {
        return vec!["No entries found.".to_string()];
    }

    let mut lines = format_entry_lines(&view.entries);
    let hidden = view.hidden_count();
    if hidden > 0 {
        lines.push(format!(
            "{hidden} more (use --all to {})",
            view.toggle_label().to_lowercase()
        ));
    }
    lines
}
