use quill_core::models::tag_counts;
use serde::Serialize;

use crate::commands::common::StoreOptions;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct TagCountItem {
    pub tag: String,
    pub entries: usize,
}

pub fn run_tags(as_json: bool, options: &StoreOptions) -> Result<(), CliError> {
    let store = options.open()?;
    let counts = tag_counts(&store.load());

    if as_json {
        let items = counts
            .into_iter()
            .map(|(tag, entries)| TagCountItem { tag, entries })
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for (tag, entries) in counts {
            println!("{tag:<24}  {entries}");
        }
    }

    Ok(())
}
