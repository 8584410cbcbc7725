use quill_core::EntryDraft;

use crate::commands::common::{require_title, resolve_entry_content, StoreOptions};
use crate::error::CliError;

pub fn run_new(
    title: &str,
    date: Option<&str>,
    tags: &[String],
    content_parts: &[String],
    options: &StoreOptions,
) -> Result<(), CliError> {
    let title = require_title(title)?;
    let content = resolve_entry_content(content_parts)?;

    let mut draft = EntryDraft::new().with_title(title).with_content(content);
    if let Some(date) = date {
        draft = draft.with_date(date.trim());
    }
    for tag in tags {
        draft.add_tag(tag);
    }

    let store = options.open()?;
    let entry = store.create(draft)?;

    println!("{}", entry.id);
    Ok(())
}
