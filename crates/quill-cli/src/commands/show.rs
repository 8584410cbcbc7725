use crate::commands::common::{normalize_entry_identifier, render_entry_detail, StoreOptions};
use crate::error::CliError;

pub const NOT_FOUND_MESSAGE: &str = "Entry not found";

pub fn run_show(id: &str, as_json: bool, options: &StoreOptions) -> Result<(), CliError> {
    let entry_id = normalize_entry_identifier(id)?;
    let store = options.open()?;

    match store.find_by_id(&entry_id) {
        Some(entry) if as_json => println!("{}", serde_json::to_string_pretty(&entry)?),
        Some(entry) => print!("{}", render_entry_detail(&entry)),
        None => println!("{NOT_FOUND_MESSAGE}"),
    }

    Ok(())
}
