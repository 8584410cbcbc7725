use crate::commands::common::{normalize_entry_identifier, StoreOptions};
use crate::error::CliError;

pub fn run_delete(id: &str, options: &StoreOptions) -> Result<(), CliError> {
    let entry_id = normalize_entry_identifier(id)?;
    let store = options.open()?;

    if store.delete_by_id(&entry_id)? {
        println!("{entry_id}");
    }
    Ok(())
}
