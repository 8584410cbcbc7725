use std::path::Path;

use quill_core::export::{render_entries_export, suggested_export_file_name};
use quill_core::util::unix_timestamp_millis_now;

use crate::cli::ExportFormat;
use crate::commands::common::StoreOptions;
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    options: &StoreOptions,
) -> Result<(), CliError> {
    let store = options.open()?;
    let entries = store.load();
    let format = format.into();
    let rendered = render_entries_export(&entries, format)?;

    if let Some(path) = output_path {
        let path = if path.is_dir() {
            path.join(suggested_export_file_name(
                format,
                unix_timestamp_millis_now(),
            ))
        } else {
            path.to_path_buf()
        };
        std::fs::write(&path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}
