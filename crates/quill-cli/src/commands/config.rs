use std::path::{Path, PathBuf};

use quill_core::config::QuillConfig;
use quill_core::storage::StorageBackend;

use crate::cli::ConfigCommands;
use crate::commands::common::{load_config, resolve_store_options};
use crate::error::CliError;

pub fn run_config(
    command: &ConfigCommands,
    config_path: &Path,
    cli_backend: Option<StorageBackend>,
    cli_data_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => run_config_show(config_path, cli_backend, cli_data_dir),
        ConfigCommands::Init => run_config_init(config_path, cli_backend, cli_data_dir),
    }
}

pub fn run_config_show(
    config_path: &Path,
    cli_backend: Option<StorageBackend>,
    cli_data_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let options = resolve_store_options(cli_data_dir, cli_backend, &config);

    println!("config:   {}", config_path.display());
    println!("backend:  {}", options.backend.as_str());
    println!("data dir: {}", options.data_dir.display());
    Ok(())
}

pub fn run_config_init(
    config_path: &Path,
    cli_backend: Option<StorageBackend>,
    cli_data_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut config = load_config(config_path)?;
    apply_config_overrides(&mut config, cli_backend, cli_data_dir);

    config
        .save_to_path(config_path)
        .map_err(|error| CliError::Config(error.to_string()))?;
    tracing::info!("Wrote config to {}", config_path.display());
    println!("{}", config_path.display());
    Ok(())
}

pub fn apply_config_overrides(
    config: &mut QuillConfig,
    backend: Option<StorageBackend>,
    data_dir: Option<PathBuf>,
) {
    if let Some(backend) = backend {
        config.backend = backend;
    }
    if let Some(data_dir) = data_dir {
        config.data_dir = Some(data_dir);
    }
}
