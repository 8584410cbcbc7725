//! Quill CLI - keep a personal journal from the command line
//!
//! Running `quill` with no subcommand shows the dashboard: the four most
//! recent entries.

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::{load_config, resolve_config_path, resolve_store_options};
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::delete::run_delete;
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::new::run_new;
use crate::commands::show::run_show;
use crate::commands::tags::run_tags;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config);
    let cli_backend = cli.backend.map(Into::into);

    if let Some(Commands::Config { command }) = &cli.command {
        return run_config(command, &config_path, cli_backend, cli.data_dir);
    }
    if let Some(Commands::Completions { shell, output }) = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let config = load_config(&config_path)?;
    let options = resolve_store_options(cli.data_dir, cli_backend, &config);
    tracing::debug!(
        "Using {} storage in {}",
        options.backend.as_str(),
        options.data_dir.display()
    );

    match cli.command {
        Some(Commands::New {
            title,
            date,
            tags,
            content,
        }) => run_new(&title, date.as_deref(), &tags, &content, &options)?,
        Some(Commands::List { query, all, json }) => run_list(&query, all, json, &options)?,
        Some(Commands::Show { id, json }) => run_show(&id, json, &options)?,
        Some(Commands::Delete { id }) => run_delete(&id, &options)?,
        Some(Commands::Tags { json }) => run_tags(json, &options)?,
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &options)?;
        }
        Some(Commands::Config { .. } | Commands::Completions { .. }) => {}
        None => run_list("", false, false, &options)?,
    }

    Ok(())
}

fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    for directive in ["quill_core=info", "quill_cli=info"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
