use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use quill_core::storage::StorageBackend;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Keep a personal journal of dated, tagged entries")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding journal data
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Storage backend override
    #[arg(long, global = true, value_enum)]
    pub backend: Option<BackendArg>,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new entry
    #[command(alias = "add")]
    New {
        /// Entry title
        #[arg(short, long)]
        title: String,
        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Tag to attach (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Entry content (read from stdin or $EDITOR when omitted)
        content: Vec<String>,
    },
    /// List recent entries
    List {
        /// Filter by title, content, tag, or date
        #[arg(short, long, default_value = "")]
        query: String,
        /// Show every match instead of the most recent four
        #[arg(short, long)]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single entry
    Show {
        /// Entry ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
    },
    /// List tags with entry counts
    Tags {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export entries
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Inspect or update the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl From<ExportFormat> for quill_core::export::ExportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => Self::Json,
            ExportFormat::Markdown => Self::Markdown,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum BackendArg {
    Sqlite,
    File,
    Memory,
}

impl From<BackendArg> for StorageBackend {
    fn from(backend: BackendArg) -> Self {
        match backend {
            BackendArg::Sqlite => Self::Sqlite,
            BackendArg::File => Self::File,
            BackendArg::Memory => Self::Memory,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write the config file, persisting --backend and --data-dir
    Init,
}
