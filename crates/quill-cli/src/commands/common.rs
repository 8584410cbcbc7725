use std::env;
use std::fmt::Write as _;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use quill_core::config::{QuillConfig, CONFIG_FILE_NAME};
use quill_core::storage::{open_storage, KeyValueStorage, StorageBackend};
use quill_core::view::{format_long_date, tag_summary};
use quill_core::{EntryId, EntryStore, JournalEntry};
use serde::Serialize;

use crate::error::CliError;

pub const DATA_DIR_ENV: &str = "QUILL_DATA_DIR";
pub const CONFIG_PATH_ENV: &str = "QUILL_CONFIG";

pub type Store = EntryStore<Box<dyn KeyValueStorage>>;

/// Where the journal lives and which backend reads it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
}

impl StoreOptions {
    pub fn open(&self) -> Result<Store, CliError> {
        let storage = open_storage(self.backend, &self.data_dir)?;
        Ok(EntryStore::new(storage))
    }
}

#[derive(Debug, Serialize)]
pub struct EntryListItem {
    pub id: String,
    pub title: String,
    pub date: String,
    pub long_date: String,
    pub preview: String,
    pub tags: Vec<String>,
}

pub fn entry_to_list_item(entry: &JournalEntry) -> EntryListItem {
    EntryListItem {
        id: entry.id.to_string(),
        title: entry.title.clone(),
        date: entry.date.clone(),
        long_date: format_long_date(&entry.date),
        preview: entry_preview(entry, 80),
        tags: entry.tags.clone(),
    }
}

pub fn format_entry_lines(entries: &[JournalEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let title = truncate_chars(&collapse_whitespace(&entry.title), 32);
            let tags = tag_summary(&entry.tags);

            if tags.is_empty() {
                format!("{:<13}  {}  {title}", entry.id, entry.date)
            } else {
                format!("{:<13}  {}  {title:<32}  {tags}", entry.id, entry.date)
            }
        })
        .collect()
}

/// Full detail rendering: title, long date, paragraphs, then tags
pub fn render_entry_detail(entry: &JournalEntry) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", entry.title);
    let _ = writeln!(output, "{}", format_long_date(&entry.date));
    let _ = writeln!(output);
    for paragraph in entry.paragraphs() {
        let _ = writeln!(output, "{paragraph}");
    }
    if !entry.tags.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "Tags: {}", entry.tags.join(", "));
    }
    output
}

pub fn entry_preview(entry: &JournalEntry, max_chars: usize) -> String {
    let first_line = entry.content.lines().next().unwrap_or("");
    truncate_chars(&collapse_whitespace(first_line), max_chars)
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = value.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

/// Reject a blank title, keeping the text as typed otherwise
pub fn require_title(title: &str) -> Result<&str, CliError> {
    if title.trim().is_empty() {
        Err(CliError::EmptyTitle)
    } else {
        Ok(title)
    }
}

pub fn normalize_entry_identifier(id: &str) -> Result<EntryId, CliError> {
    id.parse::<EntryId>().map_err(|_| CliError::EmptyEntryId)
}

pub fn resolve_entry_content(content_parts: &[String]) -> Result<String, CliError> {
    if let Some(content) = non_blank_content(content_parts.join(" ")) {
        return Ok(content);
    }

    if let Some(content) = read_piped_stdin()? {
        return Ok(content);
    }

    if let Some(content) = capture_editor_input()? {
        return Ok(content);
    }

    Err(CliError::EmptyContent)
}

pub fn non_blank_content(content: String) -> Option<String> {
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(non_blank_content(buffer))
}

pub fn capture_editor_input() -> Result<Option<String>, CliError> {
    let editor = preferred_editor();
    let temp_file = create_temp_entry_file_path();
    std::fs::write(&temp_file, "")?;

    let launch_result = launch_editor(&editor, &temp_file);
    let content = std::fs::read_to_string(&temp_file)?;
    let _ = std::fs::remove_file(&temp_file);

    launch_result?;
    Ok(non_blank_content(content))
}

pub fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    match Command::new(editor).arg(file_path).status() {
        Ok(status) => {
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // EDITOR may carry arguments, e.g. "code --wait"
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                return Err(CliError::EditorFailed("empty EDITOR command".into()));
            };

            let mut command = Command::new(program);
            command.args(parts).arg(file_path);

            let status = command.status()?;
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) => Err(CliError::Io(err)),
    }
}

pub fn preferred_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| default_editor().to_string())
}

pub const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

pub fn create_temp_entry_file_path() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    env::temp_dir().join(format!("quill-entry-{}-{now}.md", std::process::id()))
}

pub fn resolve_config_path(cli_config_path: Option<PathBuf>) -> PathBuf {
    cli_config_path
        .or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(default_config_path)
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quill")
        .join(CONFIG_FILE_NAME)
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quill")
}

pub fn load_config(path: &Path) -> Result<QuillConfig, CliError> {
    QuillConfig::load_from_path(path).map_err(|error| CliError::Config(error.to_string()))
}

/// Flag, then `QUILL_DATA_DIR`, then the config file, then the platform default
pub fn resolve_store_options(
    cli_data_dir: Option<PathBuf>,
    cli_backend: Option<StorageBackend>,
    config: &QuillConfig,
) -> StoreOptions {
    let data_dir = cli_data_dir
        .or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(default_data_dir);

    StoreOptions {
        backend: cli_backend.unwrap_or(config.backend),
        data_dir,
    }
}
