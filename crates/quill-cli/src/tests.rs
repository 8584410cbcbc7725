use std::path::Path;

use pretty_assertions::assert_eq;
use quill_core::config::QuillConfig;
use quill_core::storage::StorageBackend;
use quill_core::view::DashboardView;
use quill_core::{EntryId, JournalEntry};
use tempfile::tempdir;

use crate::cli::{CompletionShell, ExportFormat};
use crate::commands::common::{
    default_editor, entry_preview, entry_to_list_item, format_entry_lines, non_blank_content,
    normalize_entry_identifier, render_entry_detail, require_title, resolve_store_options,
    truncate_chars, StoreOptions,
};
use crate::commands::completions::{render_completions, run_completions};
use crate::commands::config::{apply_config_overrides, run_config_init};
use crate::commands::delete::run_delete;
use crate::commands::export::run_export;
use crate::commands::list::format_dashboard_lines;
use crate::commands::new::run_new;
use crate::error::CliError;

fn entry(id: &str, title: &str, tags: &[&str]) -> JournalEntry {
    JournalEntry {
        id: EntryId::from(id),
        title: title.to_string(),
        date: "2024-07-14".to_string(),
        content: "Morning swim.\nAfternoon nap.".to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

fn file_store_options(dir: &Path) -> StoreOptions {
    StoreOptions {
        backend: StorageBackend::File,
        data_dir: dir.to_path_buf(),
    }
}

#[test]
fn non_blank_content_rejects_whitespace_only() {
    assert_eq!(
        non_blank_content("  hello  ".to_string()),
        Some("  hello  ".to_string())
    );
    assert_eq!(non_blank_content(" \n\t ".to_string()), None);
}

#[test]
fn non_blank_content_keeps_multiline_text_as_given() {
    assert_eq!(
        non_blank_content("line 1\nline 2\n".to_string()),
        Some("line 1\nline 2\n".to_string())
    );
}

#[test]
fn default_editor_is_defined() {
    assert!(!default_editor().is_empty());
}

#[test]
fn require_title_rejects_blank() {
    assert!(matches!(require_title("   "), Err(CliError::EmptyTitle)));
    assert_eq!(require_title(" Trip ").unwrap(), " Trip ");
}

#[test]
fn normalize_entry_identifier_rejects_empty() {
    assert!(matches!(
        normalize_entry_identifier(" \n "),
        Err(CliError::EmptyEntryId)
    ));
    assert_eq!(
        normalize_entry_identifier("  1700000000000  ").unwrap(),
        EntryId::from("1700000000000")
    );
}

#[test]
fn truncate_chars_adds_ellipsis() {
    assert_eq!(truncate_chars("short", 10), "short");
    assert_eq!(
        truncate_chars("This is a very long sentence", 12),
        "This is a..."
    );
}

#[test]
fn entry_preview_uses_first_line() {
    let preview = entry_preview(&entry("1", "Beach", &[]), 80);
    assert_eq!(preview, "Morning swim.");
}

#[test]
fn format_entry_lines_show_id_date_title_and_tags() {
    let lines = format_entry_lines(&[
        entry("1700000000000", "Beach", &["summer", "family", "sea"]),
        entry("1600000000000", "Quiet day", &[]),
    ]);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1700000000000  2024-07-14  Beach"));
    assert!(lines[0].ends_with("summer, family +1 more"));
    assert_eq!(lines[1], "1600000000000  2024-07-14  Quiet day");
}

#[test]
fn dashboard_lines_mention_hidden_entries() {
    let entries = (0..6)
        .map(|index| entry(&index.to_string(), "Day", &[]))
        .collect::<Vec<_>>();

    let collapsed = format_dashboard_lines(&DashboardView::build(&entries, "", false));
    assert_eq!(collapsed.len(), 5);
    assert_eq!(collapsed[4], "2 more (use --all to view all entries)");

    let expanded = format_dashboard_lines(&DashboardView::build(&entries, "", true));
    assert_eq!(expanded.len(), 6);

    let empty = format_dashboard_lines(&DashboardView::build(&entries, "xyz", false));
    assert_eq!(empty, vec!["No entries found.".to_string()]);
}

#[test]
fn render_entry_detail_lists_paragraphs_and_tags() {
    let rendered = render_entry_detail(&entry("1", "Beach", &["summer", "sea"]));
    assert_eq!(
        rendered,
        "Beach\nJuly 14, 2024\n\nMorning swim.\nAfternoon nap.\n\nTags: summer, sea\n"
    );
}

#[test]
fn entry_list_item_carries_long_date() {
    let item = entry_to_list_item(&entry("1", "Beach", &["sea"]));
    assert_eq!(item.long_date, "July 14, 2024");
    assert_eq!(item.tags, vec!["sea".to_string()]);
}

#[test]
fn resolve_store_options_prefers_explicit_flags() {
    let config = QuillConfig {
        backend: StorageBackend::File,
        data_dir: Some("/from/config".into()),
        ..QuillConfig::default()
    };

    let options = resolve_store_options(
        Some("/from/flag".into()),
        Some(StorageBackend::Memory),
        &config,
    );
    assert_eq!(options.backend, StorageBackend::Memory);
    assert_eq!(options.data_dir, Path::new("/from/flag"));

    let from_config = resolve_store_options(Some("/from/flag".into()), None, &config);
    assert_eq!(from_config.backend, StorageBackend::File);
}

#[test]
fn apply_config_overrides_only_touches_given_values() {
    let mut config = QuillConfig::default();
    apply_config_overrides(&mut config, Some(StorageBackend::File), None);

    assert_eq!(config.backend, StorageBackend::File);
    assert_eq!(config.data_dir, None);
}

#[test]
fn run_config_init_writes_config_file() {
    let tmp = tempdir().unwrap();
    let config_path = tmp.path().join("quill").join("config.json");

    run_config_init(
        &config_path,
        Some(StorageBackend::File),
        Some(tmp.path().join("data")),
    )
    .unwrap();

    let saved = QuillConfig::load_from_path(&config_path).unwrap();
    assert_eq!(saved.backend, StorageBackend::File);
    assert_eq!(saved.data_dir, Some(tmp.path().join("data")));
}

#[test]
fn run_new_persists_entry_with_deduplicated_tags() {
    let tmp = tempdir().unwrap();
    let options = file_store_options(tmp.path());
    let tags = vec!["travel".to_string(), " travel ".to_string(), "Travel".to_string()];

    run_new(
        "Trip",
        Some("2024-05-01"),
        &tags,
        &["Flew".to_string(), "north".to_string()],
        &options,
    )
    .unwrap();

    let entries = options.open().unwrap().load();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Trip");
    assert_eq!(entries[0].date, "2024-05-01");
    assert_eq!(entries[0].content, "Flew north");
    assert_eq!(
        entries[0].tags,
        vec!["travel".to_string(), "Travel".to_string()]
    );
}

#[test]
fn run_new_stores_title_and_content_as_given() {
    let tmp = tempdir().unwrap();
    let options = file_store_options(tmp.path());

    run_new(
        "  Trip ",
        Some("2024-05-01"),
        &[],
        &["  indented\n".to_string()],
        &options,
    )
    .unwrap();

    let entries = options.open().unwrap().load();
    assert_eq!(entries[0].title, "  Trip ");
    assert_eq!(entries[0].content, "  indented\n");
}

#[test]
fn run_new_rejects_invalid_date() {
    let tmp = tempdir().unwrap();
    let options = file_store_options(tmp.path());

    let error = run_new(
        "Trip",
        Some("yesterday"),
        &[],
        &["content".to_string()],
        &options,
    )
    .unwrap_err();
    assert!(matches!(
        error,
        CliError::Core(quill_core::Error::InvalidInput(_))
    ));
    assert!(options.open().unwrap().load().is_empty());
}

#[test]
fn run_delete_removes_entry_and_ignores_unknown_ids() {
    let tmp = tempdir().unwrap();
    let options = file_store_options(tmp.path());
    let store = options.open().unwrap();
    store.insert(entry("1", "Keep", &[])).unwrap();
    store.insert(entry("2", "Drop", &[])).unwrap();

    run_delete("2", &options).unwrap();
    run_delete("nonexistent", &options).unwrap();

    assert_eq!(store.load(), vec![entry("1", "Keep", &[])]);
}

#[test]
fn run_export_writes_json_file() {
    let tmp = tempdir().unwrap();
    let options = file_store_options(&tmp.path().join("data"));
    options
        .open()
        .unwrap()
        .insert(entry("1", "Export me", &["one"]))
        .unwrap();

    let output_path = tmp.path().join("export.json");
    run_export(ExportFormat::Json, Some(&output_path), &options).unwrap();

    let exported = std::fs::read_to_string(&output_path).unwrap();
    assert!(exported.contains("\"title\": \"Export me\""));
    assert!(exported.contains("\"tags\": [\n      \"one\"\n    ]"));
}

#[test]
fn run_export_into_directory_uses_suggested_name() {
    let tmp = tempdir().unwrap();
    let options = file_store_options(&tmp.path().join("data"));
    let out_dir = tmp.path().join("out");
    std::fs::create_dir_all(&out_dir).unwrap();

    run_export(ExportFormat::Markdown, Some(&out_dir), &options).unwrap();

    let names = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|item| item.unwrap().file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("quill-export-"));
    assert!(names[0].ends_with(".md"));
}

#[test]
fn run_completions_writes_bash_script_file() {
    let tmp = tempdir().unwrap();
    let output_path = tmp.path().join("quill.bash");

    run_completions(CompletionShell::Bash, Some(&output_path)).unwrap();

    let script = std::fs::read_to_string(&output_path).unwrap();
    assert!(script.contains("_quill()"));
    assert!(script.contains("complete -F _quill"));
}

#[test]
fn render_completions_covers_every_shell() {
    for shell in [
        CompletionShell::Bash,
        CompletionShell::Zsh,
        CompletionShell::Fish,
    ] {
        assert!(!render_completions(shell).is_empty());
    }
}
