//! Entry export helpers (JSON and Markdown).

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::models::JournalEntry;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Render entries as pretty-printed JSON in the stored schema.
pub fn render_json_export(entries: &[JournalEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

/// Render entries in Markdown with frontmatter blocks.
///
/// Title and tags are written as double-quoted scalars so any text stays
/// valid YAML.
pub fn render_markdown_export(entries: &[JournalEntry]) -> serde_json::Result<String> {
    let mut output = String::new();

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let _ = writeln!(output, "---");
        let _ = writeln!(output, "id: {}", entry.id);
        let _ = writeln!(output, "title: {}", quoted_scalar(&entry.title)?);
        let _ = writeln!(output, "date: {}", entry.date);
        let _ = writeln!(output, "tags:");
        for tag in &entry.tags {
            let _ = writeln!(output, "  - {}", quoted_scalar(tag)?);
        }
        let _ = writeln!(output, "---");
        let _ = writeln!(output);
        output.push_str(&entry.content);
        output.push('\n');
    }

    Ok(output)
}

// A JSON string literal is also a valid YAML double-quoted scalar
fn quoted_scalar(value: &str) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Render entries based on selected export format.
pub fn render_entries_export(
    entries: &[JournalEntry],
    format: ExportFormat,
) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(entries),
        ExportFormat::Markdown => render_markdown_export(entries),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("quill-export-{timestamp_ms}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryId;

    fn sample() -> JournalEntry {
        JournalEntry {
            id: EntryId::from("1700000000000"),
            title: "Harbor walk".to_string(),
            date: "2024-04-02".to_string(),
            content: "Fog all morning.\nClear by noon.".to_string(),
            tags: vec!["walks".to_string(), "sea".to_string()],
        }
    }

    #[test]
    fn json_export_uses_stored_field_names() {
        let rendered = render_json_export(&[sample()]).unwrap();
        let parsed: Vec<JournalEntry> = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed, vec![sample()]);
        assert!(rendered.contains("\"title\": \"Harbor walk\""));
    }

    #[test]
    fn markdown_export_includes_frontmatter_and_content() {
        let rendered = render_markdown_export(&[sample()]).unwrap();
        assert!(rendered.contains("id: 1700000000000"));
        assert!(rendered.contains("title: \"Harbor walk\""));
        assert!(rendered.contains("date: 2024-04-02"));
        assert!(rendered.contains("tags:\n  - \"walks\"\n  - \"sea\""));
        assert!(rendered.contains("Fog all morning.\nClear by noon."));
    }

    #[test]
    fn markdown_frontmatter_escapes_colons_quotes_and_newlines() {
        let mut entry = sample();
        entry.title = "Note: \"late\"\nsecond line".to_string();
        entry.tags = vec!["a: b".to_string()];

        let rendered = render_markdown_export(&[entry]).unwrap();
        let frontmatter = rendered.split("---\n").nth(1).unwrap();

        assert!(frontmatter.contains("title: \"Note: \\\"late\\\"\\nsecond line\"\n"));
        assert!(frontmatter.contains("  - \"a: b\"\n"));
        assert_eq!(frontmatter.lines().count(), 5);
    }

    #[test]
    fn suggested_export_file_name_uses_format_extension() {
        assert_eq!(
            suggested_export_file_name(ExportFormat::Json, 123),
            "quill-export-123.json"
        );
        assert_eq!(
            suggested_export_file_name(ExportFormat::Markdown, 456),
            "quill-export-456.md"
        );
    }
}
