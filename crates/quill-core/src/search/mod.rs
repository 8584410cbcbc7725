//! Free-text filtering over journal entries.
//!
//! Matching is a case-insensitive substring test against the title, the
//! content, the date string, and each tag. There is no index; every query is
//! a linear scan that keeps the input order.

use crate::models::JournalEntry;

/// Entries matching `query`, in their original order
///
/// An empty query matches every entry. The query is not trimmed, so a query
/// of a single space only matches entries containing a space.
#[must_use]
pub fn filter_entries(entries: &[JournalEntry], query: &str) -> Vec<JournalEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches_lowercase(entry, &needle))
        .cloned()
        .collect()
}

/// Whether a single entry matches `query`
#[must_use]
pub fn entry_matches(entry: &JournalEntry, query: &str) -> bool {
    matches_lowercase(entry, &query.to_lowercase())
}

fn matches_lowercase(entry: &JournalEntry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    contains_lowercase(&entry.title, needle)
        || contains_lowercase(&entry.content, needle)
        || entry.tags.iter().any(|tag| contains_lowercase(tag, needle))
        || contains_lowercase(&entry.date, needle)
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
