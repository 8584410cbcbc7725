//! Tag editing rules for entry drafts
//!
//! Tags are kept in insertion order and compared case-sensitively, so
//! `"Work"` and `"work"` are distinct tags.

use std::collections::BTreeMap;

use super::JournalEntry;

/// Append a trimmed tag unless it is blank or already present
///
/// # Examples
///
/// ```
/// use quill_core::models::add_tag;
///
/// let tags = add_tag(&[], " travel ");
/// let tags = add_tag(&tags, "travel");
/// assert_eq!(tags, vec!["travel".to_string()]);
/// ```
#[must_use]
pub fn add_tag(current: &[String], candidate: &str) -> Vec<String> {
    let mut tags = current.to_vec();
    let candidate = candidate.trim();
    if candidate.is_empty() || tags.iter().any(|tag| tag == candidate) {
        return tags;
    }
    tags.push(candidate.to_string());
    tags
}

/// Remove the matching tag, keeping the order of the rest
#[must_use]
pub fn remove_tag(current: &[String], tag: &str) -> Vec<String> {
    let mut tags = current.to_vec();
    if let Some(position) = tags.iter().position(|existing| existing == tag) {
        tags.remove(position);
    }
    tags
}

/// Distinct tags across entries with the number of entries carrying each
#[must_use]
pub fn tag_counts(entries: &[JournalEntry]) -> Vec<(String, usize)> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        for tag in &entry.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}
