//! Journal entry model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::tags;
use crate::error::{Error, Result};
use crate::util::{parse_entry_date, today_utc};

/// A unique identifier for an entry, derived from its creation time
///
/// Rendered as the decimal Unix timestamp in milliseconds, so ids created
/// later sort after earlier ones when compared numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Create an ID from a Unix timestamp in milliseconds
    #[must_use]
    pub fn from_timestamp_millis(timestamp_ms: i64) -> Self {
        Self(timestamp_ms.to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creation timestamp encoded in the ID, if it is numeric
    #[must_use]
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for EntryId {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("entry id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A journal entry as persisted in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier, immutable after creation
    pub id: EntryId,
    /// User-supplied title
    pub title: String,
    /// Calendar date (`YYYY-MM-DD`)
    pub date: String,
    /// Free text body
    pub content: String,
    /// Ordered, duplicate-free tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl JournalEntry {
    /// Split the content into paragraphs on newline characters
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

/// An entry being composed, before it has an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub date: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryDraft {
    /// Empty draft dated today (UTC)
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            date: today_utc(),
            content: String::new(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Add a tag through the tag editor rules (trimmed, no duplicates)
    pub fn add_tag(&mut self, candidate: &str) {
        self.tags = tags::add_tag(&self.tags, candidate);
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags = tags::remove_tag(&self.tags, tag);
    }

    /// Whether both title and content hold non-whitespace text
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidInput("entry title cannot be empty".into()));
        }
        if self.content.trim().is_empty() {
            return Err(Error::InvalidInput("entry content cannot be empty".into()));
        }
        if parse_entry_date(&self.date).is_none() {
            return Err(Error::InvalidInput(format!(
                "entry date '{}' is not a valid YYYY-MM-DD date",
                self.date
            )));
        }
        Ok(())
    }

    /// Validate the draft and turn it into a persisted entry shape
    pub fn into_entry(self, id: EntryId) -> Result<JournalEntry> {
        self.validate()?;
        Ok(JournalEntry {
            id,
            title: self.title,
            date: self.date.trim().to_string(),
            content: self.content,
            tags: self.tags,
        })
    }
}
