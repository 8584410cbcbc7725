//! Data models for Quill

mod entry;
mod tags;

pub use entry::{EntryDraft, EntryId, JournalEntry};
pub use tags::{add_tag, remove_tag, tag_counts};
