//! The entry store: the persisted, newest-first collection of journal entries.
//!
//! The whole collection is serialized as one JSON array under a single
//! storage key. Every mutation reloads the persisted collection before
//! writing it back, so concurrent writers resolve as last-write-wins.

use crate::error::{Error, Result};
use crate::models::{EntryDraft, EntryId, JournalEntry};
use crate::storage::KeyValueStorage;
use crate::util::unix_timestamp_millis_now;

/// Storage key holding the serialized entry collection
pub const ENTRIES_KEY: &str = "journalEntries";

/// Handle over the entry collection in a storage backend
pub struct EntryStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> EntryStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Get a reference to the underlying storage
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load every entry, newest first
    ///
    /// A missing key, a failed read, or data that does not parse all count as
    /// an empty journal.
    pub fn load(&self) -> Vec<JournalEntry> {
        match self.storage.get_item(ENTRIES_KEY) {
            Ok(raw) => raw.as_deref().map_or_else(Vec::new, parse_entries),
            Err(error) => {
                tracing::warn!("Failed to read stored entries, treating as empty: {}", error);
                Vec::new()
            }
        }
    }

    /// Load the collection a mutation is about to overwrite
    ///
    /// Read failures are returned so a write never replaces entries it could
    /// not see.
    fn load_for_write(&self) -> Result<Vec<JournalEntry>> {
        let raw = self.storage.get_item(ENTRIES_KEY)?;
        Ok(raw.as_deref().map_or_else(Vec::new, parse_entries))
    }

    /// Overwrite the stored collection in one write
    pub fn save(&self, entries: &[JournalEntry]) -> Result<()> {
        let serialized = serde_json::to_string(entries)?;
        self.storage.set_item(ENTRIES_KEY, &serialized)?;
        tracing::debug!("Saved {} entries", entries.len());
        Ok(())
    }

    /// Prepend `entry` to the persisted collection
    ///
    /// Fails with [`Error::InvalidInput`] when the id is already taken.
    pub fn insert(&self, entry: JournalEntry) -> Result<()> {
        let entries = self.load_for_write()?;
        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(Error::InvalidInput(format!(
                "an entry with id {} already exists",
                entry.id
            )));
        }
        self.prepend_and_save(entries, entry)
    }

    /// Validate a draft, assign it a fresh id, and insert it
    pub fn create(&self, draft: EntryDraft) -> Result<JournalEntry> {
        draft.validate()?;
        let entries = self.load_for_write()?;
        let id = next_entry_id(unix_timestamp_millis_now(), &entries);
        let entry = draft.into_entry(id)?;

        self.prepend_and_save(entries, entry.clone())?;
        tracing::info!("Created entry {} ({})", entry.id, entry.date);
        Ok(entry)
    }

    /// Remove the entry with `id`
    ///
    /// Returns `false` without writing when no entry matches.
    pub fn delete_by_id(&self, id: &EntryId) -> Result<bool> {
        let mut entries = self.load_for_write()?;
        let before = entries.len();
        entries.retain(|entry| &entry.id != id);

        if entries.len() == before {
            tracing::debug!("Delete skipped, no entry with id {}", id);
            return Ok(false);
        }

        self.save(&entries)?;
        tracing::info!("Deleted entry {}", id);
        Ok(true)
    }

    /// Find an entry by id with a linear scan
    pub fn find_by_id(&self, id: &EntryId) -> Option<JournalEntry> {
        self.load().into_iter().find(|entry| &entry.id == id)
    }

    /// Drop the whole collection
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(ENTRIES_KEY)
    }

    fn prepend_and_save(&self, mut entries: Vec<JournalEntry>, entry: JournalEntry) -> Result<()> {
        entries.insert(0, entry);
        self.save(&entries)
    }
}

fn parse_entries(raw: &str) -> Vec<JournalEntry> {
    match serde_json::from_str::<Vec<JournalEntry>>(raw) {
        Ok(entries) => {
            tracing::debug!("Loaded {} entries", entries.len());
            entries
        }
        Err(error) => {
            tracing::warn!("Stored entries are malformed, treating as empty: {}", error);
            Vec::new()
        }
    }
}

/// Pick an id from `now_ms`, stepping forward past ids already in use
fn next_entry_id(now_ms: i64, entries: &[JournalEntry]) -> EntryId {
    let mut candidate = now_ms;
    loop {
        let id = EntryId::from_timestamp_millis(candidate);
        if !entries.iter().any(|entry| entry.id == id) {
            return id;
        }
        candidate += 1;
    }
}
