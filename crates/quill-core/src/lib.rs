//! quill-core - Core library for Quill
//!
//! This crate contains the entry model, the storage backends, and the
//! store/search/view logic used by the Quill command-line client.

pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod search;
pub mod storage;
pub mod store;
pub mod util;
pub mod view;

pub use error::{Error, Result};
pub use models::{EntryDraft, EntryId, JournalEntry};
pub use store::EntryStore;
