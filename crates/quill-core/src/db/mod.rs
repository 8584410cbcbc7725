//! Database layer for Quill

mod connection;
mod migrations;

pub use connection::Database;
