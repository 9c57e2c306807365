//! `mahameru-store` — the system of record for the inventory engine.
//!
//! The engine never talks to a concrete storage backend; it is handed a
//! [`RecordStore`] capability with full-collection reads and an atomic
//! multi-collection write ([`WriteBatch`]). Two implementations ship here:
//! an in-memory store for tests and demos, and a JSON-file store that keeps
//! one document per collection key on local disk.

pub mod in_memory;
pub mod json_file;
pub mod record_store;
pub mod seed;

pub use in_memory::InMemoryRecordStore;
pub use json_file::JsonFileStore;
pub use record_store::{RecordStore, StoreError, WriteBatch};
