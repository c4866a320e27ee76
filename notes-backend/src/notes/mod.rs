//! Notes system: the store seam the HTTP handlers talk to.
//!
//! Handlers only see `NoteStore` and its tagged `StoreError`; the SQLite
//! implementation lives in `db::tables::notes`.

pub mod store;

pub use store::{NoteStore, StoreError, StoreResult};
