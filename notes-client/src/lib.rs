//! Notes client: keeps a local note list in step with the notes API.

pub mod commands;
pub mod config;
pub mod manager;
pub mod service;
pub mod view;

pub use manager::{NoteManager, Prompter};
pub use service::{NoteService, NotesApi};
