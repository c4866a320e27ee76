//! NoteManager: the client's local note list and its reconciliation with the API.
//!
//! Local state changes only after the server answers, with one exception:
//! a failed importance toggle is taken to mean the note was deleted
//! elsewhere, and the note is dropped locally.

use notes_types::{NewNote, Note, NoteUpdate};
use rand::Rng;

use crate::service::NotesApi;

/// Initial contents of the input buffer
pub const DEFAULT_NEW_NOTE: &str = "a new note...";

pub const ALREADY_DELETED_NOTICE: &str = "The note was already deleted from server";
pub const DELETE_FAILED_NOTICE: &str = "Error deleting note";
pub const CONFIRM_DELETE: &str = "Delete this note?";

/// User-facing notices and confirmations
pub trait Prompter {
    /// Blocking notice the user has to acknowledge
    fn alert(&self, message: &str);
    /// Yes/no question; `true` means proceed
    fn confirm(&self, message: &str) -> bool;
}

/// Placeholder importance for new notes.
///
/// A coin flip with no business meaning behind it; swap it out with
/// `NoteManager::with_initial_importance` once one exists.
pub fn placeholder_importance() -> bool {
    rand::thread_rng().gen_bool(0.5)
}

pub struct NoteManager<A, P> {
    api: A,
    prompter: P,
    notes: Vec<Note>,
    new_note: String,
    show_all: bool,
    initial_importance: fn() -> bool,
}

impl<A: NotesApi, P: Prompter> NoteManager<A, P> {
    pub fn new(api: A, prompter: P) -> Self {
        Self {
            api,
            prompter,
            notes: Vec::new(),
            new_note: DEFAULT_NEW_NOTE.to_string(),
            show_all: true,
            initial_importance: placeholder_importance,
        }
    }

    /// Replace the importance generator used by `add`
    pub fn with_initial_importance(mut self, generator: fn() -> bool) -> Self {
        self.initial_importance = generator;
        self
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn new_note(&self) -> &str {
        &self.new_note
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// Notes visible under the current filter
    pub fn notes_to_show(&self) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| self.show_all || n.important)
            .collect()
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn set_new_note(&mut self, text: impl Into<String>) {
        self.new_note = text.into();
    }

    /// Fetch the full list once; on failure the list is left as it was
    pub async fn load(&mut self) {
        match self.api.get_all().await {
            Ok(notes) => {
                log::info!("[NOTES] Loaded {} notes", notes.len());
                self.notes = notes;
            }
            Err(e) => log::error!("Error fetching notes: {}", e),
        }
    }

    /// Create a note from the input buffer and append the server's copy
    pub async fn add(&mut self) {
        let note = NewNote::new(self.new_note.clone(), (self.initial_importance)());

        match self.api.create(&note).await {
            Ok(created) => {
                self.notes.push(created);
                self.new_note.clear();
            }
            Err(e) => log::error!("Error creating note: {}", e),
        }
    }

    /// Flip a note's importance on the server and adopt the server's answer
    pub async fn toggle_importance(&mut self, id: &str) {
        let Some(note) = self.notes.iter().find(|n| n.id == id) else {
            log::warn!("Toggle requested for unknown note {}", id);
            return;
        };

        let mut changed = note.clone();
        changed.important = !changed.important;

        match self.api.update(id, &NoteUpdate::from(&changed)).await {
            Ok(updated) => {
                for n in self.notes.iter_mut().filter(|n| n.id == id) {
                    *n = updated.clone();
                }
            }
            Err(e) => {
                // Any failure is treated as a concurrent delete
                log::warn!("Update of note {} failed, dropping it: {}", id, e);
                self.prompter.alert(ALREADY_DELETED_NOTICE);
                self.notes.retain(|n| n.id != id);
            }
        }
    }

    /// Delete a note after the user confirms
    pub async fn remove(&mut self, id: &str) {
        if !self.prompter.confirm(CONFIRM_DELETE) {
            return;
        }

        match self.api.remove(id).await {
            Ok(()) => self.notes.retain(|n| n.id != id),
            Err(e) => {
                log::error!("Error deleting note {}: {}", id, e);
                self.prompter.alert(DELETE_FAILED_NOTICE);
            }
        }
    }
}
