//! NoteStore: document-store interface for notes

use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewNoteDocument, NoteDocument, NotePatch};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure signals raised by a note store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input would violate a document invariant (e.g. empty content)
    #[error("{0}")]
    Validation(String),

    /// Identifier does not have the store's id shape
    #[error("Cast to id failed for value \"{0}\"")]
    MalformedId(String),

    /// Unexpected backing-store failure
    #[error("Database error: {0}")]
    Failure(#[from] rusqlite::Error),
}

/// Minimal document-store interface consumed by the notes API.
///
/// A missing document is not an error: update yields `Ok(None)` and delete
/// yields `Ok(false)`.
pub trait NoteStore: Send + Sync {
    /// All notes in insertion order
    fn find_all(&self) -> StoreResult<Vec<NoteDocument>>;

    /// Persist a new note and return it with its assigned id
    fn insert(&self, note: NewNoteDocument) -> StoreResult<NoteDocument>;

    /// Apply `patch` to the note with `id`, returning the updated document
    fn find_by_id_and_update(
        &self,
        id: &str,
        patch: NotePatch,
    ) -> StoreResult<Option<NoteDocument>>;

    /// Remove the note with `id`; returns whether a document was removed
    fn find_by_id_and_delete(&self, id: &str) -> StoreResult<bool>;

    /// Number of stored notes; doubles as a reachability check
    fn count(&self) -> StoreResult<usize>;
}

/// Parse an external id into its canonical hyphenated form
pub fn parse_note_id(id: &str) -> StoreResult<String> {
    Uuid::parse_str(id)
        .map(|u| u.hyphenated().to_string())
        .map_err(|_| StoreError::MalformedId(id.to_string()))
}

/// Check a patch against the non-empty content invariant
pub fn validate_patch(patch: &NotePatch) -> StoreResult<()> {
    match patch.content.as_deref() {
        Some("") => Err(StoreError::Validation(
            "content: Path `content` is required.".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_note_id_accepts_uuid() {
        let id = Uuid::new_v4().to_string();
        assert_eq!(parse_note_id(&id).unwrap(), id);
    }

    #[test]
    fn test_parse_note_id_canonicalizes_case() {
        let id = "0F8FAD5B-D9CB-469F-A165-70867728950E";
        assert_eq!(
            parse_note_id(id).unwrap(),
            "0f8fad5b-d9cb-469f-a165-70867728950e"
        );
    }

    #[test]
    fn test_parse_note_id_rejects_garbage() {
        assert!(matches!(
            parse_note_id("12345"),
            Err(StoreError::MalformedId(raw)) if raw == "12345"
        ));
    }

    #[test]
    fn test_validate_patch_rejects_empty_content() {
        let patch = NotePatch {
            content: Some(String::new()),
            important: None,
        };
        assert!(matches!(validate_patch(&patch), Err(StoreError::Validation(_))));
        assert!(validate_patch(&NotePatch::default()).is_ok());
    }
}
