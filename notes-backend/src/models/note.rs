use chrono::{DateTime, Utc};
use notes_types::{NewNote, Note, NoteUpdate};

/// A note row as held by the store, including internal metadata
#[derive(Debug, Clone)]
pub struct NoteDocument {
    /// Store-internal row key, never exposed
    pub row_id: i64,
    pub id: String,
    pub content: String,
    pub important: bool,
    /// Incremented on every update
    pub revision: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wire normalization: only id, content and important survive.
impl From<NoteDocument> for Note {
    fn from(doc: NoteDocument) -> Self {
        Note {
            id: doc.id,
            content: doc.content,
            important: doc.important,
        }
    }
}

/// Fields supplied for a new document
#[derive(Debug, Clone)]
pub struct NewNoteDocument {
    pub content: String,
    pub important: bool,
}

impl NewNoteDocument {
    /// Validates presence of content and applies the `important = false` default.
    pub fn from_request(req: NewNote) -> Result<Self, String> {
        let content = match req.content {
            Some(c) if !c.is_empty() => c,
            _ => return Err("content missing".to_string()),
        };
        Ok(Self {
            content,
            important: req.important.unwrap_or(false),
        })
    }
}

/// Partial update; `None` fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub content: Option<String>,
    pub important: Option<bool>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.important.is_none()
    }
}

impl From<NoteUpdate> for NotePatch {
    fn from(update: NoteUpdate) -> Self {
        NotePatch {
            content: update.content,
            important: update.important,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_normalizes_to_three_fields() {
        let now = Utc::now();
        let doc = NoteDocument {
            row_id: 7,
            id: "0f8fad5b-d9cb-469f-a165-70867728950e".to_string(),
            content: "a".to_string(),
            important: true,
            revision: 3,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(Note::from(doc)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                "content": "a",
                "important": true
            })
        );
    }

    #[test]
    fn test_new_document_defaults_important_to_false() {
        let doc = NewNoteDocument::from_request(NewNote {
            content: Some("buy milk".to_string()),
            important: None,
        })
        .unwrap();
        assert!(!doc.important);
    }

    #[test]
    fn test_new_document_requires_content() {
        assert!(NewNoteDocument::from_request(NewNote::default()).is_err());
        assert!(NewNoteDocument::from_request(NewNote {
            content: Some(String::new()),
            important: Some(true),
        })
        .is_err());
    }
}
