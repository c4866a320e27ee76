//! Shared wire types for the notes API and its clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A note as it appears on the wire.
///
/// Exactly three fields: storage metadata never crosses the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub important: bool,
}

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /api/notes`
///
/// `content` is optional here so a missing field reaches validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewNote {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
}

impl NewNote {
    pub fn new(content: impl Into<String>, important: bool) -> Self {
        Self {
            content: Some(content.into()),
            important: Some(important),
        }
    }
}

/// Body of `PUT /api/notes/{id}`; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
}

impl From<&Note> for NoteUpdate {
    fn from(note: &Note) -> Self {
        Self {
            content: Some(note.content.clone()),
            important: Some(note.important),
        }
    }
}

// =====================================================
// Response Types
// =====================================================

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable short reason, e.g. "malformatted id"
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
