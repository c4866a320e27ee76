//! Typed HTTP client for the notes API.

use async_trait::async_trait;
use notes_types::{ErrorBody, NewNote, Note, NoteUpdate};

/// Path of the notes resource, relative to the server base URL
pub const NOTES_PATH: &str = "/api/notes";

/// The four remote operations the note manager relies on
#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Note>, String>;
    async fn create(&self, note: &NewNote) -> Result<Note, String>;
    async fn update(&self, id: &str, update: &NoteUpdate) -> Result<Note, String>;
    async fn remove(&self, id: &str) -> Result<(), String>;
}

pub struct NoteService {
    base_url: String,
    client: reqwest::Client,
}

impl NoteService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: format!("{}{}", base_url.trim_end_matches('/'), NOTES_PATH),
            client: reqwest::Client::new(),
        }
    }

    pub fn notes_url(&self) -> &str {
        &self.base_url
    }

    fn note_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Turn a non-success response into a readable error, preferring the server's reason
async fn error_from_response(action: &str, resp: reqwest::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(err) => match err.details {
            Some(details) => format!("{} HTTP {}: {} ({})", action, status, err.error, details),
            None => format!("{} HTTP {}: {}", action, status, err.error),
        },
        Err(_) => format!("{} HTTP {}: {}", action, status, body),
    }
}

#[async_trait]
impl NotesApi for NoteService {
    async fn get_all(&self) -> Result<Vec<Note>, String> {
        let resp = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| format!("List notes failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(error_from_response("List notes", resp).await);
        }

        resp.json::<Vec<Note>>()
            .await
            .map_err(|e| format!("Parse notes response: {}", e))
    }

    async fn create(&self, note: &NewNote) -> Result<Note, String> {
        let resp = self
            .client
            .post(&self.base_url)
            .json(note)
            .send()
            .await
            .map_err(|e| format!("Create note failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(error_from_response("Create note", resp).await);
        }

        resp.json::<Note>()
            .await
            .map_err(|e| format!("Parse created note: {}", e))
    }

    async fn update(&self, id: &str, update: &NoteUpdate) -> Result<Note, String> {
        let resp = self
            .client
            .put(self.note_url(id))
            .json(update)
            .send()
            .await
            .map_err(|e| format!("Update note failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(error_from_response("Update note", resp).await);
        }

        resp.json::<Note>()
            .await
            .map_err(|e| format!("Parse updated note: {}", e))
    }

    async fn remove(&self, id: &str) -> Result<(), String> {
        let resp = self
            .client
            .delete(self.note_url(id))
            .send()
            .await
            .map_err(|e| format!("Delete note failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(error_from_response("Delete note", resp).await);
        }

        Ok(())
    }
}
