//! Notes REST API: list, create, update and delete.
//!
//! Every note leaving this module is normalized to `{id, content, important}`;
//! failures are reported through `ApiError`.

use actix_web::{web, HttpResponse};
use notes_types::{NewNote, Note, NoteUpdate};

use crate::error::ApiError;
use crate::models::NewNoteDocument;
use crate::AppState;

/// Malformed or mistyped JSON bodies are validation failures, not actix's plain-text 400
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}

/// List all notes in store order
async fn list_notes(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let notes: Vec<Note> = data
        .store
        .find_all()
        .map_err(|e| data.api_error(e))?
        .into_iter()
        .map(Note::from)
        .collect();

    Ok(HttpResponse::Ok().json(notes))
}

/// Create a note; `important` defaults to false
async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<NewNote>,
) -> Result<HttpResponse, ApiError> {
    let new_note =
        NewNoteDocument::from_request(body.into_inner()).map_err(ApiError::Validation)?;

    let saved = data.store.insert(new_note).map_err(|e| data.api_error(e))?;
    log::info!("[NOTES] Created note {} (row {})", saved.id, saved.row_id);

    Ok(HttpResponse::Ok().json(Note::from(saved)))
}

/// Apply the provided fields to an existing note
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<NoteUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    match data
        .store
        .find_by_id_and_update(&id, body.into_inner().into())
        .map_err(|e| data.api_error(e))?
    {
        Some(updated) => {
            log::debug!(
                "[NOTES] Updated note {} (revision {}, created {}, updated {})",
                updated.id,
                updated.revision,
                updated.created_at.to_rfc3339(),
                updated.updated_at.to_rfc3339()
            );
            Ok(HttpResponse::Ok().json(Note::from(updated)))
        }
        None => Err(ApiError::NotFound),
    }
}

/// Delete a note; deleting an absent note still succeeds
async fn delete_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let removed = data
        .store
        .find_by_id_and_delete(&id)
        .map_err(|e| data.api_error(e))?;

    if removed {
        log::info!("[NOTES] Deleted note {}", id);
    } else {
        log::debug!("[NOTES] Delete of absent note {}", id);
    }

    Ok(HttpResponse::NoContent().finish())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .app_data(json_config())
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::put().to(update_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
