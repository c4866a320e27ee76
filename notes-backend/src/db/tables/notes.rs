//! Note document operations

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::MutexGuard;
use uuid::Uuid;

use super::super::Database;
use crate::models::{NewNoteDocument, NoteDocument, NotePatch};
use crate::notes::store::{parse_note_id, validate_patch};
use crate::notes::{NoteStore, StoreError, StoreResult};

const NOTE_COLUMNS: &str = "row_id, id, content, important, revision, created_at, updated_at";

fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<NoteDocument> {
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(NoteDocument {
        row_id: row.get(0)?,
        id: row.get(1)?,
        content: row.get(2)?,
        important: row.get(3)?,
        revision: row.get(4)?,
        created_at: parse_timestamp(5, &created_at)?,
        updated_at: parse_timestamp(6, &updated_at)?,
    })
}

fn get_note(conn: &Connection, id: &str) -> rusqlite::Result<Option<NoteDocument>> {
    conn.query_row(
        &format!("SELECT {} FROM notes WHERE id = ?1", NOTE_COLUMNS),
        [id],
        note_from_row,
    )
    .optional()
}

impl Database {
    fn lock_conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NoteStore for Database {
    fn find_all(&self) -> StoreResult<Vec<NoteDocument>> {
        let conn = self.lock_conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM notes ORDER BY row_id ASC",
            NOTE_COLUMNS
        ))?;

        let notes = stmt
            .query_map([], note_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(notes)
    }

    fn insert(&self, note: NewNoteDocument) -> StoreResult<NoteDocument> {
        if note.content.is_empty() {
            return Err(StoreError::Validation(
                "content: Path `content` is required.".to_string(),
            ));
        }

        let conn = self.lock_conn();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        conn.execute(
            "INSERT INTO notes (id, content, important, revision, created_at, updated_at)
             VALUES (?1, ?2, ?3, 0, ?4, ?4)",
            params![id, note.content, note.important, now_str],
        )?;

        Ok(NoteDocument {
            row_id: conn.last_insert_rowid(),
            id,
            content: note.content,
            important: note.important,
            revision: 0,
            created_at: now,
            updated_at: now,
        })
    }

    fn find_by_id_and_update(
        &self,
        id: &str,
        patch: NotePatch,
    ) -> StoreResult<Option<NoteDocument>> {
        let id = parse_note_id(id)?;
        validate_patch(&patch)?;

        let conn = self.lock_conn();

        if patch.is_empty() {
            return Ok(get_note(&conn, &id)?);
        }

        let rows = conn.execute(
            "UPDATE notes
             SET content = COALESCE(?1, content),
                 important = COALESCE(?2, important),
                 revision = revision + 1,
                 updated_at = ?3
             WHERE id = ?4",
            params![patch.content, patch.important, Utc::now().to_rfc3339(), id],
        )?;

        if rows == 0 {
            return Ok(None);
        }

        Ok(get_note(&conn, &id)?)
    }

    fn find_by_id_and_delete(&self, id: &str) -> StoreResult<bool> {
        let id = parse_note_id(id)?;
        let conn = self.lock_conn();
        let rows = conn.execute("DELETE FROM notes WHERE id = ?1", [&id])?;
        Ok(rows > 0)
    }

    fn count(&self) -> StoreResult<usize> {
        let conn = self.lock_conn();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn new_note(content: &str, important: bool) -> NewNoteDocument {
        NewNoteDocument {
            content: content.to_string(),
            important,
        }
    }

    #[test]
    fn test_insert_assigns_unique_ids_and_lists_in_order() {
        let db = Database::open_in_memory().expect("Failed to create store");

        let a = db.insert(new_note("a", false)).unwrap();
        let b = db.insert(new_note("b", true)).unwrap();
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());

        let all = db.find_all().unwrap();
        let contents: Vec<&str> = all.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b"]);
        assert!(all[1].important);
    }

    #[test]
    fn test_insert_rejects_empty_content() {
        let db = Database::open_in_memory().unwrap();
        let result = db.insert(new_note("", false));
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(db.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_update_applies_only_provided_fields() {
        let db = Database::open_in_memory().unwrap();
        let note = db.insert(new_note("original", false)).unwrap();

        let updated = db
            .find_by_id_and_update(
                &note.id,
                NotePatch {
                    content: None,
                    important: Some(true),
                },
            )
            .unwrap()
            .expect("note should exist");

        assert_eq!(updated.id, note.id);
        assert_eq!(updated.content, "original");
        assert!(updated.important);
        assert_eq!(updated.revision, 1);
        assert!(updated.updated_at >= note.updated_at);
    }

    #[test]
    fn test_update_missing_and_malformed_ids() {
        let db = Database::open_in_memory().unwrap();

        let missing = db
            .find_by_id_and_update(&Uuid::new_v4().to_string(), NotePatch::default())
            .unwrap();
        assert!(missing.is_none());

        let missing = db
            .find_by_id_and_update(
                &Uuid::new_v4().to_string(),
                NotePatch {
                    content: Some("x".to_string()),
                    important: None,
                },
            )
            .unwrap();
        assert!(missing.is_none());

        let malformed = db.find_by_id_and_update("not-an-id", NotePatch::default());
        assert!(matches!(malformed, Err(StoreError::MalformedId(_))));
    }

    #[test]
    fn test_update_rejects_empty_content() {
        let db = Database::open_in_memory().unwrap();
        let note = db.insert(new_note("keep me", false)).unwrap();

        let result = db.find_by_id_and_update(
            &note.id,
            NotePatch {
                content: Some(String::new()),
                important: None,
            },
        );
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(db.find_all().unwrap()[0].content, "keep me");
    }

    #[test]
    fn test_delete_is_tolerant_of_missing_notes() {
        let db = Database::open_in_memory().unwrap();
        let note = db.insert(new_note("bye", false)).unwrap();

        assert_eq!(db.count().unwrap(), 1);
        assert!(db.find_by_id_and_delete(&note.id).unwrap());
        assert!(!db.find_by_id_and_delete(&note.id).unwrap());
        assert!(db.find_all().unwrap().is_empty());
        assert_eq!(db.count().unwrap(), 0);

        assert!(matches!(
            db.find_by_id_and_delete("12"),
            Err(StoreError::MalformedId(_))
        ));
    }

    #[test]
    fn test_notes_survive_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("notes.db");
        let path = db_path.to_str().unwrap();

        let id = {
            let db = Database::new(path).expect("Failed to create store");
            let id = db.insert(new_note("persisted", true)).unwrap().id;
            db.close().unwrap();
            id
        };

        let db = Database::new(path).expect("Failed to reopen store");
        let all = db.find_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert!(all[0].important);
    }
}
