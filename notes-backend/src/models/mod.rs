mod note;

pub use note::{NewNoteDocument, NoteDocument, NotePatch};
