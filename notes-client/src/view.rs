//! Terminal rendering of the note list.

use notes_types::Note;

use crate::manager::{NoteManager, Prompter};
use crate::service::NotesApi;

/// Label of the filter button for the current mode
pub fn filter_label(show_all: bool) -> &'static str {
    if show_all { "show important" } else { "show all" }
}

/// Label of a note's importance button
pub fn importance_label(note: &Note) -> &'static str {
    if note.important {
        "make not important"
    } else {
        "make important"
    }
}

/// Render the whole screen; notes are numbered by visible position, from 1
pub fn render<A: NotesApi, P: Prompter>(manager: &NoteManager<A, P>) -> String {
    let mut out = String::new();
    out.push_str("Notes\n");
    out.push_str(&format!("[filter] {}\n\n", filter_label(manager.show_all())));

    let visible = manager.notes_to_show();
    if visible.is_empty() {
        out.push_str("  (no notes)\n");
    }
    for (i, note) in visible.iter().enumerate() {
        let n = i + 1;
        out.push_str(&format!(
            "  {}. {}  [toggle {}] {}  [delete {}] delete\n",
            n,
            note.content,
            n,
            importance_label(note),
            n
        ));
    }

    out.push_str(&format!("\n> {}  [save]\n", manager.new_note()));
    out
}
