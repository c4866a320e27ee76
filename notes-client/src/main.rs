//! Interactive terminal front end for the notes API.

use dotenv::dotenv;
use std::io::{self, Write};

use notes_client::commands::{Command, HELP};
use notes_client::{config, view, NoteManager, NoteService, NotesApi, Prompter};

/// Alerts go to stderr; confirmations read a y/N answer from stdin
struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn alert(&self, message: &str) {
        eprintln!("! {}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        let _ = io::stdout().flush();
        match read_line() {
            Some(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }
}

/// One line from stdin; `None` on EOF or read error
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            log::error!("Failed to read stdin: {}", e);
            None
        }
    }
}

/// Id of the note at a 1-based visible position
fn visible_id<A: NotesApi, P: Prompter>(
    manager: &NoteManager<A, P>,
    position: usize,
) -> Option<String> {
    manager
        .notes_to_show()
        .get(position - 1)
        .map(|note| note.id.clone())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let api_url = config::api_url();
    log::info!("Using notes API at {}", api_url);

    let mut manager = NoteManager::new(NoteService::new(&api_url), TerminalPrompter);
    manager.load().await;
    println!("{}", view::render(&manager));

    loop {
        print!("notes> ");
        let _ = io::stdout().flush();

        let Some(line) = read_line() else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::List => {}
            Command::Input(text) => manager.set_new_note(text),
            Command::Save => manager.add().await,
            Command::Filter => manager.toggle_show_all(),
            Command::Toggle(n) => match visible_id(&manager, n) {
                Some(id) => manager.toggle_importance(&id).await,
                None => eprintln!("no note number {}", n),
            },
            Command::Delete(n) => match visible_id(&manager, n) {
                Some(id) => manager.remove(&id).await,
                None => eprintln!("no note number {}", n),
            },
        }

        println!("{}", view::render(&manager));
    }
}
