//! Parsing of the interactive commands typed at the prompt.

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    /// Replace the input buffer
    Input(String),
    Save,
    /// 1-based position in the visible list
    Toggle(usize),
    Delete(usize),
    Filter,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  list            redraw the notes
  input <text>    set the new note text
  save            create a note from the current text
  toggle <n>      flip importance of note n
  delete <n>      delete note n
  filter          switch between all and important notes
  help            show this help
  quit            exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" | "list" | "ls" => Ok(Command::List),
            "input" => Ok(Command::Input(rest.to_string())),
            "save" => Ok(Command::Save),
            "toggle" => parse_position(rest).map(Command::Toggle),
            "delete" | "rm" => parse_position(rest).map(Command::Delete),
            "filter" => Ok(Command::Filter),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command: {} (try 'help')", other)),
        }
    }
}

fn parse_position(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a note number, got '{}'", raw)),
    }
}
