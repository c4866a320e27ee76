//! SQLite connection ownership and schema setup

use rusqlite::{Connection, Result as SqliteResult};
use std::sync::Mutex;

/// Single-connection SQLite database shared by all handlers.
///
/// Every operation takes the connection lock for its whole duration, so a
/// read-modify-write on one note is atomic with respect to other requests.
pub struct Database {
    pub(crate) conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database at `database_url` and ensure the schema exists
    pub fn new(database_url: &str) -> SqliteResult<Self> {
        let conn = Connection::open(database_url)?;
        Self::from_connection(conn)
    }

    /// Private in-memory database, used by tests and throwaway runs
    pub fn open_in_memory() -> SqliteResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> SqliteResult<Self> {
        Self::init_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_tables(conn: &Connection) -> SqliteResult<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS notes (
                row_id INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                content TEXT NOT NULL CHECK (length(content) > 0),
                important INTEGER NOT NULL DEFAULT 0,
                revision INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )
    }

    /// Close the underlying connection, surfacing any error SQLite reports
    pub fn close(self) -> SqliteResult<()> {
        let conn = match self.conn.into_inner() {
            Ok(conn) => conn,
            Err(poisoned) => poisoned.into_inner(),
        };
        conn.close().map_err(|(_, e)| e)
    }
}
