//! Durable [`RecordStore`] backed by a single SQLite file.
//!
//! The `voters` table keys rows by `id`, so the uniqueness the registry
//! relies on is enforced by the database itself and surfaces as
//! [`RepositoryError::Conflict`].

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use super::domain::{VoterId, VoterRecord};
use super::repository::{RecordStore, RepositoryError};

const CREATE_VOTERS: &str = "CREATE TABLE IF NOT EXISTS voters (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    alive INTEGER NOT NULL
);";

#[derive(Debug)]
pub struct SqliteRecordStore {
    connection: Mutex<Connection>,
}

impl SqliteRecordStore {
    /// Opens (or creates) the database at `path`. The schema is not created
    /// until [`RecordStore::init_schema`] runs.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let connection = Connection::open(path.as_ref()).map_err(|err| {
            RepositoryError::Unavailable(format!(
                "failed to open {}: {err}",
                path.as_ref().display()
            ))
        })?;
        Ok(Self::from_connection(connection))
    }

    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        let connection = Connection::open_in_memory()
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;
        Ok(Self::from_connection(connection))
    }

    fn from_connection(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, RepositoryError> {
        self.connection
            .lock()
            .map_err(|_| RepositoryError::Unavailable("sqlite connection mutex poisoned".into()))
    }
}

fn storage(err: rusqlite::Error) -> RepositoryError {
    RepositoryError::Storage(err.to_string())
}

impl RecordStore for SqliteRecordStore {
    fn init_schema(&self) -> Result<(), RepositoryError> {
        self.connection()?.execute_batch(CREATE_VOTERS).map_err(storage)
    }

    fn exists_by_id(&self, id: VoterId) -> Result<bool, RepositoryError> {
        self.connection()?
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM voters WHERE id = ?1)",
                params![id.0],
                |row| row.get(0),
            )
            .map_err(storage)
    }

    fn save(
        &self,
        id: VoterId,
        name: &str,
        age: u32,
        alive: bool,
    ) -> Result<(), RepositoryError> {
        let result = self.connection()?.execute(
            "INSERT INTO voters (id, name, age, alive) VALUES (?1, ?2, ?3, ?4)",
            params![id.0, name, age, alive],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(RepositoryError::Conflict { id })
            }
            Err(err) => Err(storage(err)),
        }
    }

    fn find_by_id(&self, id: VoterId) -> Result<Option<VoterRecord>, RepositoryError> {
        self.connection()?
            .query_row(
                "SELECT id, name, age, alive FROM voters WHERE id = ?1",
                params![id.0],
                |row| {
                    Ok(VoterRecord {
                        id: VoterId(row.get(0)?),
                        name: row.get(1)?,
                        age: row.get(2)?,
                        alive: row.get(3)?,
                    })
                },
            )
            .optional()
            .map_err(storage)
    }

    fn delete_all(&self) -> Result<(), RepositoryError> {
        self.connection()?
            .execute("DELETE FROM voters", [])
            .map(|_| ())
            .map_err(storage)
    }
}
