//! SQLite schema manager

use std::path::{Path, PathBuf};
use std::time::Duration;
use rusqlite::{Connection, OpenFlags, Transaction, params};
use serde::Serialize;
use crate::Result;
use super::schema;

/// Database file used when the caller does not name one
pub const DEFAULT_DATABASE: &str = "gamingai.db";

/// How long a connection waits on another process's lock before giving up
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Creates and drops the managed tables in a file-backed SQLite store.
///
/// Every operation opens its own connection, runs all of its statements in a
/// single transaction and closes the connection before returning. Nothing is
/// held open between calls.
#[derive(Debug, Clone)]
pub struct SchemaManager {
    path: PathBuf,
    busy_timeout: Duration,
}

impl Default for SchemaManager {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE)
    }
}

impl SchemaManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create all managed tables if they are absent. Existing rows are left alone.
    pub fn initialize(&self) -> Result<()> {
        self.with_transaction(|tx| {
            for (table, stmt) in schema::all_schema_statements() {
                tracing::debug!("Creating table {} if missing", table);
                tx.execute(stmt, [])?;
            }
            Ok(())
        })
    }

    /// Drop all managed tables (and their rows) if they are present.
    pub fn reset(&self) -> Result<()> {
        self.with_transaction(|tx| {
            for (table, stmt) in schema::all_drop_statements() {
                tracing::debug!("Dropping table {} if present", table);
                tx.execute(&stmt, [])?;
            }
            Ok(())
        })
    }

    /// Report which managed tables exist and how many rows they hold.
    ///
    /// A missing file is reported as an empty store and is not created.
    pub fn inspect(&self) -> Result<SchemaStatus> {
        if !self.path.exists() {
            return Ok(SchemaStatus::missing(&self.path));
        }

        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(self.busy_timeout)?;

        let mut tables = Vec::with_capacity(schema::TABLE_NAMES.len());
        for name in schema::TABLE_NAMES {
            let exists = table_exists(&conn, name)?;
            let (row_count, columns) = if exists {
                let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", name), [], |row| row.get(0))?;
                (Some(count), table_columns(&conn, name)?)
            } else {
                (None, Vec::new())
            };
            tables.push(TableStatus {
                name: name.to_string(),
                exists,
                row_count,
                columns,
            });
        }

        conn.close().map_err(|(_, e)| e)?;
        Ok(SchemaStatus {
            database: self.path.display().to_string(),
            file_exists: true,
            tables,
        })
    }

    fn open(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }

    /// Run `f` inside one transaction on a fresh connection.
    ///
    /// On error the transaction rolls back when dropped and the connection
    /// closes right after it.
    fn with_transaction<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&Transaction<'_>) -> Result<()>,
    {
        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        f(&tx)?;
        tx.commit()?;
        conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}

/// Create the managed tables in the store at `path`.
pub fn initialize(path: &Path) -> Result<()> {
    SchemaManager::new(path).initialize()
}

/// Drop the managed tables from the store at `path`.
pub fn reset(path: &Path) -> Result<()> {
    SchemaManager::new(path).reset()
}

/// Snapshot of the managed tables in one database file
#[derive(Debug, Clone, Serialize)]
pub struct SchemaStatus {
    pub database: String,
    pub file_exists: bool,
    pub tables: Vec<TableStatus>,
}

impl SchemaStatus {
    fn missing(path: &Path) -> Self {
        Self {
            database: path.display().to_string(),
            file_exists: false,
            tables: schema::TABLE_NAMES
                .iter()
                .map(|name| TableStatus {
                    name: name.to_string(),
                    exists: false,
                    row_count: None,
                    columns: Vec::new(),
                })
                .collect(),
        }
    }

    /// True when every managed table is present
    pub fn is_complete(&self) -> bool {
        self.tables.iter().all(|t| t.exists)
    }

    pub fn table(&self, name: &str) -> Option<&TableStatus> {
        self.tables.iter().find(|t| t.name == name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableStatus {
    pub name: String,
    pub exists: bool,
    pub row_count: Option<i64>,
    pub columns: Vec<String>,
}

pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Column names of `table` in declaration order (empty if the table is absent)
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(columns)
}
