// ABOUTME: SQLite source database access for the converter
// ABOUTME: Validates the file path and opens the database strictly read-only

pub mod reader;

pub use reader::SqliteCatalog;

use crate::error::{ConvertError, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Validate a SQLite database path before opening it
///
/// Checks:
/// - Path is not empty or whitespace
/// - File exists
/// - Path points to a regular file, not a directory
///
/// # Examples
///
/// ```
/// # use sqlite_sql_converter::sqlite::validate_sqlite_path;
/// assert!(validate_sqlite_path("").is_err());
/// assert!(validate_sqlite_path("/definitely/not/here.db").is_err());
/// ```
pub fn validate_sqlite_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ConvertError::source_access(
            "SQLite file path cannot be empty",
        ));
    }

    let file = Path::new(path);
    if !file.exists() {
        return Err(ConvertError::source_access(format!(
            "SQLite file not found: {}",
            path
        )));
    }

    if !file.is_file() {
        return Err(ConvertError::source_access(format!(
            "SQLite path is not a regular file: {}",
            path
        )));
    }

    Ok(())
}

/// Open a SQLite database read-only
///
/// Read-only flags keep a mistyped path from silently creating an empty
/// database, and guarantee the source is never modified.
pub fn open_sqlite(path: &str) -> Result<Connection> {
    validate_sqlite_path(path)?;

    tracing::info!("Opening SQLite database {}", path);

    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags)
        .map_err(|e| ConvertError::sqlite(format!("Failed to open SQLite database '{}'", path), e))?;

    // A non-database file only fails on first read, so probe the catalog now
    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })
    .map_err(|e| ConvertError::sqlite(format!("'{}' is not a readable SQLite database", path), e))?;

    tracing::debug!("SQLite database opened");

    Ok(conn)
}
