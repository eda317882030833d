// ABOUTME: SQLite catalog reader for table discovery, stored definitions and row streaming
// ABOUTME: Implements SourceCatalog over a read-only rusqlite connection

use crate::catalog::{RowVisitor, SourceCatalog};
use crate::convert::SqlValue;
use crate::error::{ConvertError, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OptionalExtension};

/// SQLite reserves the literal `sqlite_` prefix for its own bookkeeping tables
const LIST_TABLES_SQL: &str = "SELECT name FROM sqlite_master \
     WHERE type='table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'";

const TABLE_SQL: &str = "SELECT sql FROM sqlite_master WHERE type='table' AND name=?1";

/// Quote a name for use inside a SQLite query
fn sqlite_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Convert a borrowed SQLite value into the converter's value model
///
/// SQLite has no native timestamp storage class, so dates arrive as text or
/// numbers and are emitted unchanged. BLOBs become opaque values holding
/// their (lossy) UTF-8 rendering.
pub fn value_from_ref(value: ValueRef<'_>) -> SqlValue {
    match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(i) => SqlValue::Integer(i),
        ValueRef::Real(f) => SqlValue::Real(f),
        ValueRef::Text(t) => SqlValue::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => SqlValue::Other(String::from_utf8_lossy(b).into_owned()),
    }
}

/// Read-only SQLite catalog
pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    /// Validate `path` and open it read-only
    pub fn open(path: &str) -> Result<Self> {
        let conn = super::open_sqlite(path)?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Release the connection, reporting any error SQLite raises on close
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| ConvertError::sqlite("Failed to close SQLite database", e))?;
        tracing::debug!("SQLite database closed");
        Ok(())
    }
}

impl SourceCatalog for SqliteCatalog {
    fn table_names(&self) -> Result<Vec<String>> {
        tracing::info!("Listing tables in SQLite database");

        let mut stmt = self
            .conn
            .prepare(LIST_TABLES_SQL)
            .map_err(|e| ConvertError::sqlite("Failed to query sqlite_master", e))?;

        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<String>>>())
            .map_err(|e| ConvertError::sqlite("Failed to list tables", e))?;

        tracing::debug!("Found {} user tables", names.len());

        Ok(names)
    }

    fn create_statement(&self, table: &str) -> Result<String> {
        let sql = self
            .conn
            .query_row(TABLE_SQL, [table], |row| row.get::<_, Option<String>>(0))
            .optional()
            .map_err(|e| {
                ConvertError::sqlite(format!("Failed to read definition of table '{}'", table), e)
            })?;

        match sql {
            Some(Some(sql)) => Ok(sql),
            Some(None) => Err(ConvertError::source_access(format!(
                "Table '{}' has no stored definition",
                table
            ))),
            None => Err(ConvertError::source_access(format!(
                "Table '{}' not found in sqlite_master",
                table
            ))),
        }
    }

    fn scan_rows(&self, table: &str, visitor: &mut dyn RowVisitor) -> Result<u64> {
        let query = format!("SELECT * FROM {}", sqlite_ident(table));
        let read_err =
            |e: rusqlite::Error| ConvertError::sqlite(format!("Failed to read rows of '{}'", table), e);

        let mut stmt = self.conn.prepare(&query).map_err(read_err)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        visitor.columns(&columns)?;

        let mut rows = stmt.query([]).map_err(read_err)?;
        let mut count = 0u64;

        while let Some(row) = rows.next().map_err(read_err)? {
            let values = (0..columns.len())
                .map(|idx| row.get_ref(idx).map(value_from_ref))
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(read_err)?;
            visitor.row(values)?;
            count += 1;
        }

        tracing::debug!("Read {} rows from '{}'", count, table);

        Ok(count)
    }
}
