// ABOUTME: Source catalog abstraction consumed by the dump writer
// ABOUTME: Lists tables, returns stored definitions and streams rows forward-only

use crate::convert::SqlValue;
use crate::error::Result;

/// Receives one table's column names followed by its rows, in read order
pub trait RowVisitor {
    /// Called once before the first row, even for empty tables
    fn columns(&mut self, columns: &[String]) -> Result<()>;

    /// Called once per row, values aligned with the column order
    fn row(&mut self, values: Vec<SqlValue>) -> Result<()>;
}

/// Read-only view of a source database
pub trait SourceCatalog {
    /// User table names in catalog order, internal tables excluded
    fn table_names(&self) -> Result<Vec<String>>;

    /// Definition text exactly as stored by the source
    fn create_statement(&self, table: &str) -> Result<String>;

    /// Stream every row of `table` into `visitor` in a single pass
    ///
    /// Rows are produced once and cannot be re-read without calling this
    /// again. Returns the number of rows visited.
    fn scan_rows(&self, table: &str, visitor: &mut dyn RowVisitor) -> Result<u64>;
}
