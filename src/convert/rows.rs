// ABOUTME: Serializes source rows into MySQL INSERT IGNORE statements
// ABOUTME: Column list is fixed once per table; one statement per row in input order

use crate::convert::identifier::quote_ident;
use crate::convert::literal::SqlValue;

/// Builds `INSERT IGNORE` statements for one table
///
/// `IGNORE` makes re-running a dump against a populated database skip rows
/// whose keys already exist instead of failing.
#[derive(Debug, Clone)]
pub struct RowSerializer {
    prefix: String,
    column_count: usize,
}

impl RowSerializer {
    /// Prepare a serializer for `table` with the column order reported by the source
    pub fn new<S: AsRef<str>>(table: &str, columns: &[S]) -> Self {
        let column_list = columns
            .iter()
            .map(|c| quote_ident(c.as_ref()))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            prefix: format!(
                "INSERT IGNORE INTO {} ({}) VALUES (",
                quote_ident(table),
                column_list
            ),
            column_count: columns.len(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Render one row, values encoded in the order given
    pub fn statement(&self, row: &[SqlValue]) -> String {
        debug_assert_eq!(row.len(), self.column_count, "row/column length mismatch");

        let values = row
            .iter()
            .map(SqlValue::to_literal)
            .collect::<Vec<_>>()
            .join(", ");

        format!("{}{});", self.prefix, values)
    }
}

/// Render a single INSERT statement without keeping a serializer around
///
/// # Examples
///
/// ```
/// # use sqlite_sql_converter::convert::rows::insert_statement;
/// # use sqlite_sql_converter::convert::literal::SqlValue;
/// let sql = insert_statement("users", &["id", "name"], &[SqlValue::Integer(1), "Ann".into()]);
/// assert_eq!(sql, "INSERT IGNORE INTO `users` (`id`, `name`) VALUES (1, 'Ann');");
/// ```
pub fn insert_statement<S: AsRef<str>>(table: &str, columns: &[S], row: &[SqlValue]) -> String {
    RowSerializer::new(table, columns).statement(row)
}
