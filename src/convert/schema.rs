// ABOUTME: Translates a stored SQLite CREATE TABLE statement into MySQL DDL
// ABOUTME: Ordered text rewrites: name check, IF NOT EXISTS, quoting, types, table options

use crate::convert::identifier::quote_identifiers;
use crate::convert::typemap::map_types;
use crate::error::{ConvertError, Result};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

const CREATE_TABLE: &str = "CREATE TABLE";
const IF_NOT_EXISTS: &str = "IF NOT EXISTS";

static TABLE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"CREATE TABLE (?:IF NOT EXISTS )?"?([^\s("]+)"?"#)
        .expect("table name pattern is valid")
});

/// MySQL table options appended to every translated CREATE TABLE
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub engine: String,
    pub charset: String,
    pub collation: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            engine: "InnoDB".to_string(),
            charset: "utf8mb4".to_string(),
            collation: "utf8mb4_unicode_ci".to_string(),
        }
    }
}

impl TableOptions {
    /// Closing suffix including the parenthesis and statement terminator
    pub fn suffix(&self) -> String {
        format!(
            ") ENGINE={} DEFAULT CHARSET={} COLLATE={};",
            self.engine, self.charset, self.collation
        )
    }
}

/// Result of translating one table definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedTable {
    /// Name as it appears in the source definition, quotes stripped
    pub name: String,
    pub statement: String,
}

/// Extract the table name that follows `CREATE TABLE [IF NOT EXISTS]`
///
/// Accepts double-quoted or bare names, stopping at whitespace, `(` or the
/// closing quote. Returns `None` when the text has no CREATE TABLE prefix.
pub fn extract_table_name(create_statement: &str) -> Option<&str> {
    TABLE_NAME_REGEX
        .captures(create_statement)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Insert `IF NOT EXISTS` after the first `CREATE TABLE` unless it is there already
fn add_existence_guard(sql: &str) -> String {
    let Some(pos) = sql.find(CREATE_TABLE) else {
        return sql.to_string();
    };
    let after = &sql[pos + CREATE_TABLE.len()..];
    if after.trim_start().starts_with(IF_NOT_EXISTS) {
        return sql.to_string();
    }
    format!(
        "{}{} {}{}",
        &sql[..pos],
        CREATE_TABLE,
        IF_NOT_EXISTS,
        after
    )
}

/// Translate a SQLite table definition into a MySQL CREATE TABLE statement
///
/// Steps, each applied to the whole text in order:
/// 1. Extract the table name (fails with `SchemaParse` when absent)
/// 2. Add `IF NOT EXISTS`
/// 3. Turn `"` quoting into backticks
/// 4. Apply the type mapping rules
/// 5. Strip trailing whitespace, `)` and `;`, then append the table options
///
/// `table` is the catalog name, used only for error reporting.
///
/// # Examples
///
/// ```
/// # use sqlite_sql_converter::convert::schema::{translate_create_table, TableOptions};
/// let out = translate_create_table(
///     "t",
///     r#"CREATE TABLE "t" (id integer NOT NULL PRIMARY KEY AUTOINCREMENT, name TEXT)"#,
///     &TableOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(
///     out.statement,
///     "CREATE TABLE IF NOT EXISTS `t` (id INT AUTO_INCREMENT PRIMARY KEY, name TEXT) \
///      ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci;"
/// );
/// ```
pub fn translate_create_table(
    table: &str,
    create_statement: &str,
    options: &TableOptions,
) -> Result<TranslatedTable> {
    let name = extract_table_name(create_statement)
        .ok_or_else(|| ConvertError::schema_parse(table, create_statement))?
        .to_string();

    let guarded = add_existence_guard(create_statement);
    let quoted = quote_identifiers(&guarded);
    let mapped = map_types(&quoted);

    // Whitespace first, then the closing parenthesis and terminator
    let mut statement = mapped
        .trim_end()
        .trim_end_matches([')', ';'])
        .to_string();
    statement.push_str(&options.suffix());

    tracing::debug!("Translated definition of '{}'", name);

    Ok(TranslatedTable { name, statement })
}
