// ABOUTME: Identifier quoting for MySQL output
// ABOUTME: Converts double-quote quoting to backticks and wraps catalog names

/// Replace every double quote in `sql` with a backtick
///
/// Applied once over a whole statement. Quotes inside default values or
/// comments are converted as well.
pub fn quote_identifiers(sql: &str) -> String {
    sql.replace('"', "`")
}

/// Wrap a catalog-supplied name in backticks for use in generated statements
///
/// Embedded backticks are doubled.
pub fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}
