// ABOUTME: SQLite to MySQL column type rewriting over raw CREATE TABLE text
// ABOUTME: Applies an ordered list of case-sensitive whole-text substitutions

/// Ordered substitution rules. Each rule runs over the output of the previous
/// one, so the autoincrement primary key phrase must come before bare `integer`.
pub const TYPE_RULES: &[(&str, &str)] = &[
    (
        "integer NOT NULL PRIMARY KEY AUTOINCREMENT",
        "INT AUTO_INCREMENT PRIMARY KEY",
    ),
    ("integer", "INT"),
    ("DATETIME", "DATETIME"),
    ("TEXT", "TEXT"),
    ("REAL", "DOUBLE"),
    ("AUTOINCREMENT", ""),
];

/// Rewrite SQLite type tokens in `sql` to their MySQL equivalents
///
/// This is plain substring replacement, not a tokenizer: a keyword that
/// appears inside an identifier or a default value is rewritten too.
///
/// # Examples
///
/// ```
/// # use sqlite_sql_converter::convert::typemap::map_types;
/// assert_eq!(map_types("score REAL"), "score DOUBLE");
/// assert_eq!(
///     map_types("id integer NOT NULL PRIMARY KEY AUTOINCREMENT"),
///     "id INT AUTO_INCREMENT PRIMARY KEY"
/// );
/// ```
pub fn map_types(sql: &str) -> String {
    TYPE_RULES
        .iter()
        .fold(sql.to_string(), |acc, (from, to)| acc.replace(from, to))
}
