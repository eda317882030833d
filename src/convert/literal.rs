// ABOUTME: Scalar value model and MySQL literal encoding for INSERT statements
// ABOUTME: Handles NULL, numbers, quote-escaped text, timestamps and opaque values

use chrono::NaiveDateTime;
use std::fmt;

/// Fixed output layout for timestamp literals
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single value read from a source row
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Timestamp(NaiveDateTime),
    /// Anything without a dedicated literal form, kept as its string representation
    Other(String),
}

impl SqlValue {
    /// Encode this value as a MySQL literal
    ///
    /// Maps value kinds to literals:
    /// - Null → `NULL`
    /// - Integer/Real → decimal text, unquoted
    /// - Text → single-quoted, embedded `'` doubled
    /// - Timestamp → `'YYYY-MM-DD HH:MM:SS'`
    /// - Other → single-quoted as-is
    ///
    /// Only single quotes in text are escaped. Backslashes and control
    /// characters pass through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqlite_sql_converter::convert::literal::SqlValue;
    /// assert_eq!(SqlValue::Null.to_literal(), "NULL");
    /// assert_eq!(SqlValue::Integer(42).to_literal(), "42");
    /// assert_eq!(SqlValue::Text("O'Brien".into()).to_literal(), "'O''Brien'");
    /// ```
    pub fn to_literal(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Integer(i) => i.to_string(),
            SqlValue::Real(f) => {
                if f.is_finite() {
                    // Debug keeps the trailing ".0" on whole floats
                    format!("{:?}", f)
                } else {
                    // inf/NaN have no numeric literal, store as strings
                    format!("'{}'", f)
                }
            }
            SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
            SqlValue::Timestamp(ts) => format!("'{}'", ts.format(TIMESTAMP_FORMAT)),
            SqlValue::Other(s) => format!("'{}'", s),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        SqlValue::Timestamp(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SqlValue::Null)
    }
}
