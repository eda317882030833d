// ABOUTME: Error taxonomy for the SQLite to MySQL conversion pipeline
// ABOUTME: Every variant is fatal for the run; nothing here is retried

use thiserror::Error;

/// Errors raised while converting a SQLite database into a SQL dump.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The source database could not be opened or queried
    #[error("Source database error: {message}")]
    SourceAccess {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    /// A stored table definition did not match the expected CREATE TABLE shape
    #[error("Could not extract table name from definition of '{table}': {statement}")]
    SchemaParse { table: String, statement: String },

    /// The output destination could not be created or written
    #[error("Failed to write output: {0}")]
    OutputWrite(#[from] std::io::Error),

    /// Invalid configuration file or option combination
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConvertError {
    /// Source access failure without an underlying driver error
    pub fn source_access(message: impl Into<String>) -> Self {
        ConvertError::SourceAccess {
            message: message.into(),
            source: None,
        }
    }

    /// Source access failure wrapping a rusqlite error
    pub fn sqlite(message: impl Into<String>, err: rusqlite::Error) -> Self {
        ConvertError::SourceAccess {
            message: message.into(),
            source: Some(err),
        }
    }

    pub fn schema_parse(table: impl Into<String>, statement: impl Into<String>) -> Self {
        ConvertError::SchemaParse {
            table: table.into(),
            statement: statement.into(),
        }
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, ConvertError>;
