// ABOUTME: Conversion settings from CLI flags and an optional TOML file
// ABOUTME: CLI values win over file values, file values win over defaults

use crate::convert::TableOptions;
use crate::error::{ConvertError, Result};
use crate::filters::TableFilter;
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

/// Database system the dump is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetDb {
    #[default]
    Mysql,
    /// Accepted for the header only; statements still use MySQL syntax
    Postgresql,
}

impl TargetDb {
    /// Upper-case name written in the dump header
    pub fn header_name(&self) -> &'static str {
        match self {
            TargetDb::Mysql => "MYSQL",
            TargetDb::Postgresql => "POSTGRESQL",
        }
    }
}

/// Which parts of each table end up in the dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// CREATE TABLE and INSERT statements
    #[default]
    Both,
    /// CREATE TABLE statements only
    Tables,
    /// INSERT statements only
    Data,
}

impl ConversionMode {
    pub fn includes_schema(&self) -> bool {
        matches!(self, ConversionMode::Both | ConversionMode::Tables)
    }

    pub fn includes_data(&self) -> bool {
        matches!(self, ConversionMode::Both | ConversionMode::Data)
    }
}

/// Partially specified settings, as found in a config file or on the command line
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub target_db: Option<TargetDb>,
    pub conversion_type: Option<ConversionMode>,
    pub include_tables: Option<Vec<String>>,
    pub exclude_tables: Option<Vec<String>>,
    pub table_options: Option<TableOptions>,
}

impl Settings {
    /// Fill every unset field of `self` from `fallback`
    pub fn or(self, fallback: Settings) -> Settings {
        Settings {
            target_db: self.target_db.or(fallback.target_db),
            conversion_type: self.conversion_type.or(fallback.conversion_type),
            include_tables: self.include_tables.or(fallback.include_tables),
            exclude_tables: self.exclude_tables.or(fallback.exclude_tables),
            table_options: self.table_options.or(fallback.table_options),
        }
    }
}

/// Parse settings from TOML text
///
/// # Examples
///
/// ```
/// # use sqlite_sql_converter::config::{parse_settings, ConversionMode};
/// let settings = parse_settings(r#"
///     conversion_type = "tables"
///     exclude_tables = ["audit_log"]
///
///     [table_options]
///     engine = "MyISAM"
/// "#).unwrap();
/// assert_eq!(settings.conversion_type, Some(ConversionMode::Tables));
/// assert_eq!(settings.table_options.unwrap().charset, "utf8mb4");
/// ```
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| ConvertError::Config(format!("Invalid config: {}", e)))
}

/// Load settings from a TOML file
pub fn load_settings_from_file(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    tracing::debug!("Loading config from {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|e| {
        ConvertError::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    parse_settings(&contents)
        .map_err(|e| ConvertError::Config(format!("{} ({})", e, path.display())))
}

/// Fully resolved options for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub sqlite_file: String,
    pub output_file: String,
    pub target_db: TargetDb,
    pub mode: ConversionMode,
    pub filter: TableFilter,
    pub table_options: TableOptions,
    pub show_progress: bool,
}

impl ConvertConfig {
    /// Resolve settings into a runnable configuration, applying defaults
    pub fn new(
        sqlite_file: impl Into<String>,
        output_file: impl Into<String>,
        settings: Settings,
    ) -> Result<Self> {
        let output_file = output_file.into();
        if output_file.trim().is_empty() {
            return Err(ConvertError::Config(
                "Output file path cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            sqlite_file: sqlite_file.into(),
            output_file,
            target_db: settings.target_db.unwrap_or_default(),
            mode: settings.conversion_type.unwrap_or_default(),
            filter: TableFilter::new(settings.include_tables, settings.exclude_tables)?,
            table_options: settings.table_options.unwrap_or_default(),
            show_progress: true,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}
