// ABOUTME: Small helpers shared across the converter
// ABOUTME: Log-safe identifier display and generation timestamps

use chrono::{DateTime, Local};

/// Layout of the generation timestamp written in the dump header
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Sanitize an identifier (table name, column name) for display
///
/// Removes control characters and limits length to prevent log injection and
/// keep messages readable. Not for building SQL.
///
/// # Examples
///
/// ```
/// # use sqlite_sql_converter::utils::sanitize_identifier;
/// assert_eq!(sanitize_identifier("normal_table"), "normal_table");
/// assert_eq!(sanitize_identifier("table\nname"), "tablename");
/// assert_eq!(sanitize_identifier(&"a".repeat(200)).len(), 100);
/// ```
pub fn sanitize_identifier(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !c.is_control())
        .take(100)
        .collect()
}

/// Render a local time the way the dump header expects
pub fn format_generated_at(time: &DateTime<Local>) -> String {
    time.format(GENERATED_AT_FORMAT).to_string()
}

/// Current local time rendered for the dump header
pub fn generated_at_now() -> String {
    format_generated_at(&Local::now())
}
