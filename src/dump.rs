// ABOUTME: Dump orchestration: walks tables in catalog order and writes the SQL file body
// ABOUTME: Emits header, per-table CREATE/INSERT sections and returns conversion counters

use crate::catalog::{RowVisitor, SourceCatalog};
use crate::config::{ConversionMode, TargetDb};
use crate::convert::{translate_create_table, RowSerializer, SqlValue, TableOptions};
use crate::error::{ConvertError, Result};
use crate::utils::sanitize_identifier;
use indicatif::ProgressBar;
use std::io::Write;

/// What to emit and how to finish each CREATE TABLE
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    pub target_db: TargetDb,
    pub mode: ConversionMode,
    pub table_options: TableOptions,
}

/// Counters collected over one dump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Tables enumerated for this run
    pub table_count: usize,
    /// INSERT statements written across all tables
    pub row_count: u64,
}

/// Header line naming source, target and generation time
pub fn header_line(target_db: TargetDb, generated_at: &str) -> String {
    format!(
        "-- Converted from SQLite to {} on {}",
        target_db.header_name(),
        generated_at
    )
}

/// Writes one INSERT line per visited row
struct InsertWriter<'a, W: Write> {
    table: &'a str,
    out: &'a mut W,
    serializer: Option<RowSerializer>,
    written: u64,
}

impl<W: Write> RowVisitor for InsertWriter<'_, W> {
    fn columns(&mut self, columns: &[String]) -> Result<()> {
        self.serializer = Some(RowSerializer::new(self.table, columns));
        Ok(())
    }

    fn row(&mut self, values: Vec<SqlValue>) -> Result<()> {
        let serializer = self.serializer.as_ref().ok_or_else(|| {
            ConvertError::source_access(format!(
                "Row received before column list for '{}'",
                self.table
            ))
        })?;

        if values.len() != serializer.column_count() {
            return Err(ConvertError::source_access(format!(
                "Row of '{}' has {} values but {} columns",
                self.table,
                values.len(),
                serializer.column_count()
            )));
        }

        writeln!(self.out, "{}", serializer.statement(&values))?;
        self.written += 1;
        Ok(())
    }
}

/// Write the complete dump for `tables` to `out`
///
/// Layout:
/// 1. Header comment, blank line
/// 2. `SET FOREIGN_KEY_CHECKS=0;` (both mode only), blank line
/// 3. Per table: CREATE statement and a blank line (schema modes), one INSERT
///    per row (data modes), then a blank line
/// 4. `SET FOREIGN_KEY_CHECKS=1;` (both mode only)
///
/// Any error stops the dump immediately. Whatever was already written stays
/// in `out`, ending before the failing table's CREATE statement.
///
/// `generated_at` is passed in so identical sources produce identical output
/// for a given timestamp.
pub fn write_dump<C, W>(
    catalog: &C,
    tables: &[String],
    out: &mut W,
    options: &DumpOptions,
    generated_at: &str,
    progress: &ProgressBar,
) -> Result<DumpSummary>
where
    C: SourceCatalog + ?Sized,
    W: Write,
{
    let bracket_fk_checks = options.mode == ConversionMode::Both;

    write!(out, "{}\n\n", header_line(options.target_db, generated_at))?;
    if bracket_fk_checks {
        write!(out, "SET FOREIGN_KEY_CHECKS=0;\n\n")?;
    }

    let mut summary = DumpSummary {
        table_count: tables.len(),
        row_count: 0,
    };

    for (idx, table) in tables.iter().enumerate() {
        let display_name = sanitize_identifier(table);
        tracing::info!(
            "Processing table {}/{}: {}",
            idx + 1,
            tables.len(),
            display_name
        );
        progress.set_message(display_name.clone());

        if options.mode.includes_schema() {
            let raw = catalog.create_statement(table)?;
            let translated = translate_create_table(table, &raw, &options.table_options)?;
            write!(out, "{}\n\n", translated.statement)?;
        }

        if options.mode.includes_data() {
            let mut writer = InsertWriter {
                table,
                out: &mut *out,
                serializer: None,
                written: 0,
            };
            let read = catalog.scan_rows(table, &mut writer)?;
            debug_assert_eq!(read, writer.written);

            tracing::debug!("Wrote {} INSERT statements for {}", writer.written, display_name);
            summary.row_count += writer.written;
        }

        writeln!(out)?;
        progress.inc(1);
    }

    if bracket_fk_checks {
        writeln!(out, "SET FOREIGN_KEY_CHECKS=1;")?;
    }

    out.flush()?;

    Ok(summary)
}
