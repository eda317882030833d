// ABOUTME: Convert command: SQLite file in, MySQL-compatible SQL dump out
// ABOUTME: Owns the source connection and output file for the duration of one run

use crate::catalog::SourceCatalog;
use crate::config::{ConvertConfig, TargetDb};
use crate::dump::{write_dump, DumpOptions, DumpSummary};
use crate::error::ConvertError;
use crate::sqlite::SqliteCatalog;
use crate::utils::generated_at_now;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;

/// Convert a SQLite database into a SQL dump file
///
/// Runs the whole conversion in one sequential pass:
/// 1. Opens the SQLite file read-only and lists its user tables
/// 2. Applies the table filter
/// 3. Creates the output file (only after the source is known to be readable)
/// 4. Writes CREATE TABLE and/or INSERT statements per table
/// 5. Closes the source and prints a summary
///
/// # Arguments
///
/// * `config` - Resolved conversion settings
///
/// # Returns
///
/// Table and row counters for the run.
///
/// # Errors
///
/// This function will return an error if:
/// - The SQLite file is missing, unreadable or not a database
/// - A table definition cannot be parsed (the run stops at that table)
/// - The output file cannot be created or written
///
/// The output file is written in place; after a failure it holds everything
/// up to the failing table.
///
/// # Examples
///
/// ```no_run
/// # use anyhow::Result;
/// # use sqlite_sql_converter::commands::convert;
/// # use sqlite_sql_converter::config::{ConvertConfig, Settings};
/// # fn example() -> Result<()> {
/// let config = ConvertConfig::new("app.db", "app.sql", Settings::default())?;
/// let summary = convert(&config)?;
/// println!("{} rows", summary.row_count);
/// # Ok(())
/// # }
/// ```
pub fn convert(config: &ConvertConfig) -> Result<DumpSummary> {
    tracing::info!("Starting SQLite conversion...");

    if config.target_db == TargetDb::Postgresql {
        tracing::warn!(
            "⚠ PostgreSQL output is not implemented; statements use MySQL syntax and only the header names PostgreSQL"
        );
    }

    let catalog = SqliteCatalog::open(&config.sqlite_file)
        .with_context(|| format!("Failed to open source database '{}'", config.sqlite_file))?;

    let tables = catalog
        .table_names()
        .context("Failed to list tables in source database")?;
    let tables = config.filter.apply(tables);

    if tables.is_empty() {
        tracing::warn!("⚠ No tables found to convert");
    } else {
        tracing::info!("Found {} table(s) to convert", tables.len());
    }

    let file = File::create(&config.output_file)
        .map_err(ConvertError::OutputWrite)
        .with_context(|| format!("Failed to create output file '{}'", config.output_file))?;
    let mut out = BufWriter::new(file);

    let progress = if config.show_progress {
        let bar = ProgressBar::new(tables.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("##-"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let options = DumpOptions {
        target_db: config.target_db,
        mode: config.mode,
        table_options: config.table_options.clone(),
    };

    let result = write_dump(
        &catalog,
        &tables,
        &mut out,
        &options,
        &generated_at_now(),
        &progress,
    );

    // Release the source whether or not the pass succeeded
    if let Err(e) = catalog.close() {
        tracing::warn!("Failed to close SQLite database cleanly: {}", e);
    }

    let summary = match result {
        Ok(summary) => {
            progress.finish_with_message("Conversion complete");
            summary
        }
        Err(e) => {
            progress.abandon_with_message("Conversion failed");
            return Err(e).with_context(|| {
                format!(
                    "Conversion aborted; '{}' is incomplete",
                    config.output_file
                )
            });
        }
    };

    tracing::info!(
        "✓ Converted {} table(s), {} row(s)",
        summary.table_count,
        summary.row_count
    );

    print_summary(config, &summary);

    Ok(summary)
}

/// Print the end-of-run summary for the user
fn print_summary(config: &ConvertConfig, summary: &DumpSummary) {
    println!(
        "Conversion completed. Output written to {}",
        config.output_file
    );
    println!("Number of tables converted: {}", summary.table_count);
    if config.mode.includes_data() {
        println!("Total number of rows inserted: {}", summary.row_count);
    }
}
