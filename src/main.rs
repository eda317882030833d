// ABOUTME: CLI entry point for sqlite-sql-converter
// ABOUTME: Parses arguments, merges config file settings and runs the conversion

use clap::Parser;
use sqlite_sql_converter::commands;
use sqlite_sql_converter::config::{
    load_settings_from_file, ConversionMode, ConvertConfig, Settings, TargetDb,
};
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "sqlite-sql-converter")]
#[command(about = "Convert a SQLite database to a MySQL-compatible SQL dump", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the SQLite database file
    sqlite_file: String,
    /// Path to the output SQL file
    output_file: String,
    /// Target database system (default: mysql)
    #[arg(long, alias = "target_db", value_enum)]
    target_db: Option<TargetDb>,
    /// Type of conversion to perform (default: both)
    #[arg(long, alias = "conversion_type", value_enum)]
    conversion_type: Option<ConversionMode>,
    /// Convert only these tables (comma-separated)
    #[arg(long, value_delimiter = ',')]
    include_tables: Option<Vec<String>>,
    /// Skip these tables (comma-separated)
    #[arg(long, value_delimiter = ',')]
    exclude_tables: Option<Vec<String>>,
    /// Path to a TOML file with conversion settings
    #[arg(long = "config")]
    config_path: Option<String>,
    /// Disable the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging - default to INFO level if RUST_LOG not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cli_settings = Settings {
        target_db: cli.target_db,
        conversion_type: cli.conversion_type,
        include_tables: cli.include_tables,
        exclude_tables: cli.exclude_tables,
        table_options: None,
    };

    let settings = match &cli.config_path {
        Some(path) => cli_settings.or(load_settings_from_file(path)?),
        None => cli_settings,
    };

    let show_progress = !cli.quiet && std::io::stderr().is_terminal();
    let config =
        ConvertConfig::new(cli.sqlite_file, cli.output_file, settings)?.with_progress(show_progress);

    commands::convert(&config)?;

    Ok(())
}
