// ABOUTME: Integration tests for the full conversion workflow
// ABOUTME: Builds real SQLite files in temp directories and checks the generated SQL

use rusqlite::Connection;
use sqlite_sql_converter::commands;
use sqlite_sql_converter::config::{parse_settings, ConvertConfig, Settings};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SHOP_SCHEMA: &str = r#"
CREATE TABLE "customers" (
    "id" integer NOT NULL PRIMARY KEY AUTOINCREMENT,
    "name" TEXT NOT NULL,
    "joined" DATETIME
);
CREATE TABLE "orders" (
    "id" integer NOT NULL PRIMARY KEY AUTOINCREMENT,
    "customer_id" integer NOT NULL REFERENCES "customers" ("id"),
    "total" REAL,
    "note" TEXT
);
CREATE INDEX "orders_customer" ON "orders" ("customer_id");
CREATE VIEW "big_orders" AS SELECT * FROM "orders" WHERE "total" > 100;

INSERT INTO customers (name, joined) VALUES ('Ann', '2023-01-05 10:00:00');
INSERT INTO customers (name, joined) VALUES ('Sean O''Brien', NULL);
INSERT INTO orders (customer_id, total, note) VALUES (1, 19.5, NULL);
INSERT INTO orders (customer_id, total, note) VALUES (2, 250.0, 'gift, wrapped');
INSERT INTO orders (customer_id, total, note) VALUES (2, 3.25, 'C:\path');
"#;

/// Create a SQLite file from `sql` inside a fresh temp directory
fn build_database(sql: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("source.db");
    let conn = Connection::open(&path).expect("open sqlite");
    conn.execute_batch(sql).expect("seed sqlite");
    conn.close().expect("close sqlite");
    (dir, path)
}

fn config(source: &Path, output: &Path, settings: Settings) -> ConvertConfig {
    ConvertConfig::new(
        source.to_str().unwrap(),
        output.to_str().unwrap(),
        settings,
    )
    .expect("valid config")
    .with_progress(false)
}

/// Output without the header line, which carries the generation time
fn body(text: &str) -> &str {
    let (header, rest) = text.split_once('\n').expect("header line");
    assert!(header.starts_with("-- Converted from SQLite to "));
    rest
}

#[test]
fn test_full_conversion_output() {
    let (dir, source) = build_database(SHOP_SCHEMA);
    let output = dir.path().join("shop.sql");

    let summary = commands::convert(&config(&source, &output, Settings::default())).unwrap();
    assert_eq!(summary.table_count, 2);
    assert_eq!(summary.row_count, 5);

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("-- Converted from SQLite to MYSQL on "));

    let expected = r#"
SET FOREIGN_KEY_CHECKS=0;

CREATE TABLE IF NOT EXISTS `customers` (
    `id` INT AUTO_INCREMENT PRIMARY KEY,
    `name` TEXT NOT NULL,
    `joined` DATETIME
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci;

INSERT IGNORE INTO `customers` (`id`, `name`, `joined`) VALUES (1, 'Ann', '2023-01-05 10:00:00');
INSERT IGNORE INTO `customers` (`id`, `name`, `joined`) VALUES (2, 'Sean O''Brien', NULL);

CREATE TABLE IF NOT EXISTS `orders` (
    `id` INT AUTO_INCREMENT PRIMARY KEY,
    `customer_id` INT NOT NULL REFERENCES `customers` (`id`),
    `total` DOUBLE,
    `note` TEXT
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci;

INSERT IGNORE INTO `orders` (`id`, `customer_id`, `total`, `note`) VALUES (1, 1, 19.5, NULL);
INSERT IGNORE INTO `orders` (`id`, `customer_id`, `total`, `note`) VALUES (2, 2, 250.0, 'gift, wrapped');
INSERT IGNORE INTO `orders` (`id`, `customer_id`, `total`, `note`) VALUES (3, 2, 3.25, 'C:\path');

SET FOREIGN_KEY_CHECKS=1;
"#;

    assert_eq!(body(&text), expected);
}

#[test]
fn test_views_indexes_and_internal_tables_are_skipped() {
    let (dir, source) = build_database(SHOP_SCHEMA);
    let output = dir.path().join("shop.sql");

    commands::convert(&config(&source, &output, Settings::default())).unwrap();
    let text = std::fs::read_to_string(&output).unwrap();

    assert!(!text.contains("big_orders"));
    assert!(!text.contains("orders_customer"));
    assert!(!text.contains("sqlite_sequence"));
}

#[test]
fn test_rerun_is_identical_apart_from_header() {
    let (dir, source) = build_database(SHOP_SCHEMA);
    let first = dir.path().join("first.sql");
    let second = dir.path().join("second.sql");

    commands::convert(&config(&source, &first, Settings::default())).unwrap();
    commands::convert(&config(&source, &second, Settings::default())).unwrap();

    let first = std::fs::read_to_string(first).unwrap();
    let second = std::fs::read_to_string(second).unwrap();
    assert_eq!(body(&first), body(&second));
}

#[test]
fn test_one_insert_per_row_and_one_create_per_table() {
    let mut sql = String::from("CREATE TABLE readings (sensor TEXT, value REAL);\n");
    for i in 0..250 {
        sql.push_str(&format!(
            "INSERT INTO readings VALUES ('s{}', {}.5);\n",
            i % 7,
            i
        ));
    }
    sql.push_str("CREATE TABLE empty_table (x integer);\n");

    let (dir, source) = build_database(&sql);
    let output = dir.path().join("readings.sql");

    let summary = commands::convert(&config(&source, &output, Settings::default())).unwrap();
    assert_eq!(summary.row_count, 250);
    assert_eq!(summary.table_count, 2);

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(text.matches("INSERT IGNORE INTO `readings`").count(), 250);
    assert_eq!(text.matches("CREATE TABLE IF NOT EXISTS readings").count(), 1);
    assert_eq!(text.matches("CREATE TABLE IF NOT EXISTS empty_table").count(), 1);
    assert!(!text.contains("INSERT IGNORE INTO `empty_table`"));

    // Row order follows the table scan
    let first = text.find("VALUES ('s0', 0.5);").unwrap();
    let last = text.find("VALUES ('s4', 249.5);").unwrap();
    assert!(first < last);
}

#[test]
fn test_tables_mode_from_config_file() {
    let (dir, source) = build_database(SHOP_SCHEMA);
    let output = dir.path().join("schema.sql");

    let settings = parse_settings(
        r#"
        conversion_type = "tables"
        include_tables = ["orders"]

        [table_options]
        engine = "Aria"
        "#,
    )
    .unwrap();

    let summary = commands::convert(&config(&source, &output, settings)).unwrap();
    assert_eq!(summary.table_count, 1);
    assert_eq!(summary.row_count, 0);

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("CREATE TABLE IF NOT EXISTS `orders`"));
    assert!(text.contains("ENGINE=Aria DEFAULT CHARSET=utf8mb4"));
    assert!(!text.contains("CREATE TABLE IF NOT EXISTS `customers`"));
    assert!(!text.contains("INSERT"));
    assert!(!text.contains("FOREIGN_KEY_CHECKS"));
}

#[test]
fn test_data_mode_with_exclusion() {
    let (dir, source) = build_database(SHOP_SCHEMA);
    let output = dir.path().join("data.sql");

    let settings = parse_settings(
        r#"
        conversion_type = "data"
        exclude_tables = ["orders"]
        "#,
    )
    .unwrap();

    let summary = commands::convert(&config(&source, &output, settings)).unwrap();
    assert_eq!(summary.row_count, 2);

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(!text.contains("CREATE TABLE"));
    assert!(!text.contains("INSERT IGNORE INTO `orders`"));
    assert_eq!(text.matches("INSERT IGNORE INTO `customers`").count(), 2);
}

#[test]
fn test_unparseable_definition_aborts_with_truncated_output() {
    let (dir, source) = build_database(
        r#"
        CREATE TABLE first (a TEXT);
        INSERT INTO first VALUES ('kept');
        CREATE TABLE "(odd" (b TEXT);
        CREATE TABLE last (c TEXT);
        "#,
    );
    let output = dir.path().join("broken.sql");

    let err = commands::convert(&config(&source, &output, Settings::default())).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("Could not extract table name"), "{}", chain);
    assert!(chain.contains("incomplete"), "{}", chain);

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("INSERT IGNORE INTO `first` (`a`) VALUES ('kept');"));
    assert!(!text.contains("(odd"));
    assert!(!text.contains("last"));
    assert!(!text.contains("FOREIGN_KEY_CHECKS=1"));
}

#[test]
fn test_postgresql_target_only_changes_header() {
    let (dir, source) = build_database(SHOP_SCHEMA);
    let mysql = dir.path().join("mysql.sql");
    let postgres = dir.path().join("postgres.sql");

    commands::convert(&config(&source, &mysql, Settings::default())).unwrap();
    let settings = parse_settings("target_db = \"postgresql\"").unwrap();
    commands::convert(&config(&source, &postgres, settings)).unwrap();

    let mysql = std::fs::read_to_string(mysql).unwrap();
    let postgres = std::fs::read_to_string(postgres).unwrap();
    assert!(postgres.starts_with("-- Converted from SQLite to POSTGRESQL on "));
    assert_eq!(body(&mysql), body(&postgres));
}

#[test]
fn test_unwritable_output_is_reported() {
    let (dir, source) = build_database("CREATE TABLE t (a TEXT);");
    let output = dir.path().join("no_such_dir").join("out.sql");

    let err = commands::convert(&config(&source, &output, Settings::default())).unwrap_err();
    assert!(err.to_string().contains("Failed to create output file"));
}

#[test]
fn test_source_is_not_modified() {
    let (dir, source) = build_database(SHOP_SCHEMA);
    let before = std::fs::read(&source).unwrap();

    commands::convert(&config(&source, &dir.path().join("out.sql"), Settings::default())).unwrap();

    assert_eq!(std::fs::read(&source).unwrap(), before);
}
