// ABOUTME: SQLite to MySQL statement translation
// ABOUTME: Type mapping, identifier quoting, literal encoding, DDL and INSERT generation

pub mod identifier;
pub mod literal;
pub mod rows;
pub mod schema;
pub mod typemap;

pub use identifier::{quote_ident, quote_identifiers};
pub use literal::SqlValue;
pub use rows::{insert_statement, RowSerializer};
pub use schema::{extract_table_name, translate_create_table, TableOptions, TranslatedTable};
pub use typemap::map_types;
