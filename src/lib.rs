// ABOUTME: Library module for sqlite-sql-converter
// ABOUTME: Exports all core functionality for use in binary and tests

pub mod catalog;
pub mod commands;
pub mod config;
pub mod convert;
pub mod dump;
pub mod error;
pub mod filters;
pub mod sqlite;
pub mod utils;
