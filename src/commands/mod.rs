// ABOUTME: Command implementations for the converter CLI
// ABOUTME: Exports the convert command

pub mod convert;

pub use convert::convert;
