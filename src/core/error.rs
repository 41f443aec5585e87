use rusqlite;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FiltergateError {
    #[error("SQLite error: {0}")]
    RusqliteError(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Failed to initialize database: {0}")]
    DatabaseInitializationError(String),
    #[error("Catalog error: {0}")]
    CatalogError(String),
    #[error("Rule conversion error: {0}")]
    ConversionError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
