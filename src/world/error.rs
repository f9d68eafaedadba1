//! Error types for game data loading.

use thiserror::Error;

/// Errors that can occur when loading arena or definition data.
///
/// Any of these aborts startup: the game never runs on partial data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File or directory could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// The arena places a definition that was never loaded.
    #[error("Arena places unknown {kind} '{name}'")]
    UnknownDefinition { kind: &'static str, name: String },

    /// A definition holds values the game cannot run with.
    #[error("Invalid definition '{name}': {reason}")]
    InvalidDefinition { name: String, reason: String },
}
