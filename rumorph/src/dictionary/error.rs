//! Dictionary loading errors.
use std::path::PathBuf;

use crate::dawg::DawgError;
use crate::paradigm::ParadigmError;

/// Errors that can occur when loading a dictionary directory.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// A resource file could not be opened or read
    #[error("Failed to read '{}'", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    /// A string table is not a JSON array of strings
    #[error("Failed to parse '{}'", .0.display())]
    Json(PathBuf, #[source] serde_json::Error),

    /// The paradigm array ended early
    #[error("Truncated paradigm array '{}'", .0.display())]
    Paradigms(PathBuf, #[source] std::io::Error),

    /// An automaton file is missing or malformed
    #[error("Invalid automaton '{}'", .0.display())]
    Dawg(PathBuf, #[source] DawgError),

    /// A paradigm does not fit the string tables
    #[error("Invalid paradigm table")]
    Paradigm(#[from] ParadigmError),

    /// There must be one prediction automaton per paradigm prefix
    #[error("Expected {expected} prediction automata, found {found}")]
    PredictionCount { expected: usize, found: usize },
}
