//! Errors of the analyzer lifecycle.
use crate::dictionary::DictionaryError;

/// Errors that can occur when setting up or using the shared analyzer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MorphError {
    /// The shared analyzer was already initialized
    #[error("Analyzer is already initialized")]
    AlreadyInitialized,

    /// The shared analyzer was used before initialization
    #[error("Analyzer is not initialized")]
    NotInitialized,

    /// No dictionary directory could be located
    #[error("Dictionary not found; set RUMORPH_DICT_PATH or install pymorphy2-dicts-ru")]
    DictionaryNotFound,

    /// The dictionary directory could not be loaded
    #[error("Failed to load dictionary")]
    Dictionary(#[from] DictionaryError),
}
