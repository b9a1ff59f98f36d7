//! Read-only DAWG automata in the `dawgdic` double-array format.
//!
//! Record automata map a key to one or more fixed-width records, stored as
//! `key ++ 0x01 ++ base64(record)` completions; integer automata keep a
//! value directly on each accepting node.

#[cfg(any(test, feature = "internal_build"))]
pub mod builder;
mod completer;
mod dictionary;
mod guide;
mod int_dawg;
mod record;
pub mod similar;
mod units;

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

pub use self::completer::Completer;
pub use self::dictionary::Dictionary;
pub use self::guide::Guide;
pub use self::int_dawg::IntDawg;
pub use self::record::{PredictionRecord, Record, RecordDawg, WordRecord};
pub use self::similar::CharReplacements;

/// Errors reading or building an automaton.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DawgError {
    /// Input ended before the named section was complete
    #[error("Truncated automaton: missing {0}")]
    Truncated(&'static str),

    /// I/O error while reading or writing an automaton
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Key contains the reserved zero byte
    #[error("Invalid key {0:?}")]
    InvalidKey(String),

    /// Value does not fit in 31 bits
    #[error("Value {0} is too large")]
    ValueTooLarge(u32),

    /// No double-array slot could be found for a node
    #[error("Automaton is too large to lay out")]
    Layout,
}

/// Maps an automaton file into memory. Empty files are read as empty input
/// so they fail as truncated rather than as a mapping error.
pub(crate) fn map_file<P: AsRef<Path>>(path: P) -> Result<Option<Mmap>, DawgError> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(None);
    }
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(Some(mmap))
}
