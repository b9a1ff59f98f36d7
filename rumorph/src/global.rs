//! A process-wide analyzer for callers that do not want to pass one around.
//!
//! Initialize it once, then call [`parse`] and [`xparse`] from any thread.
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::analyzer::{AnalyzerConfig, MorphAnalyzer, Parse};
use crate::dictionary::DictionaryData;
use crate::error::MorphError;

static ANALYZER: RwLock<Option<Arc<MorphAnalyzer>>> = parking_lot::const_rwlock(None);

/// Loads the dictionary found by [`crate::paths::find_dictionary_path`].
pub fn init() -> Result<(), MorphError> {
    if ANALYZER.read().is_some() {
        return Err(MorphError::AlreadyInitialized);
    }
    let dir = crate::paths::find_dictionary_path().ok_or(MorphError::DictionaryNotFound)?;
    init_with(dir)
}

/// Loads the dictionary in `dir` with the default configuration.
pub fn init_with<P: AsRef<Path>>(dir: P) -> Result<(), MorphError> {
    init_with_config(dir, AnalyzerConfig::default())
}

/// Loads the dictionary in `dir`. Fails without loading anything if the
/// analyzer is already set; a failed load leaves it unset.
pub fn init_with_config<P: AsRef<Path>>(dir: P, config: AnalyzerConfig) -> Result<(), MorphError> {
    let mut slot = ANALYZER.write();
    if slot.is_some() {
        return Err(MorphError::AlreadyInitialized);
    }

    let data = DictionaryData::open(dir)?;
    *slot = Some(Arc::new(MorphAnalyzer::with_config(data, config)));
    log::debug!("Shared analyzer initialized");
    Ok(())
}

/// The shared analyzer, if initialized.
pub fn analyzer() -> Result<Arc<MorphAnalyzer>, MorphError> {
    ANALYZER.read().clone().ok_or(MorphError::NotInitialized)
}

/// [`MorphAnalyzer::parse`] on the shared analyzer.
pub fn parse(word: &str) -> Result<Vec<Parse>, MorphError> {
    Ok(analyzer()?.parse(word))
}

/// [`MorphAnalyzer::xparse`] on the shared analyzer.
pub fn xparse(word: &str) -> Result<Vec<Parse>, MorphError> {
    Ok(analyzer()?.xparse(word))
}

/// Drops the shared analyzer so it can be initialized again. Analyzers
/// already handed out stay usable. Returns whether one was set.
pub fn reset() -> bool {
    ANALYZER.write().take().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{triples, write_fixture};

    // The only test touching the process-wide slot.
    #[test]
    fn lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        assert!(matches!(parse("кошка"), Err(MorphError::NotInitialized)));
        assert!(matches!(
            init_with(dir.path().join("missing")),
            Err(MorphError::Dictionary(_))
        ));
        assert!(matches!(analyzer(), Err(MorphError::NotInitialized)));

        init_with(dir.path()).unwrap();
        assert!(matches!(
            init_with(dir.path()),
            Err(MorphError::AlreadyInitialized)
        ));

        assert_eq!(parse("кошка").unwrap().len(), 2);
        assert_eq!(
            triples(&xparse("Котенок").unwrap()),
            vec![("котёнок", "котёнок", "NOUN,anim,masc sing,nomn")]
        );

        let held = analyzer().unwrap();
        assert!(reset());
        assert!(!reset());
        assert!(matches!(xparse("кошка"), Err(MorphError::NotInitialized)));
        assert_eq!(held.parse("кошка").len(), 2);

        let config = AnalyzerConfig {
            max_depth: 0,
            ..AnalyzerConfig::default()
        };
        init_with_config(dir.path(), config).unwrap();
        assert!(xparse("смотри-ка").unwrap().is_empty());
        assert!(reset());
    }
}
