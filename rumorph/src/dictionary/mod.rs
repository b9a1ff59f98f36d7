//! Loading the compiled dictionary: string tables, paradigms and automata.

#[cfg(any(test, feature = "internal_build"))]
mod builder;
pub mod error;

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use smol_str::SmolStr;

#[cfg(any(test, feature = "internal_build"))]
pub use self::builder::DictionaryBuilder;
pub use self::error::DictionaryError;

use crate::constants::*;
use crate::dawg::{IntDawg, PredictionRecord, RecordDawg, WordRecord};
use crate::paradigm::ParadigmTable;

/// Everything the analyzer reads: immutable once loaded.
#[derive(Debug)]
pub struct DictionaryData {
    paradigms: ParadigmTable,
    words: RecordDawg<WordRecord>,
    probabilities: IntDawg,
    predictions: Vec<RecordDawg<PredictionRecord>>,
}

impl DictionaryData {
    /// Assembles dictionary parts. There must be one prediction automaton
    /// per paradigm prefix.
    pub fn new(
        paradigms: ParadigmTable,
        words: RecordDawg<WordRecord>,
        probabilities: IntDawg,
        predictions: Vec<RecordDawg<PredictionRecord>>,
    ) -> Result<DictionaryData, DictionaryError> {
        if predictions.len() != paradigms.prefixes().len() {
            return Err(DictionaryError::PredictionCount {
                expected: paradigms.prefixes().len(),
                found: predictions.len(),
            });
        }

        Ok(DictionaryData {
            paradigms,
            words,
            probabilities,
            predictions,
        })
    }

    /// Loads a dictionary directory. Only a missing prefix list is
    /// tolerated; it falls back to the three standard prefix classes.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<DictionaryData, DictionaryError> {
        let dir = dir.as_ref();

        let tags = read_strings(&dir.join(TAGS_FILE))?;
        let prefixes = match read_strings(&dir.join(PREFIXES_FILE)) {
            Err(DictionaryError::Io(path, e)) if e.kind() == ErrorKind::NotFound => {
                log::warn!(
                    "No paradigm prefixes at '{}', using defaults",
                    path.display()
                );
                DEFAULT_PARADIGM_PREFIXES
                    .iter()
                    .map(|&s| SmolStr::new(s))
                    .collect()
            }
            result => result?,
        };
        let suffixes = read_strings(&dir.join(SUFFIXES_FILE))?;
        let paradigms = read_paradigms(&dir.join(PARADIGMS_FILE))?;
        log::debug!(
            "Loaded {} tags, {} prefixes, {} suffixes, {} paradigms",
            tags.len(),
            prefixes.len(),
            suffixes.len(),
            paradigms.len()
        );

        let paradigms = ParadigmTable::new(prefixes, suffixes, tags, paradigms)?;

        let path = dir.join(WORDS_FILE);
        let words = RecordDawg::open(&path).map_err(|e| DictionaryError::Dawg(path, e))?;

        let path = dir.join(PROBABILITIES_FILE);
        let probabilities = IntDawg::open(&path).map_err(|e| DictionaryError::Dawg(path, e))?;

        let predictions = (0..paradigms.prefixes().len())
            .map(|class| {
                let path = dir.join(prediction_file_name(class));
                RecordDawg::open(&path).map_err(|e| DictionaryError::Dawg(path, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Loaded {} prediction automata", predictions.len());

        DictionaryData::new(paradigms, words, probabilities, predictions)
    }

    pub fn paradigms(&self) -> &ParadigmTable {
        &self.paradigms
    }

    pub fn words(&self) -> &RecordDawg<WordRecord> {
        &self.words
    }

    pub fn probabilities(&self) -> &IntDawg {
        &self.probabilities
    }

    /// Prediction automaton of paradigm prefix class `class`.
    pub fn prediction(&self, class: usize) -> Option<&RecordDawg<PredictionRecord>> {
        self.predictions.get(class)
    }

    pub fn prediction_count(&self) -> usize {
        self.predictions.len()
    }
}

fn read_strings(path: &Path) -> Result<Vec<SmolStr>, DictionaryError> {
    let file = File::open(path).map_err(|e| DictionaryError::Io(path.to_path_buf(), e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| DictionaryError::Json(path.to_path_buf(), e))
}

fn read_paradigms(path: &Path) -> Result<Vec<Vec<u16>>, DictionaryError> {
    let file = File::open(path).map_err(|e| DictionaryError::Io(path.to_path_buf(), e))?;
    let truncated = |e| DictionaryError::Paradigms(path.to_path_buf(), e);
    let mut reader = BufReader::new(file);

    let count = reader.read_u16::<LittleEndian>().map_err(truncated)?;
    let mut paradigms = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let len = reader.read_u16::<LittleEndian>().map_err(truncated)?;
        let mut paradigm = vec![0u16; len as usize];
        reader
            .read_u16_into::<LittleEndian>(&mut paradigm)
            .map_err(truncated)?;
        paradigms.push(paradigm);
    }

    let mut rest = [0u8; 1];
    if reader.read(&mut rest).map_err(truncated)? != 0 {
        log::warn!("Trailing bytes after {} paradigms in '{}'", count, path.display());
    }

    Ok(paradigms)
}
