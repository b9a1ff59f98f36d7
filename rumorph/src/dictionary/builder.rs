//! Assembles dictionaries in memory and writes them in the on-disk layout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, WriteBytesExt};
use hashbrown::HashMap;
use smol_str::SmolStr;

use super::{DictionaryData, DictionaryError};
use crate::constants::*;
use crate::dawg::builder::{build_int_dawg, build_record_dawg};
use crate::dawg::{DawgError, PredictionRecord, WordRecord};
use crate::paradigm::ParadigmTable;

#[derive(Debug, Default)]
struct Interner {
    strings: Vec<SmolStr>,
    indices: HashMap<SmolStr, u16>,
}

impl Interner {
    fn intern(&mut self, s: &str) -> u16 {
        if let Some(&index) = self.indices.get(s) {
            return index;
        }
        let index = self.strings.len() as u16;
        self.strings.push(SmolStr::new(s));
        self.indices.insert(SmolStr::new(s), index);
        index
    }
}

/// Collects paradigms, words, weights and predictions for a dictionary.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    prefixes: Interner,
    suffixes: Interner,
    tags: Interner,
    paradigms: Vec<Vec<u16>>,
    words: Vec<(String, WordRecord)>,
    probabilities: Vec<(String, u32)>,
    predictions: Vec<Vec<(String, PredictionRecord)>>,
}

impl DictionaryBuilder {
    /// Starts a dictionary whose prediction classes are `prefixes`.
    pub fn new(prefixes: &[&str]) -> DictionaryBuilder {
        let mut builder = DictionaryBuilder::default();
        for prefix in prefixes {
            builder.prefixes.intern(prefix);
        }
        builder
    }

    /// Adds a paradigm from its `(prefix, suffix, tag)` forms, normal form
    /// first, and returns its index.
    pub fn add_paradigm(&mut self, forms: &[(&str, &str, &str)]) -> u16 {
        let suffixes = forms.iter().map(|f| self.suffixes.intern(f.1)).collect::<Vec<_>>();
        let tags = forms.iter().map(|f| self.tags.intern(f.2)).collect::<Vec<_>>();
        let prefixes = forms.iter().map(|f| self.prefixes.intern(f.0)).collect::<Vec<_>>();

        self.paradigms.push([suffixes, tags, prefixes].concat());
        (self.paradigms.len() - 1) as u16
    }

    pub fn add_word(&mut self, word: &str, paradigm: u16, form: u16) -> &mut Self {
        self.words
            .push((word.to_string(), WordRecord { paradigm, form }));
        self
    }

    /// Records `p(tag | word)`, scaled by [`PROBABILITY_SCALE`].
    pub fn add_probability(&mut self, word: &str, tag: &str, probability: f64) -> &mut Self {
        let weight = (probability * f64::from(PROBABILITY_SCALE)).round() as u32;
        self.probabilities.push((format!("{}:{}", word, tag), weight));
        self
    }

    pub fn add_prediction(
        &mut self,
        class: usize,
        ending: &str,
        count: u16,
        paradigm: u16,
        form: u16,
    ) -> &mut Self {
        if self.predictions.len() <= class {
            self.predictions.resize_with(class + 1, Vec::new);
        }
        self.predictions[class].push((
            ending.to_string(),
            PredictionRecord {
                count,
                paradigm,
                form,
            },
        ));
        self
    }

    pub fn build(self) -> Result<DictionaryData, DictionaryError> {
        let dawg_error = |file: &str| {
            let path = PathBuf::from(file);
            move |e: DawgError| DictionaryError::Dawg(path, e)
        };

        let paradigms = ParadigmTable::new(
            self.prefixes.strings,
            self.suffixes.strings,
            self.tags.strings,
            self.paradigms,
        )?;

        let words = build_record_dawg(self.words).map_err(dawg_error(WORDS_FILE))?;
        let probabilities =
            build_int_dawg(self.probabilities).map_err(dawg_error(PROBABILITIES_FILE))?;

        let mut predictions = self.predictions;
        if predictions.len() < paradigms.prefixes().len() {
            predictions.resize_with(paradigms.prefixes().len(), Vec::new);
        }
        let predictions = predictions
            .into_iter()
            .enumerate()
            .map(|(class, items)| {
                build_record_dawg(items).map_err(dawg_error(&prediction_file_name(class)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        DictionaryData::new(paradigms, words, probabilities, predictions)
    }
}

impl DictionaryData {
    /// Writes the dictionary in the layout [`DictionaryData::open`] reads.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<(), DictionaryError> {
        let dir = dir.as_ref();
        let paradigms = self.paradigms();

        write_strings(&dir.join(TAGS_FILE), paradigms.tags())?;
        write_strings(&dir.join(PREFIXES_FILE), paradigms.prefixes())?;
        write_strings(&dir.join(SUFFIXES_FILE), paradigms.suffixes())?;

        let path = dir.join(PARADIGMS_FILE);
        write_file(&path, |writer| {
            writer.write_u16::<LittleEndian>(paradigms.len() as u16)?;
            for paradigm in paradigms.paradigms() {
                writer.write_u16::<LittleEndian>(paradigm.len() as u16)?;
                for &index in paradigm {
                    writer.write_u16::<LittleEndian>(index)?;
                }
            }
            Ok(())
        })?;

        write_dawg(&dir.join(WORDS_FILE), |w| self.words().write_to(w))?;
        write_dawg(&dir.join(PROBABILITIES_FILE), |w| {
            self.probabilities().write_to(w)
        })?;
        for (class, dawg) in self.predictions.iter().enumerate() {
            write_dawg(&dir.join(prediction_file_name(class)), |w| dawg.write_to(w))?;
        }

        Ok(())
    }
}

fn write_file<F>(path: &Path, f: F) -> Result<(), DictionaryError>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let io_error = |e| DictionaryError::Io(path.to_path_buf(), e);
    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    f(&mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)
}

fn write_strings(path: &Path, strings: &[SmolStr]) -> Result<(), DictionaryError> {
    write_file(path, |writer| {
        serde_json::to_writer(writer, strings).map_err(std::io::Error::from)
    })
}

fn write_dawg<F>(path: &Path, f: F) -> Result<(), DictionaryError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), DawgError>,
{
    let dawg_error = |e| DictionaryError::Dawg(path.to_path_buf(), e);
    let file = File::create(path).map_err(|e| DictionaryError::Io(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);
    f(&mut writer).map_err(dawg_error)?;
    writer.flush().map_err(|e| dawg_error(DawgError::Io(e)))
}
