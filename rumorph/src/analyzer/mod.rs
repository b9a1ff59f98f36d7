//! Morphological analysis of dictionary and out-of-vocabulary words.

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::worker::AnalyzerWorker;
use crate::dawg::CharReplacements;
use crate::dictionary::{DictionaryData, DictionaryError};
use crate::error::MorphError;

pub mod affixes;
pub mod grammemes;
pub mod parse;
mod worker;

pub use self::parse::{into_columns, Parse};

/// Tunables of the out-of-vocabulary cascade.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// shortest remainder analyzed after stripping a known prefix
    pub min_known_prefix_remainder: usize,
    /// longest guessed unknown prefix
    pub max_unknown_prefix_len: usize,
    /// shortest remainder analyzed after a guessed unknown prefix
    pub min_unknown_prefix_remainder: usize,
    /// shortest word predicted from similar endings
    pub min_prediction_word_len: usize,
    /// longest ending looked up in the prediction tables
    pub max_prediction_suffix_len: usize,
    /// prediction stops once the summed match counts exceed this
    pub prediction_evidence_threshold: u32,
    /// recursion depth beyond which only dictionary lookup is done
    pub max_depth: usize,
    /// nested analyses allowed for one word; further ones find nothing
    pub max_recursive_calls: usize,
    /// spelling alternatives tried during lookup
    pub replacements: CharReplacements,
}

impl Default for AnalyzerConfig {
    fn default() -> AnalyzerConfig {
        AnalyzerConfig {
            min_known_prefix_remainder: 3,
            max_unknown_prefix_len: 5,
            min_unknown_prefix_remainder: 3,
            min_prediction_word_len: 4,
            max_prediction_suffix_len: 5,
            prediction_evidence_threshold: 1,
            max_depth: 32,
            max_recursive_calls: 512,
            replacements: CharReplacements::russian(),
        }
    }
}

/// A loaded dictionary and the configuration used to analyze words with it.
#[derive(Debug)]
pub struct MorphAnalyzer {
    data: DictionaryData,
    config: AnalyzerConfig,
}

impl MorphAnalyzer {
    pub fn new(data: DictionaryData) -> MorphAnalyzer {
        MorphAnalyzer::with_config(data, AnalyzerConfig::default())
    }

    pub fn with_config(data: DictionaryData, config: AnalyzerConfig) -> MorphAnalyzer {
        MorphAnalyzer { data, config }
    }

    pub fn open<P: AsRef<Path>>(dir: P) -> Result<MorphAnalyzer, DictionaryError> {
        Ok(MorphAnalyzer::new(DictionaryData::open(dir)?))
    }

    /// Opens the dictionary found by [`crate::paths::find_dictionary_path`].
    pub fn open_default() -> Result<MorphAnalyzer, MorphError> {
        let dir = crate::paths::find_dictionary_path().ok_or(MorphError::DictionaryNotFound)?;
        Ok(MorphAnalyzer::open(dir)?)
    }

    pub fn data(&self) -> &DictionaryData {
        &self.data
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Looks `word` up in the dictionary as given (no case folding).
    ///
    /// Every record of every matching key becomes one analysis, in key
    /// order. If any analysis has a known probability, the list is stably
    /// sorted by descending probability; otherwise the order is kept.
    pub fn parse(&self, word: &str) -> Vec<Parse> {
        let paradigms = self.data.paradigms();
        let probabilities = self.data.probabilities();
        let mut weighted = vec![];

        for (key, records) in self
            .data
            .words()
            .similar_items(word, &self.config.replacements)
        {
            for record in records {
                let decoded = paradigms
                    .form(record.paradigm, record.form)
                    .zip(paradigms.normal_form(&key, record.paradigm, record.form));
                let (form, normal_form) = match decoded {
                    Some(v) => v,
                    None => {
                        log::warn!("Skipping {:?} with invalid record {:?}", key, record);
                        continue;
                    }
                };
                let tag = form.tag.clone();

                let weight = probabilities.exact_value(&format!("{}:{}", word, tag));
                weighted.push((Parse::new(key.clone(), normal_form, tag), weight));
            }
        }

        if weighted.iter().any(|(_, weight)| *weight > 0) {
            weighted.sort_by(|a, b| b.1.cmp(&a.1));
        }

        weighted.into_iter().map(|(parse, _)| parse).collect()
    }

    /// Analyzes `word`, lowercased, guessing analyses for words missing from
    /// the dictionary. Dictionary analyses always win when there are any.
    pub fn xparse(&self, word: &str) -> Vec<Parse> {
        let word = word.to_lowercase();
        AnalyzerWorker::new(self).xparse(&word, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{analyzer, triples};

    #[test]
    fn dictionary_word_has_all_readings() {
        let a = analyzer();
        let parses = a.parse("кошка");
        assert_eq!(
            triples(&parses),
            vec![
                ("кошка", "кошка", "NOUN,anim,femn sing,nomn"),
                ("кошка", "кошка", "NOUN,inan,femn sing,nomn"),
            ]
        );
    }

    #[test]
    fn inflected_forms_get_normal_forms() {
        let a = analyzer();
        assert_eq!(
            triples(&a.parse("кошке")),
            vec![
                ("кошке", "кошка", "NOUN,anim,femn sing,datv"),
                ("кошке", "кошка", "NOUN,inan,femn sing,datv"),
            ]
        );
        assert_eq!(
            triples(&a.parse("ей")),
            vec![("ей", "она", "NPRO,femn,3per,Anph sing,datv")]
        );
        assert_eq!(
            triples(&a.parse("гора")),
            vec![
                ("гора", "гора", "NOUN,inan,femn sing,nomn"),
                ("гора", "гор", "NOUN,anim,masc,Name sing,gent"),
                ("гора", "гор", "NOUN,anim,masc,Name sing,accs"),
            ]
        );
    }

    #[test]
    fn restores_yo() {
        let a = analyzer();
        assert_eq!(
            triples(&a.parse("котенок")),
            vec![("котёнок", "котёнок", "NOUN,anim,masc sing,nomn")]
        );
        assert_eq!(
            triples(&a.parse("котёнка")),
            vec![("котёнка", "котёнок", "NOUN,anim,masc sing,gent")]
        );
    }

    #[test]
    fn ranks_by_probability() {
        let a = analyzer();
        assert_eq!(
            triples(&a.parse("стали")),
            vec![
                ("стали", "сталь", "NOUN,inan,femn sing,gent"),
                ("стали", "стать", "VERB,perf,intr plur,past,indc"),
            ]
        );
    }

    #[test]
    fn unknown_words_and_case_are_not_errors() {
        let a = analyzer();
        assert!(a.parse("бутявкать").is_empty());
        assert!(a.parse("").is_empty());
        assert!(a.parse("Кошка").is_empty());
    }

    #[test]
    fn extended_analysis_prefers_the_dictionary() {
        let a = analyzer();
        for word in ["кошка", "стали", "котенок", "гора", "ей"] {
            assert_eq!(a.xparse(word), a.parse(word), "{}", word);
        }
        assert_eq!(a.xparse("Кошка"), a.parse("кошка"));
        assert_eq!(a.xparse("СТАЛИ"), a.parse("стали"));
    }

    #[test]
    fn analysis_is_repeatable() {
        let a = analyzer();
        for word in ["человек-гора", "бутявкать", "псевдокошка", "стали"] {
            assert_eq!(a.xparse(word), a.xparse(word));
        }
    }

    #[test]
    fn config_reads_partial_json() {
        let config: AnalyzerConfig = serde_json::from_str(r#"{"max_depth": 4}"#).unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.max_unknown_prefix_len, 5);
        assert_eq!(config.max_recursive_calls, 512);
        assert_eq!(config.replacements, CharReplacements::russian());
    }

    #[test]
    fn analyzer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MorphAnalyzer>();

        let a = std::sync::Arc::new(analyzer());
        let expected = a.xparse("бутявкать");

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let a = a.clone();
                std::thread::spawn(move || a.xparse("бутявкать"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
