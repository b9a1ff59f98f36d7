use std::cell::Cell;

use hashbrown::HashSet;
use itertools::iproduct;

use super::affixes::{trailing_splits, word_splits, KNOWN_PREFIXES, PARTICLES_AFTER_HYPHEN};
use super::grammemes::{is_productive, similarity_features};
use super::{AnalyzerConfig, MorphAnalyzer, Parse};

const ADVERB_PREFIX: &str = "по-";
const MIN_ADVERB_LEN: usize = 5;

/// Runs the out-of-vocabulary cascade for one top-level word.
pub struct AnalyzerWorker<'a> {
    analyzer: &'a MorphAnalyzer,
    calls: Cell<usize>,
}

impl<'a> AnalyzerWorker<'a> {
    #[inline(always)]
    pub(crate) fn new(analyzer: &'a MorphAnalyzer) -> AnalyzerWorker<'a> {
        AnalyzerWorker {
            analyzer,
            calls: Cell::new(0),
        }
    }

    #[inline(always)]
    fn config(&self) -> &AnalyzerConfig {
        self.analyzer.config()
    }

    /// Counts a nested analysis against the per-word call budget. Returns
    /// `false` once the budget is spent.
    fn take_call(&self) -> bool {
        let calls = self.calls.get() + 1;
        self.calls.set(calls);

        let budget = self.config().max_recursive_calls;
        if calls == budget + 1 {
            log::debug!("Call budget of {} spent, skipping further analysis", budget);
        }
        calls <= budget
    }

    /// Analyzes a lowercase word. Strategies up to the hyphenated-word split
    /// return as soon as one of them finds something; the last two are
    /// merged.
    pub(crate) fn xparse(&self, word: &str, depth: usize) -> Vec<Parse> {
        if depth > 0 && !self.take_call() {
            return vec![];
        }

        let parses = self.analyzer.parse(word);
        if !parses.is_empty() || depth >= self.config().max_depth {
            return parses;
        }
        let depth = depth + 1;
        let has_hyphen = word.contains('-');
        let len = word.chars().count();

        if has_hyphen {
            if let Some(parses) = self.strip_particle(word, depth) {
                log::trace!("{:?}: particle after hyphen", word);
                return parses;
            }
        }

        if let Some(parse) = self.hyphen_adverb(word, len, depth) {
            log::trace!("{:?}: adverb with по-", word);
            return vec![parse];
        }

        let parses = self.known_prefixes(word, depth);
        if !parses.is_empty() {
            log::trace!("{:?}: known prefix", word);
            return parses;
        }

        if has_hyphen {
            let parses = self.hyphenated(word, depth);
            if !parses.is_empty() {
                log::trace!("{:?}: hyphenated parts", word);
                return parses;
            }
        }

        let mut parses = self.unknown_prefixes(word);
        self.similar_endings(word, len, &mut parses);
        log::trace!("{:?}: {} guessed from prefixes and endings", word, parses.len());
        parses
    }

    // смотри-ка => смотри + -ка
    fn strip_particle(&self, word: &str, depth: usize) -> Option<Vec<Parse>> {
        PARTICLES_AFTER_HYPHEN.iter().find_map(|&particle| {
            let base = word.strip_suffix(particle)?;
            let parses = self.xparse(base, depth);
            if parses.is_empty() {
                return None;
            }
            Some(parses.into_iter().map(|p| p.with_suffix(particle)).collect())
        })
    }

    // по-западному => ADVB, when западному is a singular dative adjective
    fn hyphen_adverb(&self, word: &str, len: usize, depth: usize) -> Option<Parse> {
        if len < MIN_ADVERB_LEN {
            return None;
        }
        let rest = word.strip_prefix(ADVERB_PREFIX)?;

        self.xparse(rest, depth)
            .into_iter()
            .find(|p| p.tag.starts_with("ADJF") && p.tag.contains("sing,datv"))
            .map(|p| {
                let adverb = format!("{}{}", ADVERB_PREFIX, p.word);
                Parse::new(adverb.clone(), adverb, "ADVB".into())
            })
    }

    // псевдокошка => псевдо + кошка, over every matching prefix
    fn known_prefixes(&self, word: &str, depth: usize) -> Vec<Parse> {
        let min_remainder = self.config().min_known_prefix_remainder;
        let mut parses = vec![];

        for prefix in KNOWN_PREFIXES {
            let rest = match word.strip_prefix(prefix) {
                Some(rest) if rest.chars().count() >= min_remainder => rest,
                _ => continue,
            };

            parses.extend(
                self.xparse(rest, depth)
                    .into_iter()
                    .filter(|p| is_productive(&p.tag))
                    .map(|p| p.with_prefix(prefix)),
            );
        }

        parses
    }

    // человек-гора => parts that agree, and интернет-магазин => fixed left part
    fn hyphenated(&self, word: &str, depth: usize) -> Vec<Parse> {
        if word.matches('-').count() != 1 || word.starts_with('-') || word.ends_with('-') {
            return vec![];
        }
        let (left, right) = match word.split_once('-') {
            Some(parts) => parts,
            None => return vec![],
        };

        let left_parses = self.xparse(left, depth);
        let right_parses = self.xparse(right, depth);
        let left_features: Vec<_> = left_parses
            .iter()
            .map(|p| similarity_features(&p.tag))
            .collect();
        let right_features: Vec<_> = right_parses
            .iter()
            .map(|p| similarity_features(&p.tag))
            .collect();

        let agreeing = iproduct!(
            left_parses.iter().zip(&left_features),
            right_parses.iter().zip(&right_features)
        )
        .filter(|((_, lf), (_, rf))| lf == rf)
        .map(|((l, _), (r, _))| {
            Parse::new(
                format!("{}-{}", l.word, r.word),
                format!("{}-{}", l.normal_form, r.normal_form),
                l.tag.clone(),
            )
        });

        let fixed_left = right_parses.iter().map(|r| {
            Parse::new(
                format!("{}-{}", left, r.word),
                format!("{}-{}", left, r.normal_form),
                r.tag.clone(),
            )
        });

        agreeing.chain(fixed_left).collect()
    }

    // байткод => байт + код, looking only the remainder up in the dictionary
    fn unknown_prefixes(&self, word: &str) -> Vec<Parse> {
        let config = self.config();
        let mut parses = vec![];

        for (prefix, rest) in word_splits(
            word,
            config.min_unknown_prefix_remainder,
            config.max_unknown_prefix_len,
        ) {
            parses.extend(
                self.analyzer
                    .parse(rest)
                    .into_iter()
                    .filter(|p| is_productive(&p.tag))
                    .map(|p| p.with_prefix(prefix)),
            );
        }

        parses
    }

    // бутявкать => analyzed like words ending in -вкать, -кать, ...
    fn similar_endings(&self, word: &str, len: usize, parses: &mut Vec<Parse>) {
        let config = self.config();
        if len < config.min_prediction_word_len {
            return;
        }

        let data = self.analyzer.data();
        let paradigms = data.paradigms();
        let splits = trailing_splits(word, config.max_prediction_suffix_len);
        let mut seen: HashSet<Parse> = parses.iter().cloned().collect();

        for (class, class_prefix) in paradigms.prefixes().iter().enumerate() {
            if !word.starts_with(class_prefix.as_str()) {
                continue;
            }
            let dawg = match data.prediction(class) {
                Some(dawg) => dawg,
                None => continue,
            };

            let mut total: u32 = 0;
            for &(start, ending) in &splits {
                for (key, records) in dawg.similar_items(ending, &config.replacements) {
                    for record in records {
                        let form = match paradigms.form(record.paradigm, record.form) {
                            Some(form) => form,
                            None => {
                                log::warn!("Skipping {:?} with invalid record {:?}", key, record);
                                continue;
                            }
                        };
                        if !is_productive(form.tag) {
                            continue;
                        }
                        total = total.saturating_add(u32::from(record.count));

                        let guess = format!("{}{}", start, key);
                        let normal_form =
                            match paradigms.normal_form(&guess, record.paradigm, record.form) {
                                Some(normal_form) => normal_form,
                                None => continue,
                            };

                        let parse = Parse::new(guess, normal_form, form.tag.clone());
                        if seen.insert(parse.clone()) {
                            parses.push(parse);
                        }
                    }
                }

                if total > config.prediction_evidence_threshold {
                    break;
                }
            }
        }
    }
}
