//! Inflectional paradigms: per-form affix and tag indices.
//!
//! A paradigm of `n` forms is stored as `3 * n` indices: the suffix indices
//! of every form, then their tag indices, then their prefix indices. Form 0
//! is the normal (dictionary) form.

use smol_str::SmolStr;

/// Which string table a paradigm index points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffixTable {
    Prefixes,
    Suffixes,
    Tags,
}

#[derive(Debug, thiserror::Error)]
pub enum ParadigmError {
    #[error("Paradigm {paradigm} has length {len}, which is not a multiple of 3")]
    Length { paradigm: usize, len: usize },

    #[error("Paradigm {paradigm} refers to {table:?} entry {value}, but there are only {size}")]
    Index {
        paradigm: usize,
        table: AffixTable,
        value: u16,
        size: usize,
    },
}

/// The affixes and tag of one paradigm form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormAffixes<'a> {
    pub prefix: &'a SmolStr,
    pub suffix: &'a SmolStr,
    pub tag: &'a SmolStr,
}

#[derive(Debug, Clone)]
pub struct ParadigmTable {
    prefixes: Vec<SmolStr>,
    suffixes: Vec<SmolStr>,
    tags: Vec<SmolStr>,
    paradigms: Vec<Vec<u16>>,
}

impl ParadigmTable {
    /// Checks every paradigm against the string tables.
    pub fn new(
        prefixes: Vec<SmolStr>,
        suffixes: Vec<SmolStr>,
        tags: Vec<SmolStr>,
        paradigms: Vec<Vec<u16>>,
    ) -> Result<ParadigmTable, ParadigmError> {
        for (paradigm, para) in paradigms.iter().enumerate() {
            if para.len() % 3 != 0 {
                return Err(ParadigmError::Length {
                    paradigm,
                    len: para.len(),
                });
            }

            let n = para.len() / 3;
            let columns = [
                (AffixTable::Suffixes, suffixes.len()),
                (AffixTable::Tags, tags.len()),
                (AffixTable::Prefixes, prefixes.len()),
            ];

            for (column, &(table, size)) in para.chunks(n.max(1)).zip(columns.iter()) {
                if let Some(&value) = column.iter().find(|&&v| v as usize >= size) {
                    return Err(ParadigmError::Index {
                        paradigm,
                        table,
                        value,
                        size,
                    });
                }
            }
        }

        Ok(ParadigmTable {
            prefixes,
            suffixes,
            tags,
            paradigms,
        })
    }

    /// Paradigm prefix classes, index-aligned with the prediction automata.
    pub fn prefixes(&self) -> &[SmolStr] {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &[SmolStr] {
        &self.suffixes
    }

    pub fn tags(&self) -> &[SmolStr] {
        &self.tags
    }

    pub fn paradigms(&self) -> &[Vec<u16>] {
        &self.paradigms
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.paradigms.len()
    }

    /// Decodes form `form` of paradigm `paradigm`. `None` if either index is
    /// out of range.
    pub fn form(&self, paradigm: u16, form: u16) -> Option<FormAffixes<'_>> {
        let para = self.paradigms.get(paradigm as usize)?;
        let n = para.len() / 3;
        let form = form as usize;
        if form >= n {
            return None;
        }

        Some(FormAffixes {
            suffix: self.suffixes.get(para[form] as usize)?,
            tag: self.tags.get(para[form + n] as usize)?,
            prefix: self.prefixes.get(para[form + 2 * n] as usize)?,
        })
    }

    /// Rebuilds the normal form of `word`, taken to be form `form` of
    /// `paradigm`, by swapping that form's affixes for those of form 0.
    pub fn normal_form(&self, word: &str, paradigm: u16, form: u16) -> Option<String> {
        let affixes = self.form(paradigm, form)?;
        if form == 0 {
            return Some(word.to_string());
        }

        let stem = word.strip_prefix(affixes.prefix.as_str()).unwrap_or(word);
        let stem = stem.strip_suffix(affixes.suffix.as_str()).unwrap_or(stem);
        let normal = self.form(paradigm, 0)?;

        Some(format!("{}{}{}", normal.prefix, stem, normal.suffix))
    }
}
