//! One analysis of a word form.
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// An analysis of a word form
pub struct Parse {
    /// the word form, with ё restored where the dictionary has it
    pub word: String,
    /// the normal (dictionary) form
    pub normal_form: String,
    /// the grammatical tag
    pub tag: SmolStr,
}

impl Parse {
    /// creates an analysis
    pub fn new(word: String, normal_form: String, tag: SmolStr) -> Parse {
        Parse {
            word,
            normal_form,
            tag,
        }
    }

    /// gets the word form
    pub fn word(&self) -> &str {
        &self.word
    }

    /// gets the normal form
    pub fn normal_form(&self) -> &str {
        &self.normal_form
    }

    /// gets the grammatical tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub(crate) fn with_prefix(self, prefix: &str) -> Parse {
        Parse {
            word: format!("{}{}", prefix, self.word),
            normal_form: format!("{}{}", prefix, self.normal_form),
            tag: self.tag,
        }
    }

    pub(crate) fn with_suffix(mut self, suffix: &str) -> Parse {
        self.word.push_str(suffix);
        self.normal_form.push_str(suffix);
        self
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.word, self.normal_form, self.tag)
    }
}

/// Splits analyses into aligned word, normal form and tag columns.
pub fn into_columns(parses: Vec<Parse>) -> (Vec<String>, Vec<String>, Vec<String>) {
    parses
        .into_iter()
        .map(|p| (p.word, p.normal_form, p.tag.to_string()))
        .multiunzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(word: &str, normal_form: &str, tag: &str) -> Parse {
        Parse::new(word.into(), normal_form.into(), tag.into())
    }

    #[test]
    fn affixes_apply_to_word_and_normal_form() {
        let p = parse("кошке", "кошка", "NOUN,inan,femn sing,datv");
        assert_eq!(
            p.clone().with_prefix("псевдо"),
            parse("псевдокошке", "псевдокошка", "NOUN,inan,femn sing,datv")
        );
        assert_eq!(
            p.with_suffix("-то"),
            parse("кошке-то", "кошка-то", "NOUN,inan,femn sing,datv")
        );
    }

    #[test]
    fn columns_stay_aligned() {
        let (words, norms, tags) = into_columns(vec![
            parse("стали", "сталь", "NOUN,inan,femn sing,gent"),
            parse("стали", "стать", "VERB,perf,intr plur,past,indc"),
        ]);
        assert_eq!(words, vec!["стали", "стали"]);
        assert_eq!(norms, vec!["сталь", "стать"]);
        assert_eq!(tags, vec!["NOUN,inan,femn sing,gent", "VERB,perf,intr plur,past,indc"]);
    }

    #[test]
    fn displays_tab_separated() {
        let p = parse("ей", "она", "NPRO,femn,3per,Anph sing,datv");
        assert_eq!(p.to_string(), "ей\tона\tNPRO,femn,3per,Anph sing,datv");
    }

    #[test]
    fn serializes_as_named_fields() {
        let p = parse("кот", "кот", "NOUN");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"word":"кот","normal_form":"кот","tag":"NOUN"}"#);
    }
}
