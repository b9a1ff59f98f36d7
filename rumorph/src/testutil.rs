//! A tiny Russian dictionary shared by unit tests.

use std::path::Path;

use crate::analyzer::{MorphAnalyzer, Parse};
use crate::dictionary::{DictionaryBuilder, DictionaryData};

const CLASSES: [&str; 3] = ["", "по", "наи"];

pub(crate) fn fixture_builder() -> DictionaryBuilder {
    let mut b = DictionaryBuilder::new(&CLASSES);

    let cat_anim = b.add_paradigm(&[
        ("", "а", "NOUN,anim,femn sing,nomn"),
        ("", "е", "NOUN,anim,femn sing,datv"),
        ("", "ой", "NOUN,anim,femn sing,ablt"),
    ]);
    let cat_inan = b.add_paradigm(&[
        ("", "а", "NOUN,inan,femn sing,nomn"),
        ("", "е", "NOUN,inan,femn sing,datv"),
        ("", "ой", "NOUN,inan,femn sing,ablt"),
    ]);
    let kitten = b.add_paradigm(&[
        ("", "ок", "NOUN,anim,masc sing,nomn"),
        ("", "ка", "NOUN,anim,masc sing,gent"),
    ]);
    let adjective = b.add_paradigm(&[
        ("", "ый", "ADJF,Qual masc,sing,nomn"),
        ("", "ому", "ADJF,Qual masc,sing,datv"),
    ]);
    let look = b.add_paradigm(&[
        ("", "еть", "INFN,impf,tran"),
        ("", "и", "VERB,impf,tran sing,impr,excl"),
    ]);
    let person = b.add_paradigm(&[("", "", "NOUN,anim,masc sing,nomn")]);
    let mountain = b.add_paradigm(&[("", "а", "NOUN,inan,femn sing,nomn")]);
    let name = b.add_paradigm(&[
        ("", "", "NOUN,anim,masc,Name sing,nomn"),
        ("", "а", "NOUN,anim,masc,Name sing,gent"),
        ("", "а", "NOUN,anim,masc,Name sing,accs"),
    ]);
    let masc_inan = b.add_paradigm(&[
        ("", "", "NOUN,inan,masc sing,nomn"),
        ("", "", "NOUN,inan,masc sing,accs"),
    ]);
    let koda = b.add_paradigm(&[
        ("", "а", "NOUN,inan,femn sing,nomn"),
        ("", "", "NOUN,inan,femn plur,gent"),
    ]);
    let to_become = b.add_paradigm(&[
        ("", "ть", "INFN,perf,intr"),
        ("", "ли", "VERB,perf,intr plur,past,indc"),
    ]);
    let steel = b.add_paradigm(&[
        ("", "ь", "NOUN,inan,femn sing,nomn"),
        ("", "и", "NOUN,inan,femn sing,gent"),
    ]);
    let she = b.add_paradigm(&[
        ("", "она", "NPRO,femn,3per,Anph sing,nomn"),
        ("", "ей", "NPRO,femn,3per,Anph sing,datv"),
    ]);
    let impf_verb = b.add_paradigm(&[("", "ать", "INFN,impf,intr")]);
    let katya = b.add_paradigm(&[
        ("", "тя", "NOUN,anim,femn,Name sing,nomn"),
        ("", "ть", "NOUN,anim,femn,Name sing,voct,Infr"),
        ("", "ть", "NOUN,anim,femn,Name plur,gent"),
        ("", "ть", "NOUN,anim,femn,Name plur,accs"),
    ]);
    let perf_verb = b.add_paradigm(&[("", "ать", "INFN,perf,intr")]);

    b.add_word("кошка", cat_anim, 0)
        .add_word("кошка", cat_inan, 0)
        .add_word("кошке", cat_anim, 1)
        .add_word("кошке", cat_inan, 1)
        .add_word("кошкой", cat_anim, 2)
        .add_word("кошкой", cat_inan, 2)
        .add_word("котёнок", kitten, 0)
        .add_word("котёнка", kitten, 1)
        .add_word("западный", adjective, 0)
        .add_word("западному", adjective, 1)
        .add_word("чёрный", adjective, 0)
        .add_word("чёрному", adjective, 1)
        .add_word("смотреть", look, 0)
        .add_word("смотри", look, 1)
        .add_word("человек", person, 0)
        .add_word("гора", mountain, 0)
        .add_word("гора", name, 1)
        .add_word("гора", name, 2)
        .add_word("гор", name, 0)
        .add_word("магазин", masc_inan, 0)
        .add_word("магазин", masc_inan, 1)
        .add_word("код", masc_inan, 0)
        .add_word("код", masc_inan, 1)
        .add_word("код", koda, 1)
        .add_word("кода", koda, 0)
        .add_word("стать", to_become, 0)
        .add_word("стали", to_become, 1)
        .add_word("стали", steel, 1)
        .add_word("сталь", steel, 0)
        .add_word("она", she, 0)
        .add_word("ей", she, 1);

    b.add_probability("стали", "NOUN,inan,femn sing,gent", 0.7)
        .add_probability("стали", "VERB,perf,intr plur,past,indc", 0.3);

    b.add_prediction(0, "вкать", 1, impf_verb, 0)
        .add_prediction(0, "кать", 1, katya, 1)
        .add_prediction(0, "кать", 1, katya, 2)
        .add_prediction(0, "кать", 1, katya, 3)
        .add_prediction(0, "кать", 1, perf_verb, 0)
        .add_prediction(0, "она", 3, she, 0)
        .add_prediction(0, "на", 1, mountain, 0)
        .add_prediction(0, "код", 2, masc_inan, 0)
        .add_prediction(0, "од", 1, person, 0)
        .add_prediction(0, "рать", 1, impf_verb, 0)
        .add_prediction(1, "ать", 1, impf_verb, 0);

    b
}

pub(crate) fn fixture() -> DictionaryData {
    fixture_builder().build().unwrap()
}

pub(crate) fn analyzer() -> MorphAnalyzer {
    MorphAnalyzer::new(fixture())
}

pub(crate) fn write_fixture(dir: &Path) {
    fixture().write_to_dir(dir).unwrap();
}

pub(crate) fn triples(parses: &[Parse]) -> Vec<(&str, &str, &str)> {
    parses
        .iter()
        .map(|p| (p.word(), p.normal_form(), p.tag()))
        .collect()
}
