/// Closed word classes that word formation never extends.
const NON_PRODUCTIVE: [&str; 8] = [
    "NUMR", "NPRO", "PRED", "PREP", "CONJ", "PRCL", "INTJ", "Apro",
];

/// Whether a guessed word may carry `tag`.
pub fn is_productive(tag: &str) -> bool {
    !NON_PRODUCTIVE.iter().any(|g| tag.contains(g))
}

fn agreement_grammeme(grammeme: &str) -> &str {
    match grammeme {
        "loc1" => "loct",
        "gen1" => "gent",
        // parts of speech
        "NOUN" | "ADJF" | "ADJS" | "COMP" | "VERB" | "INFN" | "PRTF" | "PRTS" | "GRND" | "NUMR"
        | "ADVB" | "NPRO" | "PRED" | "PREP" | "CONJ" | "PRCL" | "INTJ"
        // number
        | "sing" | "plur"
        // case
        | "nomn" | "gent" | "datv" | "accs" | "ablt" | "loct" | "voct" | "gen2" | "acc2" | "loc2"
        // person
        | "1per" | "2per" | "3per"
        // tense
        | "pres" | "past" | "futr" => grammeme,
        _ => "",
    }
}

/// Reduces a tag to the grammemes two halves of a compound must agree on.
/// Other grammemes are blanked in place, keeping the separators.
pub fn similarity_features(tag: &str) -> String {
    let mut features = String::with_capacity(tag.len());
    let mut rest = tag;

    while let Some(pos) = rest.find(|c: char| c == ' ' || c == ',') {
        features.push_str(agreement_grammeme(&rest[..pos]));
        features.push_str(&rest[pos..pos + 1]);
        rest = &rest[pos + 1..];
    }
    features.push_str(agreement_grammeme(rest));

    features
}
