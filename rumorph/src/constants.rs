/// Separates a key from its base64-encoded record in record automata.
pub const PAYLOAD_SEPARATOR: u8 = 0x01;

pub const IS_LEAF_BIT: u32 = 1 << 31;
pub const HAS_LEAF_BIT: u32 = 1 << 8;
pub const EXTENSION_BIT: u32 = 1 << 9;

/// Probability weights are stored as `p(tag | word) * PROBABILITY_SCALE`.
#[cfg(any(test, feature = "internal_build"))]
pub const PROBABILITY_SCALE: u32 = 1_000_000;

pub const TAGS_FILE: &str = "gramtab-opencorpora-int.json";
pub const PREFIXES_FILE: &str = "paradigm-prefixes.json";
pub const SUFFIXES_FILE: &str = "suffixes.json";
pub const PARADIGMS_FILE: &str = "paradigms.array";
pub const WORDS_FILE: &str = "words.dawg";
pub const PROBABILITIES_FILE: &str = "p_t_given_w.intdawg";

/// Paradigm prefix classes used when the dictionary ships no prefix list.
pub const DEFAULT_PARADIGM_PREFIXES: [&str; 3] = ["", "по", "наи"];

pub fn prediction_file_name(class: usize) -> String {
    format!("prediction-suffixes-{}.dawg", class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_file_names() {
        assert_eq!(prediction_file_name(0), "prediction-suffixes-0.dawg");
        assert_eq!(prediction_file_name(2), "prediction-suffixes-2.dawg");
    }

    #[test]
    fn unit_bits_do_not_overlap() {
        assert_eq!(IS_LEAF_BIT & (HAS_LEAF_BIT | EXTENSION_BIT | 0xFF), 0);
        assert_eq!(HAS_LEAF_BIT & EXTENSION_BIT, 0);
    }
}
