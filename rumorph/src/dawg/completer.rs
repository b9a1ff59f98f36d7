use super::{Dictionary, Guide};

/// Enumerates every key accepted below a start node, in ascending byte
/// order. Yields the key bytes spelled after the start node.
pub struct Completer<'a> {
    dict: &'a Dictionary,
    guide: &'a Guide,
    key: Vec<u8>,
    index_stack: Vec<u32>,
    last_index: Option<u32>,
}

impl<'a> Completer<'a> {
    pub fn new(dict: &'a Dictionary, guide: &'a Guide, index: u32) -> Completer<'a> {
        let index_stack = if guide.size() > 0 { vec![index] } else { vec![] };

        Completer {
            dict,
            guide,
            key: Vec::with_capacity(16),
            index_stack,
            last_index: None,
        }
    }

    fn follow(&mut self, label: u8, index: u32) -> Option<u32> {
        let next = self.dict.follow_char(label, index)?;
        self.key.push(label);
        self.index_stack.push(next);
        Some(next)
    }

    fn find_terminal(&mut self, mut index: u32) -> bool {
        while !self.dict.has_value(index) {
            let label = self.guide.child(index);
            if label == 0 {
                return false;
            }
            index = match self.follow(label, index) {
                Some(next) => next,
                None => return false,
            };
        }

        self.last_index = Some(index);
        true
    }

    fn advance(&mut self) -> bool {
        let mut index = match self.index_stack.last() {
            Some(&index) => index,
            None => return false,
        };

        if self.last_index.is_some() {
            let child = self.guide.child(index);
            if child != 0 {
                index = match self.follow(child, index) {
                    Some(next) => next,
                    None => return false,
                };
            } else {
                loop {
                    let sibling = self.guide.sibling(index);
                    self.key.pop();
                    self.index_stack.pop();

                    index = match self.index_stack.last() {
                        Some(&parent) => parent,
                        None => return false,
                    };

                    if sibling != 0 {
                        index = match self.follow(sibling, index) {
                            Some(next) => next,
                            None => return false,
                        };
                        break;
                    }
                }
            }
        }

        self.find_terminal(index)
    }
}

impl<'a> Iterator for Completer<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.advance() {
            Some(self.key.clone())
        } else {
            self.index_stack.clear();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dawg::builder::DawgBuilder;

    fn keys_below(words: &[&str], prefix: &str) -> Vec<String> {
        let mut builder = DawgBuilder::new();
        for word in words {
            builder.insert(word.as_bytes(), 0).unwrap();
        }
        let (dict, guide) = builder.build().unwrap();
        let index = dict.follow_bytes(prefix.as_bytes(), Dictionary::ROOT).unwrap();

        Completer::new(&dict, &guide, index)
            .map(|key| String::from_utf8(key).unwrap())
            .collect()
    }

    #[test]
    fn enumerates_in_byte_order() {
        let words = ["cat", "car", "ca", "dog", "cart"];
        assert_eq!(keys_below(&words, ""), vec!["ca", "car", "cart", "cat", "dog"]);
        assert_eq!(keys_below(&words, "car"), vec!["", "t"]);
        assert_eq!(keys_below(&words, "d"), vec!["og"]);
    }

    #[test]
    fn enumerates_multibyte_keys() {
        let words = ["всё", "все", "вс"];
        assert_eq!(keys_below(&words, "в"), vec!["с", "се", "сё"]);
    }

    #[test]
    fn empty_guide_yields_nothing() {
        let dict = Dictionary::default();
        let guide = Guide::default();
        assert_eq!(Completer::new(&dict, &guide, 0).count(), 0);
    }
}
