//! Approximate key lookup tolerating per-character spelling alternatives.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::Dictionary;

/// Letters that may stand for other letters in stored keys, e.g. a typed
/// `е` for a dictionary `ё`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharReplacements(HashMap<char, Vec<char>>);

impl CharReplacements {
    pub fn new() -> CharReplacements {
        CharReplacements(HashMap::new())
    }

    /// The Russian `е` → `ё` table.
    pub fn russian() -> CharReplacements {
        let mut table = CharReplacements::new();
        table.insert('е', vec!['ё']);
        table
    }

    pub fn insert(&mut self, from: char, to: Vec<char>) {
        self.0.insert(from, to);
    }

    #[inline(always)]
    pub fn get(&self, ch: char) -> Option<&[char]> {
        self.0.get(&ch).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A pending branch of the search: the node reached, how much of the query
/// it has consumed (in bytes) and the key spelled on the way there.
#[derive(Debug, Clone)]
struct SearchNode {
    index: u32,
    position: usize,
    key: String,
}

/// Finds every key that spells `query` up to the replacements, returning
/// each with the index of the node reached after it.
///
/// Branches are kept on an explicit stack. Alternatives are pushed before
/// the direct transition is taken, so with alternatives that sort after the
/// letter they replace, keys come out in ascending order.
pub fn similar_keys(
    dict: &Dictionary,
    query: &str,
    replacements: &CharReplacements,
) -> Vec<(String, u32)> {
    if replacements.is_empty() {
        return dict
            .follow_bytes(query.as_bytes(), Dictionary::ROOT)
            .map(|index| (query.to_string(), index))
            .into_iter()
            .collect();
    }

    let mut found = vec![];
    let mut stack = vec![SearchNode {
        index: Dictionary::ROOT,
        position: 0,
        key: String::with_capacity(query.len()),
    }];
    let mut buf = [0u8; 4];

    while let Some(SearchNode {
        mut index,
        position,
        mut key,
    }) = stack.pop()
    {
        let mut completed = true;

        for (offset, ch) in query[position..].char_indices() {
            if let Some(alternatives) = replacements.get(ch) {
                for &alt in alternatives.iter().rev() {
                    let bytes = alt.encode_utf8(&mut buf).as_bytes();
                    if let Some(next) = dict.follow_bytes(bytes, index) {
                        let mut alt_key = key.clone();
                        alt_key.push(alt);
                        stack.push(SearchNode {
                            index: next,
                            position: position + offset + ch.len_utf8(),
                            key: alt_key,
                        });
                    }
                }
            }

            match dict.follow_bytes(ch.encode_utf8(&mut buf).as_bytes(), index) {
                Some(next) => {
                    index = next;
                    key.push(ch);
                }
                None => {
                    completed = false;
                    break;
                }
            }
        }

        if completed {
            found.push((key, index));
        }
    }

    found
}
