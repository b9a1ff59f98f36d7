//! Builds automata in the on-disk layout the readers in this module accept.
//!
//! The builder lays out a plain trie as a double array; it does not merge
//! common suffixes, which only affects size.

use std::collections::{BTreeMap, VecDeque};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hashbrown::HashSet;

use super::units::encode_offset;
use super::{DawgError, Dictionary, Guide, IntDawg, Record, RecordDawg};
use crate::constants::{HAS_LEAF_BIT, IS_LEAF_BIT, PAYLOAD_SEPARATOR};

const MAX_SLOTS: u32 = 1 << 29;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<u8, usize>,
    value: Option<u32>,
}

#[derive(Debug, Default)]
pub struct DawgBuilder {
    entries: BTreeMap<Vec<u8>, u32>,
}

impl DawgBuilder {
    pub fn new() -> DawgBuilder {
        DawgBuilder::default()
    }

    /// Adds `key`, replacing the value of an earlier insert of the same key.
    pub fn insert(&mut self, key: &[u8], value: u32) -> Result<(), DawgError> {
        if key.contains(&0) {
            return Err(DawgError::InvalidKey(String::from_utf8_lossy(key).into_owned()));
        }
        if value & IS_LEAF_BIT != 0 {
            return Err(DawgError::ValueTooLarge(value));
        }
        self.entries.insert(key.to_vec(), value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn trie(&self) -> Vec<TrieNode> {
        let mut nodes = vec![TrieNode::default()];

        for (key, &value) in &self.entries {
            let mut current = 0;
            for &label in key {
                current = match nodes[current].children.get(&label) {
                    Some(&next) => next,
                    None => {
                        let next = nodes.len();
                        nodes.push(TrieNode::default());
                        nodes[current].children.insert(label, next);
                        next
                    }
                };
            }
            nodes[current].value = Some(value);
        }

        nodes
    }

    pub fn build(self) -> Result<(Dictionary, Guide), DawgError> {
        let trie = self.trie();
        let mut layout = Layout::default();
        layout.mark(0);

        let mut queue = VecDeque::new();
        queue.push_back((0usize, 0u32));

        while let Some((id, slot)) = queue.pop_front() {
            let node = &trie[id];
            let labels: Vec<u8> = node
                .value
                .iter()
                .map(|_| 0)
                .chain(node.children.keys().copied())
                .collect();

            if labels.is_empty() {
                continue;
            }

            let base = layout.find_base(&labels, slot)?;
            let offset_bits = encode_offset(slot ^ base).ok_or(DawgError::Layout)?;
            layout.used_bases.insert(base);
            layout.units[slot as usize] |= offset_bits;

            if let Some(value) = node.value {
                layout.units[slot as usize] |= HAS_LEAF_BIT;
                layout.mark(base);
                layout.units[base as usize] = value | IS_LEAF_BIT;
            }

            let child_labels: Vec<u8> = node.children.keys().copied().collect();
            layout.guide[slot as usize].0 = child_labels.first().copied().unwrap_or(0);

            for (i, (&label, &child)) in node.children.iter().enumerate() {
                let child_slot = base ^ u32::from(label);
                layout.mark(child_slot);
                layout.units[child_slot as usize] = u32::from(label);
                layout.guide[child_slot as usize].1 = child_labels.get(i + 1).copied().unwrap_or(0);
                queue.push_back((child, child_slot));
            }
        }

        Ok((
            Dictionary::from_units(layout.units),
            Guide::from_labels(layout.guide),
        ))
    }
}

#[derive(Debug, Default)]
struct Layout {
    units: Vec<u32>,
    guide: Vec<(u8, u8)>,
    used: Vec<bool>,
    used_bases: HashSet<u32>,
    first_free: u32,
}

impl Layout {
    fn is_used(&self, slot: u32) -> bool {
        self.used.get(slot as usize).copied().unwrap_or(false)
    }

    fn mark(&mut self, slot: u32) {
        let len = slot as usize + 1;
        if self.units.len() < len {
            self.units.resize(len, 0);
            self.guide.resize(len, (0, 0));
            self.used.resize(len, false);
        }
        self.used[slot as usize] = true;

        while self.is_used(self.first_free) {
            self.first_free += 1;
        }
    }

    // Each base belongs to a single parent, so a label found at `base ^ l`
    // can only be a child of that parent.
    fn find_base(&self, labels: &[u8], slot: u32) -> Result<u32, DawgError> {
        let first = u32::from(labels[0]);

        for candidate in self.first_free..MAX_SLOTS {
            if self.is_used(candidate) {
                continue;
            }

            let base = candidate ^ first;
            if self.used_bases.contains(&base) || encode_offset(slot ^ base).is_none() {
                continue;
            }

            if labels.iter().all(|&l| !self.is_used(base ^ u32::from(l))) {
                return Ok(base);
            }
        }

        Err(DawgError::Layout)
    }
}

fn record_key<R: Record>(key: &str, record: &R) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(key.len() + 12);
    bytes.extend_from_slice(key.as_bytes());
    bytes.push(PAYLOAD_SEPARATOR);
    bytes.extend_from_slice(STANDARD.encode(record.to_bytes()).as_bytes());
    bytes
}

/// Builds a record automaton from `(key, record)` pairs. A key may appear
/// with several records.
pub fn build_record_dawg<R, K, I>(items: I) -> Result<RecordDawg<R>, DawgError>
where
    R: Record,
    K: AsRef<str>,
    I: IntoIterator<Item = (K, R)>,
{
    let mut builder = DawgBuilder::new();
    for (key, record) in items {
        builder.insert(&record_key(key.as_ref(), &record), 0)?;
    }
    let (dict, guide) = builder.build()?;
    Ok(RecordDawg::new(dict, guide))
}

pub fn build_int_dawg<K, I>(items: I) -> Result<IntDawg, DawgError>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, u32)>,
{
    let mut builder = DawgBuilder::new();
    for (key, value) in items {
        builder.insert(key.as_ref().as_bytes(), value)?;
    }
    let (dict, _) = builder.build()?;
    Ok(IntDawg::new(dict))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_inserted_key_is_found() {
        let words = ["a", "ab", "abc", "b", "ba", "кот", "кошка", "кошки", "ёж"];
        let mut builder = DawgBuilder::new();
        for (i, w) in words.iter().enumerate() {
            builder.insert(w.as_bytes(), i as u32 * 1000).unwrap();
        }
        assert_eq!(builder.len(), words.len());

        let (dict, guide) = builder.build().unwrap();
        assert_eq!(guide.size(), dict.len());
        for (i, w) in words.iter().enumerate() {
            assert_eq!(dict.find(w.as_bytes()), Some(i as u32 * 1000), "{}", w);
        }
        for w in ["", "abcd", "к", "кош", "кошкаа", "ж"] {
            assert_eq!(dict.find(w.as_bytes()), None, "{}", w);
        }
    }

    #[test]
    fn rejects_reserved_bytes_and_values() {
        let mut builder = DawgBuilder::new();
        assert!(matches!(
            builder.insert(b"a\0b", 1),
            Err(DawgError::InvalidKey(_))
        ));
        assert!(matches!(
            builder.insert(b"ab", IS_LEAF_BIT),
            Err(DawgError::ValueTooLarge(_))
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn empty_builder_yields_an_empty_automaton() {
        let (dict, _) = DawgBuilder::new().build().unwrap();
        assert_eq!(dict.find(b""), None);
        assert_eq!(dict.find(b"a"), None);
    }

    #[test]
    fn later_insert_replaces_value() {
        let mut builder = DawgBuilder::new();
        builder.insert(b"key", 1).unwrap();
        builder.insert(b"key", 2).unwrap();
        let (dict, _) = builder.build().unwrap();
        assert_eq!(dict.find(b"key"), Some(2));
    }
}
