use std::fmt;
use std::io::{Cursor, Write};
use std::marker::PhantomData;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use byteorder::{BigEndian, ByteOrder};

use super::similar::{similar_keys, CharReplacements};
use super::{map_file, Completer, DawgError, Dictionary, Guide};
use crate::constants::PAYLOAD_SEPARATOR;

/// A fixed-width big-endian record stored under a key.
pub trait Record: Sized + Copy + fmt::Debug {
    const WIDTH: usize;

    fn from_bytes(bytes: &[u8]) -> Option<Self>;
    fn to_bytes(&self) -> Vec<u8>;
}

/// Where a dictionary word sits in its paradigm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WordRecord {
    pub paradigm: u16,
    pub form: u16,
}

/// A paradigm form predicted for a word ending, with the number of
/// dictionary words backing the prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PredictionRecord {
    pub count: u16,
    pub paradigm: u16,
    pub form: u16,
}

impl Record for WordRecord {
    const WIDTH: usize = 4;

    fn from_bytes(bytes: &[u8]) -> Option<WordRecord> {
        if bytes.len() != Self::WIDTH {
            return None;
        }
        Some(WordRecord {
            paradigm: BigEndian::read_u16(&bytes[0..2]),
            form: BigEndian::read_u16(&bytes[2..4]),
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0; Self::WIDTH];
        BigEndian::write_u16(&mut buf[0..2], self.paradigm);
        BigEndian::write_u16(&mut buf[2..4], self.form);
        buf
    }
}

impl Record for PredictionRecord {
    const WIDTH: usize = 6;

    fn from_bytes(bytes: &[u8]) -> Option<PredictionRecord> {
        if bytes.len() != Self::WIDTH {
            return None;
        }
        Some(PredictionRecord {
            count: BigEndian::read_u16(&bytes[0..2]),
            paradigm: BigEndian::read_u16(&bytes[2..4]),
            form: BigEndian::read_u16(&bytes[4..6]),
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0; Self::WIDTH];
        BigEndian::write_u16(&mut buf[0..2], self.count);
        BigEndian::write_u16(&mut buf[2..4], self.paradigm);
        BigEndian::write_u16(&mut buf[4..6], self.form);
        buf
    }
}

/// An automaton mapping text keys to lists of records.
pub struct RecordDawg<R: Record> {
    dict: Dictionary,
    guide: Guide,
    _record: PhantomData<R>,
}

impl<R: Record> fmt::Debug for RecordDawg<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RecordDawg {{ units: {}, width: {} }}", self.dict.len(), R::WIDTH)
    }
}

impl<R: Record> RecordDawg<R> {
    pub fn new(dict: Dictionary, guide: Guide) -> RecordDawg<R> {
        RecordDawg {
            dict,
            guide,
            _record: PhantomData,
        }
    }

    /// Parses a dictionary followed by its guide.
    pub fn from_bytes(bytes: &[u8]) -> Result<RecordDawg<R>, DawgError> {
        let mut cursor = Cursor::new(bytes);
        let dict = Dictionary::read(&mut cursor)?;
        let guide = Guide::read(&mut cursor)?;
        Ok(RecordDawg::new(dict, guide))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<RecordDawg<R>, DawgError> {
        match map_file(path)? {
            Some(mmap) => Self::from_bytes(&mmap),
            None => Self::from_bytes(&[]),
        }
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), DawgError> {
        self.dict.write_to(writer)?;
        self.guide.write_to(writer)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.dict
            .follow_bytes(key.as_bytes(), Dictionary::ROOT)
            .and_then(|index| self.dict.follow_char(PAYLOAD_SEPARATOR, index))
            .is_some()
    }

    /// Records stored under exactly `key`.
    pub fn get(&self, key: &str) -> Vec<R> {
        self.dict
            .follow_bytes(key.as_bytes(), Dictionary::ROOT)
            .and_then(|index| self.dict.follow_char(PAYLOAD_SEPARATOR, index))
            .map(|index| self.records_at(index))
            .unwrap_or_default()
    }

    /// Keys matching `query` up to `replacements`, in ascending key order,
    /// each with its records.
    pub fn similar_items(
        &self,
        query: &str,
        replacements: &CharReplacements,
    ) -> Vec<(String, Vec<R>)> {
        similar_keys(&self.dict, query, replacements)
            .into_iter()
            .filter_map(|(key, index)| {
                let index = self.dict.follow_char(PAYLOAD_SEPARATOR, index)?;
                Some((key, self.records_at(index)))
            })
            .collect()
    }

    fn records_at(&self, index: u32) -> Vec<R> {
        Completer::new(&self.dict, &self.guide, index)
            .filter_map(|mut encoded| {
                while encoded.last() == Some(&b'\n') {
                    encoded.pop();
                }

                let record = STANDARD
                    .decode(&encoded)
                    .ok()
                    .and_then(|bytes| R::from_bytes(&bytes));

                if record.is_none() {
                    log::warn!(
                        "Skipping malformed record {:?}",
                        String::from_utf8_lossy(&encoded)
                    );
                }
                record
            })
            .collect()
    }
}
