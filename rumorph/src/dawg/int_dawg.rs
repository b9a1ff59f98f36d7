use std::io::{Cursor, Write};
use std::path::Path;

use super::{map_file, DawgError, Dictionary};

/// An automaton with an integer value on every key. Any guide following
/// the dictionary in the file is ignored.
#[derive(Debug, Clone, Default)]
pub struct IntDawg {
    dict: Dictionary,
}

impl IntDawg {
    pub fn new(dict: Dictionary) -> IntDawg {
        IntDawg { dict }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<IntDawg, DawgError> {
        let dict = Dictionary::read(&mut Cursor::new(bytes))?;
        Ok(IntDawg { dict })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<IntDawg, DawgError> {
        match map_file(path)? {
            Some(mmap) => Self::from_bytes(&mmap),
            None => Self::from_bytes(&[]),
        }
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), DawgError> {
        self.dict.write_to(writer)
    }

    pub fn find(&self, key: &str) -> Option<u32> {
        self.dict.find(key.as_bytes())
    }

    /// Value for `key`, or 0 when the key is absent.
    #[inline]
    pub fn exact_value(&self, key: &str) -> u32 {
        self.find(key).unwrap_or(0)
    }
}
