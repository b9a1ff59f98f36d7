use std::io::{Cursor, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::units::{self, Unit};
use super::DawgError;

/// The double-array of a DAWG: transitions and the values of accepting
/// nodes.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    units: Vec<Unit>,
}

impl Dictionary {
    pub const ROOT: u32 = 0;

    pub fn from_units(units: Vec<Unit>) -> Dictionary {
        Dictionary { units }
    }

    /// Reads a little-endian unit count followed by that many units.
    pub fn read(cursor: &mut Cursor<&[u8]>) -> Result<Dictionary, DawgError> {
        let size = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| DawgError::Truncated("dictionary size"))? as usize;

        let remaining = cursor.get_ref().len().saturating_sub(cursor.position() as usize);
        if size.saturating_mul(4) > remaining {
            return Err(DawgError::Truncated("dictionary units"));
        }

        let mut units = vec![0; size];
        cursor
            .read_u32_into::<LittleEndian>(&mut units)
            .map_err(|_| DawgError::Truncated("dictionary units"))?;

        Ok(Dictionary { units })
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), DawgError> {
        writer.write_u32::<LittleEndian>(self.units.len() as u32)?;
        for &unit in &self.units {
            writer.write_u32::<LittleEndian>(unit)?;
        }
        Ok(())
    }

    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline(always)]
    fn unit(&self, index: u32) -> Option<Unit> {
        self.units.get(index as usize).copied()
    }

    #[inline(always)]
    pub fn has_value(&self, index: u32) -> bool {
        self.unit(index).map(units::has_leaf).unwrap_or(false)
    }

    #[inline(always)]
    pub fn value(&self, index: u32) -> Option<u32> {
        let unit = self.unit(index)?;
        self.unit(index ^ units::offset(unit)).map(units::value)
    }

    /// Follows the transition labelled `label` from `index`.
    #[inline(always)]
    pub fn follow_char(&self, label: u8, index: u32) -> Option<u32> {
        let unit = self.unit(index)?;
        let next = index ^ units::offset(unit) ^ u32::from(label);
        match self.unit(next) {
            Some(target) if units::label(target) == u32::from(label) => Some(next),
            _ => None,
        }
    }

    pub fn follow_bytes(&self, bytes: &[u8], index: u32) -> Option<u32> {
        bytes
            .iter()
            .try_fold(index, |index, &label| self.follow_char(label, index))
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.follow_bytes(key, Self::ROOT)
            .map(|index| self.has_value(index))
            .unwrap_or(false)
    }

    /// Value stored for `key`, if the key is accepted.
    pub fn find(&self, key: &[u8]) -> Option<u32> {
        let index = self.follow_bytes(key, Self::ROOT)?;
        if !self.has_value(index) {
            return None;
        }
        self.value(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HAS_LEAF_BIT, IS_LEAF_BIT};

    // Hand-laid automaton accepting "a" => 7 and "ab" => 9.
    //
    // root(0): offset 2, children at 2 ^ label
    // "a" at 2 ^ 0x61 = 0x63: offset 0x63 ^ 0x70 = 0x13, has leaf
    // leaf for "a" at 0x70
    // "ab" at 0x70 ^ 0x62 = 0x12: offset 0x12 ^ 0x80 = 0x92, has leaf
    // leaf for "ab" at 0x80
    fn sample() -> Dictionary {
        let mut units = vec![0u32; 0x100];
        units[0] = 2 << 10;
        units[0x63] = 0x61 | HAS_LEAF_BIT | (0x13 << 10);
        units[0x70] = 7 | IS_LEAF_BIT;
        units[0x12] = 0x62 | HAS_LEAF_BIT | (0x92 << 10);
        units[0x80] = 9 | IS_LEAF_BIT;
        Dictionary::from_units(units)
    }

    #[test]
    fn finds_values_of_accepted_keys() {
        let dict = sample();
        assert_eq!(dict.find(b"a"), Some(7));
        assert_eq!(dict.find(b"ab"), Some(9));
        assert_eq!(dict.find(b"b"), None);
        assert_eq!(dict.find(b"abc"), None);
        assert!(dict.contains(b"a"));
        assert!(!dict.contains(b""));
    }

    #[test]
    fn serialized_units_read_back() {
        let dict = sample();
        let mut buf = vec![];
        dict.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), 4 + 4 * dict.len());

        let read = Dictionary::read(&mut Cursor::new(&buf[..])).unwrap();
        assert_eq!(read.find(b"ab"), Some(9));
    }

    #[test]
    fn truncated_input_is_an_error() {
        let mut buf = vec![];
        sample().write_to(&mut buf).unwrap();
        buf.truncate(buf.len() - 1);

        let err = Dictionary::read(&mut Cursor::new(&buf[..])).unwrap_err();
        assert!(matches!(err, DawgError::Truncated(_)));
        assert!(Dictionary::read(&mut Cursor::new(&[1u8, 0][..])).is_err());
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let dict = sample();
        assert_eq!(dict.follow_char(b'a', 10_000), None);
        assert!(!dict.has_value(10_000));
        assert_eq!(dict.value(10_000), None);
    }
}
