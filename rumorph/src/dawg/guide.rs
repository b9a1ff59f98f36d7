use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::DawgError;

/// Per-unit first-child and next-sibling labels, used to enumerate
/// completions in byte order.
#[derive(Debug, Clone, Default)]
pub struct Guide {
    units: Vec<u8>,
}

impl Guide {
    pub fn from_labels(labels: Vec<(u8, u8)>) -> Guide {
        let units = labels
            .into_iter()
            .flat_map(|(child, sibling)| [child, sibling])
            .collect();
        Guide { units }
    }

    pub fn read(cursor: &mut Cursor<&[u8]>) -> Result<Guide, DawgError> {
        let size = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| DawgError::Truncated("guide size"))? as usize;

        let remaining = cursor.get_ref().len().saturating_sub(cursor.position() as usize);
        if size.saturating_mul(2) > remaining {
            return Err(DawgError::Truncated("guide units"));
        }

        let mut units = vec![0; size.saturating_mul(2)];
        cursor
            .read_exact(&mut units)
            .map_err(|_| DawgError::Truncated("guide units"))?;

        Ok(Guide { units })
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), DawgError> {
        writer.write_u32::<LittleEndian>(self.size() as u32)?;
        writer.write_all(&self.units)?;
        Ok(())
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.units.len() / 2
    }

    #[inline(always)]
    pub fn child(&self, index: u32) -> u8 {
        self.units.get(index as usize * 2).copied().unwrap_or(0)
    }

    #[inline(always)]
    pub fn sibling(&self, index: u32) -> u8 {
        self.units.get(index as usize * 2 + 1).copied().unwrap_or(0)
    }
}
