//! Bit-level accessors for double-array units.
//!
//! A unit packs a label (bits 0-7), a "has leaf" flag (bit 8), an
//! "extension" flag (bit 9) and a child offset (bits 10-30). Leaf units
//! set bit 31 and keep their value in the remaining bits.

use crate::constants::{EXTENSION_BIT, HAS_LEAF_BIT, IS_LEAF_BIT};

pub type Unit = u32;

#[inline(always)]
pub fn has_leaf(unit: Unit) -> bool {
    unit & HAS_LEAF_BIT != 0
}

#[inline(always)]
pub fn value(unit: Unit) -> u32 {
    unit & !IS_LEAF_BIT
}

/// Label used for transition checks. Leaf units keep their high bit so they
/// never match a plain byte label.
#[inline(always)]
pub fn label(unit: Unit) -> u32 {
    unit & (IS_LEAF_BIT | 0xFF)
}

#[inline(always)]
pub fn offset(unit: Unit) -> u32 {
    (unit >> 10) << ((unit & EXTENSION_BIT) >> 6)
}

/// Encodes `offset` into unit bits, or `None` if it is not representable.
#[cfg(any(test, feature = "internal_build"))]
pub fn encode_offset(offset: u32) -> Option<Unit> {
    if offset < 1 << 21 {
        Some(offset << 10)
    } else if offset < 1 << 29 && offset & 0xFF == 0 {
        Some(((offset >> 8) << 10) | EXTENSION_BIT)
    } else {
        None
    }
}
