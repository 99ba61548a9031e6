//! Register and mask value types for the `e32m1` vector configuration.
//!
//! The model is a 128-bit VLEN machine: with SEW=32 and LMUL=1 a register
//! holds four `i32` lanes, and the matching mask type (`vbool32_t`) holds
//! one bit per lane.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Vector register width in bits.
pub const VLEN_BITS: usize = 128;

/// Selected element width in bits.
pub const SEW_E32: usize = 32;

/// Maximum lanes for SEW=32, LMUL=1.
pub const VLMAX_E32M1: usize = VLEN_BITS / SEW_E32;

/// A `vint32m1_t` value: four signed 32-bit lanes.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize)]
pub struct VInt32M1(pub [i32; VLMAX_E32M1]);

impl VInt32M1 {
    pub const ZERO: Self = Self([0; VLMAX_E32M1]);

    #[inline(always)]
    pub fn splat(v: i32) -> Self {
        Self([v; VLMAX_E32M1])
    }

    #[inline(always)]
    pub fn lanes(&self) -> &[i32; VLMAX_E32M1] {
        &self.0
    }

    /// The first `vl` lanes. `vl` is clamped to `VLMAX_E32M1`.
    #[inline]
    pub fn active(&self, vl: usize) -> &[i32] {
        &self.0[..vl.min(VLMAX_E32M1)]
    }

    /// Raw register contents, little-endian on every supported host.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<[i32; VLMAX_E32M1]> for VInt32M1 {
    fn from(lanes: [i32; VLMAX_E32M1]) -> Self {
        Self(lanes)
    }
}

/// A `vbool32_t` value: one active/inactive flag per `e32m1` lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct VBool32(pub [bool; VLMAX_E32M1]);

impl VBool32 {
    pub const NONE: Self = Self([false; VLMAX_E32M1]);

    /// Mask with the first `vl` lanes active.
    #[inline]
    pub fn first(vl: usize) -> Self {
        let mut lanes = [false; VLMAX_E32M1];
        for lane in lanes.iter_mut().take(vl) {
            *lane = true;
        }
        Self(lanes)
    }

    /// Mask from up to `VLMAX_E32M1` leading flags; missing lanes are inactive.
    #[inline]
    pub fn from_lanes(src: &[bool]) -> Self {
        let mut lanes = [false; VLMAX_E32M1];
        for (lane, &m) in lanes.iter_mut().zip(src) {
            *lane = m;
        }
        Self(lanes)
    }

    #[inline(always)]
    pub fn is_active(&self, lane: usize) -> bool {
        self.0.get(lane).copied().unwrap_or(false)
    }

    pub fn count_active(&self) -> usize {
        self.0.iter().filter(|&&m| m).count()
    }

    /// Lane-select vector: `-1` for active lanes, `0` otherwise.
    #[inline(always)]
    pub(crate) fn to_select_bits(self) -> [i32; VLMAX_E32M1] {
        self.0.map(|m| if m { -1 } else { 0 })
    }

    #[inline(always)]
    pub(crate) fn and(self, other: Self) -> Self {
        let mut lanes = self.0;
        for (l, o) in lanes.iter_mut().zip(other.0) {
            *l &= o;
        }
        Self(lanes)
    }
}

impl From<[bool; VLMAX_E32M1]> for VBool32 {
    fn from(lanes: [bool; VLMAX_E32M1]) -> Self {
        Self(lanes)
    }
}

/// In-memory encoding of a mask operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskLayout {
    /// One byte per lane; only bit 0 of each byte is significant.
    #[default]
    BytePerLane,
    /// One bit per lane, lane `i` at bit `i % 8` of byte `i / 8` (`vlm.v`).
    BitPacked,
}

impl MaskLayout {
    /// Bytes needed to hold `vl` lanes.
    #[inline]
    pub fn bytes_for(self, vl: usize) -> usize {
        match self {
            MaskLayout::BytePerLane => vl,
            MaskLayout::BitPacked => vl.div_ceil(8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vlmax_is_four_lanes() {
        assert_eq!(VLMAX_E32M1, 4);
        assert_eq!(std::mem::size_of::<VInt32M1>() * 8, VLEN_BITS);
    }

    #[test]
    fn register_bytes_are_little_endian_lanes() {
        let v = VInt32M1([1, 2, 3, 4]);
        let bytes = v.as_bytes();
        assert_eq!(bytes.len(), 16);
        if cfg!(target_endian = "little") {
            assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
        }
    }

    #[test]
    fn first_mask_activates_leading_lanes() {
        assert_eq!(VBool32::first(0), VBool32::NONE);
        assert_eq!(VBool32::first(2).0, [true, true, false, false]);
        assert_eq!(VBool32::first(9).count_active(), 4);
    }

    #[test]
    fn select_bits_are_all_ones_or_zero() {
        let m = VBool32([true, false, true, false]);
        assert_eq!(m.to_select_bits(), [-1, 0, -1, 0]);
        assert!(!m.is_active(7));
    }

    #[test]
    fn mask_layout_sizes() {
        assert_eq!(MaskLayout::BytePerLane.bytes_for(4), 4);
        assert_eq!(MaskLayout::BitPacked.bytes_for(4), 1);
        assert_eq!(MaskLayout::BitPacked.bytes_for(9), 2);
        assert_eq!(MaskLayout::BitPacked.bytes_for(0), 0);
    }
}
