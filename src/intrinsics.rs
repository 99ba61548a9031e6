//! RVV-named intrinsics over the `e32m1` register model.
//!
//! Memory ops (`vle32`, `vse32`, `vlm`) are plain lane copies. The adds
//! dispatch through [`CpuKernels::global`].
//!
//! All functions keep the intrinsic contract that `vl` is valid for the
//! operands. A `vl` above `VLMAX_E32M1` or past the end of a slice panics;
//! use [`crate::validation`] first when `vl` comes from outside.

use crate::cpu_kernels::CpuKernels;
use crate::traits::Kernels;
use crate::types::{MaskLayout, VBool32, VInt32M1, VLMAX_E32M1};

/// `vsetvl` for SEW=32, LMUL=1: the granted vector length for `avl`.
#[inline(always)]
pub fn vsetvl_e32m1(avl: usize) -> usize {
    avl.min(VLMAX_E32M1)
}

#[inline(always)]
pub fn vsetvlmax_e32m1() -> usize {
    VLMAX_E32M1
}

/// `vle32.v`: load `vl` lanes from `src`. Lanes `>= vl` are zero.
///
/// # Panics
/// If `vl > VLMAX_E32M1` or `vl > src.len()`.
#[inline]
pub fn vle32_v_i32m1(src: &[i32], vl: usize) -> VInt32M1 {
    assert!(vl <= VLMAX_E32M1, "vle32: vl {vl} exceeds VLMAX {VLMAX_E32M1}");
    let mut lanes = [0i32; VLMAX_E32M1];
    lanes[..vl].copy_from_slice(&src[..vl]);
    VInt32M1(lanes)
}

/// `vle32.v` from raw memory: `vl` native-endian 4-byte lanes, no alignment
/// requirement.
///
/// # Panics
/// If `vl > VLMAX_E32M1` or `src` holds fewer than `4 * vl` bytes.
pub fn vle32_v_i32m1_bytes(src: &[u8], vl: usize) -> VInt32M1 {
    assert!(vl <= VLMAX_E32M1, "vle32: vl {vl} exceeds VLMAX {VLMAX_E32M1}");
    let width = std::mem::size_of::<i32>();
    let mut lanes = [0i32; VLMAX_E32M1];
    for (lane, chunk) in lanes.iter_mut().zip(src[..vl * width].chunks_exact(width)) {
        *lane = bytemuck::pod_read_unaligned(chunk);
    }
    VInt32M1(lanes)
}

/// `vse32.v`: store lanes `< vl` into `dst`. Elements past `vl` are untouched.
///
/// # Panics
/// If `vl > VLMAX_E32M1` or `vl > dst.len()`.
#[inline]
pub fn vse32_v_i32m1(dst: &mut [i32], v: &VInt32M1, vl: usize) {
    assert!(vl <= VLMAX_E32M1, "vse32: vl {vl} exceeds VLMAX {VLMAX_E32M1}");
    dst[..vl].copy_from_slice(&v.0[..vl]);
}

/// `vlm.v` for `vbool32_t`, one byte per lane: lane `i` is active when bit 0
/// of `src[i]` is set. Lanes `>= vl` are inactive.
///
/// # Panics
/// If `vl > VLMAX_E32M1` or `vl > src.len()`.
#[inline]
pub fn vlm_v_b32(src: &[u8], vl: usize) -> VBool32 {
    vlm_v_b32_layout(src, vl, MaskLayout::BytePerLane)
}

/// `vlm.v` for `vbool32_t` in the architectural bit-packed format: lane `i`
/// is bit `i % 8` of `src[i / 8]`.
#[inline]
pub fn vlm_v_b32_packed(src: &[u8], vl: usize) -> VBool32 {
    vlm_v_b32_layout(src, vl, MaskLayout::BitPacked)
}

/// Mask load for an explicit [`MaskLayout`].
///
/// # Panics
/// If `vl > VLMAX_E32M1` or `src` is shorter than `layout.bytes_for(vl)`.
pub fn vlm_v_b32_layout(src: &[u8], vl: usize, layout: MaskLayout) -> VBool32 {
    assert!(vl <= VLMAX_E32M1, "vlm: vl {vl} exceeds VLMAX {VLMAX_E32M1}");
    let src = &src[..layout.bytes_for(vl)];
    let mut lanes = [false; VLMAX_E32M1];
    for (i, lane) in lanes.iter_mut().enumerate().take(vl) {
        *lane = match layout {
            MaskLayout::BytePerLane => src[i] & 1 != 0,
            MaskLayout::BitPacked => (src[i / 8] >> (i % 8)) & 1 != 0,
        };
    }
    VBool32(lanes)
}

/// `vadd.vv` on the process-wide kernels.
#[inline]
pub fn vadd_vv_i32m1(a: VInt32M1, b: VInt32M1, vl: usize) -> VInt32M1 {
    CpuKernels::global().vadd_vv(&a, &b, vl)
}

/// Masked `vadd.vv` (merge policy) on the process-wide kernels.
#[inline]
pub fn vadd_vv_i32m1_m(
    mask: VBool32,
    maskedoff: VInt32M1,
    a: VInt32M1,
    b: VInt32M1,
    vl: usize,
) -> VInt32M1 {
    CpuKernels::global().vadd_vv_m(&mask, &maskedoff, &a, &b, vl)
}
