//! vadd conformance probes.
//!
//! Each probe loads fixed operands, issues one add, and reports the lanes
//! it got next to the lanes the scalar golden reference produces for the
//! same operands. A probe never fails: mismatches are data in the report.

use rvv_scalar_ops::{scalar_vadd_vv_i32, scalar_vadd_vv_i32_m};
use serde::Serialize;

use crate::cpu_kernels::IsaLevel;
use crate::error::{BackendError, BackendResult};
use crate::traits::Kernels;
use crate::types::{MaskLayout, VInt32M1, VLMAX_E32M1};
use crate::validation::{validate_mask_len, validate_operands};

pub const PROBE_VL: usize = 4;
pub const PROBE_A: [i32; 4] = [1, 2, 3, 4];
pub const PROBE_B: [i32; 4] = [5, 6, 7, 8];
pub const PROBE_MASKEDOFF: [i32; 4] = [1, 1, 1, 1];
pub const PROBE_MASK_BYTES: [u8; 4] = [1, 0, 1, 0];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub name: &'static str,
    pub isa: IsaLevel,
    pub vl: usize,
    /// Full register as produced, including lanes past `vl`.
    pub lanes: VInt32M1,
    /// Golden lanes `< vl`.
    pub expected: Vec<i32>,
}

impl ProbeReport {
    /// Lanes `< vl` agree with the golden reference.
    pub fn matches(&self) -> bool {
        self.lanes.active(self.vl) == self.expected.as_slice()
    }
}

/// Validated unmasked add: `c[i] = a[i] + b[i]` for `i < vl`.
pub fn run_vadd<K: Kernels + ?Sized>(
    kernels: &K,
    a: &[i32],
    b: &[i32],
    vl: usize,
) -> BackendResult<VInt32M1> {
    validate_operands(vl, &[a.len(), b.len()]).map_err(BackendError::InvalidVl)?;
    let va = kernels.vle32(a, vl);
    let vb = kernels.vle32(b, vl);
    Ok(kernels.vadd_vv(&va, &vb, vl))
}

/// Validated masked add with one-byte-per-lane mask bytes.
pub fn run_vadd_masked<K: Kernels + ?Sized>(
    kernels: &K,
    mask_bytes: &[u8],
    maskedoff: &[i32],
    a: &[i32],
    b: &[i32],
    vl: usize,
) -> BackendResult<VInt32M1> {
    run_vadd_masked_with_layout(kernels, mask_bytes, MaskLayout::BytePerLane, maskedoff, a, b, vl)
}

/// Validated masked add with an explicit mask layout.
pub fn run_vadd_masked_with_layout<K: Kernels + ?Sized>(
    kernels: &K,
    mask: &[u8],
    layout: MaskLayout,
    maskedoff: &[i32],
    a: &[i32],
    b: &[i32],
    vl: usize,
) -> BackendResult<VInt32M1> {
    validate_operands(vl, &[maskedoff.len(), a.len(), b.len()]).map_err(BackendError::InvalidVl)?;
    validate_mask_len(mask.len(), vl, layout).map_err(BackendError::InvalidMask)?;
    let va = kernels.vle32(a, vl);
    let vb = kernels.vle32(b, vl);
    let voff = kernels.vle32(maskedoff, vl);
    let vm = kernels.vlm(mask, vl, layout);
    Ok(kernels.vadd_vv_m(&vm, &voff, &va, &vb, vl))
}

/// Unmasked probe: `[1,2,3,4] + [5,6,7,8]` at `vl = 4`.
pub fn vadd_probe<K: Kernels + ?Sized>(kernels: &K) -> ProbeReport {
    let va = kernels.vle32(&PROBE_A, PROBE_VL);
    let vb = kernels.vle32(&PROBE_B, PROBE_VL);
    let vc = kernels.vadd_vv(&va, &vb, PROBE_VL);

    let mut expected = [0i32; VLMAX_E32M1];
    // SAFETY: every operand holds PROBE_VL elements.
    unsafe {
        scalar_vadd_vv_i32(PROBE_A.as_ptr(), PROBE_B.as_ptr(), expected.as_mut_ptr(), PROBE_VL)
    };

    ProbeReport {
        name: "vadd_vv_i32m1",
        isa: kernels.isa(),
        vl: PROBE_VL,
        lanes: vc,
        expected: expected[..PROBE_VL].to_vec(),
    }
}

/// Masked probe: same operands, `maskedoff = [1,1,1,1]`, mask bytes `[1,0,1,0]`.
pub fn vadd_masked_probe<K: Kernels + ?Sized>(kernels: &K) -> ProbeReport {
    let va = kernels.vle32(&PROBE_A, PROBE_VL);
    let vb = kernels.vle32(&PROBE_B, PROBE_VL);
    let voff = kernels.vle32(&PROBE_MASKEDOFF, PROBE_VL);
    let vm = kernels.vlm(&PROBE_MASK_BYTES, PROBE_VL, MaskLayout::BytePerLane);
    let vc = kernels.vadd_vv_m(&vm, &voff, &va, &vb, PROBE_VL);

    let mut expected = [0i32; VLMAX_E32M1];
    // SAFETY: every operand holds PROBE_VL elements.
    unsafe {
        scalar_vadd_vv_i32_m(
            PROBE_MASK_BYTES.as_ptr(),
            PROBE_MASKEDOFF.as_ptr(),
            PROBE_A.as_ptr(),
            PROBE_B.as_ptr(),
            expected.as_mut_ptr(),
            PROBE_VL,
        )
    };

    ProbeReport {
        name: "vadd_vv_i32m1_m",
        isa: kernels.isa(),
        vl: PROBE_VL,
        lanes: vc,
        expected: expected[..PROBE_VL].to_vec(),
    }
}

/// Both probes, unmasked first.
pub fn run_all<K: Kernels + ?Sized>(kernels: &K) -> Vec<ProbeReport> {
    vec![vadd_probe(kernels), vadd_masked_probe(kernels)]
}
