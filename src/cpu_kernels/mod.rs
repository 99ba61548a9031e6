//! # CPU Kernel Dispatch
//!
//! Register-level vadd operators are generated per ISA by the macro stack
//! (`simd_primitive!` -> `define_vadd_ops!` -> `expand_isa_impls!`):
//!
//! | Module | ISA | Lanes per step |
//! |---|---|---|
//! | `scalar::scalar_i32` | portable fallback | 1 |
//! | `sse2::sse2_i32` | x86_64 SSE2 | 4 |
//! | `neon::neon_i32` | aarch64 NEON | 4 |
//!
//! `CpuKernels` picks one of them at construction and exposes it through
//! the [`Kernels`] trait. Slice kernels strip-mine with `vsetvl_e32m1` and
//! fan out over rayon above [`PAR_THRESHOLD`] elements.

pub mod neon;
pub mod scalar;
pub mod sse2;

use crate::error::{BackendError, BackendResult};
use crate::intrinsics::{vle32_v_i32m1, vse32_v_i32m1, vsetvl_e32m1};
use crate::traits::Kernels;
use crate::types::{VBool32, VInt32M1, VLMAX_E32M1};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Slices at least this long are split across the rayon pool.
pub const PAR_THRESHOLD: usize = 1 << 16;

/// Elements per rayon task. Multiple of `VLMAX_E32M1`.
pub const PAR_CHUNK: usize = 1 << 12;

const _: () = assert!(PAR_CHUNK % VLMAX_E32M1 == 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IsaLevel {
    Scalar,
    Sse2,
    Neon,
}

impl IsaLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Sse2 => "sse2",
            Self::Neon => "neon",
        }
    }

    /// Whether this ISA can run on the current host.
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Scalar => true,
            #[cfg(target_arch = "x86_64")]
            Self::Sse2 => is_x86_feature_detected!("sse2"),
            #[cfg(target_arch = "aarch64")]
            Self::Neon => true,
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }
}

impl fmt::Display for IsaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IsaLevel {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("scalar") {
            Ok(Self::Scalar)
        } else if s.eq_ignore_ascii_case("sse2") {
            Ok(Self::Sse2)
        } else if s.eq_ignore_ascii_case("neon") {
            Ok(Self::Neon)
        } else {
            Err(BackendError::InvalidIsaOverride(s.to_string()))
        }
    }
}

static ISA_LEVEL: OnceLock<IsaLevel> = OnceLock::new();

/// Best ISA on this host, detected once per process.
pub fn get_isa_level() -> IsaLevel {
    *ISA_LEVEL.get_or_init(|| {
        let isa = detect_isa_features();
        log::debug!("Detected ISA level: {isa}");
        isa
    })
}

#[cfg(target_arch = "x86_64")]
fn detect_isa_features() -> IsaLevel {
    if is_x86_feature_detected!("sse2") {
        IsaLevel::Sse2
    } else {
        IsaLevel::Scalar
    }
}

#[cfg(target_arch = "aarch64")]
fn detect_isa_features() -> IsaLevel {
    IsaLevel::Neon
}

// riscv64 included: there are no stable RVV intrinsics to lower onto.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_isa_features() -> IsaLevel {
    IsaLevel::Scalar
}

/// Register-level vadd kernels bound to one ISA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuKernels {
    isa: IsaLevel,
}

impl CpuKernels {
    /// Kernels for the best ISA on this host.
    pub fn new() -> Self {
        Self { isa: get_isa_level() }
    }

    /// Kernels for a specific ISA.
    pub fn with_isa(isa: IsaLevel) -> BackendResult<Self> {
        if !isa.is_supported() {
            return Err(BackendError::UnsupportedIsa(isa.name()));
        }
        Ok(Self { isa })
    }

    /// Kernels chosen by `RVV_KERNELS_ISA`, or detection when unset.
    pub fn from_env() -> BackendResult<Self> {
        crate::backend::auto_select_isa().map(|isa| Self { isa })
    }

    /// Process-wide kernels used by the free-function intrinsics.
    ///
    /// An invalid `RVV_KERNELS_ISA` is logged and replaced by detection.
    pub fn global() -> &'static CpuKernels {
        static GLOBAL: OnceLock<CpuKernels> = OnceLock::new();
        GLOBAL.get_or_init(|| match Self::from_env() {
            Ok(kernels) => kernels,
            Err(err) => {
                log::warn!("{err}, falling back to detected ISA");
                Self::new()
            }
        })
    }
}

impl Default for CpuKernels {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernels for CpuKernels {
    fn isa(&self) -> IsaLevel {
        self.isa
    }

    #[inline(always)]
    fn vadd_vv(&self, a: &VInt32M1, b: &VInt32M1, vl: usize) -> VInt32M1 {
        match self.isa {
            #[cfg(target_arch = "x86_64")]
            IsaLevel::Sse2 => sse2::sse2_i32::vadd_vv(a, b, vl),
            #[cfg(target_arch = "aarch64")]
            IsaLevel::Neon => neon::neon_i32::vadd_vv(a, b, vl),
            _ => scalar::scalar_i32::vadd_vv(a, b, vl),
        }
    }

    #[inline(always)]
    fn vadd_vv_m(
        &self,
        mask: &VBool32,
        maskedoff: &VInt32M1,
        a: &VInt32M1,
        b: &VInt32M1,
        vl: usize,
    ) -> VInt32M1 {
        match self.isa {
            #[cfg(target_arch = "x86_64")]
            IsaLevel::Sse2 => sse2::sse2_i32::vadd_vv_m(mask, maskedoff, a, b, vl),
            #[cfg(target_arch = "aarch64")]
            IsaLevel::Neon => neon::neon_i32::vadd_vv_m(mask, maskedoff, a, b, vl),
            _ => scalar::scalar_i32::vadd_vv_m(mask, maskedoff, a, b, vl),
        }
    }
}

/// Strip-mined `out = a + b` over equal-length slices.
pub(crate) fn vec_add_impl<K: Kernels + ?Sized>(k: &K, a: &[i32], b: &[i32], out: &mut [i32]) {
    let len = out.len();
    assert!(a.len() == len && b.len() == len, "vec_add: length mismatch");

    if len >= PAR_THRESHOLD {
        out.par_chunks_mut(PAR_CHUNK)
            .zip(a.par_chunks(PAR_CHUNK))
            .zip(b.par_chunks(PAR_CHUNK))
            .for_each(|((o, a), b)| strip_add(k, a, b, o));
    } else {
        strip_add(k, a, b, out);
    }
}

/// Strip-mined masked add over equal-length slices.
pub(crate) fn vec_add_masked_impl<K: Kernels + ?Sized>(
    k: &K,
    mask: &[bool],
    maskedoff: &[i32],
    a: &[i32],
    b: &[i32],
    out: &mut [i32],
) {
    let len = out.len();
    assert!(
        mask.len() == len && maskedoff.len() == len && a.len() == len && b.len() == len,
        "vec_add_masked: length mismatch"
    );

    if len >= PAR_THRESHOLD {
        out.par_chunks_mut(PAR_CHUNK)
            .zip(mask.par_chunks(PAR_CHUNK))
            .zip(maskedoff.par_chunks(PAR_CHUNK))
            .zip(a.par_chunks(PAR_CHUNK))
            .zip(b.par_chunks(PAR_CHUNK))
            .for_each(|((((o, m), off), a), b)| strip_add_masked(k, m, off, a, b, o));
    } else {
        strip_add_masked(k, mask, maskedoff, a, b, out);
    }
}

fn strip_add<K: Kernels + ?Sized>(k: &K, a: &[i32], b: &[i32], out: &mut [i32]) {
    let mut i = 0;
    while i < out.len() {
        let vl = vsetvl_e32m1(out.len() - i);
        let va = vle32_v_i32m1(&a[i..], vl);
        let vb = vle32_v_i32m1(&b[i..], vl);
        let vc = k.vadd_vv(&va, &vb, vl);
        vse32_v_i32m1(&mut out[i..], &vc, vl);
        i += vl;
    }
}

fn strip_add_masked<K: Kernels + ?Sized>(
    k: &K,
    mask: &[bool],
    maskedoff: &[i32],
    a: &[i32],
    b: &[i32],
    out: &mut [i32],
) {
    let mut i = 0;
    while i < out.len() {
        let vl = vsetvl_e32m1(out.len() - i);
        let vm = VBool32::from_lanes(&mask[i..i + vl]);
        let voff = vle32_v_i32m1(&maskedoff[i..], vl);
        let va = vle32_v_i32m1(&a[i..], vl);
        let vb = vle32_v_i32m1(&b[i..], vl);
        let vc = k.vadd_vv_m(&vm, &voff, &va, &vb, vl);
        vse32_v_i32m1(&mut out[i..], &vc, vl);
        i += vl;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_is_always_supported() {
        assert!(IsaLevel::Scalar.is_supported());
        assert!(CpuKernels::with_isa(IsaLevel::Scalar).is_ok());
    }

    #[test]
    fn detected_isa_is_supported() {
        assert!(get_isa_level().is_supported());
        assert_eq!(CpuKernels::new().isa(), get_isa_level());
    }

    #[test]
    #[cfg(target_arch = "x86_64")]
    fn neon_is_rejected_on_x86() {
        assert!(matches!(
            CpuKernels::with_isa(IsaLevel::Neon),
            Err(BackendError::UnsupportedIsa("neon"))
        ));
    }

    #[test]
    fn isa_names_round_trip() {
        for isa in [IsaLevel::Scalar, IsaLevel::Sse2, IsaLevel::Neon] {
            assert_eq!(isa.name().parse::<IsaLevel>().unwrap(), isa);
        }
        assert_eq!(" SSE2 ".parse::<IsaLevel>().unwrap(), IsaLevel::Sse2);
        assert!("avx9".parse::<IsaLevel>().is_err());
    }

    #[test]
    fn strip_mining_covers_ragged_tail() {
        let kernels = CpuKernels::new();
        for len in [0usize, 1, 3, 4, 5, 7, 8, 13] {
            let a: Vec<i32> = (0..len as i32).collect();
            let b: Vec<i32> = (0..len as i32).map(|x| 100 - x).collect();
            let mut out = vec![-1; len];
            kernels.vec_add(&a, &b, &mut out);
            assert!(out.iter().all(|&x| x == 100), "len {len}: {out:?}");
        }
    }

    #[test]
    fn masked_strip_mining_merges_per_element() {
        let kernels = CpuKernels::new();
        let len = 11;
        let mask: Vec<bool> = (0..len).map(|i| i % 3 == 0).collect();
        let off = vec![-5; len];
        let a: Vec<i32> = (0..len as i32).collect();
        let b = vec![10; len];
        let mut out = vec![0; len];
        kernels.vec_add_masked(&mask, &off, &a, &b, &mut out);
        for i in 0..len {
            let want = if mask[i] { i as i32 + 10 } else { -5 };
            assert_eq!(out[i], want, "lane {i}");
        }
    }

    #[test]
    fn parallel_path_matches_serial() {
        let len = PAR_THRESHOLD + 5;
        let a: Vec<i32> = (0..len as i32).collect();
        let b: Vec<i32> = (0..len as i32).map(|x| x.wrapping_mul(3)).collect();
        let mut par = vec![0; len];
        CpuKernels::new().vec_add(&a, &b, &mut par);

        let mut serial = vec![0; len];
        strip_add(&CpuKernels::with_isa(IsaLevel::Scalar).unwrap(), &a, &b, &mut serial);
        assert_eq!(par, serial);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn vec_add_rejects_mismatched_lengths() {
        let mut out = [0; 3];
        CpuKernels::new().vec_add(&[1, 2, 3], &[1, 2], &mut out);
    }
}
