//! rvv-kernels: RISC-V vector (RVV) intrinsic semantics on host SIMD.
//!
//! This crate models the `e32m1` slice of the RVV intrinsic API on a
//! 128-bit VLEN machine (four `i32` lanes per register) with:
//! - **Runtime ISA selection**: SSE2 / NEON / scalar, detected once
//! - **Macro-generated backends**: `simd_primitive!` -> `define_vadd_ops!` -> `expand_isa_impls!`
//! - **vl semantics**: lanes past `vl` are zero (unmasked) or `maskedoff` (masked)
//! - **Conformance probes**: the unmasked and masked vadd checks in [`probes`]
//!
//! # Quick Start
//!
//! ```
//! use rvv_kernels::intrinsics::*;
//!
//! let va = vle32_v_i32m1(&[1, 2, 3, 4], 4);
//! let vb = vle32_v_i32m1(&[5, 6, 7, 8], 4);
//! let mask = vlm_v_b32(&[1, 0, 1, 0], 4);
//! let off = vle32_v_i32m1(&[1, 1, 1, 1], 4);
//! assert_eq!(vadd_vv_i32m1(va, vb, 4).0, [6, 8, 10, 12]);
//! assert_eq!(vadd_vv_i32m1_m(mask, off, va, vb, 4).0, [6, 1, 10, 1]);
//! ```

#[macro_use]
pub mod macros;

pub mod backend;
pub mod cpu_kernels;
pub mod error;
pub mod intrinsics;
pub mod probes;
pub mod traits;
pub mod types;
pub mod validation;


pub use backend::{auto_select_isa, parse_isa_override, ISA_ENV};
pub use cpu_kernels::{get_isa_level, CpuKernels, IsaLevel};
pub use error::{BackendError, BackendResult};
pub use probes::{ProbeReport, vadd_masked_probe, vadd_probe};
pub use traits::Kernels;
pub use types::{MaskLayout, VBool32, VInt32M1, VLEN_BITS, VLMAX_E32M1};
