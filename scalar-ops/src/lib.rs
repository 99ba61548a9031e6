//! Scalar RVV intrinsic reference — `extern "C"` pure scalar functions.
//!
//! These serve as the golden reference for the SIMD backends in
//! `rvv-kernels`. They keep the raw intrinsic contract: pointers plus a
//! vector length, no bounds checks. Callers are responsible for `vl`.
//!
//! This crate is compiled with `opt-level = 1` (configured in the workspace
//! root Cargo.toml) so the loops stay scalar.

pub mod vadd;

pub use vadd::{scalar_vadd_vv_i32, scalar_vadd_vv_i32_m};
