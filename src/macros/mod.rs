//! Macro system for rvv-kernels.
//!
//! Three layers:
//! 1. `simd_primitive!` (hardware primitives)
//! 2. `define_vadd_ops!` (operator logic)
//! 3. `expand_isa_impls!` (per-ISA module expansion)

#[macro_use]
pub mod simd_primitive;
#[macro_use]
pub mod operator_templates;
#[macro_use]
pub mod expand;
