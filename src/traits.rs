use crate::cpu_kernels::{vec_add_impl, vec_add_masked_impl, IsaLevel};
use crate::intrinsics::{vle32_v_i32m1, vlm_v_b32_layout, vse32_v_i32m1};
use crate::types::{MaskLayout, VBool32, VInt32M1};

/// The vector intrinsic call surface for `e32m1` operands.
///
/// Implementors provide the two register-level adds; memory movement and
/// the strip-mined slice kernels are shared.
pub trait Kernels: Send + Sync {
    /// ISA the register ops run on.
    fn isa(&self) -> IsaLevel;

    /// `vadd.vv`: lanes `< vl` hold `a[i] + b[i]` (wrapping), the rest are zero.
    fn vadd_vv(&self, a: &VInt32M1, b: &VInt32M1, vl: usize) -> VInt32M1;

    /// Masked `vadd.vv` with merge policy: active lanes `< vl` hold
    /// `a[i] + b[i]`, inactive and tail lanes hold `maskedoff[i]`.
    fn vadd_vv_m(
        &self,
        mask: &VBool32,
        maskedoff: &VInt32M1,
        a: &VInt32M1,
        b: &VInt32M1,
        vl: usize,
    ) -> VInt32M1;

    fn vle32(&self, src: &[i32], vl: usize) -> VInt32M1 {
        vle32_v_i32m1(src, vl)
    }

    fn vse32(&self, dst: &mut [i32], v: &VInt32M1, vl: usize) {
        vse32_v_i32m1(dst, v, vl)
    }

    fn vlm(&self, src: &[u8], vl: usize, layout: MaskLayout) -> VBool32 {
        vlm_v_b32_layout(src, vl, layout)
    }

    /// `out[i] = a[i] + b[i]` over whole slices.
    ///
    /// # Panics
    /// If the slice lengths differ.
    fn vec_add(&self, a: &[i32], b: &[i32], out: &mut [i32]) {
        vec_add_impl(self, a, b, out)
    }

    /// `out[i] = mask[i] ? a[i] + b[i] : maskedoff[i]` over whole slices.
    ///
    /// # Panics
    /// If the slice lengths differ.
    fn vec_add_masked(
        &self,
        mask: &[bool],
        maskedoff: &[i32],
        a: &[i32],
        b: &[i32],
        out: &mut [i32],
    ) {
        vec_add_masked_impl(self, mask, maskedoff, a, b, out)
    }
}
