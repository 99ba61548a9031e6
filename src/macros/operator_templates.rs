/// Register-level vadd operators, parameterized by ISA and element type.
///
/// Both operators funnel through `add_select`: the unmasked form selects
/// against a zero fallback with the first `vl` lanes active, the masked form
/// selects against `maskedoff` with `mask & first(vl)` active.
#[macro_export]
macro_rules! define_vadd_ops {
    ($isa:ident, $elem:ident, $vreg:ident, $vmask:ident) => {
        const VLMAX: usize = $crate::types::VLMAX_E32M1;

        /// `out[i] = sel[i] != 0 ? a[i] + b[i] : fallback[i]` across all VLMAX lanes.
        #[inline(always)]
        fn add_select(
            sel: &[$elem; VLMAX],
            fallback: &[$elem; VLMAX],
            a: &[$elem; VLMAX],
            b: &[$elem; VLMAX],
        ) -> [$elem; VLMAX] {
            const LANES: usize = $crate::simd_primitive!($isa, $elem, lanes);
            let mut out = [0 as $elem; VLMAX];

            let mut i = 0;
            while i + LANES <= VLMAX {
                #[allow(unused_unsafe)]
                unsafe {
                    let vs = $crate::simd_primitive!($isa, $elem, load, sel.as_ptr().add(i));
                    let vf = $crate::simd_primitive!($isa, $elem, load, fallback.as_ptr().add(i));
                    let va = $crate::simd_primitive!($isa, $elem, load, a.as_ptr().add(i));
                    let vb = $crate::simd_primitive!($isa, $elem, load, b.as_ptr().add(i));
                    let sum = $crate::simd_primitive!($isa, $elem, add, va, vb);
                    let res = $crate::simd_primitive!($isa, $elem, select, vs, sum, vf);
                    $crate::simd_primitive!($isa, $elem, store, out.as_mut_ptr().add(i), res);
                }
                i += LANES;
            }
            out
        }

        /// `vadd.vv`: lanes `< vl` hold `a + b`, lanes `>= vl` are zero.
        ///
        /// # Panics
        /// If `vl > VLMAX`.
        #[inline(always)]
        pub fn vadd_vv(a: &$vreg, b: &$vreg, vl: usize) -> $vreg {
            assert!(vl <= VLMAX, "vadd_vv: vl {} exceeds VLMAX {}", vl, VLMAX);
            let sel = $vmask::first(vl).to_select_bits();
            $vreg(add_select(&sel, &[0 as $elem; VLMAX], &a.0, &b.0))
        }

        /// `vadd.vv` under `v0.t` with merge policy: active lanes `< vl` hold
        /// `a + b`, every other lane holds `maskedoff`.
        ///
        /// # Panics
        /// If `vl > VLMAX`.
        #[inline(always)]
        pub fn vadd_vv_m(mask: &$vmask, maskedoff: &$vreg, a: &$vreg, b: &$vreg, vl: usize) -> $vreg {
            assert!(vl <= VLMAX, "vadd_vv_m: vl {} exceeds VLMAX {}", vl, VLMAX);
            let sel = mask.and($vmask::first(vl)).to_select_bits();
            $vreg(add_select(&sel, &maskedoff.0, &a.0, &b.0))
        }
    };
}
