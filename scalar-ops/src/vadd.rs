/// Unmasked vector add: `out[i] = a[i] + b[i]` for `i < vl` (wrapping).
///
/// Lanes at or past `vl` are not touched.
///
/// # Safety
/// `a`, `b` and `out` must each be valid for `vl` elements. Nothing is checked.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_vadd_vv_i32(a: *const i32, b: *const i32, out: *mut i32, vl: usize) {
    for i in 0..vl {
        *out.add(i) = (*a.add(i)).wrapping_add(*b.add(i));
    }
}

/// Masked vector add with merge policy:
/// `out[i] = mask[i] & 1 != 0 ? a[i] + b[i] : maskedoff[i]` for `i < vl`.
///
/// `mask` holds one byte per lane; only the least-significant bit is read.
///
/// # Safety
/// `mask`, `maskedoff`, `a`, `b` and `out` must each be valid for `vl`
/// elements. Nothing is checked.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_vadd_vv_i32_m(
    mask: *const u8,
    maskedoff: *const i32,
    a: *const i32,
    b: *const i32,
    out: *mut i32,
    vl: usize,
) {
    for i in 0..vl {
        *out.add(i) = if *mask.add(i) & 1 != 0 {
            (*a.add(i)).wrapping_add(*b.add(i))
        } else {
            *maskedoff.add(i)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vadd_reference_matches_probe_data() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        let mut out = [0i32; 4];
        unsafe { scalar_vadd_vv_i32(a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), 4) };
        assert_eq!(out, [6, 8, 10, 12]);
    }

    #[test]
    fn vadd_reference_leaves_tail_alone() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        let mut out = [-1i32; 4];
        unsafe { scalar_vadd_vv_i32(a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), 2) };
        assert_eq!(out, [6, 8, -1, -1]);
    }

    #[test]
    fn masked_reference_merges() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        let off = [1, 1, 1, 1];
        let mask = [1u8, 0, 1, 0];
        let mut out = [0i32; 4];
        unsafe {
            scalar_vadd_vv_i32_m(mask.as_ptr(), off.as_ptr(), a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), 4)
        };
        assert_eq!(out, [6, 1, 10, 1]);
    }

    #[test]
    fn masked_reference_reads_only_low_bit() {
        let a = [10, 10];
        let b = [1, 1];
        let off = [0, 0];
        let mask = [0xFEu8, 0x03];
        let mut out = [7i32; 2];
        unsafe {
            scalar_vadd_vv_i32_m(mask.as_ptr(), off.as_ptr(), a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), 2)
        };
        assert_eq!(out, [0, 11]);
    }

    #[test]
    fn zero_vl_touches_nothing() {
        let mut out = [42i32; 4];
        unsafe { scalar_vadd_vv_i32(std::ptr::null(), std::ptr::null(), out.as_mut_ptr(), 0) };
        assert_eq!(out, [42; 4]);
    }
}
