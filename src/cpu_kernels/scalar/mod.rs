// Expand scalar i32 implementations (golden fallback, one lane per step)
crate::expand_isa_impls!(scalar_i32, scalar, i32, VInt32M1, VBool32);

#[cfg(test)]
mod tests {
    use super::scalar_i32;
    use crate::types::{VBool32, VInt32M1};

    #[test]
    fn test_scalar_vadd() {
        let a = VInt32M1([1, 2, 3, 4]);
        let b = VInt32M1([5, 6, 7, 8]);
        assert_eq!(scalar_i32::vadd_vv(&a, &b, 4).0, [6, 8, 10, 12]);
    }

    #[test]
    fn test_scalar_vadd_wraps() {
        let a = VInt32M1([i32::MAX, i32::MIN, -1, 0]);
        let b = VInt32M1([1, -1, 1, 0]);
        assert_eq!(scalar_i32::vadd_vv(&a, &b, 4).0, [i32::MIN, i32::MAX, 0, 0]);
    }

    #[test]
    fn test_scalar_vadd_masked() {
        let mask = VBool32([true, false, true, false]);
        let off = VInt32M1::splat(1);
        let a = VInt32M1([1, 2, 3, 4]);
        let b = VInt32M1([5, 6, 7, 8]);
        assert_eq!(scalar_i32::vadd_vv_m(&mask, &off, &a, &b, 4).0, [6, 1, 10, 1]);
    }
}
