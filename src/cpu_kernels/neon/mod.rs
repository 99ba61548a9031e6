// Expand NEON i32 implementations (one int32x4_t per e32m1 register)
#[cfg(target_arch = "aarch64")]
crate::expand_isa_impls!(neon_i32, neon, i32, VInt32M1, VBool32);
