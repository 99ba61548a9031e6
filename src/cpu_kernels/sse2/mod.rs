// Expand SSE2 i32 implementations (one __m128i per e32m1 register)
#[cfg(target_arch = "x86_64")]
crate::expand_isa_impls!(sse2_i32, sse2, i32, VInt32M1, VBool32);
