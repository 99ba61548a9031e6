/// Maps abstract lane operations to concrete hardware intrinsics or the
/// scalar fallback.
///
/// # Architecture
/// Layer 1 of the macro stack. Each `(isa, elem, op)` arm is one primitive:
/// - `lanes`: elements per hardware register
/// - `zero`, `load`, `store`: register materialisation and memory access
/// - `add`: wrapping lane-wise add
/// - `select`: `m[i] != 0 ? a[i] : b[i]`, where `m` lanes are all-ones or zero
///
/// # Usage
/// ```ignore
/// simd_primitive!(scalar, i32, add, a, b) // -> a.wrapping_add(b)
/// simd_primitive!(sse2, i32, add, a, b)   // -> _mm_add_epi32(a, b)
/// ```
#[macro_export]
macro_rules! simd_primitive {
    // ========================================================================
    // Scalar Fallback (Baseline)
    // ========================================================================
    (scalar, i32, lanes) => { 1 };
    (scalar, i32, zero) => { 0i32 };
    (scalar, i32, load, $p:expr) => { unsafe { *$p } };
    (scalar, i32, store, $p:expr, $v:expr) => { unsafe { *$p = $v } };
    (scalar, i32, add, $a:expr, $b:expr) => { $a.wrapping_add($b) };
    (scalar, i32, select, $m:expr, $a:expr, $b:expr) => { if $m != 0 { $a } else { $b } };

    // ========================================================================
    // SSE2 (x86_64 baseline, 4 x i32 per __m128i)
    // ========================================================================
    (sse2, i32, lanes) => { 4 };
    (sse2, i32, zero) => { std::arch::x86_64::_mm_setzero_si128() };
    (sse2, i32, load, $p:expr) => {
        std::arch::x86_64::_mm_loadu_si128($p as *const std::arch::x86_64::__m128i)
    };
    (sse2, i32, store, $p:expr, $v:expr) => {
        std::arch::x86_64::_mm_storeu_si128($p as *mut std::arch::x86_64::__m128i, $v)
    };
    (sse2, i32, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm_add_epi32($a, $b) };
    // (m & a) | (!m & b)
    (sse2, i32, select, $m:expr, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm_or_si128(
            std::arch::x86_64::_mm_and_si128($m, $a),
            std::arch::x86_64::_mm_andnot_si128($m, $b),
        )
    };

    // ========================================================================
    // NEON (aarch64, 4 x i32 per int32x4_t)
    // ========================================================================
    (neon, i32, lanes) => { 4 };
    (neon, i32, zero) => { std::arch::aarch64::vdupq_n_s32(0) };
    (neon, i32, load, $p:expr) => { std::arch::aarch64::vld1q_s32($p) };
    (neon, i32, store, $p:expr, $v:expr) => { std::arch::aarch64::vst1q_s32($p, $v) };
    (neon, i32, add, $a:expr, $b:expr) => { std::arch::aarch64::vaddq_s32($a, $b) };
    (neon, i32, select, $m:expr, $a:expr, $b:expr) => {
        std::arch::aarch64::vbslq_s32(std::arch::aarch64::vreinterpretq_u32_s32($m), $a, $b)
    };
}
