//! vadd kernel benchmarks
//!
//! Register ops: vadd_vv / vadd_vv_m per backend
//! Slice ops: vec_add / vec_add_masked at 1K, 64K, 1M elements
//! Report: element throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rvv_kernels::{CpuKernels, IsaLevel, Kernels, VBool32, VInt32M1};

const SLICE_SIZES: &[usize] = &[1024, 65536, 1 << 20];

fn size_label(n: usize) -> String {
    match n {
        1024 => "1K".into(),
        65536 => "64K".into(),
        1048576 => "1M".into(),
        _ => format!("{n}"),
    }
}

fn backends() -> Vec<CpuKernels> {
    [IsaLevel::Scalar, IsaLevel::Sse2, IsaLevel::Neon]
        .into_iter()
        .filter_map(|isa| CpuKernels::with_isa(isa).ok())
        .collect()
}

fn bench_register_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("register");
    let a = VInt32M1([1, 2, 3, 4]);
    let b = VInt32M1([5, 6, 7, 8]);
    let off = VInt32M1::splat(1);
    let mask = VBool32([true, false, true, false]);

    for k in backends() {
        group.bench_function(BenchmarkId::new("vadd_vv", k.isa()), |bench| {
            bench.iter(|| k.vadd_vv(black_box(&a), black_box(&b), 4))
        });
        group.bench_function(BenchmarkId::new("vadd_vv_m", k.isa()), |bench| {
            bench.iter(|| k.vadd_vv_m(black_box(&mask), &off, black_box(&a), &b, 4))
        });
    }
    group.finish();
}

fn bench_slice_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice");
    for &n in SLICE_SIZES {
        let a: Vec<i32> = (0..n as i32).collect();
        let b: Vec<i32> = (0..n as i32).rev().collect();
        let off = vec![0; n];
        let mask: Vec<bool> = (0..n).map(|i| i % 2 == 0).collect();
        let mut out = vec![0; n];
        group.throughput(Throughput::Elements(n as u64));

        for k in backends() {
            let id = format!("{}/{}", k.isa(), size_label(n));
            group.bench_function(BenchmarkId::new("vec_add", &id), |bench| {
                bench.iter(|| k.vec_add(black_box(&a), black_box(&b), &mut out))
            });
            group.bench_function(BenchmarkId::new("vec_add_masked", &id), |bench| {
                bench.iter(|| k.vec_add_masked(black_box(&mask), &off, &a, &b, &mut out))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_register_ops, bench_slice_ops);
criterion_main!(benches);
