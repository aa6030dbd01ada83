use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rect_packer_core::prelude::*;
use std::hint::black_box;

fn generate_sizes(count: usize, min_size: u32, max_size: u32) -> Vec<Size> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(count as u64);
    (0..count)
        .map(|_| {
            Size::new(
                rng.gen_range(min_size..=max_size),
                rng.gen_range(min_size..=max_size),
            )
        })
        .collect()
}

fn generate_pow2(count: usize) -> Vec<Size> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(count as u64);
    (0..count)
        .map(|_| Size::new(1 << rng.gen_range(0..7), 1 << rng.gen_range(0..7)))
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    group.sample_size(20);

    for count in [50, 100, 200] {
        let uniform = generate_sizes(count, 4, 64);
        let pow2 = generate_pow2(count);
        group.throughput(Throughput::Elements(count as u64));

        let cfg = PackerConfig::builder().verify(false).build();
        group.bench_with_input(BenchmarkId::new("uniform", count), &uniform, |b, sizes| {
            b.iter(|| black_box(pack_with_config(sizes, cfg.clone())))
        });
        group.bench_with_input(BenchmarkId::new("pow2", count), &pow2, |b, sizes| {
            b.iter(|| black_box(pack_with_config(sizes, cfg.clone())))
        });
        let verified = PackerConfig::default();
        group.bench_with_input(
            BenchmarkId::new("pow2_verified", count),
            &pow2,
            |b, sizes| b.iter(|| black_box(pack_with_config(sizes, verified.clone()))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);
