// benches/swap_benchmark.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use analyze_rs::swap::{swap_elements, swap_in_place};
use analyze_rs::*;

fn benchmark_swap_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_in_place");

    for width in [2usize, 4] {
        for size in [1000usize, 100000, 1000000].iter() {
            let mut data: Vec<u8> = (0..*size * width).map(|i| i as u8).collect();
            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("width_{}", width), size),
                size,
                |b, &size| {
                    b.iter(|| swap_in_place(&mut data, width, size).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn benchmark_swap_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_elements_f32");

    for size in [1000usize, 100000, 1000000].iter() {
        let mut data: Vec<f32> = (0..*size).map(|i| i as f32).collect();
        group.throughput(Throughput::Bytes((*size * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| swap_elements(&mut data));
        });
    }

    group.finish();
}

fn benchmark_header_codec(c: &mut Criterion) {
    let header = HeaderRecord::build(256, 256, 30, 1, "FLOAT", 4095, 0).unwrap();
    let bytes = header.to_bytes();

    c.bench_function("header_to_bytes", |b| b.iter(|| header.to_bytes()));
    c.bench_function("header_from_bytes", |b| {
        b.iter(|| HeaderRecord::from_bytes(&bytes).unwrap())
    });
}

criterion_group!(benches, benchmark_swap_bytes, benchmark_swap_f32, benchmark_header_codec);
criterion_main!(benches);
