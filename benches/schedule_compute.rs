/// Schedule computation benchmarks
///
/// Measures the single-pass FCFS derivation and report rendering across
/// workload sizes, from the classic 20-process bound upward.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fcfs_calc::cli::OutputFormat;
use fcfs_calc::fcfs::Schedule;
use fcfs_calc::report;

fn workload(size: usize) -> Vec<u64> {
    (0..size).map(|i| (i % 17 + 1) as u64).collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for size in [20usize, 1_000, 100_000] {
        let bursts = workload(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bursts, |b, bursts| {
            b.iter(|| Schedule::compute(black_box(bursts)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let schedule = Schedule::compute(&workload(20)).unwrap();

    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", format)),
            &format,
            |b, &format| {
                b.iter(|| report::render(black_box(&schedule), format));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_render);
criterion_main!(benches);
