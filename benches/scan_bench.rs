use criterion::{Criterion, criterion_group, criterion_main};
use example_runner::execution::scan_output;
use std::hint::black_box;

fn example_log(lines: usize, failing_at: Option<usize>) -> String {
    (0..lines)
        .map(|i| match failing_at {
            Some(at) if at == i => "ERROR: Could not create compute pipeline".to_string(),
            _ => format!("INFO: dispatch {i} finished in 0.{i:03}ms"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_scan_output(c: &mut Criterion) {
    let passing = example_log(10_000, None);
    let failing = example_log(10_000, Some(9_000));

    c.bench_function("scan_output_passing", |b| {
        b.iter(|| scan_output(black_box(&passing)))
    });
    c.bench_function("scan_output_failing", |b| {
        b.iter(|| scan_output(black_box(&failing)))
    });
}

criterion_group!(benches, bench_scan_output);
criterion_main!(benches);
