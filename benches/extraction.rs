//! Benchmarks for datesift

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use datesift::find_date;

/// Representative lines, one per surface form the catalog recognizes.
const SHAPED_LINES: &[(&str, &str)] = &[
    ("numeric_slash", "03/25/93 Total time of visit (in minutes):"),
    ("numeric_dash", "4-13-82 Other Child Mental Health Outcomes Scales Used"),
    ("day_name_year", "20 Mar 2009 discharge summary"),
    ("name_day_year", "August 12 2004 - diagnosed with Parkinson's"),
    ("name_year", "September 1995 - first hospitalization"),
    ("fuzzy_name", "sApril 11 1990 CPT Code: 90792"),
    ("month_year", "6/2008 Primary Care Doctor:"),
    ("bare_year", "first hospitalized in 1978"),
    ("no_date", "random text with no date at all"),
];

fn generate_lines(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            format!(
                "{:02}/{:02}/{} Total time of visit (in minutes): {}",
                (i % 12) + 1,
                (i % 28) + 1,
                1970 + (i % 50),
                i % 120
            )
        })
        .collect()
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");

    for (name, line) in SHAPED_LINES {
        group.bench_with_input(BenchmarkId::new("find_date", name), line, |b, line| {
            b.iter(|| find_date(black_box(line)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [100, 500, 1000] {
        let lines = generate_lines(size);
        group.bench_with_input(BenchmarkId::new("numeric_lines", size), &lines, |b, lines| {
            b.iter(|| {
                for line in lines {
                    let _ = find_date(black_box(line));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shapes, bench_batch);
criterion_main!(benches);
