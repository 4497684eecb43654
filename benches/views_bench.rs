//! Benchmarks for the list transformations behind the views
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use health_hub::export::programs_to_csv;
use health_hub::model::{Category, Enrollment, Program};
use health_hub::query::{
    category_histogram, enrollment_trend, filter_by_name, paginate, ProgramFilter,
    TrendGranularity, PAGE_SIZE,
};

const CATEGORIES: [&str; 5] = ["Fitness", "Nutrition", "Mental Health", "General Wellness", ""];

fn create_programs(count: usize) -> Vec<Program> {
    (0..count)
        .map(|i| Program {
            id: i as u64,
            name: format!("Wellness Program {}", i),
            description: Some(format!("Session plan number {}, with notes", i)),
            category: Some(CATEGORIES[i % CATEGORIES.len()].to_string()),
        })
        .collect()
}

fn create_enrollments(count: usize) -> Vec<Enrollment> {
    (0..count)
        .map(|i| Enrollment {
            id: Some(i as u64),
            client_id: i as u64,
            program_id: (i % 50) as u64,
            date: Some(format!("202{}-{:02}-15T09:30:00", i % 4, i % 12 + 1)),
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100, 1000, 10000] {
        let programs = create_programs(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("by_name_{}", size), |b| {
            b.iter(|| filter_by_name(black_box(&programs), black_box("program 1")))
        });

        let filter = ProgramFilter::new()
            .search("program")
            .category(Category::Fitness);
        group.bench_function(format!("name_and_category_{}", size), |b| {
            b.iter(|| filter.apply(black_box(&programs)))
        });

        group.bench_function(format!("filter_then_page_{}", size), |b| {
            b.iter(|| {
                let filtered = filter.apply(black_box(&programs));
                paginate(&filtered, black_box(3), PAGE_SIZE)
            })
        });
    }

    group.finish();
}

fn bench_histograms(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    let now = NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();

    for size in [100, 1000, 10000] {
        let programs = create_programs(size);
        let enrollments = create_enrollments(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("category_{}", size), |b| {
            b.iter(|| category_histogram(black_box(&programs)))
        });

        group.bench_function(format!("trend_month_{}", size), |b| {
            b.iter(|| enrollment_trend(black_box(&enrollments), TrendGranularity::Month, now))
        });

        group.bench_function(format!("trend_year_month_{}", size), |b| {
            b.iter(|| enrollment_trend(black_box(&enrollments), TrendGranularity::YearMonth, now))
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for size in [100, 1000] {
        let programs = create_programs(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("csv_{}", size), |b| {
            b.iter(|| programs_to_csv(black_box(&programs)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_histograms, bench_export);
criterion_main!(benches);
