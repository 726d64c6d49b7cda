//! Performance benchmarks for input validation and name suggestions.
//!
//! These run on every line a user types, so they should stay well under a
//! millisecond even for large customer lists:
//! - Date, time, email and phone validators on good and bad input
//! - Name suggestions over growing candidate lists

use booking_desk::domain::{
    validate_birth_date_on, validate_booking_date_on, validate_email, validate_phone,
    validate_time, BirthDatePolicy,
};
use booking_desk::matching::NameMatcher;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 10).unwrap()
}

/// Benchmark the validators on accepted and rejected input.
fn bench_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("validators");
    let today = today();

    group.bench_function("booking_date", |b| {
        b.iter(|| {
            validate_booking_date_on(black_box("15/6/2030"), today);
            validate_booking_date_on(black_box("31-02-2030"), today);
        });
    });

    group.bench_function("birth_date", |b| {
        b.iter(|| {
            validate_birth_date_on(black_box("01.01.1990"), BirthDatePolicy::NotInFuture, today);
        });
    });

    group.bench_function("time", |b| {
        b.iter(|| {
            validate_time(black_box("19:30"));
            validate_time(black_box("7pm"));
        });
    });

    group.bench_function("email", |b| {
        b.iter(|| {
            validate_email(black_box("ann.smith@example.co.uk"));
            validate_email(black_box("not-an-email"));
        });
    });

    group.bench_function("phone", |b| {
        b.iter(|| {
            validate_phone(black_box("+44 7911 123456"));
            validate_phone(black_box("07911"));
        });
    });

    group.finish();
}

/// Benchmark suggestions for a mistyped name over different list sizes.
fn bench_name_suggestions(c: &mut Criterion) {
    let matcher = NameMatcher::default();
    let mut group = c.benchmark_group("name_suggestions");

    for size in [10, 100, 1000].iter() {
        let names: Vec<String> = (0..*size)
            .map(|i| format!("Customer {} Smith", i))
            .chain(std::iter::once("Annabel Jones".to_string()))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &names, |b, names| {
            b.iter(|| matcher.suggest(black_box("Anabel Jones"), names.iter().map(String::as_str)));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_validators, bench_name_suggestions
}

criterion_main!(benches);
