//! Performance benchmarks for the birthday-window query.
//!
//! These benchmarks measure the query over stores of different sizes, with
//! every contact carrying a birthday spread across the year.

use chrono::{Duration, NaiveDate};
use contact_book::store::ContactStore;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a store of `size` contacts with birthdays spread over a year.
fn create_test_store(size: usize) -> ContactStore {
    let base = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
    let mut store = ContactStore::new();
    for i in 0..size {
        let name = format!("Contact{}", i);
        store.add_contact(&name, &format!("{:010}", i)).unwrap();
        let birthday = base + Duration::days((i * 37 % 365) as i64);
        store
            .add_birthday(&name, &birthday.format("%d.%m.%Y").to_string())
            .unwrap();
    }
    store
}

/// Benchmark the seven day window at different store sizes.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [10, 100, 1_000, 10_000] {
        let store = create_test_store(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| store.upcoming_birthdays_from(black_box(today), black_box(7)));
        });
    }

    group.finish();
}

/// Benchmark exact-name lookup at the end of a large store.
fn bench_show_phone(c: &mut Criterion) {
    let store = create_test_store(10_000);
    c.bench_function("show_phone_last_of_10000", |b| {
        b.iter(|| store.show_phone(black_box("Contact9999")));
    });
}

criterion_group!(benches, bench_upcoming_birthdays, bench_show_phone);
criterion_main!(benches);
