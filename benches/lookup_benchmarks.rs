//! Performance benchmarks for contact lookups.
//!
//! These benchmarks measure the linear scans and keyed lookups:
//! - Phone validation
//! - Phone lookup within a record, at different record sizes
//! - Contact lookup by name in a populated address book

use contact_book::{AddressBook, Phone, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

fn phone_for(i: usize) -> String {
    format!("555-{:03}-{:04}", i / 10_000 % 1000, i % 10_000)
}

fn record_with_phones(count: usize) -> Record {
    let mut record = Record::named("Bench").unwrap();
    for i in 0..count {
        record.add_phone(&phone_for(i)).unwrap();
    }
    record
}

fn bench_phone_validation(c: &mut Criterion) {
    c.bench_function("phone_validation", |b| {
        b.iter(|| Phone::is_valid(black_box("(555) 123-4567")));
    });
}

fn bench_find_phone(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_phone");

    for size in [1usize, 10, 100] {
        let record = record_with_phones(size);
        let last = phone_for(size - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &last, |b, phone| {
            b.iter(|| record.find_phone(black_box(phone)));
        });
    }

    group.finish();
}

fn bench_book_find(c: &mut Criterion) {
    let mut book = AddressBook::new();
    for i in 0..1_000 {
        book.add_record(Record::named(&format!("Contact{}", i)).unwrap());
    }

    c.bench_function("book_find", |b| {
        b.iter(|| book.find(black_box("Contact500")));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_phone_validation,
        bench_find_phone,
        bench_book_find
}

criterion_main!(benches);
