//! Performance benchmarks for address book operations.
//!
//! These benchmarks measure the cost of the hot paths under various
//! collection sizes:
//! - Contact construction (full field validation)
//! - Insertion with the duplicate scan
//! - Name lookup
//! - Grouping by city

use address_book::{AddressBook, Contact};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Spell out a number with letters only, so generated names stay valid.
fn alpha_suffix(mut n: usize) -> String {
    let letters = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];
    let mut suffix = String::new();
    loop {
        suffix.push(letters[n % 10]);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    suffix
}

fn sample_contact(i: usize) -> Contact {
    let cities = ["Austin", "Boston", "Chicago", "Denver"];
    let states = ["Texas", "Massachusetts", "Illinois", "Colorado"];

    Contact::new(
        format!("First{}", alpha_suffix(i)),
        format!("Last{}", alpha_suffix(i)),
        format!("{} Main St", i + 1),
        cities[i % cities.len()],
        states[i % states.len()],
        format!("{}", 100000 + (i % 899999) + 1),
        format!("98765{:05}", i % 100000),
        format!("person{}@example.com", i),
    )
    .expect("generated contact fields are valid")
}

fn populated_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        book.add_contact(sample_contact(i)).expect("unique names");
    }
    book
}

/// Benchmark full-field validation in the constructor.
fn bench_contact_validation(c: &mut Criterion) {
    c.bench_function("contact_validation", |b| {
        b.iter(|| {
            let contact = Contact::new(
                "John",
                "Doe",
                "123 Main St",
                "New York",
                "NewYork",
                "123456",
                "+1-9876543210",
                "john.doe@example.com",
            );
            std::hint::black_box(contact).is_ok()
        });
    });
}

/// Benchmark insertion, which scans for duplicates.
fn bench_add_contact(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_contact");
    for size in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let contacts: Vec<Contact> = (0..size).map(sample_contact).collect();
            b.iter(|| {
                let mut book = AddressBook::new();
                for contact in contacts.iter().cloned() {
                    book.add_contact(contact).expect("unique names");
                }
                std::hint::black_box(book.contact_count())
            });
        });
    }
    group.finish();
}

/// Benchmark looking up the last-inserted contact by name (worst case for
/// the linear scan).
fn bench_find_contact(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_contact");
    for size in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let book = populated_book(size);
            let target = format!("First{}", alpha_suffix(size - 1));
            b.iter(|| std::hint::black_box(book.find_contact(&target)).is_some());
        });
    }
    group.finish();
}

/// Benchmark grouping contacts by city.
fn bench_group_by_city(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by_city");
    for size in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let book = populated_book(size);
            b.iter(|| std::hint::black_box(book.group_by_city()).len());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_contact_validation,
    bench_add_contact,
    bench_find_contact,
    bench_group_by_city
);
criterion_main!(benches);
