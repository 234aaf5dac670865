use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qsieve::numtheory;
use qsieve::sieve::init;
use qsieve::sieve::table::TableSize;
use qsieve::sieve::{search, PrimeType};

const Q0_2048_BIT_HEX: &str = concat!(
    "C9F6E1A2B3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7E",
    "8F90A1B2C3D4E5F60718293A4B5C6D7F",
);

fn bench_plain_search_by_table_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("plain_search_100_survivors");
    for table in [TableSize::S, TableSize::M, TableSize::L] {
        group.bench_with_input(BenchmarkId::from_parameter(table.len()), &table, |b, &table| {
            b.iter(|| {
                let mut state = init::init_from_hex(black_box(Q0_2048_BIT_HEX), table).unwrap();
                search::search(&mut state, black_box(100)).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_safe_prime_search(c: &mut Criterion) {
    c.bench_function("safe_prime_search_50_survivors", |b| {
        b.iter(|| {
            let mut state =
                init::init_from_hex(black_box(&format!("s:{Q0_2048_BIT_HEX}")), TableSize::M)
                    .unwrap();
            search::search(&mut state, black_box(50)).unwrap()
        });
    });
}

fn bench_twin_prime_search(c: &mut Criterion) {
    c.bench_function("twin_prime_search_50_survivors", |b| {
        b.iter(|| {
            let mut state =
                init::init_from_hex(black_box(&format!("t:{Q0_2048_BIT_HEX}")), TableSize::M)
                    .unwrap();
            search::search(&mut state, black_box(50)).unwrap()
        });
    });
}

fn bench_initializer(c: &mut Criterion) {
    c.bench_function("init_from_hex_2048_bit_L", |b| {
        b.iter(|| init::init_from_hex(black_box(Q0_2048_BIT_HEX), TableSize::L).unwrap().modn);
    });
}

fn bench_init_from_limbs(c: &mut Criterion) {
    // Mirrors how a bignum library would hand off Q0 without a hex
    // round-trip, to isolate Horner-reduction cost from hex parsing.
    let limbs: Vec<u64> = (0..32u64).map(|i| 0x9E37_79B9_7F4A_7C15u64.wrapping_mul(i + 1)).collect();
    c.bench_function("init_from_limbs_2048_bit_L", |b| {
        b.iter(|| init::init_from_limbs(PrimeType::Plain, TableSize::L, black_box(&limbs)).unwrap());
    });
}

fn bench_generate_primes(c: &mut Criterion) {
    c.bench_function("numtheory::generate_primes(1_000_000)", |b| {
        b.iter(|| numtheory::generate_primes(black_box(1_000_000)));
    });
}

criterion_group!(
    benches,
    bench_plain_search_by_table_size,
    bench_safe_prime_search,
    bench_twin_prime_search,
    bench_initializer,
    bench_init_from_limbs,
    bench_generate_primes,
);
criterion_main!(benches);
