//! Criterion benchmarks for the allocation engine.
//!
//! Uses synthetic rosters to measure the two-phase pass with and without
//! similarity tie-breaking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_dormassign::allocation::{AllocationConfig, AllocationRunner};
use u_dormassign::roster::StudentRecord;

const FEATURES: [&str; 7] = [
    "ColdSensitivity",
    "NoiseSensitivity",
    "LightSensitivity",
    "Cleanliness",
    "SocialLevel",
    "StudyTime",
    "SleepTime",
];

fn maybe_reference(n: u32, rng: &mut StdRng) -> Option<f64> {
    if rng.random_bool(0.15) {
        Some(rng.random_range(1..=n) as f64)
    } else {
        Some(0.0) // unset sentinel
    }
}

fn synthetic_roster(n: u32, rng: &mut StdRng) -> Vec<StudentRecord> {
    (1..=n)
        .map(|id| {
            let mut record = StudentRecord::from_raw(
                id,
                Some(rng.random_range(1..=4) as f64),
                &[
                    maybe_reference(n, rng),
                    maybe_reference(n, rng),
                    maybe_reference(n, rng),
                ],
                &[maybe_reference(n, rng), maybe_reference(n, rng)],
                Default::default(),
            );
            for name in FEATURES {
                record = record.with_feature(name, rng.random_range(1..=10) as f64);
            }
            record
        })
        .collect()
}

fn bench_allocation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("allocation");

    for &n in &[100u32, 400] {
        let roster = synthetic_roster(n, &mut rng);

        let first_eligible = AllocationConfig::default().with_seed(7);
        group.bench_with_input(
            BenchmarkId::new("first_eligible", n),
            &roster,
            |b, roster| b.iter(|| AllocationRunner::run(black_box(roster), &first_eligible).unwrap()),
        );

        let similarity = AllocationConfig::default()
            .with_seed(7)
            .with_features(&FEATURES);
        group.bench_with_input(BenchmarkId::new("similarity", n), &roster, |b, roster| {
            b.iter(|| AllocationRunner::run(black_box(roster), &similarity).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_allocation);
criterion_main!(benches);
