use std::hint::black_box;
use std::ops::ControlFlow;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_hand::deck::random_hands;
use holdem_hand::enumerate::for_each_hand;
use holdem_hand::evaluator::{evaluate_mask, evaluate_type, RankTables};

fn bench_random_hands(c: &mut Criterion) {
    // Build the tables outside the timed loops.
    RankTables::shared();
    let hands = random_hands(7, 10_000, 0x5eed);

    let mut g = c.benchmark_group("seven_card");
    g.bench_with_input(BenchmarkId::new("evaluate_type", hands.len()), &hands, |b, input| {
        b.iter(|| {
            for &mask in input {
                black_box(evaluate_type(black_box(mask)));
            }
        })
    });
    g.bench_with_input(BenchmarkId::new("evaluate_mask", hands.len()), &hands, |b, input| {
        b.iter(|| {
            for &mask in input {
                let _ = black_box(evaluate_mask(black_box(mask)));
            }
        })
    });
    g.finish();
}

fn bench_enumeration(c: &mut Criterion) {
    let mut g = c.benchmark_group("enumerate");
    g.sample_size(10);
    g.bench_function("five_card_types", |b| {
        b.iter(|| {
            let mut counts = [0u64; 9];
            let _ = for_each_hand(5, |mask| {
                counts[evaluate_type(mask).ordinal() as usize] += 1;
                ControlFlow::<()>::Continue(())
            });
            black_box(counts)
        })
    });
    g.finish();
}

criterion_group!(benches, bench_random_hands, bench_enumeration);
criterion_main!(benches);
