//! Governance engine benchmarks.
//!
//! Measures:
//! - Vote casting and recasting throughput
//! - Stake deposit/withdraw cycles with confidence reassessment
//! - Fixed-point confidence and fee arithmetic

use {
    criterion::{criterion_group, criterion_main, Criterion, Throughput},
    hologov_bench::helpers,
    hologov_engine::{constants::PRECISION_MULTIPLIER, math},
    std::hint::black_box,
};

// ---------------------------------------------------------------------------
// Vote casting
// ---------------------------------------------------------------------------

fn bench_vote(c: &mut Criterion) {
    let mut group = c.benchmark_group("governance/vote");
    group.throughput(Throughput::Elements(1));

    // 64 equal holders alternating sides: yea weight stays pinned at 50 %
    // of supply, below the 51 % majority, so the proposal never resolves.
    group.bench_function("cast_and_recast", |b| {
        let mut engine = helpers::engine_with_voters(64);
        let (id, _) = engine.create_proposal(&helpers::account(0), "bench".to_string(), 0);
        let mut i: u8 = 0;
        b.iter(|| {
            let voter = helpers::account(i % 64);
            engine.vote(&voter, id, (i % 64) % 2 == 0).unwrap();
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Stake churn
// ---------------------------------------------------------------------------

fn bench_stake(c: &mut Criterion) {
    let mut group = c.benchmark_group("governance/stake");
    group.throughput(Throughput::Elements(2));

    // Each cycle crosses the 4× confidence threshold on deposit and drops
    // back on withdrawal, exercising the Pended/Unpended churn.
    group.bench_function("stake_unstake_cycle", |b| {
        let mut engine = helpers::engine_with_stakers(8);
        let (id, _) = engine.create_proposal(&helpers::account(0), "bench".to_string(), 0);
        let staker = helpers::account(0);
        b.iter(|| {
            engine.stake(&staker, id, 4, true, 1_000).unwrap();
            engine.unstake(&staker, id, 4, true, 1_000).unwrap();
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Fixed-point arithmetic
// ---------------------------------------------------------------------------

fn bench_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("governance/fixed_point");
    group.throughput(Throughput::Elements(1));

    group.bench_function("mul_div", |b| {
        b.iter(|| {
            math::mul_div(
                black_box(40u128),
                black_box(PRECISION_MULTIPLIER),
                black_box(10u128),
            )
            .unwrap()
        })
    });

    group.bench_function("confidence", |b| {
        let mut engine = helpers::engine_with_stakers(2);
        let (id, _) = engine.create_proposal(&helpers::account(0), "bench".to_string(), 0);
        engine
            .stake(&helpers::account(0), id, 40, true, 1_000)
            .unwrap();
        engine
            .stake(&helpers::account(1), id, 10, false, 1_000)
            .unwrap();
        b.iter(|| engine.confidence(black_box(id)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_vote, bench_stake, bench_math);
criterion_main!(benches);
