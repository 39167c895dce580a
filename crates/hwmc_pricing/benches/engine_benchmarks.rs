//! Engine throughput benchmarks.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hwmc_core::CurveSet;
use hwmc_models::hullwhite::HullWhiteParameters;
use hwmc_models::instruments::{
    EuropeanSwaption, FixedLeg, FloatingLeg, RateProduct, SwapDirection, VanillaSwap,
};
use hwmc_pricing::mc::{HullWhiteMonteCarloEngine, SimulationConfig};

fn sample_swaption() -> RateProduct {
    let fixed = FixedLeg::new(vec![6.0, 7.0], vec![1.0, 1.0], 0.03).unwrap();
    let floating = FloatingLeg::new(vec![5.0, 6.0], vec![6.0, 7.0]).unwrap();
    let swap = VanillaSwap::new(100.0, fixed, floating, SwapDirection::PayFixed);
    RateProduct::EuropeanSwaption(EuropeanSwaption::new(swap, 5.0))
}

fn bench_swaption_pricing(c: &mut Criterion) {
    let params = HullWhiteParameters::constant_volatility(0.01, 0.01).unwrap();
    let curves = CurveSet::with_flat_discount(0.02);
    let product = sample_swaption();

    let mut group = c.benchmark_group("swaption_pricing");
    for n_paths in [10_000usize, 100_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_paths),
            &n_paths,
            |b, &n_paths| {
                let config = SimulationConfig::builder()
                    .n_paths(n_paths)
                    .seed(42)
                    .build()
                    .unwrap();
                let engine = HullWhiteMonteCarloEngine::new(config).unwrap();
                b.iter(|| engine.price(&product, &params, &curves).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_block_sizes(c: &mut Criterion) {
    let params = HullWhiteParameters::constant_volatility(0.01, 0.01).unwrap();
    let curves = CurveSet::with_flat_discount(0.02);
    let product = sample_swaption();

    let mut group = c.benchmark_group("block_size");
    for block_size in [250usize, 1_000, 4_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, &block_size| {
                let config = SimulationConfig::builder()
                    .n_paths(100_000)
                    .block_size(block_size)
                    .seed(42)
                    .build()
                    .unwrap();
                let engine = HullWhiteMonteCarloEngine::new(config).unwrap();
                b.iter(|| engine.price(&product, &params, &curves).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_swaption_pricing, bench_block_sizes);
criterion_main!(benches);
