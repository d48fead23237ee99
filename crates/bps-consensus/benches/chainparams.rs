use bps_consensus::constants::GENESIS_BITS;
use bps_consensus::{meets_target, ChainParams, MapArgs};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn construct(c: &mut Criterion) {
    let mut g = c.benchmark_group("construct");
    g.bench_function("main", |b| b.iter(|| ChainParams::main()));
    let args = MapArgs::new()
        .with("segwitheight", "-1")
        .with("vbparams", "testdummy:100:200");
    g.bench_function("regtest_overrides", |b| {
        b.iter(|| ChainParams::regtest(black_box(&args)))
    });
    g.finish();
}

fn pow(c: &mut Criterion) {
    let main = match ChainParams::main() {
        Ok(p) => p,
        Err(e) => panic!("main params: {e}"),
    };
    let hash = *main.genesis_hash();
    let ceiling = main.consensus.pow_limit;
    c.bench_function("meets_target", |b| {
        b.iter(|| meets_target(black_box(&hash), black_box(GENESIS_BITS), &ceiling))
    });
}

criterion_group!(benches, construct, pow);
criterion_main!(benches);
