use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lottogen::rules::LotteryFormat;
use lottogen::MAX_LINES;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate_euromillions(c: &mut Criterion) {
    let rule = LotteryFormat::EuroMillions.rule();
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("generate(EUROMILLIONS, 99)", |b| {
        b.iter(|| lottogen::draw::generate(black_box(&rule), black_box(MAX_LINES), &mut rng));
    });
}

fn bench_generate_lotto(c: &mut Criterion) {
    let rule = LotteryFormat::Lotto.rule();
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("generate(LOTTO, 99)", |b| {
        b.iter(|| lottogen::draw::generate(black_box(&rule), black_box(MAX_LINES), &mut rng));
    });
}

fn bench_store_save_load(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let store = lottogen::store::Store::new(dir.path());
    let batch = lottogen::draw::generate_batch(
        LotteryFormat::EuroMillions,
        MAX_LINES,
        &mut StdRng::seed_from_u64(7),
    )
    .unwrap();

    c.bench_function("store_save_load(99 lines)", |b| {
        b.iter(|| {
            store
                .save(LotteryFormat::EuroMillions, black_box(batch.clone()))
                .unwrap();
            store.load(LotteryFormat::EuroMillions).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_generate_euromillions,
    bench_generate_lotto,
    bench_store_save_load,
);
criterion_main!(benches);
