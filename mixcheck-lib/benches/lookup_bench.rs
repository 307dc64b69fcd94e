use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mixcheck::MixtureDb;

fn bench_analyze(c: &mut Criterion) {
    let db = MixtureDb::new();
    let pairs = [
        ("Bleach", "Ammonia"),
        (" AMMONIA", "bleach "),
        ("Concentrated Sulfuric Acid", "Unobtainium"),
        ("Salt", "Sugar"),
    ];

    c.bench_function("analyze_mixed_pairs", |b| {
        b.iter(|| {
            for (first, second) in pairs {
                black_box(db.analyze(black_box(first), black_box(second)));
            }
        });
    });
}

fn bench_chemical(c: &mut Criterion) {
    let db = MixtureDb::new();
    let names = ["water", "Baking Soda", "  VINEGAR ", "unobtainium"];

    c.bench_function("chemical_mixed_names", |b| {
        b.iter(|| {
            for name in names {
                black_box(db.chemical(black_box(name)));
            }
        });
    });
}

criterion_group!(benches, bench_analyze, bench_chemical);
criterion_main!(benches);
