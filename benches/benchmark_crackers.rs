use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rotbreak::checkers::wordlist::WordlistChecker;
use rotbreak::crackers::{run_cracker, CrackerKind};
use rotbreak::generator;

pub fn criterion_benchmark(c: &mut Criterion) {
    let plaintext = "el perro come carne y el gato mira al perro desde la ventana de la casa \
                     mientras el sol cae despacio sobre el patio y la calle se queda en silencio";
    let case = generator::generate_with_rng(plaintext, &mut StdRng::seed_from_u64(99));
    let checker = WordlistChecker::new(&case.dictionary);

    c.bench_function("exhaustive search", |b| {
        b.iter(|| {
            run_cracker(
                CrackerKind::Exhaustive,
                black_box(&case.ciphertext),
                &checker,
            )
        })
    });
    c.bench_function("divide and conquer", |b| {
        b.iter(|| {
            run_cracker(
                CrackerKind::DivideConquer,
                black_box(&case.ciphertext),
                &checker,
            )
        })
    });
    c.bench_function("greedy frequency search", |b| {
        b.iter(|| run_cracker(CrackerKind::Greedy, black_box(&case.ciphertext), &checker))
    });
    c.bench_function("branch and bound", |b| {
        b.iter(|| {
            run_cracker(
                CrackerKind::BranchBound,
                black_box(&case.ciphertext),
                &checker,
            )
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
