use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mastermind_engine::{generate, score, GameConfig, GameRng, GameSession};

fn bench_score(c: &mut Criterion) {
    let mut rng = GameRng::new(42);
    let pairs: Vec<_> = (0..256)
        .map(|_| (generate(4, 6, &mut rng).unwrap(), generate(4, 6, &mut rng).unwrap()))
        .collect();

    c.bench_function("score_classic_256", |b| {
        b.iter(|| {
            for (guess, secret) in &pairs {
                black_box(score(guess, secret).unwrap());
            }
        })
    });

    let long: Vec<_> = (0..256)
        .map(|_| (generate(12, 4, &mut rng).unwrap(), generate(12, 4, &mut rng).unwrap()))
        .collect();

    c.bench_function("score_length_12_256", |b| {
        b.iter(|| {
            for (guess, secret) in &long {
                black_box(score(guess, secret).unwrap());
            }
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let config = GameConfig::default();
    c.bench_function("lose_full_game", |b| {
        let mut rng = GameRng::new(7);
        b.iter(|| {
            let mut session = GameSession::new(config, &mut rng).unwrap();
            while !session.is_over() {
                // Same guess every turn until the session ends
                let _ = black_box(session.submit_guess(&[1, 2, 3, 4]));
            }
        })
    });
}

criterion_group!(benches, bench_score, bench_full_game);
criterion_main!(benches);
