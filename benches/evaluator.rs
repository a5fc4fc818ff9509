use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use five_suits::cards::{parse_cards, Card};
use five_suits::deck::Deck;
use five_suits::evaluator::evaluate;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid cards")
}

fn bench_evaluate_named(c: &mut Criterion) {
    let hands = [
        ("high_card", "Ah Kd 7s 5c 2d 9m Jc"),
        ("straight_drain", "9m 8d 7c 6h 5s Kd 2d"),
        ("full_house_drain", "Km Kd Kc 4h 4s 9d 2d"),
        ("straight_flush", "As Ks Qs Js Ts 9s 2m"),
        ("five_of_a_kind", "7m 7d 7c 7h 7s Ad Kc"),
    ];

    let mut g = c.benchmark_group("evaluate");
    for (name, hand) in hands {
        let input = cards(hand);
        g.bench_with_input(BenchmarkId::new(name, hand), &input, |b, input| {
            b.iter(|| evaluate(black_box(input)))
        });
    }
    g.finish();
}

fn bench_evaluate_dealt(c: &mut Criterion) {
    let mut deck = Deck::ordered();
    let hands: Vec<Vec<Card>> = (0..256u64)
        .map(|seed| {
            deck.reset_seeded(seed);
            (0..7).filter_map(|_| deck.draw()).collect()
        })
        .collect();
    c.bench_function("evaluate_dealt_256", |b| {
        b.iter(|| {
            for hand in &hands {
                let _ = evaluate(black_box(hand));
            }
        })
    });
}

criterion_group!(benches, bench_evaluate_named, bench_evaluate_dealt);
criterion_main!(benches);
