use five_suits::cards::{parse_cards, Card};
use five_suits::evaluator::{compare_hands, evaluate, evaluate_hand, Category, HandRank};
use five_suits::hand::{Board, HoleCards};
use std::cmp::Ordering;

fn eval(s: &str) -> HandRank {
    evaluate(&parse_cards(s).expect("valid cards")).expect("evaluates")
}

fn card(s: &str) -> Card {
    s.parse().expect("valid card")
}

#[test]
fn category_five_of_a_kind() {
    let e = eval("7m 7d 7c 7h 7s Ad Kc");
    assert_eq!(e.category, Category::FiveOfAKind);
    assert_eq!(e.top, card("7s"));
}

#[test]
fn category_straight_flush() {
    let e = eval("9h 8h 7h 6h 5h Km 2d");
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.top, card("9h"));
}

#[test]
fn category_four_of_a_kind() {
    let e = eval("9m 9d 9c 9h Am Kd 2c");
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(e.top, card("9h"));
}

#[test]
fn category_straight_drain() {
    let e = eval("9m 8d 7c 6h 5s Kd 2d");
    assert_eq!(e.category, Category::StraightDrain);
    assert_eq!(e.top, card("9m"));
}

#[test]
fn category_full_house_drain() {
    let e = eval("Km Kd Kc 4h 4s 9d 2d");
    assert_eq!(e.category, Category::FullHouseDrain);
    assert_eq!(e.top, card("Kc"));
}

#[test]
fn category_flush_uses_highest_card_of_the_suit() {
    let e = eval("Kh Th 8h 6h 3h Am 2d");
    assert_eq!(e.category, Category::Flush);
    assert_eq!(e.top, card("Kh"));
}

#[test]
fn category_full_house() {
    // The pair shares the moon suit with the triple, so no drain.
    let e = eval("Km Kd Kc 4h 4m 9d 2s");
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(e.top, card("Kc"));
}

#[test]
fn category_straight() {
    let e = eval("9d 8h 7c 6s 5d Km 2m");
    assert_eq!(e.category, Category::Straight);
    assert_eq!(e.top, card("9d"));
}

#[test]
fn lower_straight_drain_beats_higher_plain_straight() {
    // 9-high repeats diamonds; 8-high covers all five suits.
    let e = eval("9d 8h 7c 6s 5d 4m 2d");
    assert_eq!(e.category, Category::StraightDrain);
    assert_eq!(e.top, card("8h"));
}

#[test]
fn category_wheel_straight() {
    let e = eval("Ad 2h 3c 4s 5d Km 9m");
    assert_eq!(e.category, Category::Straight);
    assert_eq!(e.top, card("5d"));
}

#[test]
fn category_three_of_a_kind() {
    let e = eval("Qm Qd Qc Th 2s 5m 8d");
    assert_eq!(e.category, Category::ThreeOfAKind);
    assert_eq!(e.top, card("Qc"));
}

#[test]
fn category_two_pair() {
    let e = eval("Jm Jd 3c 3h 9s Km 2d");
    assert_eq!(e.category, Category::TwoPair);
    assert_eq!(e.top, card("Jd"));
}

#[test]
fn category_pair() {
    let e = eval("Am Ad 9c 7h 5s 3m 2d");
    assert_eq!(e.category, Category::Pair);
    assert_eq!(e.top, card("Ad"));
}

#[test]
fn category_high_card() {
    let e = eval("Ah Kd 9s 7c 5d 3m 2h");
    assert_eq!(e.category, Category::HighCard);
    assert_eq!(e.top, card("Ah"));
    assert_eq!(e.tiebreak(), 73);
}

#[test]
fn five_of_a_kind_beats_straight_flush_and_quads() {
    let five = eval("7m 7d 7c 7h 7s");
    assert!(five > eval("As Ks Qs Js Ts"));
    assert!(five > eval("Am Ad Ac Ah Ks"));
}

#[test]
fn drains_rank_between_flush_and_quads() {
    let flush = eval("Ah Kh Qh 9h 3h");
    let fh_drain = eval("2m 2d 2c 3h 3s");
    let st_drain = eval("6m 5d 4c 3h 2s");
    let quads = eval("2m 2d 2c 2h 3s");
    let full_house = eval("Am Ad Ac Kh Km");
    assert!(full_house < flush);
    assert!(flush < fh_drain);
    assert!(fh_drain < st_drain);
    assert!(st_drain < quads);
}

#[test]
fn straight_flush_wins_over_a_drain_on_the_same_cards() {
    let e = eval("9h 8h 7h 6h 5h 9m 8d");
    assert_eq!(e.category, Category::StraightFlush);
}

#[test]
fn same_category_compares_by_top_card_order_value() {
    // King of spades (69) against ace of diamonds (71).
    let king = eval("Ks Kd 9c 5h 2m");
    let ace = eval("Am Ad 9c 5h 2s");
    assert_eq!(king.category, ace.category);
    assert!(ace > king);
    assert_eq!(king.tiebreak(), 69);
    assert_eq!(ace.tiebreak(), 71);
}

#[test]
fn shared_board_flush_ties() {
    let board: Board = "Am Qm 9m 6m 3m".parse().unwrap();
    let a: HoleCards = "2d 4c".parse().unwrap();
    let b: HoleCards = "2c 4d".parse().unwrap();
    let ra = evaluate_hand(&a, &board).unwrap();
    assert_eq!(ra.category, Category::Flush);
    assert_eq!(ra.tiebreak(), 70);
    assert_eq!(compare_hands(&a, &b, &board).unwrap(), Ordering::Equal);
}

#[test]
fn preflop_hands_evaluate_without_a_board() {
    let hole: HoleCards = "Jm Jd".parse().unwrap();
    let rank = evaluate_hand(&hole, &Board::default()).unwrap();
    assert_eq!(rank.category, Category::Pair);
    assert_eq!(rank.top, card("Jd"));
}
