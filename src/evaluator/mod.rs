//! Hand ranking for the five-suit deck.
//!
//! A hand is ranked as `(category, top card)`. Besides the usual categories the
//! five-suit deck adds two "drain" categories that pay for using all five suits.

pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::{validate_hand, Board, HandError, HoleCards};
use core::cmp::Ordering;
use detector::DETECTORS;
use hand_analysis::HandAnalysis;
use serde::Serialize;
use std::collections::HashSet;

/// Most cards a single evaluation accepts: two hole cards plus a full board.
pub const MAX_CARDS: usize = 7;

/// Hand category from weakest (1) to strongest (12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    FullHouse = 6,
    Flush = 7,
    FullHouseDrain = 8,
    StraightDrain = 9,
    FourOfAKind = 10,
    StraightFlush = 11,
    FiveOfAKind = 12,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn is_drain(self) -> bool {
        matches!(self, Category::FullHouseDrain | Category::StraightDrain)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::FullHouse => "Full house",
            Category::Flush => "Flush",
            Category::FullHouseDrain => "Full house drain",
            Category::StraightDrain => "Straight drain",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
            Category::FiveOfAKind => "Five of a kind",
        }
    }
}

/// Ranking of a hand. Ordering is lexicographic on `(category, top)`, and since
/// cards order by their order value this equals ordering by
/// `(category, tiebreak())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HandRank {
    pub category: Category,
    /// The card whose order value breaks ties within the category.
    pub top: Card,
}

impl HandRank {
    pub const fn new(category: Category, top: Card) -> Self {
        Self { category, top }
    }

    /// Order value of the deciding card.
    pub const fn tiebreak(&self) -> u8 {
        self.top.order_value()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("not enough cards to evaluate")]
    NotEnoughCards,
    #[error("too many cards to evaluate: {0}")]
    TooManyCards(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Rank up to seven distinct cards.
///
/// ```
/// use five_suits::cards::parse_cards;
/// use five_suits::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("9m 8d 7c 6h 5s Kd 2d").unwrap();
/// let rank = evaluate(&cards).unwrap();
/// assert_eq!(rank.category, Category::StraightDrain);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EvalError> {
    if cards.len() > MAX_CARDS {
        return Err(EvalError::TooManyCards(cards.len()));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(EvalError::DuplicateCard(*dup));
    }

    let analysis = HandAnalysis::new(cards);
    DETECTORS
        .iter()
        .find_map(|d| d.detect(&analysis).map(|top| HandRank::new(d.category(), top)))
        // Only an empty hand has no high card.
        .ok_or(EvalError::NotEnoughCards)
}

/// Rank hole cards together with the community cards dealt so far.
pub fn evaluate_hand(hole: &HoleCards, board: &Board) -> Result<HandRank, EvalError> {
    validate_hand(hole, board)?;
    let mut cards = Vec::with_capacity(2 + board.len());
    cards.extend_from_slice(&hole.as_array());
    cards.extend_from_slice(board.as_slice());
    evaluate(&cards)
}

/// Compare two holdings on a shared board.
///
/// ```
/// use five_suits::evaluator::compare_hands;
/// use five_suits::hand::{Board, HoleCards};
/// use std::cmp::Ordering;
///
/// let board: Board = "Qm Jd 9h 3s 2c".parse().unwrap();
/// let a: HoleCards = "Am Ad".parse().unwrap();
/// let b: HoleCards = "Km Kd".parse().unwrap();
/// assert_eq!(compare_hands(&a, &b, &board).unwrap(), Ordering::Greater);
/// ```
pub fn compare_hands(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let ra = evaluate_hand(a, board)?;
    let rb = evaluate_hand(b, board)?;
    Ok(ra.cmp(&rb))
}
