use crate::cards::{Card, Suit};

/// Cards grouped by suit, each group highest card first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitInfo {
    by_suit: [Vec<Card>; Suit::COUNT],
}

impl SuitInfo {
    /// Group cards already sorted in descending order.
    pub fn from_sorted(cards_desc: &[Card]) -> Self {
        let mut by_suit: [Vec<Card>; Suit::COUNT] = Default::default();
        for &card in cards_desc {
            by_suit[card.suit().index() as usize].push(card);
        }
        Self { by_suit }
    }

    /// Number of distinct suits present.
    pub fn distinct(&self) -> usize {
        self.by_suit.iter().filter(|v| !v.is_empty()).count()
    }

    /// Highest card of a suit holding five or more cards. With seven cards at
    /// most one suit can qualify; ties would go to the higher top card.
    pub fn flush(&self) -> Option<Card> {
        self.by_suit.iter().filter(|v| v.len() >= 5).map(|v| v[0]).max()
    }
}
