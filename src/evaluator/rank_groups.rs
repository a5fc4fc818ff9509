use crate::cards::{Card, Rank};

/// Cards of one rank, highest suit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    pub rank: Rank,
    pub cards: Vec<Card>,
}

impl RankGroup {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Highest order value card of the group.
    pub fn top(&self) -> Card {
        self.cards[0]
    }
}

/// Groups cards by rank, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<RankGroup>,
}

impl RankGroups {
    /// Build groups from cards already sorted in descending order.
    pub fn from_sorted(cards_desc: &[Card]) -> Self {
        let mut groups: Vec<RankGroup> = Vec::new();
        for &card in cards_desc {
            match groups.last_mut() {
                Some(g) if g.rank == card.rank() => g.cards.push(card),
                _ => groups.push(RankGroup { rank: card.rank(), cards: vec![card] }),
            }
        }
        // stable sort keeps rank-descending order within equal counts
        groups.sort_by(|a, b| b.count().cmp(&a.count()));
        Self { groups }
    }

    /// First group (most frequent, then highest) holding at least `n` cards.
    pub fn at_least(&self, n: usize) -> Option<&RankGroup> {
        self.groups.iter().find(|g| g.count() >= n)
    }

    /// All groups holding at least `n` cards, in descending rank order.
    pub fn all_at_least(&self, n: usize) -> Vec<&RankGroup> {
        let mut out: Vec<&RankGroup> = self.groups.iter().filter(|g| g.count() >= n).collect();
        out.sort_by(|a, b| b.rank.cmp(&a.rank));
        out
    }

    /// Cards of the given rank, or an empty slice.
    pub fn cards_of(&self, rank: Rank) -> &[Card] {
        self.groups.iter().find(|g| g.rank == rank).map(|g| g.cards.as_slice()).unwrap_or(&[])
    }

    /// Top card of a trips-or-better group plus a different rank with a pair or better.
    pub fn full_house(&self) -> Option<Card> {
        let trips = self.at_least(3)?;
        self.groups
            .iter()
            .any(|g| g.rank != trips.rank && g.count() >= 2)
            .then(|| trips.top())
    }

    /// Top card of the higher pair when two distinct ranks are paired.
    pub fn two_pair(&self) -> Option<Card> {
        let pairs = self.all_at_least(2);
        if pairs.len() >= 2 {
            Some(pairs[0].top())
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[RankGroup] {
        &self.groups
    }
}
