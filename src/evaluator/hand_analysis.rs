use super::combinations::choose;
use super::rank_groups::RankGroups;
use super::straight_info::{StraightInfo, StraightWindow};
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank, Suit};

/// Pre-computed analysis of up to seven cards.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Highest order value first.
    pub sorted_cards: Vec<Card>,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort_by(|a, b| b.cmp(a));

        let ranks: Vec<Rank> = sorted_cards.iter().map(|c| c.rank()).collect();
        let rank_groups = RankGroups::from_sorted(&sorted_cards);
        let suit_info = SuitInfo::from_sorted(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, rank_groups, suit_info, straight_info }
    }

    /// Highest card overall.
    pub fn high_card(&self) -> Option<Card> {
        self.sorted_cards.first().copied()
    }

    /// Best straight window whose five ranks are all present in a single suit.
    /// Returns that suit's card of the top rank.
    pub fn straight_flush(&self) -> Option<Card> {
        self.straight_info.windows.iter().find_map(|w| {
            Suit::ALL
                .iter()
                .rev()
                .find(|&&s| w.ranks.iter().all(|&r| self.has(r, s)))
                .map(|&s| Card::new(w.top_rank(), s))
        })
    }

    /// Best straight window that can be formed with five distinct suits.
    /// Returns the highest top-rank card that takes part in such a choice.
    pub fn straight_drain(&self) -> Option<Card> {
        self.straight_info.windows.iter().find_map(|w| self.distinct_suit_top(w))
    }

    /// Best plain straight; the top card is the highest card of the top rank.
    pub fn straight(&self) -> Option<Card> {
        let w = self.straight_info.best()?;
        self.rank_groups.cards_of(w.top_rank()).first().copied()
    }

    /// A triple and a pair of different ranks that together cover all five suits.
    /// Triple ranks are tried high to low; the triple's top card is returned.
    pub fn full_house_drain(&self) -> Option<Card> {
        let triples = self.rank_groups.all_at_least(3);
        let pairs = self.rank_groups.all_at_least(2);
        for triple in &triples {
            for pair in pairs.iter().filter(|p| p.rank != triple.rank) {
                for three in choose(&triple.cards, 3) {
                    let Some(used) = suit_mask(&three) else { continue };
                    let fits = choose(&pair.cards, 2)
                        .any(|two| suit_mask(&two).is_some_and(|m| m & used == 0));
                    if fits {
                        return Some(three[0]);
                    }
                }
            }
        }
        None
    }

    fn has(&self, rank: Rank, suit: Suit) -> bool {
        self.rank_groups.cards_of(rank).iter().any(|c| c.suit() == suit)
    }

    fn distinct_suit_top(&self, window: &StraightWindow) -> Option<Card> {
        let top_cards = self.rank_groups.cards_of(window.top_rank());
        top_cards.iter().copied().find(|top| {
            let used = 1u8 << top.suit().index();
            self.assign_suits(&window.ranks[1..], used)
        })
    }

    /// Can one card per rank be picked so that no suit in `used` repeats?
    fn assign_suits(&self, ranks: &[Rank], used: u8) -> bool {
        let Some((&rank, rest)) = ranks.split_first() else {
            return true;
        };
        self.rank_groups.cards_of(rank).iter().any(|c| {
            let bit = 1u8 << c.suit().index();
            used & bit == 0 && self.assign_suits(rest, used | bit)
        })
    }
}

/// Bitmask of suits, or `None` if any suit repeats.
fn suit_mask(cards: &[Card]) -> Option<u8> {
    let mut mask = 0u8;
    for c in cards {
        let bit = 1u8 << c.suit().index();
        if mask & bit != 0 {
            return None;
        }
        mask |= bit;
    }
    Some(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        HandAnalysis::new(&parse_cards(s).unwrap())
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn cards_sorted_descending() {
        let a = analyze("3s Ah 5d Kc 9s");
        let ranks: Vec<Rank> = a.sorted_cards.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::King, Rank::Nine, Rank::Five, Rank::Three]);
        assert_eq!(a.high_card(), Some(card("Ah")));
    }

    #[test]
    fn straight_flush_found_below_a_higher_plain_straight() {
        // 9-high straight flush in hearts, plus a 10 making a 10-high plain straight
        let a = analyze("5h 6h 7h 8h 9h Tm 2d");
        assert_eq!(a.straight(), Some(card("Tm")));
        assert_eq!(a.straight_flush(), Some(card("9h")));
    }

    #[test]
    fn straight_drain_picks_distinct_suits_from_duplicates() {
        // The 7s are needed in clubs, not moons, to free the moon suit for the 5
        let a = analyze("9d 8h 7m 7c 6s 5m");
        assert_eq!(a.straight_drain(), Some(card("9d")));
    }

    #[test]
    fn straight_with_repeated_suit_is_not_a_drain() {
        let a = analyze("9d 8h 7c 6s 5d");
        assert!(a.straight().is_some());
        assert_eq!(a.straight_drain(), None);
    }

    #[test]
    fn straight_drain_prefers_highest_usable_top_card() {
        // Ts would clash with the only six (a spade); Th is usable
        let a = analyze("Ts Th 9d 8c 7m 6s");
        assert_eq!(a.straight_drain(), Some(card("Th")));
    }

    #[test]
    fn wheel_drain() {
        let a = analyze("Am 2d 3c 4h 5s");
        assert_eq!(a.straight_drain(), Some(card("5s")));
    }

    #[test]
    fn full_house_drain_spans_five_suits() {
        let a = analyze("Km Kd Kc 4h 4s");
        assert_eq!(a.full_house_drain(), Some(card("Kc")));
    }

    #[test]
    fn full_house_with_shared_suit_is_not_a_drain() {
        let a = analyze("Km Kd Kc 4h 4m");
        assert!(a.rank_groups.full_house().is_some());
        assert_eq!(a.full_house_drain(), None);
    }

    #[test]
    fn full_house_drain_chooses_triple_subset() {
        // Four queens: every triple holding the spade clashes with the 3s
        let a = analyze("Qm Qd Qc Qs 3h 3s");
        assert_eq!(a.full_house_drain(), Some(card("Qc")));
    }

    #[test]
    fn full_house_drain_tries_lower_pair_ranks() {
        // Kings repeat the moon of the aces; sevens fill hearts and spades
        let a = analyze("Am Ad Ac Km Kh 7h 7s");
        assert_eq!(a.full_house_drain(), Some(card("Ac")));
    }
}
