use super::hand_analysis::HandAnalysis;
use crate::cards::Card;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognises one category and names its deciding card.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    /// The tiebreak card if the analysed hand belongs to this category.
    fn detect(&self, analysis: &HandAnalysis) -> Option<Card>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Five of a Kind: one rank in five suits
pub struct FiveOfAKindDetector;

impl CategoryDetector for FiveOfAKindDetector {
    fn category(&self) -> Category {
        Category::FiveOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.rank_groups.at_least(5).map(|g| g.top())
    }
}

/// Straight Flush: five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.straight_flush()
    }
}

/// Four of a Kind
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.rank_groups.at_least(4).map(|g| g.top())
    }
}

/// Straight Drain: five consecutive ranks in five different suits
pub struct StraightDrainDetector;

impl CategoryDetector for StraightDrainDetector {
    fn category(&self) -> Category {
        Category::StraightDrain
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.straight_drain()
    }
}

/// Full House Drain: trips plus a pair covering all five suits
pub struct FullHouseDrainDetector;

impl CategoryDetector for FullHouseDrainDetector {
    fn category(&self) -> Category {
        Category::FullHouseDrain
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.full_house_drain()
    }
}

/// Flush: five cards of one suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.suit_info.flush()
    }
}

/// Full House: three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.rank_groups.full_house()
    }
}

/// Straight: five consecutive ranks
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.straight()
    }
}

/// Three of a Kind
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.rank_groups.at_least(3).map(|g| g.top())
    }
}

/// Two Pair
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.rank_groups.two_pair()
    }
}

/// One Pair
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.rank_groups.at_least(2).map(|g| g.top())
    }
}

/// High Card: fallback
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Card> {
        analysis.high_card()
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 12] = [
    &FiveOfAKindDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &StraightDrainDetector,
    &FullHouseDrainDetector,
    &FlushDetector,
    &FullHouseDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        HandAnalysis::new(&parse_cards(s).unwrap())
    }

    #[test]
    fn detectors_listed_strongest_first() {
        let cats: Vec<Category> = DETECTORS.iter().map(|d| d.category()).collect();
        let mut sorted = cats.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        // flush sits above full house in this deck, so priority order is strictly descending
        assert_eq!(cats, sorted);
    }

    #[test]
    fn five_of_a_kind_detector() {
        let a = analyze("7m 7d 7c 7h 7s");
        assert_eq!(FiveOfAKindDetector.detect(&a).map(|c| c.to_string()), Some("7s".into()));
        assert!(FourOfAKindDetector.detect(&a).is_some());
    }

    #[test]
    fn straight_flush_also_matches_flush_and_straight() {
        let a = analyze("9h 8h 7h 6h 5h");
        assert!(StraightFlushDetector.detect(&a).is_some());
        assert!(FlushDetector.detect(&a).is_some());
        assert!(StraightDetector.detect(&a).is_some());
        assert!(StraightDrainDetector.detect(&a).is_none());
    }

    #[test]
    fn drain_detectors_need_five_suits() {
        let a = analyze("9m 8d 7c 6h 5s");
        assert!(StraightDrainDetector.detect(&a).is_some());
        let b = analyze("Jm Jd Jc 2h 2s");
        assert!(FullHouseDrainDetector.detect(&b).is_some());
        assert!(FullHouseDetector.detect(&b).is_some());
    }

    #[test]
    fn pair_detectors() {
        let a = analyze("Am Ad Kc Kh 2s");
        assert_eq!(TwoPairDetector.detect(&a).map(|c| c.to_string()), Some("Ad".into()));
        assert_eq!(OnePairDetector.detect(&a).map(|c| c.to_string()), Some("Ad".into()));
        assert!(ThreeOfAKindDetector.detect(&a).is_none());
    }

    #[test]
    fn high_card_detector_always_matches() {
        let a = analyze("Am 9d 7c 4h 2s");
        assert_eq!(HighCardDetector.detect(&a).map(|c| c.to_string()), Some("Am".into()));
        assert!(OnePairDetector.detect(&a).is_none());
    }
}
