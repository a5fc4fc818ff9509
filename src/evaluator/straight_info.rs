use crate::cards::Rank;

/// Five consecutive ranks, highest first. For the wheel the ace sits last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightWindow {
    pub ranks: [Rank; 5],
}

impl StraightWindow {
    pub fn top_rank(&self) -> Rank {
        self.ranks[0]
    }
}

/// Every straight window present among the ranks of a hand, best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StraightInfo {
    pub windows: Vec<StraightWindow>,
}

impl StraightInfo {
    /// Detect straights from any number of ranks (duplicates allowed).
    /// Windows run from ace-high down to six-high, then the wheel (5-4-3-2-A).
    pub fn detect(ranks: &[Rank]) -> Self {
        let mut present = [false; 15];
        for r in ranks {
            present[r.value() as usize] = true;
        }
        let mut windows = Vec::new();
        for top in (6..=14u8).rev() {
            if (0..5).all(|i| present[(top - i) as usize]) {
                let ranks = [0u8, 1, 2, 3, 4].map(|i| rank_of(top - i));
                windows.push(StraightWindow { ranks });
            }
        }
        if present[14] && (2..=5).all(|v| present[v]) {
            windows.push(StraightWindow {
                ranks: [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace],
            });
        }
        Self { windows }
    }

    pub fn is_straight(&self) -> bool {
        !self.windows.is_empty()
    }

    pub fn best(&self) -> Option<&StraightWindow> {
        self.windows.first()
    }
}

fn rank_of(v: u8) -> Rank {
    match v {
        2 => Rank::Two,
        3 => Rank::Three,
        4 => Rank::Four,
        5 => Rank::Five,
        6 => Rank::Six,
        7 => Rank::Seven,
        8 => Rank::Eight,
        9 => Rank::Nine,
        10 => Rank::Ten,
        11 => Rank::Jack,
        12 => Rank::Queen,
        13 => Rank::King,
        _ => Rank::Ace,
    }
}
