use crate::cards::Card;
use crate::hand::HoleCards;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a player, kept across reconnects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) chips: u64,
    pub(crate) hole: Option<HoleCards>,
    /// Hole cards shown to the table at showdown.
    pub(crate) revealed: Vec<Card>,
    pub(crate) connected: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), chips: 0, hole: None, revealed: Vec::new(), connected: true }
    }

    /// Returns the player's id
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's chip stack
    pub fn chips(&self) -> u64 {
        self.chips
    }

    /// Returns the player's private hole cards, if dealt in
    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    /// Returns the cards this player has shown to the table
    pub fn revealed(&self) -> &[Card] {
        &self.revealed
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// All-in or busted.
    pub fn is_broke(&self) -> bool {
        self.chips == 0
    }

    /// Move up to `amount` chips out of the stack; returns what was taken.
    pub(crate) fn take_chips(&mut self, amount: u64) -> u64 {
        let paid = self.chips.min(amount);
        self.chips -= paid;
        paid
    }

    pub(crate) fn clear_cards(&mut self) {
        self.hole = None;
        self.revealed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_chips_caps_at_stack() {
        let mut p = Player::new(PlayerId(1), "ana");
        p.chips = 30;
        assert_eq!(p.take_chips(50), 30);
        assert!(p.is_broke());
        assert_eq!(p.take_chips(10), 0);
    }

    #[test]
    fn id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&PlayerId(7)).unwrap(), "7");
        assert_eq!(PlayerId(7).to_string(), "#7");
    }
}
