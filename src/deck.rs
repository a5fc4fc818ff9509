use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Cards in one five-suit deck: 13 ranks x 5 suits.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::COUNT;

/// A single 65-card five-suit deck. Cards are drawn from the end of the
/// shuffled sequence and only come back on [`Deck::reset`].
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh, unshuffled deck.
    ///
    /// ```
    /// use five_suits::deck::Deck;
    ///
    /// let deck = Deck::ordered();
    /// assert_eq!(deck.remaining(), 65);
    /// ```
    pub fn ordered() -> Self {
        let mut deck = Self { cards: Vec::with_capacity(DECK_SIZE) };
        deck.refill();
        deck
    }

    fn refill(&mut self) {
        self.cards.clear();
        for r in Rank::ALL {
            for s in Suit::ALL {
                self.cards.push(Card::new(r, s));
            }
        }
    }

    /// Repopulate with all 65 cards and shuffle them (Fisher-Yates).
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.refill();
        self.cards.shuffle(rng);
    }

    /// Repopulate and shuffle using a seeded RNG for reproducibility.
    pub fn reset_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.reset(&mut rng);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw one card from the top of the deck; `None` once exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}
