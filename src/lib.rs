//! five-suits: engine for five-suit poker
//!
//! The deck has 65 cards: thirteen ranks in five suits (moons, diamonds,
//! clubs, hearts, spades). Besides the usual hand categories, two "drain"
//! categories reward five cards that use all five suits.
//!
//! Goals:
//! - Deterministic evaluation and betting, reproducible from a seed
//! - No blocking: timers go through a [`timer::Scheduler`] the host drives
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: rank a hand
//! ```
//! use five_suits::evaluator::{evaluate_hand, Category};
//! use five_suits::hand::{Board, HoleCards};
//!
//! let hole: HoleCards = "Jm Jd".parse().unwrap();
//! let board: Board = "Jc 4h 4s 9d 2m".parse().unwrap();
//!
//! let rank = evaluate_hand(&hole, &board).unwrap();
//! assert_eq!(rank.category, Category::FullHouseDrain);
//! ```
//!
//! ## Quick start: play a hand on a virtual clock
//! ```
//! use five_suits::config::RoomConfig;
//! use five_suits::game::{Action, Game, Phase};
//! use five_suits::player::{Player, PlayerId};
//! use five_suits::timer::ManualScheduler;
//! use std::time::Duration;
//!
//! let players = vec![Player::new(PlayerId(1), "ana"), Player::new(PlayerId(2), "bo")];
//! let mut game = Game::with_seed(players, RoomConfig::default(), ManualScheduler::new(), 42).unwrap();
//! let first = game.player_on_turn().unwrap();
//! assert!(game.handle_action(first, Action::Fold).is_applied());
//! assert_eq!(game.phase(), Phase::PreHand);
//!
//! game.advance(Duration::from_secs(5));
//! assert_eq!(game.hand_number(), 2);
//! ```

pub mod agents;
pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod player;
pub mod room;
pub mod timer;
pub mod view;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
