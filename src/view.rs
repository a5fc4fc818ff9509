//! Replicated table state.
//!
//! [`GameSnapshot`] is the full server-side picture; [`TableView`] is what one
//! viewer may see. Only the viewer's own hole cards survive the projection;
//! everyone else's are visible only once revealed at showdown.

use crate::cards::Card;
use crate::game::{Game, HandResult, Phase};
use crate::player::PlayerId;
use crate::timer::Scheduler;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatSnapshot {
    pub seat: usize,
    pub player: PlayerId,
    pub name: String,
    pub chips: u64,
    pub bet: u64,
    pub folded: bool,
    pub connected: bool,
    /// Private hole cards; `None` when not dealt in or hidden from the viewer.
    pub hole: Option<[Card; 2]>,
    /// Cards shown to the whole table.
    pub public_cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub hand: u64,
    pub phase: Phase,
    pub pot: u64,
    pub current_bet: u64,
    pub board: Vec<Card>,
    pub seats: Vec<SeatSnapshot>,
    pub turn: Option<usize>,
    pub dealer: usize,
    pub closing_index: usize,
    pub finished: bool,
    pub last_result: Option<HandResult>,
}

/// A snapshot as one player is allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub viewer: PlayerId,
    /// The viewer's seat, `None` for spectators.
    pub seat: Option<usize>,
    pub state: GameSnapshot,
}

impl GameSnapshot {
    /// Hide every hole card that does not belong to `viewer`.
    pub fn project(mut self, viewer: PlayerId) -> TableView {
        let mut seat = None;
        for s in &mut self.seats {
            if s.player == viewer {
                seat = Some(s.seat);
            } else {
                s.hole = None;
            }
        }
        TableView { viewer, seat, state: self }
    }
}

impl TableView {
    pub fn my_seat(&self) -> Option<&SeatSnapshot> {
        self.seat.and_then(|i| self.state.seats.get(i))
    }

    pub fn is_my_turn(&self) -> bool {
        self.seat.is_some() && self.state.turn == self.seat
    }

    /// Chips the viewer must add to stay in.
    pub fn to_call(&self) -> u64 {
        self.my_seat().map_or(0, |s| self.state.current_bet.saturating_sub(s.bet))
    }
}

impl<S: Scheduler> Game<S> {
    pub fn snapshot(&self) -> GameSnapshot {
        let seats = self
            .players()
            .iter()
            .zip(self.seats())
            .enumerate()
            .map(|(i, (p, s))| SeatSnapshot {
                seat: i,
                player: p.id(),
                name: p.name().to_string(),
                chips: p.chips(),
                bet: s.bet(),
                folded: s.is_folded(),
                connected: p.is_connected(),
                hole: p.hole().map(|h| h.as_array()),
                public_cards: p.revealed().to_vec(),
            })
            .collect();
        GameSnapshot {
            hand: self.hand_number(),
            phase: self.phase(),
            pot: self.pot(),
            current_bet: self.current_bet(),
            board: self.board().as_slice().to_vec(),
            seats,
            turn: self.turn(),
            dealer: self.dealer(),
            closing_index: self.closing_index(),
            finished: self.is_finished(),
            last_result: self.last_result().cloned(),
        }
    }

    pub fn view_for(&self, viewer: PlayerId) -> TableView {
        self.snapshot().project(viewer)
    }
}
