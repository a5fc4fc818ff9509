//! Betting state machine and hand lifecycle for one table.
//!
//! A [`Game`] owns the seats, deck, and betting state of a running session and
//! moves strictly forward through [`Phase`]s. It never blocks: delays (turn
//! expiry, the pause before dealing the next street, the pause between hands)
//! are handed to a [`Scheduler`], and the host feeds fired events back through
//! [`Game::on_timer`]. All mutation goes through `&mut self`; callers serialize.

use crate::cards::Card;
use crate::config::{ConfigError, MinRaise, RoomConfig};
use crate::deck::{Deck, DECK_SIZE};
use crate::evaluator::{evaluate_hand, HandRank};
use crate::hand::{Board, HoleCards, MAX_BOARD};
use crate::player::{Player, PlayerId};
use crate::timer::{ManualScheduler, Scheduler, TimerEvent, TimerId};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;

/// Cards a hand uses besides hole cards: the board plus one burn per street.
const BOARD_AND_BURNS: usize = MAX_BOARD + 3;

/// Largest table one deck can deal to.
pub const MAX_SEATS: usize = (DECK_SIZE - BOARD_AND_BURNS) / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    PreHand,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    /// Community cards on the table in this phase.
    pub fn board_len(self) -> usize {
        match self {
            Phase::PreHand | Phase::PreFlop => 0,
            Phase::Flop => 3,
            Phase::Turn => 4,
            Phase::River | Phase::Showdown => 5,
        }
    }

    pub fn is_betting(self) -> bool {
        matches!(self, Phase::PreFlop | Phase::Flop | Phase::Turn | Phase::River)
    }
}

/// A player decision. `Raise` carries the new total bet for the phase, not the increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Call,
    Raise(u64),
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Call,
    Raise,
    Check,
}

/// Wire form of an action: `{"action": "raise", "amount": 300}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionParseError {
    #[error("malformed action request: {0}")]
    Malformed(String),
    #[error("raise requires an amount")]
    MissingAmount,
}

impl TryFrom<ActionRequest> for Action {
    type Error = ActionParseError;
    fn try_from(req: ActionRequest) -> Result<Self, Self::Error> {
        Ok(match req.action {
            ActionKind::Fold => Action::Fold,
            ActionKind::Call => Action::Call,
            ActionKind::Check => Action::Check,
            ActionKind::Raise => Action::Raise(req.amount.ok_or(ActionParseError::MissingAmount)?),
        })
    }
}

impl From<Action> for ActionRequest {
    fn from(action: Action) -> Self {
        match action {
            Action::Fold => ActionRequest { action: ActionKind::Fold, amount: None },
            Action::Call => ActionRequest { action: ActionKind::Call, amount: None },
            Action::Check => ActionRequest { action: ActionKind::Check, amount: None },
            Action::Raise(to) => ActionRequest { action: ActionKind::Raise, amount: Some(to) },
        }
    }
}

/// Parse the JSON wire form.
///
/// ```
/// use five_suits::game::Action;
///
/// let a: Action = r#"{"action":"raise","amount":300}"#.parse().unwrap();
/// assert_eq!(a, Action::Raise(300));
/// assert!(r#"{"action":"raise"}"#.parse::<Action>().is_err());
/// ```
impl FromStr for Action {
    type Err = ActionParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let req: ActionRequest =
            serde_json::from_str(s).map_err(|e| ActionParseError::Malformed(e.to_string()))?;
        Action::try_from(req)
    }
}

/// Why an action was refused. Refusals change nothing and are only logged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rejection {
    #[error("player {0} is not seated")]
    NotSeated(PlayerId),
    #[error("not this player's turn")]
    NotYourTurn,
    #[error("cannot check facing a bet of {to_call}")]
    FacingBet { to_call: u64 },
    #[error("raise must exceed current bet: current {current}, target {target}")]
    TargetTooLow { current: u64, target: u64 },
    #[error("cannot afford raise: need {needed}, have {chips}")]
    CannotAfford { needed: u64, chips: u64 },
    #[error("raise too small: min {min}, got {got}")]
    BelowMinRaise { min: u64, got: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    Rejected(Rejection),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("need at least 2 players, got {0}")]
    NotEnoughPlayers(usize),
    #[error("at most {MAX_SEATS} players fit one deck, got {0}")]
    TooManyPlayers(usize),
    #[error("player {0} is listed twice")]
    DuplicatePlayer(PlayerId),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum HandHistoryVerb {
    SmallBlind,
    BigBlind,
    Fold,
    TimeoutFold,
    Check,
    Call,
    RaiseTo,
    Win,
    Split,
}

impl HandHistoryVerb {
    pub fn label(self) -> &'static str {
        match self {
            HandHistoryVerb::SmallBlind => "SB",
            HandHistoryVerb::BigBlind => "BB",
            HandHistoryVerb::Fold => "Fold",
            HandHistoryVerb::TimeoutFold => "Fold (timeout)",
            HandHistoryVerb::Check => "Check",
            HandHistoryVerb::Call => "Call",
            HandHistoryVerb::RaiseTo => "Raise to",
            HandHistoryVerb::Win => "Win",
            HandHistoryVerb::Split => "Split",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct HandHistoryEntry {
    pub seat: usize,
    pub verb: HandHistoryVerb,
    pub amount: Option<u64>,
    pub phase: Phase,
}

/// Per-seat betting state for the current hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatState {
    pub(crate) bet: u64,
    pub(crate) folded: bool,
    pub(crate) acted: bool,
}

impl SeatState {
    /// Chips committed in the current phase
    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Folded this hand, or sitting out with no chips
    pub fn is_folded(&self) -> bool {
        self.folded
    }

    /// Acted voluntarily in the current phase
    pub fn has_acted(&self) -> bool {
        self.acted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payout {
    pub seat: usize,
    pub player: PlayerId,
    pub amount: u64,
}

/// A hand revealed and ranked at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShownHand {
    pub seat: usize,
    pub player: PlayerId,
    pub cards: [Card; 2],
    pub rank: HandRank,
}

/// How the last hand ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandResult {
    pub hand: u64,
    pub board: Vec<Card>,
    /// Winners in seat order starting after the dealer.
    pub payouts: Vec<Payout>,
    /// Empty when everyone else folded.
    pub shown: Vec<ShownHand>,
    pub showdown: bool,
}

impl HandResult {
    pub fn winners(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.payouts.iter().map(|p| p.player)
    }
}

#[derive(Debug)]
pub struct Game<S: Scheduler> {
    config: RoomConfig,
    scheduler: S,
    rng: ChaCha8Rng,
    deck: Deck,
    /// Seat order, fixed when the game is created.
    players: Vec<Player>,
    seats: Vec<SeatState>,
    phase: Phase,
    board: Board,
    pot: u64,
    current_bet: u64,
    dealer: usize,
    turn: Option<usize>,
    /// Seat whose matched action closes the phase: the big blind pre-flop,
    /// the last raiser, or the first seat after the dealer.
    closing: usize,
    hand: u64,
    /// Bumped whenever a timer is armed; fired events must carry the current value.
    generation: u64,
    turn_timer: Option<TimerId>,
    awaiting_next_hand: bool,
    finished: bool,
    last_result: Option<HandResult>,
    history: Vec<HandHistoryEntry>,
}

impl<S: Scheduler> Game<S> {
    /// Seat the players in a random order and deal the first hand.
    pub fn new(players: Vec<Player>, config: RoomConfig, scheduler: S) -> Result<Self, GameError> {
        let seed: u64 = rand::rng().random();
        Self::with_seed(players, config, scheduler, seed)
    }

    /// Like [`Game::new`], reproducible for a given seed.
    pub fn with_seed(
        mut players: Vec<Player>,
        config: RoomConfig,
        scheduler: S,
        seed: u64,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers(players.len()));
        }
        if players.len() > MAX_SEATS {
            return Err(GameError::TooManyPlayers(players.len()));
        }
        let mut seen = HashSet::with_capacity(players.len());
        if let Some(dup) = players.iter().find(|p| !seen.insert(p.id)) {
            return Err(GameError::DuplicatePlayer(dup.id));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for p in &mut players {
            p.chips = config.starting_chips;
            p.clear_cards();
        }
        players.shuffle(&mut rng);
        let n = players.len();

        let mut game = Self {
            config,
            scheduler,
            rng,
            deck: Deck::ordered(),
            players,
            seats: vec![SeatState::default(); n],
            phase: Phase::PreHand,
            board: Board::default(),
            pot: 0,
            current_bet: 0,
            // First hand moves the button to seat 0.
            dealer: n - 1,
            turn: None,
            closing: 0,
            hand: 0,
            generation: 0,
            turn_timer: None,
            awaiting_next_hand: false,
            finished: false,
            last_result: None,
            history: Vec::new(),
        };
        game.start_hand();
        Ok(game)
    }

    /// Returns the room configuration the game runs with
    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Returns the players in seat order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the betting state of every seat
    pub fn seats(&self) -> &[SeatState] {
        &self.seats
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the community cards dealt so far
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// Seat awaited to act, `None` between phases and hands
    pub fn turn(&self) -> Option<usize> {
        self.turn
    }

    pub fn closing_index(&self) -> usize {
        self.closing
    }

    /// Number of the current (or last) hand, starting at 1
    pub fn hand_number(&self) -> u64 {
        self.hand
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once fewer than two seats have chips; no further hand is dealt
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn last_result(&self) -> Option<&HandResult> {
        self.last_result.as_ref()
    }

    /// Returns the actions of the current hand, oldest first
    pub fn history(&self) -> &[HandHistoryEntry] {
        &self.history
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn seat_of(&self, player: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == player)
    }

    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player)
    }

    pub fn player_on_turn(&self) -> Option<PlayerId> {
        self.turn.map(|seat| self.players[seat].id)
    }

    /// Chips the seat must add to match the current bet
    pub fn to_call(&self, seat: usize) -> u64 {
        self.seats.get(seat).map_or(0, |s| self.current_bet.saturating_sub(s.bet))
    }

    /// Chips in stacks plus the pot; constant for the life of the game
    pub fn total_chips(&self) -> u64 {
        self.players.iter().map(|p| p.chips).sum::<u64>() + self.pot
    }

    /// Flag a player as (dis)connected. A disconnected player stays seated and
    /// any running turn timer is left alone, so they fold when it fires.
    pub fn set_connected(&mut self, player: PlayerId, connected: bool) -> bool {
        let Some(seat) = self.seat_of(player) else {
            return false;
        };
        self.players[seat].connected = connected;
        log::debug!("hand {}: {} {}", self.hand, player, if connected { "reconnected" } else { "disconnected" });
        true
    }

    /// Submit an action for `player`. Invalid actions change nothing, including
    /// the pending turn timer.
    pub fn handle_action(&mut self, player: PlayerId, action: Action) -> ActionOutcome {
        match self.validate(player, action) {
            Ok(seat) => {
                self.cancel_turn_timer();
                self.apply(seat, action, false);
                ActionOutcome::Applied
            }
            Err(reason) => {
                log::trace!("hand {}: rejected {action:?} from {player}: {reason}", self.hand);
                ActionOutcome::Rejected(reason)
            }
        }
    }

    /// Deliver a fired timer. Returns false for events that no longer apply.
    pub fn on_timer(&mut self, event: TimerEvent) -> bool {
        if event.hand() != self.hand {
            log::warn!("hand {}: ignoring {event:?} from an earlier hand", self.hand);
            return false;
        }
        match event {
            TimerEvent::TurnExpired { seat, generation, .. } => {
                if generation != self.generation || self.turn != Some(seat) {
                    log::warn!("hand {}: ignoring stale {event:?}", self.hand);
                    return false;
                }
                self.turn_timer = None;
                self.apply(seat, Action::Fold, true);
            }
            TimerEvent::BettingRoundEnded { generation, .. } => {
                if generation != self.generation || self.turn.is_some() || !self.phase.is_betting() {
                    log::warn!("hand {}: ignoring stale {event:?}", self.hand);
                    return false;
                }
                self.end_betting_round();
            }
            TimerEvent::NextHand { .. } => {
                if !self.awaiting_next_hand {
                    log::warn!("hand {}: ignoring unexpected {event:?}", self.hand);
                    return false;
                }
                self.awaiting_next_hand = false;
                self.start_hand();
            }
        }
        true
    }

    fn start_hand(&mut self) {
        self.cancel_turn_timer();
        self.turn = None;
        self.awaiting_next_hand = false;
        for (p, s) in self.players.iter_mut().zip(&mut self.seats) {
            p.clear_cards();
            // Busted seats sit the hand out.
            *s = SeatState { folded: p.is_broke(), ..SeatState::default() };
        }
        self.board = Board::default();
        self.pot = 0;
        self.current_bet = 0;
        self.history.clear();

        if self.funded_count() < 2 {
            self.phase = Phase::PreHand;
            self.finished = true;
            log::info!("game over after hand {}", self.hand);
            return;
        }

        self.hand += 1;
        self.phase = Phase::PreFlop;
        self.dealer = self.next_dealt_in(self.dealer);
        self.deck.reset(&mut self.rng);
        self.deal_hole_cards();

        let sb = self.next_dealt_in(self.dealer);
        let bb = self.next_dealt_in(sb);
        let (small, big) = (self.config.small_blind(), self.config.blind);
        self.post_blind(sb, small, HandHistoryVerb::SmallBlind);
        self.post_blind(bb, big, HandHistoryVerb::BigBlind);
        self.current_bet = big;
        self.closing = bb;
        log::info!(
            "hand {} dealt: dealer seat {}, blinds {small}/{big} from seats {sb}/{bb}",
            self.hand,
            self.dealer
        );
        self.start_turn((bb + 1) % self.seats.len());
    }

    /// Next seat after `from` that is dealt into the hand.
    fn next_dealt_in(&self, from: usize) -> usize {
        let n = self.seats.len();
        (1..=n).map(|k| (from + k) % n).find(|&i| !self.seats[i].folded).unwrap_or(from)
    }

    /// One card to every seat in turn, starting left of the dealer, twice.
    fn deal_hole_cards(&mut self) {
        let n = self.seats.len();
        let order: Vec<usize> =
            (1..=n).map(|k| (self.dealer + k) % n).filter(|&i| !self.seats[i].folded).collect();
        let first: Vec<Card> = order.iter().map(|_| self.draw()).collect();
        for (&seat, &a) in order.iter().zip(&first) {
            let b = self.draw();
            self.players[seat].hole = Some(HoleCards::dealt(a, b));
        }
    }

    fn draw(&mut self) -> Card {
        match self.deck.draw() {
            Some(card) => card,
            None => panic!("deck exhausted in hand {} with {} seats", self.hand, self.seats.len()),
        }
    }

    fn post_blind(&mut self, seat: usize, amount: u64, verb: HandHistoryVerb) {
        let paid = self.commit(seat, amount);
        self.record(seat, verb, Some(paid));
    }

    /// Move up to `amount` from the seat's stack into the pot.
    fn commit(&mut self, seat: usize, amount: u64) -> u64 {
        let paid = self.players[seat].take_chips(amount);
        self.seats[seat].bet += paid;
        self.pot += paid;
        paid
    }

    fn funded_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_broke()).count()
    }

    fn live_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.folded).count()
    }

    fn is_actionable(&self, seat: usize) -> bool {
        !self.seats[seat].folded && !self.players[seat].is_broke()
    }

    /// The phase is over when every seat that can still bet has acted and
    /// matched the current bet, when nobody can bet, or when the only seat
    /// that can bet already matches.
    fn betting_complete(&self) -> bool {
        let able: Vec<&SeatState> = self
            .seats
            .iter()
            .zip(&self.players)
            .filter(|(s, p)| !s.folded && !p.is_broke())
            .map(|(s, _)| s)
            .collect();
        match able.as_slice() {
            [] => true,
            [only] => only.bet >= self.current_bet,
            many => many.iter().all(|s| s.acted && s.bet == self.current_bet),
        }
    }

    fn start_turn(&mut self, from: usize) {
        if self.betting_complete() {
            self.schedule_round_end();
            return;
        }
        let n = self.seats.len();
        let next = (0..n).map(|k| (from + k) % n).find(|&i| self.is_actionable(i));
        match next {
            Some(seat) => self.arm_turn(seat),
            None => self.schedule_round_end(),
        }
    }

    fn arm_turn(&mut self, seat: usize) {
        self.turn = Some(seat);
        self.generation += 1;
        let event = TimerEvent::TurnExpired { hand: self.hand, seat, generation: self.generation };
        self.turn_timer = Some(self.scheduler.schedule(self.config.turn_duration(), event));
    }

    fn schedule_round_end(&mut self) {
        self.turn = None;
        self.generation += 1;
        let event = TimerEvent::BettingRoundEnded { hand: self.hand, generation: self.generation };
        self.scheduler.schedule(self.config.round_end_delay, event);
    }

    fn cancel_turn_timer(&mut self) {
        if let Some(id) = self.turn_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn validate(&self, player: PlayerId, action: Action) -> Result<usize, Rejection> {
        let seat = self.seat_of(player).ok_or(Rejection::NotSeated(player))?;
        if self.turn != Some(seat) {
            return Err(Rejection::NotYourTurn);
        }
        let committed = self.seats[seat].bet;
        let chips = self.players[seat].chips;
        match action {
            Action::Fold | Action::Call => Ok(seat),
            Action::Check if self.current_bet > committed => {
                Err(Rejection::FacingBet { to_call: self.current_bet - committed })
            }
            Action::Check => Ok(seat),
            Action::Raise(target) => {
                if target <= self.current_bet {
                    return Err(Rejection::TargetTooLow { current: self.current_bet, target });
                }
                let needed = target - committed;
                if needed > chips {
                    return Err(Rejection::CannotAfford { needed, chips });
                }
                if self.config.min_raise == MinRaise::BigBlind {
                    let min = self.current_bet + self.config.blind;
                    // Going all-in is always allowed.
                    if target < min && needed < chips {
                        return Err(Rejection::BelowMinRaise { min, got: target });
                    }
                }
                Ok(seat)
            }
        }
    }

    fn apply(&mut self, seat: usize, action: Action, timed_out: bool) {
        match action {
            Action::Fold => {
                self.seats[seat].folded = true;
                let verb =
                    if timed_out { HandHistoryVerb::TimeoutFold } else { HandHistoryVerb::Fold };
                self.record(seat, verb, None);
            }
            Action::Call => {
                let owed = self.to_call(seat);
                let paid = self.commit(seat, owed);
                self.record(seat, HandHistoryVerb::Call, Some(paid));
            }
            Action::Raise(target) => {
                let delta = target - self.seats[seat].bet;
                self.commit(seat, delta);
                self.current_bet = target;
                self.closing = seat;
                // Everyone else must respond to the raise.
                for (i, s) in self.seats.iter_mut().enumerate() {
                    if i != seat {
                        s.acted = false;
                    }
                }
                self.record(seat, HandHistoryVerb::RaiseTo, Some(target));
            }
            Action::Check => self.record(seat, HandHistoryVerb::Check, None),
        }
        self.seats[seat].acted = true;
        self.turn = None;
        log::debug!(
            "hand {} {:?}: seat {seat} {action:?}{}",
            self.hand,
            self.phase,
            if timed_out { " (timed out)" } else { "" }
        );

        if self.live_count() <= 1 {
            self.award_uncontested();
            return;
        }
        self.start_turn((seat + 1) % self.seats.len());
    }

    fn end_betting_round(&mut self) {
        for s in &mut self.seats {
            s.bet = 0;
            s.acted = false;
        }
        self.current_bet = 0;
        match self.phase {
            Phase::PreFlop => {
                self.burn_and_deal(3);
                self.phase = Phase::Flop;
            }
            Phase::Flop => {
                self.burn_and_deal(1);
                self.phase = Phase::Turn;
            }
            Phase::Turn => {
                self.burn_and_deal(1);
                self.phase = Phase::River;
            }
            Phase::River => {
                self.showdown();
                return;
            }
            Phase::PreHand | Phase::Showdown => return,
        }
        log::debug!("hand {} {:?}: board {}", self.hand, self.phase, cards_str(self.board.as_slice()));
        let first = (self.dealer + 1) % self.seats.len();
        self.closing = first;
        self.start_turn(first);
    }

    fn burn_and_deal(&mut self, count: usize) {
        self.draw();
        for _ in 0..count {
            let card = self.draw();
            self.board.push(card);
        }
    }

    fn showdown(&mut self) {
        self.phase = Phase::Showdown;
        self.turn = None;
        let mut shown = Vec::new();
        for seat in 0..self.seats.len() {
            if self.seats[seat].folded {
                continue;
            }
            let Some(hole) = self.players[seat].hole else {
                continue;
            };
            self.players[seat].revealed = hole.as_array().to_vec();
            let rank = match evaluate_hand(&hole, &self.board) {
                Ok(rank) => rank,
                Err(e) => panic!("dealt cards failed to evaluate: {e}"),
            };
            shown.push(ShownHand { seat, player: self.players[seat].id, cards: hole.as_array(), rank });
        }

        let best = shown.iter().map(|h| h.rank).max();
        let winners: Vec<usize> =
            shown.iter().filter(|h| Some(h.rank) == best).map(|h| h.seat).collect();
        let payouts = self.split_pot(&winners);
        let verb = if payouts.len() > 1 { HandHistoryVerb::Split } else { HandHistoryVerb::Win };
        for p in &payouts {
            self.record(p.seat, verb, Some(p.amount));
        }
        if let Some(rank) = best {
            log::info!(
                "hand {} showdown: {} with {} ({})",
                self.hand,
                payouts.iter().map(|p| format!("{} +{}", p.player, p.amount)).collect::<Vec<_>>().join(", "),
                rank.category.label(),
                rank.top
            );
        }
        self.last_result = Some(HandResult {
            hand: self.hand,
            board: self.board.as_slice().to_vec(),
            payouts,
            shown,
            showdown: true,
        });
        self.settle();
    }

    /// Everyone else folded: the survivor takes the pot without showing.
    fn award_uncontested(&mut self) {
        self.turn = None;
        let Some(seat) = self.seats.iter().position(|s| !s.folded) else {
            return;
        };
        let payouts = self.split_pot(&[seat]);
        for p in &payouts {
            self.record(p.seat, HandHistoryVerb::Win, Some(p.amount));
            log::info!("hand {}: {} wins {} uncontested", self.hand, p.player, p.amount);
        }
        self.last_result = Some(HandResult {
            hand: self.hand,
            board: self.board.take(),
            payouts,
            shown: Vec::new(),
            showdown: false,
        });
        self.phase = Phase::PreHand;
        self.settle();
    }

    /// Share the pot between `winners`. Odd chips go one each to the winners
    /// seated earliest after the dealer.
    fn split_pot(&mut self, winners: &[usize]) -> Vec<Payout> {
        if winners.is_empty() {
            return Vec::new();
        }
        let n = self.seats.len();
        let start = (self.dealer + 1) % n;
        let mut order = winners.to_vec();
        order.sort_by_key(|&i| (i + n - start) % n);

        let count = order.len() as u64;
        let share = self.pot / count;
        let mut odd = self.pot % count;
        let mut payouts = Vec::with_capacity(order.len());
        for seat in order {
            let mut amount = share;
            if odd > 0 {
                amount += 1;
                odd -= 1;
            }
            self.players[seat].chips += amount;
            payouts.push(Payout { seat, player: self.players[seat].id, amount });
        }
        self.pot = 0;
        payouts
    }

    fn settle(&mut self) {
        for s in &mut self.seats {
            s.bet = 0;
        }
        self.current_bet = 0;
        if self.funded_count() < 2 {
            self.finished = true;
            log::info!("game over after hand {}", self.hand);
            return;
        }
        self.awaiting_next_hand = true;
        self.scheduler.schedule(self.config.next_hand_delay, TimerEvent::NextHand { hand: self.hand });
    }

    fn record(&mut self, seat: usize, verb: HandHistoryVerb, amount: Option<u64>) {
        self.history.push(HandHistoryEntry { seat, verb, amount, phase: self.phase });
    }
}

impl Game<ManualScheduler> {
    /// Fire the earliest pending timer, moving the virtual clock to its deadline.
    pub fn fire_next_timer(&mut self) -> Option<TimerEvent> {
        let event = self.scheduler.fire_next()?;
        self.on_timer(event);
        Some(event)
    }

    /// Let `by` pass on the virtual clock, delivering every timer that comes
    /// due, including timers armed along the way. Returns how many fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let target = self.scheduler.now() + by;
        let mut fired = 0;
        while self.scheduler.next_deadline().is_some_and(|at| at <= target) {
            if self.fire_next_timer().is_some() {
                fired += 1;
            }
        }
        let rest = target.saturating_sub(self.scheduler.now());
        self.scheduler.advance(rest);
        fired
    }
}

fn cards_str(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}
