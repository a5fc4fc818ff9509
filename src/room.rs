//! One room: a lobby roster, its configuration, and at most one running game.
//!
//! The room owns player id allocation. Ids start at 1 and are never reused
//! within a room, so a reconnecting client keeps its seat.

use crate::config::{ConfigError, RoomConfig, Rule};
use crate::game::{Action, ActionOutcome, Game, GameError, MAX_SEATS};
use crate::player::{Player, PlayerId};
use crate::timer::{Scheduler, TimerEvent};
use crate::view::TableView;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoomError {
    #[error("room is full")]
    CapacityReached,
    #[error("name is empty")]
    EmptyName,
    #[error("game already in progress")]
    GameAlreadyInProgress,
    #[error("no game is running")]
    NoGame,
    #[error("need 2+ connected players, have {0}")]
    NotEnoughPlayers(usize),
    #[error("player {0} is not in this room")]
    UnknownPlayer(PlayerId),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Debug)]
pub struct Room<S: Scheduler> {
    config: RoomConfig,
    roster: Vec<Player>,
    next_player_id: u64,
    game: Option<Game<S>>,
}

impl<S: Scheduler> Default for Room<S> {
    fn default() -> Self {
        Self::new(RoomConfig::default())
    }
}

impl<S: Scheduler> Room<S> {
    pub fn new(config: RoomConfig) -> Self {
        Self { config, roster: Vec::new(), next_player_id: 1, game: None }
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Everyone who joined, in join order.
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn game(&self) -> Option<&Game<S>> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut Game<S>> {
        self.game.as_mut()
    }

    /// A game exists and has not finished.
    pub fn is_in_progress(&self) -> bool {
        self.game.as_ref().is_some_and(|g| !g.is_finished())
    }

    pub fn join(&mut self, name: &str) -> Result<PlayerId, RoomError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RoomError::EmptyName);
        }
        if self.is_in_progress() {
            return Err(RoomError::GameAlreadyInProgress);
        }
        if self.roster.len() >= MAX_SEATS {
            return Err(RoomError::CapacityReached);
        }
        let id = PlayerId(self.next_player_id);
        self.next_player_id += 1;
        self.roster.push(Player::new(id, name));
        log::info!("{name} joined as {id}");
        Ok(id)
    }

    pub fn disconnect(&mut self, id: PlayerId) -> Result<(), RoomError> {
        self.set_connected(id, false)
    }

    pub fn reconnect(&mut self, id: PlayerId) -> Result<(), RoomError> {
        self.set_connected(id, true)
    }

    fn set_connected(&mut self, id: PlayerId, connected: bool) -> Result<(), RoomError> {
        let player =
            self.roster.iter_mut().find(|p| p.id == id).ok_or(RoomError::UnknownPlayer(id))?;
        player.connected = connected;
        if let Some(game) = self.game.as_mut() {
            game.set_connected(id, connected);
        }
        Ok(())
    }

    /// Change a lobby rule by its wire name (`startingChips`, `blind`, `timePerTurn`).
    pub fn set_rule(&mut self, rule: &str, value: u64) -> Result<(), RoomError> {
        if self.is_in_progress() {
            return Err(RoomError::GameAlreadyInProgress);
        }
        let rule: Rule = rule.parse()?;
        self.config.set_rule(rule, value)?;
        log::debug!("rule {rule} set to {value}");
        Ok(())
    }

    pub fn start_game(&mut self, scheduler: S) -> Result<(), RoomError> {
        self.start_with(|players, config| Game::new(players, config, scheduler))
    }

    pub fn start_game_seeded(&mut self, scheduler: S, seed: u64) -> Result<(), RoomError> {
        self.start_with(|players, config| Game::with_seed(players, config, scheduler, seed))
    }

    fn start_with(
        &mut self,
        create: impl FnOnce(Vec<Player>, RoomConfig) -> Result<Game<S>, GameError>,
    ) -> Result<(), RoomError> {
        if self.is_in_progress() {
            return Err(RoomError::GameAlreadyInProgress);
        }
        let seated: Vec<Player> = self.roster.iter().filter(|p| p.connected).cloned().collect();
        if seated.len() < 2 {
            return Err(RoomError::NotEnoughPlayers(seated.len()));
        }
        let count = seated.len();
        self.game = Some(create(seated, self.config.clone())?);
        log::info!("game started with {count} players");
        Ok(())
    }

    pub fn handle_action(&mut self, id: PlayerId, action: Action) -> Result<ActionOutcome, RoomError> {
        let game = self.game.as_mut().ok_or(RoomError::NoGame)?;
        Ok(game.handle_action(id, action))
    }

    /// Forward a fired timer to the running game. False if nothing applied it.
    pub fn on_timer(&mut self, event: TimerEvent) -> bool {
        self.game.as_mut().is_some_and(|g| g.on_timer(event))
    }

    pub fn view_for(&self, id: PlayerId) -> Option<TableView> {
        self.game.as_ref().map(|g| g.view_for(id))
    }
}
