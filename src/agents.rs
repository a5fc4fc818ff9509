//! Agents: simple automated players.
//!
//! An agent sees exactly what its player would see (a [`TableView`]) and
//! returns an [`Action`]. [`AgentTable`] maps player ids to agents and drives
//! whichever one is on turn. Used by the simulator and by soak tests.

use crate::game::{Action, ActionOutcome, Game};
use crate::player::PlayerId;
use crate::timer::Scheduler;
use crate::view::TableView;
use core::fmt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// A seat controller asked for a decision when its player is on turn.
pub trait PlayerAgent {
    fn decide(&mut self, view: &TableView) -> Action;

    fn name(&self) -> &'static str;
}

/// Never folds, never raises.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallingStation;

impl PlayerAgent for CallingStation {
    fn decide(&mut self, view: &TableView) -> Action {
        if view.to_call() == 0 {
            Action::Check
        } else {
            Action::Call
        }
    }

    fn name(&self) -> &'static str {
        "calling-station"
    }
}

/// Play style knobs for [`RandomAgent`], each a probability in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomProfile {
    /// Chance to fold when facing a bet.
    pub fold: f64,
    /// Chance to raise when able.
    pub aggression: f64,
}

impl Default for RandomProfile {
    fn default() -> Self {
        Self { fold: 0.15, aggression: 0.2 }
    }
}

/// Picks among legal actions at random; raises are sized in big blinds.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    profile: RandomProfile,
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(profile: RandomProfile, seed: u64) -> Self {
        Self { profile, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomProfile::default(), seed)
    }
}

impl PlayerAgent for RandomAgent {
    fn decide(&mut self, view: &TableView) -> Action {
        let Some(me) = view.my_seat() else {
            return Action::Fold;
        };
        let to_call = view.to_call();
        if to_call > 0 && self.rng.random_bool(self.profile.fold) {
            return Action::Fold;
        }
        // Largest total this seat can bet.
        let max_total = me.bet + me.chips;
        if max_total > view.state.current_bet && self.rng.random_bool(self.profile.aggression) {
            let step = (view.state.current_bet / 2).max(1);
            let target = view.state.current_bet + step * self.rng.random_range(1..=4u64);
            return Action::Raise(target.min(max_total));
        }
        if to_call == 0 {
            Action::Check
        } else {
            Action::Call
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Agents keyed by the player they act for.
#[derive(Default)]
pub struct AgentTable {
    agents: HashMap<PlayerId, Box<dyn PlayerAgent>>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<(u64, &str)> =
            self.agents.iter().map(|(id, a)| (id.0, a.name())).collect();
        names.sort_unstable();
        f.debug_struct("AgentTable").field("agents", &names).finish()
    }
}

impl AgentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an agent to a player (or remove when `None`).
    pub fn set_agent(&mut self, player: PlayerId, agent: Option<Box<dyn PlayerAgent>>) {
        match agent {
            Some(a) => {
                self.agents.insert(player, a);
            }
            None => {
                self.agents.remove(&player);
            }
        }
    }

    pub fn has_agent(&self, player: PlayerId) -> bool {
        self.agents.contains_key(&player)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Let the agent on turn act. `None` when nobody is on turn or the
    /// player on turn has no agent.
    pub fn on_turn<S: Scheduler>(&mut self, game: &mut Game<S>) -> Option<(PlayerId, Action, ActionOutcome)> {
        let player = game.player_on_turn()?;
        let agent = self.agents.get_mut(&player)?;
        let action = agent.decide(&game.view_for(player));
        let outcome = game.handle_action(player, action);
        Some((player, action, outcome))
    }
}
