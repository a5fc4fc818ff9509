//! Room configuration.
//!
//! Three rules can be changed from the lobby (`startingChips`, `blind`,
//! `timePerTurn`); each has a fixed accepted range. The remaining fields are
//! engine policy with defaults that match the live server.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

pub const STARTING_CHIPS_RANGE: RangeInclusive<u64> = 100..=10_000;
pub const BLIND_RANGE: RangeInclusive<u64> = 100..=10_000;
pub const TIME_PER_TURN_RANGE: RangeInclusive<u64> = 2..=20;

/// How large a raise must be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinRaise {
    /// Any amount strictly above the current bet.
    #[default]
    AboveCurrentBet,
    /// The raise increment must be at least one big blind, unless the raiser
    /// is going all-in.
    BigBlind,
}

/// A lobby-adjustable rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    StartingChips,
    Blind,
    TimePerTurn,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::StartingChips, Rule::Blind, Rule::TimePerTurn];

    pub fn name(self) -> &'static str {
        match self {
            Rule::StartingChips => "startingChips",
            Rule::Blind => "blind",
            Rule::TimePerTurn => "timePerTurn",
        }
    }

    pub fn range(self) -> RangeInclusive<u64> {
        match self {
            Rule::StartingChips => STARTING_CHIPS_RANGE,
            Rule::Blind => BLIND_RANGE,
            Rule::TimePerTurn => TIME_PER_TURN_RANGE,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| ConfigError::UnknownRule(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("unknown rule: {0}")]
    UnknownRule(String),
    #[error("{rule} must be within {min}..={max}, got {got}")]
    OutOfRange { rule: Rule, min: u64, max: u64, got: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomConfig {
    pub starting_chips: u64,
    /// Big blind; the small blind is half of it.
    pub blind: u64,
    /// Whole seconds a seat has to act before it is folded.
    pub time_per_turn: u64,
    pub min_raise: MinRaise,
    /// Pause between the last action of a betting round and the next street.
    #[serde(with = "millis")]
    pub round_end_delay: Duration,
    /// Pause after a hand is settled before the next one is dealt.
    #[serde(with = "millis")]
    pub next_hand_delay: Duration,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            starting_chips: 1000,
            blind: 50,
            time_per_turn: 10,
            min_raise: MinRaise::default(),
            round_end_delay: Duration::from_millis(100),
            next_hand_delay: Duration::from_secs(5),
        }
    }
}

impl RoomConfig {
    pub fn small_blind(&self) -> u64 {
        self.blind / 2
    }

    pub fn turn_duration(&self) -> Duration {
        Duration::from_secs(self.time_per_turn)
    }

    pub fn get(&self, rule: Rule) -> u64 {
        match rule {
            Rule::StartingChips => self.starting_chips,
            Rule::Blind => self.blind,
            Rule::TimePerTurn => self.time_per_turn,
        }
    }

    /// Change one rule. Out-of-range values are refused and leave the config untouched.
    ///
    /// ```
    /// use five_suits::config::{RoomConfig, Rule};
    ///
    /// let mut cfg = RoomConfig::default();
    /// cfg.set_rule(Rule::Blind, 200).unwrap();
    /// assert_eq!(cfg.blind, 200);
    /// assert!(cfg.set_rule(Rule::TimePerTurn, 60).is_err());
    /// assert_eq!(cfg.time_per_turn, 10);
    /// ```
    pub fn set_rule(&mut self, rule: Rule, value: u64) -> Result<(), ConfigError> {
        let range = rule.range();
        if !range.contains(&value) {
            return Err(ConfigError::OutOfRange {
                rule,
                min: *range.start(),
                max: *range.end(),
                got: value,
            });
        }
        match rule {
            Rule::StartingChips => self.starting_chips = value,
            Rule::Blind => self.blind = value,
            Rule::TimePerTurn => self.time_per_turn = value,
        }
        Ok(())
    }

    /// Check the values a game needs before dealing.
    ///
    /// Only the relations a game depends on are checked; the defaults sit
    /// outside the lobby blind range and are still valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_chips == 0 {
            return Err(ConfigError::OutOfRange {
                rule: Rule::StartingChips,
                min: 1,
                max: u64::MAX,
                got: 0,
            });
        }
        if self.time_per_turn == 0 {
            return Err(ConfigError::OutOfRange {
                rule: Rule::TimePerTurn,
                min: 1,
                max: u64::MAX,
                got: 0,
            });
        }
        Ok(())
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
