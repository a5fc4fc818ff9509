//! Delayed events and the scheduling seam.
//!
//! The engine never sleeps. It asks a [`Scheduler`] to hand an event back
//! after a delay; the host delivers it through `Game::on_timer`. Every event
//! names the hand (and turn generation) it was armed for, so an event that
//! outlives its hand or turn is recognised and dropped.

use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// The seat on turn ran out of time; treated as a fold.
    TurnExpired { hand: u64, seat: usize, generation: u64 },
    /// The round-end pause elapsed; deal the next street or go to showdown.
    BettingRoundEnded { hand: u64, generation: u64 },
    /// The post-hand pause elapsed; deal the next hand.
    NextHand { hand: u64 },
}

impl TimerEvent {
    pub fn hand(&self) -> u64 {
        match *self {
            TimerEvent::TurnExpired { hand, .. }
            | TimerEvent::BettingRoundEnded { hand, .. }
            | TimerEvent::NextHand { hand } => hand,
        }
    }
}

/// "Call back after `delay`, cancellable."
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerId;
    /// Cancelling an id that already fired or was cancelled is a no-op.
    fn cancel(&mut self, id: TimerId);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerId {
        (**self).schedule(delay, event)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id)
    }
}

/// A virtual clock: time only moves when [`ManualScheduler::advance`] is called.
///
/// ```
/// use five_suits::timer::{ManualScheduler, Scheduler, TimerEvent};
/// use std::time::Duration;
///
/// let mut clock = ManualScheduler::new();
/// let id = clock.schedule(Duration::from_secs(5), TimerEvent::NextHand { hand: 1 });
/// assert!(clock.advance(Duration::from_secs(4)).is_empty());
/// clock.cancel(id);
/// assert!(clock.advance(Duration::from_secs(1)).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    /// Keyed by (deadline, id) so equal deadlines fire in scheduling order.
    pending: BTreeMap<(Duration, TimerId), TimerEvent>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(at, _)| *at)
    }

    pub fn pending(&self) -> impl Iterator<Item = &TimerEvent> {
        self.pending.values()
    }

    /// Move the clock forward and return the events that came due, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerEvent> {
        self.now += by;
        let mut fired = Vec::new();
        while let Some(entry) = self.pending.first_entry() {
            if entry.key().0 > self.now {
                break;
            }
            fired.push(entry.remove());
        }
        fired
    }

    /// Jump to the earliest deadline and pop that single event.
    pub fn fire_next(&mut self) -> Option<TimerEvent> {
        let ((at, _), event) = self.pending.pop_first()?;
        if at > self.now {
            self.now = at;
        }
        Some(event)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((self.now + delay, id), event);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(_, pending), _| *pending != id);
    }
}
