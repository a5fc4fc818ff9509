use five_suits::config::RoomConfig;
use five_suits::game::{Action, Game, HandHistoryVerb, Phase};
use five_suits::player::{Player, PlayerId};
use five_suits::timer::{ManualScheduler, TimerEvent};
use std::time::Duration;

fn mk_game(n: u64) -> Game<ManualScheduler> {
    let players = (1..=n).map(|i| Player::new(PlayerId(i), format!("p{i}"))).collect();
    Game::with_seed(players, RoomConfig::default(), ManualScheduler::new(), 77).expect("valid game")
}

fn turn_timers(g: &Game<ManualScheduler>) -> Vec<TimerEvent> {
    g.scheduler().pending().filter(|e| matches!(e, TimerEvent::TurnExpired { .. })).copied().collect()
}

#[test]
fn turn_timer_is_armed_for_the_seat_on_turn() {
    let g = mk_game(3);
    let timers = turn_timers(&g);
    assert_eq!(timers.len(), 1);
    match timers[0] {
        TimerEvent::TurnExpired { hand, seat, generation } => {
            assert_eq!(hand, 1);
            assert_eq!(Some(seat), g.turn());
            assert_eq!(generation, g.generation());
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(g.scheduler().next_deadline(), Some(Duration::from_secs(10)));
}

#[test]
fn expiry_folds_the_seat_on_turn() {
    let mut g = mk_game(3);
    let seat = g.turn().unwrap();
    assert_eq!(g.advance(Duration::from_millis(9_999)), 0);
    assert!(!g.seats()[seat].is_folded());

    assert_eq!(g.advance(Duration::from_millis(1)), 1);
    assert!(g.seats()[seat].is_folded());
    let last = g.history().last().unwrap();
    assert_eq!((last.seat, last.verb), (seat, HandHistoryVerb::TimeoutFold));
    assert_eq!(g.turn(), Some((seat + 1) % 3));
}

#[test]
fn acting_cancels_the_pending_timer() {
    let mut g = mk_game(3);
    let first = g.turn().unwrap();
    let player = g.players()[first].id();
    assert!(g.handle_action(player, Action::Call).is_applied());

    let timers = turn_timers(&g);
    assert_eq!(timers.len(), 1);
    assert!(matches!(timers[0], TimerEvent::TurnExpired { seat, .. } if seat != first));
}

#[test]
fn rejected_action_keeps_the_timer_running() {
    let mut g = mk_game(3);
    g.advance(Duration::from_secs(4));
    let deadline = g.scheduler().next_deadline();
    let seat = g.turn().unwrap();
    let player = g.players()[seat].id();
    assert!(!g.handle_action(player, Action::Check).is_applied());
    assert_eq!(g.scheduler().next_deadline(), deadline);
    assert_eq!(g.scheduler().pending_len(), 1);

    // The earlier rejection costs nothing beyond the lost time.
    assert!(g.handle_action(player, Action::Call).is_applied());
}

#[test]
fn stale_turn_event_is_ignored() {
    let mut g = mk_game(3);
    let stale = turn_timers(&g)[0];
    let seat = g.turn().unwrap();
    let player = g.players()[seat].id();
    g.handle_action(player, Action::Call);

    let pot = g.pot();
    assert!(!g.on_timer(stale));
    assert!(!g.seats()[seat].is_folded());
    assert_eq!(g.pot(), pot);
}

#[test]
fn events_from_another_hand_are_ignored() {
    let mut g = mk_game(2);
    assert!(!g.on_timer(TimerEvent::NextHand { hand: 7 }));
    assert!(!g.on_timer(TimerEvent::BettingRoundEnded { hand: 1, generation: 0 }));
    // A next-hand event while the hand is still running.
    assert!(!g.on_timer(TimerEvent::NextHand { hand: 1 }));
    assert_eq!(g.hand_number(), 1);
    assert_eq!(g.phase(), Phase::PreFlop);
}

#[test]
fn next_hand_waits_for_the_inter_hand_delay() {
    let mut g = mk_game(2);
    let seat = g.turn().unwrap();
    let player = g.players()[seat].id();
    g.handle_action(player, Action::Fold);
    assert_eq!(g.phase(), Phase::PreHand);
    assert!(matches!(g.scheduler().pending().next(), Some(TimerEvent::NextHand { hand: 1 })));

    g.advance(Duration::from_millis(4_999));
    assert_eq!(g.hand_number(), 1);
    g.advance(Duration::from_millis(1));
    assert_eq!(g.hand_number(), 2);
    assert_eq!(g.phase(), Phase::PreFlop);
    assert_eq!(g.dealer(), 1);
    assert!(g.last_result().is_some_and(|r| r.hand == 1));
}

#[test]
fn disconnected_player_folds_on_timeout() {
    let mut g = mk_game(3);
    let seat = g.turn().unwrap();
    let player = g.players()[seat].id();
    assert!(g.set_connected(player, false));
    assert!(!g.player(player).unwrap().is_connected());
    assert_eq!(turn_timers(&g).len(), 1);

    g.advance(Duration::from_secs(10));
    assert!(g.seats()[seat].is_folded());
    assert!(!g.set_connected(PlayerId(404), false));
}

#[test]
fn unattended_table_keeps_dealing_until_chips_run_out() {
    let mut g = mk_game(2);
    // Heads-up with nobody acting: the small blind times out every hand.
    for _ in 0..200 {
        if g.is_finished() {
            break;
        }
        g.fire_next_timer();
    }
    assert_eq!(g.total_chips(), 2000);
    assert!(g.hand_number() > 1);
}
