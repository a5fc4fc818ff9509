use five_suits::agents::{AgentTable, CallingStation, PlayerAgent, RandomAgent};
use five_suits::config::RoomConfig;
use five_suits::game::{Game, Phase, MAX_SEATS};
use five_suits::player::{Player, PlayerId};
use five_suits::timer::ManualScheduler;
use proptest::prelude::*;

fn seat_table(n: usize, seed: u64, agent: impl Fn(u64) -> Box<dyn PlayerAgent>) -> (Game<ManualScheduler>, AgentTable) {
    let players: Vec<Player> = (1..=n as u64).map(|i| Player::new(PlayerId(i), format!("bot{i}"))).collect();
    let mut agents = AgentTable::new();
    for p in &players {
        agents.set_agent(p.id(), Some(agent(seed.wrapping_add(p.id().0))));
    }
    let game = Game::with_seed(players, RoomConfig::default(), ManualScheduler::new(), seed).expect("valid game");
    (game, agents)
}

/// Play until `hands` are complete or the game ends, checking chip accounting after every event.
fn play(game: &mut Game<ManualScheduler>, agents: &mut AgentTable, hands: u64) -> Result<(), TestCaseError> {
    let total = game.total_chips();
    for _ in 0..200_000 {
        if game.is_finished() || game.hand_number() > hands {
            break;
        }
        match agents.on_turn(game) {
            Some((player, action, outcome)) => {
                prop_assert!(outcome.is_applied(), "{} {:?} refused: {:?}", player, action, outcome);
            }
            None => {
                let fired = game.fire_next_timer();
                prop_assert!(fired.is_some(), "table stalled in {:?}", game.phase());
            }
        }
        prop_assert_eq!(game.total_chips(), total);
        let bets: u64 = game.seats().iter().map(|s| s.bet()).sum();
        prop_assert!(game.pot() >= bets);
    }
    if game.is_finished() {
        prop_assert_eq!(game.scheduler().pending_len(), 0);
        prop_assert_eq!(game.players().iter().filter(|p| !p.is_broke()).count(), 1);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_agents_conserve_chips(seed in any::<u64>(), n in 2usize..=8) {
        let (mut game, mut agents) = seat_table(n, seed, |s| Box::new(RandomAgent::seeded(s)));
        play(&mut game, &mut agents, 40)?;
    }
}

#[test]
fn full_table_deals_a_whole_hand_from_one_deck() {
    let (mut game, mut agents) = seat_table(MAX_SEATS, 1, |_| Box::new(CallingStation));
    while game.phase() != Phase::Showdown {
        if agents.on_turn(&mut game).is_none() {
            game.fire_next_timer().expect("a timer is pending");
        }
    }
    let result = game.last_result().unwrap();
    assert_eq!(result.board.len(), 5);
    assert_eq!(result.shown.len(), MAX_SEATS);
    assert_eq!(game.total_chips(), 1000 * MAX_SEATS as u64);
}

#[test]
fn calling_stations_conserve_chips_across_hands() {
    let (mut game, mut agents) = seat_table(3, 99, |_| Box::new(CallingStation));
    for _ in 0..500_000 {
        if game.is_finished() {
            break;
        }
        if agents.on_turn(&mut game).is_none() && game.fire_next_timer().is_none() {
            break;
        }
    }
    assert_eq!(game.total_chips(), 3000);
    assert!(game.hand_number() > 1);
}
