//! Self-play on a virtual clock: seats a table of agents, plays hands until
//! the limit or until one player holds every chip, and prints each result.

use clap::{Parser, ValueEnum};
use five_suits::agents::{AgentTable, CallingStation, RandomAgent};
use five_suits::game::{Game, HandResult};
use five_suits::room::Room;
use five_suits::timer::{ManualScheduler, TimerEvent};
use log::info;
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Calling,
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate five-suit poker hands between bots", long_about = None)]
struct Args {
    /// Players at the table
    #[arg(short, long, default_value_t = 4)]
    players: usize,
    /// Stop after this many hands
    #[arg(long, default_value_t = 20)]
    hands: u64,
    /// Seed for the shuffle and the bots; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    starting_chips: Option<u64>,
    #[arg(long)]
    blind: Option<u64>,
    #[arg(long)]
    time_per_turn: Option<u64>,
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    agent: AgentKind,
    /// Print the final table state as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder().format_target(false).init();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut room: Room<ManualScheduler> = Room::default();
    for (rule, value) in [
        ("startingChips", args.starting_chips),
        ("blind", args.blind),
        ("timePerTurn", args.time_per_turn),
    ] {
        if let Some(v) = value {
            room.set_rule(rule, v)?;
        }
    }
    let mut agents = AgentTable::new();
    for i in 0..args.players {
        let id = room.join(&format!("bot{}", i + 1))?;
        let agent: Box<dyn five_suits::agents::PlayerAgent> = match args.agent {
            AgentKind::Calling => Box::new(CallingStation),
            AgentKind::Random => Box::new(RandomAgent::seeded(seed.wrapping_add(id.0))),
        };
        agents.set_agent(id, Some(agent));
    }
    room.start_game_seeded(ManualScheduler::new(), seed)?;
    info!("seed {seed}, {} players, {:?} agents", args.players, args.agent);

    let game = room.game_mut().ok_or("game did not start")?;
    play(game, &mut agents, args.hands);

    let elapsed = game.scheduler().now();
    println!("played {} hands in {:.1}s of table time", game.hand_number(), elapsed.as_secs_f64());
    for p in game.players() {
        println!("  {:<8} {:>6}", p.name(), p.chips());
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    }
    Ok(())
}

fn play(game: &mut Game<ManualScheduler>, agents: &mut AgentTable, hands: u64) {
    let mut reported = 0;
    while !game.is_finished() {
        if agents.on_turn(game).is_some() {
            continue;
        }
        if let Some(result) = game.last_result().filter(|r| r.hand > reported) {
            print_result(game, result);
            reported = result.hand;
        }
        let next_is_new_hand =
            matches!(game.scheduler().pending().next(), Some(TimerEvent::NextHand { .. }));
        if next_is_new_hand && game.hand_number() >= hands {
            break;
        }
        if game.fire_next_timer().is_none() {
            break;
        }
    }
    if let Some(result) = game.last_result().filter(|r| r.hand > reported) {
        print_result(game, result);
    }
}

fn print_result(game: &Game<ManualScheduler>, result: &HandResult) {
    let board: Vec<String> = result.board.iter().map(|c| c.to_string()).collect();
    let winners: Vec<String> = result
        .payouts
        .iter()
        .map(|p| {
            let name = game.players()[p.seat].name();
            match result.shown.iter().find(|h| h.seat == p.seat) {
                Some(h) => format!("{name} +{} ({})", p.amount, h.rank.category.label()),
                None => format!("{name} +{}", p.amount),
            }
        })
        .collect();
    println!("hand {:>3}  [{}]  {}", result.hand, board.join(" "), winners.join(", "));
}
