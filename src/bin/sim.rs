use battleship_hunt::{run_game, BotPlayer, Game, GameStatus, MoveEvent, Player, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Bot against bot: fleets drawn from `seed1`, shots from `seed2`.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut fleet_rng = SmallRng::seed_from_u64(seed1);
    let mut shot_rng = SmallRng::seed_from_u64(seed2);

    let mut p1 = BotPlayer::new();
    let mut p2 = BotPlayer::new();
    let f1 = p1.place_fleet(&mut fleet_rng)?;
    let f2 = p2.place_fleet(&mut fleet_rng)?;

    let mut game = Game::new(f1, f2);
    let mut events: Vec<MoveEvent> = Vec::new();
    let status = run_game(&mut game, &mut p1, &mut p2, &mut shot_rng, &mut events)?;

    let winner = match status {
        GameStatus::Won => Some("player"),
        GameStatus::Lost => Some("bot"),
        GameStatus::InProgress => None,
    };
    let tally = |side: Side| {
        let shots = events.iter().filter(|e| e.side == side).count();
        let hits = events
            .iter()
            .filter(|e| e.side == side && matches!(&e.result, Ok(o) if o.grants_extra_shot()))
            .count();
        json!({"shots": shots, "hits": hits})
    };

    let result = json!({
        "winner": winner,
        "turns": game.turn_number(),
        "moves": events.len(),
        "player": tally(Side::Player),
        "bot": tally(Side::Bot),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
