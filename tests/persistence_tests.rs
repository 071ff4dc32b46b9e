#![cfg(feature = "std")]

mod common;

use std::fs;

use battleship_hunt::persistence::{write_fleet_csv, DataPaths, MoveLog};
use battleship_hunt::{run_game, Coord, Game, MoveSink, Side};
use common::{standard_fleet, transposed_fleet, ScriptedPlayer};
use rand::{rngs::SmallRng, SeedableRng};
use tempfile::tempdir;

#[test]
fn test_data_paths() {
    let paths = DataPaths::in_dir("out");
    assert!(paths.player_fleet.ends_with("player_ships.csv"));
    assert!(paths.bot_fleet.ends_with("bot_ships.csv"));
    assert!(paths.move_log.ends_with("game_state.csv"));
}

#[test]
fn test_fleet_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("player_ships.csv");
    write_fleet_csv(&path, &standard_fleet()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "ship_id,size,coordinates");
    assert_eq!(lines[1], "1,4,\"A1,B1,C1,D1\"");
    assert_eq!(lines[10], "10,1,J5");
}

#[test]
fn test_fleet_table_is_replaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bot_ships.csv");
    write_fleet_csv(&path, &standard_fleet()).unwrap();
    write_fleet_csv(&path, &transposed_fleet()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 11);
    assert!(text.contains("1,4,\"A1,A2,A3,A4\""));
}

#[test]
fn test_move_log_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("game_state.csv");
    let mut log = MoveLog::create(&path).unwrap();
    assert_eq!(log.path(), path.as_path());

    let mut game = Game::new(standard_fleet(), transposed_fleet());
    let mut player = ScriptedPlayer::new([Coord::new(9, 9), Coord::new(9, 9)]);
    let mut bot = ScriptedPlayer::new([Coord::new(9, 9)]);
    let mut rng = SmallRng::seed_from_u64(0);
    // both scripts run dry before the game ends
    assert!(run_game(&mut game, &mut player, &mut bot, &mut rng, &mut log).is_err());

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "move_number,turn_number,who,coord,result,player_board_serialized,bot_board_serialized"
    );
    assert_eq!(lines.len(), 4);

    let first: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(&first[..5], &["1", "1", "player", "J10", "miss"]);
    assert_eq!(first[5], ".".repeat(100));
    assert_eq!(first[6], format!("{}o", ".".repeat(99)));

    let second: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(&second[..5], &["2", "1", "bot", "J10", "miss"]);
    assert_eq!(second[5], format!("{}o", ".".repeat(99)));

    let third: Vec<&str> = lines[3].split(',').collect();
    assert_eq!(&third[..5], &["3", "2", "player", "J10", "invalid"]);
}

#[test]
fn test_move_log_is_truncated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("game_state.csv");
    fs::write(&path, "stale\nrows\n").unwrap();

    let mut log = MoveLog::create(&path).unwrap();
    let mut game = Game::new(standard_fleet(), transposed_fleet());
    let result = game.fire(Coord::new(0, 0));
    let event = battleship_hunt::MoveEvent {
        seq: 1,
        turn: game.turn_number(),
        side: Side::Player,
        coord: Coord::new(0, 0),
        result,
    };
    log.record(&event, &game).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert_eq!(text.lines().count(), 2);
    assert!(text.lines().nth(1).unwrap().starts_with("1,1,player,A1,hit,"));
}
