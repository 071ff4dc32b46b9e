//! Commonly used types and utilities for ease of import.

pub use crate::{
    run_game, BotPlayer, Coord, Fleet, Game, GameStatus, Player, ShotOutcome, Side, Targeting,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_boards, CliPlayer, DataPaths, MoveLog};
