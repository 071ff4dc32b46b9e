#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod fleet;
mod game;
mod geometry;
#[cfg(feature = "std")]
mod logging;
pub mod notation;
#[cfg(feature = "std")]
pub mod persistence;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use geometry::*;
#[cfg(feature = "std")]
pub use logging::{env_log_level, init_logging};
pub use notation::NotationError;
#[cfg(feature = "std")]
pub use persistence::{write_fleet_csv, DataPaths, MoveLog};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::render_boards;
