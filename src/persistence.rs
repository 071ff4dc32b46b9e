#![cfg(feature = "std")]
//! CSV output: the two fleet tables and the append-only move log.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;
use serde::Serialize;

use crate::{
    fleet::Fleet,
    game::{Game, MoveEvent, MoveSink, Side},
    notation::format_cells,
};

/// Where the game writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub player_fleet: PathBuf,
    pub bot_fleet: PathBuf,
    pub move_log: PathBuf,
}

impl DataPaths {
    /// Standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            player_fleet: dir.join("player_ships.csv"),
            bot_fleet: dir.join("bot_ships.csv"),
            move_log: dir.join("game_state.csv"),
        }
    }
}

#[derive(Debug, Serialize)]
struct ShipRow {
    ship_id: usize,
    size: usize,
    coordinates: String,
}

#[derive(Debug, Serialize)]
struct MoveRow<'a> {
    move_number: u32,
    turn_number: u32,
    who: &'a str,
    coord: String,
    result: &'a str,
    player_board_serialized: String,
    bot_board_serialized: String,
}

const MOVE_HEADER: [&str; 7] = [
    "move_number",
    "turn_number",
    "who",
    "coord",
    "result",
    "player_board_serialized",
    "bot_board_serialized",
];

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    Ok(())
}

/// Write `fleet` as `ship_id,size,coordinates`, replacing any old file.
pub fn write_fleet_csv(path: impl AsRef<Path>, fleet: &Fleet) -> anyhow::Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating fleet table {}", path.display()))?;
    for (i, ship) in fleet.ships().enumerate() {
        writer.serialize(ShipRow {
            ship_id: i + 1,
            size: ship.len(),
            coordinates: format_cells(ship.cells()),
        })?;
    }
    writer.flush()?;
    info!("wrote fleet table {}", path.display());
    Ok(())
}

/// Append-only CSV record of every shot, with both shot histories after it.
pub struct MoveLog {
    writer: csv::Writer<File>,
    path: PathBuf,
}

impl MoveLog {
    /// Create (or truncate) the log and write its header.
    pub fn create(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        ensure_parent_dir(&path)?;
        let file = File::create(&path)
            .with_context(|| format!("creating move log {}", path.display()))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(MOVE_HEADER)?;
        writer.flush()?;
        info!("move log at {}", path.display());
        Ok(Self { writer, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MoveSink for MoveLog {
    fn record(&mut self, event: &MoveEvent, game: &Game) -> anyhow::Result<()> {
        self.writer.serialize(MoveRow {
            move_number: event.seq,
            turn_number: event.turn,
            who: event.side.as_str(),
            coord: event.coord.to_string(),
            result: event.outcome_label(),
            player_board_serialized: game.board(Side::Player).history().serialize(),
            bot_board_serialized: game.board(Side::Bot).history().serialize(),
        })?;
        // flushed per row so the log survives an interrupt
        self.writer.flush()?;
        Ok(())
    }
}
