//! One side's board: the static ship layout and the shot history against it.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, CellState, Grid, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::geometry::Coord;

/// Hits and misses recorded against a board. This is everything the
/// shooting side is allowed to see.
///
/// Cells only ever move from unknown to hit or to miss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShotHistory {
    hits: Grid,
    misses: Grid,
}

impl ShotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hits(&self) -> Grid {
        self.hits
    }

    pub fn misses(&self) -> Grid {
        self.misses
    }

    /// Cells already resolved either way.
    pub fn resolved(&self) -> Grid {
        self.hits | self.misses
    }

    /// State of `coord`; off-board cells have none.
    pub fn cell(&self, coord: Coord) -> Option<CellState> {
        if !coord.in_bounds() {
            return None;
        }
        let state = if self.hits.get(coord.row, coord.col).unwrap_or(false) {
            CellState::Hit
        } else if self.misses.get(coord.row, coord.col).unwrap_or(false) {
            CellState::Miss
        } else {
            CellState::Unknown
        };
        Some(state)
    }

    /// True iff `coord` is on the board and has not been shot yet.
    pub fn is_unknown(&self, coord: Coord) -> bool {
        self.cell(coord) == Some(CellState::Unknown)
    }

    /// Every unknown cell, row-major.
    pub fn unknown_cells(&self) -> Vec<Coord> {
        (!self.resolved())
            .iter_set_bits()
            .map(Coord::from)
            .collect()
    }

    /// Record a hit on an unknown cell.
    pub fn record_hit(&mut self, coord: Coord) -> Result<(), BoardError> {
        self.check_unknown(coord)?;
        self.hits.set(coord.row, coord.col)?;
        Ok(())
    }

    /// Record a miss on an unknown cell.
    pub fn record_miss(&mut self, coord: Coord) -> Result<(), BoardError> {
        self.check_unknown(coord)?;
        self.misses.set(coord.row, coord.col)?;
        Ok(())
    }

    fn check_unknown(&self, coord: Coord) -> Result<(), BoardError> {
        match self.cell(coord) {
            None => Err(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            }),
            Some(CellState::Unknown) => Ok(()),
            Some(_) => Err(BoardError::AlreadyShot {
                row: coord.row,
                col: coord.col,
            }),
        }
    }

    /// Mark every still-unknown cell of `area` as a miss.
    fn flood_misses(&mut self, area: Grid) {
        self.misses |= area & !self.resolved();
    }

    /// Row-major concatenation of cell symbols (`.`, `o`, `X`).
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let state = self.cell(Coord::new(row, col)).unwrap_or(CellState::Unknown);
                out.push(state.symbol());
            }
        }
        out
    }
}

/// A fleet on the grid plus the shots fired at it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    fleet: Fleet,
    layout: Grid,
    shots: ShotHistory,
}

impl Board {
    /// Fresh board with nothing shot yet.
    pub fn new(fleet: Fleet) -> Self {
        let layout = fleet.mask();
        Self {
            fleet,
            layout,
            shots: ShotHistory::new(),
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Board occupancy mask of all ships.
    pub fn layout(&self) -> Grid {
        self.layout
    }

    /// Shot history: the view an opponent gets of this board.
    pub fn history(&self) -> &ShotHistory {
        &self.shots
    }

    /// Whether `coord` holds part of a ship. Off-board cells never do.
    pub fn has_ship(&self, coord: Coord) -> bool {
        self.layout.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Resolve a shot at `coord`.
    ///
    /// Out-of-bounds targets and cells already shot are rejected without
    /// touching the board. Sinking a ship also marks every unknown cell
    /// around it as a miss, since ships never touch.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !self.has_ship(coord) {
            self.shots.record_miss(coord)?;
            return Ok(ShotOutcome::Miss);
        }
        self.shots.record_hit(coord)?;

        let ship_mask = self
            .fleet
            .ship_at(coord)
            .map(|p| p.mask())
            .ok_or(BoardError::UnknownShipHit)?;
        if ship_mask.is_subset_of(&self.shots.hits()) {
            self.shots.flood_misses(ship_mask.dilate());
            Ok(ShotOutcome::Sink)
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    /// True once every cell of every ship has been hit.
    pub fn all_sunk(&self) -> bool {
        self.fleet
            .placed()
            .iter()
            .all(|p| p.mask().is_subset_of(&self.shots.hits()))
    }

    /// Ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.fleet
            .placed()
            .iter()
            .filter(|p| !p.mask().is_subset_of(&self.shots.hits()))
            .count()
    }
}

impl fmt::Display for ShotHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let state = self.cell(Coord::new(row, col)).unwrap_or(CellState::Unknown);
                write!(f, "{}", state.symbol())?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
