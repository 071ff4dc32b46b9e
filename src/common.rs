//! Common types for Battleship: shot outcomes, cell states and errors.

use crate::bitboard::{BitBoard, BitBoardError};
use crate::config::BOARD_SIZE;

/// Bit grid covering the whole playing field.
pub type Grid = BitBoard<u128, BOARD_SIZE>;

/// Result of a shot that was accepted by a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that still has intact cells.
    Hit,
    /// Shot struck the last intact cell of a ship.
    Sink,
}

impl ShotOutcome {
    /// Label used in the move log and console output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "hit",
            ShotOutcome::Sink => "sink",
        }
    }

    /// Hits and sinks let the shooter fire again.
    pub fn grants_extra_shot(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sink)
    }
}

impl core::fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a side knows about one cell of the opposing board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unknown,
    Miss,
    Hit,
}

impl CellState {
    /// Single-character symbol used for rendering and the move log.
    pub fn symbol(&self) -> char {
        match self {
            CellState::Unknown => '.',
            CellState::Miss => 'o',
            CellState::Hit => 'X',
        }
    }
}

/// Errors returned by Board operations. Each one is an "invalid" shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (index off the grid).
    BitBoardError(BitBoardError),
    /// Target lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Target cell was already resolved as hit or miss.
    AlreadyShot { row: usize, col: usize },
    /// Ship layout marks the cell but no ship of the fleet covers it.
    UnknownShipHit,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Target ({}, {}) is out of bounds", row, col)
            }
            BoardError::AlreadyShot { row, col } => {
                write!(f, "Cell ({}, {}) was already shot", row, col)
            }
            BoardError::UnknownShipHit => write!(f, "Hit a cell that belongs to no ship"),
        }
    }
}

/// Reasons a fleet is rejected, in the order the validator checks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// Ship lengths do not match the required composition.
    SizeMismatch,
    /// Some coordinate lies outside the grid.
    OutOfBounds,
    /// A ship spans more than one row and more than one column.
    NotStraight,
    /// A ship's cells are not contiguous.
    HasGaps,
    /// Two ships share or border a cell, diagonals included.
    TouchOrOverlap,
    /// Random generation ran out of its retry budget.
    PlacementExhausted { restarts: usize },
}

impl core::fmt::Display for FleetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FleetError::SizeMismatch => {
                write!(f, "Fleet sizes do not match required configuration.")
            }
            FleetError::OutOfBounds => write!(f, "Ship coordinates out of bounds."),
            FleetError::NotStraight => write!(f, "Ship is not a straight line."),
            FleetError::HasGaps => write!(f, "Ship has gaps."),
            FleetError::TouchOrOverlap => {
                write!(f, "Ships cannot touch (even diagonally) or overlap.")
            }
            FleetError::PlacementExhausted { restarts } => write!(
                f,
                "Unable to place the fleet after {} restarts",
                restarts
            ),
        }
    }
}

impl core::error::Error for BoardError {}
impl core::error::Error for FleetError {}
