//! Ships as ordered runs of cells.

use alloc::vec::Vec;

use crate::bitboard::BitBoardError;
use crate::common::{FleetError, Grid};
use crate::geometry::Coord;

/// Orientation of a ship, or of a line of hits, on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Fixed row, cells spread along the column axis.
    Horizontal,
    /// Fixed column, cells spread along the row axis.
    Vertical,
}

impl Orientation {
    /// Offset between consecutive cells.
    pub fn step(&self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Orientation shared by every cell in `cells`.
///
/// Returns `None` for fewer than two cells and for cells that share neither a
/// row nor a column. A single repeated cell counts as horizontal.
pub fn infer_orientation(cells: &[Coord]) -> Option<Orientation> {
    let (first, rest) = cells.split_first()?;
    if rest.is_empty() {
        return None;
    }
    if rest.iter().all(|c| c.row == first.row) {
        Some(Orientation::Horizontal)
    } else if rest.iter().all(|c| c.col == first.col) {
        Some(Orientation::Vertical)
    } else {
        None
    }
}

/// A ship: the ordered cells it covers.
///
/// Construction does not validate anything; shape, bounds and spacing are
/// enforced when ships are assembled into a [`Fleet`](crate::Fleet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coord>,
}

impl Ship {
    pub fn new(cells: Vec<Coord>) -> Self {
        Self { cells }
    }

    /// A straight ship of `len` cells starting at `origin`.
    pub fn straight(origin: Coord, orientation: Orientation, len: usize) -> Self {
        let (dr, dc) = orientation.step();
        let cells = (0..len)
            .map(|i| Coord::new(origin.row + dr * i, origin.col + dc * i))
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Checks that the ship is a straight, gap-free run.
    pub fn check_shape(&self) -> Result<(), FleetError> {
        let Some(first) = self.cells.first() else {
            return Ok(());
        };
        let same_row = self.cells.iter().all(|c| c.row == first.row);
        let same_col = self.cells.iter().all(|c| c.col == first.col);
        if !same_row && !same_col {
            return Err(FleetError::NotStraight);
        }

        // sorted varying axis must be a dense range
        let mut axis: Vec<usize> = if same_row {
            self.cells.iter().map(|c| c.col).collect()
        } else {
            self.cells.iter().map(|c| c.row).collect()
        };
        axis.sort_unstable();
        let dense = axis.windows(2).all(|w| w[1] == w[0] + 1);
        if !dense {
            return Err(FleetError::HasGaps);
        }
        Ok(())
    }

    /// Occupancy mask of the ship. Fails if any cell is off the board.
    pub fn mask(&self) -> Result<Grid, BitBoardError> {
        Grid::from_iter(self.cells.iter().map(|c| (c.row, c.col)))
    }
}
