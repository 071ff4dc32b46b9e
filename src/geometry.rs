//! Grid coordinates, neighbourhoods and the fleet validation rules.

use alloc::vec::Vec;
use core::fmt;

use crate::common::FleetError;
use crate::config::{BOARD_SIZE, FLEET_SIZES};
use crate::ship::Ship;

/// Orthogonal offsets, in (row, col) order: up, down, left, right.
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Orthogonal offsets followed by the four diagonals.
const ADJACENT_AND_DIAGONAL: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A cell on the board, 0-indexed.
///
/// A `Coord` may lie outside the grid; [`Coord::in_bounds`] tells. Values
/// coming from user input or fleet files are only trusted after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True iff both axes lie in `0..BOARD_SIZE`.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The cell `(dr, dc)` away, if it is on the board.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Coord::new(row, col);
        next.in_bounds().then_some(next)
    }

    /// The up to four in-bounds orthogonal neighbours.
    pub fn orthogonal_neighbors(&self) -> impl Iterator<Item = Coord> + '_ {
        ORTHOGONAL
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// The up to eight in-bounds orthogonal and diagonal neighbours.
    pub fn adjacent_and_diagonal(&self) -> impl Iterator<Item = Coord> + '_ {
        ADJACENT_AND_DIAGONAL
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// True when `other` is this cell or one of its eight neighbours.
    pub fn touches(&self, other: &Coord) -> bool {
        self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

/// Human-readable label: column letter then 1-based row, e.g. `A1`, `J10`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + (self.col % 26) as u8) as char;
        write!(f, "{}{}", col, self.row + 1)
    }
}

/// True iff `coord` lies on the board.
pub fn in_bounds(coord: Coord) -> bool {
    coord.in_bounds()
}

/// Orthogonal and diagonal neighbours of `coord`, clipped to the board.
pub fn adjacent_and_diagonal_cells(coord: Coord) -> Vec<Coord> {
    coord.adjacent_and_diagonal().collect()
}

/// True when two distinct ships share a cell or sit next to each other,
/// diagonals included.
pub fn ships_touch(a: &Ship, b: &Ship) -> bool {
    a.cells()
        .iter()
        .any(|p| b.cells().iter().any(|q| p.touches(q)))
}

/// True iff any pair of different ships in `ships` overlaps or touches.
pub fn fleet_overlaps_or_touches(ships: &[Ship]) -> bool {
    ships.iter().enumerate().any(|(i, a)| {
        ships[i + 1..].iter().any(|b| ships_touch(a, b))
    })
}

/// Check a fleet against every placement rule.
///
/// Rules are tried in a fixed order and the first failure is returned:
/// composition, bounds, per-ship shape, then cross-ship spacing.
pub fn validate_fleet(ships: &[Ship]) -> Result<(), FleetError> {
    let mut lengths: Vec<usize> = ships.iter().map(Ship::len).collect();
    let mut required = FLEET_SIZES.to_vec();
    lengths.sort_unstable();
    required.sort_unstable();
    if lengths != required {
        return Err(FleetError::SizeMismatch);
    }

    if !ships.iter().flat_map(Ship::cells).all(Coord::in_bounds) {
        return Err(FleetError::OutOfBounds);
    }
    for ship in ships {
        ship.check_shape()?;
    }

    if fleet_overlaps_or_touches(ships) {
        return Err(FleetError::TouchOrOverlap);
    }
    Ok(())
}
