//! Cell labels and the three ship notations accepted at the console.
//!
//! * whitespace list: `A1 A2 A3`
//! * inclusive range within one row or column: `B4-B6`, `D2-B2`
//! * bare cell: `J10`

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Write;

use crate::config::BOARD_SIZE;
use crate::geometry::Coord;
use crate::ship::Ship;

/// Why a piece of console input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Input matches none of the accepted shapes.
    BadFormat,
    /// A range whose ends share neither row nor column.
    NotStraight,
    /// A cell label beyond `A1..J10`.
    OutOfBounds,
    /// Ship has a different number of cells than requested.
    WrongLength { expected: usize, got: usize },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::BadFormat => write!(f, "Bad format."),
            NotationError::NotStraight => write!(f, "Ship must be horizontal or vertical."),
            NotationError::OutOfBounds => write!(
                f,
                "Out of bounds. Use A1..{}{}.",
                last_column(),
                BOARD_SIZE
            ),
            NotationError::WrongLength { expected, got } => {
                write!(f, "expected {} cells, got {}.", expected, got)
            }
        }
    }
}

impl core::error::Error for NotationError {}

fn last_column() -> char {
    (b'A' + (BOARD_SIZE - 1) as u8) as char
}

/// Parse a single label such as `a1` or `J10`.
///
/// The letter is case-insensitive; the number is 1-based. Labels that are
/// well formed but outside the grid yield [`NotationError::OutOfBounds`].
pub fn parse_cell(input: &str) -> Result<Coord, NotationError> {
    let input = input.trim();
    let mut chars = input.chars();
    let letter = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or(NotationError::BadFormat)?
        .to_ascii_uppercase();
    let digits = chars.as_str();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(NotationError::BadFormat);
    }
    let row: usize = digits.parse().map_err(|_| NotationError::OutOfBounds)?;
    let col = (letter as u8 - b'A') as usize;
    if row == 0 {
        return Err(NotationError::OutOfBounds);
    }
    let coord = Coord::new(row - 1, col);
    if !coord.in_bounds() {
        return Err(NotationError::OutOfBounds);
    }
    Ok(coord)
}

/// Parse a move typed at the prompt: a single label of two or three
/// characters, e.g. `A1` or `j10`.
pub fn parse_move(input: &str) -> Result<Coord, NotationError> {
    let input = input.trim();
    if !(2..=3).contains(&input.len()) {
        return Err(NotationError::BadFormat);
    }
    parse_cell(input)
}

/// Expand an inclusive range; both ends must share a row or a column.
fn parse_range(from: Coord, to: Coord) -> Result<Vec<Coord>, NotationError> {
    if from.row == to.row {
        let (lo, hi) = (from.col.min(to.col), from.col.max(to.col));
        let mut cells: Vec<Coord> = (lo..=hi).map(|c| Coord::new(from.row, c)).collect();
        if to.col < from.col {
            cells.reverse();
        }
        Ok(cells)
    } else if from.col == to.col {
        let (lo, hi) = (from.row.min(to.row), from.row.max(to.row));
        let mut cells: Vec<Coord> = (lo..=hi).map(|r| Coord::new(r, from.col)).collect();
        if to.row < from.row {
            cells.reverse();
        }
        Ok(cells)
    } else {
        Err(NotationError::NotStraight)
    }
}

/// Parse the cells of one ship in any of the three notations.
pub fn parse_cells(input: &str) -> Result<Vec<Coord>, NotationError> {
    let input = input.trim();
    if input.split_whitespace().nth(1).is_some() {
        return input.split_whitespace().map(parse_cell).collect();
    }
    if let Some((from, to)) = input.split_once('-') {
        if to.contains('-') {
            return Err(NotationError::BadFormat);
        }
        return parse_range(parse_cell(from)?, parse_cell(to)?);
    }
    if input.is_empty() {
        return Err(NotationError::BadFormat);
    }
    Ok(alloc::vec![parse_cell(input)?])
}

/// Parse one ship that must cover exactly `size` cells.
pub fn parse_ship(input: &str, size: usize) -> Result<Ship, NotationError> {
    let cells = parse_cells(input)?;
    if cells.len() != size {
        return Err(NotationError::WrongLength {
            expected: size,
            got: cells.len(),
        });
    }
    Ok(Ship::new(cells))
}

/// Comma-joined labels, e.g. `A1,A2,A3`, as stored in the fleet tables.
pub fn format_cells(cells: &[Coord]) -> String {
    let mut out = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}", cell);
    }
    out
}
