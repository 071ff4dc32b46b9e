#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    common::CellState,
    config::BOARD_SIZE,
    game::{Game, Side},
    geometry::Coord,
};

const COLUMN_WIDTH: usize = 32;

fn header() -> String {
    let mut line = String::from("   ");
    for c in 0..BOARD_SIZE {
        if c > 0 {
            line.push(' ');
        }
        line.push((b'A' + c as u8) as char);
    }
    line
}

/// Symbol for a cell of the player's own board: ships are revealed.
fn own_cell(game: &Game, coord: Coord) -> char {
    let board = game.board(Side::Player);
    match board.history().cell(coord) {
        Some(CellState::Unknown) if board.has_ship(coord) => 'S',
        Some(state) => state.symbol(),
        None => ' ',
    }
}

/// Symbol for a cell of the enemy board: fog of war.
fn enemy_cell(game: &Game, coord: Coord) -> char {
    game.target_view(Side::Player)
        .cell(coord)
        .map(|s| s.symbol())
        .unwrap_or(' ')
}

fn board_row(row: usize, cell: impl Fn(Coord) -> char) -> String {
    let mut line = format!("{:>2} ", row + 1);
    for col in 0..BOARD_SIZE {
        if col > 0 {
            line.push(' ');
        }
        line.push(cell(Coord::new(row, col)));
    }
    line
}

/// Side-by-side text view: own fleet on the left, enemy waters on the right.
pub fn render_boards(game: &Game) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(
        out,
        "Turn: {} | Next: {}",
        game.turn_number(),
        game.current_side().as_str()
    );
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "\n{:<w$}{}",
        "Your board (ships visible)",
        "Enemy board (fog of war)",
        w = COLUMN_WIDTH
    );
    let _ = writeln!(out, "{:<w$}{}", header(), header(), w = COLUMN_WIDTH);
    for row in 0..BOARD_SIZE {
        let left = board_row(row, |c| own_cell(game, c));
        let right = board_row(row, |c| enemy_cell(game, c));
        let _ = writeln!(out, "{:<w$}{}", left, right, w = COLUMN_WIDTH);
    }
    let _ = write!(
        out,
        "Ships afloat: yours {}, enemy {}",
        game.board(Side::Player).ships_afloat(),
        game.board(Side::Bot).ships_afloat()
    );
    out
}
