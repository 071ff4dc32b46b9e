#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::string::String;
use std::vec::Vec;

use rand::rngs::SmallRng;

use crate::{
    board::ShotHistory,
    common::{BoardError, CellState, ShotOutcome},
    config::{BOARD_SIZE, FLEET_SIZES},
    fleet::Fleet,
    game::Game,
    geometry::Coord,
    notation::{parse_move, parse_ship, NotationError},
    ship::Ship,
    ui::render_boards,
};

use crate::player::Player;

/// Standard input reached end of file while a prompt was waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input closed")
    }
}

impl std::error::Error for InputClosed {}

/// Human player at a text console.
///
/// Generic over its input and output so the prompts can be driven from
/// memory in tests; [`CliPlayer::stdio`] wires it to the terminal.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    // set once the bot's turn banner is out, cleared when our turn starts
    bot_turn_shown: bool,
}

impl CliPlayer<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            bot_turn_shown: false,
        }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }

    /// Ask until a well-formed ship of `size` cells is entered. An empty
    /// answer is returned as `None`.
    fn prompt_ship(&mut self, size: usize, index: usize) -> anyhow::Result<Option<Ship>> {
        loop {
            let line = self.prompt(&format!(
                "Ship #{} (size {}). Enter coords: ",
                index, size
            ))?;
            if line.is_empty() {
                return Ok(None);
            }
            match parse_ship(&line, size) {
                Ok(ship) => return Ok(Some(ship)),
                Err(NotationError::WrongLength { expected, got }) => {
                    writeln!(self.output, "Error: expected {} cells, got {}.", expected, got)?
                }
                Err(e) => writeln!(self.output, "Error: {} Try again.", e)?,
            }
        }
    }

    fn print_placement_help(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\nPlace your ships on a {n}x{n} board (A1-J{n}).\n\n\
             Allowed formats:\n\
             - Space list:   A1 A2 A3\n\
             - Range:        B4-B6\n\
             - Single cell:  J10   (only for size 1 ships)\n\n\
             Ships must not touch each other (even diagonally).\n\
             Press enter at the first prompt for a random fleet.\n",
            n = BOARD_SIZE
        )
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<Fleet> {
        self.print_placement_help()?;
        loop {
            let mut ships = Vec::with_capacity(FLEET_SIZES.len());
            for (i, &size) in FLEET_SIZES.iter().enumerate() {
                loop {
                    match self.prompt_ship(size, i + 1)? {
                        Some(ship) => {
                            ships.push(ship);
                            break;
                        }
                        None if i == 0 => {
                            let fleet = Fleet::random(rng)?;
                            writeln!(self.output, "Random fleet placed.")?;
                            return Ok(fleet);
                        }
                        None => writeln!(self.output, "Error: Bad format. Try again.")?,
                    }
                }
            }
            match Fleet::new(ships) {
                Ok(fleet) => return Ok(fleet),
                Err(e) => {
                    writeln!(self.output, "Fleet invalid: {}", e)?;
                    writeln!(self.output, "Re-enter the whole fleet.\n")?;
                }
            }
        }
    }

    fn select_target(&mut self, _rng: &mut SmallRng, view: &ShotHistory) -> anyhow::Result<Coord> {
        loop {
            let line = self.prompt(&format!("Move (A1..J{}): ", BOARD_SIZE))?;
            match parse_move(&line) {
                Ok(coord) if view.cell(coord) != Some(CellState::Unknown) => {
                    writeln!(self.output, "Already shot there.")?
                }
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn handle_shot_result(&mut self, _coord: Coord, outcome: ShotOutcome) {
        let _ = writeln!(self.output, "Result: {}", outcome);
        if outcome.grants_extra_shot() {
            let _ = writeln!(self.output, "Hit! Extra shot.");
        }
    }

    fn handle_rejected_shot(&mut self, coord: Coord, err: &BoardError) {
        let _ = writeln!(self.output, "Shot at {} rejected: {}", coord, err);
    }

    fn handle_opponent_shot(&mut self, coord: Coord, outcome: ShotOutcome) {
        if !self.bot_turn_shown {
            let _ = writeln!(self.output, "\n=== Bot turn ===");
            self.bot_turn_shown = true;
        }
        let _ = writeln!(self.output, "Bot shot {} -> {}", coord, outcome);
        if outcome.grants_extra_shot() {
            let _ = writeln!(self.output, "Bot hit! Bot gets extra shot.");
        }
    }

    fn show_game(&mut self, game: &Game) {
        self.bot_turn_shown = false;
        let _ = writeln!(self.output, "{}", render_boards(game));
        let _ = writeln!(self.output, "\n=== Your turn ===");
    }
}
