#![allow(dead_code)]

use std::collections::VecDeque;

use anyhow::anyhow;
use battleship_hunt::{BoardError, Coord, Fleet, Player, Ship, ShotHistory, ShotOutcome};
use rand::rngs::SmallRng;

pub fn ship(cells: &[(usize, usize)]) -> Ship {
    Ship::new(cells.iter().map(|&c| Coord::from(c)).collect())
}

/// A1-D1, A3-C3, E3-G3, F1-G1, I1-J1, A5-B5, D5, F5, H5, J5
pub fn standard_ships() -> Vec<Ship> {
    vec![
        ship(&[(0, 0), (0, 1), (0, 2), (0, 3)]),
        ship(&[(2, 0), (2, 1), (2, 2)]),
        ship(&[(2, 4), (2, 5), (2, 6)]),
        ship(&[(0, 5), (0, 6)]),
        ship(&[(0, 8), (0, 9)]),
        ship(&[(4, 0), (4, 1)]),
        ship(&[(4, 3)]),
        ship(&[(4, 5)]),
        ship(&[(4, 7)]),
        ship(&[(4, 9)]),
    ]
}

/// The same fleet as typed at the placement prompt.
pub const STANDARD_INPUT: &str =
    "A1-D1\nA3 B3 C3\nG3-E3\nF1-G1\nI1-J1\nA5-B5\nD5\nF5\nH5\nj5\n";

pub fn standard_fleet() -> Fleet {
    Fleet::new(standard_ships()).unwrap()
}

/// The standard fleet mirrored along the main diagonal.
pub fn transposed_fleet() -> Fleet {
    let ships = standard_ships()
        .iter()
        .map(|s| Ship::new(s.cells().iter().map(|c| Coord::new(c.col, c.row)).collect()))
        .collect();
    Fleet::new(ships).unwrap()
}

/// Every ship cell of `fleet`, in placement order.
pub fn fleet_cells(fleet: &Fleet) -> Vec<Coord> {
    fleet.ships().flat_map(|s| s.cells().to_vec()).collect()
}

/// Player that fires a fixed list of shots and remembers what it was told.
#[derive(Default)]
pub struct ScriptedPlayer {
    pub shots: VecDeque<Coord>,
    pub results: Vec<(Coord, ShotOutcome)>,
    pub rejected: Vec<(Coord, BoardError)>,
    pub incoming: Vec<(Coord, ShotOutcome)>,
}

impl ScriptedPlayer {
    pub fn new(shots: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            shots: shots.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Player for ScriptedPlayer {
    fn place_fleet(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Fleet> {
        Ok(standard_fleet())
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _view: &ShotHistory) -> anyhow::Result<Coord> {
        self.shots.pop_front().ok_or_else(|| anyhow!("script exhausted"))
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: ShotOutcome) {
        self.results.push((coord, outcome));
    }

    fn handle_rejected_shot(&mut self, coord: Coord, err: &BoardError) {
        self.rejected.push((coord, err.clone()));
    }

    fn handle_opponent_shot(&mut self, coord: Coord, outcome: ShotOutcome) {
        self.incoming.push((coord, outcome));
    }
}
