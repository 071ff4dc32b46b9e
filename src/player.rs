use rand::rngs::SmallRng;

use crate::{
    board::ShotHistory,
    common::{BoardError, ShotOutcome},
    fleet::Fleet,
    game::Game,
    geometry::Coord,
};

/// Interface implemented by the two kinds of participant: the console human
/// and the scripted opponent.
pub trait Player {
    /// Produce this side's fleet.
    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<Fleet>;

    /// Choose the next target given what is known about the opposing board.
    fn select_target(&mut self, rng: &mut SmallRng, view: &ShotHistory) -> anyhow::Result<Coord>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coord, _outcome: ShotOutcome) {}

    /// Inform the player that its last shot was rejected.
    fn handle_rejected_shot(&mut self, _coord: Coord, _err: &BoardError) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _coord: Coord, _outcome: ShotOutcome) {}

    /// Called when control passes to this player's side.
    fn show_game(&mut self, _game: &Game) {}
}
