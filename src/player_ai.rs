use rand::rngs::SmallRng;

use crate::{
    ai::Targeting,
    board::ShotHistory,
    common::ShotOutcome,
    fleet::Fleet,
    geometry::Coord,
};

use crate::player::Player;

/// Scripted opponent: random fleet, hunt/lock targeting.
#[derive(Debug, Default)]
pub struct BotPlayer {
    targeting: Targeting,
}

impl BotPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Player for BotPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<Fleet> {
        Ok(Fleet::random(rng)?)
    }

    fn select_target(&mut self, rng: &mut SmallRng, view: &ShotHistory) -> anyhow::Result<Coord> {
        self.targeting
            .select_target(rng, view)
            .ok_or_else(|| anyhow::anyhow!("no unknown cells left to target"))
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: ShotOutcome) {
        self.targeting.observe(coord, outcome);
    }
}
