use log::{debug, info, trace};
use rand::rngs::SmallRng;

use crate::{
    board::{Board, ShotHistory},
    common::{BoardError, ShotOutcome},
    fleet::Fleet,
    geometry::Coord,
    player::Player,
};

/// The two participants. The human always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Bot,
            Side::Bot => Side::Player,
        }
    }

    /// Actor label used in the move log.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Bot => "bot",
        }
    }

    fn index(&self) -> usize {
        match self {
            Side::Player => 0,
            Side::Bot => 1,
        }
    }
}

/// Current status of a game, from the human side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Both boards plus whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    boards: [Board; 2],
    current: Side,
    turn_number: u32,
    extra_shot: [bool; 2],
}

impl Game {
    pub fn new(player_fleet: Fleet, bot_fleet: Fleet) -> Self {
        Self {
            boards: [Board::new(player_fleet), Board::new(bot_fleet)],
            current: Side::Player,
            turn_number: 1,
            extra_shot: [false; 2],
        }
    }

    pub fn current_side(&self) -> Side {
        self.current
    }

    /// Starts at 1; bumped each time control returns to the player.
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Whether `side` earned another shot with its last one.
    pub fn extra_shot(&self, side: Side) -> bool {
        self.extra_shot[side.index()]
    }

    /// The board holding `side`'s own fleet.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// What `side` knows about the board it shoots at.
    pub fn target_view(&self, side: Side) -> &ShotHistory {
        self.board(side.opponent()).history()
    }

    /// Fire the current side's shot at the opposing board.
    ///
    /// A rejected shot leaves turn state and flags untouched.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        let side = self.current;
        let outcome = self.boards[side.opponent().index()].fire(coord)?;
        self.extra_shot[side.index()] = outcome.grants_extra_shot();
        debug!("{} fired at {} -> {}", side.as_str(), coord, outcome);
        Ok(outcome)
    }

    /// Pass control to the other side and clear both extra-shot flags.
    pub fn end_turn(&mut self) {
        self.extra_shot = [false; 2];
        self.current = self.current.opponent();
        if self.current == Side::Player {
            self.turn_number += 1;
        }
        trace!("turn {} now with {}", self.turn_number, self.current.as_str());
    }

    /// True once every ship of `side` is sunk.
    pub fn fleet_sunk(&self, side: Side) -> bool {
        self.board(side).all_sunk()
    }

    pub fn status(&self) -> GameStatus {
        if self.fleet_sunk(Side::Bot) {
            GameStatus::Won
        } else if self.fleet_sunk(Side::Player) {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}

/// One shot as seen by a [`MoveSink`]. Rejected shots carry their error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEvent {
    /// 1-based sequence number over the whole game.
    pub seq: u32,
    pub turn: u32,
    pub side: Side,
    pub coord: Coord,
    pub result: Result<ShotOutcome, BoardError>,
}

impl MoveEvent {
    /// `hit`, `miss`, `sink` or `invalid`.
    pub fn outcome_label(&self) -> &'static str {
        match &self.result {
            Ok(outcome) => outcome.as_str(),
            Err(_) => "invalid",
        }
    }
}

/// Receives every shot right after it is resolved.
pub trait MoveSink {
    fn record(&mut self, event: &MoveEvent, game: &Game) -> anyhow::Result<()>;
}

/// Discards all events.
impl MoveSink for () {
    fn record(&mut self, _event: &MoveEvent, _game: &Game) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Collects events in memory.
impl MoveSink for alloc::vec::Vec<MoveEvent> {
    fn record(&mut self, event: &MoveEvent, _game: &Game) -> anyhow::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

/// Play `game` to the end.
///
/// The acting side keeps shooting while it hits; the game is over the moment
/// a fleet is sunk. Rejected shots are reported to the sink and the shooter
/// is asked again. The bot only picks unknown cells, so a rejected bot shot
/// is an error.
pub fn run_game(
    game: &mut Game,
    player: &mut dyn Player,
    bot: &mut dyn Player,
    rng: &mut SmallRng,
    sink: &mut dyn MoveSink,
) -> anyhow::Result<GameStatus> {
    let mut seq = 0u32;
    let mut announced = None;
    loop {
        let side = game.current_side();
        let (actor, other): (&mut dyn Player, &mut dyn Player) = match side {
            Side::Player => (&mut *player, &mut *bot),
            Side::Bot => (&mut *bot, &mut *player),
        };
        if announced != Some((side, game.turn_number())) {
            actor.show_game(game);
            announced = Some((side, game.turn_number()));
        }

        let coord = actor.select_target(rng, game.target_view(side))?;
        let result = game.fire(coord);
        seq += 1;
        let event = MoveEvent {
            seq,
            turn: game.turn_number(),
            side,
            coord,
            result: result.clone(),
        };
        sink.record(&event, game)?;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) if side == Side::Bot => {
                return Err(anyhow::anyhow!("bot selected an invalid target {}: {}", coord, e));
            }
            Err(e) => {
                info!("rejected {} shot at {}: {}", side.as_str(), coord, e);
                actor.handle_rejected_shot(coord, &e);
                continue;
            }
        };
        actor.handle_shot_result(coord, outcome);
        other.handle_opponent_shot(coord, outcome);

        let status = game.status();
        if status != GameStatus::InProgress {
            return Ok(status);
        }
        if !game.extra_shot(side) {
            game.end_turn();
        }
    }
}
