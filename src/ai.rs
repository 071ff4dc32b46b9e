// Opponent targeting: random search, hunting around a hit, and finishing a
// ship once its axis is known.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::ShotHistory;
use crate::common::ShotOutcome;
use crate::geometry::Coord;
use crate::ship::{infer_orientation, Orientation};

/// Shot selection strategy currently in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// No live target; shoot any unknown cell.
    Random,
    /// A ship has been hit; probe around the chained hits.
    Hunt,
    /// The ship's axis is known; extend the line of hits.
    Locked,
}

/// Targeting memory of the automated opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targeting {
    mode: TargetMode,
    chain: Vec<Coord>,
    orientation: Option<Orientation>,
}

impl Default for Targeting {
    fn default() -> Self {
        Self::new()
    }
}

impl Targeting {
    pub fn new() -> Self {
        Self {
            mode: TargetMode::Random,
            chain: Vec::new(),
            orientation: None,
        }
    }

    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    /// Unresolved hits on the ship currently being targeted.
    pub fn chain(&self) -> &[Coord] {
        &self.chain
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Choose the next cell to shoot at on `view`.
    ///
    /// Locked falls back to Hunt when both ends of the line are resolved, and
    /// Hunt falls back to Random when no neighbour of the chain is left. The
    /// fallback sticks: the stored mode is downgraded. Returns `None` only
    /// when the whole board is resolved.
    pub fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        view: &ShotHistory,
    ) -> Option<Coord> {
        if self.mode == TargetMode::Locked {
            if let Some(target) = self.frontier(view).choose(rng) {
                return Some(*target);
            }
            debug!("locked line exhausted, falling back to hunt");
            self.mode = TargetMode::Hunt;
        }
        if self.mode == TargetMode::Hunt {
            if let Some(target) = self.hunt_candidates(view).choose(rng) {
                return Some(*target);
            }
            debug!("no unknown cells around the hit chain, falling back to random");
            self.mode = TargetMode::Random;
        }
        view.unknown_cells().choose(rng).copied()
    }

    /// Update the targeting memory with the outcome of our last shot.
    pub fn observe(&mut self, coord: Coord, outcome: ShotOutcome) {
        let before = self.mode;
        match outcome {
            ShotOutcome::Hit => {
                if !self.chain.contains(&coord) {
                    self.chain.push(coord);
                }
                self.mode = TargetMode::Hunt;
                self.orientation = infer_orientation(&self.chain);
                if self.orientation.is_some() && self.chain.len() >= 2 {
                    self.mode = TargetMode::Locked;
                }
            }
            ShotOutcome::Sink => {
                self.chain.clear();
                self.orientation = None;
                self.mode = TargetMode::Random;
            }
            ShotOutcome::Miss => {
                if self.mode == TargetMode::Hunt && self.chain.len() >= 2 {
                    self.orientation = infer_orientation(&self.chain);
                    if self.orientation.is_some() {
                        self.mode = TargetMode::Locked;
                    }
                }
            }
        }
        if before != self.mode {
            trace!("targeting {:?} -> {:?} after {} at {}", before, self.mode, outcome, coord);
        }
    }

    /// Unknown orthogonal neighbours of every chained hit.
    pub fn hunt_candidates(&self, view: &ShotHistory) -> Vec<Coord> {
        let mut out: Vec<Coord> = Vec::new();
        for hit in &self.chain {
            for next in hit.orthogonal_neighbors() {
                if view.is_unknown(next) && !out.contains(&next) {
                    out.push(next);
                }
            }
        }
        out
    }

    /// The unknown cells just beyond both ends of the chain along its axis.
    pub fn frontier(&self, view: &ShotHistory) -> Vec<Coord> {
        let (Some(orientation), Some(first)) = (self.orientation, self.chain.first()) else {
            return Vec::new();
        };
        let (low, high) = match orientation {
            Orientation::Horizontal => {
                let min = self.chain.iter().map(|c| c.col).min().unwrap_or(first.col);
                let max = self.chain.iter().map(|c| c.col).max().unwrap_or(first.col);
                (
                    min.checked_sub(1).map(|c| Coord::new(first.row, c)),
                    Coord::new(first.row, max + 1),
                )
            }
            Orientation::Vertical => {
                let min = self.chain.iter().map(|c| c.row).min().unwrap_or(first.row);
                let max = self.chain.iter().map(|c| c.row).max().unwrap_or(first.row);
                (
                    min.checked_sub(1).map(|r| Coord::new(r, first.col)),
                    Coord::new(max + 1, first.col),
                )
            }
        };
        low.into_iter()
            .chain(Some(high))
            .filter(|c| view.is_unknown(*c))
            .collect()
    }
}
