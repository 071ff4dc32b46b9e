//! Validated fleets and random fleet generation.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::common::{FleetError, Grid};
use crate::config::{BOARD_SIZE, FLEET_SIZES, MAX_FLEET_RESTARTS, MAX_PLACEMENT_ATTEMPTS};
use crate::geometry::{validate_fleet, Coord};
use crate::ship::{Orientation, Ship};

/// A ship together with its precomputed occupancy mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedShip {
    ship: Ship,
    mask: Grid,
}

impl PlacedShip {
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn mask(&self) -> Grid {
        self.mask
    }
}

/// A complete fleet that satisfies every placement rule.
///
/// The only way to obtain a `Fleet` is through validation, so code holding
/// one may assume all ships are straight, in bounds and well separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<PlacedShip>,
    mask: Grid,
}

impl Fleet {
    /// Validate `ships` and assemble them into a fleet.
    pub fn new(ships: Vec<Ship>) -> Result<Self, FleetError> {
        validate_fleet(&ships)?;
        let mut mask = Grid::new();
        let mut placed = Vec::with_capacity(ships.len());
        for ship in ships {
            let ship_mask = ship.mask().map_err(|_| FleetError::OutOfBounds)?;
            mask |= ship_mask;
            placed.push(PlacedShip {
                ship,
                mask: ship_mask,
            });
        }
        Ok(Self {
            ships: placed,
            mask,
        })
    }

    /// Generate a random fleet with the default retry budgets.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, FleetError> {
        Self::random_with_budget(rng, MAX_PLACEMENT_ATTEMPTS, MAX_FLEET_RESTARTS)
    }

    /// Rejection-sampling generator, largest ship first.
    ///
    /// Each ship gets up to `attempts` random placements that keep clear of
    /// the ships placed so far. If one ship cannot be placed the whole fleet
    /// is thrown away and generation starts over, at most `restarts` times.
    pub fn random_with_budget<R: Rng + ?Sized>(
        rng: &mut R,
        attempts: usize,
        restarts: usize,
    ) -> Result<Self, FleetError> {
        for restart in 0..restarts {
            let Some(ships) = place_all(rng, attempts) else {
                debug!("fleet generation restart {} after a stuck placement", restart + 1);
                continue;
            };
            match Fleet::new(ships) {
                Ok(fleet) => {
                    debug!("random fleet generated after {} restarts", restart);
                    return Ok(fleet);
                }
                Err(e) => debug!("generated fleet rejected: {}", e),
            }
        }
        warn!("fleet generation exhausted {} restarts", restarts);
        Err(FleetError::PlacementExhausted { restarts })
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().map(PlacedShip::ship)
    }

    pub fn placed(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Number of ships.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Union of all ship cells: the static ship layout.
    pub fn mask(&self) -> Grid {
        self.mask
    }

    /// The ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&PlacedShip> {
        self.ships.iter().find(|p| p.ship.contains(coord))
    }
}

/// One pass over the required sizes; `None` when some ship found no spot.
fn place_all<R: Rng + ?Sized>(rng: &mut R, attempts: usize) -> Option<Vec<Ship>> {
    let mut ships = Vec::with_capacity(FLEET_SIZES.len());
    // cells that new ships may not use: placed ships plus their borders
    let mut blocked = Grid::new();
    for &size in FLEET_SIZES.iter() {
        let (ship, mask) = (0..attempts).find_map(|_| {
            let ship = random_ship(rng, size);
            let mask = ship.mask().ok()?;
            (mask & blocked).is_empty().then_some((ship, mask))
        })?;
        blocked |= mask.dilate();
        ships.push(ship);
    }
    Some(ships)
}

/// Uniform orientation and an origin that keeps the whole ship on the board.
fn random_ship<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Ship {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let max_r = if orientation == Orientation::Vertical {
        BOARD_SIZE - size
    } else {
        BOARD_SIZE - 1
    };
    let max_c = if orientation == Orientation::Horizontal {
        BOARD_SIZE - size
    } else {
        BOARD_SIZE - 1
    };
    let origin = Coord::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
    Ship::straight(origin, orientation, size)
}
