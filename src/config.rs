pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 10;

/// Required ship lengths, largest first. Placement follows this order.
pub const FLEET_SIZES: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random placements tried for a single ship before the fleet is restarted.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 5000;

/// Whole-fleet restarts before random generation gives up.
pub const MAX_FLEET_RESTARTS: usize = 1000;

/// Environment variable read by [`init_logging`](crate::init_logging).
pub const LOG_ENV_VAR: &str = "BATTLESHIP_LOG";

/// Directory holding the fleet tables and the move log.
pub const DEFAULT_DATA_DIR: &str = "data";
