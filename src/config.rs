//! Harbor dimensions, boat shapes and the budgets that bound generation and search.

use core::ops::RangeInclusive;

pub const MIN_GRID_SIZE: usize = 4;
pub const MAX_GRID_SIZE: usize = 10;
pub const DEFAULT_GRID_SIZE: usize = 6;

pub const MIN_BOAT_LENGTH: usize = 2;
pub const MAX_BOAT_LENGTH: usize = 4;
pub const PLAYER_LENGTH: usize = 2;
/// Lengths drawn for generated obstacle boats.
pub const OBSTACLE_LENGTHS: [usize; 2] = [2, 3];

/// Upper bound on the number of boats (player included) a generated layout aims for.
pub const MAX_BOATS: usize = 10;
/// Obstacle draws per candidate layout before giving up on filling it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 200;
/// Candidate layouts tried per seed before settling for an unverified one.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;
/// Distinct positions the solvability search may record before giving up.
pub const MAX_SEARCH_STATES: usize = 500;

/// Range seeds are drawn from when the caller does not pick one.
pub const SEED_RANGE: RangeInclusive<u64> = 1..=999_999;

/// Row the player boat travels along to leave the harbor.
pub const fn exit_row(grid_size: usize) -> usize {
    grid_size / 2
}

/// Clamp a requested grid size into the supported range.
pub fn clamp_grid_size(grid_size: usize) -> usize {
    grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

/// Number of boats (player included) the generator tries to place.
pub fn target_boat_count(grid_size: usize) -> usize {
    (grid_size + 1).min(MAX_BOATS)
}
