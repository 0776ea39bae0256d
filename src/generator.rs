//! Seeded puzzle generation.
//!
//! One `SmallRng` stream per seed feeds every draw in a fixed order, so a
//! `(seed, grid_size)` pair always yields the same layout. Candidate layouts
//! that the solvability search cannot prove solvable are discarded and the
//! next candidate is drawn from the same stream.

use alloc::vec;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::boat::{Boat, Orientation, Role};
use crate::config::{
    clamp_grid_size, exit_row, target_boat_count, MAX_GENERATION_ATTEMPTS,
    MAX_PLACEMENT_ATTEMPTS, OBSTACLE_LENGTHS, PLAYER_LENGTH,
};
use crate::grid::GridState;
use crate::solver::{SearchOutcome, SolvabilityChecker, Verdict};

/// How a layout came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GenerationReport {
    pub seed: u64,
    pub grid_size: usize,
    /// Candidate layouts drawn, the returned one included.
    pub attempts: usize,
    pub verdict: Verdict,
    /// `false` when every attempt failed and the last candidate was kept anyway.
    pub solvable: bool,
}

/// A generated layout with its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub grid: GridState,
    pub report: GenerationReport,
}

/// Builds puzzles from seeds.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    checker: SolvabilityChecker,
    max_attempts: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    pub fn new() -> Self {
        Self {
            checker: SolvabilityChecker::default(),
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }

    /// Use a different solvability checker (e.g. another state cap).
    pub fn with_checker(mut self, checker: SolvabilityChecker) -> Self {
        self.checker = checker;
        self
    }

    /// Number of candidate layouts tried per seed; at least one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn checker(&self) -> &SolvabilityChecker {
        &self.checker
    }

    /// Generate the layout for `seed`. `grid_size` is clamped into the
    /// supported range. Never fails: if no candidate is proven solvable the
    /// last one is returned with `solvable = false`.
    pub fn generate(&self, seed: u64, grid_size: usize) -> Generated {
        let size = clamp_grid_size(grid_size);
        if size != grid_size {
            debug!("grid size {} clamped to {}", grid_size, size);
        }
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut attempt = 1;
        loop {
            let grid = candidate(&mut rng, size);
            let SearchOutcome {
                verdict, visited, ..
            } = self
                .checker
                .search(grid.boats(), size, grid.exit_row());

            if verdict == Verdict::Solvable || attempt >= self.max_attempts {
                let solvable = verdict.is_solvable();
                if solvable {
                    info!(
                        "seed {}: {} boats on {}x{} after {} attempt(s)",
                        seed,
                        grid.boats().len(),
                        size,
                        size,
                        attempt
                    );
                } else {
                    warn!(
                        "seed {}: no layout proven solvable after {} attempts, keeping the last ({:?})",
                        seed, attempt, verdict
                    );
                }
                return Generated {
                    grid,
                    report: GenerationReport {
                        seed,
                        grid_size: size,
                        attempts: attempt,
                        verdict,
                        solvable,
                    },
                };
            }

            debug!(
                "seed {}: attempt {} rejected ({:?}, {} states)",
                seed, attempt, verdict, visited
            );
            attempt += 1;
        }
    }
}

/// [`PuzzleGenerator::generate`] with the default budgets.
pub fn generate(seed: u64, grid_size: usize) -> Generated {
    PuzzleGenerator::new().generate(seed, grid_size)
}

/// Seed for a game the caller did not pick one for.
#[cfg(feature = "std")]
pub fn draw_seed() -> u64 {
    rand::rng().random_range(crate::config::SEED_RANGE)
}

/// Draw one candidate layout: the player boat, then obstacles until the
/// target boat count or the placement budget runs out.
fn candidate<R: Rng>(rng: &mut R, size: usize) -> GridState {
    let row = exit_row(size);
    let player_col = rng.random_range(0..=size - PLAYER_LENGTH);
    let player = Boat::unchecked(
        0,
        row,
        player_col,
        PLAYER_LENGTH,
        Orientation::Horizontal,
        Role::Player,
    );
    let mut occupied = player.mask();
    let mut boats = vec![player];

    let target = target_boat_count(size);
    let mut attempts = 0;
    while boats.len() < target && attempts < MAX_PLACEMENT_ATTEMPTS {
        attempts += 1;
        let length = OBSTACLE_LENGTHS[rng.random_range(0..OBSTACLE_LENGTHS.len())];
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (row, col) = match orientation {
            Orientation::Horizontal => {
                let col = rng.random_range(0..=size - length);
                let row = rng.random_range(0..size);
                (row, col)
            }
            Orientation::Vertical => {
                let col = rng.random_range(0..size);
                let row = rng.random_range(0..=size - length);
                (row, col)
            }
        };
        let boat = Boat::unchecked(
            boats.len(),
            row,
            col,
            length,
            orientation,
            Role::Obstacle,
        );
        let hull = boat.mask();
        if !occupied.overlaps(&hull) {
            occupied |= hull;
            boats.push(boat);
        }
    }
    GridState::assemble(size, boats)
}
