//! Puzzle sessions: moves, drags and the win lock on top of one grid.

use alloc::vec::Vec;
use log::{debug, info};

use crate::{
    common::{Direction, MoveRejection},
    config::clamp_grid_size,
    generator::{GenerationReport, Generated, PuzzleGenerator},
    grid::GridState,
    validator,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Snapshot of a game handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameState {
    pub grid: GridState,
    pub seed: u64,
    pub moves: usize,
    pub status: GameStatus,
    /// Whether the layout was proven solvable when it was generated.
    pub solvable: bool,
}

impl GameState {
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// Win test on a snapshot.
pub fn is_won(state: &GameState) -> bool {
    state.is_won()
}

/// Result of a move command. `state` reflects the grid after the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub accepted: bool,
    pub rejection: Option<MoveRejection>,
    pub state: GameState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    boat_id: usize,
    start: (usize, usize),
}

/// One puzzle session: the grid, its seed, the move counter and any drag in
/// progress. Every session owns its own grid.
///
/// The win condition is only evaluated after an accepted move, so a layout
/// that starts with the player at the exit still needs one move.
#[derive(Debug, Clone)]
pub struct Game {
    generator: PuzzleGenerator,
    grid: GridState,
    start: GridState,
    report: GenerationReport,
    moves: usize,
    won: bool,
    drag: Option<Drag>,
}

impl Game {
    /// Start a session with a freshly generated puzzle.
    pub fn new(seed: u64, grid_size: usize) -> Self {
        Self::with_generator(PuzzleGenerator::new(), seed, grid_size)
    }

    pub fn with_generator(generator: PuzzleGenerator, seed: u64, grid_size: usize) -> Self {
        let generated = generator.generate(seed, grid_size);
        Self {
            generator,
            start: generated.grid.clone(),
            grid: generated.grid,
            report: generated.report,
            moves: 0,
            won: false,
            drag: None,
        }
    }

    /// Start a session on a hand-built layout. The report carries seed 0 and
    /// zero attempts since nothing was generated; resetting restores the layout.
    pub fn from_grid(grid: GridState) -> Self {
        let generator = PuzzleGenerator::new();
        let outcome = generator
            .checker()
            .search(grid.boats(), grid.size(), grid.exit_row());
        let report = GenerationReport {
            seed: 0,
            grid_size: grid.size(),
            attempts: 0,
            verdict: outcome.verdict,
            solvable: outcome.verdict.is_solvable(),
        };
        Self {
            generator,
            start: grid.clone(),
            grid,
            report,
            moves: 0,
            won: false,
            drag: None,
        }
    }

    /// Replace the puzzle with the one generated from `seed` at the current size.
    pub fn new_game(&mut self, seed: u64) -> GameState {
        let generated = self.generator.generate(seed, self.grid.size());
        self.install(generated);
        info!("new game: seed {}, {}x{}", seed, self.grid.size(), self.grid.size());
        self.snapshot()
    }

    /// Back to the starting layout of the current seed.
    pub fn reset_game(&mut self) -> GameState {
        self.grid = self.start.clone();
        self.moves = 0;
        self.won = false;
        self.drag = None;
        debug!("reset to seed {}", self.report.seed);
        self.snapshot()
    }

    /// Switch to a new grid size (clamped) and start a game with `seed`.
    pub fn change_grid_size(&mut self, grid_size: usize, seed: u64) -> GameState {
        let size = clamp_grid_size(grid_size);
        let generated = self.generator.generate(seed, size);
        self.install(generated);
        info!("grid size now {}x{} (seed {})", size, size, seed);
        self.snapshot()
    }

    /// Slide a boat one cell.
    pub fn try_move(&mut self, boat_id: usize, direction: Direction) -> MoveResult {
        if let Some(reason) = self.busy() {
            return self.rejected(reason);
        }
        match validator::check_step(&self.grid, boat_id, direction) {
            Ok((row, col)) => self.commit(boat_id, row, col),
            Err(reason) => {
                debug!("boat {} {} refused: {}", boat_id, direction, reason);
                self.rejected(reason)
            }
        }
    }

    /// Slide a boat straight to (`row`, `col`) as one move. A zero-length
    /// slide is accepted but not counted.
    pub fn try_move_to(&mut self, boat_id: usize, row: isize, col: isize) -> MoveResult {
        if let Some(reason) = self.busy() {
            return self.rejected(reason);
        }
        match validator::check_move(&self.grid, boat_id, row, col) {
            Ok((row, col)) => self.commit(boat_id, row, col),
            Err(reason) => self.rejected(reason),
        }
    }

    /// Pick up a boat for dragging. Keyboard moves and other drags are
    /// refused until the drag ends or is cancelled.
    pub fn begin_drag(&mut self, boat_id: usize) -> Result<(), MoveRejection> {
        if let Some(reason) = self.busy() {
            return Err(reason);
        }
        let boat = self
            .grid
            .boat(boat_id)
            .ok_or(MoveRejection::UnknownBoat(boat_id))?;
        self.drag = Some(Drag {
            boat_id,
            start: boat.origin(),
        });
        Ok(())
    }

    /// Follow the pointer to cell (`row`, `col`). The cell is locked to the
    /// boat's axis and clamped into the grid; the boat moves there only if
    /// the path is clear, otherwise it stays put. Not counted as a move.
    pub fn drag_to(&mut self, row: isize, col: isize) -> MoveResult {
        if self.won {
            return self.rejected(MoveRejection::GameOver);
        }
        let Some(drag) = self.drag else {
            return self.rejected(MoveRejection::NoDragInProgress);
        };
        let Some(boat) = self.grid.boat(drag.boat_id) else {
            return self.rejected(MoveRejection::UnknownBoat(drag.boat_id));
        };
        let (rows, cols) = boat.extent();
        let max_row = (self.grid.size() - rows) as isize;
        let max_col = (self.grid.size() - cols) as isize;
        let (row, col) = if boat.is_horizontal() {
            (boat.row() as isize, col.clamp(0, max_col))
        } else {
            (row.clamp(0, max_row), boat.col() as isize)
        };
        match validator::check_move(&self.grid, drag.boat_id, row, col) {
            Ok((row, col)) => {
                self.grid.move_boat(drag.boat_id, row, col);
                self.accepted()
            }
            Err(reason) => self.rejected(reason),
        }
    }

    /// Drop the dragged boat where it is. Counts one move if it left its
    /// start cell; `accepted` is `false` with no rejection when it did not.
    pub fn end_drag(&mut self) -> MoveResult {
        let Some(drag) = self.drag.take() else {
            return self.rejected(MoveRejection::NoDragInProgress);
        };
        let moved = self
            .grid
            .boat(drag.boat_id)
            .is_some_and(|b| b.origin() != drag.start);
        if !moved {
            return MoveResult {
                accepted: false,
                rejection: None,
                state: self.snapshot(),
            };
        }
        self.moves += 1;
        self.check_win();
        self.accepted()
    }

    /// Abandon the drag and put the boat back on its start cell. If the start
    /// cell is no longer free the boat is dropped where it is, as `end_drag`
    /// would.
    pub fn cancel_drag(&mut self) -> GameState {
        let Some(drag) = self.drag else {
            return self.snapshot();
        };
        let (row, col) = drag.start;
        let free = self
            .grid
            .boat(drag.boat_id)
            .is_some_and(|b| validator::position_free(&self.grid, b, row, col));
        if free {
            self.drag = None;
            self.grid.move_boat(drag.boat_id, row, col);
            self.snapshot()
        } else {
            debug!("start cell of boat {} taken, dropping it in place", drag.boat_id);
            self.end_drag().state
        }
    }

    /// Id of the boat being dragged, if any.
    pub fn dragging(&self) -> Option<usize> {
        self.drag.map(|d| d.boat_id)
    }

    /// Directions the boat can take a single step in right now.
    pub fn movable_directions(&self, boat_id: usize) -> Vec<Direction> {
        if self.won {
            return Vec::new();
        }
        validator::movable_directions(&self.grid, boat_id)
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn seed(&self) -> u64 {
        self.report.seed
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    pub fn snapshot(&self) -> GameState {
        GameState {
            grid: self.grid.clone(),
            seed: self.report.seed,
            moves: self.moves,
            status: self.status(),
            solvable: self.report.solvable,
        }
    }

    fn busy(&self) -> Option<MoveRejection> {
        if self.won {
            Some(MoveRejection::GameOver)
        } else if self.drag.is_some() {
            Some(MoveRejection::DragInProgress)
        } else {
            None
        }
    }

    fn install(&mut self, generated: Generated) {
        self.start = generated.grid.clone();
        self.grid = generated.grid;
        self.report = generated.report;
        self.moves = 0;
        self.won = false;
        self.drag = None;
    }

    fn commit(&mut self, boat_id: usize, row: usize, col: usize) -> MoveResult {
        let moved = self
            .grid
            .boat(boat_id)
            .is_some_and(|b| b.origin() != (row, col));
        if moved {
            self.grid.move_boat(boat_id, row, col);
            self.moves += 1;
            self.check_win();
        }
        self.accepted()
    }

    fn check_win(&mut self) {
        if !self.won && self.grid.is_won() {
            self.won = true;
            info!("puzzle solved in {} moves (seed {})", self.moves, self.report.seed);
        }
    }

    fn accepted(&self) -> MoveResult {
        MoveResult {
            accepted: true,
            rejection: None,
            state: self.snapshot(),
        }
    }

    fn rejected(&self, reason: MoveRejection) -> MoveResult {
        MoveResult {
            accepted: false,
            rejection: Some(reason),
            state: self.snapshot(),
        }
    }
}
