//! Move legality for a single boat.
//!
//! A move is legal when the boat stays on the grid, keeps to its own axis and
//! can slide to the target one cell at a time without any intermediate hull
//! touching another boat. None of these functions mutate the grid.

use alloc::vec::Vec;

use crate::boat::{within, Boat};
use crate::common::{Direction, MoveRejection};
use crate::grid::GridState;

/// Check sliding boat `boat_id` so that its origin lands on
/// (`target_row`, `target_col`). Returns the target as grid coordinates.
pub fn check_move(
    grid: &GridState,
    boat_id: usize,
    target_row: isize,
    target_col: isize,
) -> Result<(usize, usize), MoveRejection> {
    let boat = grid
        .boat(boat_id)
        .ok_or(MoveRejection::UnknownBoat(boat_id))?;
    let (row, col) =
        target_origin(grid, boat, target_row, target_col).ok_or(MoveRejection::OutOfBounds)?;

    let locked = if boat.is_horizontal() {
        row == boat.row()
    } else {
        col == boat.col()
    };
    if !locked {
        return Err(MoveRejection::WrongAxis);
    }

    let target = if boat.is_horizontal() { col } else { row };
    let mut coord = boat.moving_coord();
    while coord != target {
        coord = if target > coord { coord + 1 } else { coord - 1 };
        let (r, c) = boat.position_for(coord);
        if let Some(by) = grid.blocker(&boat.mask_at(r, c), boat_id) {
            return Err(MoveRejection::Blocked { by });
        }
    }
    Ok((row, col))
}

/// Predicate form of [`check_move`].
pub fn can_move_to(grid: &GridState, boat_id: usize, target_row: isize, target_col: isize) -> bool {
    check_move(grid, boat_id, target_row, target_col).is_ok()
}

/// Check a one-cell slide. A direction across the boat's axis is always refused.
pub fn check_step(
    grid: &GridState,
    boat_id: usize,
    direction: Direction,
) -> Result<(usize, usize), MoveRejection> {
    let boat = grid
        .boat(boat_id)
        .ok_or(MoveRejection::UnknownBoat(boat_id))?;
    if direction.axis() != boat.orientation() {
        return Err(MoveRejection::WrongAxis);
    }
    let (dr, dc) = direction.delta();
    check_move(
        grid,
        boat_id,
        boat.row() as isize + dr,
        boat.col() as isize + dc,
    )
}

/// Directions in which `boat_id` can currently take one step.
pub fn movable_directions(grid: &GridState, boat_id: usize) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| check_step(grid, boat_id, d).is_ok())
        .collect()
}

/// Whether `boat` could sit with its origin at (`row`, `col`) without leaving
/// the grid or touching another boat. No path is walked.
pub fn position_free(grid: &GridState, boat: &Boat, row: usize, col: usize) -> bool {
    let (rows, cols) = boat.extent();
    within(row, rows, grid.size())
        && within(col, cols, grid.size())
        && grid.blocker(&boat.mask_at(row, col), boat.id()).is_none()
}

fn target_origin(
    grid: &GridState,
    boat: &Boat,
    target_row: isize,
    target_col: isize,
) -> Option<(usize, usize)> {
    let row = usize::try_from(target_row).ok()?;
    let col = usize::try_from(target_col).ok()?;
    let (rows, cols) = boat.extent();
    (within(row, rows, grid.size()) && within(col, cols, grid.size())).then_some((row, col))
}
