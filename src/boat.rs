//! Boats: fixed shape, sliding position.

use core::fmt;

use crate::common::GridError;
use crate::config::{MAX_BOAT_LENGTH, MAX_GRID_SIZE, MIN_BOAT_LENGTH, PLAYER_LENGTH};
use crate::mask::HarborMask;

/// Orientation of a boat on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// What a boat is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Role {
    /// The boat that has to leave the harbor.
    Player,
    /// A yacht in the way.
    Obstacle,
}

/// A boat occupying `length` contiguous cells from its top-left cell
/// (`row`, `col`). Only the coordinate along its orientation ever changes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Boat {
    id: usize,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
    role: Role,
}

impl Boat {
    /// Build a boat, rejecting lengths outside 2..=4 and boats that cannot fit
    /// on even the largest grid.
    pub fn new(
        id: usize,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
        role: Role,
    ) -> Result<Self, GridError> {
        if !(MIN_BOAT_LENGTH..=MAX_BOAT_LENGTH).contains(&length) {
            return Err(GridError::InvalidLength { id, length });
        }
        let boat = Boat {
            id,
            row,
            col,
            length,
            orientation,
            role,
        };
        if !boat.fits(MAX_GRID_SIZE) {
            return Err(GridError::OutOfBounds { id });
        }
        Ok(boat)
    }

    /// Build a boat whose shape and position the caller has already bounded.
    pub(crate) fn unchecked(
        id: usize,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
        role: Role,
    ) -> Self {
        debug_assert!((MIN_BOAT_LENGTH..=MAX_BOAT_LENGTH).contains(&length));
        Boat {
            id,
            row,
            col,
            length,
            orientation,
            role,
        }
    }

    /// The horizontal length-2 player boat.
    pub fn player(id: usize, row: usize, col: usize) -> Result<Self, GridError> {
        Self::new(id, row, col, PLAYER_LENGTH, Orientation::Horizontal, Role::Player)
    }

    pub fn obstacle(
        id: usize,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, GridError> {
        Self::new(id, row, col, length, orientation, Role::Obstacle)
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Top-left cell as `(row, col)`.
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_player(&self) -> bool {
        self.role == Role::Player
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    /// `(rows, cols)` spanned by the hull.
    pub fn extent(&self) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (1, self.length),
            Orientation::Vertical => (self.length, 1),
        }
    }

    /// The coordinate the boat slides along: `col` if horizontal, `row` if vertical.
    pub fn moving_coord(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.col,
            Orientation::Vertical => self.row,
        }
    }

    /// Origin the boat would have with its moving coordinate set to `coord`.
    pub fn position_for(&self, coord: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.row, coord),
            Orientation::Vertical => (coord, self.col),
        }
    }

    /// Occupied cells, from the origin outwards.
    pub fn cells(&self) -> Cells {
        self.cells_at(self.row, self.col)
    }

    /// Cells the boat would occupy with its origin at (`row`, `col`).
    pub fn cells_at(&self, row: usize, col: usize) -> Cells {
        Cells {
            row,
            col,
            orientation: self.orientation,
            length: self.length,
            idx: 0,
        }
    }

    /// Whether the hull covers (`row`, `col`).
    pub fn occupies(&self, row: usize, col: usize) -> bool {
        let (rows, cols) = self.extent();
        row >= self.row && row - self.row < rows && col >= self.col && col - self.col < cols
    }

    /// Whether the two hulls share a cell.
    pub fn overlaps(&self, other: &Boat) -> bool {
        self.cells().any(|(r, c)| other.occupies(r, c))
    }

    /// Whether every cell lies inside a `grid_size × grid_size` grid.
    pub fn fits(&self, grid_size: usize) -> bool {
        let (rows, cols) = self.extent();
        within(self.row, rows, grid_size) && within(self.col, cols, grid_size)
    }

    /// Occupancy mask of the hull.
    pub fn mask(&self) -> HarborMask {
        self.mask_at(self.row, self.col)
    }

    /// Mask of the hull with its origin at (`row`, `col`). Callers keep the
    /// origin within the largest grid.
    pub(crate) fn mask_at(&self, row: usize, col: usize) -> HarborMask {
        let mut mask = HarborMask::new();
        for (r, c) in self.cells_at(row, col) {
            mask.mark(r, c);
        }
        mask
    }

    pub(crate) fn place(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }
}

/// Whether a span of `len` cells starting at `start` ends inside `limit`.
pub(crate) fn within(start: usize, len: usize, limit: usize) -> bool {
    start.checked_add(len).is_some_and(|end| end <= limit)
}

impl fmt::Debug for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Boat {{ id: {}, role: {:?}, origin: ({}, {}), length: {}, orientation: {:?} }}",
            self.id, self.role, self.row, self.col, self.length, self.orientation,
        )
    }
}

/// Iterator over the cells of a hull.
#[derive(Debug, Clone)]
pub struct Cells {
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
    idx: usize,
}

impl Iterator for Cells {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.length {
            return None;
        }
        let i = self.idx;
        self.idx += 1;
        Some(match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.length - self.idx;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells {}
