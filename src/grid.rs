//! Harbor grid state: boats, size and the exit row.

use alloc::vec::Vec;
use core::fmt;

use crate::boat::{Boat, Orientation};
use crate::common::GridError;
use crate::config::{exit_row, MAX_GRID_SIZE, MIN_GRID_SIZE, PLAYER_LENGTH};
use crate::mask::HarborMask;

/// The boats on a square grid. Boat 0 is always the player.
///
/// Boats never overlap and never leave the grid; every constructor checks
/// this and the only mutation is an accepted move.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GridState {
    size: usize,
    exit_row: usize,
    boats: Vec<Boat>,
}

impl GridState {
    /// Assemble a grid from hand-placed boats, checking every layout invariant.
    pub fn new(size: usize, boats: Vec<Boat>) -> Result<Self, GridError> {
        let grid = GridState {
            size,
            exit_row: exit_row(size),
            boats,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Grid holding only the player boat at `player_col`.
    pub fn with_player(size: usize, player_col: usize) -> Result<Self, GridError> {
        let player = Boat::player(0, exit_row(size), player_col)?;
        Self::new(size, alloc::vec![player])
    }

    /// Assemble a layout the generator already built collision-free.
    pub(crate) fn assemble(size: usize, boats: Vec<Boat>) -> Self {
        let grid = GridState {
            size,
            exit_row: exit_row(size),
            boats,
        };
        debug_assert_eq!(grid.validate(), Ok(()));
        grid
    }

    /// Check every layout invariant.
    pub fn validate(&self) -> Result<(), GridError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(GridError::SizeOutOfRange(self.size));
        }
        let player = self.boats.first().ok_or(GridError::MissingPlayer)?;
        if !player.is_player() {
            return Err(GridError::MissingPlayer);
        }
        if player.orientation() != Orientation::Horizontal
            || player.length() != PLAYER_LENGTH
            || player.row() != self.exit_row
        {
            return Err(GridError::MisplacedPlayer);
        }

        let mut occupied = HarborMask::new();
        for (index, boat) in self.boats.iter().enumerate() {
            if boat.id() != index {
                return Err(GridError::IdMismatch {
                    index,
                    id: boat.id(),
                });
            }
            if index > 0 && boat.is_player() {
                return Err(GridError::DuplicatePlayer { id: boat.id() });
            }
            if !boat.fits(self.size) {
                return Err(GridError::OutOfBounds { id: boat.id() });
            }
            let hull = boat.mask();
            if occupied.overlaps(&hull) {
                let first = self.blocker(&hull, boat.id()).unwrap_or(index);
                return Err(GridError::Overlap {
                    first,
                    second: boat.id(),
                });
            }
            occupied |= hull;
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn exit_row(&self) -> usize {
        self.exit_row
    }

    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    pub fn boat(&self, id: usize) -> Option<&Boat> {
        self.boats.get(id)
    }

    pub fn player(&self) -> &Boat {
        // validated grids always start with the player
        &self.boats[0]
    }

    /// Boat covering (`row`, `col`), if any.
    pub fn boat_at(&self, row: usize, col: usize) -> Option<&Boat> {
        self.boats.iter().find(|b| b.occupies(row, col))
    }

    /// Cells covered by any boat.
    pub fn occupancy(&self) -> HarborMask {
        self.boats
            .iter()
            .fold(HarborMask::new(), |acc, boat| acc | boat.mask())
    }

    /// First boat other than `except` whose hull meets `hull`.
    pub fn blocker(&self, hull: &HarborMask, except: usize) -> Option<usize> {
        self.boats
            .iter()
            .filter(|b| b.id() != except)
            .find(|b| b.mask().overlaps(hull))
            .map(Boat::id)
    }

    /// Moving coordinate of every boat, in boat order.
    pub fn positions(&self) -> Vec<usize> {
        self.boats.iter().map(Boat::moving_coord).collect()
    }

    /// The player boat sits on the exit row touching the right edge.
    pub fn is_won(&self) -> bool {
        let player = self.player();
        player.row() == self.exit_row && player.col() + player.length() >= self.size
    }

    /// Slide a boat to a position the validator already accepted.
    pub(crate) fn move_boat(&mut self, id: usize, row: usize, col: usize) {
        if let Some(boat) = self.boats.get_mut(id) {
            boat.place(row, col);
        }
    }

    fn label_at(&self, row: usize, col: usize) -> char {
        match self.boat_at(row, col) {
            Some(boat) if boat.is_player() => 'P',
            Some(boat) => (b'A' + (boat.id().saturating_sub(1) % 26) as u8) as char,
            None => '.',
        }
    }
}

impl fmt::Debug for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridState")
            .field("size", &self.size)
            .field("exit_row", &self.exit_row)
            .field("boats", &self.boats)
            .finish()
    }
}

/// Text picture with column and row numbers: `P` is the player, letters are yachts, `>` marks the exit.
impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{:2} ", r)?;
            for c in 0..self.size {
                write!(f, " {}", self.label_at(r, c))?;
            }
            if r == self.exit_row {
                write!(f, " >")?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
