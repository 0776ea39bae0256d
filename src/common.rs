//! Shared types: move directions, layout errors and move rejections.

use core::fmt;
use core::ops::Neg;

use crate::boat::Orientation;
use crate::mask::MaskError;

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Orientation a boat must have to move this way.
    pub fn axis(self) -> Orientation {
        match self {
            Direction::Up | Direction::Down => Orientation::Vertical,
            Direction::Left | Direction::Right => Orientation::Horizontal,
        }
    }

    /// `(row, col)` offset of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// Errors returned when assembling a grid or a boat by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid size lies outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    SizeOutOfRange(usize),
    /// Boat length lies outside `MIN_BOAT_LENGTH..=MAX_BOAT_LENGTH`.
    InvalidLength { id: usize, length: usize },
    /// Boat hangs over the edge of the grid.
    OutOfBounds { id: usize },
    /// Two boats share at least one cell.
    Overlap { first: usize, second: usize },
    /// The first boat is not the player boat (or there are no boats).
    MissingPlayer,
    /// More than one boat is flagged as the player.
    DuplicatePlayer { id: usize },
    /// Player boat is not a horizontal length-2 boat on the exit row.
    MisplacedPlayer,
    /// Boat id does not match its position in the boat list.
    IdMismatch { index: usize, id: usize },
    /// Underlying mask error.
    Mask(MaskError),
}

impl From<MaskError> for GridError {
    fn from(err: MaskError) -> Self {
        GridError::Mask(err)
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::SizeOutOfRange(size) => write!(f, "Grid size {} is not supported", size),
            GridError::InvalidLength { id, length } => {
                write!(f, "Boat {} has invalid length {}", id, length)
            }
            GridError::OutOfBounds { id } => write!(f, "Boat {} does not fit on the grid", id),
            GridError::Overlap { first, second } => {
                write!(f, "Boats {} and {} overlap", first, second)
            }
            GridError::MissingPlayer => write!(f, "First boat must be the player boat"),
            GridError::DuplicatePlayer { id } => write!(f, "Boat {} is a second player boat", id),
            GridError::MisplacedPlayer => {
                write!(f, "Player boat must be horizontal, length 2, on the exit row")
            }
            GridError::IdMismatch { index, id } => {
                write!(f, "Boat at index {} carries id {}", index, id)
            }
            GridError::Mask(e) => write!(f, "Mask error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// Why a move or drag was refused. Refusals leave the grid untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum MoveRejection {
    /// No boat carries this id.
    UnknownBoat(usize),
    /// The move leaves the boat's axis.
    WrongAxis,
    /// The boat would hang over the grid edge.
    OutOfBounds,
    /// Another boat lies on the sliding path.
    Blocked { by: usize },
    /// The puzzle is already solved.
    GameOver,
    /// A drag update or release arrived without a drag in progress.
    NoDragInProgress,
    /// Another command arrived while a boat is being dragged.
    DragInProgress,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::UnknownBoat(id) => write!(f, "there is no boat {}", id),
            MoveRejection::WrongAxis => write!(f, "boats only slide along their own axis"),
            MoveRejection::OutOfBounds => write!(f, "the boat would leave the harbor"),
            MoveRejection::Blocked { by } => write!(f, "boat {} is in the way", by),
            MoveRejection::GameOver => write!(f, "the puzzle is already solved"),
            MoveRejection::NoDragInProgress => write!(f, "no boat is being dragged"),
            MoveRejection::DragInProgress => write!(f, "a boat is being dragged"),
        }
    }
}
