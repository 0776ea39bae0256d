//! Commonly used types and utilities for ease of import.

pub use crate::{
    Boat, Direction, Game, GameState, GameStatus, GenerationReport, GridState, MoveRejection,
    MoveResult, Orientation, PreferenceStore, PuzzleGenerator, Role, Verdict,
};

#[cfg(feature = "std")]
pub use crate::{draw_seed, init_logging, JsonFilePrefs};
