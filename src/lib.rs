#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod boat;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
mod generator;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod mask;
pub mod prelude;
mod prefs;
pub mod solver;
pub mod validator;

pub use boat::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, LOG_ENV};
pub use mask::{CellMask, HarborMask, MaskCells, MaskError};
pub use prefs::*;
pub use solver::{SearchOutcome, SolvabilityChecker, Verdict};
