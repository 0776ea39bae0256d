//! Bounded breadth-first search deciding whether the player boat can reach
//! the exit.
//!
//! A search state is one integer per boat, in boat order: the boat's moving
//! coordinate. The other coordinate never changes, so the boats themselves
//! only supply shape and the fixed coordinate. Successors move a single boat
//! one cell. The number of recorded states is capped, and a capped search
//! reports [`Verdict::Inconclusive`], which callers treat as "not solvable".

use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use log::debug;

use crate::boat::{Boat, Orientation};
use crate::config::MAX_SEARCH_STATES;

/// Outcome of a solvability search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Verdict {
    /// The player boat reaches the exit.
    Solvable,
    /// Every reachable position was explored without reaching the exit.
    Unsolvable,
    /// The state cap was hit first; the layout may or may not be solvable.
    Inconclusive,
}

impl Verdict {
    pub fn is_solvable(self) -> bool {
        self == Verdict::Solvable
    }
}

/// Verdict plus how much of the state space was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SearchOutcome {
    pub verdict: Verdict,
    /// States taken off the queue and goal-tested.
    pub expanded: usize,
    /// Distinct states recorded.
    pub visited: usize,
}

/// Breadth-first solvability checker with a hard cap on recorded states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolvabilityChecker {
    max_states: usize,
}

impl Default for SolvabilityChecker {
    fn default() -> Self {
        Self::new(MAX_SEARCH_STATES)
    }
}

impl SolvabilityChecker {
    pub fn new(max_states: usize) -> Self {
        Self { max_states }
    }

    pub fn max_states(&self) -> usize {
        self.max_states
    }

    /// `true` only when the search proves the exit reachable.
    pub fn is_solvable(&self, boats: &[Boat], grid_size: usize, exit_row: usize) -> bool {
        self.search(boats, grid_size, exit_row).verdict.is_solvable()
    }

    /// Search from the boats' current positions. `boats[0]` is the player.
    pub fn search(&self, boats: &[Boat], grid_size: usize, exit_row: usize) -> SearchOutcome {
        let Some(player) = boats.first() else {
            return SearchOutcome {
                verdict: Verdict::Unsolvable,
                expanded: 0,
                visited: 0,
            };
        };
        let goal = grid_size.saturating_sub(player.length());
        let on_exit_row = player.row() == exit_row;

        let start: Vec<usize> = boats.iter().map(Boat::moving_coord).collect();
        let mut visited = BTreeSet::new();
        visited.insert(start.clone());
        let mut queue = VecDeque::new();
        queue.push_back(start);
        let mut expanded = 0;

        let verdict = loop {
            if !queue.is_empty() && visited.len() >= self.max_states {
                debug!(
                    "search capped at {} states ({} expanded)",
                    visited.len(),
                    expanded
                );
                break Verdict::Inconclusive;
            }
            let Some(state) = queue.pop_front() else {
                break Verdict::Unsolvable;
            };
            expanded += 1;
            if on_exit_row && state[0] >= goal {
                break Verdict::Solvable;
            }
            for index in 0..boats.len() {
                let current = state[index];
                for next in [current.checked_sub(1), current.checked_add(1)]
                    .into_iter()
                    .flatten()
                {
                    if collides(boats, &state, index, next, grid_size) {
                        continue;
                    }
                    let mut successor = state.clone();
                    successor[index] = next;
                    if visited.insert(successor.clone()) {
                        queue.push_back(successor);
                    }
                }
            }
        };

        SearchOutcome {
            verdict,
            expanded,
            visited: visited.len(),
        }
    }
}

/// [`SolvabilityChecker::is_solvable`] with the default state cap.
pub fn is_solvable(boats: &[Boat], grid_size: usize, exit_row: usize) -> bool {
    SolvabilityChecker::default().is_solvable(boats, grid_size, exit_row)
}

/// Static collision test: would boat `index`, with its moving coordinate set
/// to `value`, leave the grid or overlap another boat at its coordinate in
/// `state`?
pub fn collides(
    boats: &[Boat],
    state: &[usize],
    index: usize,
    value: usize,
    grid_size: usize,
) -> bool {
    let Some(boat) = boats.get(index) else {
        return true;
    };
    if value + boat.length() > grid_size {
        return true;
    }
    let moved = Hull::of(boat, value);
    boats
        .iter()
        .zip(state)
        .enumerate()
        .filter(|&(j, _)| j != index)
        .any(|(_, (other, &coord))| moved.intersects(&Hull::of(other, coord)))
}

/// Axis-aligned hull of one boat at a given moving coordinate.
struct Hull {
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
}

impl Hull {
    fn of(boat: &Boat, coord: usize) -> Self {
        let (row, col) = boat.position_for(coord);
        Hull {
            row,
            col,
            length: boat.length(),
            orientation: boat.orientation(),
        }
    }

    fn intersects(&self, other: &Hull) -> bool {
        use Orientation::{Horizontal, Vertical};
        match (self.orientation, other.orientation) {
            (Horizontal, Horizontal) => {
                self.row == other.row
                    && spans_overlap(self.col, self.length, other.col, other.length)
            }
            (Vertical, Vertical) => {
                self.col == other.col
                    && spans_overlap(self.row, self.length, other.row, other.length)
            }
            (Horizontal, Vertical) => crosses(self, other),
            (Vertical, Horizontal) => crosses(other, self),
        }
    }
}

fn spans_overlap(a: usize, a_len: usize, b: usize, b_len: usize) -> bool {
    a < b + b_len && b < a + a_len
}

// A horizontal and a vertical hull meet in at most one cell.
fn crosses(h: &Hull, v: &Hull) -> bool {
    v.row <= h.row && h.row < v.row + v.length && h.col <= v.col && v.col < h.col + h.length
}
