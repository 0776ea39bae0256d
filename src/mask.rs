//! Cell occupancy masks packed into a single unsigned integer.
//!
//! A mask covers an `N×N` square; the harbor always uses the largest
//! supported grid as its square so that every legal boat fits, whatever the
//! current grid size is.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::MAX_GRID_SIZE;

/// Mask wide enough for every grid the engine accepts.
pub type HarborMask = CellMask<u128, MAX_GRID_SIZE>;

/// Errors returned by mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Row or column lies outside the mask's `N×N` square.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) lies outside the mask", row, col)
            }
        }
    }
}

/// Set of occupied cells on an `N×N` square, stored in the bits of `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellMask<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    /// An empty mask. Capacity is not checked here; see [`Self::capacity_ok`].
    #[inline]
    pub fn new() -> Self {
        CellMask { bits: T::zero() }
    }

    /// `true` when `N×N` cells fit in `T`.
    pub fn capacity_ok() -> bool {
        Self::CELLS <= mem::size_of::<T>() * 8
    }

    /// Build a mask from `(row, col)` cells, rejecting any outside the square.
    pub fn from_cells<I>(cells: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut mask = Self::new();
        for (row, col) in cells {
            mask.insert(row, col)?;
        }
        Ok(mask)
    }

    /// Mark a cell as occupied.
    pub fn insert(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        if row >= N || col >= N {
            return Err(MaskError::IndexOutOfBounds { row, col });
        }
        self.bits = self.bits | (T::one() << (row * N + col));
        Ok(())
    }

    /// Mark a cell whose coordinates are already known to fit.
    #[inline]
    pub(crate) fn mark(&mut self, row: usize, col: usize) {
        debug_assert!(row < N && col < N, "cell ({}, {}) outside {}x{}", row, col, N, N);
        let _ = self.insert(row, col);
    }

    /// Whether the cell is occupied. Cells outside the square never are.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < N && col < N && ((self.bits >> (row * N + col)) & T::one()) != T::zero()
    }

    /// Whether the two masks share at least one cell.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> MaskCells<'_, T, N> {
        MaskCells { mask: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask<{}x{}>:", N, N)?;
        for r in 0..N {
            for c in 0..N {
                write!(f, "{} ", if self.contains(r, c) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the occupied cells of a mask.
pub struct MaskCells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    mask: &'a CellMask<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for MaskCells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if self.mask.contains(idx / N, idx % N) {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellMask {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellMask {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
