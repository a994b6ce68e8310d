//! Display cells and bounded cell offsets
//!
//! The display surface is a row-major grid of [`WIDTH`] x [`HEIGHT`] cells.
//! Each cell is two bytes: the character code at the lower address, the
//! style attribute right after it. [`CellIndex`] is the only way to address
//! a cell, and it can only be built for offsets inside the grid.

use crate::style::Style;
use crate::{ConsoleError, Result, CELL_COUNT, HEIGHT, WIDTH};
use static_assertions::{assert_eq_size, const_assert_eq};

/// One (character, style) pair on screen
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub character: u8,
    pub style: Style,
}

assert_eq_size!(Cell, u16);
const_assert_eq!(core::mem::offset_of!(Cell, character), 0);
const_assert_eq!(core::mem::offset_of!(Cell, style), 1);
const_assert_eq!(CELL_COUNT, WIDTH * HEIGHT);

impl Cell {
    /// Space in the default style
    pub const BLANK: Cell = Cell::new(b' ', Style::DEFAULT);

    pub const fn new(character: u8, style: Style) -> Self {
        Self { character, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Offset of a cell inside the display grid
///
/// Invariant: `offset < CELL_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(usize);

impl CellIndex {
    /// Index for `(row, column)`
    ///
    /// # Errors
    /// `OutOfBounds` if `row >= HEIGHT` or `column >= WIDTH`.
    pub const fn new(row: usize, column: usize) -> Result<Self> {
        if row >= HEIGHT || column >= WIDTH {
            return Err(ConsoleError::OutOfBounds { row, column });
        }
        Ok(Self(row * WIDTH + column))
    }

    /// Index for a raw row-major offset
    pub const fn from_offset(offset: usize) -> Result<Self> {
        if offset >= CELL_COUNT {
            return Err(ConsoleError::OffsetOutOfBounds { offset });
        }
        Ok(Self(offset))
    }

    pub const fn offset(self) -> usize {
        self.0
    }

    pub const fn row(self) -> usize {
        self.0 / WIDTH
    }

    pub const fn column(self) -> usize {
        self.0 % WIDTH
    }
}
