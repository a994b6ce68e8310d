//! Null display surface (no output)
//!
//! Used for builds with no display attached. Writes are discarded and every
//! read returns a blank cell.

use super::Surface;
use crate::cell::{Cell, CellIndex};

/// Surface that discards all output
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl NullSurface {
    pub const fn new() -> Self {
        Self
    }
}

impl Surface for NullSurface {
    #[inline(always)]
    fn write_cell(&mut self, _index: CellIndex, _cell: Cell) {
        // Discard output
    }

    #[inline(always)]
    fn read_cell(&self, _index: CellIndex) -> Cell {
        Cell::BLANK
    }
}
