//! Display surface trait
//!
//! A surface is the fixed-size grid of cells the console renders into.
//! Implementations only ever receive a [`CellIndex`], so every access is
//! bounds-checked before it reaches memory.
//!
//! Surfaces are selected by the platform:
//! - **mmio**: volatile view over the VGA text buffer (real hardware)
//! - **buffer**: owned in-memory grid (host builds, tests)
//! - **null**: discards everything (builds without a display)

use crate::cell::{Cell, CellIndex};

/// Cell storage behind a console
pub trait Surface {
    /// Store `cell` at `index`
    fn write_cell(&mut self, index: CellIndex, cell: Cell);

    /// Read back the cell at `index`
    fn read_cell(&self, index: CellIndex) -> Cell;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn write_cell(&mut self, index: CellIndex, cell: Cell) {
        (**self).write_cell(index, cell)
    }

    #[inline]
    fn read_cell(&self, index: CellIndex) -> Cell {
        (**self).read_cell(index)
    }
}

mod buffer;
mod mmio;
mod null;

pub use buffer::BufferSurface;
pub use mmio::MmioSurface;
pub use null::NullSurface;
