//! Memory-mapped display surface (VGA text buffer)
//!
//! This is the platform binding for real hardware. It knows nothing about
//! cursors or rendering; it only stores cells with volatile accesses so the
//! compiler never elides or reorders writes to video memory.

use super::Surface;
use crate::cell::{Cell, CellIndex};
use core::ptr::{self, NonNull};

/// Volatile view over `CELL_COUNT` cells starting at a base address
///
/// # Safety
/// This surface directly accesses device memory. The platform must ensure the
/// region is mapped and writable before constructing it.
pub struct MmioSurface {
    base: NonNull<Cell>,
}

impl MmioSurface {
    /// Create a surface over the cells starting at `base`
    ///
    /// # Safety
    /// - `base` must be non-null and point to `CELL_COUNT` consecutive cells
    ///   that stay valid for reads and writes for the lifetime of the surface
    /// - nothing else may access that region while the surface exists
    ///   (single-core, single-thread boot environment)
    pub const unsafe fn new(base: *mut Cell) -> Self {
        Self {
            base: NonNull::new_unchecked(base),
        }
    }

    /// Create a surface at a fixed physical address (identity mapped)
    ///
    /// # Safety
    /// Same contract as [`MmioSurface::new`].
    pub const unsafe fn at_address(addr: usize) -> Self {
        Self::new(addr as *mut Cell)
    }

    /// Base address of the mapped region
    pub fn base(&self) -> usize {
        self.base.as_ptr() as usize
    }
}

impl Surface for MmioSurface {
    #[inline]
    fn write_cell(&mut self, index: CellIndex, cell: Cell) {
        // CellIndex guarantees offset < CELL_COUNT
        unsafe { ptr::write_volatile(self.base.as_ptr().add(index.offset()), cell) }
    }

    #[inline]
    fn read_cell(&self, index: CellIndex) -> Cell {
        unsafe { ptr::read_volatile(self.base.as_ptr().add(index.offset())) }
    }
}
