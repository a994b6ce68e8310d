//! FUSE Console - freestanding VGA text-mode console driver
//!
//! # Purpose
//! The single point of contact with the display surface. Every screen
//! mutation in the kernel passes through [`Console`]: characters, strings,
//! signed integers and booleans are rendered into an 80x25 grid of cells.
//!
//! # Integration Points
//! - Depends on: nothing but `core` (no allocator, no runtime)
//! - Provides to: the boot sequence (`fuse-boot`) and the kernel binary
//! - Hardware: VGA text buffer at [`VGA_TEXT_BASE`], bound through
//!   [`MmioSurface`] by the platform adapter
//!
//! # Architecture
//! ```text
//! Console<S: Surface>  --- cursor + style, all rendering rules
//!        |
//!        v
//!     Surface          --- bounds-checked cell access (CellIndex)
//!   /    |     \
//! Buffer Mmio  Null    --- in-memory grid / volatile MMIO / discard
//! ```
//!
//! # Testing Strategy
//! - Unit tests: cursor movement, wrapping, integer rendering
//! - Integration tests: kernel-style report lines rendered onto a grid
//! - Benchmarks: rendering throughput (criterion)

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

mod cell;
mod console;
mod style;
mod surface;

pub use cell::{Cell, CellIndex};
pub use console::{Console, Cursor, Value};
pub use style::{Color, Style};
pub use surface::{BufferSurface, MmioSurface, NullSurface, Surface};

use thiserror::Error;

/// Number of cells per row
pub const WIDTH: usize = 80;

/// Number of rows on screen
pub const HEIGHT: usize = 25;

/// Total number of cells in the display surface
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// Physical base address of the VGA text buffer on x86 PCs
pub const VGA_TEXT_BASE: usize = 0xB8000;

/// Error types for display surface addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("Cell ({row}, {column}) is outside the {width}x{height} display", width = WIDTH, height = HEIGHT)]
    OutOfBounds { row: usize, column: usize },

    #[error("Cell offset {offset} is outside the display ({count} cells)", count = CELL_COUNT)]
    OffsetOutOfBounds { offset: usize },
}

pub type Result<T> = core::result::Result<T, ConsoleError>;
