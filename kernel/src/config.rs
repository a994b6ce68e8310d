//! Kernel configuration and component composition
//!
//! This module handles compile-time kernel configuration based on cargo
//! features. There is no runtime configuration.

use log::LevelFilter;

/// Display surface selection (compile-time)
///
/// - `console-vga`: VGA text buffer (default)
/// - `console-null`: no display output (takes precedence)
#[cfg(not(feature = "console-null"))]
pub type DisplaySurface = fuse_console::MmioSurface;

#[cfg(feature = "console-null")]
pub type DisplaySurface = fuse_console::NullSurface;

#[cfg(not(feature = "console-null"))]
pub const DISPLAY_NAME: &str = "vga@0xb8000";

#[cfg(feature = "console-null")]
pub const DISPLAY_NAME: &str = "null";

/// Bind the display surface
///
/// May be called again from the panic handler; the console is rebuilt over
/// the same memory.
#[cfg(not(feature = "console-null"))]
pub fn display_surface() -> DisplaySurface {
    // SAFETY: the boot contract guarantees the VGA text buffer is identity
    // mapped and writable, and the kernel runs on a single core.
    unsafe { fuse_console::MmioSurface::at_address(fuse_console::VGA_TEXT_BASE) }
}

#[cfg(feature = "console-null")]
pub fn display_surface() -> DisplaySurface {
    fuse_console::NullSurface::new()
}

/// Maximum log level, from the most verbose `log-*` feature enabled
pub const LOG_LEVEL: LevelFilter = if cfg!(feature = "log-trace") {
    LevelFilter::Trace
} else if cfg!(feature = "log-debug") {
    LevelFilter::Debug
} else if cfg!(feature = "log-info") {
    LevelFilter::Info
} else if cfg!(feature = "log-warn") {
    LevelFilter::Warn
} else if cfg!(feature = "log-error") {
    LevelFilter::Error
} else {
    LevelFilter::Off
};
