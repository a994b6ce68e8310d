//! FUSE Kernel
//!
//! Freestanding x86_64 kernel that brings up the VGA text console, runs the
//! functions generated by the FUSE compiler and shows their results, then
//! idles forever.
//!
//! # Architecture
//!
//! The kernel is organized into the following modules:
//! - `boot`: Entry sequence after the loader hands over control
//! - `arch`: Architecture-specific code (x86_64 halt, COM1 serial)
//! - `config`: Compile-time component selection (display, log level)
//! - `debug`: Serial debug output and the `log` backend
//! - `logic`: FFI binding to the generated logic library
//!
//! The console driver and the boot state machine live in host-testable
//! crates (`fuse-console`, `fuse-boot`); this binary only binds them to
//! real hardware.

#![no_std]
#![no_main]

use core::fmt::Write;
use core::panic::PanicInfo;

mod arch;
mod boot;
mod config;
mod debug;
mod logic;

/// Kernel entry point - called by the platform loader
///
/// The loader has already:
/// - Set up a valid stack
/// - Identity mapped the VGA text buffer (0xB8000)
/// - Left us alone on a single core with interrupts disabled
#[no_mangle]
pub extern "C" fn _start() -> ! {
    boot::kernel_entry()
}

/// Panic handler - report on serial and on screen, then halt
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    crate::kprintln!("KERNEL PANIC: {}", info);

    let mut console = fuse_console::Console::new(config::display_surface());
    let _ = write!(console, "KERNEL PANIC: {}", info);

    arch::x86_64::halt_forever()
}
