//! Boot sequence
//!
//! This module handles the kernel boot process:
//! 1. Initializing early debug output (COM1 serial + logger)
//! 2. Binding the display surface selected at compile time
//! 3. Running the generated logic report (`fuse_boot::run`)
//! 4. Idling on `hlt` forever

use crate::arch::x86_64::X86Cpu;
use crate::logic::FfiLogic;

/// Kernel entry point (called from _start)
pub fn kernel_entry() -> ! {
    crate::arch::x86_64::serial::init();
    crate::debug::init_logger();

    crate::kprintln!("═══════════════════════════════════════════════════════════");
    crate::kprintln!("  FUSE kernel v{}", env!("CARGO_PKG_VERSION"));
    crate::kprintln!("═══════════════════════════════════════════════════════════");

    let surface = crate::config::display_surface();
    log::info!("boot: display surface {}", crate::config::DISPLAY_NAME);

    fuse_boot::run(surface, &FfiLogic, &X86Cpu)
}
