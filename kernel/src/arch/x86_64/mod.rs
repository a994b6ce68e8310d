//! x86_64 architecture-specific code

pub mod serial;

use fuse_boot::Cpu;

/// The boot CPU
pub struct X86Cpu;

impl Cpu for X86Cpu {
    #[inline]
    fn wait_for_interrupt(&self) {
        ::x86_64::instructions::hlt();
    }
}

/// Halt without going through the boot state machine (panic path)
pub fn halt_forever() -> ! {
    loop {
        X86Cpu.wait_for_interrupt();
    }
}
