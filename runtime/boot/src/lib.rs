//! FUSE Boot - kernel entry sequence
//!
//! # Purpose
//! Drives the one-shot boot of the FUSE kernel:
//! 1. Bring up the console (cursor to top-left) and print the banner
//! 2. Call every generated logic function exactly once
//! 3. Render one labeled line per result
//! 4. Idle forever on the CPU's low-power wait instruction
//!
//! # Integration Points
//! - Depends on: `fuse-console` for all screen output
//! - Consumes: [`GeneratedLogic`] (functions emitted by the FUSE compiler)
//!   and [`Cpu`] (architecture halt instruction)
//! - Provides to: the kernel binary's `_start`
//!
//! # Architecture
//! The sequence is a typestate machine. Each transition consumes the kernel
//! in its current stage and returns it in the next one:
//!
//! ```text
//! Boot --initialize()--> Initializing --render()--> Rendering --idle()--> Idle --halt()--> !
//! ```
//!
//! `Idle` has no transition back to any other stage; its only operation,
//! `halt`, never returns.

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

use core::ffi::CStr;

mod report;
mod state;

pub use report::{collect_results, LabeledValue, RESULT_COUNT};
pub use state::{Boot, Idle, Initializing, Kernel, Rendering, Stage, State};

/// Line printed right after the console comes up
pub const BANNER: &CStr = c"FUSE kernel online";

/// Functions provided by the FUSE code generator
///
/// Implementations must be side-effect free and return promptly. The kernel
/// calls each of them once, with fixed example arguments.
pub trait GeneratedLogic {
    fn banner(&self) -> &CStr;

    fn meaning(&self) -> i64;

    fn add(&self, a: i64, b: i64) -> i64;

    fn max2(&self, a: i64, b: i64) -> i64;

    fn demo_expr(&self) -> i64;
}

/// Architecture hooks needed once the kernel goes idle
pub trait Cpu {
    /// Suspend until the next interrupt (`hlt` on x86_64, `wfi` on ARM64)
    fn wait_for_interrupt(&self);
}

/// Run the whole boot sequence on `surface` and never return
pub fn run<S, L, C>(surface: S, logic: &L, cpu: &C) -> !
where
    S: fuse_console::Surface,
    L: GeneratedLogic + ?Sized,
    C: Cpu + ?Sized,
{
    Kernel::new(surface)
        .initialize()
        .render(logic)
        .idle()
        .halt(cpu)
}
