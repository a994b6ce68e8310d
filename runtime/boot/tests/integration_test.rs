//! Integration tests for the complete boot sequence
//!
//! These tests drive `run` end to end against an in-memory display and a
//! CPU that refuses to go back to sleep, which is the only way to observe a
//! function that never returns.

use std::cell::Cell;
use std::ffi::CStr;
use std::panic::{self, AssertUnwindSafe};

use fuse_boot::*;
use fuse_console::{BufferSurface, Cursor};

/// Values matching the FUSE demo program
struct FuseDemo;

impl GeneratedLogic for FuseDemo {
    fn banner(&self) -> &CStr {
        c"FUSE says hi"
    }

    fn meaning(&self) -> i64 {
        42
    }

    fn add(&self, a: i64, b: i64) -> i64 {
        a + b
    }

    fn max2(&self, a: i64, b: i64) -> i64 {
        a.max(b)
    }

    fn demo_expr(&self) -> i64 {
        i64::MIN
    }
}

/// CPU that panics on its first wait
struct WakeOnceCpu {
    waited: Cell<bool>,
}

impl Cpu for WakeOnceCpu {
    fn wait_for_interrupt(&self) {
        self.waited.set(true);
        panic!("cpu halted");
    }
}

fn screen_lines(surface: &BufferSurface, rows: usize) -> Vec<String> {
    (0..rows)
        .map(|row| {
            let text: Vec<u8> = surface.row_characters(row).collect();
            String::from_utf8(text).unwrap().trim_end().to_string()
        })
        .collect()
}

#[test]
fn test_run_renders_report_then_halts() {
    let mut surface = BufferSurface::new();
    let cpu = WakeOnceCpu {
        waited: Cell::new(false),
    };

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        run(&mut surface, &FuseDemo, &cpu);
    }));

    assert!(result.is_err());
    assert!(cpu.waited.get());
    assert_eq!(
        screen_lines(&surface, 7),
        vec![
            "FUSE kernel online",
            "banner: FUSE says hi",
            "meaning: 42",
            "add(20,22): 42",
            "max2(11,17): 17",
            "demo_expr: -9223372036854775808",
            "",
        ]
    );
}

#[test]
fn test_boot_over_stale_screen_keeps_unwritten_cells() {
    let mut surface = BufferSurface::filled(fuse_console::Cell::new(b'#', Default::default()));

    let kernel = Kernel::new(&mut surface).initialize().render(&FuseDemo).idle();
    assert_eq!(kernel.stage(), Stage::Idle);
    assert_eq!(kernel.console().cursor(), Cursor::new(6, 0));
    drop(kernel);

    let lines = screen_lines(&surface, 7);
    assert_eq!(lines[0], format!("FUSE kernel online{}", "#".repeat(80 - 18)));
    assert_eq!(lines[6], "#".repeat(80));
}

#[test]
fn test_collect_results_matches_screen_order() {
    let results = collect_results(&FuseDemo);

    assert_eq!(results.len(), RESULT_COUNT);
    let labels: Vec<&str> = results
        .iter()
        .map(|result| result.label.to_str().unwrap())
        .collect();
    assert_eq!(labels, ["banner", "meaning", "add(20,22)", "max2(11,17)", "demo_expr"]);
}
