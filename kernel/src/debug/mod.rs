//! Debug output and logging
//!
//! Everything here goes to the serial line. The VGA screen belongs to the
//! console driver alone.

use log::{Level, Log, Metadata, Record};

/// Print macro for kernel (serial)
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => ($crate::arch::x86_64::serial::print(format_args!($($arg)*)));
}

/// Print with newline macro for kernel (serial)
#[macro_export]
macro_rules! kprintln {
    () => ($crate::kprint!("\n"));
    ($($arg:tt)*) => ($crate::kprint!("{}\n", format_args!($($arg)*)));
}

/// `log` backend writing to the serial line
struct SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= crate::config::LOG_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => " WARN",
            Level::Info => " INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        crate::kprintln!("[{}] {}: {}", level, record.target(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: SerialLogger = SerialLogger;

/// Install the serial logger at the configured level
pub fn init_logger() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(crate::config::LOG_LEVEL);
    }
}
