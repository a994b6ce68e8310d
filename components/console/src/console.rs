//! Console driver: cursor tracking and text rendering
//!
//! Rendering rules:
//! - `\n` moves the cursor to the start of the next row and touches no cell
//! - any other byte is stored at the cursor with the console style, then the
//!   column advances; reaching `WIDTH` moves to the start of the next row
//! - if the row has run past the last line when a byte is about to be
//!   stored, rendering restarts at row 0 (overwrite from the top, no scroll)
//!
//! Nothing here can fail. There is no device to report errors to, and the
//! cursor invariant keeps every cell index inside the grid.

use crate::cell::{Cell, CellIndex};
use crate::style::Style;
use crate::surface::Surface;
use crate::{HEIGHT, WIDTH};
use core::ffi::CStr;
use core::fmt;

/// Decimal digits in `u64::MAX`
const MAX_DIGITS: usize = 20;

/// Position at which the next character is written
///
/// `column < WIDTH` always holds. `row` may reach `HEIGHT` or beyond after a
/// newline or a wrap on the last line; the next stored byte then lands on
/// row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

impl Cursor {
    /// Top-left corner
    pub const ORIGIN: Cursor = Cursor { row: 0, column: 0 };

    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// True when the next stored byte will restart at row 0
    pub const fn is_past_bottom(&self) -> bool {
        self.row >= HEIGHT
    }
}

/// Result value handed over by generated logic, ready to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Int(i64),
    Text(&'a CStr),
    Bool(bool),
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl<'a> From<&'a CStr> for Value<'a> {
    fn from(value: &'a CStr) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// Text console over a display surface
///
/// Owns its surface and cursor, so independent consoles never share state.
/// On hardware the kernel holds exactly one instance bound to the VGA
/// buffer.
pub struct Console<S: Surface> {
    surface: S,
    cursor: Cursor,
    style: Style,
}

impl<S: Surface> Console<S> {
    /// Console in the default style with the cursor at the origin
    pub const fn new(surface: S) -> Self {
        Self::with_style(surface, Style::DEFAULT)
    }

    pub const fn with_style(surface: S, style: Style) -> Self {
        Self {
            surface,
            cursor: Cursor::ORIGIN,
            style,
        }
    }

    /// Reset the cursor to the top-left corner
    ///
    /// Screen contents are left as they are. Calling this again is safe.
    pub fn initialize(&mut self) {
        self.cursor = Cursor::ORIGIN;
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Render one character code
    pub fn write_character(&mut self, c: u8) {
        if c == b'\n' {
            self.cursor.row = self.cursor.row.saturating_add(1);
            self.cursor.column = 0;
            return;
        }

        if self.cursor.is_past_bottom() {
            log::trace!("console: row {} past bottom, restarting at top", self.cursor.row);
            self.cursor.row = 0;
        }

        match CellIndex::new(self.cursor.row, self.cursor.column) {
            Ok(index) => self.surface.write_cell(index, Cell::new(c, self.style)),
            Err(e) => log::error!("console: dropped {:#04x}: {}", c, e),
        }

        self.cursor.column += 1;
        if self.cursor.column >= WIDTH {
            self.cursor.column = 0;
            self.cursor.row += 1;
        }
    }

    /// Render a NUL-terminated string, left to right, up to the terminator
    pub fn write_string(&mut self, s: &CStr) {
        for &byte in s.to_bytes() {
            self.write_character(byte);
        }
    }

    /// Render a byte string, stopping at the first NUL if there is one
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().take_while(|&&byte| byte != 0) {
            self.write_character(byte);
        }
    }

    /// Render a string followed by a newline
    pub fn write_line(&mut self, s: &CStr) {
        self.write_string(s);
        self.write_character(b'\n');
    }

    /// Render a signed decimal integer
    ///
    /// Most significant digit first, no leading zeros, `-` for negatives.
    /// The magnitude is widened to `u64`, so `i64::MIN` renders exactly.
    pub fn write_integer(&mut self, value: i64) {
        if value == 0 {
            self.write_character(b'0');
            return;
        }
        if value < 0 {
            self.write_character(b'-');
        }

        let mut magnitude = value.unsigned_abs();
        let mut digits = [0u8; MAX_DIGITS];
        let mut len = 0;
        while magnitude > 0 {
            digits[len] = b'0' + (magnitude % 10) as u8;
            magnitude /= 10;
            len += 1;
        }

        for &digit in digits[..len].iter().rev() {
            self.write_character(digit);
        }
    }

    /// Render `true` or `false`
    pub fn write_bool(&mut self, value: bool) {
        let text: &[u8] = if value { b"true" } else { b"false" };
        self.write_bytes(text);
    }

    pub fn write_value(&mut self, value: Value<'_>) {
        match value {
            Value::Int(v) => self.write_integer(v),
            Value::Text(s) => self.write_string(s),
            Value::Bool(b) => self.write_bool(b),
        }
    }
}

impl<S: Surface> fmt::Write for Console<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.write_character(byte);
        }
        Ok(())
    }
}
