//! Cell style attribute (foreground/background color byte)

/// VGA text-mode palette
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// Attribute byte stored next to every character cell
///
/// Layout is `background << 4 | foreground`. The console applies a single
/// style for its whole lifetime.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style(u8);

impl Style {
    /// White on black (`0x0F`)
    pub const DEFAULT: Style = Style::new(Color::White, Color::Black);

    pub const fn new(foreground: Color, background: Color) -> Self {
        Self((background as u8) << 4 | (foreground as u8))
    }

    /// Wrap a raw attribute byte
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}
