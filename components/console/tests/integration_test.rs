//! Integration tests for the console driver
//!
//! These tests render kernel-style report lines onto an in-memory surface
//! and check the exact glyphs left on screen.

use fuse_console::*;

fn row_string(surface: &BufferSurface, row: usize) -> String {
    let text: Vec<u8> = surface.row_characters(row).collect();
    String::from_utf8(text).unwrap().trim_end().to_string()
}

/// Label and integer on row 0, cursor right after the last digit
#[test]
fn test_labeled_integer_on_first_row() {
    let mut console = Console::new(BufferSurface::new());
    console.initialize();

    console.write_string(c"add(20,22): ");
    console.write_integer(42);

    let label_len = "add(20,22): ".len();
    assert_eq!(console.cursor(), Cursor::new(0, label_len + 2));
    assert_eq!(row_string(console.surface(), 0), "add(20,22): 42");
}

/// A full report as the kernel prints it, one result per line
#[test]
fn test_report_lines() {
    let mut console = Console::new(BufferSurface::new());
    console.initialize();

    console.write_line(c"FUSE kernel online");
    console.write_string(c"meaning: ");
    console.write_integer(42);
    console.write_character(b'\n');
    console.write_string(c"max2(11,17): ");
    console.write_value(Value::Int(17));
    console.write_character(b'\n');
    console.write_string(c"negative: ");
    console.write_value(Value::Int(-7));
    console.write_character(b'\n');
    console.write_string(c"flag: ");
    console.write_value(Value::Bool(false));

    let surface = console.surface();
    assert_eq!(row_string(surface, 0), "FUSE kernel online");
    assert_eq!(row_string(surface, 1), "meaning: 42");
    assert_eq!(row_string(surface, 2), "max2(11,17): 17");
    assert_eq!(row_string(surface, 3), "negative: -7");
    assert_eq!(row_string(surface, 4), "flag: false");
    assert_eq!(console.cursor(), Cursor::new(4, "flag: false".len()));
}

/// Re-initializing rewinds the cursor and overwrites in place
#[test]
fn test_reinitialize_overwrites_without_clearing() {
    let mut console = Console::new(BufferSurface::new());
    console.initialize();
    console.write_string(c"first boot banner");

    console.initialize();
    console.write_string(c"SECOND");

    assert_eq!(row_string(console.surface(), 0), "SECONDboot banner");
}

/// Long text wraps across rows and eventually over the top row
#[test]
fn test_long_text_wraps_and_overwrites() {
    let mut console = Console::new(BufferSurface::new());
    console.initialize();

    for _ in 0..HEIGHT {
        for _ in 0..WIDTH {
            console.write_character(b'-');
        }
    }
    assert_eq!(console.cursor(), Cursor::new(HEIGHT, 0));

    console.write_string(c"top");

    assert_eq!(console.cursor(), Cursor::new(0, 3));
    let first: Vec<u8> = console.surface().row_characters(0).take(4).collect();
    assert_eq!(first, b"top-");
}

/// The null surface accepts everything and keeps the cursor logic intact
#[test]
fn test_null_surface_tracks_cursor() {
    let mut console = Console::new(NullSurface::new());
    console.initialize();
    console.write_string(c"discarded\n");
    console.write_integer(-12345);

    assert_eq!(console.cursor(), Cursor::new(1, 6));
    let index = CellIndex::new(1, 0).unwrap();
    assert_eq!(console.surface().read_cell(index), Cell::BLANK);
}

/// Memory-mapped surface over a plain array behaves like the buffer surface
#[test]
fn test_mmio_surface_matches_buffer_surface() {
    let mut backing = [Cell::BLANK; CELL_COUNT];

    {
        let surface = unsafe { MmioSurface::new(backing.as_mut_ptr()) };
        let mut console = Console::new(surface);
        console.initialize();
        console.write_string(c"demo_expr: ");
        console.write_integer(-9);
    }

    let mut reference = Console::new(BufferSurface::new());
    reference.write_string(c"demo_expr: ");
    reference.write_integer(-9);

    assert_eq!(&backing[..], reference.surface().cells());
}
