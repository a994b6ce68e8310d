//! Generated logic results and how they are laid out on screen

use crate::GeneratedLogic;
use core::ffi::CStr;
use fuse_console::{Console, Surface, Value};

/// Number of generated functions called during boot
pub const RESULT_COUNT: usize = 5;

/// One result together with the label printed before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledValue<'a> {
    pub label: &'static CStr,
    pub value: Value<'a>,
}

impl<'a> LabeledValue<'a> {
    pub const fn new(label: &'static CStr, value: Value<'a>) -> Self {
        Self { label, value }
    }

    /// Render as `<label>: <value>` followed by a newline
    pub fn render<S: Surface>(&self, console: &mut Console<S>) {
        console.write_string(self.label);
        console.write_string(c": ");
        console.write_value(self.value);
        console.write_character(b'\n');
    }
}

/// Call every generated function once, in report order
pub fn collect_results<L: GeneratedLogic + ?Sized>(logic: &L) -> [LabeledValue<'_>; RESULT_COUNT] {
    // Array elements are evaluated left to right
    [
        LabeledValue::new(c"banner", Value::Text(logic.banner())),
        LabeledValue::new(c"meaning", Value::Int(logic.meaning())),
        LabeledValue::new(c"add(20,22)", Value::Int(logic.add(20, 22))),
        LabeledValue::new(c"max2(11,17)", Value::Int(logic.max2(11, 17))),
        LabeledValue::new(c"demo_expr", Value::Int(logic.demo_expr())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use fuse_console::{BufferSurface, Cursor};
    use std::vec::Vec;

    /// Logic that records which functions were called and with what
    #[derive(Default)]
    struct RecordingLogic {
        calls: RefCell<Vec<(&'static str, i64, i64)>>,
    }

    impl GeneratedLogic for RecordingLogic {
        fn banner(&self) -> &CStr {
            self.calls.borrow_mut().push(("banner", 0, 0));
            c"recorded"
        }

        fn meaning(&self) -> i64 {
            self.calls.borrow_mut().push(("meaning", 0, 0));
            42
        }

        fn add(&self, a: i64, b: i64) -> i64 {
            self.calls.borrow_mut().push(("add", a, b));
            a + b
        }

        fn max2(&self, a: i64, b: i64) -> i64 {
            self.calls.borrow_mut().push(("max2", a, b));
            a.max(b)
        }

        fn demo_expr(&self) -> i64 {
            self.calls.borrow_mut().push(("demo_expr", 0, 0));
            -5
        }
    }

    #[test]
    fn test_each_function_called_once_in_order() {
        let logic = RecordingLogic::default();

        let _ = collect_results(&logic);

        assert_eq!(
            *logic.calls.borrow(),
            vec![
                ("banner", 0, 0),
                ("meaning", 0, 0),
                ("add", 20, 22),
                ("max2", 11, 17),
                ("demo_expr", 0, 0),
            ]
        );
    }

    #[test]
    fn test_results_carry_labels_and_values() {
        let logic = RecordingLogic::default();

        let results = collect_results(&logic);

        assert_eq!(results[0], LabeledValue::new(c"banner", Value::Text(c"recorded")));
        assert_eq!(results[2], LabeledValue::new(c"add(20,22)", Value::Int(42)));
        assert_eq!(results[3], LabeledValue::new(c"max2(11,17)", Value::Int(17)));
        assert_eq!(results[4], LabeledValue::new(c"demo_expr", Value::Int(-5)));
    }

    #[test]
    fn test_render_labeled_line() {
        let mut console = Console::new(BufferSurface::new());

        LabeledValue::new(c"add(20,22)", Value::Int(42)).render(&mut console);

        let text: Vec<u8> = console.surface().row_characters(0).take(14).collect();
        assert_eq!(text, b"add(20,22): 42");
        assert_eq!(console.cursor(), Cursor::new(1, 0));
    }
}
