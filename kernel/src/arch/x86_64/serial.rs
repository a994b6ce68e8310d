//! 16550 UART on COM1 for debug output
//!
//! This is a minimal, polled driver for kernel debug output only. It never
//! enables UART interrupts and never touches the VGA screen.

use core::fmt::{self, Write};
use spin::Mutex;
use ::x86_64::instructions::port::Port;

/// COM1 I/O port base
const COM1_BASE: u16 = 0x3F8;

/// Line status: transmit holding register empty
const LSR_THR_EMPTY: u8 = 1 << 5;

/// 16550 register block
struct SerialPort {
    data: Port<u8>,
    int_enable: Port<u8>,
    fifo_ctrl: Port<u8>,
    line_ctrl: Port<u8>,
    modem_ctrl: Port<u8>,
    line_status: Port<u8>,
}

impl SerialPort {
    fn new(base: u16) -> Self {
        Self {
            data: Port::new(base),
            int_enable: Port::new(base + 1),
            fifo_ctrl: Port::new(base + 2),
            line_ctrl: Port::new(base + 3),
            modem_ctrl: Port::new(base + 4),
            line_status: Port::new(base + 5),
        }
    }

    /// Configure 38400 baud, 8N1, FIFO enabled, interrupts off
    fn init(&mut self) {
        unsafe {
            self.int_enable.write(0x00);
            self.line_ctrl.write(0x80); // DLAB on
            self.data.write(0x03); // divisor low (115200 / 3)
            self.int_enable.write(0x00); // divisor high
            self.line_ctrl.write(0x03); // DLAB off, 8N1
            self.fifo_ctrl.write(0xC7);
            self.modem_ctrl.write(0x03); // DTR + RTS
        }
    }

    fn putc(&mut self, byte: u8) {
        unsafe {
            while self.line_status.read() & LSR_THR_EMPTY == 0 {
                core::hint::spin_loop();
            }
            self.data.write(byte);
        }
    }
}

impl Write for SerialPort {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.putc(b'\r'); // CRLF for terminals
            }
            self.putc(byte);
        }
        Ok(())
    }
}

static SERIAL: Mutex<Option<SerialPort>> = Mutex::new(None);

/// Initialize COM1
pub fn init() {
    let mut port = SerialPort::new(COM1_BASE);
    port.init();
    *SERIAL.lock() = Some(port);
}

/// Print to COM1 (dropped until `init` has run)
pub fn print(args: fmt::Arguments) {
    if let Some(ref mut port) = *SERIAL.lock() {
        let _ = port.write_fmt(args);
    }
}
