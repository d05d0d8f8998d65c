//! Serial console for debug output
//!
//! COM1 (0x3F8) through the 16550 UART driver, behind a spin mutex so log
//! lines from the main loop and the panic path never interleave. This is
//! the only diagnostic channel; the framebuffer belongs to the game.

use lazy_static::lazy_static;
use spin::Mutex;
use uart_16550::SerialPort;

/// COM1 base I/O port
const COM1: u16 = 0x3F8;

lazy_static! {
    static ref SERIAL1: Mutex<SerialPort> = {
        let mut port = unsafe { SerialPort::new(COM1) };
        port.init();
        Mutex::new(port)
    };
}

/// Bring the UART up before first use (early boot)
pub fn init() {
    lazy_static::initialize(&SERIAL1);
}

/// Print to serial port (internal use)
#[doc(hidden)]
pub fn _print(args: core::fmt::Arguments) {
    use core::fmt::Write;
    SERIAL1
        .lock()
        .write_fmt(args)
        .expect("Printing to serial failed");
}

/// Print to serial port
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::serial::_print(format_args!($($arg)*))
    };
}

/// Print to serial port with newline
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($fmt:expr) => ($crate::serial_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::serial_print!(
        concat!($fmt, "\n"), $($arg)*
    ));
}
