//! Kernel logging subsystem
//!
//! Structured log lines over the serial console: a fixed-width level tag
//! and a frame-count timestamp. The main loop is the only clock source
//! (there is no timer hardware here), so timestamps are loop iterations,
//! bumped once per frame.

use core::sync::atomic::{AtomicU64, Ordering};

/// Frames elapsed since boot, used as the log timestamp
static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Log levels
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO ",
            LogLevel::Warn => "WARN ",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

/// Current frame count
pub fn get_timestamp() -> u64 {
    FRAME_COUNTER.load(Ordering::Relaxed)
}

/// Count one main-loop iteration (called once per frame by the loop)
pub fn tick() {
    FRAME_COUNTER.fetch_add(1, Ordering::Relaxed);
}

/// Internal log function
#[doc(hidden)]
pub fn _log(level: LogLevel, args: core::fmt::Arguments) {
    crate::serial::_print(format_args!(
        "[{:>10}][{}] {}\n",
        get_timestamp(),
        level.as_str(),
        args
    ));
}

/// Log macro with level
#[macro_export]
macro_rules! log_level {
    ($level:expr, $($arg:tt)*) => {
        $crate::logger::_log($level, format_args!($($arg)*))
    };
}

/// Info log (default)
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log_level!($crate::logger::LogLevel::Info, $($arg)*)
    };
}

/// Debug log
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::log_level!($crate::logger::LogLevel::Debug, $($arg)*)
    };
}

/// Warning log
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::log_level!($crate::logger::LogLevel::Warn, $($arg)*)
    };
}

/// Error log
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::log_level!($crate::logger::LogLevel::Error, $($arg)*)
    };
}
