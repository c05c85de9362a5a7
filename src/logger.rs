/// Environment variable that enables `event!` output.
pub const EVENT_LOG_ENV: &str = "LOG_POSTGEN_EVENTS";

/// Wall clock timestamp prefixed to every log line.
#[doc(hidden)]
pub fn stamp() -> String { chrono::Utc::now().format("%H:%M:%S").to_string() }

#[doc(hidden)]
pub fn events_enabled() -> bool { std::env::var(EVENT_LOG_ENV).is_ok() }

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("\x1b[32m[INFO] [{}]\x1b[0m {}", $crate::logger::stamp(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        println!("\x1b[35m[WARN] [{}]\x1b[0m {}", $crate::logger::stamp(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        println!("\x1b[31m[ERROR][{}]\x1b[0m {}", $crate::logger::stamp(), format!($($arg)*))
    };
}

/// Low level diagnostics, printed only when `LOG_POSTGEN_EVENTS` is set.
#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if $crate::logger::events_enabled() {
            println!("\x1b[36m[EVENT][{}]\x1b[0m {}", $crate::logger::stamp(), format!($($arg)*))
        }
    };
}
