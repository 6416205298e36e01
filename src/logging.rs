// Logger setup plus conditional logging macros - only active in debug builds

use env_logger::Env;

/// Initialize the global logger.
///
/// Defaults to `warn`; override with `RUST_LOG` (e.g. `RUST_LOG=debug` in a
/// dev build). Logs go to stderr, outside the alternate-screen UI.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
