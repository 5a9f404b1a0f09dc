//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system, ignoring a logger that is already installed
///
/// Useful from tests and from hosts that may have set up their own logger.
pub fn try_init() -> bool {
    env_logger::builder().is_test(cfg!(test)).try_init().is_ok()
}
