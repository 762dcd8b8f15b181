#![forbid(unsafe_code)]
//! Log a greeting and exit.
//!
//! Arguments are ignored and the exit status is always success.

use log::info;

/// The one message this program emits.
const GREETING: &str = "Hello Jenkins!";

fn main() {
    // A failed setup is reported but does not change the exit status.
    if let Err(e) = app_logging::try_init_logger() {
        eprintln!("Could not initialize logging: {e}");
    }
    info!("{GREETING}");
}
