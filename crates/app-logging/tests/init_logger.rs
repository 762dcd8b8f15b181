//! The logger is process-global, so this file gets its own test binary.
#![cfg(feature = "tty")]

use std::panic;

#[test]
fn init_logger_installs_once_then_panics() {
    app_logging::init_logger();
    assert_ne!(log::max_level(), log::LevelFilter::Off);

    assert!(panic::catch_unwind(app_logging::init_logger).is_err());
    assert!(matches!(
        app_logging::try_init_logger(),
        Err(app_logging::Error::AlreadyInitialized(_))
    ));
}
