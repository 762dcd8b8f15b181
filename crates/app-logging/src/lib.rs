#![forbid(unsafe_code)]
//! Utilities for setting up logging in an application.
//!
//! Applications log through the [`log`] facade and call [`try_init_logger`] (or
//! [`init_logger`]) once at startup.
//!
//! With the default `tty` feature, records are written to stderr with a timestamp, level and
//! target, and `RUST_LOG`/`RUST_LOG_STYLE` are honored the way `env_logger` documents.
//! The `syslog` feature adds the system logger as a sink. It is used when the crate is built
//! without `tty`, or when requested explicitly through [`try_init_logger_to`].
//!
//! ```no_run
//! use log::info;
//!
//! fn main() {
//!     let _ = app_logging::try_init_logger();
//!     info!("Hello!");
//! }
//! ```
#![allow(clippy::needless_doctest_main)]

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a global logger has already been initialized")]
    AlreadyInitialized(#[from] log::SetLoggerError),
    #[error("{0:?} logging was not enabled when this crate was built")]
    Unavailable(Destination),
}

/// Where log records end up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Destination {
    Stderr,
    Syslog,
}

impl Destination {
    /// The destination used by [`try_init_logger`].
    ///
    /// Stderr whenever it is compiled in, whether or not stdout is a terminal.
    pub fn detect() -> Self {
        if cfg!(feature = "tty") || !cfg!(feature = "syslog") {
            Self::Stderr
        } else {
            Self::Syslog
        }
    }
}

#[cfg(feature = "tty")]
fn init_stderr() -> Result<(), Error> {
    // An explicit `RUST_LOG` takes precedence over the default filter.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .try_init()?;
    Ok(())
}

#[cfg(not(feature = "tty"))]
fn init_stderr() -> Result<(), Error> {
    Err(Error::Unavailable(Destination::Stderr))
}

#[cfg(feature = "syslog")]
fn init_syslog() -> Result<(), Error> {
    libsyslog::Syslog::builder()
        .level(log::LevelFilter::Info)
        .build()
        .init()?;
    Ok(())
}

#[cfg(not(feature = "syslog"))]
fn init_syslog() -> Result<(), Error> {
    Err(Error::Unavailable(Destination::Syslog))
}

/// Install the logger for a specific destination.
pub fn try_init_logger_to(destination: Destination) -> Result<(), Error> {
    match destination {
        Destination::Stderr => init_stderr(),
        Destination::Syslog => init_syslog(),
    }
}

/// Set up logging as appropriate for how the crate was built.
///
/// Returns the destination that was installed.
pub fn try_init_logger() -> Result<Destination, Error> {
    let destination = Destination::detect();
    try_init_logger_to(destination)?;
    Ok(destination)
}

/// Set up logging as appropriate for how the crate was built.
///
/// # Panics
///
/// This function will panic if
/// it fails to initialize the appropriate logger or
/// a global logger has already been initialized.
pub fn init_logger() {
    if let Err(e) = try_init_logger() {
        panic!("Could not initialize logging: {e}");
    }
}
