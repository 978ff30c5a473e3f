//! Logging utilities.
//!
//! The engine logs only through the `log` facade (a debug line when a
//! layout is generated, a one-shot warning when a building's position goes
//! non-finite). Hosts that do not bring their own backend can call
//! [`init_logging`] once at startup.

mod init;

pub use init::init_logging;
