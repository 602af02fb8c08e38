//! Logging setup for bracket's native binaries.
//!
//! The browser layer logs through `web_sys::console`; everything that runs
//! natively goes through `tracing` and is wired up here.

pub mod logging;
