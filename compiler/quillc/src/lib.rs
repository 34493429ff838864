//! Quill compiler driver.
//!
//! Hosts the command handlers behind the `quill` binary, CLI configuration,
//! tracing setup, and diagnostic rendering. Only lexing exists so far.

pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod tracing_setup;

pub use tracing_setup::init_tracing;
