//! # Connect Four
//!
//! A Connect Four rules engine with a terminal front end built on Ratatui and a
//! headless mode that streams outcome events as JSON.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine, outcome events
//! - [`ui`] — Terminal UI: key handling and board rendering
//! - [`headless`] — Scripted play that reports each outcome as a JSON line
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Logger setup for the binary
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod headless;
pub mod logging;
pub mod ui;

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    // Surfaces engine warnings when a test fails.
    let _ = simple_logger::init_with_level(log::Level::Warn);
}
