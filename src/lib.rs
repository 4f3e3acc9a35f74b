//! # Connect Four
//!
//! Rules engine for Connect Four: two players alternately drop pieces into a
//! grid, and the first to line up four wins. The engine owns the board, the
//! turn order, and win/tie detection; front ends only call into it and render
//! what it reports.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, state machine
//! - [`ui`] — Terminal UI built with Ratatui, plus a plain-text replay mode
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Tracing subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
