//! Front ends for the rules engine: an interactive terminal UI and a
//! plain-text replay mode.

mod app;
pub mod board_widget;
mod game_view;
pub mod headless;

pub use app::{App, UiConfig};
