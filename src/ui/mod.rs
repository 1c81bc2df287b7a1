//! Terminal UI: a thin front end that turns key presses into engine moves and
//! draws the resulting board.

mod app;
mod game_view;

pub use app::App;
