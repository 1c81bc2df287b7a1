//! Core Connect Four game logic: board representation, player types, and the
//! game state machine with its reported outcomes.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION};
pub use player::Player;
pub use state::{GameEvent, GameState, MoveReport, Phase, Placement};
