//! Scripted front end: plays a fixed column sequence against the engine and
//! writes each reported outcome as one JSON object per line.

use std::io::{self, Write};

use log::warn;
use serde::Serialize;

use crate::game::GameState;

/// Emitted when the engine rejects a scripted column.
#[derive(Debug, Serialize)]
struct MoveRejected<'a> {
    event: &'a str,
    column: i64,
    reason: String,
}

/// Play `moves` in order. Rejected moves are reported and skipped, the same
/// way a click on a full column is ignored. Ends with the final board.
pub fn run<W: Write>(mut state: GameState, moves: &[i64], out: &mut W) -> io::Result<GameState> {
    for &column in moves {
        match state.apply_move_mut(column) {
            Ok(report) => {
                for event in report.events() {
                    serde_json::to_writer(&mut *out, &event)?;
                    writeln!(out)?;
                }
            }
            Err(e) => {
                warn!("HEADLESS: column {column} rejected: {e}");
                let rejected = MoveRejected {
                    event: "MoveRejected",
                    column,
                    reason: e.to_string(),
                };
                serde_json::to_writer(&mut *out, &rejected)?;
                writeln!(out)?;
            }
        }
    }

    write!(out, "{}", state.board())?;
    Ok(state)
}
