use log::{debug, info};
use serde::Serialize;

use super::{Board, Player};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    InProgress,
    Won(Player),
    Tied,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        self != Phase::InProgress
    }
}

/// Where a piece landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Outcome events reported to whoever drives the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum GameEvent {
    MoveApplied { row: usize, col: usize, player: Player },
    GameWon { player: Player },
    GameTied,
}

/// Result of a successful move: the placement and the phase it produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub placement: Placement,
    pub phase: Phase,
}

impl MoveReport {
    /// `MoveApplied` first, then `GameWon`/`GameTied` if the move ended the game
    pub fn events(&self) -> Vec<GameEvent> {
        let Placement { row, col, player } = self.placement;
        let mut events = vec![GameEvent::MoveApplied { row, col, player }];
        match self.phase {
            Phase::Won(player) => events.push(GameEvent::GameWon { player }),
            Phase::Tied => events.push(GameEvent::GameTied),
            Phase::InProgress => {}
        }
        events
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    phase: Phase,
    move_count: usize,
    last_placement: Option<Placement>,
}

impl GameState {
    /// Start a game on an empty `width` x `height` board. Both must be at
    /// least 4.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::new(width, height)?))
    }

    /// Create initial game state on the standard 7x6 board
    pub fn initial() -> Self {
        Self::from_board(Board::default())
    }

    fn from_board(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::One, // Player 1 starts
            phase: Phase::InProgress,
            move_count: 0,
            last_placement: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move<C: TryInto<usize>>(
        &self,
        column: C,
    ) -> Result<(GameState, MoveReport), GameError> {
        let mut next = self.clone();
        let report = next.apply_move_mut(column)?;
        Ok((next, report))
    }

    /// Apply move mutably. On error the state is left untouched.
    pub fn apply_move_mut<C: TryInto<usize>>(
        &mut self,
        column: C,
    ) -> Result<MoveReport, GameError> {
        if self.is_terminal() {
            debug!("GAME: move rejected, game already over ({:?})", self.phase);
            return Err(GameError::GameAlreadyOver);
        }

        let player = self.current_player;
        let (row, col) = self.board.drop_piece(column, player).map_err(|e| {
            debug!("GAME: move rejected for {player}: {e}");
            e
        })?;
        let placement = Placement { row, col, player };
        self.move_count += 1;
        self.last_placement = Some(placement);
        debug!("GAME: {player} dropped into column {col}, landed on row {row}");

        // Win is checked before tie so a board filled by a winning move is a win
        if self.board.has_won(player) {
            self.phase = Phase::Won(player);
            info!("GAME: {player} won after {} moves", self.move_count);
        } else if self.board.is_full() {
            self.phase = Phase::Tied;
            info!("GAME: tied after {} moves", self.move_count);
        } else {
            self.current_player = player.other();
        }

        Ok(MoveReport {
            placement,
            phase: self.phase,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
