use std::fmt;

use log::trace;

use super::Player;
use crate::error::GameError;

/// Smallest width or height that can hold a four-in-a-row along that axis.
pub const MIN_DIMENSION: usize = 4;

/// Largest width or height accepted.
pub const MAX_DIMENSION: usize = 64;

/// Pieces in a row needed to win.
pub const CONNECT: usize = 4;

/// Standard board size.
pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// (row step, column step): horizontal, vertical, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A `height` x `width` grid. Row 0 is the top, column 0 is the left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Both dimensions must lie in
    /// `MIN_DIMENSION..=MAX_DIMENSION`.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let in_range = |n: usize| (MIN_DIMENSION..=MAX_DIMENSION).contains(&n);
        let cell_count = width
            .checked_mul(height)
            .filter(|_| in_range(width) && in_range(height))
            .ok_or(GameError::InvalidConfiguration { width, height })?;
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; cell_count],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} board",
            self.height,
            self.width
        );
        self.cells[row * self.width + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Validate a caller-supplied column index. Negative values and values past
    /// the right edge are both `InvalidColumn`.
    pub fn column_index<C: TryInto<usize>>(&self, column: C) -> Result<usize, GameError> {
        match column.try_into() {
            Ok(col) if col < self.width => Ok(col),
            _ => Err(GameError::InvalidColumn { width: self.width }),
        }
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Row where a piece dropped into `column` would land
    pub fn find_drop_row<C: TryInto<usize>>(&self, column: C) -> Result<usize, GameError> {
        let col = self.column_index(column)?;
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
            .ok_or(GameError::ColumnFull { column: col })
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece<C: TryInto<usize>>(
        &mut self,
        column: C,
        player: Player,
    ) -> Result<(usize, usize), GameError> {
        let col = self.column_index(column)?;
        let row = self.find_drop_row(col)?;
        self.set(row, col, player.to_cell());
        Ok((row, col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Scan every cell and direction for four consecutive pieces owned by
    /// `player`. Returns the first line found, top-left origin first.
    pub fn winning_line(&self, player: Player) -> Option<[(usize, usize); CONNECT]> {
        let target = player.to_cell();
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(line) = self.line_from(row, col, dr, dc) {
                        if line.iter().all(|&(r, c)| self.get(r, c) == target) {
                            trace!("BOARD: {player} line from ({row}, {col}) step ({dr}, {dc})");
                            return Some(line);
                        }
                    }
                }
            }
        }
        None
    }

    /// Whether `player` has four in a row anywhere on the board
    pub fn has_won(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// The four in-bounds coordinates starting at (row, col), or `None` if the
    /// line leaves the board.
    fn line_from(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Option<[(usize, usize); CONNECT]> {
        let mut line = [(0, 0); CONNECT];
        for (step, slot) in line.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * step as isize)?;
            let c = col.checked_add_signed(dc * step as isize)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *slot = (r, c);
        }
        Some(line)
    }

    /// No occupied cell floats above an empty one
    pub fn satisfies_gravity(&self) -> bool {
        (0..self.height.saturating_sub(1)).all(|row| {
            (0..self.width)
                .all(|col| self.get(row, col).is_empty() || !self.get(row + 1, col).is_empty())
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}

/// One line per row, `.` for empty and the player id otherwise.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                match self.get(row, col).player() {
                    Some(player) => write!(f, "{}", player.id())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
