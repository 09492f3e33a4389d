//! Serializable board view
//!
//! `Board` keeps its flat storage private; callers that persist or transmit a board go
//! through [`BoardSnapshot`], which uses the `grid[row][col]` shape.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::BoardError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot<T> {
    pub width: usize,
    pub height: usize,
    pub grid: Vec<Vec<T>>,
}

impl<T: Clone> From<&Board<T>> for BoardSnapshot<T> {
    fn from(board: &Board<T>) -> Self {
        debug_assert!(board.is_filled(), "snapshot of a board with empty cells");
        Self {
            width: board.width(),
            height: board.height(),
            grid: board.to_rows(),
        }
    }
}

impl<T> TryFrom<BoardSnapshot<T>> for Board<T> {
    type Error = BoardError;

    fn try_from(snapshot: BoardSnapshot<T>) -> Result<Self, Self::Error> {
        if snapshot.grid.len() != snapshot.height {
            return Err(BoardError::InvalidDimensions {
                width: snapshot.width,
                height: snapshot.grid.len(),
            });
        }
        let board = Board::from_rows(snapshot.grid)?;
        if board.width() != snapshot.width {
            return Err(BoardError::InvalidDimensions {
                width: board.width(),
                height: board.height(),
            });
        }
        Ok(board)
    }
}
