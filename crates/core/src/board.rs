//! Board module - manages the tile grid
//!
//! The board is a `width x height` grid where every cell holds a tile.
//! Uses a flat vector in row-major order (`row * width + col`) for cache locality.
//! Coordinates: (row, col) where row grows downward and col grows rightward.
//!
//! Cells are stored as [`Cell<T>`] (`Option<T>`) so the cascade resolver can mark cells empty
//! while it works. Every board returned from a public operation is completely filled.

use match3_types::{Cell, Position};

use crate::error::BoardError;
use crate::generator::Generator;

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board<T> {
    width: usize,
    height: usize,
    /// Flat vector of cells, row-major order (row * width + col)
    cells: Vec<Cell<T>>,
}

impl<T> Board<T> {
    /// Create a `width x height` board, calling the generator once per cell in row-major
    /// order (top-to-bottom, left-to-right)
    pub fn create<G>(generator: &mut G, width: usize, height: usize) -> Result<Self, BoardError>
    where
        G: Generator<T> + ?Sized,
    {
        check_dimensions(width, height)?;
        let cells = (0..width * height).map(|_| Some(generator.next())).collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a board from explicit rows (`rows[row][col]`)
    ///
    /// Every row must have the same non-zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_core::Board;
    /// use match3_core::types::Position;
    ///
    /// let board = Board::from_rows(vec![vec!['A', 'B'], vec!['C', 'D']]).unwrap();
    /// assert_eq!(board.piece(Position::new(1, 0)), Some(&'C'));
    /// assert_eq!(board.piece(Position::new(2, 0)), None);
    ///
    /// assert!(Board::from_rows(vec![vec!['A', 'B'], vec!['C']]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (row, tiles) in rows.into_iter().enumerate() {
            if tiles.len() != width {
                return Err(BoardError::RaggedRow {
                    row,
                    len: tiles.len(),
                    width,
                });
            }
            cells.extend(tiles.into_iter().map(Some));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, position: Position) -> Option<usize> {
        if position.row < 0 || position.col < 0 {
            return None;
        }
        let (row, col) = (position.row as usize, position.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if position is within bounds
    pub fn contains(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    /// Get the tile at a position
    /// Returns None if out of bounds
    pub fn piece(&self, position: Position) -> Option<&T> {
        self.index(position)
            .and_then(|idx| self.cells[idx].as_ref())
    }

    /// All positions in row-major order
    pub fn positions(&self) -> Positions {
        Positions {
            width: self.width,
            height: self.height,
            next: 0,
        }
    }

    /// Replace the tile at a position
    /// Returns false if out of bounds
    pub fn set(&mut self, position: Position, tile: T) -> bool {
        match self.index(position) {
            Some(idx) => {
                self.cells[idx] = Some(tile);
                true
            }
            None => false,
        }
    }

    /// Exchange the tiles at two positions
    /// Returns false (and leaves the board untouched) if either position is out of bounds
    pub fn swap(&mut self, first: Position, second: Position) -> bool {
        match (self.index(first), self.index(second)) {
            (Some(a), Some(b)) => {
                self.cells.swap(a, b);
                true
            }
            _ => false,
        }
    }

    /// Iterate over rows as slices of cells
    pub fn rows(&self) -> impl Iterator<Item = &[Cell<T>]> {
        self.cells.chunks(self.width)
    }

    /// True if no cell is empty
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Cell at (row, col); caller guarantees bounds
    #[inline(always)]
    pub(crate) fn cell(&self, row: usize, col: usize) -> &Cell<T> {
        &self.cells[row * self.width + col]
    }

    /// Mutable cell at (row, col); caller guarantees bounds
    #[inline(always)]
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell<T> {
        &mut self.cells[row * self.width + col]
    }

    /// Mark a cell empty
    pub(crate) fn clear(&mut self, position: Position) {
        if let Some(idx) = self.index(position) {
            self.cells[idx] = None;
        }
    }

    /// Build a board that may contain empty cells (for cascade tests)
    #[cfg(test)]
    pub(crate) fn from_cells(rows: Vec<Vec<Cell<T>>>) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        assert!(rows.iter().all(|r| r.len() == width));
        Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        }
    }
}

impl<T: Clone> Board<T> {
    /// Copy out the grid as `rows[row][col]`
    ///
    /// Only meaningful on a filled board; empty cells are skipped.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows()
            .map(|row| row.iter().flatten().cloned().collect())
            .collect()
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), BoardError> {
    let max = i32::MAX as usize;
    if width == 0 || height == 0 || width > max || height > max {
        return Err(BoardError::InvalidDimensions { width, height });
    }
    if width.checked_mul(height).is_none() {
        return Err(BoardError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Row-major iterator over every position of a board
#[derive(Debug, Clone)]
pub struct Positions {
    width: usize,
    height: usize,
    next: usize,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.next >= self.width * self.height {
            return None;
        }
        let row = self.next / self.width;
        let col = self.next % self.width;
        self.next += 1;
        Some(Position::new(row as i32, col as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.width * self.height - self.next.min(self.width * self.height);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}
