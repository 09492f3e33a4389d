//! Match detection
//!
//! Fixed-window scan: every position is tested against the next two cells to its right
//! (horizontal pass), then against the next two cells below it (vertical pass). Both passes
//! run row-major, so match order is deterministic: all horizontal matches top-to-bottom,
//! left-to-right, followed by all vertical matches in the same order.
//!
//! Windows overlap. A run of four yields two matches, a run of five yields three.

use match3_types::{Match, Position, MIN_RUN};

use crate::board::Board;

/// Find every horizontal and vertical window of [`MIN_RUN`] identical tiles
///
/// Empty cells never match, not even each other.
///
/// # Examples
///
/// ```
/// use match3_core::{check_matches, Board};
///
/// let board = Board::from_rows(vec![
///     vec!['A', 'A', 'A', 'A'],
///     vec!['B', 'C', 'B', 'C'],
/// ])
/// .unwrap();
///
/// // A run of four is reported as two overlapping windows
/// let matches = check_matches(&board);
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].positions[0].col, 0);
/// assert_eq!(matches[1].positions[0].col, 1);
/// ```
pub fn check_matches<T: Clone + PartialEq>(board: &Board<T>) -> Vec<Match<T>> {
    let mut matches = Vec::new();
    let (width, height) = (board.width(), board.height());

    // Horizontal
    for row in 0..height {
        for col in 0..width.saturating_sub(MIN_RUN - 1) {
            if let Some(tile) = run_at(board, row, col, 0, 1) {
                matches.push(Match::new(tile.clone(), window(row, col, 0, 1)));
            }
        }
    }

    // Vertical
    for row in 0..height.saturating_sub(MIN_RUN - 1) {
        for col in 0..width {
            if let Some(tile) = run_at(board, row, col, 1, 0) {
                matches.push(Match::new(tile.clone(), window(row, col, 1, 0)));
            }
        }
    }

    matches
}

/// True if the board contains at least one match
///
/// Stops at the first window found.
pub fn has_match<T: PartialEq>(board: &Board<T>) -> bool {
    let (width, height) = (board.width(), board.height());
    let horizontal = (0..height).any(|row| {
        (0..width.saturating_sub(MIN_RUN - 1)).any(|col| run_at(board, row, col, 0, 1).is_some())
    });
    horizontal
        || (0..height.saturating_sub(MIN_RUN - 1))
            .any(|row| (0..width).any(|col| run_at(board, row, col, 1, 0).is_some()))
}

/// The shared tile if the window starting at (row, col) in direction (d_row, d_col) is a run
fn run_at<T: PartialEq>(
    board: &Board<T>,
    row: usize,
    col: usize,
    d_row: usize,
    d_col: usize,
) -> Option<&T> {
    let first = board.cell(row, col).as_ref()?;
    let all_same = (1..MIN_RUN).all(|step| {
        board
            .cell(row + step * d_row, col + step * d_col)
            .as_ref()
            .is_some_and(|t| t == first)
    });
    all_same.then_some(first)
}

fn window(row: usize, col: usize, d_row: usize, d_col: usize) -> [Position; MIN_RUN] {
    std::array::from_fn(|step| {
        Position::new((row + step * d_row) as i32, (col + step * d_col) as i32)
    })
}
