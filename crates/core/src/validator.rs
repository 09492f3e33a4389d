//! Move legality
//!
//! A swap is legal when both positions are on the board, they are orthogonal neighbours,
//! and exchanging them produces at least one match. The check runs on a private copy of the
//! board; the caller's board is never touched.

use match3_types::Position;
use tracing::trace;

use crate::board::Board;
use crate::matcher::has_match;

/// True if swapping `first` and `second` would create at least one match
///
/// Out-of-bounds, identical, diagonal and distant pairs are rejected without simulating.
///
/// # Examples
///
/// ```
/// use match3_core::{can_move, Board};
/// use match3_core::types::Position;
///
/// let board = Board::from_rows(vec![vec!['A', 'A', 'B'], vec!['B', 'A', 'A']]).unwrap();
/// assert!(can_move(&board, Position::new(0, 2), Position::new(1, 2)));
/// assert!(!can_move(&board, Position::new(0, 0), Position::new(1, 1)));
/// ```
pub fn can_move<T: Clone + PartialEq>(board: &Board<T>, first: Position, second: Position) -> bool {
    if !board.contains(first) || !board.contains(second) {
        trace!(?first, ?second, "move rejected: out of bounds");
        return false;
    }
    if !first.is_adjacent(second) {
        trace!(?first, ?second, "move rejected: not adjacent");
        return false;
    }

    let mut speculative = board.clone();
    speculative.swap(first, second);
    has_match(&speculative)
}

/// Every legal swap on the board, as `(position, right or lower neighbour)` pairs
///
/// Pairs are listed row-major by their first position, the rightward swap before the
/// downward one. An empty list means the board is stuck.
pub fn legal_moves<T: Clone + PartialEq>(board: &Board<T>) -> Vec<(Position, Position)> {
    board
        .positions()
        .flat_map(|p| p.forward_neighbors().into_iter().map(move |n| (p, n)))
        .filter(|&(p, n)| board.contains(n) && can_move(board, p, n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board<char> {
        Board::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let b = board(&["AAB", "BAA"]);
        assert!(!can_move(&b, Position::new(-1, 0), Position::new(0, 0)));
        assert!(!can_move(&b, Position::new(1, 2), Position::new(1, 3)));
        assert!(!can_move(&b, Position::new(1, 2), Position::new(2, 2)));
    }

    #[test]
    fn test_rejects_identical_and_diagonal() {
        let b = board(&["AAB", "BAA"]);
        assert!(!can_move(&b, Position::new(0, 2), Position::new(0, 2)));
        // Diagonal swap (0,2)<->(1,1) would complete AAA on row 0 but is never legal
        assert!(!can_move(&b, Position::new(0, 2), Position::new(1, 1)));
        assert!(!can_move(&b, Position::new(0, 0), Position::new(0, 2)));
    }

    #[test]
    fn test_accepts_swap_that_matches() {
        let b = board(&["AAB", "BAA"]);
        assert!(can_move(&b, Position::new(0, 2), Position::new(1, 2)));
        assert!(can_move(&b, Position::new(1, 2), Position::new(0, 2)));
    }

    #[test]
    fn test_rejects_swap_without_match() {
        let b = board(&["ABA", "ACD"]);
        assert!(!can_move(&b, Position::new(0, 1), Position::new(1, 1)));
    }

    #[test]
    fn test_can_move_does_not_mutate() {
        let b = board(&["AAB", "BAA"]);
        let before = b.clone();
        assert!(can_move(&b, Position::new(0, 2), Position::new(1, 2)));
        assert_eq!(b, before);
    }

    #[test]
    fn test_legal_moves() {
        let b = board(&["AAB", "BAA"]);
        let moves = legal_moves(&b);
        assert_eq!(
            moves,
            vec![
                (Position::new(0, 0), Position::new(1, 0)),
                (Position::new(0, 2), Position::new(1, 2)),
            ]
        );
    }

    #[test]
    fn test_legal_moves_stuck_board() {
        let b = board(&["AB", "CD"]);
        assert!(legal_moves(&b).is_empty());
    }
}
