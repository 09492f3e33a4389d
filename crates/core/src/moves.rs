//! Move orchestration - the entry point for advancing game state
//!
//! `make_move` validates a swap, applies it to a copy of the board, and drains the cascade.
//! The input board is only borrowed, so callers always keep their previous state.

use match3_types::{Effect, Match, Position};
use tracing::debug;

use crate::board::Board;
use crate::cascade::handle_matches;
use crate::error::BoardError;
use crate::generator::Generator;
use crate::matcher::check_matches;
use crate::validator::can_move;

/// Terminal board and ordered effect log of one move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult<T> {
    pub board: Board<T>,
    pub effects: Vec<Effect<T>>,
}

impl<T> MoveResult<T> {
    /// False for an illegal move, which produces no effects
    pub fn is_legal(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Match effects in emission order
    ///
    /// Long runs appear as several overlapping matches, so `matches().count()` over-counts
    /// runs longer than three.
    pub fn matches(&self) -> impl Iterator<Item = &Match<T>> {
        self.effects.iter().filter_map(Effect::as_match)
    }

    /// Number of clear-and-refill iterations the move triggered
    pub fn cascade_depth(&self) -> usize {
        self.effects.iter().filter(|e| e.is_refill()).count()
    }
}

/// Swap two tiles and resolve every resulting cascade
///
/// An illegal pair (see [`can_move`]) is a no-op: the result holds an unchanged copy of
/// `board` and no effects.
///
/// # Examples
///
/// ```
/// use match3_core::{make_move, Board, CycleGenerator};
/// use match3_core::types::Position;
///
/// let board = Board::from_rows(vec![vec!['A', 'A', 'B'], vec!['B', 'A', 'A']]).unwrap();
/// let mut gen = CycleGenerator::new(vec!['X', 'Y', 'Z']).unwrap();
///
/// let result = make_move(&mut gen, &board, Position::new(0, 2), Position::new(1, 2));
/// assert!(result.is_legal());
/// assert_eq!(result.board.to_rows(), vec![vec!['X', 'Y', 'Z'], vec!['B', 'A', 'B']]);
///
/// let result = make_move(&mut gen, &board, Position::new(0, 0), Position::new(0, 1));
/// assert!(!result.is_legal());
/// assert_eq!(result.board, board);
/// ```
pub fn make_move<T, G>(
    generator: &mut G,
    board: &Board<T>,
    first: Position,
    second: Position,
) -> MoveResult<T>
where
    T: Clone + PartialEq,
    G: Generator<T> + ?Sized,
{
    if !can_move(board, first, second) {
        debug!(?first, ?second, "illegal move ignored");
        return MoveResult {
            board: board.clone(),
            effects: Vec::new(),
        };
    }

    let mut next = board.clone();
    next.swap(first, second);

    let matches = check_matches(&next);
    let effects = handle_matches(&mut next, generator, matches);
    debug!(?first, ?second, effects = effects.len(), "move resolved");

    debug_assert!(next.is_filled(), "move left empty cells");
    MoveResult {
        board: next,
        effects,
    }
}

/// Drain any matches already present on the board
///
/// Returns the effects produced; empty if the board was already stable.
pub fn stabilize<T, G>(board: &mut Board<T>, generator: &mut G) -> Vec<Effect<T>>
where
    T: Clone + PartialEq,
    G: Generator<T> + ?Sized,
{
    let matches = check_matches(board);
    handle_matches(board, generator, matches)
}

/// Create a board and resolve its initial matches, so that play starts from a board with
/// no match on it
pub fn create_ready<T, G>(
    generator: &mut G,
    width: usize,
    height: usize,
) -> Result<Board<T>, BoardError>
where
    T: Clone + PartialEq,
    G: Generator<T> + ?Sized,
{
    let mut board = Board::create(generator, width, height)?;
    let effects = stabilize(&mut board, generator);
    if !effects.is_empty() {
        debug!(effects = effects.len(), "initial board stabilized");
    }
    Ok(board)
}
