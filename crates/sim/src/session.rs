//! Session - one game in progress
//!
//! Owns the current board and its generator and threads each move's terminal board into the
//! next move. Counters are raw tallies; turning them into a score is left to the caller.

use match3_core::{
    create_ready, legal_moves, make_move, Board, BoardError, Generator, MoveResult,
    RandomGenerator,
};
use match3_types::Position;
use tracing::info;

use crate::config::SimConfig;
use crate::error::SimError;

#[derive(Debug, Clone)]
pub struct Session<T, G> {
    board: Board<T>,
    generator: G,
    moves: u32,
    matches_cleared: u64,
    cascades: u64,
    max_moves: Option<u32>,
}

impl<T, G> Session<T, G>
where
    T: Clone + PartialEq,
    G: Generator<T>,
{
    /// Start a session on a fresh board with no initial matches
    pub fn new(mut generator: G, width: usize, height: usize) -> Result<Self, BoardError> {
        let board = create_ready(&mut generator, width, height)?;
        Ok(Self::from_board(board, generator))
    }

    /// Resume a session from an existing board
    pub fn from_board(board: Board<T>, generator: G) -> Self {
        Self {
            board,
            generator,
            moves: 0,
            matches_cleared: 0,
            cascades: 0,
            max_moves: None,
        }
    }

    /// Stop accepting moves after `limit` legal moves
    pub fn with_move_limit(mut self, limit: u32) -> Self {
        self.max_moves = Some(limit);
        self
    }

    pub fn board(&self) -> &Board<T> {
        &self.board
    }

    /// Number of legal moves applied
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Total match effects emitted so far (overlapping windows counted separately)
    pub fn matches_cleared(&self) -> u64 {
        self.matches_cleared
    }

    /// Total clear-and-refill iterations so far
    pub fn cascades(&self) -> u64 {
        self.cascades
    }

    pub fn legal_moves(&self) -> Vec<(Position, Position)> {
        legal_moves(&self.board)
    }

    /// True if no legal move is left on the board
    pub fn is_stuck(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// True once the move limit is reached or the board is stuck
    pub fn is_completed(&self) -> bool {
        self.limit_reached() || self.is_stuck()
    }

    /// True once the move limit, if any, has been reached
    pub fn limit_reached(&self) -> bool {
        self.max_moves.is_some_and(|limit| self.moves >= limit)
    }

    /// Apply a swap
    ///
    /// Illegal swaps, and any swap after the move limit is reached, return the current
    /// board with no effects and leave the counters alone.
    pub fn play(&mut self, first: Position, second: Position) -> MoveResult<T> {
        if self.limit_reached() {
            return MoveResult {
                board: self.board.clone(),
                effects: Vec::new(),
            };
        }

        let result = make_move(&mut self.generator, &self.board, first, second);
        if result.is_legal() {
            self.moves += 1;
            self.matches_cleared += result.matches().count() as u64;
            self.cascades += result.cascade_depth() as u64;
            self.board = result.board.clone();
            info!(
                moves = self.moves,
                matches = result.matches().count(),
                cascade_depth = result.cascade_depth(),
                "move applied"
            );
        }
        result
    }
}

impl Session<String, RandomGenerator<String>> {
    /// Build a session from validated settings
    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let session = Self::new(config.generator()?, config.width, config.height)?
            .with_move_limit(config.max_moves);
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use match3_core::{check_matches, CycleGenerator};

    fn sample() -> Session<char, CycleGenerator<char>> {
        let board = Board::from_rows(vec![vec!['A', 'A', 'B'], vec!['B', 'A', 'A']]).unwrap();
        let gen = CycleGenerator::new(vec!['X', 'Y', 'Z']).unwrap();
        Session::from_board(board, gen)
    }

    #[test]
    fn test_play_legal_move_advances() {
        let mut session = sample();
        let result = session.play(Position::new(0, 2), Position::new(1, 2));

        assert!(result.is_legal());
        assert_eq!(session.moves(), 1);
        assert_eq!(session.matches_cleared(), 1);
        assert_eq!(session.cascades(), 1);
        assert_eq!(session.board(), &result.board);
    }

    #[test]
    fn test_play_illegal_move_keeps_state() {
        let mut session = sample();
        let before = session.board().clone();
        let result = session.play(Position::new(0, 0), Position::new(1, 1));

        assert!(!result.is_legal());
        assert_eq!(session.moves(), 0);
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_move_limit_completes_session() {
        let mut session = sample().with_move_limit(1);
        assert!(!session.is_completed());

        session.play(Position::new(0, 2), Position::new(1, 2));
        assert!(session.is_completed());

        let before = session.board().clone();
        let result = session.play(Position::new(0, 0), Position::new(1, 0));
        assert!(!result.is_legal());
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_stuck_board_is_completed() {
        let board = Board::from_rows(vec![vec!['A', 'B'], vec!['C', 'D']]).unwrap();
        let gen = CycleGenerator::new(vec!['X', 'Y']).unwrap();
        let session = Session::from_board(board, gen);
        assert!(session.is_stuck());
        assert!(session.is_completed());
    }

    #[test]
    fn test_from_config_starts_stable() {
        let config = SimConfig {
            width: 6,
            height: 5,
            seed: 77,
            ..SimConfig::default()
        };
        let session = Session::from_config(&config).unwrap();
        assert_eq!(session.board().width(), 6);
        assert_eq!(session.board().height(), 5);
        assert!(check_matches(session.board()).is_empty());
    }
}
