//! Core board engine - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules: the grid, match detection, move legality,
//! gravity, refill and cascade resolution. It has **zero dependencies** on UI, networking,
//! persistence, or I/O:
//!
//! - **Deterministic**: the only source of new tiles is a caller-supplied [`Generator`];
//!   a seeded generator reproduces a game exactly
//! - **Value-like boards**: [`make_move`] borrows its input and returns a new board, so a
//!   caller never observes its board changing underneath it
//! - **Cheap speculation**: [`can_move`] answers on a scratch copy and never errors
//!
//! # Module Structure
//!
//! - [`generator`]: the [`Generator`] trait plus random, cyclic and closure generators
//! - [`board`]: `width x height` grid with bounds-checked access
//! - [`matcher`]: fixed-window detection of 3-in-a-row runs
//! - [`validator`]: move legality via speculative swap, legal move enumeration
//! - [`cascade`]: gravity, refill, and the clear/drop/refill/rescan loop
//! - [`moves`]: [`make_move`], the single entry point for advancing game state
//! - [`snapshot`]: serializable `grid[row][col]` view of a board
//!
//! # Rules
//!
//! - **Matches**: three identical tiles in a row or column. Windows overlap, so a run of
//!   four is reported as two matches
//! - **Legal move**: swap two orthogonally adjacent tiles such that at least one match forms
//! - **Cascade**: cleared cells are filled by gravity first, then by the generator from the
//!   top; the board is rescanned until no match remains
//!
//! # Example
//!
//! ```
//! use match3_core::{check_matches, create_ready, legal_moves, make_move, RandomGenerator};
//!
//! let mut gen = RandomGenerator::new(vec!['R', 'G', 'B', 'Y'], 42).unwrap();
//! let board = create_ready(&mut gen, 8, 8).unwrap();
//! assert!(check_matches(&board).is_empty());
//!
//! if let Some(&(first, second)) = legal_moves(&board).first() {
//!     let result = make_move(&mut gen, &board, first, second);
//!     assert!(result.is_legal());
//!     assert!(check_matches(&result.board).is_empty());
//! }
//! ```
//!
//! # Termination
//!
//! The cascade loop runs until a rescan is clean. With a single-symbol alphabet that never
//! happens, which is why [`RandomGenerator::new`] rejects such alphabets. Custom generators
//! that only ever return one value will loop forever once a match is made.

pub mod board;
pub mod cascade;
pub mod error;
pub mod generator;
pub mod matcher;
pub mod moves;
pub mod snapshot;
pub mod validator;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Positions};
pub use cascade::{drop_tiles, fill_in_empty_cells, handle_matches, refill};
pub use error::{BoardError, ConfigError};
pub use generator::{CycleGenerator, Generator, RandomGenerator};
pub use matcher::{check_matches, has_match};
pub use moves::{create_ready, make_move, stabilize, MoveResult};
pub use snapshot::BoardSnapshot;
pub use validator::{can_move, legal_moves};
