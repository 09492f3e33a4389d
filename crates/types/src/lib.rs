//! Core types module - shared data structures and constants
//!
//! This module defines the plain data exchanged between the board engine and its callers.
//! Tiles are generic: anything `Clone + PartialEq` can occupy a cell, so a caller can use
//! `char`, `String`, a small enum, or an integer color id.
//!
//! # Coordinates
//!
//! Positions are `(row, col)`, 0-indexed, with rows growing downward and columns growing
//! rightward. Coordinates are signed so that an out-of-bounds query such as `(-1, 0)` can be
//! expressed and answered with "absent" instead of failing.
//!
//! # Matches
//!
//! A match is always exactly [`MIN_RUN`] cells long. A run of four identical tiles yields two
//! overlapping matches (offsets 0 and 1), and a run of five yields three. Clearing is
//! idempotent per cell so the cascade still removes the union correctly, but any consumer
//! that scores by *number of matches* will count long runs more than once.
//!
//! # Examples
//!
//! ```
//! use match3_types::{Effect, Match, Position};
//!
//! let first = Position::new(0, 1);
//! let second = Position::new(0, 2);
//! assert!(first.is_adjacent(second));
//! assert!(!first.is_adjacent(Position::new(1, 2)));
//!
//! let m = Match::new('A', [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]);
//! let effect = Effect::Match(m);
//! assert!(effect.as_match().is_some());
//! assert!(Effect::<char>::Refill.as_match().is_none());
//! ```

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

/// Number of identical adjacent tiles that form a match
pub const MIN_RUN: usize = 3;

/// Default board width used by callers that don't pick one
pub const DEFAULT_WIDTH: usize = 8;

/// Default board height used by callers that don't pick one
pub const DEFAULT_HEIGHT: usize = 8;

/// A board cell. `None` is the transient "empty" state that only exists while a cascade
/// is being resolved; boards handed back to callers never contain it.
pub type Cell<T> = Option<T>;

/// A board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by `(d_row, d_col)`, wrapping at the `i32` limits
    ///
    /// A wrapped position lies outside any board, so bounds checks reject it.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row.wrapping_add(d_row),
            col: self.col.wrapping_add(d_col),
        }
    }

    /// True if the two positions are exactly one step apart along a single axis
    ///
    /// Identical and diagonal positions are never adjacent.
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::Position;
    ///
    /// let p = Position::new(2, 2);
    /// assert!(p.is_adjacent(Position::new(1, 2)));
    /// assert!(p.is_adjacent(Position::new(2, 3)));
    /// assert!(!p.is_adjacent(p));
    /// assert!(!p.is_adjacent(Position::new(3, 3)));
    /// assert!(!p.is_adjacent(Position::new(2, 4)));
    /// ```
    pub fn is_adjacent(self, other: Position) -> bool {
        matches!(
            (self.row.abs_diff(other.row), self.col.abs_diff(other.col)),
            (0, 1) | (1, 0)
        )
    }

    /// The neighbour to the right and the neighbour below, in that order
    ///
    /// Every unordered adjacent pair on a grid is produced exactly once by visiting each
    /// position and pairing it with these two. Bounds are the board's concern.
    pub fn forward_neighbors(self) -> ArrayVec<Position, 2> {
        let mut out = ArrayVec::new();
        out.push(self.offset(0, 1));
        out.push(self.offset(1, 0));
        out
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Axis along which a match was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// A run of [`MIN_RUN`] identical tiles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match<T> {
    /// The tile value shared by every position of the run
    pub matched: T,
    /// Positions of the run, ordered left-to-right or top-to-bottom
    pub positions: [Position; MIN_RUN],
}

impl<T> Match<T> {
    pub fn new(matched: T, positions: [Position; MIN_RUN]) -> Self {
        Self { matched, positions }
    }

    /// Axis of the run, derived from its first two positions
    pub fn direction(&self) -> Direction {
        if self.positions[0].row == self.positions[1].row {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }

    /// True if `position` is part of this run
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

/// One observable step of move resolution
///
/// Serialized adjacently tagged:
/// `{"kind":"Match","match":{...}}` and `{"kind":"Refill"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "match")]
pub enum Effect<T> {
    /// A match was detected and its cells cleared
    Match(Match<T>),
    /// Empty cells were filled (after gravity) by the generator
    Refill,
}

impl<T> Effect<T> {
    pub fn as_match(&self) -> Option<&Match<T>> {
        match self {
            Effect::Match(m) => Some(m),
            Effect::Refill => None,
        }
    }

    pub fn is_refill(&self) -> bool {
        matches!(self, Effect::Refill)
    }
}
