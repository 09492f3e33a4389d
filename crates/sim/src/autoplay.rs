//! Autoplayer - picks a random legal move each turn
//!
//! Uses its own seeded RNG, independent of the tile generator, so the same pair of seeds
//! replays the same game.

use match3_core::{Generator, MoveResult};
use match3_types::Position;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::session::Session;

/// Mixed into the session seed so move choice and tile draws use different streams
const MOVE_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone)]
pub struct Autoplayer {
    rng: ChaCha8Rng,
}

impl Autoplayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed ^ MOVE_SEED_SALT),
        }
    }

    /// Pick a legal move uniformly at random
    ///
    /// Returns `None` once the session is completed.
    pub fn choose<T, G>(&mut self, session: &Session<T, G>) -> Option<(Position, Position)>
    where
        T: Clone + PartialEq,
        G: Generator<T>,
    {
        if session.limit_reached() {
            return None;
        }
        let moves = session.legal_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.random_range(0..moves.len())])
    }

    /// Play one chosen move
    pub fn step<T, G>(&mut self, session: &mut Session<T, G>) -> Option<MoveResult<T>>
    where
        T: Clone + PartialEq,
        G: Generator<T>,
    {
        let (first, second) = self.choose(session)?;
        Some(session.play(first, second))
    }

    /// Play until the session completes, handing every result to `on_move`
    ///
    /// Returns the number of moves played.
    pub fn run<T, G, F>(&mut self, session: &mut Session<T, G>, mut on_move: F) -> u32
    where
        T: Clone + PartialEq,
        G: Generator<T>,
        F: FnMut(&MoveResult<T>),
    {
        let mut played = 0;
        while let Some(result) = self.step(session) {
            on_move(&result);
            played += 1;
        }
        info!(
            played,
            stuck = session.is_stuck(),
            matches = session.matches_cleared(),
            "autoplay finished"
        );
        played
    }
}
