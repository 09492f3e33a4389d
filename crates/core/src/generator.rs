//! Generator module - tile sources used to fill the board
//!
//! The board engine never picks tiles itself; every new tile (initial fill and every refill
//! after a match) comes from a caller-supplied [`Generator`].
//!
//! Provided implementations:
//! - [`RandomGenerator`]: uniform draw from a fixed alphabet using a seeded ChaCha RNG
//! - [`CycleGenerator`]: deterministic round-robin over a scripted sequence
//! - [`from_fn`]: wrap any closure

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::ConfigError;

/// A source of new tiles
///
/// Called an unbounded number of times. Implementations must not depend on board state.
pub trait Generator<T> {
    fn next(&mut self) -> T;
}

/// Uniform random draw over a fixed alphabet
///
/// Same seed and alphabet produce the same tile sequence.
#[derive(Debug, Clone)]
pub struct RandomGenerator<T> {
    alphabet: Vec<T>,
    rng: ChaCha8Rng,
}

impl<T: Clone + PartialEq> RandomGenerator<T> {
    /// Create a generator over `alphabet`
    ///
    /// Rejects an empty alphabet, and an alphabet with a single distinct symbol: with only
    /// one symbol every refill recreates a run and the cascade never settles.
    pub fn new(alphabet: Vec<T>, seed: u64) -> Result<Self, ConfigError> {
        if alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        let distinct = count_distinct(&alphabet);
        if distinct < 2 {
            return Err(ConfigError::DegenerateAlphabet { distinct });
        }
        Ok(Self {
            alphabet,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    pub fn alphabet(&self) -> &[T] {
        &self.alphabet
    }
}

impl RandomGenerator<String> {
    /// Create a generator from a comma-separated alphabet such as `"R,G,B,Y"`
    ///
    /// Surrounding whitespace is trimmed and empty entries are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_core::{Generator, RandomGenerator};
    ///
    /// let mut gen = RandomGenerator::from_csv("R, G ,B", 7).unwrap();
    /// assert_eq!(gen.alphabet(), &["R", "G", "B"]);
    /// let tile = gen.next();
    /// assert!(["R", "G", "B"].contains(&tile.as_str()));
    ///
    /// assert!(RandomGenerator::from_csv(" , ", 7).is_err());
    /// ```
    pub fn from_csv(values: &str, seed: u64) -> Result<Self, ConfigError> {
        let alphabet = values
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self::new(alphabet, seed)
    }
}

impl<T: Clone> Generator<T> for RandomGenerator<T> {
    fn next(&mut self) -> T {
        let index = self.rng.random_range(0..self.alphabet.len());
        self.alphabet[index].clone()
    }
}

/// Deterministic generator that yields a scripted sequence, wrapping around at the end
///
/// Intended for tests and replays, so unlike [`RandomGenerator`] a single repeated symbol
/// is accepted. Only an empty sequence is rejected.
#[derive(Debug, Clone)]
pub struct CycleGenerator<T> {
    values: Vec<T>,
    index: usize,
}

impl<T: Clone> CycleGenerator<T> {
    pub fn new(values: Vec<T>) -> Result<Self, ConfigError> {
        if values.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(Self { values, index: 0 })
    }

    /// Number of tiles handed out so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl<T: Clone> Generator<T> for CycleGenerator<T> {
    fn next(&mut self) -> T {
        let tile = self.values[self.index % self.values.len()].clone();
        self.index += 1;
        tile
    }
}

/// Generator backed by a closure
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Wrap a closure as a [`Generator`]
///
/// # Examples
///
/// ```
/// use match3_core::generator::{from_fn, Generator};
///
/// let mut n = 0u8;
/// let mut gen = from_fn(move || {
///     n = (n + 1) % 4;
///     n
/// });
/// assert_eq!(gen.next(), 1);
/// assert_eq!(gen.next(), 2);
/// ```
pub fn from_fn<T, F: FnMut() -> T>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<T, F: FnMut() -> T> Generator<T> for FromFn<F> {
    fn next(&mut self) -> T {
        (self.0)()
    }
}

fn count_distinct<T: PartialEq>(values: &[T]) -> usize {
    values
        .iter()
        .enumerate()
        .filter(|&(i, v)| !values[..i].contains(v))
        .count()
}
