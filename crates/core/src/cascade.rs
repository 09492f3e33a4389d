//! Cascade resolution - clear, drop, refill, rescan
//!
//! Gravity is a per-column two-pointer compaction: scanning a column bottom to top, every
//! tile is moved down to the lowest free slot, preserving relative order. All columns are
//! compacted before any refill happens, so stacked gaps resolve in one pass and tiles fall as
//! far as needed. Refill then walks the whole grid top-to-bottom, left-to-right and asks the
//! generator for one tile per empty cell.
//!
//! The cascade loop has no iteration cap. It ends when a rescan finds no match, which needs
//! an alphabet with at least two symbols; `RandomGenerator` refuses anything smaller.

use match3_types::{Effect, Match};
use tracing::{debug, trace};

use crate::board::Board;
use crate::generator::Generator;
use crate::matcher::check_matches;

/// Let tiles fall into the empty cells below them
///
/// Returns the number of tiles that moved. Empty cells end up at the top of each column.
pub fn drop_tiles<T>(board: &mut Board<T>) -> usize {
    let (width, height) = (board.width(), board.height());
    let mut moved = 0;

    for col in 0..width {
        let mut write_row = height;

        // Scan from bottom to top
        for read_row in (0..height).rev() {
            if board.cell(read_row, col).is_none() {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let tile = board.cell_mut(read_row, col).take();
                *board.cell_mut(write_row, col) = tile;
                moved += 1;
            }
        }
    }

    moved
}

/// Fill every empty cell from the generator, top-to-bottom then left-to-right
///
/// Returns the number of cells filled.
pub fn refill<T, G>(board: &mut Board<T>, generator: &mut G) -> usize
where
    G: Generator<T> + ?Sized,
{
    let (width, height) = (board.width(), board.height());
    let mut filled = 0;

    for row in 0..height {
        for col in 0..width {
            let cell = board.cell_mut(row, col);
            if cell.is_none() {
                *cell = Some(generator.next());
                filled += 1;
            }
        }
    }

    filled
}

/// Apply gravity to the whole board, then refill what is left empty
///
/// Returns the number of cells refilled.
pub fn fill_in_empty_cells<T, G>(board: &mut Board<T>, generator: &mut G) -> usize
where
    G: Generator<T> + ?Sized,
{
    drop_tiles(board);
    refill(board, generator)
}

/// Resolve `matches` and every cascade they trigger
///
/// Each iteration emits one `Match` effect per match (in detection order) and clears its
/// cells, then runs gravity plus refill and emits a single `Refill`, then rescans. Returns
/// the effects in emission order; an empty input yields no effects and leaves the board
/// untouched.
pub fn handle_matches<T, G>(
    board: &mut Board<T>,
    generator: &mut G,
    matches: Vec<Match<T>>,
) -> Vec<Effect<T>>
where
    T: Clone + PartialEq,
    G: Generator<T> + ?Sized,
{
    let mut effects = Vec::new();
    let mut matches = matches;
    let mut iteration = 0usize;

    while !matches.is_empty() {
        iteration += 1;
        let found = matches.len();

        for m in matches {
            trace!(positions = ?m.positions, direction = ?m.direction(), "clearing match");
            for position in m.positions {
                board.clear(position);
            }
            effects.push(Effect::Match(m));
        }

        let cleared = board.empty_count();
        let filled = fill_in_empty_cells(board, generator);
        effects.push(Effect::Refill);
        debug!(iteration, matches = found, cleared, filled, "cascade step resolved");

        matches = check_matches(board);
    }

    debug_assert!(board.is_filled(), "cascade left empty cells");
    effects
}
