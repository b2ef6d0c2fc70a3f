//! Opening book.
//!
//! A static table of named move sequences matched against the game's move
//! history by prefix. On a hit the next move of a uniformly-chosen matching
//! line is proposed, letting the engine play known theory without
//! searching.

mod lines;

use log::debug;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use lines::{Line, OPENING_LINES};

/// Process-wide book over the built-in opening lines.
pub static OPENING_BOOK: Lazy<OpeningBook> = Lazy::new(OpeningBook::new);

/// Prefix-matching move selector over a set of opening lines.
pub struct OpeningBook {
    lines: &'static [Line],
    // RNG behind a lock so `next_move` can take &self from the static.
    rng: Mutex<StdRng>,
}

impl OpeningBook {
    /// Book over the built-in lines, seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        OpeningBook {
            lines: OPENING_LINES,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Book with a fixed seed, for reproducible tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        OpeningBook::from_lines(OPENING_LINES, seed)
    }

    /// Book over a custom line set with a fixed seed.
    #[must_use]
    pub fn from_lines(lines: &'static [Line], seed: u64) -> Self {
        OpeningBook {
            lines,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Number of lines in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Propose the next move for the given history.
    ///
    /// Filters lines whose moves start with `history` and still have a move
    /// to offer, then picks uniformly at random among them. `None` when the
    /// game has left book.
    pub fn next_move(&self, history: &[String]) -> Option<&'static str> {
        let matching: Vec<&Line> = self
            .lines
            .iter()
            .filter(|line| {
                line.moves.len() > history.len()
                    && line.moves.iter().zip(history.iter()).all(|(a, b)| a == b)
            })
            .collect();

        if matching.is_empty() {
            return None;
        }

        let pick = self.rng.lock().gen_range(0..matching.len());
        let line = matching[pick];
        debug!(
            "book hit: '{}' continues with {}",
            line.name,
            line.moves[history.len()]
        );
        Some(line.moves[history.len()])
    }
}

impl Default for OpeningBook {
    fn default() -> Self {
        OpeningBook::new()
    }
}
