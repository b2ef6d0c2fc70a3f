//! Fixed-depth search.
//!
//! Straightforward minimax with alpha-beta pruning, capture-first move
//! ordering and a (difficulty x game-stage) depth schedule. Deliberately
//! no transposition tables, iterative deepening or quiescence: the engine
//! plays at shallow depths chosen by the schedule below.

mod alphabeta;

pub use alphabeta::search;
pub(crate) use alphabeta::ordered_candidates;

use log::debug;

use super::state::Board;
use super::types::{Color, Square};

/// Search depth per (difficulty - 1, game stage) pair.
///
/// Stages are bucketed by occupied-square count; stronger players get
/// deeper search as material thins out.
const DEPTH_SCHEDULE: [[u32; 3]; 3] = [
    [1, 1, 2], // difficulty 1
    [2, 2, 3], // difficulty 2
    [2, 3, 4], // difficulty 3
];

/// Occupied-square counts above these bounds mark the early and mid game.
const EARLY_STAGE_MIN: usize = 25;
const MID_STAGE_MIN: usize = 13;

/// Pick a search depth from the difficulty level and board population.
///
/// Difficulties outside 1-3 are clamped.
#[must_use]
pub fn depth_for(difficulty: u8, occupied: usize) -> u32 {
    let level = difficulty.clamp(1, 3) as usize - 1;
    let stage = if occupied >= EARLY_STAGE_MIN {
        0
    } else if occupied >= MID_STAGE_MIN {
        1
    } else {
        2
    };
    DEPTH_SCHEDULE[level][stage]
}

/// Find the best move for `color` at the given depth.
///
/// The root iterates the candidates itself: deeper nodes treat castling as
/// a plain king hop, but the root move is actually played, so candidates
/// failing the castling passage gates are skipped here. Every returned
/// move is accepted by the game controller as-is.
///
/// Returns `None` when `color` has no legal move (mate or stalemate).
#[must_use]
pub fn find_best_move(board: &Board, color: Color, depth: u32) -> Option<(Square, Square)> {
    let maximizing = color == Color::White;
    let mut alpha = i32::MIN;
    let mut beta = i32::MAX;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best = None;

    for (from, to) in ordered_candidates(board, color) {
        if !board.castle_passage_safe(from, to) {
            continue;
        }
        let next = board.simulate(from, to);
        if next.is_in_check(color) {
            continue;
        }

        let (score, _) = search(
            &next,
            depth.saturating_sub(1),
            color.opponent(),
            !maximizing,
            alpha,
            beta,
        );

        if maximizing {
            if score > best_score {
                best_score = score;
                best = Some((from, to));
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best = Some((from, to));
            }
            beta = beta.min(best_score);
        }
    }

    debug!("search depth {depth} for {color}: score {best_score}, move {best:?}");
    best
}
