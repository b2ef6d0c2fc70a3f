//! Minimax with alpha-beta pruning.

use crate::board::pst::MATERIAL;
use crate::board::state::Board;
use crate::board::types::{Color, Square};

/// Candidate (from, to) pairs for `color`, captures first.
///
/// Capture-first ordering (richest victim leading) is purely a pruning
/// heuristic; the ordering within each group is the stable enumeration
/// order, which also fixes the tie-break: the first candidate reaching the
/// extremal score wins.
pub(crate) fn ordered_candidates(board: &Board, color: Color) -> Vec<(Square, Square)> {
    let mut captures: Vec<(i32, Square, Square)> = Vec::new();
    let mut quiets: Vec<(Square, Square)> = Vec::new();

    for (from, _) in board.pieces_of(color) {
        for to in board.pseudo_destinations(from) {
            match board.piece_on(to) {
                Some(victim) => captures.push((MATERIAL[victim.kind.index()], from, to)),
                None => quiets.push((from, to)),
            }
        }
    }

    captures.sort_by(|a, b| b.0.cmp(&a.0));

    let mut out: Vec<(Square, Square)> = Vec::with_capacity(captures.len() + quiets.len());
    out.extend(captures.into_iter().map(|(_, from, to)| (from, to)));
    out.extend(quiets);
    out
}

/// Minimax with alpha-beta pruning over (piece, destination) pairs.
///
/// `to_move` is the side whose candidates are enumerated at this node;
/// `maximizing` says whether that side is maximizing the White-perspective
/// evaluation. Candidates that leave the mover's own king in check are
/// rejected lazily, after simulation. Pruning never changes the returned
/// score, only the nodes visited.
#[must_use]
pub fn search(
    board: &Board,
    depth: u32,
    to_move: Color,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<(Square, Square)>) {
    if depth == 0 || board.is_checkmate(Color::White) || board.is_checkmate(Color::Black) {
        return (board.evaluate(), None);
    }

    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for (from, to) in ordered_candidates(board, to_move) {
        let next = board.simulate(from, to);
        if next.is_in_check(to_move) {
            continue;
        }

        let (score, _) = search(&next, depth - 1, to_move.opponent(), !maximizing, alpha, beta);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some((from, to));
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some((from, to));
            }
            beta = beta.min(best_score);
        }

        if beta <= alpha {
            break;
        }
    }

    if best_move.is_none() {
        // No legal candidate at this node (mate or stalemate below the
        // horizon); fall back to the static score.
        return (board.evaluate(), None);
    }

    (best_score, best_move)
}
