use tutor_chess_core::{Board, GameStatus, Move};

use super::move_ordering::order_moves;
use super::transposition::{NodeType, TTable};
use crate::evaluation::{evaluate, evaluate_terminal, Evaluation};

// Quiescence search: extends the leaves of the main search with captures
// and promotions only, to avoid misjudging positions where a capture is
// hanging right at the horizon (spec.md 4.3, "horizon effect").
pub fn quiescence(board: &Board, mut alpha: Evaluation, beta: Evaluation) -> Evaluation {
    let stand_pat = evaluate(board);

    if stand_pat >= beta {
        return beta;
    }
    if alpha < stand_pat {
        alpha = stand_pat;
    }

    let noisy_moves: Vec<Move> = board
        .legal_moves()
        .into_iter()
        .filter(|&mv| board.is_capture(mv) || mv.promotion().is_some())
        .collect();

    for rated in order_moves(board, noisy_moves, None) {
        let score = -quiescence(&board.make_move(rated.mv), -beta, -alpha);

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

// Negamax search with alpha-beta pruning and a transposition table
// (spec.md 4.3, 4.4, 4.6). Deliberately excludes null-move pruning, late
// move reductions, futility pruning and aspiration windows: at a fixed
// depth, this function's result must equal plain exhaustive minimax
// (spec.md 8, window-invariance). Time is checked only between root moves
// and between iterative-deepening depths (see `search::find_best_move`),
// never inside this function, so a completed search at a given depth is
// always fully deterministic.
pub fn negamax(
    board: &Board,
    depth: u8,
    mut alpha: Evaluation,
    beta: Evaluation,
    tt: &mut TTable,
    path: &mut Vec<u64>,
) -> Evaluation {
    let zobrist_key = board.zobrist_key();

    let mut tt_move = None;
    if let Some(score) = tt.probe(zobrist_key, depth, alpha, beta, &mut tt_move) {
        return score;
    }

    if is_repetition(path, zobrist_key) {
        return Evaluation::draw();
    }

    let status = board.game_status();
    if status != GameStatus::InProgress {
        return evaluate_terminal(status, depth);
    }

    if depth == 0 {
        return quiescence(board, alpha, beta);
    }

    let alpha_orig = alpha;
    let moves = order_moves(board, board.legal_moves(), tt_move);

    let mut best_score = Evaluation::min_val();
    let mut best_move = None;

    for rated in moves {
        let child = board.make_move(rated.mv);
        path.push(zobrist_key);
        let score = -negamax(&child, depth - 1, -beta, -alpha, tt, path);
        path.pop();

        if score > best_score {
            best_score = score;
            best_move = Some(rated.mv);
        }

        alpha = alpha.max(best_score);
        if alpha >= beta {
            break;
        }
    }

    let node_type = if best_score <= alpha_orig {
        NodeType::UpperBound
    } else if best_score >= beta {
        NodeType::LowerBound
    } else {
        NodeType::Exact
    };

    tt.store(zobrist_key, depth, best_score, node_type, best_move);
    best_score
}

// Whether the current position (about to be searched) has already occurred
// twice along the path from the game's start through the current search
// branch -- i.e. this would be the third occurrence, a draw by repetition
// (spec.md 4.1). `path` holds the zobrist keys of every position visited so
// far, both from the real game history and from moves made earlier in this
// recursive search.
fn is_repetition(path: &[u64], zobrist_key: u64) -> bool {
    path.iter().filter(|&&key| key == zobrist_key).count() >= 2
}
