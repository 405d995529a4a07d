use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::{Board, get_available_moves, is_full};
use super::types::Mark;
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Minimax,
    Random,
}

pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match bot_type {
        BotType::Minimax => select_move(*board, bot_mark),
        BotType::Random => calculate_random_move(board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Picks the best cell for `side` with an exhaustive minimax search.
///
/// `side` maximizes and its opponent minimizes. Wins score `10 - depth` and
/// losses `depth - 10`, so the search prefers the quickest win and the
/// slowest loss; draws score 0. Among equal scores the lowest index is kept.
///
/// Returns `None` when no cell is empty or `side` is [`Mark::Empty`]. The
/// board is not checked for an existing winner; callers stop the game
/// before asking for a move.
pub fn select_move(mut board: Board, side: Mark) -> Option<usize> {
    let opponent = side.opponent()?;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(&board) {
        board[index] = side;
        let score = minimax(&mut board, 0, false, side, opponent);
        board[index] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot_mark: Mark, opponent_mark: Mark) -> i32 {
    match check_win(board) {
        Some(winner) if winner == bot_mark => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None => {}
    }
    if is_full(board) {
        return 0;
    }

    let mark = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in get_available_moves(board) {
        board[index] = mark;
        let eval = minimax(board, depth + 1, !is_maximizing, bot_mark, opponent_mark);
        board[index] = Mark::Empty;

        best = if is_maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}
