use super::board::{Board, LINES, is_full};
use super::types::{Mark, Outcome, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Returns the first completed line, scanning rows, columns, then diagonals.
/// Boards are not checked for reachability.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board[a];
        if mark != Mark::Empty && mark == board[b] && mark == board[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return Outcome::Won(winner);
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}
