use super::types::Mark;

pub const BOARD_SIZE: usize = 9;

/// Cells in row-major order: 0..3 is the top row, 6..9 the bottom row.
pub type Board = [Mark; BOARD_SIZE];

/// Every winning line of the 3x3 grid: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_SIZE]
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}
