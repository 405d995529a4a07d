mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, LINES, empty_board, get_available_moves, is_full};
pub use bot_controller::{BotType, calculate_move, select_move};
pub use game_state::TicTacToeGameState;
pub use types::{FirstPlayerMode, GameStatus, Mark, Outcome, Side, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
