pub mod config;
pub mod games;
pub mod logger;

pub use games::tictactoe::{Board, Mark, Outcome, evaluate, select_move};
