use crate::games::SessionRng;
use crate::log;
use super::board::{BOARD_SIZE, Board, empty_board};
use super::bot_controller::{BotType, calculate_move, select_move};
use super::types::{FirstPlayerMode, GameStatus, Mark, Side, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// One human-versus-bot game on a caller-owned board.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub bot_mark: Mark,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(
        human_mark: Mark,
        first_player_mode: FirstPlayerMode,
        rng: &mut SessionRng,
    ) -> Result<Self, String> {
        let bot_mark = human_mark
            .opponent()
            .ok_or_else(|| "Human mark must be X or O".to_string())?;

        let mut state = Self {
            board: empty_board(),
            human_mark,
            bot_mark,
            current_mark: human_mark,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        };
        state.restart(first_player_mode, rng);
        Ok(state)
    }

    pub fn restart(&mut self, first_player_mode: FirstPlayerMode, rng: &mut SessionRng) {
        let first = match first_player_mode {
            FirstPlayerMode::Human => Side::Human,
            FirstPlayerMode::Bot => Side::Bot,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Side::Human
                } else {
                    Side::Bot
                }
            }
        };

        self.board = empty_board();
        self.current_mark = self.mark_of(first);
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.winning_line = None;

        log!("New game: human plays {}, {:?} moves first", self.human_mark, first);
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if index >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if self.board[index] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[index] = mark;
        self.last_move = Some(index);
        log!("{} placed on cell {}", mark, index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn human_move(&mut self, index: usize) -> Result<(), String> {
        self.place_mark(self.human_mark, index)
    }

    /// Plays the bot's reply if the game is running and it is the bot's turn.
    pub fn bot_move(&mut self, bot_type: BotType, rng: &mut SessionRng) -> Option<usize> {
        if !self.is_bot_turn() {
            return None;
        }

        let index = calculate_move(bot_type, &self.board, self.bot_mark, rng)?;
        self.place_mark(self.bot_mark, index).ok()?;
        Some(index)
    }

    /// The engine's choice for the human, offered as a hint.
    pub fn hint(&self) -> Option<usize> {
        if !self.is_human_turn() {
            return None;
        }
        select_move(self.board, self.human_mark)
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current_mark == self.human_mark
    }

    pub fn is_bot_turn(&self) -> bool {
        !self.is_over() && self.current_mark == self.bot_mark
    }

    pub fn get_winner_side(&self) -> Option<Side> {
        let winner = match self.status {
            GameStatus::XWon => Mark::X,
            GameStatus::OWon => Mark::O,
            GameStatus::InProgress | GameStatus::Draw => return None,
        };
        if winner == self.human_mark {
            Some(Side::Human)
        } else {
            Some(Side::Bot)
        }
    }

    fn mark_of(&self, side: Side) -> Mark {
        match side {
            Side::Human => self.human_mark,
            Side::Bot => self.bot_mark,
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == self.human_mark {
            self.bot_mark
        } else {
            self.human_mark
        };
    }

    fn check_game_over(&mut self) {
        let outcome = evaluate(&self.board);
        self.status = GameStatus::from(outcome);
        self.winning_line = check_win_with_line(&self.board);

        if outcome.is_terminal() {
            log!("Game over: {:?}", self.status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human_first() -> (TicTacToeGameState, SessionRng) {
        let mut rng = SessionRng::new(42);
        let state = TicTacToeGameState::new(Mark::X, FirstPlayerMode::Human, &mut rng).unwrap();
        (state, rng)
    }

    #[test]
    fn test_new_rejects_empty_mark() {
        let mut rng = SessionRng::new(1);
        assert!(TicTacToeGameState::new(Mark::Empty, FirstPlayerMode::Human, &mut rng).is_err());
    }

    #[test]
    fn test_first_player_decides_current_mark() {
        let mut rng = SessionRng::new(1);
        let state = TicTacToeGameState::new(Mark::X, FirstPlayerMode::Bot, &mut rng).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert!(state.is_bot_turn());

        let state = TicTacToeGameState::new(Mark::O, FirstPlayerMode::Human, &mut rng).unwrap();
        assert_eq!(state.bot_mark, Mark::X);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_random_first_player_is_reproducible() {
        let first = |seed| {
            let mut rng = SessionRng::new(seed);
            TicTacToeGameState::new(Mark::X, FirstPlayerMode::Random, &mut rng)
                .unwrap()
                .current_mark
        };
        for seed in 0..8 {
            assert_eq!(first(seed), first(seed));
        }
    }

    #[test]
    fn test_human_move_switches_turn() {
        let (mut state, _) = human_first();
        state.human_move(4).unwrap();
        assert_eq!(state.board[4], Mark::X);
        assert_eq!(state.last_move, Some(4));
        assert!(state.is_bot_turn());
    }

    #[test]
    fn test_rejects_illegal_moves() {
        let (mut state, mut rng) = human_first();
        assert_eq!(state.human_move(9), Err("Position out of bounds".to_string()));
        state.human_move(0).unwrap();
        assert_eq!(state.human_move(1), Err("Not your turn".to_string()));
        state.bot_move(BotType::Minimax, &mut rng).unwrap();
        assert_eq!(state.human_move(0), Err("Cell is already marked".to_string()));
    }

    #[test]
    fn test_bot_waits_for_its_turn() {
        let (mut state, mut rng) = human_first();
        assert_eq!(state.bot_move(BotType::Minimax, &mut rng), None);
        assert!(state.board.iter().all(|&c| c == Mark::Empty));
    }

    #[test]
    fn test_bot_blocks_human_line() {
        let (mut state, mut rng) = human_first();
        state.human_move(0).unwrap();
        let reply = state.bot_move(BotType::Minimax, &mut rng).unwrap();
        assert_eq!(state.board[reply], Mark::O);
        let next = if reply == 1 { 3 } else { 1 };
        state.human_move(next).unwrap();
        let block = if next == 1 { 2 } else { 6 };
        assert_eq!(state.bot_move(BotType::Minimax, &mut rng), Some(block));
    }

    #[test]
    fn test_win_ends_game_and_records_line() {
        let (mut state, _) = human_first();
        state.board = [
            Mark::X, Mark::X, Mark::Empty,
            Mark::O, Mark::O, Mark::Empty,
            Mark::Empty, Mark::Empty, Mark::Empty,
        ];
        state.human_move(2).unwrap();
        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.get_winner_side(), Some(Side::Human));
        assert_eq!(state.winning_line.map(|l| l.cells), Some([0, 1, 2]));
        assert_eq!(state.human_move(5), Err("Game is already over".to_string()));
        assert!(!state.is_bot_turn());
    }

    #[test]
    fn test_bot_never_loses_a_full_game() {
        let mut rng = SessionRng::new(9);
        for seed in 0..10 {
            let mut human_rng = SessionRng::new(seed);
            let mut state = TicTacToeGameState::new(Mark::X, FirstPlayerMode::Random, &mut rng).unwrap();
            while !state.is_over() {
                if state.is_human_turn() {
                    let index = calculate_move(BotType::Random, &state.board, Mark::X, &mut human_rng).unwrap();
                    state.human_move(index).unwrap();
                } else {
                    state.bot_move(BotType::Minimax, &mut rng).unwrap();
                }
            }
            assert_ne!(state.get_winner_side(), Some(Side::Human));
        }
    }

    #[test]
    fn test_hint_only_on_human_turn() {
        let (mut state, _) = human_first();
        assert_eq!(state.hint(), Some(0));
        state.human_move(0).unwrap();
        assert_eq!(state.hint(), None);
    }

    #[test]
    fn test_restart_clears_board() {
        let (mut state, mut rng) = human_first();
        state.human_move(4).unwrap();
        state.restart(FirstPlayerMode::Bot, &mut rng);
        assert!(state.board.iter().all(|&c| c == Mark::Empty));
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.last_move, None);
        assert!(state.is_bot_turn());
    }
}
