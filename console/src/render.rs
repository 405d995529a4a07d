use common::games::tictactoe::{
    Board, GameStatus, Mark, Side, TicTacToeGameState, WinningLine,
};

/// Draws the grid; cells of a completed line are bracketed.
pub fn render_board(board: &Board, winning_line: Option<WinningLine>, empty_glyph: char) -> String {
    let cell = |index: usize| {
        let glyph = match board[index] {
            Mark::Empty => empty_glyph.to_string(),
            mark => mark.to_string(),
        };
        match winning_line {
            Some(line) if line.cells.contains(&index) => format!("[{}]", glyph),
            _ => format!(" {} ", glyph),
        }
    };

    (0..3)
        .map(|row| (0..3).map(|col| cell(row * 3 + col)).collect::<Vec<_>>().join("|"))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

pub fn render_status(state: &TicTacToeGameState) -> String {
    match state.status {
        GameStatus::InProgress if state.is_human_turn() => {
            format!("Your move ({}), pick a cell 1-9", state.human_mark)
        }
        GameStatus::InProgress => format!("Bot ({}) is thinking...", state.bot_mark),
        GameStatus::Draw => "Draw!".to_string(),
        GameStatus::XWon | GameStatus::OWon => {
            let who = match state.get_winner_side() {
                Some(Side::Human) => "You win",
                _ => "Bot wins",
            };
            match state.winning_line {
                Some(line) => {
                    let [a, b, c] = line.cells.map(|index| index + 1);
                    format!("{} on cells {}, {}, {}!", who, a, b, c)
                }
                None => format!("{}!", who),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::FirstPlayerMode;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_render_board_grid() {
        let board = [X, E, O, E, X, E, O, E, E];
        let expected = " X | . | O \n---+---+---\n . | X | . \n---+---+---\n O | . | . ";
        assert_eq!(render_board(&board, None, '.'), expected);
    }

    #[test]
    fn test_render_board_brackets_winning_line() {
        let board = [O, X, X, E, O, X, E, E, O];
        let line = WinningLine::new(O, [0, 4, 8]);
        let rendered = render_board(&board, Some(line), '-');
        assert!(rendered.starts_with("[O]| X | X "));
        assert!(rendered.contains(" - |[O]| X "));
        assert!(rendered.ends_with(" - | - |[O]"));
    }

    #[test]
    fn test_status_reports_win_cells_one_based() {
        let mut rng = SessionRng::new(0);
        let mut state = TicTacToeGameState::new(X, FirstPlayerMode::Human, &mut rng).unwrap();
        state.board = [X, X, E, O, O, E, E, E, E];
        state.human_move(2).unwrap();
        assert_eq!(render_status(&state), "You win on cells 1, 2, 3!");
    }

    #[test]
    fn test_status_prompts_human() {
        let mut rng = SessionRng::new(0);
        let state = TicTacToeGameState::new(O, FirstPlayerMode::Human, &mut rng).unwrap();
        assert_eq!(render_status(&state), "Your move (O), pick a cell 1-9");
    }
}
