use std::error::Error;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{BotType, TicTacToeGameState};
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::render::{render_board, render_status};

pub struct GameOptions {
    pub config: Config,
    pub seed: u64,
}

pub async fn run_game(options: GameOptions) -> Result<(), Box<dyn Error + Send + Sync>> {
    let GameOptions { config, seed } = options;
    let bot_type = config.game.bot_type;
    let first_player = config.game.first_player;
    let think_delay = Duration::from_millis(config.bot.think_delay_ms as u64);
    let empty_glyph = config.display.empty_glyph();

    let mut rng = SessionRng::new(seed);
    let mut state = TicTacToeGameState::new(config.game.human_mark, first_player, &mut rng)?;
    log!("Session seed {}, bot {:?}", rng.seed(), bot_type);

    println!("{}", HELP);
    (state, rng) = bot_reply(state, rng, bot_type, think_delay).await?;
    show(&state, empty_glyph);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Hint => match state.hint() {
                Some(index) => println!("Try cell {}", index + 1),
                None => println!("No hint available right now"),
            },
            Command::Restart => {
                state.restart(first_player, &mut rng);
                (state, rng) = bot_reply(state, rng, bot_type, think_delay).await?;
                show(&state, empty_glyph);
            }
            Command::Place(index) => {
                if let Err(e) = state.human_move(index) {
                    println!("{}", e);
                    continue;
                }
                show(&state, empty_glyph);
                if state.is_bot_turn() {
                    (state, rng) = bot_reply(state, rng, bot_type, think_delay).await?;
                    show(&state, empty_glyph);
                }
            }
        }
    }

    log!("Leaving game");
    Ok(())
}

/// Lets the bot move if it is its turn. The search runs on the blocking pool
/// so the input loop is never stalled by it.
async fn bot_reply(
    mut state: TicTacToeGameState,
    mut rng: SessionRng,
    bot_type: BotType,
    think_delay: Duration,
) -> Result<(TicTacToeGameState, SessionRng), Box<dyn Error + Send + Sync>> {
    if !state.is_bot_turn() {
        return Ok((state, rng));
    }

    tokio::time::sleep(think_delay).await;

    let result = tokio::task::spawn_blocking(move || {
        let played = state.bot_move(bot_type, &mut rng);
        (state, rng, played)
    })
    .await?;

    let (state, rng, played) = result;
    if let Some(index) = played {
        println!("Bot plays cell {}", index + 1);
    }
    Ok((state, rng))
}

fn show(state: &TicTacToeGameState, empty_glyph: char) {
    println!();
    println!("{}", render_board(&state.board, state.winning_line, empty_glyph));
    println!("{}", render_status(state));
    if state.is_over() {
        println!("Type 'restart' to play again or 'quit' to leave");
    }
}
