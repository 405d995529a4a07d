mod command;
mod config;
mod render;
mod runner;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::tictactoe::BotType;
use common::{log, logger};

use config::{CONFIG_FILE, Config, get_config_manager};
use runner::{GameOptions, run_game};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotArg {
    Minimax,
    Random,
}

impl From<BotArg> for BotType {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Minimax => BotType::Minimax,
            BotArg::Random => BotType::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console", version, about = "Play tic-tac-toe against a minimax bot")]
struct Args {
    /// YAML config file; created with --save-config
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides the configured bot
    #[arg(long, value_enum)]
    bot: Option<BotArg>,

    /// Seed for the random bot and the random first player
    #[arg(long)]
    seed: Option<u64>,

    /// Writes the effective config back to the config file
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Failed to load config from {}: {}, using defaults", args.config, e);
        Config::default()
    });

    if let Some(bot) = args.bot {
        config.game.bot_type = bot.into();
    }
    config.validate()?;

    if args.save_config {
        match config_manager.set_config(&config) {
            Ok(()) => log!("Config saved to {}", args.config),
            Err(e) => log!("Failed to save config: {}", e),
        }
    }

    let options = GameOptions {
        config,
        seed: args.seed.unwrap_or_else(rand::random),
    };
    run_game(options).await?;

    Ok(())
}
