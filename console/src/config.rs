use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{BotType, FirstPlayerMode, Mark};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_console_config.yaml";

const MAX_THINK_DELAY_MS: u32 = 5000;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub bot: BotConfig,
    pub display: DisplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.bot.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub human_mark: Mark,
    pub first_player: FirstPlayerMode,
    pub bot_type: BotType,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BotConfig {
    pub think_delay_ms: u32,
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "think_delay_ms must not exceed {}",
                MAX_THINK_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub empty_glyph: String,
}

impl DisplayConfig {
    pub fn empty_glyph(&self) -> char {
        self.empty_glyph.chars().next().unwrap_or('.')
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        let mut chars = self.empty_glyph.chars();
        let (Some(glyph), None) = (chars.next(), chars.next()) else {
            return Err("empty_glyph must be exactly one character".to_string());
        };
        if glyph.is_whitespace() {
            return Err("empty_glyph must be visible".to_string());
        }
        if glyph.eq_ignore_ascii_case(&'x') || glyph.eq_ignore_ascii_case(&'o') {
            return Err("empty_glyph must differ from the player marks".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                human_mark: Mark::X,
                first_player: FirstPlayerMode::Human,
                bot_type: BotType::Minimax,
            },
            bot: BotConfig { think_delay_ms: 220 },
            display: DisplayConfig {
                empty_glyph: ".".to_string(),
            },
        }
    }
}
