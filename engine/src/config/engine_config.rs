use serde::{Deserialize, Serialize};

use crate::games::connect_four::{MIN_SIZE, STANDARD_HEIGHT, STANDARD_WIDTH};
use super::Validate;

pub const MIN_SEARCH_DEPTH: u32 = 1;
pub const MAX_SEARCH_DEPTH: u32 = 12;
pub const MAX_BOARD_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub search_depth: u32,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self { search_depth: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectFourConfig {
    pub width: usize,
    pub height: usize,
    pub search_depth: u32,
}

impl Default for ConnectFourConfig {
    fn default() -> Self {
        Self {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            search_depth: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tictactoe: TicTacToeConfig,
    pub connect_four: ConnectFourConfig,
    pub verbose: bool,
}

fn validate_depth(game: &str, depth: u32) -> Result<(), String> {
    if !(MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH).contains(&depth) {
        return Err(format!(
            "{} search depth must be between {} and {}, got {}",
            game, MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH, depth
        ));
    }
    Ok(())
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        validate_depth("tictactoe", self.search_depth)
    }
}

impl Validate for ConnectFourConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < MIN_SIZE || self.width > MAX_BOARD_SIZE {
            return Err(format!(
                "connect_four width must be between {} and {}, got {}",
                MIN_SIZE, MAX_BOARD_SIZE, self.width
            ));
        }
        if self.height < MIN_SIZE || self.height > MAX_BOARD_SIZE {
            return Err(format!(
                "connect_four height must be between {} and {}, got {}",
                MIN_SIZE, MAX_BOARD_SIZE, self.height
            ));
        }
        validate_depth("connect_four", self.search_depth)
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.connect_four.validate()
    }
}
