use crate::error::{GameError, Result};
use crate::games::board_game::BoardGame;
use crate::games::placement::ColumnDrop;
use crate::games::player::Player;
use crate::games::traits::Rules;
use super::evaluation::evaluate;
use super::types::ConnectFourToken;

pub const STANDARD_WIDTH: usize = 7;
pub const STANDARD_HEIGHT: usize = 6;
pub const MIN_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectFourRules;

impl Rules for ConnectFourRules {
    type Token = ConnectFourToken;
    type Placement = ColumnDrop;

    const LINE_LENGTH: usize = 4;
    const FIRST_ROUND: u32 = 1;

    fn evaluate(game: &BoardGame<Self>, player: &Player<ConnectFourToken>) -> i32 {
        evaluate(game, player)
    }
}

pub type ConnectFourGame = BoardGame<ConnectFourRules>;

impl BoardGame<ConnectFourRules> {
    /// Players move in list order, starting with the first.
    pub fn new(width: usize, height: usize, players: Vec<Player<ConnectFourToken>>) -> Result<Self> {
        if width < MIN_SIZE || height < MIN_SIZE {
            return Err(GameError::InvalidArgument(format!(
                "connect-four needs at least {}x{} cells, got {}x{}",
                MIN_SIZE, MIN_SIZE, width, height
            )));
        }
        Self::create(width, height, players)
    }

    pub fn standard(players: Vec<Player<ConnectFourToken>>) -> Result<Self> {
        Self::new(STANDARD_WIDTH, STANDARD_HEIGHT, players)
    }
}
