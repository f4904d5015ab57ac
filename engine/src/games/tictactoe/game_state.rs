use crate::error::Result;
use crate::games::board_game::BoardGame;
use crate::games::placement::CellPlacement;
use crate::games::player::Player;
use crate::games::traits::Rules;
use super::evaluation::evaluate;
use super::types::TicTacToeToken;

pub const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicTacToeRules;

impl Rules for TicTacToeRules {
    type Token = TicTacToeToken;
    type Placement = CellPlacement;

    const LINE_LENGTH: usize = 3;
    const FIRST_ROUND: u32 = 0;

    fn evaluate(game: &BoardGame<Self>, player: &Player<TicTacToeToken>) -> i32 {
        evaluate(game, player)
    }
}

pub type TicTacToeGame = BoardGame<TicTacToeRules>;

impl BoardGame<TicTacToeRules> {
    /// A 3x3 game where `first` moves first.
    pub fn new(first: Player<TicTacToeToken>, second: Player<TicTacToeToken>) -> Result<Self> {
        Self::create(BOARD_SIZE, BOARD_SIZE, vec![first, second])
    }
}
