use std::fmt;

use crate::board::Token;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TicTacToeToken {
    Blank,
    X,
    O,
}

impl Token for TicTacToeToken {
    const BLANK: Self = TicTacToeToken::Blank;
}

impl fmt::Display for TicTacToeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            TicTacToeToken::Blank => "_",
            TicTacToeToken::X => "X",
            TicTacToeToken::O => "O",
        };
        write!(f, "{}", symbol)
    }
}
