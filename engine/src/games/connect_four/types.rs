use std::fmt;

use crate::board::Token;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectFourToken {
    Blank,
    Red,
    Orange,
}

impl Token for ConnectFourToken {
    const BLANK: Self = ConnectFourToken::Blank;
}

impl fmt::Display for ConnectFourToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ConnectFourToken::Blank => " ",
            ConnectFourToken::Red => "R",
            ConnectFourToken::Orange => "O",
        };
        write!(f, "{}", symbol)
    }
}
