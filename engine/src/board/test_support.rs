use std::fmt;

use super::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Token for Mark {
    const BLANK: Self = Mark::Empty;
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, "_"),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}
