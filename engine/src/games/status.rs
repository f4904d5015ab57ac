use super::player::Player;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus<T> {
    InProgress,
    Won(Player<T>),
    Drawn,
}

impl<T> GameStatus<T> {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<&Player<T>> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn into_winner(self) -> Option<Player<T>> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}
