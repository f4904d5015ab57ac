use crate::board::{Token, TokenWindow};
use crate::games::player::Player;
use super::game_state::ConnectFourGame;
use super::types::ConnectFourToken;

/// Sum of [`score_window`] over every line of four on the board.
pub fn evaluate(game: &ConnectFourGame, player: &Player<ConnectFourToken>) -> i32 {
    game.windows()
        .map(|window| score_window(&window, player.token()))
        .sum()
}

/// Scores one window of four from the point of view of `own`.
///
/// Only windows holding a single kind of non-blank token count. Mixed and
/// fully blank windows score zero.
pub fn score_window<T: Token>(window: &TokenWindow<T>, own: T) -> i32 {
    let mine = window.count(own);
    let blank = window.count_blank();
    let theirs = window.len().saturating_sub(mine + blank);

    match (mine, theirs) {
        (4, 0) => 100,
        (3, 0) => 50,
        (2, 0) => 20,
        (1, 0) => 10,
        (0, 4) => -100,
        (0, 3) => -50,
        (0, 2) => -20,
        (0, 1) => -10,
        _ => 0,
    }
}
