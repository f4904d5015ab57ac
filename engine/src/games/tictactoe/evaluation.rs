use crate::board::Coordinate;
use crate::games::player::Player;
use crate::games::traits::Game;
use super::game_state::TicTacToeGame;
use super::types::TicTacToeToken;

pub const WIN_BONUS: i32 = 100;
pub const LOSS_PENALTY: i32 = -80;
pub const CENTER_BONUS: i32 = 10;

/// Terminal term once per position, then a bonus for every line through the
/// center cell that `player` holds.
pub fn evaluate(game: &TicTacToeGame, player: &Player<TicTacToeToken>) -> i32 {
    let mut score = match game.status().winner() {
        Some(winner) if winner == player => WIN_BONUS,
        Some(_) => LOSS_PENALTY,
        None => 0,
    };

    let center = center_of(game);
    let held = game
        .windows()
        .filter(|window| window.holds(center, player.token()))
        .count() as i32;
    score += held * CENTER_BONUS;

    score
}

pub fn center_of(game: &TicTacToeGame) -> Coordinate {
    Coordinate::new(game.width() / 2 + 1, game.height() / 2 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::player::Move;

    fn new_game() -> TicTacToeGame {
        TicTacToeGame::new(
            Player::new("x", TicTacToeToken::X),
            Player::new("o", TicTacToeToken::O),
        )
        .unwrap()
    }

    fn play(game: &mut TicTacToeGame, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            let mv = Move::new(game.current_player().clone(), Coordinate::new(x, y));
            assert!(game.try_move(&mv).unwrap());
        }
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let game = new_game();
        for player in game.players() {
            assert_eq!(game.evaluation(player), 0);
        }
    }

    #[test]
    fn test_center_counts_every_line_through_it() {
        let mut game = new_game();
        play(&mut game, &[(2, 2)]);

        let x = game.players()[0].clone();
        let o = game.players()[1].clone();
        assert_eq!(game.evaluation(&x), 4 * CENTER_BONUS);
        assert_eq!(game.evaluation(&o), 0);
    }

    #[test]
    fn test_winner_and_loser_after_top_row() {
        let mut game = new_game();
        play(&mut game, &[(1, 3), (2, 2), (2, 3), (1, 1), (3, 3)]);

        let x = game.players()[0].clone();
        let o = game.players()[1].clone();
        assert_eq!(game.evaluation(&x), WIN_BONUS);
        assert_eq!(game.evaluation(&o), LOSS_PENALTY + 4 * CENTER_BONUS);
        assert_eq!(game.evaluation(&o), -40);
    }

    #[test]
    fn test_center_of_standard_board() {
        assert_eq!(center_of(&new_game()), Coordinate::new(2, 2));
    }
}
