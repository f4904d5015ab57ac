use std::fmt;
use std::hash::Hash;

use crate::board::Token;
use crate::error::{GameError, Result};
use super::board_game::BoardGame;
use super::placement::PlacementPolicy;
use super::player::{Move, Player};
use super::status::GameStatus;

/// The contract the search and the play loop work through.
///
/// Every implementation can enumerate its continuations and score itself,
/// so callers never need to know which concrete game they hold.
pub trait Game: Clone + fmt::Display {
    type Token: Token;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn players(&self) -> &[Player<Self::Token>];

    fn current_player(&self) -> &Player<Self::Token>;

    fn round_number(&self) -> u32;

    fn is_move_allowed(&self, mv: &Move<Self::Token>) -> bool;

    /// Applies `mv` to the game.
    ///
    /// Returns `Ok(false)` without touching anything when the target cell is
    /// taken or the column is full. Fails when the move is off the board or
    /// the acting player is not the one to move.
    fn try_move(&mut self, mv: &Move<Self::Token>) -> Result<bool>;

    /// Scans the whole board: a winning line first, then a full board.
    fn status(&self) -> GameStatus<Self::Token>;

    fn is_game_over(&self) -> (bool, Option<Player<Self::Token>>) {
        let status = self.status();
        (status.is_over(), status.into_winner())
    }

    /// Moves the current player may make, in board scan order.
    fn legal_moves(&self) -> Vec<Move<Self::Token>>;

    /// One `(move, game after the move)` pair per legal move, in
    /// [`Game::legal_moves`] order. The live game is left untouched.
    fn child_states(&self) -> impl Iterator<Item = Result<(Move<Self::Token>, Self)>> + '_ {
        self.legal_moves().into_iter().map(move |mv| {
            let mut child = self.clone();
            if !child.try_move(&mv)? {
                return Err(GameError::RejectedMove(mv.to_string()));
            }
            Ok((mv, child))
        })
    }

    /// Static score of the position from `player`'s point of view.
    fn evaluation(&self, player: &Player<Self::Token>) -> i32;
}

/// Compile-time description of one game plugged into [`BoardGame`].
pub trait Rules: Clone + fmt::Debug + PartialEq + Eq + Hash {
    type Token: Token;
    type Placement: PlacementPolicy;

    /// How many tokens in a row win.
    const LINE_LENGTH: usize;

    /// Round number of a freshly created game.
    const FIRST_ROUND: u32;

    fn evaluate(game: &BoardGame<Self>, player: &Player<Self::Token>) -> i32;
}
