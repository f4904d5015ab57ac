use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use crate::board::{Grid, Token, TokenWindow, windows};
use crate::error::{GameError, Result};
use super::placement::PlacementPolicy;
use super::player::{Move, Player};
use super::status::GameStatus;
use super::traits::{Game, Rules};
use super::turn_order::TurnOrder;

/// A grid game whose specifics come from `R`.
///
/// Cloning copies the grid, the players and the turn state; a clone never
/// shares storage with its source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardGame<R: Rules> {
    grid: Grid<R::Token>,
    players: Vec<Player<R::Token>>,
    turn: TurnOrder,
    round_number: u32,
    rules: PhantomData<R>,
}

impl<R: Rules> BoardGame<R> {
    pub(crate) fn create(width: usize, height: usize, players: Vec<Player<R::Token>>) -> Result<Self> {
        if players.len() < 2 {
            return Err(GameError::InvalidArgument(format!(
                "at least 2 players are required, got {}",
                players.len()
            )));
        }

        if players.iter().any(|player| player.token().is_blank()) {
            return Err(GameError::InvalidArgument(
                "no player may play the blank token".to_string(),
            ));
        }

        let distinct: HashSet<R::Token> = players.iter().map(Player::token).collect();
        if distinct.len() != players.len() {
            return Err(GameError::InvalidArgument(
                "players must all have unique tokens".to_string(),
            ));
        }

        let grid = Grid::new(width, height, R::Token::BLANK)?;
        let turn = TurnOrder::new(players.len());

        Ok(Self {
            grid,
            players,
            turn,
            round_number: R::FIRST_ROUND,
            rules: PhantomData,
        })
    }

    pub fn grid(&self) -> &Grid<R::Token> {
        &self.grid
    }

    pub fn next_player(&self) -> &Player<R::Token> {
        &self.players[self.turn.next()]
    }

    /// The seat that plays after `player`. With two players this is the
    /// opponent.
    pub fn other_player(&self, player: &Player<R::Token>) -> Option<&Player<R::Token>> {
        let index = self.players.iter().position(|p| p == player)?;
        Some(&self.players[self.turn.after(index)])
    }

    pub fn player_with_token(&self, token: R::Token) -> Option<&Player<R::Token>> {
        self.players.iter().find(|player| player.token() == token)
    }

    pub fn windows(&self) -> impl Iterator<Item = TokenWindow<R::Token>> + '_ {
        windows(&self.grid, R::LINE_LENGTH)
    }

    pub fn winning_window(&self) -> Option<TokenWindow<R::Token>> {
        self.windows().find(TokenWindow::is_winning)
    }

    pub fn is_board_full(&self) -> bool {
        !R::Placement::has_open_target(&self.grid)
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid<R::Token> {
        &mut self.grid
    }
}

impl<R: Rules> Game for BoardGame<R> {
    type Token = R::Token;

    fn width(&self) -> usize {
        self.grid.width()
    }

    fn height(&self) -> usize {
        self.grid.height()
    }

    fn players(&self) -> &[Player<R::Token>] {
        &self.players
    }

    fn current_player(&self) -> &Player<R::Token> {
        &self.players[self.turn.current()]
    }

    fn round_number(&self) -> u32 {
        self.round_number
    }

    fn is_move_allowed(&self, mv: &Move<R::Token>) -> bool {
        if R::Placement::CHECKS_TURN && mv.player() != self.current_player() {
            return false;
        }
        R::Placement::check_bounds(&self.grid, mv.coordinate()).is_ok()
            && R::Placement::landing_cell(&self.grid, mv.coordinate()).is_some()
    }

    fn try_move(&mut self, mv: &Move<R::Token>) -> Result<bool> {
        R::Placement::check_bounds(&self.grid, mv.coordinate())?;

        if mv.player() != self.current_player() {
            return Err(GameError::OutOfTurn {
                player: mv.player().to_string(),
                current: self.current_player().to_string(),
            });
        }

        let Some(cell) = R::Placement::landing_cell(&self.grid, mv.coordinate()) else {
            return Ok(false);
        };

        self.grid.set(cell, mv.player().token())?;
        self.turn.advance();
        self.round_number += 1;
        Ok(true)
    }

    fn status(&self) -> GameStatus<R::Token> {
        if let Some(token) = self.winning_window().and_then(|window| window.winning_token())
            && let Some(winner) = self.player_with_token(token)
        {
            return GameStatus::Won(winner.clone());
        }

        if self.is_board_full() {
            return GameStatus::Drawn;
        }

        GameStatus::InProgress
    }

    fn legal_moves(&self) -> Vec<Move<R::Token>> {
        let player = self.current_player();
        R::Placement::targets(self.width(), self.height())
            .into_iter()
            .map(|target| Move::new(player.clone(), target))
            .filter(|mv| self.is_move_allowed(mv))
            .collect()
    }

    fn evaluation(&self, player: &Player<R::Token>) -> i32 {
        R::evaluate(self, player)
    }
}

impl<R: Rules> fmt::Display for BoardGame<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
