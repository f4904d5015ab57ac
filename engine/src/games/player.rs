use std::fmt;

use crate::board::{Coordinate, Token};

/// A seat at the table: a display name and the token it plays.
///
/// Players are plain values. Two players are the same player when both the
/// name and the token match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player<T> {
    name: String,
    token: T,
}

impl<T: Token> Player<T> {
    pub fn new(name: impl Into<String>, token: T) -> Self {
        Self {
            name: name.into(),
            token,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> T {
        self.token
    }
}

impl<T: Token> fmt::Display for Player<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.token)
    }
}

/// A player choosing a target. For drop games only `coordinate.x` matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move<T> {
    player: Player<T>,
    coordinate: Coordinate,
}

impl<T: Token> Move<T> {
    pub fn new(player: Player<T>, coordinate: Coordinate) -> Self {
        Self { player, coordinate }
    }

    pub fn player(&self) -> &Player<T> {
        &self.player
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl<T: Token> fmt::Display for Move<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} chose {}", self.player, self.coordinate)
    }
}
