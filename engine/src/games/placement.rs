//! How a move's coordinate turns into the cell that receives a token.
//!
//! `CellPlacement` writes exactly where the player points (tic-tac-toe).
//! `ColumnDrop` lets the token fall to the lowest empty cell of the chosen
//! column (connect-four).

use crate::board::{Coordinate, Grid, Token};
use crate::error::{GameError, Result};

pub trait PlacementPolicy {
    /// Whether `is_move_allowed` also insists on the acting player being the
    /// current one. `try_move` always does.
    const CHECKS_TURN: bool;

    /// Fails when the move does not address the board at all.
    fn check_bounds<T: Token>(grid: &Grid<T>, coordinate: Coordinate) -> Result<()>;

    /// The cell that would receive the token, or `None` when the target is
    /// occupied or the column is full.
    fn landing_cell<T: Token>(grid: &Grid<T>, coordinate: Coordinate) -> Option<Coordinate>;

    /// Every move target on an empty board, in scan order.
    fn targets(width: usize, height: usize) -> Vec<Coordinate>;

    fn has_open_target<T: Token>(grid: &Grid<T>) -> bool {
        Self::targets(grid.width(), grid.height())
            .into_iter()
            .any(|target| Self::landing_cell(grid, target).is_some())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPlacement;

impl PlacementPolicy for CellPlacement {
    const CHECKS_TURN: bool = true;

    fn check_bounds<T: Token>(grid: &Grid<T>, coordinate: Coordinate) -> Result<()> {
        if !grid.contains(coordinate) {
            return Err(GameError::OutOfRange {
                coordinate,
                width: grid.width(),
                height: grid.height(),
            });
        }
        Ok(())
    }

    fn landing_cell<T: Token>(grid: &Grid<T>, coordinate: Coordinate) -> Option<Coordinate> {
        match grid.cell(coordinate) {
            Some(token) if token.is_blank() => Some(coordinate),
            _ => None,
        }
    }

    fn targets(width: usize, height: usize) -> Vec<Coordinate> {
        (1..=width)
            .flat_map(|x| (1..=height).map(move |y| Coordinate::new(x, y)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnDrop;

impl ColumnDrop {
    pub fn is_column_full<T: Token>(grid: &Grid<T>, column: usize) -> bool {
        !grid
            .cell(Coordinate::new(column, grid.height()))
            .is_some_and(Token::is_blank)
    }
}

impl PlacementPolicy for ColumnDrop {
    const CHECKS_TURN: bool = false;

    fn check_bounds<T: Token>(grid: &Grid<T>, coordinate: Coordinate) -> Result<()> {
        if !(1..=grid.width()).contains(&coordinate.x) {
            return Err(GameError::ColumnOutOfRange {
                column: coordinate.x,
                width: grid.width(),
            });
        }
        Ok(())
    }

    fn landing_cell<T: Token>(grid: &Grid<T>, coordinate: Coordinate) -> Option<Coordinate> {
        if Self::check_bounds(grid, coordinate).is_err() || Self::is_column_full(grid, coordinate.x) {
            return None;
        }
        (1..=grid.height())
            .map(|y| Coordinate::new(coordinate.x, y))
            .find(|&cell| grid.cell(cell).is_some_and(Token::is_blank))
    }

    fn targets(width: usize, _height: usize) -> Vec<Coordinate> {
        (1..=width).map(|x| Coordinate::new(x, 1)).collect()
    }
}
