use std::fmt;

use super::coordinate::Coordinate;
use super::grid::Grid;
use super::token::Token;

/// One candidate line: an ordered run of `(coordinate, token)` pairs copied
/// out of a grid. Later changes to the grid are not reflected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWindow<T> {
    pairs: Vec<(Coordinate, T)>,
}

impl<T: Token> TokenWindow<T> {
    /// Captures the given cells. Returns `None` if any coordinate is off the
    /// grid.
    pub fn capture(grid: &Grid<T>, coordinates: &[Coordinate]) -> Option<Self> {
        let pairs = coordinates
            .iter()
            .map(|&coordinate| grid.cell(coordinate).map(|token| (coordinate, token)))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { pairs })
    }

    /// Captures `length` cells starting at `start` and stepping by `(dx, dy)`.
    pub fn along(grid: &Grid<T>, start: Coordinate, dx: isize, dy: isize, length: usize) -> Option<Self> {
        let coordinates = (0..length)
            .map(|i| start.step(dx, dy, i))
            .collect::<Option<Vec<_>>>()?;
        Self::capture(grid, &coordinates)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(Coordinate, T)] {
        &self.pairs
    }

    pub fn tokens(&self) -> impl Iterator<Item = T> + '_ {
        self.pairs.iter().map(|&(_, token)| token)
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.pairs.iter().map(|&(coordinate, _)| coordinate)
    }

    pub fn count(&self, token: T) -> usize {
        self.tokens().filter(|&t| t == token).count()
    }

    pub fn count_blank(&self) -> usize {
        self.count(T::BLANK)
    }

    pub fn is_all_blank(&self) -> bool {
        self.tokens().all(Token::is_blank)
    }

    pub fn holds(&self, coordinate: Coordinate, token: T) -> bool {
        self.pairs.iter().any(|&(c, t)| c == coordinate && t == token)
    }

    /// The token filling the whole window, if it is not blank.
    pub fn winning_token(&self) -> Option<T> {
        let first = self.tokens().next()?;
        if first.is_blank() || !self.tokens().all(|t| t == first) {
            return None;
        }
        Some(first)
    }

    pub fn is_winning(&self) -> bool {
        self.winning_token().is_some()
    }
}

impl<T: Token> fmt::Display for TokenWindow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (coordinate, token)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", coordinate, token)?;
        }
        write!(f, "]")
    }
}
