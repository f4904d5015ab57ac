use super::coordinate::Coordinate;
use super::grid::Grid;
use super::token::Token;
use super::token_window::TokenWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDirection {
    Horizontal,
    Vertical,
    Rising,
    Falling,
}

impl LineDirection {
    pub const ALL: [LineDirection; 4] = [
        LineDirection::Horizontal,
        LineDirection::Vertical,
        LineDirection::Rising,
        LineDirection::Falling,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            LineDirection::Horizontal => (1, 0),
            LineDirection::Vertical => (0, 1),
            LineDirection::Rising => (1, 1),
            LineDirection::Falling => (1, -1),
        }
    }

    /// First cells of every line of `length` in this direction, in scan
    /// order. Empty when the board is too small.
    pub fn starts(self, width: usize, height: usize, length: usize) -> Vec<Coordinate> {
        let span_x = fits(width, length);
        let span_y = fits(height, length);

        match self {
            LineDirection::Horizontal => (1..=height)
                .flat_map(|y| (1..=span_x).map(move |x| Coordinate::new(x, y)))
                .collect(),
            LineDirection::Vertical => (1..=width)
                .flat_map(|x| (1..=span_y).map(move |y| Coordinate::new(x, y)))
                .collect(),
            LineDirection::Rising => (1..=span_x)
                .flat_map(|x| (1..=span_y).map(move |y| Coordinate::new(x, y)))
                .collect(),
            LineDirection::Falling => (1..=span_x)
                .flat_map(|x| (1..=span_y).map(move |offset| Coordinate::new(x, offset + length - 1)))
                .collect(),
        }
    }
}

/// Number of positions a line of `length` can take along a dimension.
fn fits(dimension: usize, length: usize) -> usize {
    if length == 0 {
        return 0;
    }
    dimension.checked_sub(length).map_or(0, |slack| slack + 1)
}

/// Closed-form number of windows [`windows`] yields for a board.
pub fn window_count(width: usize, height: usize, length: usize) -> usize {
    let span_x = fits(width, length);
    let span_y = fits(height, length);
    height * span_x + width * span_y + 2 * span_x * span_y
}

/// Lazily captures every straight line of `length` cells on the grid:
/// rows, then columns, then rising and falling diagonals.
pub fn windows<T: Token>(grid: &Grid<T>, length: usize) -> impl Iterator<Item = TokenWindow<T>> + '_ {
    LineDirection::ALL.into_iter().flat_map(move |direction| {
        let (dx, dy) = direction.delta();
        direction
            .starts(grid.width(), grid.height(), length)
            .into_iter()
            .filter_map(move |start| TokenWindow::along(grid, start, dx, dy, length))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::test_support::Mark;

    #[test]
    fn test_window_count_formula() {
        assert_eq!(window_count(3, 3, 3), 8);
        assert_eq!(window_count(7, 6, 4), 69);
        assert_eq!(window_count(4, 7, 4), 7 + 16 + 2 * 4);
        assert_eq!(window_count(3, 3, 4), 0);
        assert_eq!(window_count(5, 2, 4), 4);
    }

    #[test]
    fn test_windows_matches_formula() {
        for (width, height, length) in [(3, 3, 3), (7, 6, 4), (4, 7, 4), (5, 2, 4), (6, 9, 4)] {
            let grid = Grid::new(width, height, Mark::Empty).unwrap();
            assert_eq!(
                windows(&grid, length).count(),
                window_count(width, height, length),
                "{}x{} with length {}",
                width,
                height,
                length
            );
        }
    }

    #[test]
    fn test_windows_order_on_three_by_three() {
        let grid = Grid::new(3, 3, Mark::Empty).unwrap();
        let lines: Vec<Vec<(usize, usize)>> = windows(&grid, 3)
            .map(|window| window.coordinates().map(|c| (c.x, c.y)).collect())
            .collect();

        assert_eq!(
            lines,
            vec![
                vec![(1, 1), (2, 1), (3, 1)],
                vec![(1, 2), (2, 2), (3, 2)],
                vec![(1, 3), (2, 3), (3, 3)],
                vec![(1, 1), (1, 2), (1, 3)],
                vec![(2, 1), (2, 2), (2, 3)],
                vec![(3, 1), (3, 2), (3, 3)],
                vec![(1, 1), (2, 2), (3, 3)],
                vec![(1, 3), (2, 2), (3, 1)],
            ]
        );
    }

    #[test]
    fn test_falling_diagonals_cover_every_start_row() {
        let grid = Grid::new(4, 6, Mark::Empty).unwrap();
        let (dx, dy) = LineDirection::Falling.delta();
        let starts = LineDirection::Falling.starts(4, 6, 4);

        assert_eq!(
            starts,
            vec![Coordinate::new(1, 4), Coordinate::new(1, 5), Coordinate::new(1, 6)]
        );
        for start in starts {
            assert!(TokenWindow::along(&grid, start, dx, dy, 4).is_some());
        }
    }

    #[test]
    fn test_windows_find_a_line() {
        let mut grid = Grid::new(5, 5, Mark::Empty).unwrap();
        for i in 0..4 {
            grid.set(Coordinate::new(2 + i, 5 - i), Mark::X).unwrap();
        }

        let winning: Vec<TokenWindow<Mark>> = windows(&grid, 4).filter(|w| w.is_winning()).collect();
        assert_eq!(winning.len(), 1);
        assert_eq!(winning[0].winning_token(), Some(Mark::X));
    }
}
