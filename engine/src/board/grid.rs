use std::fmt;

use crate::error::{GameError, Result};
use super::coordinate::Coordinate;

/// Fixed-size, 1-based, dense 2D board storage.
///
/// Cells are stored row by row starting from the top row, which keeps the
/// text rendering a straight walk over the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<C> {
    width: usize,
    height: usize,
    default: C,
    cells: Vec<C>,
}

impl<C: Copy> Grid<C> {
    pub fn new(width: usize, height: usize, default: C) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(GameError::InvalidArgument(format!(
                "grid dimensions must both be positive, got {}x{}",
                width, height
            )));
        }

        Ok(Self {
            width,
            height,
            default,
            cells: vec![default; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn default_value(&self) -> C {
        self.default
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        (1..=self.width).contains(&coordinate.x) && (1..=self.height).contains(&coordinate.y)
    }

    pub fn get(&self, coordinate: Coordinate) -> Result<C> {
        let index = self.index_of(coordinate)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, coordinate: Coordinate, value: C) -> Result<()> {
        let index = self.index_of(coordinate)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Non-failing lookup for scanners that already know their bounds.
    pub fn cell(&self, coordinate: Coordinate) -> Option<C> {
        if !self.contains(coordinate) {
            return None;
        }
        Some(self.cells[self.raw_index(coordinate)])
    }

    /// Every coordinate, column by column (x outer, y inner).
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let height = self.height;
        (1..=self.width).flat_map(move |x| (1..=height).map(move |y| Coordinate::new(x, y)))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, C)> + '_ {
        self.coordinates().map(|coordinate| (coordinate, self.cells[self.raw_index(coordinate)]))
    }

    fn index_of(&self, coordinate: Coordinate) -> Result<usize> {
        if !self.contains(coordinate) {
            return Err(GameError::OutOfRange {
                coordinate,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.raw_index(coordinate))
    }

    fn raw_index(&self, coordinate: Coordinate) -> usize {
        (self.height - coordinate.y) * self.width + (coordinate.x - 1)
    }
}

impl<C: Copy + fmt::Display> fmt::Display for Grid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            write!(f, "|")?;
            for cell in row {
                write!(f, "{}|", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert!(matches!(Grid::new(0, 3, '.'), Err(GameError::InvalidArgument(_))));
        assert!(matches!(Grid::new(3, 0, '.'), Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn test_new_fills_with_default() {
        let grid = Grid::new(4, 2, '.').unwrap();
        assert!(grid.cells().all(|(_, cell)| cell == '.'));
        assert_eq!(grid.cells().count(), 8);
    }

    #[test]
    fn test_get_and_set_are_one_based() {
        let mut grid = Grid::new(3, 2, 0u8).unwrap();
        grid.set(Coordinate::new(1, 1), 7).unwrap();
        grid.set(Coordinate::new(3, 2), 9).unwrap();

        assert_eq!(grid.get(Coordinate::new(1, 1)).unwrap(), 7);
        assert_eq!(grid.get(Coordinate::new(3, 2)).unwrap(), 9);
        assert_eq!(grid.get(Coordinate::new(2, 1)).unwrap(), 0);
    }

    #[test]
    fn test_out_of_range_access_fails() {
        let mut grid = Grid::new(3, 3, 0u8).unwrap();
        for coordinate in [
            Coordinate::new(0, 1),
            Coordinate::new(1, 0),
            Coordinate::new(4, 1),
            Coordinate::new(1, 4),
        ] {
            assert!(matches!(grid.get(coordinate), Err(GameError::OutOfRange { .. })));
            assert!(matches!(grid.set(coordinate, 1), Err(GameError::OutOfRange { .. })));
            assert_eq!(grid.cell(coordinate), None);
        }
    }

    #[test]
    fn test_clone_does_not_alias_source() {
        let mut grid = Grid::new(3, 3, 0u8).unwrap();
        grid.set(Coordinate::new(2, 2), 5).unwrap();

        let mut clone = grid.clone();
        assert_eq!(clone, grid);

        clone.set(Coordinate::new(1, 3), 8).unwrap();
        assert_ne!(clone, grid);
        assert_eq!(grid.get(Coordinate::new(1, 3)).unwrap(), 0);
    }

    #[test]
    fn test_coordinates_are_column_major() {
        let grid = Grid::new(2, 2, 0u8).unwrap();
        let coordinates: Vec<Coordinate> = grid.coordinates().collect();
        assert_eq!(
            coordinates,
            vec![
                Coordinate::new(1, 1),
                Coordinate::new(1, 2),
                Coordinate::new(2, 1),
                Coordinate::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_display_renders_top_row_first() {
        let mut grid = Grid::new(3, 2, '_').unwrap();
        grid.set(Coordinate::new(1, 1), 'X').unwrap();
        grid.set(Coordinate::new(3, 2), 'O').unwrap();

        assert_eq!(grid.to_string(), "|_|_|O|\n|X|_|_|\n");
    }
}
