use std::fmt;

/// A 1-based board position. `x` counts columns from the left, `y` counts
/// rows from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Steps `distance` cells along `(dx, dy)`. Returns `None` when the
    /// result would leave the 1-based quadrant.
    pub fn step(&self, dx: isize, dy: isize, distance: usize) -> Option<Coordinate> {
        let distance = distance as isize;
        let x = self.x as isize + dx * distance;
        let y = self.y as isize + dy * distance;
        if x < 1 || y < 1 {
            return None;
        }
        Some(Coordinate::new(x as usize, y as usize))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={}, y={})", self.x, self.y)
    }
}
