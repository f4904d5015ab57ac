mod coordinate;
mod grid;
mod lines;
mod token;
mod token_window;

#[cfg(test)]
pub(crate) mod test_support;

pub use coordinate::Coordinate;
pub use grid::Grid;
pub use lines::{LineDirection, window_count, windows};
pub use token::Token;
pub use token_window::TokenWindow;
