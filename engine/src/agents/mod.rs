mod minimax_agent;
mod random_agent;

pub use minimax_agent::MinimaxAgent;
pub use random_agent::RandomAgent;

use crate::error::Result;
use crate::games::{Game, Move};

/// Chooses moves for one seat. The play loop asks the agent of whoever is
/// current and applies the answer itself.
pub trait Agent<G: Game> {
    fn next_move(&mut self, game: &G) -> Result<Move<G::Token>>;
}
