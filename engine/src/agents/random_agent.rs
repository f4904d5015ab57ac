use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::debug_log;
use crate::error::{GameError, Result};
use crate::games::{Game, Move};
use super::Agent;

/// Picks uniformly among the legal moves. Reproducible for a fixed seed.
pub struct RandomAgent {
    rng: StdRng,
    seed: u64,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<G: Game> Agent<G> for RandomAgent {
    fn next_move(&mut self, game: &G) -> Result<Move<G::Token>> {
        let mut moves = game.legal_moves();
        if moves.is_empty() || game.status().is_over() {
            return Err(GameError::NoMoveAvailable);
        }

        let index = self.rng.random_range(0..moves.len());
        debug_log!("random pick {} of {} (seed {})", index, moves.len(), self.seed);
        Ok(moves.swap_remove(index))
    }
}
