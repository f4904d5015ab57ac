use crate::error::{GameError, Result};
use crate::games::{Game, Move};
use crate::minimax::{MinimaxSearch, SearchStats};
use crate::{debug_log, log};
use super::Agent;

/// Searches a fixed number of plies ahead from the current position.
pub struct MinimaxAgent {
    depth: u32,
    search: MinimaxSearch,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            search: MinimaxSearch::new(),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Counters of the most recent search.
    pub fn last_stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl<G: Game> Agent<G> for MinimaxAgent {
    fn next_move(&mut self, game: &G) -> Result<Move<G::Token>> {
        let (mv, score) = self.search.best_move(game, self.depth)?;
        debug_log!("search depth {}: {}", self.depth, self.search.stats());

        if !game.is_move_allowed(&mv) {
            return Err(GameError::RejectedMove(mv.to_string()));
        }

        log!("{} (score {})", mv, score);
        Ok(mv)
    }
}
