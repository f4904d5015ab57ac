use std::time::Instant;

use crate::error::{GameError, Result};
use crate::games::{Game, Move, Player};
use super::stats::SearchStats;

/// What a (sub)search settled on: the move leading to the chosen child and
/// that child's backed-up score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<T> {
    pub best_move: Option<Move<T>>,
    pub score: i32,
}

/// Depth-bounded minimax with alpha-beta pruning.
///
/// Scores are always taken from one fixed perspective player. Among equally
/// scored children the first one in [`Game::child_states`] order wins.
#[derive(Debug, Default)]
pub struct MinimaxSearch {
    stats: SearchStats,
}

impl MinimaxSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Picks a move for the player to act in `game`, looking `depth` plies
    /// ahead. Statistics are reset at the start of every call.
    pub fn best_move<G: Game>(&mut self, game: &G, depth: u32) -> Result<(Move<G::Token>, i32)> {
        self.stats.reset();
        if depth == 0 || game.status().is_over() {
            return Err(GameError::NoMoveAvailable);
        }

        let start = Instant::now();
        let root = game.clone();
        let perspective = root.current_player().clone();
        let result = self.search(None, &root, depth, i32::MIN, i32::MAX, &perspective, true);
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let result = result?;
        let best_move = result.best_move.ok_or(GameError::NoMoveAvailable)?;
        Ok((best_move, result.score))
    }

    /// One node of the search tree.
    ///
    /// `mv` is the move that produced `game`; a leaf hands it back unchanged
    /// with its evaluation. Inner nodes return the move of their best child.
    pub fn search<G: Game>(
        &mut self,
        mv: Option<Move<G::Token>>,
        game: &G,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        perspective: &Player<G::Token>,
        maximizing: bool,
    ) -> Result<SearchResult<G::Token>> {
        self.stats.nodes_visited += 1;

        if depth == 0 || game.status().is_over() {
            self.stats.leaves_evaluated += 1;
            return Ok(SearchResult {
                best_move: mv,
                score: game.evaluation(perspective),
            });
        }

        let mut best: Option<(Move<G::Token>, i32)> = None;

        for child in game.child_states() {
            let (child_move, child_game) = child?;
            let result = self.search(
                Some(child_move.clone()),
                &child_game,
                depth - 1,
                alpha,
                beta,
                perspective,
                !maximizing,
            )?;

            let improves = match &best {
                None => true,
                Some((_, score)) if maximizing => result.score > *score,
                Some((_, score)) => result.score < *score,
            };
            if improves {
                best = Some((child_move, result.score));
            }

            if maximizing {
                alpha = alpha.max(result.score);
            } else {
                beta = beta.min(result.score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let (best_move, score) = best.ok_or(GameError::NoChildStates)?;
        Ok(SearchResult {
            best_move: Some(best_move),
            score,
        })
    }
}
