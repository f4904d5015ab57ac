use std::error::Error;
use std::io::Write;

use board_engine::agents::Agent;
use board_engine::games::{Game, GameStatus, Player};
use board_engine::{GameError, debug_log, log};

/// Runs `game` to the end, one agent per seat in player order.
///
/// Returns the winner, or `None` for a draw.
pub fn play<G: Game, W: Write>(
    game: &mut G,
    agents: &mut [Box<dyn Agent<G>>],
    out: &mut W,
) -> Result<Option<Player<G::Token>>, Box<dyn Error>> {
    if agents.len() != game.players().len() {
        return Err(Box::new(GameError::InvalidArgument(format!(
            "{} agents for {} players",
            agents.len(),
            game.players().len()
        ))));
    }

    loop {
        match game.status() {
            GameStatus::Won(winner) => {
                writeln!(out, "{} wins!", winner)?;
                write!(out, "{}", game)?;
                log!("{} won after round {}", winner, game.round_number());
                return Ok(Some(winner));
            }
            GameStatus::Drawn => {
                writeln!(out, "It's a draw.")?;
                write!(out, "{}", game)?;
                log!("draw after round {}", game.round_number());
                return Ok(None);
            }
            GameStatus::InProgress => {}
        }

        writeln!(out, "Round {}", game.round_number())?;
        write!(out, "{}", game)?;

        let current = game.current_player().clone();
        let seat = game
            .players()
            .iter()
            .position(|player| *player == current)
            .ok_or_else(|| GameError::InvalidArgument(format!("{} has no seat", current)))?;

        let mv = agents[seat].next_move(game)?;
        writeln!(out, "{}", mv)?;

        if !game.try_move(&mv)? {
            log!("rejected {}", mv);
            writeln!(out, "That move is not possible, try again.")?;
            continue;
        }
        debug_log!("applied {}", mv);
    }
}
