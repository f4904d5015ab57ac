use std::io::{BufReader, Stdin, Stdout};

use board_engine::agents::{Agent, MinimaxAgent, RandomAgent};
use board_engine::games::Game;

use crate::console::{ConsoleAgent, InputMode};

/// Who plays a seat, decided from the name given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatKind {
    Minimax,
    Random,
    Human,
}

impl SeatKind {
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("ai") {
            SeatKind::Minimax
        } else if name.contains("random") {
            SeatKind::Random
        } else {
            SeatKind::Human
        }
    }
}

pub type StdinAgent = ConsoleAgent<BufReader<Stdin>, Stdout>;

pub fn build_agent<G: Game>(name: &str, search_depth: u32, mode: InputMode) -> Box<dyn Agent<G>> {
    match SeatKind::from_name(name) {
        SeatKind::Minimax => Box::new(MinimaxAgent::new(search_depth)),
        SeatKind::Random => Box::new(RandomAgent::from_random()),
        // Both seats may read stdin; a one byte buffer never takes the other seat's line.
        SeatKind::Human => Box::new(StdinAgent::new(
            BufReader::with_capacity(1, std::io::stdin()),
            std::io::stdout(),
            mode,
        )),
    }
}
