use std::io::{BufRead, Write};

use board_engine::agents::Agent;
use board_engine::board::Coordinate;
use board_engine::games::{Game, Move};
use board_engine::{GameError, Result};

/// What a human types to address a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// `x,y`
    Cell,
    /// a column number
    Column,
}

impl InputMode {
    fn prompt(self) -> &'static str {
        match self {
            InputMode::Cell => "x,y",
            InputMode::Column => "column",
        }
    }

    fn parse(self, line: &str) -> Option<Coordinate> {
        let line = line.trim();
        match self {
            InputMode::Cell => {
                let (x, y) = line.split_once(',')?;
                let x = x.trim().parse().ok()?;
                let y = y.trim().parse().ok()?;
                Some(Coordinate::new(x, y))
            }
            InputMode::Column => {
                let column = line.parse().ok()?;
                Some(Coordinate::new(column, 1))
            }
        }
    }
}

/// Reads moves for a human seat, asking again until the game accepts one.
pub struct ConsoleAgent<R, W> {
    input: R,
    output: W,
    mode: InputMode,
}

impl<R: BufRead, W: Write> ConsoleAgent<R, W> {
    pub fn new(input: R, output: W, mode: InputMode) -> Self {
        Self { input, output, mode }
    }

    fn ask(&mut self, player: &str) -> Result<String> {
        write!(self.output, "{}, enter {}: ", player, self.mode.prompt()).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            return Err(GameError::InvalidArgument(
                "input ended before a move was entered".to_string(),
            ));
        }
        Ok(line)
    }
}

fn io_error(err: std::io::Error) -> GameError {
    GameError::InvalidArgument(format!("console I/O failed: {}", err))
}

impl<G: Game, R: BufRead, W: Write> Agent<G> for ConsoleAgent<R, W> {
    fn next_move(&mut self, game: &G) -> Result<Move<G::Token>> {
        let player = game.current_player().clone();
        loop {
            let line = self.ask(player.name())?;

            let Some(coordinate) = self.mode.parse(&line) else {
                writeln!(self.output, "Could not read '{}'", line.trim()).map_err(io_error)?;
                continue;
            };

            let mv = Move::new(player.clone(), coordinate);
            if game.is_move_allowed(&mv) {
                return Ok(mv);
            }
            writeln!(self.output, "{} is not allowed", coordinate).map_err(io_error)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use board_engine::games::Player;
    use board_engine::games::connect_four::{ConnectFourGame, ConnectFourToken};
    use board_engine::games::tictactoe::{TicTacToeGame, TicTacToeToken};

    fn tictactoe() -> TicTacToeGame {
        TicTacToeGame::new(
            Player::new("ann", TicTacToeToken::X),
            Player::new("bob", TicTacToeToken::O),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(InputMode::Cell.parse(" 2, 3\n"), Some(Coordinate::new(2, 3)));
        assert_eq!(InputMode::Cell.parse("2 3"), None);
        assert_eq!(InputMode::Cell.parse("a,1"), None);
        assert_eq!(InputMode::Column.parse("5\n"), Some(Coordinate::new(5, 1)));
        assert_eq!(InputMode::Column.parse("-1"), None);
    }

    #[test]
    fn test_reads_a_cell() {
        let game = tictactoe();
        let mut output = Vec::new();
        let mut agent = ConsoleAgent::new(Cursor::new("1,3\n"), &mut output, InputMode::Cell);

        let mv = agent.next_move(&game).unwrap();
        assert_eq!(mv.coordinate(), Coordinate::new(1, 3));
        assert_eq!(mv.player(), game.current_player());

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("ann, enter x,y"));
    }

    #[test]
    fn test_asks_again_on_bad_input() {
        let mut game = tictactoe();
        let taken = Move::new(game.current_player().clone(), Coordinate::new(2, 2));
        assert!(game.try_move(&taken).unwrap());

        let mut output = Vec::new();
        let input = Cursor::new("hello\n2,2\n9,9\n3,1\n");
        let mut agent = ConsoleAgent::new(input, &mut output, InputMode::Cell);

        let mv = agent.next_move(&game).unwrap();
        assert_eq!(mv.coordinate(), Coordinate::new(3, 1));
        assert_eq!(mv.player().name(), "bob");

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Could not read 'hello'"));
        assert!(text.contains("(x=2, y=2) is not allowed"));
        assert!(text.contains("(x=9, y=9) is not allowed"));
    }

    #[test]
    fn test_reads_a_column() {
        let game = ConnectFourGame::standard(vec![
            Player::new("red", ConnectFourToken::Red),
            Player::new("orange", ConnectFourToken::Orange),
        ])
        .unwrap();
        let mut output = Vec::new();
        let mut agent = ConsoleAgent::new(Cursor::new("8\n4\n"), &mut output, InputMode::Column);

        let mv = agent.next_move(&game).unwrap();
        assert_eq!(mv.coordinate().x, 4);
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let game = tictactoe();
        let mut agent = ConsoleAgent::new(Cursor::new("oops\n"), Vec::new(), InputMode::Cell);

        assert!(matches!(agent.next_move(&game), Err(GameError::InvalidArgument(_))));
    }
}
