mod console;
mod play;
mod seats;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use board_engine::config::{ConfigManager, EngineConfig, Validate};
use board_engine::games::Player;
use board_engine::games::connect_four::{ConnectFourGame, ConnectFourToken};
use board_engine::games::tictactoe::{TicTacToeGame, TicTacToeToken};
use board_engine::logger::{self, LogLevel};
use board_engine::log;
use console::InputMode;
use play::play;
use seats::build_agent;

#[derive(Parser)]
#[command(name = "board_games")]
#[command(about = "Play tic-tac-toe or connect-four against people or the computer")]
struct Args {
    /// YAML file with search depths and board size
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log search statistics
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Names containing "ai" get the computer, "random" a random mover.
    Tictactoe { player_one: String, player_two: String },

    ConnectFour {
        player_one: String,
        player_two: String,

        #[arg(long)]
        width: Option<usize>,

        #[arg(long)]
        height: Option<usize>,
    },
}

fn load_config(args: &Args) -> Result<EngineConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => ConfigManager::<_, EngineConfig>::from_yaml_file(path).get_config()?,
        None => EngineConfig::default(),
    };

    if let Command::ConnectFour { width, height, .. } = &args.command {
        if let Some(width) = width {
            config.connect_four.width = *width;
        }
        if let Some(height) = height {
            config.connect_four.height = *height;
        }
    }

    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args)?;

    let prefix = if args.use_log_prefix {
        Some("BoardGames".to_string())
    } else {
        None
    };
    let level = if args.verbose || config.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logger::init_logger(prefix, level);

    let mut stdout = std::io::stdout();
    match args.command {
        Command::Tictactoe { player_one, player_two } => {
            let depth = config.tictactoe.search_depth;
            let mut game = TicTacToeGame::new(
                Player::new(player_one.as_str(), TicTacToeToken::X),
                Player::new(player_two.as_str(), TicTacToeToken::O),
            )?;
            let mut agents = vec![
                build_agent::<TicTacToeGame>(&player_one, depth, InputMode::Cell),
                build_agent::<TicTacToeGame>(&player_two, depth, InputMode::Cell),
            ];
            log!("tictactoe: {} vs {}, depth {}", player_one, player_two, depth);
            play(&mut game, &mut agents, &mut stdout)?;
        }
        Command::ConnectFour { player_one, player_two, .. } => {
            let settings = &config.connect_four;
            let mut game = ConnectFourGame::new(
                settings.width,
                settings.height,
                vec![
                    Player::new(player_one.as_str(), ConnectFourToken::Red),
                    Player::new(player_two.as_str(), ConnectFourToken::Orange),
                ],
            )?;
            let mut agents = vec![
                build_agent::<ConnectFourGame>(&player_one, settings.search_depth, InputMode::Column),
                build_agent::<ConnectFourGame>(&player_two, settings.search_depth, InputMode::Column),
            ];
            log!(
                "connect-four {}x{}: {} vs {}, depth {}",
                settings.width,
                settings.height,
                player_one,
                player_two,
                settings.search_depth
            );
            play(&mut game, &mut agents, &mut stdout)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_connect_four_overrides() {
        let args = Args::try_parse_from([
            "board_games",
            "--verbose",
            "connect-four",
            "ann",
            "ai",
            "--width",
            "9",
        ])
        .unwrap();
        assert!(args.verbose);

        let config = load_config(&args).unwrap();
        assert_eq!(config.connect_four.width, 9);
        assert_eq!(config.connect_four.height, 6);
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let args = Args::try_parse_from(["board_games", "connect-four", "a", "b", "--height", "2"]).unwrap();
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_parse_tictactoe() {
        let args = Args::try_parse_from(["board_games", "tictactoe", "ann", "random"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Tictactoe { ref player_two, .. } if player_two == "random"
        ));
        assert!(args.config.is_none());
    }
}
