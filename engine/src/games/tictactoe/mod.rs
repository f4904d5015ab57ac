mod evaluation;
mod game_state;
mod types;

pub use evaluation::{CENTER_BONUS, LOSS_PENALTY, WIN_BONUS, center_of, evaluate};
pub use game_state::{BOARD_SIZE, TicTacToeGame, TicTacToeRules};
pub use types::TicTacToeToken;
