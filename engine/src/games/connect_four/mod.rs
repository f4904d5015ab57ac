mod evaluation;
mod game_state;
mod types;

pub use evaluation::{evaluate, score_window};
pub use game_state::{ConnectFourGame, ConnectFourRules, MIN_SIZE, STANDARD_HEIGHT, STANDARD_WIDTH};
pub use types::ConnectFourToken;
