mod board_game;
mod placement;
mod player;
mod status;
mod traits;
mod turn_order;

pub mod connect_four;
pub mod tictactoe;

pub use board_game::BoardGame;
pub use placement::{CellPlacement, ColumnDrop, PlacementPolicy};
pub use player::{Move, Player};
pub use status::GameStatus;
pub use traits::{Game, Rules};
pub use turn_order::TurnOrder;
