pub mod agents;
pub mod board;
pub mod config;
pub mod error;
pub mod games;
pub mod logger;
pub mod minimax;

pub use error::{GameError, Result};
