mod search;
mod stats;

pub use search::{MinimaxSearch, SearchResult};
pub use stats::SearchStats;
