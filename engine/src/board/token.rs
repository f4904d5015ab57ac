use std::fmt;
use std::hash::Hash;

/// The closed set of values a game's cells can hold: one blank plus one
/// token per player.
pub trait Token: Copy + Eq + Hash + fmt::Debug + fmt::Display {
    const BLANK: Self;

    fn is_blank(self) -> bool {
        self == Self::BLANK
    }
}
