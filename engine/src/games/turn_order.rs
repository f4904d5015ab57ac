/// Whose turn it is, as a rotation over the game's ordered player list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnOrder {
    current: usize,
    player_count: usize,
}

impl TurnOrder {
    pub fn new(player_count: usize) -> Self {
        Self {
            current: 0,
            player_count,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&self) -> usize {
        (self.current + 1) % self.player_count
    }

    /// Index of the seat that plays right after `index`.
    pub fn after(&self, index: usize) -> usize {
        (index + 1) % self.player_count
    }

    pub fn advance(&mut self) {
        self.current = self.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_players_alternate() {
        let mut order = TurnOrder::new(2);
        assert_eq!((order.current(), order.next()), (0, 1));
        order.advance();
        assert_eq!((order.current(), order.next()), (1, 0));
        order.advance();
        assert_eq!(order.current(), 0);
    }

    #[test]
    fn test_rotation_generalises_to_more_players() {
        let mut order = TurnOrder::new(3);
        let seen: Vec<usize> = (0..6)
            .map(|_| {
                let current = order.current();
                order.advance();
                current
            })
            .collect();
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(order.after(2), 0);
    }
}
