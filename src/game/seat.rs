/// Which of the two players is acting. Player one moves on even turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Seat to move on the given turn.
    pub fn for_turn(turn: usize) -> Seat {
        if turn % 2 == 0 {
            Seat::One
        } else {
            Seat::Two
        }
    }

    /// 0-based index into a `[_; 2]` pair.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    /// 1-based number for display
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
