/// Betting round of a hand. Only ever moves forward within a hand.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Street {
    #[default]
    Preflop = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    River = 3isize,
    End = 4isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Preflop, Self::Flop, Self::Turn, Self::River, Self::End]
    }
    pub const fn next(&self) -> Self {
        match self {
            Self::Preflop => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::River,
            Self::River => Self::End,
            Self::End => panic!("terminal"),
        }
    }
    /// Community cards on the table during this street.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::River => 5,
            Self::End => 5,
        }
    }
    /// Community cards revealed when this street closes.
    pub const fn n_revealed(&self) -> usize {
        match self {
            Self::Preflop => 3,
            Self::Flop => 1,
            Self::Turn => 1,
            Self::River => 0,
            Self::End => 0,
        }
    }
}

impl From<usize> for Street {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Preflop,
            3 => Self::Flop,
            4 => Self::Turn,
            5 => Self::River,
            _ => panic!("no street shows {} cards", n),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Preflop => write!(f, "PREFLOP"),
            Self::Flop => write!(f, "FLOP"),
            Self::Turn => write!(f, "TURN"),
            Self::River => write!(f, "RIVER"),
            Self::End => write!(f, "END"),
        }
    }
}
