use crate::Position;

/// Everything a table can refuse to do.
///
/// Every variant except [`Error::NoContesters`] is recoverable: the call that
/// produced it left the game exactly as it was.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("no hand is running")]
    InvalidState,
    #[error("seat {0} is not the acting seat")]
    NotYourTurn(Position),
    #[error("not enough chips: need {need}, have {have}")]
    InsufficientChips { need: crate::Chips, have: crate::Chips },
    #[error("cannot check while facing {owed} chips")]
    CheckNotPermitted { owed: crate::Chips },
    #[error("raise to {amount} is below the minimum of {min}")]
    InvalidRaiseAmount { amount: crate::Chips, min: crate::Chips },
    #[error("need at least 2 seated players with chips")]
    NotEnoughPlayers,
    #[error("showdown reached with no contesting seat")]
    NoContesters,
    #[error("deck has no cards left")]
    DeckExhausted,
    #[error("seat {0} does not exist")]
    InvalidSeat(Position),
    #[error("seat {0} is already taken")]
    SeatOccupied(Position),
    #[error("seat {0} is empty")]
    SeatEmpty(Position),
}

impl Error {
    /// Engine invariant violations. These point at a bug upstream of the
    /// caller and should abort the table rather than be shown to a player.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NoContesters)
    }
}
