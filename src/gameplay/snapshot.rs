use super::action::Action;
use super::game::Game;
use super::seat::State;
use crate::Chips;
use crate::Position;
use crate::cards::*;

/// Read-only public view of a table for whatever renders it.
///
/// Built after a transition completes, so it never shows a half-applied
/// action. Hole cards are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub struct Snapshot {
    pub board: Vec<Card>,
    pub pot: Chips,
    pub ante: Chips,
    pub button: Option<Position>,
    pub street: Street,
    pub actor: Option<Position>,
    pub seats: Vec<SeatView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub struct SeatView {
    pub position: Position,
    pub state: State,
    pub stack: Chips,
    pub spent: Chips,
    pub last: Option<Action>,
}

impl<E: Evaluate> From<&Game<E>> for Snapshot {
    fn from(game: &Game<E>) -> Self {
        let seats = game
            .seats()
            .iter()
            .filter(|seat| seat.is_seated())
            .map(|seat| SeatView {
                position: seat.position(),
                state: seat.state(),
                stack: seat.stack(),
                spent: seat.spent(),
                last: game
                    .history()
                    .iter()
                    .rev()
                    .find(|(p, _)| *p == seat.position())
                    .map(|(_, action)| *action),
            })
            .collect();
        Self {
            board: game.board().cards().to_vec(),
            pot: game.pot(),
            ante: game.rules().ante,
            button: game.button(),
            street: game.street(),
            actor: game.actor(),
            seats,
        }
    }
}

impl std::fmt::Display for SeatView {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<3}{} ${:<6}in {:<6}", self.position, self.state, self.stack, self.spent)?;
        match self.last {
            Some(action) => write!(f, "{}", action),
            None => Ok(()),
        }
    }
}

impl<E: Evaluate> Game<E> {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}
