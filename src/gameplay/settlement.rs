use super::seat::State;
use crate::Chips;
use crate::Position;
use crate::cards::*;
use colored::Colorize;

/// One seat's line in the hand result: what it put in, what it got back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    position: Position,
    reward: Chips,
    risked: Chips,
    status: State,
    appraisal: Option<Appraisal>,
}

impl Settlement {
    pub fn position(&self) -> Position {
        self.position
    }
    /// Chips credited back to the seat at settlement.
    pub fn reward(&self) -> Chips {
        self.reward
    }
    /// Chips the seat committed over the whole hand.
    pub fn risked(&self) -> Chips {
        self.risked
    }
    pub fn status(&self) -> State {
        self.status
    }
    /// Present only for seats that reached a contested showdown.
    pub fn appraisal(&self) -> Option<Appraisal> {
        self.appraisal
    }
    pub fn strength(&self) -> Option<Strength> {
        self.appraisal.map(|a| a.strength())
    }
    pub fn pnl(&self) -> Chips {
        self.reward - self.risked
    }
    pub fn add(&mut self, amount: Chips) {
        self.reward += amount;
    }
}

impl From<(Position, Chips, State, Option<Appraisal>)> for Settlement {
    fn from((position, risked, status, appraisal): (Position, Chips, State, Option<Appraisal>)) -> Self {
        Self {
            position,
            reward: 0,
            risked,
            status,
            appraisal,
        }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let pnl = match self.pnl() {
            x if x > 0 => format!("{:+}", x).green(),
            x if x < 0 => format!("{:+}", x).red(),
            x => format!("{:+}", x).normal(),
        };
        match self.appraisal {
            Some(appraisal) => write!(f, "{:<3}{:<7}{}", self.position, pnl, appraisal),
            None => write!(f, "{:<3}{}", self.position, pnl),
        }
    }
}
