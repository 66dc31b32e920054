use crate::Chips;
use crate::Position;
use crate::cards::*;
use colored::Colorize;

/// One chair at the table and whoever is sitting in it.
///
/// # Fields
///
/// - `state` — Empty, Active, Folded, or AllIn
/// - `stack` — chips behind, not yet committed this hand
/// - `spent` — chips committed this hand, across every street
/// - `cards` — hole cards, once dealt
/// - `appraisal` — hand strength and best five, filled in at showdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    position: Position,
    state: State,
    stack: Chips,
    spent: Chips,
    cards: Option<Hole>,
    appraisal: Option<Appraisal>,
}

impl Seat {
    pub fn empty(position: Position) -> Self {
        Self {
            position,
            state: State::Empty,
            stack: 0,
            spent: 0,
            cards: None,
            appraisal: None,
        }
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn state(&self) -> State {
        self.state
    }
    /// Chips behind.
    pub fn stack(&self) -> Chips {
        self.stack
    }
    /// Chips committed this hand.
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn cards(&self) -> Option<Hole> {
        self.cards
    }
    pub fn appraisal(&self) -> Option<Appraisal> {
        self.appraisal
    }
    pub fn is_seated(&self) -> bool {
        self.state != State::Empty
    }

    /// Moves chips from the stack into the pot. Emptying the stack puts the
    /// seat all-in.
    pub fn bet(&mut self, bet: Chips) {
        debug_assert!(bet >= 0 && bet <= self.stack);
        self.stack -= bet;
        self.spent += bet;
        if self.stack == 0 {
            self.state = State::AllIn;
        }
    }
    /// Credits pot winnings.
    pub fn win(&mut self, win: Chips) {
        self.stack += win;
    }
    pub fn sit(&mut self, stack: Chips) {
        self.stack = stack;
        self.state = State::Folded;
    }
    pub fn leave(&mut self) -> Chips {
        let stack = self.stack;
        *self = Self::empty(self.position);
        stack
    }

    /// Clears everything that belongs to the previous hand. Seated players
    /// with chips are dealt in; seated players without chips sit out.
    pub fn reset_hand(&mut self) {
        self.spent = 0;
        self.cards = None;
        self.appraisal = None;
        self.state = match self.state {
            State::Empty => State::Empty,
            _ if self.stack > 0 => State::Active,
            _ => State::Folded,
        };
    }
    pub fn reset_state(&mut self, state: State) {
        self.state = state;
    }
    pub fn reset_cards(&mut self, cards: Hole) {
        self.cards = Some(cards);
    }
    pub fn reset_appraisal(&mut self, appraisal: Option<Appraisal>) {
        self.appraisal = appraisal;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.cards.map(|c| c.to_string()).unwrap_or_else(|| "----".into());
        write!(
            f,
            "{:<3}{} {} {}",
            self.position,
            self.state,
            format!("${:>5}", self.stack),
            cards
        )
    }
}

/// Betting status of a seat within a hand. Exactly one applies at a time.
///
/// - `Empty` — nobody is sitting here
/// - `Active` — still in the hand and able to act
/// - `Folded` — out of the hand (or sitting it out), chips already committed stay in the pot
/// - `AllIn` — no chips behind, still contests the pot, never acts again this hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    Empty,
    Active,
    Folded,
    AllIn,
}

impl State {
    /// True if the seat still competes for the pot.
    pub fn is_contesting(&self) -> bool {
        matches!(self, Self::Active | Self::AllIn)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Empty => write!(f, "-"),
            State::Active => write!(f, "P"),
            State::AllIn => write!(f, "{}", "S".magenta()),
            State::Folded => write!(f, "{}", "F".red()),
        }
    }
}
