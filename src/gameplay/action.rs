use crate::Chips;
use colored::*;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// A betting decision, as submitted by the acting seat and as recorded in
/// the hand history.
///
/// Amounts are informational except for `Raise`, whose amount is the new
/// total commitment the raiser is raising *to*. `Call` and `Shove` record the
/// chips actually moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Blind(Chips),
    Check,
    Call(Chips),
    Raise(Chips),
    Shove(Chips),
    Fold,
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Action::Blind(amount) => write!(f, "{}", format!("BLIND {}", amount).white()),
            Action::Check => write!(f, "{}", "CHECK".cyan()),
            Action::Call(amount) => write!(f, "{}", format!("CALL  {}", amount).yellow()),
            Action::Raise(amount) => write!(f, "{}", format!("RAISE {}", amount).green()),
            Action::Shove(amount) => write!(f, "{}", format!("SHOVE {}", amount).magenta()),
            Action::Fold => write!(f, "{}", "FOLD".red()),
        }
    }
}
