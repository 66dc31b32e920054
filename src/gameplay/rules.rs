use crate::Chips;

/// House rules for one table.
///
/// `Default` gives a six-seat no-limit table with an ante of [`crate::ANTE`]
/// where preflop closes as soon as action reaches the big blind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(default))]
pub struct Rules {
    /// Big blind. The small blind posts half of it.
    pub ante: Chips,
    /// Number of chairs at the table.
    pub seats: usize,
    /// Minimum raise sizing.
    pub raising: Raising,
    /// When set, preflop action closes back at under-the-gun so the big blind
    /// may still raise. When unset, preflop closes as soon as action reaches
    /// the big blind.
    pub big_blind_option: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            ante: crate::ANTE,
            seats: crate::SEATS,
            raising: Raising::NoLimit,
            big_blind_option: false,
        }
    }
}

impl Rules {
    pub fn small_blind(&self) -> Chips {
        self.ante / 2
    }
    pub fn big_blind(&self) -> Chips {
        self.ante
    }
}

/// How small a raise may be.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Raising {
    /// Any amount above the current highest commitment.
    Unrestricted,
    /// The increment must match the last full raise this street, and never
    /// be smaller than the big blind.
    #[default]
    NoLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let rules = Rules::default();
        assert!(rules.small_blind() == 10);
        assert!(rules.big_blind() == 20);
        assert!(rules.raising == Raising::NoLimit);
        assert!(!rules.big_blind_option);
    }
}
