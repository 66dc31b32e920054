use super::rank::Rank;

/// A hand's kicker ranks as a 13-bit mask.
///
/// Kickers are distinct ranks and every hand of a given [`Ranking`] carries the
/// same number of them, so comparing the masks as integers compares the
/// highest kicker first, then the next, and so on.
///
/// [`Ranking`]: super::ranking::Ranking
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism, highest rank first
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::descending()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
