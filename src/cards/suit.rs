/// Card suit: clubs, diamonds, hearts, spades.
///
/// The discriminant doubles as the suit index used when a card is built from
/// a `(suit, value)` pair, and as the bit offset of the suit inside each rank
/// nibble of a [`Hand`](super::hand::Hand).
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 representation
/// one bit per rank nibble, at this suit's offset
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x0001111111111111 << u8::from(s)
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "c" | "C" => Ok(Suit::C),
            "d" | "D" => Ok(Suit::D),
            "h" | "H" => Ok(Suit::H),
            "s" | "S" => Ok(Suit::S),
            _ => Err(anyhow::anyhow!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "c"),
            Suit::D => write!(f, "d"),
            Suit::H => write!(f, "h"),
            Suit::S => write!(f, "s"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_are_disjoint() {
        let masks = Suit::all().map(u64::from);
        assert!(masks.iter().fold(0u64, |a, m| a | m) == (1 << 52) - 1);
        assert!(masks[0] & masks[1] == 0);
        assert!(masks[2] & masks[3] == 0);
    }

    #[test]
    fn parses_either_case() {
        assert!(Suit::try_from("S").unwrap() == Suit::S);
        assert!(Suit::try_from("d").unwrap() == Suit::D);
        assert!(Suit::try_from("x").is_err());
    }
}
