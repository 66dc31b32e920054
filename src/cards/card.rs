use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards map onto `0..52` as `rank * 4 + suit`, so sorting cards sorts
/// them by rank first and suit second.
///
/// # Tokens
///
/// Cards render as two-character tokens like `"As"` (ace of spades) or `"Td"`
/// (ten of diamonds), which is also the format hand evaluators consume.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// (suit index, face value) construction, the way a table numbers its cards:
/// suit in `0..=3`, face value in `1..=13` with the ace as 1.
impl TryFrom<(u8, u8)> for Card {
    type Error = anyhow::Error;
    fn try_from((suit, value): (u8, u8)) -> Result<Self, Self::Error> {
        if suit > 3 {
            return Err(anyhow::anyhow!("invalid suit index: {}", suit));
        }
        Ok(Self::from((Rank::face(value)?, Suit::from(suit))))
    }
}

/// u8 isomorphism
/// 2c = 0, Ts = 35, As = 51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.len() {
            2 if s.is_ascii() => {
                let rank = Rank::try_from(&s[0..1])?;
                let suit = Suit::try_from(&s[1..2])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(anyhow::anyhow!("card token must be 2 characters: {:?}", s)),
        }
    }
}

impl Card {
    /// Parses concatenated or whitespace-separated card tokens.
    pub fn parse(s: &str) -> anyhow::Result<Vec<Self>> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect()
    }
}
