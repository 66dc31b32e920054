use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// An unordered set of cards packed into the 52 low bits of a u64.
///
/// Bit `rank * 4 + suit` is set when the card is present, so each rank owns
/// one nibble. Hole cards, boards, and the 7-card showdown hands are all
/// Hands, and combining them is a bitwise OR.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0, "overlapping hands {} {}", lhs, rhs);
        Self(lhs.0 | rhs.0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// The cards of a single suit.
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// How many cards of this rank are present.
    pub fn count_of(&self, rank: Rank) -> usize {
        (self.0 & u64::from(rank)).count_ones() as usize
    }
    /// The cards of a single rank.
    pub fn at(&self, rank: Rank) -> Hand {
        Self(self.0 & u64::from(rank))
    }
}

/// Ascending card order, lowest card first.
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism, up to ordering: cards always come back sorted.
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from(cards.as_slice())
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b))
    }
}

/// one-way conversion to a 13-bit rank mask
/// a rank bit is set when any suit of that rank is present
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        Rank::descending()
            .filter(|r| h.count_of(*r) > 0)
            .map(u16::from)
            .fold(0u16, |a, b| a | b)
    }
}

impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(Self::from(Card::parse(s)?))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap();
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(hand.of(&Suit::C)), 0b_1000100010001);
        assert_eq!(u16::from(hand.of(&Suit::D)), 0b_0001000100010);
        assert_eq!(u16::from(hand.of(&Suit::H)), 0b_0010001000100);
        assert_eq!(u16::from(hand.of(&Suit::S)), 0b_0100010001000);
    }

    #[test]
    fn rank_counts() {
        let hand = Hand::try_from("Ah Ad As Kc 2d").unwrap();
        assert!(hand.count_of(Rank::Ace) == 3);
        assert!(hand.count_of(Rank::King) == 1);
        assert!(hand.count_of(Rank::Queen) == 0);
        assert!(hand.at(Rank::Ace).size() == 3);
        assert!(hand.size() == 5);
    }

    #[test]
    fn rank_mask_marks_present_ranks() {
        let hand = Hand::try_from("Ah Ad Kc 7s 7d 2d").unwrap();
        assert!(hand.count_of(Rank::Seven) == 2);
        assert!(hand.count() == 6);
        assert_eq!(u16::from(hand), 0b_1100000100001);
    }
}
