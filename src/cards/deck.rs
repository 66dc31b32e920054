use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use crate::Error;
use rand::Rng;
use rand::seq::SliceRandom;

/// One hand's worth of cards: a 52-card permutation and a draw cursor.
///
/// Shuffling happens once, at construction, from whatever random source the
/// caller injects. A seeded rng (or a stacked deck) replays the same hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    drawn: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh deck in canonical order, 2c first.
    pub fn new() -> Self {
        Self {
            cards: (0..52u8).map(Card::from).collect(),
            drawn: 0,
        }
    }
    /// A fresh uniformly shuffled deck.
    pub fn shuffled<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut deck = Self::new();
        deck.cards.shuffle(rng);
        deck
    }
    /// A deck that deals `top` first, in order, then every other card in
    /// canonical order.
    pub fn stacked(top: Vec<Card>) -> Self {
        let used = Hand::from(top.as_slice());
        assert!(used.size() == top.len(), "stacked deck repeats a card");
        let rest = Hand::from(Hand::mask() & !u64::from(used));
        Self {
            cards: top.into_iter().chain(rest).collect(),
            drawn: 0,
        }
    }
    /// Next card off the top.
    pub fn draw(&mut self) -> Result<Card, Error> {
        let card = self
            .cards
            .get(self.drawn)
            .copied()
            .ok_or(Error::DeckExhausted)?;
        self.drawn += 1;
        Ok(card)
    }
    /// Two cards off the top as a seat's hole cards.
    pub fn hole(&mut self) -> Result<Hole, Error> {
        let a = self.draw()?;
        let b = self.draw()?;
        Ok(Hole::from((a, b)))
    }
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn exhausts_after_52() {
        let mut deck = Deck::shuffled(&mut SmallRng::seed_from_u64(7));
        let drawn = (0..52).map(|_| deck.draw().unwrap()).collect::<Vec<_>>();
        assert!(Hand::from(drawn.as_slice()).size() == 52);
        assert!(deck.remaining() == 0);
        assert!(deck.draw() == Err(Error::DeckExhausted));
    }

    #[test]
    fn seeded_shuffles_replay() {
        let a = Deck::shuffled(&mut SmallRng::seed_from_u64(42));
        let b = Deck::shuffled(&mut SmallRng::seed_from_u64(42));
        let c = Deck::shuffled(&mut SmallRng::seed_from_u64(43));
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn stacked_deals_top_first() {
        let top = Card::parse("As Ks 2c").unwrap();
        let mut deck = Deck::stacked(top.clone());
        assert!(deck.remaining() == 52);
        assert!(deck.draw().unwrap() == top[0]);
        assert!(deck.draw().unwrap() == top[1]);
        assert!(deck.draw().unwrap() == top[2]);
        assert!(deck.draw().unwrap().to_string() == "2d");
    }
}
