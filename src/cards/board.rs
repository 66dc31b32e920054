use super::card::Card;
use super::hand::Hand;

/// Community cards, in the order they were revealed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn add(&mut self, card: Card) {
        debug_assert!(self.0.len() < 5);
        self.0.push(card);
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.0.as_slice())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}  ", card)?;
        }
        Ok(())
    }
}
