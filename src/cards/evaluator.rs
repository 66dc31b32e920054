use super::card::Card;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// Showdown seam: turns a seat's hole cards plus the board into something
/// comparable. The table only relies on [`Appraisal`]'s ordering, so any
/// evaluator that agrees on hand order can stand in.
pub trait Evaluate {
    fn appraise(&self, hand: Hand) -> Appraisal;
}

/// A seat's showdown result: how strong the hand is and which five cards make it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appraisal {
    strength: Strength,
    best: Hand,
}

impl Appraisal {
    pub fn strength(&self) -> Strength {
        self.strength
    }
    pub fn best(&self) -> Hand {
        self.best
    }
}

impl From<(Strength, Hand)> for Appraisal {
    fn from((strength, best): (Strength, Hand)) -> Self {
        Self { strength, best }
    }
}

impl std::fmt::Display for Appraisal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.strength.ranking(), self.best)
    }
}

/// The built-in evaluator. Scores every 5-card subset of the hand and keeps
/// the strongest, so the reported best five always realize the strength.
#[derive(Debug, Default, Clone, Copy)]
pub struct Appraiser;

impl Evaluate for Appraiser {
    fn appraise(&self, hand: Hand) -> Appraisal {
        let cards = Vec::<Card>::from(hand);
        let n = cards.len();
        if n <= 5 {
            return Appraisal {
                strength: Strength::from(hand),
                best: hand,
            };
        }
        (0u32..(1 << n))
            .filter(|subset| subset.count_ones() == 5)
            .map(|subset| {
                cards
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| subset & (1 << i) != 0)
                    .map(|(_, c)| Hand::from(*c))
                    .fold(Hand::empty(), Hand::add)
            })
            .map(|best| Appraisal {
                strength: Strength::from(best),
                best,
            })
            .max_by_key(|appraisal| appraisal.strength)
            .expect("at least one 5-card subset")
    }
}

/// Bitwise search for the best [`Ranking`] present in a Hand.
///
/// Works on any number of cards; with more than five, categories are found
/// from the best cards available and kickers are trimmed to the top ones.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least one card in Hand")
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        let n = ranking.n_kickers();
        let pool = match ranking {
            Ranking::Flush(_) => self
                .find_suit_of_flush()
                .map(|suit| u16::from(self.0.of(&suit)))
                .unwrap_or_default(),
            _ => u16::from(self.0),
        };
        let mut ranks = pool & ranking.mask() & Rank::mask();
        while ranks.count_ones() as usize > n {
            ranks &= ranks - 1;
        }
        Kickers::from(ranks)
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1, None).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|trips| {
            self.find_rank_of_n_oak(2, Some(trips))
                .map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(u16::from(self.0)).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| Rank::from(u16::from(self.0.of(&suit))))
            .map(Ranking::Flush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|suit| Self::find_rank_of_straight(u16::from(self.0.of(&suit))))
            .map(Ranking::StraightFlush)
    }

    fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == WHEEL & ranks {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::descending()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| self.0.count_of(*rank) >= n)
    }
}
