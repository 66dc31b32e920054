use super::settlement::Settlement;
use crate::Chips;
use crate::Position;

/// One layer of the pot: the chips every listed seat has matched, and who
/// may win them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Pot {
    amount: Chips,
    eligible: Vec<Position>,
}

impl Pot {
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn eligible(&self) -> &[Position] {
        &self.eligible
    }

    /// Splits committed chips into the main pot followed by side pots.
    ///
    /// Layer boundaries sit at each distinct commitment among contesting
    /// seats. Folded chips fall into whichever layers they reach. Chips above
    /// the highest contesting commitment belong to nobody else and are
    /// left out.
    pub fn layers(entries: &[Settlement]) -> Vec<Pot> {
        let mut levels = entries
            .iter()
            .filter(|e| e.status().is_contesting())
            .map(|e| e.risked())
            .filter(|&r| r > 0)
            .collect::<Vec<Chips>>();
        levels.sort_unstable();
        levels.dedup();
        let mut floor = 0;
        let mut pots = Vec::with_capacity(levels.len());
        for level in levels {
            let amount = entries
                .iter()
                .map(|e| e.risked().min(level) - e.risked().min(floor))
                .sum::<Chips>();
            let eligible = entries
                .iter()
                .filter(|e| e.status().is_contesting())
                .filter(|e| e.risked() >= level)
                .map(|e| e.position())
                .collect::<Vec<Position>>();
            floor = level;
            pots.push(Pot { amount, eligible });
        }
        pots
    }
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let eligible = self
            .eligible
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "${} [{}]", self.amount, eligible)
    }
}
