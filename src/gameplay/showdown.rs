use super::rotation;
use super::settlement::Settlement;
use crate::Chips;
use crate::Error;
use crate::Position;

/// Ephemeral resolver that turns every seat's commitment and hand strength
/// into rewards, handling side pots, split pots, and uncalled chips.
///
/// Contesters are grouped into tiers of equal strength, best tier first.
/// Walking a tier from its shortest stack upward, each member claims from
/// every seat the chips up to its own commitment that nobody has claimed
/// yet, and shares that layer with the tier members who committed at least
/// as much. Whatever nobody could claim goes back to its owner.
pub struct Showdown {
    payouts: Vec<Settlement>,
    claimed: Vec<Chips>,
    button: Position,
    n: usize,
}

impl Showdown {
    /// `n` is the table size, needed to order seats clockwise from `button`.
    pub fn new(payouts: Vec<Settlement>, button: Position, n: usize) -> Self {
        let claimed = vec![0; payouts.len()];
        Self {
            payouts,
            claimed,
            button,
            n,
        }
    }

    pub fn settle(mut self) -> Result<Vec<Settlement>, Error> {
        self.resolve()?;
        Ok(self.payouts)
    }

    fn resolve(&mut self) -> Result<(), Error> {
        let contesters = self.contesters();
        match contesters.len() {
            0 => Err(Error::NoContesters),
            1 => {
                let everything = self.payouts.iter().map(|p| p.risked()).sum::<Chips>();
                self.claimed = self.payouts.iter().map(|p| p.risked()).collect();
                self.payouts[contesters[0]].add(everything);
                Ok(())
            }
            _ => {
                for tier in self.tiers(contesters) {
                    self.distribute(&tier);
                }
                self.refund();
                Ok(())
            }
        }
    }

    fn contesters(&self) -> Vec<usize> {
        (0..self.payouts.len())
            .filter(|&i| self.payouts[i].status().is_contesting())
            .collect()
    }

    /// Contesters grouped by equal strength, strongest group first, each
    /// group ordered by ascending commitment.
    fn tiers(&self, mut contesters: Vec<usize>) -> Vec<Vec<usize>> {
        contesters.sort_by(|&a, &b| {
            let a = &self.payouts[a];
            let b = &self.payouts[b];
            b.strength()
                .cmp(&a.strength())
                .then(a.risked().cmp(&b.risked()))
        });
        contesters
            .chunk_by(|&a, &b| self.payouts[a].strength() == self.payouts[b].strength())
            .map(<[usize]>::to_vec)
            .collect()
    }

    fn distribute(&mut self, tier: &[usize]) {
        for (k, &member) in tier.iter().enumerate() {
            let level = self.payouts[member].risked();
            let layer = self.collect(level);
            if layer > 0 {
                self.split(layer, &tier[k..]);
            }
        }
    }

    /// Takes from every seat whatever it committed up to `level` that has
    /// not been claimed already.
    fn collect(&mut self, level: Chips) -> Chips {
        self.payouts
            .iter()
            .zip(self.claimed.iter_mut())
            .map(|(payout, claimed)| {
                let take = (payout.risked().min(level) - *claimed).max(0);
                *claimed += take;
                take
            })
            .sum()
    }

    /// Equal shares, with odd chips handed out one at a time clockwise from
    /// the seat after the button.
    fn split(&mut self, layer: Chips, winners: &[usize]) {
        let mut winners = winners.to_vec();
        winners.sort_by_key(|&i| rotation::order(self.button, self.payouts[i].position(), self.n));
        let share = layer / winners.len() as Chips;
        let remainder = layer as usize % winners.len();
        for (k, &winner) in winners.iter().enumerate() {
            let bonus = if k < remainder { 1 } else { 0 };
            self.payouts[winner].add(share + bonus);
        }
    }

    fn refund(&mut self) {
        for (payout, claimed) in self.payouts.iter_mut().zip(self.claimed.iter_mut()) {
            let leftover = payout.risked() - *claimed;
            if leftover > 0 {
                log::trace!("return {} uncalled to seat {}", leftover, payout.position());
                payout.add(leftover);
                *claimed += leftover;
            }
        }
    }
}
