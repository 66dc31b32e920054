use super::action::Action;
use super::pot::Pot;
use super::rotation;
use super::rotation::Blinds;
use super::rules::Rules;
use super::seat::Seat;
use super::seat::State;
use super::settlement::Settlement;
use super::showdown::Showdown;
use crate::Chips;
use crate::Error;
use crate::Position;
use crate::cards::*;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Whether a hand is in progress.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Waiting,
    Running,
}

/// One table: the seats, the cards, and the betting state of the current hand.
///
/// The host seats players, calls [`Game::start_hand`], and then submits one
/// action at a time for [`Game::actor`]. Every public operation either fails
/// without touching anything or applies completely, including whatever street
/// transitions and pot resolution the action triggers.
///
/// Evaluation sits behind [`Evaluate`] so tests and hosts may substitute their
/// own; the rng only feeds [`Deck::shuffled`].
#[derive(Debug, Clone)]
pub struct Game<E = Appraiser> {
    rules: Rules,
    seats: Vec<Seat>,
    status: Status,
    street: Street,
    deck: Deck,
    board: Board,
    button: Option<Position>,
    blinds: Option<Blinds>,
    actor: Position,
    closer: Position,
    highest: Chips,
    raised: Chips,
    pot: Chips,
    hands: usize,
    history: Vec<(Position, Action)>,
    settlement: Option<Vec<Settlement>>,
    evaluator: E,
    rng: SmallRng,
}

impl Game {
    /// Panics on unplayable [`Rules`], see [`Game::with_evaluator`].
    pub fn new(rules: Rules) -> Self {
        Self::with_evaluator(rules, Appraiser, SmallRng::from_rng(&mut rand::rng()))
    }
    /// Same seed, same seating, same actions: same hands.
    pub fn seeded(rules: Rules, seed: u64) -> Self {
        Self::with_evaluator(rules, Appraiser, SmallRng::seed_from_u64(seed))
    }
}

impl<E: Evaluate> Game<E> {
    /// # Panics
    ///
    /// If `rules.seats` is below 2 or above [`crate::MAX_SEATS`], or if
    /// `rules.ante` cannot split into two blinds.
    pub fn with_evaluator(rules: Rules, evaluator: E, rng: SmallRng) -> Self {
        assert!(rules.seats >= 2, "a table needs at least 2 seats");
        assert!(rules.seats <= crate::MAX_SEATS, "one deck deals at most {} seats", crate::MAX_SEATS);
        assert!(rules.ante >= 2, "the ante must split into two blinds");
        Self {
            seats: (0..rules.seats).map(Seat::empty).collect(),
            status: Status::Waiting,
            street: Street::Preflop,
            deck: Deck::new(),
            board: Board::empty(),
            button: None,
            blinds: None,
            actor: 0,
            closer: 0,
            highest: 0,
            raised: rules.big_blind(),
            pot: 0,
            hands: 0,
            history: Vec::new(),
            settlement: None,
            evaluator,
            rng,
            rules,
        }
    }

    // seating

    /// Seats a player with `stack` chips. Only between hands.
    pub fn sit(&mut self, position: Position, stack: Chips) -> Result<(), Error> {
        if self.status == Status::Running {
            return Err(Error::InvalidState);
        }
        if stack <= 0 {
            return Err(Error::InsufficientChips { need: 1, have: stack });
        }
        let seat = self
            .seats
            .get_mut(position)
            .ok_or(Error::InvalidSeat(position))?;
        if seat.is_seated() {
            return Err(Error::SeatOccupied(position));
        }
        seat.sit(stack);
        log::debug!("seat {} sits with {}", position, stack);
        Ok(())
    }
    /// Empties the seat and returns the chips the player walks away with.
    pub fn leave(&mut self, position: Position) -> Result<Chips, Error> {
        if self.status == Status::Running {
            return Err(Error::InvalidState);
        }
        let seat = self
            .seats
            .get_mut(position)
            .ok_or(Error::InvalidSeat(position))?;
        if !seat.is_seated() {
            return Err(Error::SeatEmpty(position));
        }
        let stack = seat.leave();
        log::debug!("seat {} leaves with {}", position, stack);
        Ok(stack)
    }

    // hand lifecycle

    /// Shuffles a fresh deck and starts the next hand.
    pub fn start_hand(&mut self) -> Result<(), Error> {
        if self.status == Status::Running {
            return Err(Error::InvalidState);
        }
        let deck = Deck::shuffled(&mut self.rng);
        self.start_hand_with(deck)
    }
    /// Starts the next hand from a prepared deck.
    ///
    /// Moves the button, deals two cards to every seat with chips in seat
    /// order, posts both blinds, and hands the action to under-the-gun.
    pub fn start_hand_with(&mut self, mut deck: Deck) -> Result<(), Error> {
        if self.status == Status::Running {
            return Err(Error::InvalidState);
        }
        let dealt = self
            .seats
            .iter()
            .filter(|s| s.is_seated() && s.stack() > 0)
            .count();
        if dealt < 2 {
            return Err(Error::NotEnoughPlayers);
        }
        if deck.remaining() < 2 * dealt + 5 {
            return Err(Error::DeckExhausted);
        }
        for seat in self.seats.iter_mut() {
            seat.reset_hand();
        }
        for seat in self.seats.iter_mut().filter(|s| s.state() == State::Active) {
            seat.reset_cards(deck.hole()?);
        }
        let blinds = Blinds::locate(&self.seats, self.button).ok_or(Error::NotEnoughPlayers)?;
        self.hands += 1;
        self.deck = deck;
        self.board.clear();
        self.street = Street::Preflop;
        self.status = Status::Running;
        self.pot = 0;
        self.history.clear();
        self.settlement = None;
        self.button = Some(blinds.button);
        self.blinds = Some(blinds);
        self.highest = self.rules.big_blind();
        self.raised = self.rules.big_blind();
        log::info!(
            "hand {} button {} blinds {}/{}",
            self.hands,
            blinds.button,
            blinds.small,
            blinds.big
        );
        self.post(blinds.small, self.rules.small_blind());
        self.post(blinds.big, self.rules.big_blind());
        self.closer = match self.rules.big_blind_option {
            true => blinds.under,
            false => blinds.big,
        };
        self.seek(blinds.under)
    }

    // accessors

    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, position: Position) -> Option<&Seat> {
        self.seats.get(position)
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Every chip committed this hand, across all seats and streets.
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn button(&self) -> Option<Position> {
        self.button
    }
    pub fn blinds(&self) -> Option<Blinds> {
        self.blinds
    }
    /// The seat whose turn it is, while a hand is running.
    pub fn actor(&self) -> Option<Position> {
        match self.status {
            Status::Running => Some(self.actor),
            Status::Waiting => None,
        }
    }
    /// The commitment every seat must match to stay in.
    pub fn highest(&self) -> Chips {
        self.highest
    }
    /// Hands started at this table so far.
    pub fn hands(&self) -> usize {
        self.hands
    }
    /// Blinds and actions of the current (or last) hand, in order.
    pub fn history(&self) -> &[(Position, Action)] {
        &self.history
    }
    /// Result of the last finished hand, until the next one starts.
    pub fn settlement(&self) -> Option<&[Settlement]> {
        self.settlement.as_deref()
    }
    /// Main pot followed by side pots, from current commitments.
    pub fn pots(&self) -> Vec<Pot> {
        Pot::layers(&self.ledger(false))
    }

    // transitions

    pub(super) fn actor_ref(&self) -> &Seat {
        &self.seats[self.actor]
    }
    pub(super) fn actor_mut(&mut self) -> &mut Seat {
        &mut self.seats[self.actor]
    }
    pub(super) fn raised(&self) -> Chips {
        self.raised
    }

    /// Moves chips from the acting seat into the pot and records the action.
    pub(super) fn commit(&mut self, chips: Chips, action: Action) {
        self.actor_mut().bet(chips);
        self.pot += chips;
        self.record(action);
    }
    pub(super) fn record(&mut self, action: Action) {
        log::debug!("{:<3}{}", self.actor, action);
        self.history.push((self.actor, action));
    }
    /// Lifts the highest commitment to `total`. A full raise reopens the
    /// sizing for later raises; either way the street now closes at `by`.
    pub(super) fn escalate(&mut self, by: Position, total: Chips) {
        let increment = total - self.highest;
        if increment >= self.raised {
            self.raised = increment;
        }
        self.highest = total;
        self.closer = by;
    }

    /// Runs after every successful action. Passes the turn, closes the
    /// street, or ends the hand.
    pub(super) fn advance(&mut self) -> Result<(), Error> {
        if self.contesters() < 2 {
            return self.conclude();
        }
        match rotation::next_eligible(&self.seats, self.actor) {
            None => self.run_out(),
            Some(next) if rotation::passes(self.actor, next, self.closer, self.seats.len()) => {
                self.close()
            }
            Some(next) => {
                self.actor = next;
                Ok(())
            }
        }
    }

    fn post(&mut self, position: Position, blind: Chips) {
        let seat = &mut self.seats[position];
        let blind = blind.min(seat.stack());
        seat.bet(blind);
        self.pot += blind;
        self.history.push((position, Action::Blind(blind)));
        log::debug!("{:<3}{}", position, Action::Blind(blind));
    }
    fn close(&mut self) -> Result<(), Error> {
        if self.street == Street::River {
            return self.conclude();
        }
        self.reveal()?;
        self.raised = self.rules.big_blind();
        let small = self.blinds.map(|b| b.small).unwrap_or_default();
        self.seek(small)?;
        self.closer = self.actor;
        Ok(())
    }
    /// Gives the action to the first Active seat at or after `from`, unless
    /// betting is over for this hand.
    fn seek(&mut self, from: Position) -> Result<(), Error> {
        if self.is_settled() {
            return self.run_out();
        }
        match rotation::first_eligible(&self.seats, from) {
            Some(actor) => {
                self.actor = actor;
                Ok(())
            }
            None => self.run_out(),
        }
    }
    /// Nobody can bet anymore: no Active seat, or a single one that has
    /// already matched the highest commitment.
    fn is_settled(&self) -> bool {
        let mut active = self.seats.iter().filter(|s| s.state() == State::Active);
        match (active.next(), active.next()) {
            (None, _) => true,
            (Some(seat), None) => seat.spent() >= self.highest,
            _ => false,
        }
    }
    fn contesters(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.state().is_contesting())
            .count()
    }
    fn reveal(&mut self) -> Result<(), Error> {
        for _ in 0..self.street.n_revealed() {
            let card = self.deck.draw()?;
            self.board.add(card);
        }
        self.street = self.street.next();
        log::debug!("{:<8}{}", self.street, self.board);
        Ok(())
    }
    fn run_out(&mut self) -> Result<(), Error> {
        while self.street < Street::River {
            self.reveal()?;
        }
        self.conclude()
    }
    /// Resolves the pot and credits every seat in one step.
    fn conclude(&mut self) -> Result<(), Error> {
        let button = self.button.unwrap_or_default();
        let ledger = self.ledger(self.contesters() > 1);
        let settlement = Showdown::new(ledger, button, self.seats.len())
            .settle()
            .inspect_err(|e| log::error!("hand {} cannot settle: {}", self.hands, e))?;
        for line in settlement.iter() {
            let seat = &mut self.seats[line.position()];
            seat.win(line.reward());
            seat.reset_appraisal(line.appraisal());
            log::trace!("{}", line);
        }
        for line in settlement.iter().filter(|line| line.pnl() > 0) {
            log::info!("hand {} seat {} wins {}", self.hands, line.position(), line.pnl());
        }
        self.street = Street::End;
        self.status = Status::Waiting;
        self.settlement = Some(settlement);
        Ok(())
    }
    /// One settlement line per seated player. Contesters are appraised
    /// against the board only when `appraise` is set.
    fn ledger(&self, appraise: bool) -> Vec<Settlement> {
        let board = Hand::from(&self.board);
        self.seats
            .iter()
            .filter(|seat| seat.is_seated())
            .map(|seat| {
                let appraisal = seat
                    .cards()
                    .filter(|_| appraise && seat.state().is_contesting())
                    .map(|hole| self.evaluator.appraise(Hand::add(Hand::from(hole), board)));
                Settlement::from((seat.position(), seat.spent(), seat.state(), appraisal))
            })
            .collect()
    }
}

impl<E> std::fmt::Display for Game<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{} {} {}",
            format!("{:<8}", self.street).bright_green(),
            format!("${:<6}", self.pot).bright_green(),
            self.board
        )?;
        for seat in self.seats.iter().filter(|s| s.is_seated()) {
            let marker = match self.status {
                Status::Running if seat.position() == self.actor => ">",
                _ if Some(seat.position()) == self.button => "D",
                _ => " ",
            };
            writeln!(f, "{} {}", marker, seat)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Raising;
    use rand::Rng;

    fn table(stacks: &[Chips], rules: Rules) -> Game {
        let _ = env_logger::builder().is_test(true).try_init();
        let rules = Rules {
            seats: stacks.len(),
            ..rules
        };
        let mut game = Game::seeded(rules, 0);
        for (position, &stack) in stacks.iter().enumerate().filter(|(_, s)| **s > 0) {
            game.sit(position, stack).unwrap();
        }
        game
    }
    fn option() -> Rules {
        Rules {
            big_blind_option: true,
            ..Rules::default()
        }
    }
    fn stacked(cards: &str) -> Deck {
        Deck::stacked(Card::parse(cards).unwrap())
    }

    #[test]
    fn blinds_and_first_actor() {
        let mut game = table(&[1000, 1000, 1000], Rules::default());
        game.start_hand().unwrap();
        assert!(game.button() == Some(0));
        assert!(game.seat(1).unwrap().spent() == 10);
        assert!(game.seat(2).unwrap().spent() == 20);
        assert!(game.highest() == 20);
        assert!(game.actor() == Some(0));
        assert!(game.pot() == 30);
        assert!(game.seats().iter().all(|s| s.cards().is_some()));
    }

    #[test]
    fn preflop_closes_when_action_reaches_big_blind() {
        let mut game = table(&[1000, 1000, 1000], Rules::default());
        game.start_hand().unwrap();
        game.call(0).unwrap();
        assert!(game.seat(0).unwrap().spent() == 20);
        assert!(game.actor() == Some(1));
        game.call(1).unwrap();
        assert!(game.seat(1).unwrap().spent() == 20);
        assert!(game.street() == Street::Flop);
        assert!(game.board().size() == 3);
        assert!(game.pot() == 60);
        assert!(game.actor() == Some(1));
        game.check(1).unwrap();
        game.check(2).unwrap();
        assert!(game.street() == Street::Flop);
        game.check(0).unwrap();
        assert!(game.street() == Street::Turn);
        assert!(game.board().size() == 4);
        assert!(game.actor() == Some(1));
    }

    #[test]
    fn big_blind_keeps_its_option() {
        let mut game = table(&[1000, 1000, 1000], option());
        game.start_hand().unwrap();
        game.call(0).unwrap();
        game.call(1).unwrap();
        assert!(game.street() == Street::Preflop);
        assert!(game.actor() == Some(2));
        assert!(game.legal().contains(&Action::Check));
        assert!(game.legal().contains(&Action::Raise(40)));
        game.check(2).unwrap();
        assert!(game.street() == Street::Flop);
        assert!(game.actor() == Some(1));
    }

    #[test]
    fn heads_up_small_blind_acts_first() {
        let mut game = table(&[1000, 1000], option());
        game.start_hand().unwrap();
        assert!(game.blinds() == Some(Blinds { button: 0, small: 1, big: 0, under: 1 }));
        assert!(game.actor() == Some(1));
        game.call(1).unwrap();
        assert!(game.actor() == Some(0));
        game.check(0).unwrap();
        assert!(game.street() == Street::Flop);
        assert!(game.actor() == Some(1));
    }

    #[test]
    fn street_closes_when_its_first_actor_folds() {
        let mut game = table(&[1000, 1000, 1000], Rules::default());
        game.start_hand().unwrap();
        game.call(0).unwrap();
        game.call(1).unwrap();
        assert!(game.street() == Street::Flop);
        assert!(game.actor() == Some(1));
        game.fold(1).unwrap();
        assert!(game.actor() == Some(2));
        game.check(2).unwrap();
        game.check(0).unwrap();
        assert!(game.street() == Street::Turn);
        assert!(game.board().size() == 4);
        assert!(game.actor() == Some(2));
    }

    #[test]
    fn heads_up_preflop_ends_with_small_blind_call() {
        let mut game = table(&[1000, 1000], Rules::default());
        game.start_hand().unwrap();
        game.call(1).unwrap();
        assert!(game.street() == Street::Flop);
        assert!(game.pot() == 40);
        assert!(game.actor() == Some(1));
    }

    #[test]
    #[should_panic(expected = "at least 2 seats")]
    fn single_seat_table_is_refused() {
        let rules = Rules {
            seats: 1,
            ..Rules::default()
        };
        Game::seeded(rules, 0);
    }

    #[test]
    #[should_panic(expected = "split into two blinds")]
    fn indivisible_ante_is_refused() {
        let rules = Rules {
            ante: 1,
            ..Rules::default()
        };
        Game::seeded(rules, 0);
    }

    #[test]
    fn raise_reopens_action() {
        let mut game = table(&[1000, 1000, 1000], Rules::default());
        game.start_hand().unwrap();
        game.raise(0, 60).unwrap();
        assert!(game.highest() == 60);
        assert!(game.min_raise() == 100);
        game.call(1).unwrap();
        game.raise(2, 100).unwrap();
        assert!(game.actor() == Some(0));
        game.call(0).unwrap();
        assert!(game.street() == Street::Preflop);
        game.call(1).unwrap();
        assert!(game.street() == Street::Flop);
        assert!(game.pot() == 300);
    }

    #[test]
    fn unrestricted_raises_need_only_exceed() {
        let rules = Rules {
            raising: Raising::Unrestricted,
            ..Rules::default()
        };
        let mut game = table(&[1000, 1000, 1000], rules);
        game.start_hand().unwrap();
        assert!(game.min_raise() == 21);
        game.raise(0, 21).unwrap();
        assert!(game.highest() == 21);
    }

    #[test]
    fn legal_options_facing_big_blind() {
        let mut game = table(&[1000, 1000, 1000], Rules::default());
        assert!(game.legal().is_empty());
        game.start_hand().unwrap();
        assert!(game.legal() == vec![Action::Call(20), Action::Raise(40), Action::Shove(1000), Action::Fold]);
    }

    #[test]
    fn rejected_actions_change_nothing() {
        let mut game = table(&[1000, 1000, 1000], Rules::default());
        assert!(game.call(0) == Err(Error::InvalidState));
        game.start_hand().unwrap();
        let before = game.snapshot();
        let length = game.history().len();
        assert!(game.call(1) == Err(Error::NotYourTurn(1)));
        assert!(game.call(7) == Err(Error::InvalidSeat(7)));
        assert!(game.check(0) == Err(Error::CheckNotPermitted { owed: 20 }));
        assert!(game.raise(0, 30) == Err(Error::InvalidRaiseAmount { amount: 30, min: 40 }));
        assert!(game.raise(0, 5000) == Err(Error::InsufficientChips { need: 5000, have: 1000 }));
        assert!(game.apply(0, Action::Blind(20)) == Err(Error::InvalidState));
        assert!(game.start_hand() == Err(Error::InvalidState));
        assert!(game.sit(0, 100) == Err(Error::InvalidState));
        assert!(game.snapshot() == before);
        assert!(game.history().len() == length);
    }

    #[test]
    fn seating_errors() {
        let mut game = table(&[500, 0, 0, 0], Rules::default());
        assert!(game.start_hand() == Err(Error::NotEnoughPlayers));
        assert!(game.sit(0, 100) == Err(Error::SeatOccupied(0)));
        assert!(game.sit(9, 100) == Err(Error::InvalidSeat(9)));
        assert!(game.sit(1, 0) == Err(Error::InsufficientChips { need: 1, have: 0 }));
        assert!(game.leave(3) == Err(Error::SeatEmpty(3)));
        assert!(game.leave(0) == Ok(500));
        assert!(game.seats().iter().all(|s| !s.is_seated()));
    }

    #[test]
    fn last_player_standing_takes_the_pot() {
        let mut game = table(&[1000, 1000, 1000], Rules::default());
        game.start_hand().unwrap();
        game.fold(0).unwrap();
        game.fold(1).unwrap();
        assert!(game.street() == Street::End);
        assert!(game.status() == Status::Waiting);
        assert!(game.board().size() == 0);
        assert!(game.actor().is_none());
        let settlement = game.settlement().unwrap();
        assert!(settlement[2].reward() == 30);
        assert!(settlement[2].pnl() == 10);
        assert!(settlement[1].pnl() == -10);
        assert!(settlement[0].pnl() == 0);
        assert!(settlement.iter().all(|s| s.appraisal().is_none()));
        assert!(game.seat(2).unwrap().stack() == 1010);
    }

    #[test]
    fn button_moves_each_hand() {
        let mut game = table(&[1000, 1000, 1000], Rules::default());
        game.start_hand().unwrap();
        game.fold(0).unwrap();
        game.fold(1).unwrap();
        game.start_hand().unwrap();
        assert!(game.hands() == 2);
        assert!(game.blinds() == Some(Blinds { button: 1, small: 2, big: 0, under: 1 }));
        assert!(game.settlement().is_none());
    }

    #[test]
    fn short_stacks_split_into_side_pots() {
        let mut game = table(&[100, 50, 30], Rules::default());
        let deck = stacked("2c7d 3c8d AcAd KsQh9s 4h 5d");
        game.start_hand_with(deck).unwrap();
        game.all_in(0).unwrap();
        game.all_in(1).unwrap();
        game.all_in(2).unwrap();
        assert!(game.street() == Street::End);
        assert!(game.board().size() == 5);
        let spent = game.seats().iter().map(|s| s.spent()).collect::<Vec<_>>();
        assert!(spent == vec![100, 50, 30]);
        let pots = game.pots();
        assert!(pots.len() == 3);
        assert!(pots[0].amount() == 90 && pots[0].eligible() == [0, 1, 2]);
        assert!(pots[1].amount() == 40 && pots[1].eligible() == [0, 1]);
        assert!(pots[2].amount() == 50 && pots[2].eligible() == [0]);
        let settlement = game.settlement().unwrap();
        assert!(settlement[2].reward() == 90);
        assert!(settlement[1].reward() == 40);
        assert!(settlement[0].reward() == 50);
        assert!(settlement.iter().map(|s| s.pnl()).sum::<Chips>() == 0);
        let stacks = game.seats().iter().map(|s| s.stack()).collect::<Vec<_>>();
        assert!(stacks == vec![50, 40, 90]);
        let best = game.seat(2).unwrap().appraisal().unwrap();
        assert!(best.strength().ranking() == Ranking::OnePair(Rank::Ace));
    }

    #[test]
    fn busted_seat_sits_out_next_hand() {
        let mut game = table(&[100, 100, 500], Rules::default());
        let deck = stacked("2c7d AcAd 3c8d KsQh9s 4h 5d");
        game.start_hand_with(deck).unwrap();
        game.all_in(0).unwrap();
        game.call(1).unwrap();
        assert!(game.seat(1).unwrap().state() == State::AllIn);
        game.fold(2).unwrap();
        assert!(game.street() == Street::End);
        let stacks = game.seats().iter().map(|s| s.stack()).collect::<Vec<_>>();
        assert!(stacks == vec![0, 220, 480]);
        game.start_hand().unwrap();
        assert!(game.seat(0).unwrap().state() == State::Folded);
        assert!(game.seat(0).unwrap().cards().is_none());
        assert!(game.button() == Some(1));
        assert!(game.actor() == Some(2));
    }

    #[test]
    fn snapshot_shows_public_state() {
        let mut game = table(&[1000, 1000, 1000], Rules::default());
        game.start_hand().unwrap();
        let snapshot = game.snapshot();
        assert!(snapshot.pot == 30);
        assert!(snapshot.ante == 20);
        assert!(snapshot.button == Some(0));
        assert!(snapshot.actor == Some(0));
        assert!(snapshot.board.is_empty());
        assert!(snapshot.seats.len() == 3);
        assert!(snapshot.seats[1].last == Some(Action::Blind(10)));
        assert!(snapshot.seats[0].last.is_none());
    }

    #[test]
    fn random_hands_conserve_chips() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut game = table(&[300, 150, 500, 80, 1000, 240], Rules::default());
        let total = 2270;
        for _ in 0..200 {
            if game.start_hand().is_err() {
                break;
            }
            let mut street = game.street();
            while game.status() == Status::Running {
                let stacks = game.seats().iter().map(|s| s.stack()).sum::<Chips>();
                assert!(stacks + game.pot() == total);
                assert!(game.board().size() == street.n_observed());
                let options = game.legal();
                let action = options[rng.random_range(0..options.len())];
                let actor = game.actor().unwrap();
                game.apply(actor, action).unwrap();
                assert!(game.street() >= street);
                street = game.street();
            }
            let settlement = game.settlement().unwrap();
            assert!(settlement.iter().map(|s| s.pnl()).sum::<Chips>() == 0);
            assert!(game.seats().iter().map(|s| s.stack()).sum::<Chips>() == total);
        }
    }
}
