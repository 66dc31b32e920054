use super::action::Action;
use super::game::Game;
use super::game::Status;
use super::rules::Raising;
use super::seat::State;
use crate::Chips;
use crate::Error;
use crate::Position;
use crate::cards::Evaluate;

/// The five player decisions. Each validates against the acting seat before
/// moving a single chip, then hands over to the street transition.
impl<E: Evaluate> Game<E> {
    /// Matches the highest commitment.
    pub fn call(&mut self, position: Position) -> Result<(), Error> {
        self.authorize(position)?;
        let owed = self.to_call();
        let have = self.actor_ref().stack();
        if have < owed {
            return Err(Error::InsufficientChips { need: owed, have });
        }
        self.commit(owed, Action::Call(owed));
        self.advance()
    }

    pub fn check(&mut self, position: Position) -> Result<(), Error> {
        self.authorize(position)?;
        let owed = self.to_call();
        if owed > 0 {
            return Err(Error::CheckNotPermitted { owed });
        }
        self.record(Action::Check);
        self.advance()
    }

    /// Raises the seat's total commitment for the hand to `amount`.
    pub fn raise(&mut self, position: Position, amount: Chips) -> Result<(), Error> {
        self.authorize(position)?;
        let min = self.min_raise();
        if amount < min {
            return Err(Error::InvalidRaiseAmount { amount, min });
        }
        let need = amount - self.actor_ref().spent();
        let have = self.actor_ref().stack();
        if have < need {
            return Err(Error::InsufficientChips { need, have });
        }
        self.commit(need, Action::Raise(amount));
        self.escalate(position, amount);
        self.advance()
    }

    /// Opening a street is raising from the current level.
    pub fn bet(&mut self, position: Position, amount: Chips) -> Result<(), Error> {
        self.raise(position, amount)
    }

    /// Commits the whole stack. Only reopens the street if it tops the
    /// highest commitment.
    pub fn all_in(&mut self, position: Position) -> Result<(), Error> {
        self.authorize(position)?;
        let stack = self.to_shove();
        if stack <= 0 {
            return Err(Error::InsufficientChips { need: 1, have: stack });
        }
        let total = self.actor_ref().spent() + stack;
        self.commit(stack, Action::Shove(stack));
        if total > self.highest() {
            self.escalate(position, total);
        }
        self.advance()
    }

    /// Always allowed on your turn. Chips already committed stay in the pot.
    pub fn fold(&mut self, position: Position) -> Result<(), Error> {
        self.authorize(position)?;
        self.actor_mut().reset_state(State::Folded);
        self.record(Action::Fold);
        self.advance()
    }

    /// Dispatches a submitted [`Action`]. Blinds are posted by the table,
    /// never submitted.
    pub fn apply(&mut self, position: Position, action: Action) -> Result<(), Error> {
        match action {
            Action::Check => self.check(position),
            Action::Call(_) => self.call(position),
            Action::Raise(amount) => self.raise(position, amount),
            Action::Shove(_) => self.all_in(position),
            Action::Fold => self.fold(position),
            Action::Blind(_) => Err(Error::InvalidState),
        }
    }

    /// Every action the acting seat may take right now, with the chips each
    /// would move. `Raise` carries the minimum legal raise-to amount.
    pub fn legal(&self) -> Vec<Action> {
        let mut options = Vec::new();
        if self.status() != Status::Running {
            return options;
        }
        if self.may_check() {
            options.push(Action::Check);
        }
        if self.may_call() {
            options.push(Action::Call(self.to_call()));
        }
        if self.may_raise() {
            options.push(Action::Raise(self.min_raise()));
        }
        if self.may_shove() {
            options.push(Action::Shove(self.to_shove()));
        }
        if self.may_fold() {
            options.push(Action::Fold);
        }
        options
    }

    /// Chips the acting seat needs to match the highest commitment.
    pub fn to_call(&self) -> Chips {
        (self.highest() - self.actor_ref().spent()).max(0)
    }
    /// Smallest total commitment a raise may reach.
    pub fn min_raise(&self) -> Chips {
        match self.rules().raising {
            Raising::Unrestricted => self.highest() + 1,
            Raising::NoLimit => self.highest() + self.raised().max(self.rules().big_blind()),
        }
    }
    pub fn to_shove(&self) -> Chips {
        self.actor_ref().stack()
    }

    fn may_check(&self) -> bool {
        self.to_call() == 0
    }
    fn may_call(&self) -> bool {
        self.to_call() > 0 && self.to_call() <= self.to_shove()
    }
    fn may_raise(&self) -> bool {
        self.min_raise() - self.actor_ref().spent() < self.to_shove()
    }
    fn may_shove(&self) -> bool {
        self.to_shove() > 0
    }
    fn may_fold(&self) -> bool {
        self.to_call() > 0
    }

    fn authorize(&self, position: Position) -> Result<(), Error> {
        if self.status() != Status::Running {
            return Err(Error::InvalidState);
        }
        if self.seat(position).is_none() {
            return Err(Error::InvalidSeat(position));
        }
        if self.actor() != Some(position) {
            return Err(Error::NotYourTurn(position));
        }
        Ok(())
    }
}
