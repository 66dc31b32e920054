use super::seat::Seat;
use super::seat::State;
use crate::Position;

/// The next seat after `from`, clockwise, that can still act voluntarily.
///
/// Scans at most one lap and never returns `from` itself. `None` means no
/// other seat is Active: nobody can bet anymore this hand.
pub fn next_eligible(seats: &[Seat], from: Position) -> Option<Position> {
    let n = seats.len();
    (1..n)
        .map(|k| (from + k) % n)
        .find(|&p| seats[p].state() == State::Active)
}

/// The first Active seat at or after `start`, clockwise.
pub fn first_eligible(seats: &[Seat], start: Position) -> Option<Position> {
    let n = seats.len();
    (0..n)
        .map(|k| (start + k) % n)
        .find(|&p| seats[p].state() == State::Active)
}

/// Whether moving the action from `from` to `to` reaches or skips over `mark`,
/// i.e. `mark` lies in the clockwise interval `(from, to]`.
///
/// A street closes when the action comes back around to its closing seat.
/// If that seat has since folded or gone all-in, the scan skips it, and
/// skipping it closes the street just the same.
pub fn passes(from: Position, to: Position, mark: Position, n: usize) -> bool {
    let distance = |p: Position| (p + n - from) % n;
    distance(mark) > 0 && distance(mark) <= distance(to)
}

/// Clockwise distance from the seat after the button. Lower acts earlier
/// postflop, and receives odd chips first.
pub fn order(button: Position, position: Position, n: usize) -> usize {
    (position + n - button - 1) % n
}

/// Positions fixed for one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Blinds {
    pub button: Position,
    pub small: Position,
    pub big: Position,
    pub under: Position,
}

impl Blinds {
    /// Moves the button to the first Active seat after the previous one
    /// (seat 0 onwards for the first hand), then walks clockwise for the blinds
    /// and under-the-gun.
    pub fn locate(seats: &[Seat], previous: Option<Position>) -> Option<Self> {
        let n = seats.len();
        let button = first_eligible(seats, previous.map(|b| (b + 1) % n).unwrap_or(0))?;
        let small = next_eligible(seats, button)?;
        let big = next_eligible(seats, small)?;
        let under = next_eligible(seats, big)?;
        Some(Self {
            button,
            small,
            big,
            under,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(states: &[State]) -> Vec<Seat> {
        states
            .iter()
            .enumerate()
            .map(|(i, state)| {
                let mut seat = Seat::empty(i);
                seat.reset_state(*state);
                seat
            })
            .collect()
    }

    #[test]
    fn skips_folded_and_all_in() {
        use State::*;
        let seats = table(&[Active, Folded, AllIn, Empty, Active, Active]);
        assert!(next_eligible(&seats, 0) == Some(4));
        assert!(next_eligible(&seats, 4) == Some(5));
        assert!(next_eligible(&seats, 5) == Some(0));
        assert!(next_eligible(&seats, 2) == Some(4));
    }

    #[test]
    fn never_returns_itself() {
        use State::*;
        let seats = table(&[Folded, Active, AllIn, Folded]);
        assert!(next_eligible(&seats, 1) == None);
        for from in 0..seats.len() {
            assert!(next_eligible(&seats, from) != Some(from));
        }
        assert!(next_eligible(&seats, 0) == Some(1));
    }

    #[test]
    fn none_when_nobody_is_active() {
        use State::*;
        let seats = table(&[AllIn, Folded, AllIn]);
        assert!((0..3).all(|p| next_eligible(&seats, p).is_none()));
        assert!(first_eligible(&seats, 0).is_none());
    }

    #[test]
    fn passing_the_closing_seat() {
        assert!(passes(0, 1, 1, 3));
        assert!(!passes(0, 1, 2, 3));
        assert!(passes(2, 1, 0, 3));
        assert!(!passes(1, 2, 1, 3));
        assert!(passes(1, 0, 2, 4));
    }

    #[test]
    fn heads_up_button_posts_big_blind() {
        use State::*;
        let seats = table(&[Active, Active]);
        let blinds = Blinds::locate(&seats, None).unwrap();
        assert!(blinds == Blinds { button: 0, small: 1, big: 0, under: 1 });
        let blinds = Blinds::locate(&seats, Some(0)).unwrap();
        assert!(blinds.button == 1);
    }

    #[test]
    fn button_skips_empty_chairs() {
        use State::*;
        let seats = table(&[Empty, Active, Empty, Active, Active]);
        let blinds = Blinds::locate(&seats, None).unwrap();
        assert!(blinds == Blinds { button: 1, small: 3, big: 4, under: 1 });
        let blinds = Blinds::locate(&seats, Some(4)).unwrap();
        assert!(blinds.button == 1);
    }
}
