//! Betting-and-settlement core of a multi-player Texas Hold'em table.
//!
//! - [`cards`] — card values, the shuffled deck, and the 7-card evaluator
//! - [`gameplay`] — seats, turn rotation, betting actions, streets, and pot resolution
//!
//! A [`gameplay::Game`] is one table. The host seats players, calls
//! [`gameplay::Game::start_hand`], then feeds one action at a time for the acting seat
//! until the hand reaches [`cards::Street::End`] and a settlement is available.
pub mod cards;
pub mod error;
pub mod gameplay;

pub use error::Error;

/// Stack sizes, bets, and settlement deltas.
pub type Chips = i32;
/// Seat index around the table, which is also the turn order.
pub type Position = usize;

/// Default forced bet: the big blind posts `ANTE`, the small blind posts half.
pub const ANTE: Chips = 20;
/// Default number of seats at a table.
pub const SEATS: usize = 6;
/// Largest table a single deck can deal: two hole cards per seat plus a full board.
pub const MAX_SEATS: usize = (52 - 5) / 2;
