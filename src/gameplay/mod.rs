pub mod action;
pub use action::*;

pub mod betting;

pub mod game;
pub use game::*;

pub mod pot;
pub use pot::*;

pub mod rotation;
pub use rotation::Blinds;

pub mod rules;
pub use rules::*;

pub mod seat;
pub use seat::*;

pub mod settlement;
pub use settlement::*;

pub mod showdown;
pub use showdown::*;

pub mod snapshot;
pub use snapshot::*;
