//! Melds: the structures tiles form on the board.
//!
//! [`Meld`] is the shape (a group or a run of concrete tiles, in canonical
//! order); [`validate_and_price`] is the judgment (is the shape legal, what
//! is it worth, and what number does each joker stand for).

pub mod meld;
pub mod validator;

pub use meld::{Meld, MeldKind};
pub use validator::{validate_and_price, MeldPricing};
