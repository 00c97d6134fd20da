//! Game rules: predicates and action entry points.
//!
//! [`checks`] holds the pure predicates (turn ownership, tile ownership,
//! opening threshold, win detection); [`engine`] composes them into the
//! four operations a game supports: join, play tiles, draw, advance
//! turn. Everything takes a snapshot in and returns a snapshot out.

pub mod checks;
pub mod engine;

pub use checks::INITIAL_MELD_THRESHOLD;
pub use engine::{advance_turn, apply, draw, join, play_tiles};
