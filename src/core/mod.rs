//! Core engine types: tiles, players, state, actions, errors, RNG.
//!
//! This module contains the building blocks everything else composes:
//! the tile universe, seat identity, the game snapshot and its builder,
//! the action enum, the rule-violation taxonomy, and deterministic
//! randomness.

pub mod tile;
pub mod error;
pub mod player;
pub mod rng;
pub mod action;
pub mod state;

pub use tile::{AmbiguousValue, Color, CopyId, ParseTileError, Tile, UNIVERSE_SIZE};
pub use error::RuleViolation;
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use action::Action;
pub use state::{
    GameBuilder, GameState, GameStatus, INITIAL_RACK_SIZE, MAX_PLAYERS, MIN_PLAYERS,
};
