//! # rummikub-engine
//!
//! A deterministic, multiplayer Rummikub rules engine.
//!
//! ## Design Principles
//!
//! 1. **Snapshot in, snapshot out**: Every operation takes a `GameState`
//!    and returns a new one. Nothing is mutated in place, so a rejected
//!    action needs no rollback and concurrent readers never see a
//!    half-applied move. `im` persistent collections keep the clones O(1).
//!
//! 2. **Closed rule taxonomy**: Every way an action can fail is one
//!    variant of `RuleViolation`, with a stable machine-readable reason
//!    code. Rules code never invents stringly-typed failures.
//!
//! 3. **Deterministic randomness**: Each game embeds a seeded RNG whose
//!    position serializes with the state. The same seed deals the same
//!    racks and draws the same tiles, live or restored from a snapshot.
//!
//! ## Modules
//!
//! - `core`: Tiles, players, state, actions, errors, RNG
//! - `melds`: Meld shapes, canonical ordering, validation and pricing
//! - `rules`: Rule checks and the action entry points
//! - `view`: Per-viewer projections (redacted outbound state)
//! - `naming`: Friendly lobby names

pub mod core;
pub mod melds;
pub mod rules;
pub mod view;
pub mod naming;

// Re-export commonly used types
pub use crate::core::{
    Action, AmbiguousValue, Color, CopyId, GameBuilder, GameRng, GameRngState, GameState,
    GameStatus, ParseTileError, Player, PlayerId, RuleViolation, Tile, INITIAL_RACK_SIZE,
    MAX_PLAYERS, MIN_PLAYERS, UNIVERSE_SIZE,
};

pub use crate::melds::{validate_and_price, Meld, MeldKind, MeldPricing};

pub use crate::rules::{advance_turn, apply, draw, join, play_tiles, INITIAL_MELD_THRESHOLD};

pub use crate::view::{GameStateView, PlayerView};

pub use crate::naming::GameNameGenerator;
