//! Game state: one immutable snapshot of a whole game.
//!
//! ## GameState
//!
//! Everything a game is at one instant:
//! - Seats with racks, names, opening-meld progress
//! - The face-down pool and the face-up board of melds
//! - Whose turn it is, lifecycle status, winner
//! - The embedded RNG, mid-stream
//!
//! Uses `im` persistent data structures for O(1) cloning: rules code
//! clones a snapshot, rewrites the clone, and returns it, leaving the
//! input untouched. Serialization captures the RNG position too, so a
//! restored game draws the same tiles a live one would have.
//!
//! ## GameBuilder
//!
//! Game creation: shuffle the full universe, deal every seat its rack up
//! front, pool the remainder. Seats start unnamed; joining claims them.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::player::{Player, PlayerId};
use super::rng::GameRng;
use super::tile::{Tile, UNIVERSE_SIZE};
use crate::melds::Meld;
use crate::naming::GameNameGenerator;

/// Tiles dealt to every seat at game creation.
pub const INITIAL_RACK_SIZE: usize = 14;
/// Fewest seats a game can be created with.
pub const MIN_PLAYERS: usize = 2;
/// Most seats a game can be created with.
pub const MAX_PLAYERS: usize = 4;

/// Lifecycle of a game.
///
/// Only ever moves forward: waiting until the last seat is claimed, in
/// progress until someone empties their rack, completed forever after.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    WaitingForPlayers,
    InProgress,
    Completed,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::WaitingForPlayers => "waiting_for_players",
            GameStatus::InProgress => "in_progress",
            GameStatus::Completed => "completed",
        };
        write!(f, "{name}")
    }
}

/// Full game state.
///
/// Fields are public: rules code reads and rewrites snapshots freely, and
/// the accessor methods exist for the common lookups, not as an
/// encapsulation boundary. Timestamps are caller-stamped milliseconds;
/// the engine itself never reads a clock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Stable external identifier.
    pub game_id: String,

    /// Human-readable lobby name.
    pub game_name: String,

    /// Seats in turn order, racks included.
    pub players: Vector<Player>,

    /// Face-down tiles still drawable.
    pub pool: Vector<Tile>,

    /// Face-up melds.
    pub board: Vector<Meld>,

    /// Index into `players` of the seat whose turn it is.
    pub current_player_index: usize,

    /// Lifecycle status.
    pub status: GameStatus,

    /// Set exactly once, when the game completes.
    pub winner_id: Option<PlayerId>,

    /// Creation time, caller-stamped (ms since epoch).
    pub created_at_ms: u64,

    /// Last change time, caller-stamped (ms since epoch).
    pub updated_at_ms: u64,

    /// Deterministic RNG, serialized mid-stream.
    pub rng: GameRng,
}

/// Builder for creating a game.
pub struct GameBuilder {
    player_count: usize,
    game_id: Option<String>,
    game_name: Option<String>,
    created_at_ms: u64,
}

impl GameBuilder {
    /// Start a builder for `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count),
            "Player count must be 2-4"
        );
        Self {
            player_count,
            game_id: None,
            game_name: None,
            created_at_ms: 0,
        }
    }

    /// Override the generated game id.
    #[must_use]
    pub fn game_id(mut self, id: impl Into<String>) -> Self {
        self.game_id = Some(id.into());
        self
    }

    /// Override the generated lobby name.
    #[must_use]
    pub fn game_name(mut self, name: impl Into<String>) -> Self {
        self.game_name = Some(name.into());
        self
    }

    /// Stamp the creation time (ms since epoch).
    #[must_use]
    pub fn created_at_ms(mut self, at_ms: u64) -> Self {
        self.created_at_ms = at_ms;
        self
    }

    /// Build the initial state: shuffle the universe, deal every seat,
    /// pool the remainder.
    ///
    /// The same seed always produces the same deal. The lobby name comes
    /// off a separate RNG context stream, so naming never shifts the deal.
    #[must_use]
    pub fn build(self, seed: u64) -> GameState {
        let mut rng = GameRng::new(seed);

        let mut tiles = Tile::full_universe();
        rng.shuffle(&mut tiles);

        let mut deal = tiles.into_iter();
        let players: Vector<Player> = PlayerId::all(self.player_count)
            .map(|id| Player::dealt(id, deal.by_ref().take(INITIAL_RACK_SIZE).collect()))
            .collect();
        let pool: Vector<Tile> = deal.collect();

        let game_name = self
            .game_name
            .unwrap_or_else(|| GameNameGenerator::new(rng.for_context("game-name")).generate());
        let game_id = self.game_id.unwrap_or_else(|| format!("game-{seed:016x}"));

        info!(
            game_id = %game_id,
            game_name = %game_name,
            players = self.player_count,
            "game created"
        );

        GameState {
            game_id,
            game_name,
            players,
            pool,
            board: Vector::new(),
            current_player_index: 0,
            status: GameStatus::WaitingForPlayers,
            winner_id: None,
            created_at_ms: self.created_at_ms,
            updated_at_ms: self.created_at_ms,
            rng,
        }
    }
}

impl GameState {
    /// Start a builder for `player_count` seats.
    #[must_use]
    pub fn builder(player_count: usize) -> GameBuilder {
        GameBuilder::new(player_count)
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Look up a seat by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// A copy stamped with a new last-change time.
    #[must_use]
    pub fn touched(&self, now_ms: u64) -> Self {
        let mut next = self.clone();
        next.updated_at_ms = now_ms;
        next
    }

    /// Every tile accounted for exactly once across racks, pool, and
    /// board.
    ///
    /// Holds for every state the rules produce; a failure means a bug, a
    /// corrupted snapshot, or a hand-built state.
    #[must_use]
    pub fn tile_conservation_holds(&self) -> bool {
        let mut seen: FxHashSet<Tile> = FxHashSet::default();
        let mut count = 0usize;

        for player in &self.players {
            for &tile in &player.rack {
                seen.insert(tile);
                count += 1;
            }
        }
        for &tile in &self.pool {
            seen.insert(tile);
            count += 1;
        }
        for meld in &self.board {
            for &tile in meld.tiles() {
                seen.insert(tile);
                count += 1;
            }
        }

        count == UNIVERSE_SIZE && seen.len() == UNIVERSE_SIZE
    }

    /// Serialize the snapshot for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Restore a snapshot from storage.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
