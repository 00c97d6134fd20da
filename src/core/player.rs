//! Player identification and per-seat state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier, 0-based and fixed at game creation.
//!
//! ## Player
//!
//! One seat: its rack, its claim state, and its opening-meld progress.
//! Seats exist before people do; every seat is dealt a rack up front, and
//! joining a game means claiming the first unnamed seat by name.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::tile::Tile;

/// Seat identifier supporting up to 255 seats.
///
/// Seat indices are 0-based: the first seat is `PlayerId(0)`. Turn order
/// follows seat order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seat IDs for a game with `player_count` seats.
    ///
    /// ```
    /// use rummikub_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat state.
///
/// `name` is `None` until someone joins the seat. The rack is an ordered
/// persistent vector: tiles keep their dealt/drawn order so clients can
/// render a stable rack, and clones share structure with the snapshots
/// they came from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: Option<String>,
    pub rack: Vector<Tile>,
    pub initial_meld_met: bool,
}

impl Player {
    /// Create a freshly dealt, unclaimed seat.
    #[must_use]
    pub fn dealt(id: PlayerId, rack: Vector<Tile>) -> Self {
        Self {
            id,
            name: None,
            rack,
            initial_meld_met: false,
        }
    }

    /// Has anyone claimed this seat?
    #[must_use]
    pub fn is_seated(&self) -> bool {
        self.name.is_some()
    }

    /// Number of tiles left on the rack.
    #[must_use]
    pub fn rack_size(&self) -> usize {
        self.rack.len()
    }
}
