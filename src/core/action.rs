//! Player actions.
//!
//! Actions are the only way players change a game. There are exactly two:
//! play one or more melds onto the board, or draw a tile from the pool.
//! Both are decided against a snapshot and applied atomically; a rejected
//! action leaves the game exactly as it was.

use serde::{Deserialize, Serialize};

use crate::melds::Meld;

/// One player action, as submitted by a client.
///
/// Tagged serialization keeps the wire form self-describing:
/// `{"type": "draw"}` or `{"type": "play_tiles", "melds": [...]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Lay melds onto the board. The list is the complete desired board,
    /// not a delta: tiles already on the board reappear here when the
    /// player rearranges them.
    PlayTiles { melds: Vec<Meld> },
    /// Take one random tile from the pool.
    Draw,
}

impl Action {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::PlayTiles { .. } => "play_tiles",
            Action::Draw => "draw",
        }
    }
}
