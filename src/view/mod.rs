//! Per-viewer projections of game state.
//!
//! A full [`GameState`] holds information no single player may see: other
//! racks, the pool's contents, the RNG stream. [`GameStateView`] is the
//! outbound shape: the viewer's own rack in full, every other rack as a
//! count, the pool as a count, the board as-is. Transport layers send
//! views; full states never leave the server.

use im::Vector;
use serde::Serialize;

use crate::core::player::PlayerId;
use crate::core::state::{GameState, GameStatus};
use crate::core::tile::Tile;
use crate::melds::Meld;

/// One seat as a given viewer sees it.
///
/// `rack` is populated only for the viewer's own seat and omitted from
/// serialization otherwise, so opponents' payloads carry no rack tiles at
/// all, not even an empty list.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: Option<String>,
    pub rack_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rack: Option<Vector<Tile>>,
    pub initial_meld_met: bool,
}

/// A game as a given viewer sees it.
#[derive(Clone, Debug, Serialize)]
pub struct GameStateView {
    pub game_id: String,
    pub game_name: String,
    pub players: Vec<PlayerView>,
    pub pool_size: usize,
    pub board: Vector<Meld>,
    pub current_player_index: usize,
    pub status: GameStatus,
    pub winner_id: Option<PlayerId>,
}

impl GameStateView {
    /// Project `state` for `viewer`.
    #[must_use]
    pub fn for_viewer(state: &GameState, viewer: PlayerId) -> Self {
        let players = state
            .players
            .iter()
            .map(|player| PlayerView {
                id: player.id,
                name: player.name.clone(),
                rack_size: player.rack_size(),
                rack: (player.id == viewer).then(|| player.rack.clone()),
                initial_meld_met: player.initial_meld_met,
            })
            .collect();

        Self {
            game_id: state.game_id.clone(),
            game_name: state.game_name.clone(),
            players,
            pool_size: state.pool.len(),
            board: state.board.clone(),
            current_player_index: state.current_player_index,
            status: state.status,
            winner_id: state.winner_id,
        }
    }
}
