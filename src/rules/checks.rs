//! Pure rule predicates shared by the engine entry points.
//!
//! Each check reads a snapshot and answers one question; none of them
//! mutate anything. The entry points in
//! [`engine`](crate::rules::engine) compose them in a fixed order, so a
//! move broken in several ways is rejected for the same reason every
//! time.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::core::error::RuleViolation;
use crate::core::player::{Player, PlayerId};
use crate::core::state::{GameState, GameStatus};
use crate::core::tile::Tile;
use crate::melds::{validate_and_price, Meld};

/// Points a seat's first play must reach before it may touch the board
/// freely.
pub const INITIAL_MELD_THRESHOLD: u32 = 30;

/// The game must be running and it must be `player`'s turn.
pub fn turn_owner_ok(state: &GameState, player: PlayerId) -> Result<(), RuleViolation> {
    match state.status {
        GameStatus::WaitingForPlayers => Err(RuleViolation::GameNotStarted),
        GameStatus::Completed => Err(RuleViolation::GameFinished),
        GameStatus::InProgress => {
            if state.current_player_index == player.index() {
                Ok(())
            } else {
                Err(RuleViolation::NotPlayersTurn { player })
            }
        }
    }
}

/// Tiles in the candidate layout that are not already on the board.
///
/// A played layout is the complete desired board, not a delta; the tiles
/// absent from the current board are the ones coming off the player's
/// rack.
#[must_use]
pub fn newly_played(candidate: &[Meld], board: &Vector<Meld>) -> FxHashSet<Tile> {
    let on_board: FxHashSet<Tile> = board
        .iter()
        .flat_map(|meld| meld.tiles().iter().copied())
        .collect();

    candidate
        .iter()
        .flat_map(|meld| meld.tiles().iter().copied())
        .filter(|tile| !on_board.contains(tile))
        .collect()
}

/// Every newly played tile must be on the player's rack.
pub fn owns_tiles(player: &Player, tiles: &FxHashSet<Tile>) -> Result<(), RuleViolation> {
    let rack: FxHashSet<Tile> = player.rack.iter().copied().collect();
    for &tile in tiles {
        if !rack.contains(&tile) {
            return Err(RuleViolation::TileNotOwned { tile });
        }
    }
    Ok(())
}

/// Until a seat has opened, the melds its new tiles land in must together
/// reach [`INITIAL_MELD_THRESHOLD`] points.
///
/// Vacuous once the seat has opened. Melds the player merely left on the
/// board do not count toward the total.
pub fn initial_meld_ok(
    player: &Player,
    newly: &FxHashSet<Tile>,
    candidate: &[Meld],
) -> Result<(), RuleViolation> {
    if player.initial_meld_met {
        return Ok(());
    }

    let mut total = 0u32;
    for meld in candidate {
        if meld.tiles().iter().any(|tile| newly.contains(tile)) {
            total += validate_and_price(meld)?.value;
        }
    }

    if total < INITIAL_MELD_THRESHOLD {
        return Err(RuleViolation::InitialMeldNotMet {
            total,
            required: INITIAL_MELD_THRESHOLD,
        });
    }
    Ok(())
}

/// The pool must still hold a tile to draw.
pub fn pool_nonempty(state: &GameState) -> Result<(), RuleViolation> {
    if state.pool.is_empty() {
        Err(RuleViolation::PoolEmpty)
    } else {
        Ok(())
    }
}

/// A seat wins the moment its rack is empty after having opened.
///
/// The opening condition matters: a seat dealt an empty rack by a buggy
/// caller has not won anything.
#[must_use]
pub fn win(state: &GameState, player: PlayerId) -> bool {
    state
        .player(player)
        .map_or(false, |p| p.rack.is_empty() && p.initial_meld_met)
}
