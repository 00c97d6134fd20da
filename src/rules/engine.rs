//! Game action entry points: join, play, draw, advance.
//!
//! Every entry point reads a snapshot and returns a new one; the input is
//! never mutated. An `Err(RuleViolation)` means nothing happened, so
//! callers retry or report without any rollback. Persistence and
//! transport live elsewhere; this module is the only place game rules are
//! decided.
//!
//! ## Turn shape
//!
//! Playing tiles does not pass the turn. A turn is one or more plays
//! ended by an explicit [`advance_turn`], or a single [`draw`] followed
//! by the same. That keeps rearranging the board across several requests
//! possible within one turn.

use tracing::{debug, info};

use crate::core::action::Action;
use crate::core::error::RuleViolation;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, GameStatus};
use crate::melds::{validate_and_price, Meld};
use crate::rules::checks;

/// Claim the first unnamed seat for `name`.
///
/// Seats are dealt at creation, so joining is purely a naming affair.
/// When the last seat is claimed the game starts, with seat 0 to move.
pub fn join(state: &GameState, name: &str) -> Result<GameState, RuleViolation> {
    match state.status {
        GameStatus::Completed => return Err(RuleViolation::GameFinished),
        GameStatus::InProgress => return Err(RuleViolation::GameFull),
        GameStatus::WaitingForPlayers => {}
    }

    if state
        .players
        .iter()
        .any(|p| p.name.as_deref() == Some(name))
    {
        return Err(RuleViolation::NameTaken {
            name: name.to_string(),
        });
    }

    let Some(seat) = state.players.iter().position(|p| !p.is_seated()) else {
        return Err(RuleViolation::GameFull);
    };

    let mut next = state.clone();
    let mut player = next.players[seat].clone();
    player.name = Some(name.to_string());
    next.players.set(seat, player);

    info!(game_id = %next.game_id, seat, name, "player joined");

    if next.players.iter().all(|p| p.is_seated()) {
        next.status = GameStatus::InProgress;
        next.current_player_index = 0;
        info!(game_id = %next.game_id, "game started");
    }

    Ok(next)
}

/// Lay a complete board layout, moving the player's new tiles off their
/// rack.
///
/// `melds` is the whole desired board. Checks run in a fixed order: turn
/// ownership, at least one new tile, ownership of the new tiles, meld
/// legality, opening threshold. Only then is the board replaced. Winning
/// is checked immediately so an emptied rack completes the game without
/// waiting for a turn advance.
pub fn play_tiles(
    state: &GameState,
    player_id: PlayerId,
    melds: &[Meld],
) -> Result<GameState, RuleViolation> {
    checks::turn_owner_ok(state, player_id)?;

    let newly = checks::newly_played(melds, &state.board);
    if newly.is_empty() {
        return Err(RuleViolation::NoOpMove);
    }

    // turn_owner_ok passed, so the seat index is valid
    let player = &state.players[player_id.index()];
    checks::owns_tiles(player, &newly)?;

    for meld in melds {
        validate_and_price(meld)?;
    }
    checks::initial_meld_ok(player, &newly, melds)?;

    let mut next = state.clone();
    next.board = melds.iter().cloned().collect();

    let mut updated = player.clone();
    updated.rack.retain(|tile| !newly.contains(tile));
    updated.initial_meld_met = true;
    next.players.set(player_id.index(), updated);

    debug!(
        game_id = %next.game_id,
        player = %player_id,
        laid = newly.len(),
        melds = melds.len(),
        "tiles played"
    );

    if checks::win(&next, player_id) {
        next.status = GameStatus::Completed;
        next.winner_id = Some(player_id);
        info!(game_id = %next.game_id, winner = %player_id, "game completed");
    }

    Ok(next)
}

/// Draw one random tile from the pool onto the player's rack.
///
/// The pick comes from the game's embedded RNG, so a replay of the same
/// snapshot draws the same tile.
pub fn draw(state: &GameState, player_id: PlayerId) -> Result<GameState, RuleViolation> {
    checks::turn_owner_ok(state, player_id)?;
    checks::pool_nonempty(state)?;

    let mut next = state.clone();
    let pick = next.rng.gen_range_usize(0..next.pool.len());
    let tile = next.pool.remove(pick);

    let mut player = next.players[player_id.index()].clone();
    player.rack.push_back(tile);
    next.players.set(player_id.index(), player);

    debug!(
        game_id = %next.game_id,
        player = %player_id,
        pool = next.pool.len(),
        "tile drawn"
    );
    Ok(next)
}

/// Pass the turn to the next seat.
///
/// Scans for a winner first: a rack emptied by the closing play ends the
/// game here instead of handing the turn onward. Seats are scanned in
/// order, so the earliest winning seat takes the game.
pub fn advance_turn(state: &GameState) -> Result<GameState, RuleViolation> {
    match state.status {
        GameStatus::WaitingForPlayers => return Err(RuleViolation::GameNotStarted),
        GameStatus::Completed => return Err(RuleViolation::GameFinished),
        GameStatus::InProgress => {}
    }

    let mut next = state.clone();

    for id in PlayerId::all(next.player_count()) {
        if checks::win(&next, id) {
            next.status = GameStatus::Completed;
            next.winner_id = Some(id);
            info!(game_id = %next.game_id, winner = %id, "game completed");
            return Ok(next);
        }
    }

    next.current_player_index = (next.current_player_index + 1) % next.player_count();
    Ok(next)
}

/// Dispatch a submitted [`Action`] to its entry point, with logging.
///
/// Transport layers call this; the typed functions above are for code
/// that already knows what it is doing.
pub fn apply(
    state: &GameState,
    player: PlayerId,
    action: &Action,
) -> Result<GameState, RuleViolation> {
    let result = match action {
        Action::PlayTiles { melds } => play_tiles(state, player, melds),
        Action::Draw => draw(state, player),
    };

    match &result {
        Ok(next) => info!(
            game_id = %next.game_id,
            player = %player,
            action = action.name(),
            "action applied"
        ),
        Err(violation) => debug!(
            game_id = %state.game_id,
            player = %player,
            action = action.name(),
            reason = violation.reason_code(),
            "action rejected"
        ),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(seed: u64) -> GameState {
        let state = GameState::builder(2).build(seed);
        let state = join(&state, "alice").unwrap();
        join(&state, "bob").unwrap()
    }

    #[test]
    fn test_play_requires_started_game() {
        let state = GameState::builder(2).build(42);
        let result = play_tiles(&state, PlayerId::new(0), &[]);
        assert_eq!(result.unwrap_err(), RuleViolation::GameNotStarted);
    }

    #[test]
    fn test_join_fills_seats_then_starts() {
        let state = GameState::builder(2).build(42);
        assert_eq!(state.status, GameStatus::WaitingForPlayers);

        let state = join(&state, "alice").unwrap();
        assert_eq!(state.status, GameStatus::WaitingForPlayers);
        assert_eq!(state.players[0].name.as_deref(), Some("alice"));

        let state = join(&state, "bob").unwrap();
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.current_player_index, 0);
    }

    #[test]
    fn test_join_rejects_duplicate_name() {
        let state = GameState::builder(3).build(42);
        let state = join(&state, "alice").unwrap();
        assert_eq!(
            join(&state, "alice").unwrap_err(),
            RuleViolation::NameTaken {
                name: "alice".to_string(),
            }
        );
    }

    #[test]
    fn test_join_rejects_running_game() {
        let state = started(42);
        assert_eq!(join(&state, "carol").unwrap_err(), RuleViolation::GameFull);
    }

    #[test]
    fn test_draw_moves_one_tile_and_keeps_turn() {
        let state = started(42);
        let before_pool = state.pool.len();
        let before_rack = state.players[0].rack_size();

        let next = draw(&state, PlayerId::new(0)).unwrap();

        assert_eq!(next.pool.len(), before_pool - 1);
        assert_eq!(next.players[0].rack_size(), before_rack + 1);
        assert_eq!(next.current_player_index, 0);
        assert!(next.tile_conservation_holds());

        // Input snapshot untouched.
        assert_eq!(state.pool.len(), before_pool);
    }

    #[test]
    fn test_draw_is_deterministic_per_snapshot() {
        let state = started(42);
        let a = draw(&state, PlayerId::new(0)).unwrap();
        let b = draw(&state, PlayerId::new(0)).unwrap();
        assert_eq!(a.players[0].rack, b.players[0].rack);
    }

    #[test]
    fn test_draw_rejects_wrong_seat() {
        let state = started(42);
        assert_eq!(
            draw(&state, PlayerId::new(1)).unwrap_err(),
            RuleViolation::NotPlayersTurn {
                player: PlayerId::new(1),
            }
        );
    }

    #[test]
    fn test_advance_turn_wraps() {
        let state = started(42);
        let state = advance_turn(&state).unwrap();
        assert_eq!(state.current_player_index, 1);
        let state = advance_turn(&state).unwrap();
        assert_eq!(state.current_player_index, 0);
    }

    #[test]
    fn test_advance_turn_requires_started_game() {
        let state = GameState::builder(2).build(42);
        assert_eq!(
            advance_turn(&state).unwrap_err(),
            RuleViolation::GameNotStarted
        );
    }

    #[test]
    fn test_apply_dispatches() {
        let state = started(42);

        let next = apply(&state, PlayerId::new(0), &Action::Draw).unwrap();
        assert_eq!(next.pool.len(), state.pool.len() - 1);

        let rejected = apply(&state, PlayerId::new(0), &Action::PlayTiles { melds: vec![] });
        assert_eq!(rejected.unwrap_err(), RuleViolation::NoOpMove);
    }
}
