//! The closed taxonomy of rule violations.
//!
//! Every way an action can be rejected is one variant of [`RuleViolation`].
//! Engine entry points return `Result<GameState, RuleViolation>`; a
//! violation means the input state is untouched and nothing was mutated.
//!
//! Each variant carries a stable machine-readable [`reason_code`] so
//! transport layers can map rejections without matching on display text.
//!
//! [`reason_code`]: RuleViolation::reason_code

use thiserror::Error;

use crate::core::tile::{Color, Tile};
use crate::core::player::PlayerId;
use crate::melds::MeldKind;

/// A rejected action, with enough payload to say why.
///
/// Meld-structure variants come out of validation, ownership and turn
/// variants out of the pre-checks, and lifecycle variants out of the
/// join/draw/advance paths. The enum is exhaustive: rules code never
/// invents a stringly-typed failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RuleViolation {
    /// Meld has too few or too many tiles for its kind.
    #[error("{kind} of {got} tiles is out of size bounds")]
    SizeError { kind: MeldKind, got: usize },

    /// Group tiles do not all share one number.
    #[error("group tiles must all share one number")]
    MixedNumbers,

    /// Group repeats a color.
    #[error("group already contains a {color} tile")]
    ColorDuplication { color: Color },

    /// Group of jokers only; no number to resolve them against.
    #[error("group needs at least one numbered tile")]
    AmbiguousGroup,

    /// More jokers than free colors remain in the group.
    #[error("{jokers} jokers but only {available} free colors")]
    TooManyJokers { jokers: usize, available: usize },

    /// Run tiles do not all share one color.
    #[error("run tiles must all share one color")]
    MixedColors,

    /// Run of jokers only; no anchor to resolve positions against.
    #[error("run needs at least one numbered tile")]
    AmbiguousRun,

    /// Run numbers do not ascend by one per position.
    #[error("run tiles must be consecutive")]
    NonConsecutive,

    /// Resolved run would leave the 1-13 board.
    #[error("run would span {start}..={end}, outside 1-13")]
    OutOfRange { start: i32, end: i32 },

    /// Player tried to play a tile not on their rack.
    #[error("tile {tile} is not on the player's rack")]
    TileNotOwned { tile: Tile },

    /// First play worth less than the opening threshold.
    #[error("initial meld worth {total}, needs at least {required}")]
    InitialMeldNotMet { total: u32, required: u32 },

    /// Play that leaves the board exactly as it was.
    #[error("cannot play without placing any new tiles")]
    NoOpMove,

    /// Action from a player whose turn it is not.
    #[error("it is not {player}'s turn")]
    NotPlayersTurn { player: PlayerId },

    /// Action against a game still waiting for players.
    #[error("game has not started")]
    GameNotStarted,

    /// Action against a completed game.
    #[error("game is already finished")]
    GameFinished,

    /// Draw from an empty pool.
    #[error("pool is empty")]
    PoolEmpty,

    /// Join with a name already seated.
    #[error("name `{name}` is already taken")]
    NameTaken { name: String },

    /// Join when every seat is filled or the game is underway.
    #[error("game is full")]
    GameFull,

    /// Snapshot changed underneath a store between read and write.
    ///
    /// Produced by persistence layers, never by the rules themselves; it
    /// lives here so every rejection a client can see shares one taxonomy.
    #[error("game was modified concurrently")]
    ConcurrentModificationError,
}

impl RuleViolation {
    /// Stable kebab-case code for transport layers.
    #[must_use]
    pub const fn reason_code(&self) -> &'static str {
        match self {
            RuleViolation::SizeError { .. } => "size",
            RuleViolation::MixedNumbers => "mixed-numbers",
            RuleViolation::ColorDuplication { .. } => "color-duplication",
            RuleViolation::AmbiguousGroup => "ambiguous-group",
            RuleViolation::TooManyJokers { .. } => "too-many-jokers",
            RuleViolation::MixedColors => "mixed-colors",
            RuleViolation::AmbiguousRun => "ambiguous-run",
            RuleViolation::NonConsecutive => "non-consecutive",
            RuleViolation::OutOfRange { .. } => "invalid-range",
            RuleViolation::TileNotOwned { .. } => "tile-not-owned",
            RuleViolation::InitialMeldNotMet { .. } => "initial-meld-not-met",
            RuleViolation::NoOpMove => "no-op-move",
            RuleViolation::NotPlayersTurn { .. } => "not-players-turn",
            RuleViolation::GameNotStarted => "game-not-started",
            RuleViolation::GameFinished => "game-finished",
            RuleViolation::PoolEmpty => "pool-empty",
            RuleViolation::NameTaken { .. } => "name-taken",
            RuleViolation::GameFull => "game-full",
            RuleViolation::ConcurrentModificationError => "concurrent-modification",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::CopyId;

    #[test]
    fn test_display_messages() {
        let violation = RuleViolation::SizeError {
            kind: MeldKind::Group,
            got: 5,
        };
        assert_eq!(violation.to_string(), "group of 5 tiles is out of size bounds");

        let violation = RuleViolation::InitialMeldNotMet {
            total: 22,
            required: 30,
        };
        assert_eq!(
            violation.to_string(),
            "initial meld worth 22, needs at least 30"
        );

        assert_eq!(
            RuleViolation::NoOpMove.to_string(),
            "cannot play without placing any new tiles"
        );
    }

    #[test]
    fn test_reason_codes_are_stable() {
        assert_eq!(
            RuleViolation::SizeError {
                kind: MeldKind::Run,
                got: 2,
            }
            .reason_code(),
            "size"
        );
        assert_eq!(RuleViolation::MixedNumbers.reason_code(), "mixed-numbers");
        assert_eq!(
            RuleViolation::ColorDuplication { color: Color::Red }.reason_code(),
            "color-duplication"
        );
        assert_eq!(
            RuleViolation::OutOfRange { start: 0, end: 2 }.reason_code(),
            "invalid-range"
        );
        assert_eq!(
            RuleViolation::TileNotOwned {
                tile: Tile::joker(CopyId::A),
            }
            .reason_code(),
            "tile-not-owned"
        );
        assert_eq!(RuleViolation::GameNotStarted.reason_code(), "game-not-started");
        assert_eq!(RuleViolation::GameFull.reason_code(), "game-full");
        assert_eq!(
            RuleViolation::ConcurrentModificationError.reason_code(),
            "concurrent-modification"
        );
    }
}
