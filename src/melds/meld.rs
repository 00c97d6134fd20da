//! Meld shapes and their canonical form.
//!
//! ## Canonical order
//!
//! Two clients describing the same physical meld must produce the same
//! meld. Groups get there by construction: tiles are re-sorted into
//! canonical color order (black, red, blue, orange) with jokers last, in
//! the order given. Runs are inherently ordered, so their tile order is
//! preserved exactly as submitted; a joker's position in the sequence is
//! what it means.
//!
//! The canonical id joins tile ids with `-` and identifies a meld across
//! snapshots and client payloads.
//!
//! ```
//! use rummikub_engine::melds::{Meld, MeldKind};
//!
//! let group = Meld::new(
//!     MeldKind::Group,
//!     ["7ba", "7ka", "7ra"].map(|id| id.parse().unwrap()),
//! );
//! assert_eq!(group.canonical_id(), "7ka-7ra-7ba");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::tile::Tile;

/// The two legal meld shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeldKind {
    /// 3-4 tiles of one number in distinct colors.
    Group,
    /// 3+ consecutive numbers in one color.
    Run,
}

impl std::fmt::Display for MeldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeldKind::Group => write!(f, "group"),
            MeldKind::Run => write!(f, "run"),
        }
    }
}

/// A group or run of concrete tiles, held in canonical order.
///
/// Tiles are private: the only way in is [`Meld::new`], which
/// canonicalizes, so two melds over the same tiles compare equal and hash
/// alike no matter how their tiles were listed. Construction does not
/// validate legality; an impossible shape is still a value, and judgment
/// belongs to [`validate_and_price`](crate::melds::validate_and_price).
///
/// Deserialization funnels through the same constructor, so melds read
/// back from snapshots or client payloads are canonical too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MeldWire")]
pub struct Meld {
    pub kind: MeldKind,
    tiles: SmallVec<[Tile; 4]>,
}

impl Meld {
    /// Build a meld, canonicalizing tile order for groups.
    ///
    /// The sort is stable, so jokers keep their relative submitted order
    /// behind the numbered tiles.
    #[must_use]
    pub fn new(kind: MeldKind, tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut tiles: SmallVec<[Tile; 4]> = tiles.into_iter().collect();
        if kind == MeldKind::Group {
            tiles.sort_by_key(|tile| (tile.is_joker(), tile.color()));
        }
        Self { kind, tiles }
    }

    /// Shorthand for a group meld.
    #[must_use]
    pub fn group(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self::new(MeldKind::Group, tiles)
    }

    /// Shorthand for a run meld.
    #[must_use]
    pub fn run(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self::new(MeldKind::Run, tiles)
    }

    /// Tiles in canonical order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles in the meld.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Is the meld empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Stable identity: tile ids in canonical order, joined by `-`.
    #[must_use]
    pub fn canonical_id(&self) -> String {
        let ids: Vec<String> = self.tiles.iter().map(ToString::to_string).collect();
        ids.join("-")
    }
}

/// Raw wire shape; real melds are built through [`Meld::new`].
#[derive(Deserialize)]
struct MeldWire {
    kind: MeldKind,
    tiles: Vec<Tile>,
}

impl From<MeldWire> for Meld {
    fn from(wire: MeldWire) -> Self {
        Meld::new(wire.kind, wire.tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(ids: &[&str]) -> Vec<Tile> {
        ids.iter().map(|id| id.parse().unwrap()).collect()
    }

    #[test]
    fn test_group_sorts_into_color_order() {
        let meld = Meld::group(tiles(&["7ba", "7ka", "7ra"]));
        assert_eq!(meld.canonical_id(), "7ka-7ra-7ba");

        let meld = Meld::group(tiles(&["8oa", "8ba", "8ra", "8ka"]));
        assert_eq!(meld.canonical_id(), "8ka-8ra-8ba-8oa");
    }

    #[test]
    fn test_group_jokers_sort_last_keeping_submitted_order() {
        let meld = Meld::group(tiles(&["ja", "7ba", "7ra"]));
        assert_eq!(meld.canonical_id(), "7ra-7ba-ja");

        let meld = Meld::group(tiles(&["jb", "9ba", "ja"]));
        assert_eq!(meld.canonical_id(), "9ba-jb-ja");
    }

    #[test]
    fn test_run_preserves_submitted_order() {
        let meld = Meld::run(tiles(&["5ra", "ja", "7ra"]));
        assert_eq!(meld.canonical_id(), "5ra-ja-7ra");

        // Even a nonsensical order survives; legality is the validator's
        // problem, identity is not.
        let meld = Meld::run(tiles(&["7ra", "5ra", "6ra"]));
        assert_eq!(meld.canonical_id(), "7ra-5ra-6ra");
    }

    #[test]
    fn test_same_tiles_same_meld() {
        let a = Meld::group(tiles(&["7ka", "7ra", "7ba"]));
        let b = Meld::group(tiles(&["7ba", "7ra", "7ka"]));
        assert_eq!(a, b);
        assert_eq!(a.canonical_id(), b.canonical_id());
    }

    #[test]
    fn test_meld_kind_display() {
        assert_eq!(MeldKind::Group.to_string(), "group");
        assert_eq!(MeldKind::Run.to_string(), "run");
    }

    #[test]
    fn test_deserialization_canonicalizes() {
        let json = r#"{"kind": "group", "tiles": ["7ba", "7ka", "7ra"]}"#;
        let meld: Meld = serde_json::from_str(json).unwrap();
        assert_eq!(meld.canonical_id(), "7ka-7ra-7ba");
    }

    #[test]
    fn test_serde_round_trip() {
        let meld = Meld::run(tiles(&["10ka", "ja", "12ka", "13ka"]));
        let json = serde_json::to_string(&meld).unwrap();
        let back: Meld = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meld);
        assert_eq!(back.canonical_id(), "10ka-ja-12ka-13ka");
    }
}
