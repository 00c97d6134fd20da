//! Tile identities and the fixed 106-tile universe.
//!
//! ## Identity
//!
//! A [`Tile`] is a pure value: either a numbered tile (number 1-13, one of
//! four colors, copy A or B) or one of the two jokers (copy A or B). Every
//! (number, color) pair exists exactly twice, so the universe holds
//! 13 × 4 × 2 + 2 = 106 distinct identities. There is no tile object with
//! identity beyond these encoded fields.
//!
//! ## Wire encoding
//!
//! Tiles share a compact textual id with clients:
//! - Numbered: `<number><color-code><copy>`, so `"10ra"` is red 10, copy A
//! - Joker: `j<copy>`, so `"ja"` is joker copy A
//!
//! Color codes: `k` black, `r` red, `b` blue, `o` orange. The same order
//! (black, red, blue, orange) is the canonical color order used when
//! sorting group melds.
//!
//! ```
//! use rummikub_engine::core::{Color, CopyId, Tile};
//!
//! let tile = Tile::numbered(10, Color::Red, CopyId::A);
//! assert_eq!(tile.to_string(), "10ra");
//! assert_eq!("10ra".parse::<Tile>().unwrap(), tile);
//! assert!("ja".parse::<Tile>().unwrap().is_joker());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct tiles in a full set.
pub const UNIVERSE_SIZE: usize = 106;

/// Tile colors, declared in canonical order.
///
/// The derived `Ord` follows declaration order, so sorting by `Color`
/// yields black, red, blue, orange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Blue,
    Orange,
}

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Color; 4] = [Color::Black, Color::Red, Color::Blue, Color::Orange];

    /// Single-character wire code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::Black => 'k',
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Orange => 'o',
        }
    }

    /// Parse a wire code back into a color.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Color> {
        match code {
            'k' => Some(Color::Black),
            'r' => Some(Color::Red),
            'b' => Some(Color::Blue),
            'o' => Some(Color::Orange),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Orange => "orange",
        };
        write!(f, "{name}")
    }
}

/// Distinguishes the two physical copies of each face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyId {
    A,
    B,
}

impl CopyId {
    /// Both copies, in wire order.
    pub const ALL: [CopyId; 2] = [CopyId::A, CopyId::B];

    /// Single-character wire code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            CopyId::A => 'a',
            CopyId::B => 'b',
        }
    }

    /// Parse a wire code back into a copy id.
    #[must_use]
    pub const fn from_code(code: char) -> Option<CopyId> {
        match code {
            'a' => Some(CopyId::A),
            'b' => Some(CopyId::B),
            _ => None,
        }
    }
}

/// A tile id that does not match the wire grammar.
///
/// Parse failures are caller programming errors (or malformed client
/// input), not rule violations; they are kept separate from the rule
/// taxonomy on purpose.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseTileError {
    #[error("tile id `{0}` is malformed")]
    Malformed(String),
    #[error("tile number {0} out of range 1-13")]
    NumberOutOfRange(u8),
    #[error("unknown color code `{0}`")]
    UnknownColor(char),
    #[error("copy must be `a` or `b`, got `{0}`")]
    UnknownCopy(char),
}

/// One physical tile.
///
/// A closed sum: every tile is either numbered or a joker, and validation
/// code matches exhaustively; there is no "unknown kind" branch.
///
/// Serialized as its wire id (`"10ra"`, `"ja"`), so snapshots and client
/// payloads use the same representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Tile {
    Numbered { number: u8, color: Color, copy: CopyId },
    Joker { copy: CopyId },
}

impl Tile {
    /// Create a numbered tile.
    ///
    /// Panics if `number` is outside 1-13; constructing an impossible tile
    /// is a programming error, unlike parsing untrusted input.
    #[must_use]
    pub fn numbered(number: u8, color: Color, copy: CopyId) -> Self {
        assert!(
            (1..=13).contains(&number),
            "tile number must be 1-13, got {number}"
        );
        Tile::Numbered { number, color, copy }
    }

    /// Create a joker.
    #[must_use]
    pub const fn joker(copy: CopyId) -> Self {
        Tile::Joker { copy }
    }

    /// Is this one of the two jokers?
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Tile::Joker { .. })
    }

    /// Face number, `None` for jokers.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Tile::Numbered { number, .. } => Some(number),
            Tile::Joker { .. } => None,
        }
    }

    /// Color, `None` for jokers.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Tile::Numbered { color, .. } => Some(color),
            Tile::Joker { .. } => None,
        }
    }

    /// Which of the two physical copies this is.
    #[must_use]
    pub const fn copy(self) -> CopyId {
        match self {
            Tile::Numbered { copy, .. } | Tile::Joker { copy } => copy,
        }
    }

    /// Point value of the tile on its own.
    ///
    /// Jokers have no standalone value; it depends on the meld they sit
    /// in, and only meld validation may resolve it.
    pub const fn face_value(self) -> Result<u8, AmbiguousValue> {
        match self {
            Tile::Numbered { number, .. } => Ok(number),
            Tile::Joker { .. } => Err(AmbiguousValue),
        }
    }

    /// Every tile in a physical set: two copies of each number in each
    /// color, then the two jokers. Exactly [`UNIVERSE_SIZE`] entries, all
    /// distinct.
    #[must_use]
    pub fn full_universe() -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(UNIVERSE_SIZE);
        for color in Color::ALL {
            for number in 1..=13 {
                for copy in CopyId::ALL {
                    tiles.push(Tile::numbered(number, color, copy));
                }
            }
        }
        for copy in CopyId::ALL {
            tiles.push(Tile::joker(copy));
        }
        tiles
    }
}

/// Asking a joker for its face value; resolve it through meld validation
/// instead.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("joker value is context-dependent")]
pub struct AmbiguousValue;

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tile::Numbered { number, color, copy } => {
                write!(f, "{number}{}{}", color.code(), copy.code())
            }
            Tile::Joker { copy } => write!(f, "j{}", copy.code()),
        }
    }
}

impl std::str::FromStr for Tile {
    type Err = ParseTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseTileError::Malformed(s.to_string());

        if let Some(rest) = s.strip_prefix('j') {
            let mut chars = rest.chars();
            let copy_ch = chars.next().ok_or_else(malformed)?;
            if chars.next().is_some() {
                return Err(malformed());
            }
            let copy = CopyId::from_code(copy_ch).ok_or(ParseTileError::UnknownCopy(copy_ch))?;
            return Ok(Tile::joker(copy));
        }

        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 3 {
            return Err(malformed());
        }
        let copy_ch = chars[chars.len() - 1];
        let color_ch = chars[chars.len() - 2];
        let number: u8 = chars[..chars.len() - 2]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| malformed())?;
        if !(1..=13).contains(&number) {
            return Err(ParseTileError::NumberOutOfRange(number));
        }
        let color = Color::from_code(color_ch).ok_or(ParseTileError::UnknownColor(color_ch))?;
        let copy = CopyId::from_code(copy_ch).ok_or(ParseTileError::UnknownCopy(copy_ch))?;
        Ok(Tile::Numbered { number, color, copy })
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.to_string()
    }
}

impl TryFrom<String> for Tile {
    type Error = ParseTileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
