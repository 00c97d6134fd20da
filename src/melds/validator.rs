//! Meld legality and pricing.
//!
//! ## Judgment
//!
//! [`validate_and_price`] is the single authority on whether a meld is
//! legal. It answers three questions in one pass: is the shape valid, what
//! is it worth, and which number does each joker stand for. Callers never
//! re-derive joker meanings; they read them out of the returned
//! [`MeldPricing`].
//!
//! ## Joker resolution
//!
//! - In a group, every joker stands for the group's shared number.
//! - In a run, a joker stands for the number at its position: the first
//!   numbered tile anchors the sequence, and every position resolves from
//!   that anchor.
//!
//! Resolution is total for a valid meld. A meld where a joker's meaning
//! cannot be pinned down (all jokers, no anchor) is rejected as ambiguous
//! rather than guessed at.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::error::RuleViolation;
use crate::core::tile::{Color, Tile};
use crate::melds::meld::{Meld, MeldKind};

/// Smallest and largest legal group.
const GROUP_SIZE_RANGE: std::ops::RangeInclusive<usize> = 3..=4;
/// Smallest legal run; the 1-13 board bounds the other end.
const MIN_RUN_SIZE: usize = 3;

/// What a valid meld is worth, and what its jokers mean.
#[derive(Clone, Debug, PartialEq)]
pub struct MeldPricing {
    /// Sum of face values, jokers counted as the number they stand for.
    pub value: u32,
    /// The number each joker in the meld resolves to.
    pub joker_assignment: FxHashMap<Tile, u8>,
}

/// Judge one meld: shape legality, point value, joker meanings.
///
/// Checks run in a fixed order (size, composition, arrangement, range),
/// so a meld broken in several ways reports the same violation every
/// time.
pub fn validate_and_price(meld: &Meld) -> Result<MeldPricing, RuleViolation> {
    match meld.kind {
        MeldKind::Group => price_group(meld),
        MeldKind::Run => price_run(meld),
    }
}

fn price_group(meld: &Meld) -> Result<MeldPricing, RuleViolation> {
    let len = meld.len();
    if !GROUP_SIZE_RANGE.contains(&len) {
        return Err(RuleViolation::SizeError {
            kind: MeldKind::Group,
            got: len,
        });
    }

    let mut numbered: SmallVec<[(u8, Color); 4]> = SmallVec::new();
    let mut jokers: SmallVec<[Tile; 2]> = SmallVec::new();
    for &tile in meld.tiles() {
        match tile {
            Tile::Numbered { number, color, .. } => numbered.push((number, color)),
            Tile::Joker { .. } => jokers.push(tile),
        }
    }

    let Some(&(group_number, _)) = numbered.first() else {
        return Err(RuleViolation::AmbiguousGroup);
    };
    if numbered.iter().any(|&(number, _)| number != group_number) {
        return Err(RuleViolation::MixedNumbers);
    }

    let mut used: SmallVec<[Color; 4]> = SmallVec::new();
    for &(_, color) in &numbered {
        if used.contains(&color) {
            return Err(RuleViolation::ColorDuplication { color });
        }
        used.push(color);
    }

    let available = Color::ALL.len() - used.len();
    if jokers.len() > available {
        return Err(RuleViolation::TooManyJokers {
            jokers: jokers.len(),
            available,
        });
    }

    let joker_assignment = jokers.iter().map(|&joker| (joker, group_number)).collect();
    Ok(MeldPricing {
        value: u32::from(group_number) * len as u32,
        joker_assignment,
    })
}

fn price_run(meld: &Meld) -> Result<MeldPricing, RuleViolation> {
    let len = meld.len();
    if len < MIN_RUN_SIZE {
        return Err(RuleViolation::SizeError {
            kind: MeldKind::Run,
            got: len,
        });
    }

    let mut numbered: SmallVec<[(usize, u8, Color); 13]> = SmallVec::new();
    for (pos, &tile) in meld.tiles().iter().enumerate() {
        if let Tile::Numbered { number, color, .. } = tile {
            numbered.push((pos, number, color));
        }
    }

    let Some(&(anchor_pos, anchor_number, run_color)) = numbered.first() else {
        return Err(RuleViolation::AmbiguousRun);
    };
    if numbered.iter().any(|&(_, _, color)| color != run_color) {
        return Err(RuleViolation::MixedColors);
    }

    // The first numbered tile fixes what position 0 stands for; every
    // other numbered tile must agree with it.
    let start = i32::from(anchor_number) - anchor_pos as i32;
    for &(pos, number, _) in &numbered {
        if i32::from(number) != start + pos as i32 {
            return Err(RuleViolation::NonConsecutive);
        }
    }

    let end = start + len as i32 - 1;
    if start < 1 || end > 13 {
        return Err(RuleViolation::OutOfRange { start, end });
    }

    let joker_assignment = meld
        .tiles()
        .iter()
        .enumerate()
        .filter(|(_, tile)| tile.is_joker())
        .map(|(pos, &tile)| (tile, (start + pos as i32) as u8))
        .collect();

    Ok(MeldPricing {
        value: (start..=end).sum::<i32>() as u32,
        joker_assignment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(ids: &[&str]) -> Meld {
        Meld::group(ids.iter().map(|id| id.parse().unwrap()))
    }

    fn run(ids: &[&str]) -> Meld {
        Meld::run(ids.iter().map(|id| id.parse().unwrap()))
    }

    fn tile(id: &str) -> Tile {
        id.parse().unwrap()
    }

    #[test]
    fn test_valid_group_of_three() {
        let pricing = validate_and_price(&group(&["7ka", "7ra", "7ba"])).unwrap();
        assert_eq!(pricing.value, 21);
        assert!(pricing.joker_assignment.is_empty());
    }

    #[test]
    fn test_valid_group_of_four() {
        let pricing = validate_and_price(&group(&["8ka", "8ra", "8ba", "8oa"])).unwrap();
        assert_eq!(pricing.value, 32);
    }

    #[test]
    fn test_group_with_joker() {
        let pricing = validate_and_price(&group(&["7ra", "7ba", "ja"])).unwrap();
        assert_eq!(pricing.value, 21);
        assert_eq!(pricing.joker_assignment.get(&tile("ja")), Some(&7));
    }

    #[test]
    fn test_group_with_two_jokers() {
        let pricing = validate_and_price(&group(&["11ka", "11oa", "ja", "jb"])).unwrap();
        assert_eq!(pricing.value, 44);
        assert_eq!(pricing.joker_assignment.get(&tile("ja")), Some(&11));
        assert_eq!(pricing.joker_assignment.get(&tile("jb")), Some(&11));
    }

    #[test]
    fn test_group_size_bounds() {
        assert_eq!(
            validate_and_price(&group(&["7ka", "7ra"])),
            Err(RuleViolation::SizeError {
                kind: MeldKind::Group,
                got: 2,
            })
        );
        assert_eq!(
            validate_and_price(&group(&["7ka", "7ra", "7ba", "7oa", "ja"])),
            Err(RuleViolation::SizeError {
                kind: MeldKind::Group,
                got: 5,
            })
        );
    }

    #[test]
    fn test_group_mixed_numbers() {
        assert_eq!(
            validate_and_price(&group(&["7ka", "8ra", "7ba"])),
            Err(RuleViolation::MixedNumbers)
        );
    }

    #[test]
    fn test_group_color_duplication() {
        assert_eq!(
            validate_and_price(&group(&["7ka", "7kb", "7ba"])),
            Err(RuleViolation::ColorDuplication { color: Color::Black })
        );
    }

    #[test]
    fn test_group_of_only_jokers_is_ambiguous() {
        assert_eq!(
            validate_and_price(&group(&["ja", "jb", "ja"])),
            Err(RuleViolation::AmbiguousGroup)
        );
    }

    #[test]
    fn test_valid_run() {
        let pricing = validate_and_price(&run(&["5ra", "6ra", "7ra"])).unwrap();
        assert_eq!(pricing.value, 18);
        assert!(pricing.joker_assignment.is_empty());
    }

    #[test]
    fn test_run_with_joker_in_middle() {
        let pricing = validate_and_price(&run(&["5ra", "ja", "7ra"])).unwrap();
        assert_eq!(pricing.value, 18);
        assert_eq!(pricing.joker_assignment.get(&tile("ja")), Some(&6));
    }

    #[test]
    fn test_run_with_leading_joker() {
        let pricing = validate_and_price(&run(&["ja", "6ba", "7ba", "8ba"])).unwrap();
        assert_eq!(pricing.value, 26);
        assert_eq!(pricing.joker_assignment.get(&tile("ja")), Some(&5));
    }

    #[test]
    fn test_run_with_trailing_joker() {
        let pricing = validate_and_price(&run(&["11oa", "12oa", "jb"])).unwrap();
        assert_eq!(pricing.value, 36);
        assert_eq!(pricing.joker_assignment.get(&tile("jb")), Some(&13));
    }

    #[test]
    fn test_run_too_short() {
        assert_eq!(
            validate_and_price(&run(&["5ra", "6ra"])),
            Err(RuleViolation::SizeError {
                kind: MeldKind::Run,
                got: 2,
            })
        );
    }

    #[test]
    fn test_run_mixed_colors() {
        assert_eq!(
            validate_and_price(&run(&["5ra", "6ba", "7ra"])),
            Err(RuleViolation::MixedColors)
        );
    }

    #[test]
    fn test_run_non_consecutive() {
        assert_eq!(
            validate_and_price(&run(&["5ra", "6ra", "8ra"])),
            Err(RuleViolation::NonConsecutive)
        );
        assert_eq!(
            validate_and_price(&run(&["5ra", "ja", "8ra"])),
            Err(RuleViolation::NonConsecutive)
        );
    }

    #[test]
    fn test_run_of_only_jokers_is_ambiguous() {
        assert_eq!(
            validate_and_price(&run(&["ja", "jb", "ja"])),
            Err(RuleViolation::AmbiguousRun)
        );
    }

    #[test]
    fn test_run_cannot_extend_below_one() {
        assert_eq!(
            validate_and_price(&run(&["ja", "1ra", "2ra"])),
            Err(RuleViolation::OutOfRange { start: 0, end: 2 })
        );
    }

    #[test]
    fn test_run_cannot_extend_past_thirteen() {
        assert_eq!(
            validate_and_price(&run(&["12ra", "13ra", "ja"])),
            Err(RuleViolation::OutOfRange { start: 12, end: 14 })
        );
    }

    #[test]
    fn test_run_at_board_edges_is_legal() {
        let low = validate_and_price(&run(&["1ka", "2ka", "3ka"])).unwrap();
        assert_eq!(low.value, 6);

        let high = validate_and_price(&run(&["11ba", "12ba", "13ba"])).unwrap();
        assert_eq!(high.value, 36);
    }

    #[test]
    fn test_full_color_run_prices_whole_ladder() {
        let ids: Vec<String> = (1..=13).map(|n| format!("{n}ka")).collect();
        let meld = run(&ids.iter().map(String::as_str).collect::<Vec<_>>());
        let pricing = validate_and_price(&meld).unwrap();
        assert_eq!(pricing.value, 91);
    }

    #[test]
    fn test_duplicate_tile_in_run_reads_as_non_consecutive() {
        assert_eq!(
            validate_and_price(&run(&["5ra", "5ra", "6ra"])),
            Err(RuleViolation::NonConsecutive)
        );
    }
}
