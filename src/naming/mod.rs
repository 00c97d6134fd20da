//! Friendly game names.
//!
//! New games get a human-readable name like "Siege of Gondor" so lobby
//! lists are tellable apart without reading ids. Names come off a
//! dedicated RNG context stream, so drawing a name never perturbs the
//! shuffle-and-draw sequence of the game that asked for it.

use crate::core::rng::GameRng;

const ACTIONS: [&str; 22] = [
    "Siege",
    "Defense",
    "Quest",
    "Trial",
    "Fall",
    "Reckoning",
    "Incursion",
    "Blockade",
    "Extraction",
    "Breach",
    "Containment",
    "Battle",
    "Challenge",
    "War",
    "Conquest",
    "Showdown",
    "Rumble",
    "Uprising",
    "Gambit",
    "Clash",
    "Tournament",
    "Race",
];

const PREPOSITIONS: [&str; 5] = ["of", "at", "for", "on", "in"];

const LOCATIONS: [&str; 22] = [
    "Gondor",
    "the Black Forest",
    "Dragon's Peak",
    "Ironhold",
    "the Whispering Caves",
    "Mars",
    "Sector 7G",
    "the Orion Nebula",
    "Titan Station",
    "Alpha Centauri",
    "Barcelona",
    "Madrid",
    "Seville",
    "Tokyo",
    "Cairo",
    "London",
    "Moscow",
    "Berlin",
    "Brazil",
    "Egypt",
    "Japan",
    "New York",
];

/// Draws "action preposition location" names from a seeded stream.
#[derive(Clone, Debug)]
pub struct GameNameGenerator {
    rng: GameRng,
}

impl GameNameGenerator {
    /// Create a generator over the given RNG stream.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Produce the next name on the stream.
    pub fn generate(&mut self) -> String {
        let action = ACTIONS[self.rng.gen_range_usize(0..ACTIONS.len())];
        let preposition = PREPOSITIONS[self.rng.gen_range_usize(0..PREPOSITIONS.len())];
        let location = LOCATIONS[self.rng.gen_range_usize(0..LOCATIONS.len())];
        format!("{action} {preposition} {location}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_deterministic_per_seed() {
        let mut a = GameNameGenerator::new(GameRng::new(42));
        let mut b = GameNameGenerator::new(GameRng::new(42));

        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_name_is_built_from_word_lists() {
        let mut generator = GameNameGenerator::new(GameRng::new(7));
        let name = generator.generate();

        let mut parts = name.splitn(2, ' ');
        let action = parts.next().unwrap();
        let rest = parts.next().unwrap();

        assert!(ACTIONS.contains(&action), "unexpected action in `{name}`");
        assert!(
            PREPOSITIONS
                .iter()
                .any(|p| rest.starts_with(&format!("{p} "))),
            "unexpected preposition in `{name}`"
        );
        assert!(
            LOCATIONS.iter().any(|l| rest.ends_with(l)),
            "unexpected location in `{name}`"
        );
    }

    #[test]
    fn test_stream_moves_between_draws() {
        let mut generator = GameNameGenerator::new(GameRng::new(3));
        let names: Vec<String> = (0..20).map(|_| generator.generate()).collect();

        // 22 * 5 * 22 combinations; twenty draws repeating every time
        // would mean the stream is stuck.
        let distinct: std::collections::HashSet<&String> = names.iter().collect();
        assert!(distinct.len() > 1);
    }
}
