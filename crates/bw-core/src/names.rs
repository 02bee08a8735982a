//! Beast name tables.
//!
//! A beast is named "The {adjective} {creature} of {place}", one roll on
//! each table.

use crate::error::CoreResult;
use crate::random::RandomSource;

/// First table: what the beast looks like.
pub const ADJECTIVES: [&str; 8] = [
    "Black", "Marsh", "Moon", "Blood", "Wild", "Bone", "Grave", "Spider",
];

/// Second table: what the beast is.
pub const CREATURES: [&str; 8] = [
    "Wolf", "Grim", "Hag", "Goat", "Worm", "Barghest", "Fiend", "Banshee",
];

/// Third table: where it was first sighted.
pub const PLACES: [&str; 8] = [
    "Westminster",
    "Hogesdon",
    "Moorgate",
    "Lambton",
    "Blackfriars",
    "Sockburn",
    "Southwark",
    "Whitechapel",
];

/// Roll a beast name, consuming three draws.
pub fn roll_beast_name(rng: &mut RandomSource) -> CoreResult<String> {
    let adjective = rng.random_choice(&ADJECTIVES)?;
    let creature = rng.random_choice(&CREATURES)?;
    let place = rng.random_choice(&PLACES)?;
    Ok(format!("The {adjective} {creature} of {place}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_has_expected_shape() {
        let mut rng = RandomSource::seeded(42);
        let name = roll_beast_name(&mut rng).unwrap();
        assert!(name.starts_with("The "));
        assert!(name.contains(" of "));
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn same_seed_same_name() {
        let a = roll_beast_name(&mut RandomSource::seeded(9)).unwrap();
        let b = roll_beast_name(&mut RandomSource::seeded(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_part_comes_from_its_table() {
        let mut rng = RandomSource::seeded(5);
        for _ in 0..50 {
            let name = roll_beast_name(&mut rng).unwrap();
            let rest = name.strip_prefix("The ").unwrap();
            let (words, place) = rest.split_once(" of ").unwrap();
            let (adjective, creature) = words.split_once(' ').unwrap();
            assert!(ADJECTIVES.contains(&adjective));
            assert!(CREATURES.contains(&creature));
            assert!(PLACES.contains(&place));
        }
    }
}
