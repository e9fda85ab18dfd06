use std::collections::HashSet;

use crate::entity::Vehicle;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;
const MIN_DESCRIPTION_WORD_LEN: usize = 4;

/// Search vocabulary derived from the catalog. Always rebuilt in full.
///
/// Keywords keep the order in which they were first seen; suggestions are not ranked.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct KeywordIndex(Vec<String>);

impl KeywordIndex {
    pub fn build(vehicles: &[Vehicle]) -> Self {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();
        let mut insert = |word: String| {
            if !word.is_empty() && seen.insert(word.clone()) {
                keywords.push(word);
            }
        };
        for vehicle in vehicles {
            insert(vehicle.vehicle_type().as_ref().clone());
            insert(vehicle.make().as_ref().clone());
            insert(vehicle.model().as_ref().clone());
            vehicle
                .description()
                .as_ref()
                .split_whitespace()
                .map(|word| {
                    word.chars()
                        .filter(char::is_ascii_alphanumeric)
                        .collect::<String>()
                })
                .filter(|word| word.len() >= MIN_DESCRIPTION_WORD_LEN)
                .for_each(&mut insert);
        }
        Self(keywords)
    }

    pub fn keywords(&self) -> &[String] {
        &self.0
    }

    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.to_lowercase();
        self.0
            .iter()
            .filter(|keyword| keyword.to_lowercase().contains(&query))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entity::vehicle::test::vehicle;

    #[test]
    fn index_collects_attributes_and_long_description_words() {
        let index = KeywordIndex::build(&[
            vehicle(1, "Toyota", "Corolla", 50, true),
            vehicle(2, "Toyota", "Camry", 60, true),
        ]);
        let expected = [
            "Sedan",
            "Toyota",
            "Corolla",
            "Comfortable",
            "city",
            "with",
            "great",
            "mileage",
            "Camry",
        ];
        assert_eq!(index.keywords(), &expected.map(String::from)[..]);
    }

    #[test]
    fn description_words_are_stripped_before_length_check() {
        let mut car = vehicle(1, "Kia", "Rio", 30, true);
        car.substitute(|car| {
            *car.description = crate::entity::VehicleDescription::new("4x4! A-B-C-D off-road, v8")
        });
        let index = KeywordIndex::build(&[car]);
        assert!(index.keywords().contains(&"ABCD".to_string()));
        assert!(index.keywords().contains(&"offroad".to_string()));
        assert!(!index.keywords().contains(&"4x4".to_string()));
        assert!(!index.keywords().contains(&"v8".to_string()));
    }

    #[test]
    fn suggest_is_case_insensitive_and_limited() {
        let index = KeywordIndex::build(&[
            vehicle(1, "Toyota", "Corolla", 50, true),
            vehicle(2, "Honda", "Civic", 55, true),
        ]);
        assert_eq!(index.suggest("CO", DEFAULT_SUGGESTION_LIMIT), vec!["Corolla", "Comfortable"]);
        assert_eq!(index.suggest("o", 2).len(), 2);
        assert!(index.suggest("zzz", DEFAULT_SUGGESTION_LIMIT).is_empty());
    }
}
