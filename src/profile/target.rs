//! The generation subject.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::{Entity, Individual, Pet, ProfileError, dates};

/// The person a wordlist is built for, plus everyone and everything around them.
///
/// Relations are one level deep: a partner has no partners of their own here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    #[serde(flatten)]
    pub person: Individual,
    #[serde(default)]
    pub partners: Vec<Individual>,
    #[serde(default)]
    pub parents: Vec<Individual>,
    #[serde(default)]
    pub children: Vec<Individual>,
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub special_keywords: Vec<String>,
    #[serde(default)]
    pub special_dates: Vec<NaiveDate>,
    /// Digits only, duplicate free. Sanitized by whoever collects them.
    #[serde(default)]
    pub special_numbers: Vec<String>,
}

impl Target {
    pub fn new(person: Individual) -> Self {
        Self {
            person,
            partners: Vec::new(),
            parents: Vec::new(),
            children: Vec::new(),
            pets: Vec::new(),
            special_keywords: Vec::new(),
            special_dates: Vec::new(),
            special_numbers: Vec::new(),
        }
    }

    /// Load a profile from a JSON document.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let data = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: shown.clone(),
            source,
        })?;
        let target: Target = serde_json::from_str(&data).map_err(|source| ProfileError::Parse {
            path: shown.clone(),
            source,
        })?;
        tracing::debug!(
            path = %shown,
            relations = target.relations().count(),
            "loaded profile"
        );
        Ok(target)
    }

    pub fn add_partner(&mut self, partner: Individual) {
        self.partners.push(partner);
    }

    pub fn add_parent(&mut self, parent: Individual) {
        self.parents.push(parent);
    }

    pub fn add_child(&mut self, child: Individual) {
        self.children.push(child);
    }

    pub fn add_pet(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    /// The subject's own keywords.
    pub fn keywords(&self) -> Vec<String> {
        self.person.keywords()
    }

    pub fn date_permutations(&self) -> Vec<String> {
        self.person.date_permutations()
    }

    /// Parents, partners, children, then pets.
    pub fn relations(&self) -> impl Iterator<Item = Entity<'_>> {
        self.parents
            .iter()
            .chain(&self.partners)
            .chain(&self.children)
            .map(Entity::Individual)
            .chain(self.pets.iter().map(Entity::Pet))
    }

    pub fn special_date_permutations(&self) -> Vec<String> {
        self.special_dates
            .iter()
            .flat_map(|d| dates::permutations(Some(*d)))
            .collect()
    }

    /// Lower and upper case first letters of the name and family name.
    pub fn initials(&self) -> Vec<String> {
        let mut initials = Vec::new();
        let names = [Some(self.person.name.as_str()), self.person.family_name.as_deref()];
        for first in names.into_iter().flatten().filter_map(|n| n.trim().chars().next()) {
            initials.push(first.to_lowercase().collect());
            initials.push(first.to_uppercase().collect());
        }
        initials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Target {
        Target::new(
            Individual::new("Alice")
                .unwrap()
                .with_nickname("ali")
                .with_family_name("Wonder"),
        )
    }

    #[test]
    fn relations_in_fixed_order() {
        let mut target = alice();
        target.add_pet(Pet::new("Milo").unwrap());
        target.add_child(Individual::new("Charlie").unwrap());
        target.add_partner(Individual::new("Bob").unwrap());
        target.add_parent(Individual::new("Eve").unwrap());

        let names: Vec<_> = target
            .relations()
            .map(|r| r.name().as_str().to_string())
            .collect();
        assert_eq!(names, vec!["Eve", "Bob", "Charlie", "Milo"]);
    }

    #[test]
    fn initials_cover_both_names() {
        assert_eq!(alice().initials(), vec!["a", "A", "w", "W"]);
    }

    #[test]
    fn special_dates_expand() {
        let mut target = alice();
        target.special_dates.push(NaiveDate::from_ymd_opt(2015, 6, 20).unwrap());
        let perms = target.special_date_permutations();
        assert_eq!(perms.len(), dates::PERMUTATION_COUNT);
        assert_eq!(perms[6], "2006");
    }

    #[test]
    fn deserializes_nested_profile() {
        let json = r#"{
            "name": "Alice",
            "family_name": "Wonder",
            "birth_date": "1992-05-15",
            "partners": [{ "name": "Bob", "nickname": "bobby" }],
            "pets": [{ "name": "Milo" }],
            "special_numbers": ["42"]
        }"#;
        let target: Target = serde_json::from_str(json).unwrap();
        assert_eq!(target.keywords(), vec!["Alice", "Wonder"]);
        assert_eq!(target.date_permutations()[0], "1992");
        assert_eq!(target.partners[0].keywords(), vec!["Bob", "bobby"]);
        assert_eq!(target.relations().count(), 2);
        assert_eq!(target.special_numbers, vec!["42"]);
    }

    #[test]
    fn loads_profile_file_and_names_it_in_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice.json");
        std::fs::write(&path, r#"{ "name": "Alice", "pets": [{ "name": "Milo" }] }"#).unwrap();

        let target = Target::from_json_file(&path).unwrap();
        assert_eq!(target.relations().count(), 1);

        let missing = dir.path().join("nobody.json");
        match Target::from_json_file(&missing) {
            Err(ProfileError::Read { path, .. }) => assert!(path.ends_with("nobody.json")),
            other => panic!("expected a read error, got {other:?}"),
        }
    }

    #[test]
    fn profile_with_blank_pet_name_is_rejected() {
        let json = r#"{ "name": "Alice", "pets": [{ "name": "" }] }"#;
        assert!(serde_json::from_str::<Target>(json).is_err());
    }
}
