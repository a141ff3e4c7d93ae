//! People and pets linked to a target.

use chrono::NaiveDate;
use serde::Deserialize;

use super::{Name, ProfileError, dates, present};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Individual {
    pub name: Name,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Collected for completeness; not used by generation.
    #[serde(default)]
    pub id_number: Option<String>,
    /// Collected for completeness; not used by generation.
    #[serde(default)]
    pub professions: Vec<String>,
}

impl Individual {
    pub fn new(name: impl Into<String>) -> Result<Self, ProfileError> {
        Ok(Self {
            name: Name::new(name)?,
            nickname: None,
            family_name: None,
            birth_date: None,
            id_number: None,
            professions: Vec::new(),
        })
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn with_family_name(mut self, family_name: impl Into<String>) -> Self {
        self.family_name = Some(family_name.into());
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Name, nickname, then family name.
    pub fn keywords(&self) -> Vec<String> {
        present([
            Some(self.name.as_str()),
            self.nickname.as_deref(),
            self.family_name.as_deref(),
        ])
    }

    pub fn date_permutations(&self) -> Vec<String> {
        dates::permutations(self.birth_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pet {
    pub name: Name,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl Pet {
    pub fn new(name: impl Into<String>) -> Result<Self, ProfileError> {
        Ok(Self {
            name: Name::new(name)?,
            nickname: None,
        })
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn keywords(&self) -> Vec<String> {
        present([Some(self.name.as_str()), self.nickname.as_deref()])
    }
}

/// Borrowed view over anything that can contribute keywords.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Individual(&'a Individual),
    Pet(&'a Pet),
}

impl Entity<'_> {
    pub fn name(&self) -> &Name {
        match self {
            Entity::Individual(person) => &person.name,
            Entity::Pet(pet) => &pet.name,
        }
    }

    pub fn keywords(&self) -> Vec<String> {
        match self {
            Entity::Individual(person) => person.keywords(),
            Entity::Pet(pet) => pet.keywords(),
        }
    }

    /// Pets have no dates.
    pub fn date_permutations(&self) -> Vec<String> {
        match self {
            Entity::Individual(person) => person.date_permutations(),
            Entity::Pet(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_keywords_include_family_name() {
        let bob = Individual::new("Bob")
            .unwrap()
            .with_nickname("bobby")
            .with_family_name("Builder");
        assert_eq!(bob.keywords(), vec!["Bob", "bobby", "Builder"]);
    }

    #[test]
    fn blank_optional_fields_are_skipped() {
        let carl = Individual::new("Carl")
            .unwrap()
            .with_nickname("  ")
            .with_family_name("");
        assert_eq!(carl.keywords(), vec!["Carl"]);
    }

    #[test]
    fn pet_keywords_and_dates() {
        let milo = Pet::new("Milo").unwrap().with_nickname("mi");
        let entity = Entity::Pet(&milo);
        assert_eq!(entity.keywords(), vec!["Milo", "mi"]);
        assert!(entity.date_permutations().is_empty());
        assert_eq!(entity.name().as_str(), "Milo");
    }

    #[test]
    fn individual_without_birth_date_has_no_dates() {
        let dana = Individual::new("Dana").unwrap();
        assert!(Entity::Individual(&dana).date_permutations().is_empty());

        let dana = dana.with_birth_date(NaiveDate::from_ymd_opt(2001, 2, 3).unwrap());
        assert_eq!(dana.date_permutations()[0], "2001");
    }
}
