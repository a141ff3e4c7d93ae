//! Target profile: the subject, their relations and pets.

pub mod dates;
mod entity;
mod target;

use std::fmt;

use serde::Deserialize;

pub use entity::{Entity, Individual, Pet};
pub use target::Target;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("failed to read profile {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid profile {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// A non-blank display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Result<Self, ProfileError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = ProfileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keep only fields that carry text.
fn present<'a>(fields: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    fields
        .into_iter()
        .flatten()
        .filter(|w| !w.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(matches!(Name::new(""), Err(ProfileError::EmptyName)));
        assert!(matches!(Name::new("  \t"), Err(ProfileError::EmptyName)));
        assert_eq!(Name::new("Alice").unwrap().as_str(), "Alice");
    }

    #[test]
    fn blank_names_fail_to_deserialize() {
        assert!(serde_json::from_str::<Name>("\"   \"").is_err());
        assert_eq!(serde_json::from_str::<Name>("\"Bob\"").unwrap().as_str(), "Bob");
    }
}
