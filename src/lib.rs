//! Profile-driven password wordlist generation.
//!
//! A [`Target`](profile::Target) plus a validated [`Config`](settings::Config)
//! feed the [`Generator`](pass::Generator), which lazily streams candidates.

pub mod pass;
pub mod profile;
pub mod settings;

pub use pass::{Candidates, Generator};
pub use profile::{Entity, Individual, Name, Pet, ProfileError, Target};
pub use settings::{Config, ConfigError, Settings};
