//! Generator settings and their validated, frozen form.

pub mod file;

use std::collections::BTreeMap;
use std::ops::Deref;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%?";
pub const DEFAULT_SEPARATORS: &[&str] = &["", "_", ".", "-", "@", "&", "and", "xoxo"];
pub const DEFAULT_COMMON_NUMBERS: &[&str] = &[
    "1", "12", "123", "1234", "12345", "123456", "007", "69", "77", "99", "100", "2000", "2020",
    "2024", "2025",
];
pub const DEFAULT_MAX_PASSWORDS: i64 = 100_000_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_length ({min}) must not exceed max_length ({max})")]
    LengthBounds { min: usize, max: usize },

    #[error("leet_level must be 0, 1 or 2, got {0}")]
    LeetLevel(u8),

    #[error("max_passwords must not be negative, got {0}")]
    NegativeCap(i64),
}

/// Every knob of a generation run. All fields can be overridden independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub min_length: usize,
    pub max_length: usize,
    pub enable_case_mutations: bool,
    pub enable_reverse: bool,
    pub leet_level: u8,
    pub leet_map: BTreeMap<char, Vec<String>>,
    pub max_combination_depth: usize,
    pub add_special_chars: bool,
    pub special_chars: String,
    pub separators: Vec<String>,
    pub add_common_numbers: bool,
    pub common_numbers: Vec<String>,
    pub word_leet_threshold: usize,
    pub bruteforce_mode: bool,
    /// `None` means unlimited.
    pub max_passwords: Option<i64>,
    /// Add first letters of the target's names to the keyword pool.
    pub include_initials: bool,
}

impl Settings {
    pub fn load_from_file(path: impl AsRef<Path>) -> Self {
        file::load(path)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        file::save(self, path)
    }

    /// Check the bounds once and freeze the result.
    pub fn validate(self) -> Result<Config, ConfigError> {
        if self.min_length > self.max_length {
            return Err(ConfigError::LengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.leet_level > 2 {
            return Err(ConfigError::LeetLevel(self.leet_level));
        }
        if let Some(cap) = self.max_passwords
            && cap < 0
        {
            return Err(ConfigError::NegativeCap(cap));
        }
        Ok(Config(self))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_length: 6,
            max_length: 20,
            enable_case_mutations: true,
            enable_reverse: true,
            leet_level: 1,
            leet_map: default_leet_map(),
            max_combination_depth: 2,
            add_special_chars: true,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            add_common_numbers: true,
            common_numbers: DEFAULT_COMMON_NUMBERS.iter().map(|s| s.to_string()).collect(),
            word_leet_threshold: 12,
            bruteforce_mode: false,
            max_passwords: Some(DEFAULT_MAX_PASSWORDS),
            include_initials: false,
        }
    }
}

pub fn default_leet_map() -> BTreeMap<char, Vec<String>> {
    [
        ('a', &["4", "@"][..]),
        ('e', &["3"]),
        ('i', &["1", "!"]),
        ('o', &["0"]),
        ('s', &["5", "$"]),
        ('t', &["7"]),
    ]
    .into_iter()
    .map(|(c, subs)| (c, subs.iter().map(|s| s.to_string()).collect()))
    .collect()
}

/// Validated settings. Read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config(Settings);

impl Config {
    /// Emission cap, `None` when unlimited.
    pub fn cap(&self) -> Option<u64> {
        self.0.max_passwords.map(|n| n as u64)
    }

    pub fn is_valid_length(&self, len: usize) -> bool {
        self.0.min_length <= len && len <= self.0.max_length
    }

    pub fn into_settings(self) -> Settings {
        self.0
    }
}

impl Deref for Config {
    type Target = Settings;

    fn deref(&self) -> &Settings {
        &self.0
    }
}
