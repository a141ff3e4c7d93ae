use profpass::Settings;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub interactive: bool,
    pub clipboard: bool,
    pub estimate: bool,
    pub save_config: bool,
    pub no_special: bool,
    pub no_case: bool,
    pub no_reverse: bool,
    pub no_common: bool,
    pub no_limit: bool,
    pub bruteforce: bool,
    pub initials: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub leet_level: Option<u8>,
    pub depth: Option<usize>,
    pub number: Option<i64>,
    pub special: Option<String>,
    pub profile: Option<String>,
    pub config: Option<String>,
    pub output: Option<String>,
}

impl CliFlags {
    /// Layer explicit flags over loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(min) = self.min_length {
            settings.min_length = min;
        }
        if let Some(max) = self.max_length {
            settings.max_length = max;
        }
        if let Some(level) = self.leet_level {
            settings.leet_level = level;
        }
        if let Some(depth) = self.depth {
            settings.max_combination_depth = depth;
        }
        if let Some(ref chars) = self.special {
            settings.special_chars = chars.clone();
            settings.add_special_chars = true;
        }
        if self.no_special {
            settings.add_special_chars = false;
        }
        if self.no_case {
            settings.enable_case_mutations = false;
        }
        if self.no_reverse {
            settings.enable_reverse = false;
        }
        if self.no_common {
            settings.add_common_numbers = false;
        }
        if self.bruteforce {
            settings.bruteforce_mode = true;
        }
        if self.initials {
            settings.include_initials = true;
        }
        if self.no_limit {
            settings.max_passwords = None;
        } else if let Some(n) = self.number {
            settings.max_passwords = Some(n);
        }
    }

    /// Resolve `-o` to a file path: bare or directory paths get a default
    /// file name, other paths get a `.txt` extension.
    pub fn output_path(&self) -> Option<String> {
        let path = self.output.as_ref()?;
        Some(if path == "." {
            "profpass.txt".to_string()
        } else if path.ends_with('/') {
            format!("{}profpass.txt", path)
        } else if !path.ends_with(".txt") {
            format!("{}.txt", path)
        } else {
            path.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let flags = CliFlags {
            min_length: Some(8),
            leet_level: Some(0),
            special: Some("*".into()),
            no_reverse: true,
            number: Some(50),
            ..Default::default()
        };
        let mut settings = Settings {
            add_special_chars: false,
            ..Default::default()
        };
        flags.apply(&mut settings);
        assert_eq!(settings.min_length, 8);
        assert_eq!(settings.leet_level, 0);
        assert_eq!(settings.special_chars, "*");
        assert!(settings.add_special_chars);
        assert!(!settings.enable_reverse);
        assert_eq!(settings.max_passwords, Some(50));
    }

    #[test]
    fn no_limit_wins_over_number() {
        let flags = CliFlags {
            number: Some(5),
            no_limit: true,
            ..Default::default()
        };
        let mut settings = Settings::default();
        flags.apply(&mut settings);
        assert_eq!(settings.max_passwords, None);
    }

    #[test]
    fn output_paths() {
        let path = |p: &str| {
            CliFlags {
                output: Some(p.into()),
                ..Default::default()
            }
            .output_path()
            .unwrap()
        };
        assert_eq!(path("."), "profpass.txt");
        assert_eq!(path("lists/"), "lists/profpass.txt");
        assert_eq!(path("alice"), "alice.txt");
        assert_eq!(path("alice.txt"), "alice.txt");
        assert_eq!(CliFlags::default().output_path(), None);
    }
}
