//! Candidate stream.

use std::collections::VecDeque;

use super::pools::Pools;
use crate::profile::Target;
use crate::settings::Config;

/// Builds candidate passwords for one target under one configuration.
///
/// Holding only borrowed, read-only inputs, a generator can be asked for a
/// fresh stream any number of times; each stream starts from scratch.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    pub target: &'a Target,
    pub config: &'a Config,
}

impl<'a> Generator<'a> {
    pub fn new(target: &'a Target, config: &'a Config) -> Self {
        Self { target, config }
    }

    pub fn pools(&self) -> Pools {
        Pools::build(self.target, self.config)
    }

    /// Lazily yield every candidate that passes the length gate, stopping at
    /// the emission cap.
    pub fn candidates(&self) -> Candidates<'a> {
        Candidates::new(self.config, self.pools())
    }
}

/// Position inside the strategy sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Keywords, numbers and dates on their own.
    Singles { i: usize },
    /// keyword/separator/suffix, with optional specials around it.
    Suffixed { k: usize, sep: usize, suf: usize },
    /// keyword with one special glyph.
    Special { k: usize, sp: usize },
    /// Two words from different keyword groups. `step` 0 is the bare pair,
    /// `step` n is the pair with suffix n - 1.
    Pairs {
        a: usize,
        b: usize,
        wa: usize,
        wb: usize,
        sep: usize,
        step: usize,
    },
    Done,
}

/// Single pass candidate iterator.
///
/// Pools are materialized up front; candidates are produced a small batch at
/// a time and the iterator suspends between every item.
#[derive(Debug)]
pub struct Candidates<'a> {
    config: &'a Config,
    pools: Pools,
    specials: Vec<String>,
    cursor: Cursor,
    pending: VecDeque<String>,
    emitted: u64,
}

impl<'a> Candidates<'a> {
    fn new(config: &'a Config, pools: Pools) -> Self {
        let specials = if config.add_special_chars {
            config.special_chars.chars().map(String::from).collect()
        } else {
            Vec::new()
        };
        let mut candidates = Self {
            config,
            pools,
            specials,
            cursor: Cursor::Singles { i: 0 },
            pending: VecDeque::new(),
            emitted: 0,
        };
        if candidates.pools.singles.is_empty() {
            candidates.cursor = candidates.after_singles();
        }
        candidates
    }

    /// Candidates handed out so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    fn capped(&self) -> bool {
        self.config.cap().is_some_and(|cap| self.emitted >= cap)
    }

    fn after_singles(&self) -> Cursor {
        if !self.pools.flat.is_empty()
            && !self.config.separators.is_empty()
            && !self.pools.suffixes.is_empty()
        {
            tracing::trace!("keyword + suffix");
            return Cursor::Suffixed { k: 0, sep: 0, suf: 0 };
        }
        self.after_suffixed()
    }

    fn after_suffixed(&self) -> Cursor {
        if !self.pools.flat.is_empty() && !self.specials.is_empty() {
            tracing::trace!("keyword + special");
            return Cursor::Special { k: 0, sp: 0 };
        }
        self.after_special()
    }

    fn after_special(&self) -> Cursor {
        if self.config.max_combination_depth >= 2
            && self.pools.keywords.len() >= 2
            && !self.config.separators.is_empty()
        {
            tracing::trace!("multi-word");
            return Cursor::Pairs {
                a: 0,
                b: 1,
                wa: 0,
                wb: 0,
                sep: 0,
                step: 0,
            };
        }
        Cursor::Done
    }

    /// Queue the batch at the cursor and move past it.
    fn fill(&mut self) {
        self.cursor = match self.cursor {
            Cursor::Singles { i } => {
                self.pending.push_back(self.pools.singles[i].clone());
                if i + 1 < self.pools.singles.len() {
                    Cursor::Singles { i: i + 1 }
                } else {
                    self.after_singles()
                }
            }
            Cursor::Suffixed { k, sep, suf } => {
                self.fill_suffixed(k, sep, suf);
                let (k_len, sep_len, suf_len) = (
                    self.pools.flat.len(),
                    self.config.separators.len(),
                    self.pools.suffixes.len(),
                );
                if suf + 1 < suf_len {
                    Cursor::Suffixed { k, sep, suf: suf + 1 }
                } else if sep + 1 < sep_len {
                    Cursor::Suffixed { k, sep: sep + 1, suf: 0 }
                } else if k + 1 < k_len {
                    Cursor::Suffixed { k: k + 1, sep: 0, suf: 0 }
                } else {
                    self.after_suffixed()
                }
            }
            Cursor::Special { k, sp } => {
                let word = &self.pools.flat[k];
                let special = &self.specials[sp];
                self.pending.push_back(format!("{word}{special}"));
                self.pending.push_back(format!("{special}{word}"));
                if sp + 1 < self.specials.len() {
                    Cursor::Special { k, sp: sp + 1 }
                } else if k + 1 < self.pools.flat.len() {
                    Cursor::Special { k: k + 1, sp: 0 }
                } else {
                    self.after_special()
                }
            }
            Cursor::Pairs {
                a,
                b,
                wa,
                wb,
                sep,
                step,
            } => {
                if step == 0 {
                    let word_a = &self.pools.keywords[a][wa];
                    let word_b = &self.pools.keywords[b][wb];
                    let sep = &self.config.separators[sep];
                    self.pending.push_back(format!("{word_a}{sep}{word_b}"));
                } else {
                    self.fill_pair_suffixed(a, b, wa, wb, sep, step - 1);
                }
                self.next_pair(a, b, wa, wb, sep, step)
            }
            Cursor::Done => Cursor::Done,
        };
    }

    fn fill_suffixed(&mut self, k: usize, sep: usize, suf: usize) {
        let word = &self.pools.flat[k];
        let sep = &self.config.separators[sep];
        let suffix = &self.pools.suffixes[suf];
        let pending = &mut self.pending;

        pending.push_back(format!("{word}{sep}{suffix}"));
        pending.push_back(format!("{suffix}{sep}{word}"));
        for special in &self.specials {
            pending.push_back(format!("{word}{sep}{suffix}{special}"));
            pending.push_back(format!("{special}{word}{sep}{suffix}"));
            pending.push_back(format!("{suffix}{sep}{word}{special}"));
            pending.push_back(format!("{special}{suffix}{sep}{word}"));
        }
    }

    /// Every placement of one suffix, and of the suffix plus each special,
    /// around a word pair.
    ///
    /// All placements in a group are permutations of the same pieces, so one
    /// length check decides the whole group.
    fn fill_pair_suffixed(&mut self, a: usize, b: usize, wa: usize, wb: usize, sep: usize, suf: usize) {
        let a = &self.pools.keywords[a][wa];
        let b = &self.pools.keywords[b][wb];
        let s = &self.config.separators[sep];
        let x = &self.pools.suffixes[suf];
        let pending = &mut self.pending;

        let base_len = a.chars().count() + s.chars().count() + b.chars().count() + x.chars().count();
        // Specials only add length from here on, so only an overlong base
        // prunes the suffix. A base below min_length drops just its own
        // placements; the special group is still checked on its own length.
        if base_len > self.config.max_length {
            return;
        }

        if self.config.is_valid_length(base_len) {
            pending.push_back(format!("{a}{s}{b}{x}"));
            pending.push_back(format!("{x}{a}{s}{b}"));
            pending.push_back(format!("{a}{x}{s}{b}"));
            if !s.is_empty() {
                pending.push_back(format!("{a}{s}{x}{b}"));
            }
        }

        for c in &self.specials {
            if !self.config.is_valid_length(base_len + c.chars().count()) {
                continue;
            }
            // both ends
            pending.push_back(format!("{x}{a}{s}{b}{c}"));
            pending.push_back(format!("{c}{a}{s}{b}{x}"));
            // both at the end
            pending.push_back(format!("{a}{s}{b}{x}{c}"));
            pending.push_back(format!("{a}{s}{b}{c}{x}"));
            // both at the start
            pending.push_back(format!("{c}{x}{a}{s}{b}"));
            pending.push_back(format!("{x}{c}{a}{s}{b}"));
            // one in the middle
            pending.push_back(format!("{a}{x}{s}{b}{c}"));
            pending.push_back(format!("{a}{c}{s}{b}{x}"));
            pending.push_back(format!("{c}{a}{x}{s}{b}"));
            pending.push_back(format!("{x}{a}{c}{s}{b}"));
            if !s.is_empty() {
                pending.push_back(format!("{a}{s}{x}{b}{c}"));
                pending.push_back(format!("{a}{s}{c}{b}{x}"));
                pending.push_back(format!("{c}{a}{s}{x}{b}"));
                pending.push_back(format!("{x}{a}{s}{c}{b}"));
            }
        }
    }

    fn next_pair(&self, a: usize, b: usize, wa: usize, wb: usize, sep: usize, step: usize) -> Cursor {
        let steps = if self.config.max_combination_depth >= 3 {
            self.pools.suffixes.len() + 1
        } else {
            1
        };
        let groups = &self.pools.keywords;

        if step + 1 < steps {
            return Cursor::Pairs { a, b, wa, wb, sep, step: step + 1 };
        }
        if sep + 1 < self.config.separators.len() {
            return Cursor::Pairs { a, b, wa, wb, sep: sep + 1, step: 0 };
        }
        if wb + 1 < groups[b].len() {
            return Cursor::Pairs { a, b, wa, wb: wb + 1, sep: 0, step: 0 };
        }
        if wa + 1 < groups[a].len() {
            return Cursor::Pairs { a, b, wa: wa + 1, wb: 0, sep: 0, step: 0 };
        }

        // Next ordered pair of distinct groups.
        let (mut a, mut b) = (a, b + 1);
        loop {
            if b == a {
                b += 1;
            }
            if b >= groups.len() {
                a += 1;
                b = 0;
                if a >= groups.len() {
                    return Cursor::Done;
                }
                continue;
            }
            return Cursor::Pairs { a, b, wa: 0, wb: 0, sep: 0, step: 0 };
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if self.capped() {
                self.pending.clear();
                self.cursor = Cursor::Done;
                return None;
            }
            if let Some(candidate) = self.pending.pop_front() {
                if !self.config.is_valid_length(candidate.chars().count()) {
                    continue;
                }
                self.emitted += 1;
                return Some(candidate);
            }
            if self.cursor == Cursor::Done {
                return None;
            }
            self.fill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Individual;
    use crate::settings::Settings;

    fn bare() -> Settings {
        Settings {
            min_length: 1,
            max_length: 64,
            leet_level: 0,
            enable_case_mutations: false,
            enable_reverse: false,
            add_special_chars: false,
            add_common_numbers: false,
            separators: vec![String::new()],
            max_combination_depth: 1,
            max_passwords: None,
            ..Default::default()
        }
    }

    fn run(target: &Target, settings: Settings) -> Vec<String> {
        let config = settings.validate().unwrap();
        Generator::new(target, &config).candidates().collect()
    }

    fn target(words: &[&str], numbers: &[&str]) -> Target {
        let mut target = Target::new(Individual::new(words[0]).unwrap());
        target.special_keywords = words[1..].iter().map(|s| s.to_string()).collect();
        target.special_numbers = numbers.iter().map(|s| s.to_string()).collect();
        target
    }

    #[test]
    fn singles_then_suffixes() {
        let out = run(&target(&["ab"], &["1"]), bare());
        assert_eq!(out, vec!["ab", "1", "ab1", "1ab"]);
    }

    #[test]
    fn specials_wrap_suffixed_words_then_words() {
        let settings = Settings {
            add_special_chars: true,
            special_chars: "!".into(),
            ..bare()
        };
        let out = run(&target(&["ab"], &["1"]), settings);
        assert_eq!(
            out,
            vec!["ab", "1", "ab1", "1ab", "ab1!", "!ab1", "1ab!", "!1ab", "ab!", "!ab"]
        );
    }

    #[test]
    fn pairs_use_both_orders_of_distinct_groups() {
        let settings = Settings {
            max_combination_depth: 2,
            separators: vec![String::new(), "_".into()],
            ..bare()
        };
        let out = run(&target(&["a", "b"], &[]), settings);
        assert_eq!(out, vec!["a", "b", "ab", "a_b", "ba", "b_a"]);
    }

    #[test]
    fn pairs_never_combine_a_group_with_itself() {
        let settings = Settings {
            max_combination_depth: 2,
            enable_reverse: true,
            ..bare()
        };
        // One group holding "ab" and "ba".
        let out = run(&target(&["ab"], &[]), settings);
        assert_eq!(out, vec!["ab", "ba"]);
    }

    #[test]
    fn depth_three_adds_suffix_placements() {
        let settings = Settings {
            max_combination_depth: 3,
            separators: vec!["-".into()],
            ..bare()
        };
        let out = run(&target(&["a", "b"], &["1"]), settings);
        let pair: Vec<_> = out.iter().skip_while(|s| *s != "a-b").take(5).cloned().collect();
        assert_eq!(pair, vec!["a-b", "a-b1", "1a-b", "a1-b", "a-1b"]);
    }

    #[test]
    fn empty_separator_drops_inner_placements() {
        let settings = Settings {
            max_combination_depth: 3,
            add_special_chars: true,
            special_chars: "!".into(),
            ..bare()
        };
        let out = run(&target(&["a", "b"], &["1"]), settings);
        let start = out.iter().position(|s| s == "ab").unwrap();
        // bare pair, 3 suffix placements, 10 suffix + special placements
        assert_eq!(&out[start..start + 4], &["ab", "ab1", "1ab", "a1b"]);
        assert_eq!(out[start + 4], "1ab!");
        assert_eq!(out[start + 13], "1a!b");
        assert_eq!(out[start + 14], "ba");
    }

    #[test]
    fn short_base_does_not_hide_longer_special_group() {
        let settings = Settings {
            min_length: 4,
            max_length: 4,
            max_combination_depth: 3,
            add_special_chars: true,
            special_chars: "!".into(),
            ..bare()
        };
        // "ab1" is 3 chars, "ab1!" is 4.
        let out = run(&target(&["a", "b"], &["1"]), settings);
        assert!(out.contains(&"ab1!".to_string()));
        assert!(out.contains(&"!1ba".to_string()));
        assert!(!out.contains(&"ab1".to_string()));
    }

    #[test]
    fn streams_restart_from_scratch() {
        let target = target(&["al", "bo"], &["7"]);
        let config = Settings {
            max_combination_depth: 3,
            ..Settings::default()
        }
        .validate()
        .unwrap();
        let generator = Generator::new(&target, &config);
        let first: Vec<_> = generator.candidates().collect();
        let second: Vec<_> = generator.candidates().collect();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
    #[test]
    fn overlong_base_prunes_the_whole_suffix() {
        let settings = Settings {
            max_length: 5,
            max_combination_depth: 3,
            add_special_chars: true,
            special_chars: "!".into(),
            ..bare()
        };
        let target = target(&["ab", "cd"], &["1", "12"]);
        let config = settings.clone().validate().unwrap();
        let pools = Pools::build(&target, &config);
        assert_eq!(pools.suffixes, vec!["1", "12"]);

        // "abcd12" is one over the limit.
        let mut candidates = Candidates::new(&config, pools.clone());
        candidates.fill_pair_suffixed(0, 1, 0, 0, 0, 1);
        assert!(candidates.pending.is_empty());

        // "abcd1" fits; its special group ("abcd1!") does not.
        let mut candidates = Candidates::new(&config, pools);
        candidates.fill_pair_suffixed(0, 1, 0, 0, 0, 0);
        assert_eq!(Vec::from(candidates.pending), vec!["abcd1", "1abcd", "ab1cd"]);

        let out = run(&target, settings);
        assert!(out.contains(&"abcd1".to_string()));
        assert!(!out.iter().any(|s| s.contains("12") && s.contains("ab") && s.contains("cd")));
    }

    #[test]
    fn cap_counts_only_emitted() {
        let settings = Settings {
            min_length: 3,
            max_passwords: Some(2),
            ..bare()
        };
        let config = settings.validate().unwrap();
        let target = target(&["ab"], &["1", "2"]);
        let mut stream = Generator::new(&target, &config).candidates();
        assert_eq!(stream.next().as_deref(), Some("ab1"));
        assert_eq!(stream.next().as_deref(), Some("1ab"));
        assert_eq!(stream.next(), None);
        assert_eq!(stream.emitted(), 2);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn zero_cap_emits_nothing() {
        let settings = Settings {
            max_passwords: Some(0),
            ..bare()
        };
        assert!(run(&target(&["ab"], &["1"]), settings).is_empty());
    }

    #[test]
    fn no_separators_leaves_singles_and_specials() {
        let settings = Settings {
            separators: Vec::new(),
            max_combination_depth: 3,
            add_special_chars: true,
            special_chars: "!".into(),
            ..bare()
        };
        let out = run(&target(&["a", "b"], &["1"]), settings);
        assert_eq!(out, vec!["a", "b", "1", "a!", "!a", "b!", "!b"]);
    }
}
