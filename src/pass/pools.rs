//! Keyword, date and number pools.
//!
//! Every pool is insertion ordered and duplicate free, so two runs over the
//! same profile and settings see the same elements in the same order.

use std::collections::HashSet;

use crate::profile::Target;
use crate::settings::{Config, Settings};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools {
    /// One variant set per distinct raw keyword.
    pub keywords: Vec<Vec<String>>,
    /// Union of all variant sets.
    pub flat: Vec<String>,
    pub dates: Vec<String>,
    pub numbers: Vec<String>,
    /// Numbers then dates.
    pub suffixes: Vec<String>,
    /// Keywords, numbers, then dates.
    pub singles: Vec<String>,
}

impl Pools {
    pub fn build(target: &Target, config: &Config) -> Self {
        let keywords: Vec<Vec<String>> = raw_keywords(target, config)
            .iter()
            .map(|word| variants(word, config))
            .collect();
        let flat = dedup(keywords.iter().flatten().cloned());

        let mut dates = target.date_permutations();
        for relation in target.relations() {
            dates.extend(relation.date_permutations());
        }
        dates.extend(target.special_date_permutations());
        let dates = dedup(dates);

        let mut numbers = target.special_numbers.clone();
        if config.add_common_numbers {
            numbers.extend(config.common_numbers.iter().cloned());
        }
        let numbers = dedup(numbers);

        let suffixes = dedup(numbers.iter().chain(&dates).cloned());
        let singles = dedup(flat.iter().chain(&numbers).chain(&dates).cloned());

        tracing::debug!(
            keywords = keywords.len(),
            variants = flat.len(),
            dates = dates.len(),
            numbers = numbers.len(),
            "built pools"
        );

        Self {
            keywords,
            flat,
            dates,
            numbers,
            suffixes,
            singles,
        }
    }
}

/// Distinct raw keywords: subject, relations, initials, then free text.
fn raw_keywords(target: &Target, config: &Config) -> Vec<String> {
    let mut raw = target.keywords();
    for relation in target.relations() {
        raw.extend(relation.keywords());
    }
    if config.include_initials {
        raw.extend(target.initials());
    }
    raw.extend(
        target
            .special_keywords
            .iter()
            .filter(|w| !w.trim().is_empty())
            .cloned(),
    );
    dedup(raw)
}

/// Every leet, case and reversed form of one keyword.
pub fn variants(word: &str, settings: &Settings) -> Vec<String> {
    let mut forms = leet(word, settings);
    forms.extend(case_mutations(word, settings));
    let mut forms = dedup(forms);

    if settings.enable_reverse {
        if settings.bruteforce_mode {
            let reversed: Vec<String> = forms.iter().map(|f| reverse(f)).collect();
            forms.extend(reversed);
        } else {
            forms.push(reverse(word));
        }
    }
    dedup(forms)
}

/// All leet spellings of `word`, the original included.
///
/// In bruteforce mode short words also get each character's case swapped
/// inside the same product.
pub fn leet(word: &str, settings: &Settings) -> Vec<String> {
    if settings.leet_level == 0 {
        return vec![word.to_string()];
    }

    let swap_case = settings.bruteforce_mode && word.chars().count() <= settings.word_leet_threshold;
    let options: Vec<Vec<String>> = word
        .chars()
        .map(|c| {
            let mut opts = vec![c.to_string()];
            if let Some(subs) = lowercase(c).and_then(|l| settings.leet_map.get(&l)) {
                opts.extend(subs.iter().cloned());
            }
            if swap_case {
                opts.push(swap(c));
            }
            dedup(opts)
        })
        .collect();

    product(&options)
}

/// Every lower/upper pattern of `word`.
pub fn case_mutations(word: &str, settings: &Settings) -> Vec<String> {
    if !settings.enable_case_mutations || settings.bruteforce_mode {
        return vec![word.to_string()];
    }

    let options: Vec<Vec<String>> = word
        .chars()
        .map(|c| {
            dedup([
                c.to_lowercase().collect::<String>(),
                c.to_uppercase().collect::<String>(),
            ])
        })
        .collect();

    dedup(product(&options))
}

fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

/// Single-char lowercase form, if there is one.
fn lowercase(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

fn swap(c: char) -> String {
    if c.is_lowercase() {
        c.to_uppercase().collect()
    } else {
        c.to_lowercase().collect()
    }
}

/// Cartesian product; the last position varies fastest.
fn product(options: &[Vec<String>]) -> Vec<String> {
    let mut out = vec![String::new()];
    for opts in options {
        out = out
            .iter()
            .flat_map(|prefix| opts.iter().map(move |o| format!("{prefix}{o}")))
            .collect();
    }
    out
}

/// Drop repeats, keeping first occurrences in order.
pub(crate) fn dedup(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
