//! Closed-form upper bound on the stream length.

use super::generate::Generator;
use super::pools::Pools;
use crate::settings::Config;

impl Generator<'_> {
    /// How many candidates the strategies could produce before the length
    /// gate and the cap are applied. Meant for progress display, not as an
    /// exact forecast.
    pub fn estimate(&self) -> u128 {
        estimate(&self.pools(), self.config)
    }
}

pub fn estimate(pools: &Pools, config: &Config) -> u128 {
    let keywords = pools.flat.len() as u128;
    let suffixes = pools.suffixes.len() as u128;
    let separators = config.separators.len() as u128;
    let joined = config.separators.iter().filter(|s| !s.is_empty()).count() as u128;
    let specials = if config.add_special_chars {
        config.special_chars.chars().count() as u128
    } else {
        0
    };

    let mut total = pools.singles.len() as u128;
    total = total.saturating_add(product(&[2, keywords, separators, suffixes]));
    total = total.saturating_add(product(&[4, keywords, separators, suffixes, specials]));
    total = total.saturating_add(product(&[2, keywords, specials]));

    if config.max_combination_depth >= 2 {
        let pairs = ordered_pairs(&pools.keywords);
        total = total.saturating_add(product(&[pairs, separators]));

        if config.max_combination_depth >= 3 {
            let per_suffix = (3 * separators).saturating_add(joined);
            total = total.saturating_add(product(&[pairs, suffixes, per_suffix]));

            let per_special = (10 * separators).saturating_add(4 * joined);
            total = total.saturating_add(product(&[pairs, suffixes, specials, per_special]));
        }
    }
    total
}

/// Word pairs across every ordered pair of distinct groups.
fn ordered_pairs(groups: &[Vec<String>]) -> u128 {
    let sizes: Vec<u128> = groups.iter().map(|g| g.len() as u128).collect();
    let sum: u128 = sizes.iter().sum();
    let squares = sizes.iter().fold(0u128, |acc, n| acc.saturating_add(n * n));
    sum.saturating_mul(sum).saturating_sub(squares)
}

fn product(factors: &[u128]) -> u128 {
    factors.iter().fold(1u128, |acc, n| acc.saturating_mul(*n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Individual, Target};
    use crate::settings::Settings;

    fn target() -> Target {
        let mut target = Target::new(Individual::new("al").unwrap().with_nickname("b"));
        target.special_keywords = vec!["co".into()];
        target.special_numbers = vec!["1".into(), "22".into()];
        target
    }

    fn open(depth: usize) -> Settings {
        Settings {
            min_length: 0,
            max_length: usize::MAX,
            max_combination_depth: depth,
            max_passwords: None,
            special_chars: "!#".into(),
            separators: vec![String::new(), "_".into()],
            add_common_numbers: false,
            ..Default::default()
        }
    }

    #[test]
    fn matches_stream_when_nothing_is_filtered() {
        let target = target();
        for depth in 1..=3 {
            let config = open(depth).validate().unwrap();
            let generator = Generator::new(&target, &config);
            assert_eq!(
                generator.estimate(),
                generator.candidates().count() as u128,
                "depth {depth}"
            );
        }
    }

    #[test]
    fn bounds_the_filtered_stream() {
        let target = target();
        let config = Settings {
            min_length: 4,
            max_length: 6,
            ..open(3)
        }
        .validate()
        .unwrap();
        let generator = Generator::new(&target, &config);
        assert!(generator.estimate() > generator.candidates().count() as u128);
    }

    #[test]
    fn ordered_pairs_skip_same_group() {
        let groups = vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string()]];
        assert_eq!(ordered_pairs(&groups), 4);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(product(&[u128::MAX, 2]), u128::MAX);
    }
}
