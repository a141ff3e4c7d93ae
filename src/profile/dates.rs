//! Textual date permutations.

use chrono::{Datelike, NaiveDate};

/// Number of representations produced for a single date.
pub const PERMUTATION_COUNT: usize = 8;

/// Render a date in every form people tend to put in passwords.
///
/// Order is fixed: `YYYY`, `YY`, `DDMMYYYY`, `MMDDYYYY`, `DDMMYY`, `MMDDYY`,
/// `DDMM`, `MMDD`.
pub fn permutations(date: Option<NaiveDate>) -> Vec<String> {
    let Some(date) = date else {
        return Vec::new();
    };

    let yyyy = format!("{:04}", date.year());
    let yy = format!("{:02}", date.year().rem_euclid(100));
    let dd = format!("{:02}", date.day());
    let mm = format!("{:02}", date.month());

    vec![
        yyyy.clone(),
        yy.clone(),
        format!("{dd}{mm}{yyyy}"),
        format!("{mm}{dd}{yyyy}"),
        format!("{dd}{mm}{yy}"),
        format!("{mm}{dd}{yy}"),
        format!("{dd}{mm}"),
        format!("{mm}{dd}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn fixed_order_and_format() {
        assert_eq!(
            permutations(date(1990, 5, 15)),
            vec![
                "1990", "90", "15051990", "05151990", "150590", "051590", "1505", "0515"
            ]
        );
    }

    #[test]
    fn pads_single_digit_fields() {
        let perms = permutations(date(2003, 1, 2));
        assert_eq!(perms.len(), PERMUTATION_COUNT);
        assert_eq!(perms[1], "03");
        assert_eq!(perms[2], "02012003");
        assert_eq!(perms[7], "0102");
    }

    #[test]
    fn pads_short_years() {
        let perms = permutations(date(987, 12, 31));
        assert_eq!(perms[0], "0987");
        assert_eq!(perms[1], "87");
        assert_eq!(perms[4], "311287");
    }

    #[test]
    fn absent_date_is_empty() {
        assert!(permutations(None).is_empty());
    }
}
