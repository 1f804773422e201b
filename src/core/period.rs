// period.rs - Year-month period selectors

use crate::error::PivotError;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Months from 2010-01 to 2029-12
static MONTH_ARG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^20[12][0-9]-(0[1-9]|1[0-2])$").expect("month pattern is valid")
});

const LATEST: &str = "latest";

/// Check a user supplied month: "YYYY-MM" (2010 or later) or "latest" in any case
pub fn is_valid_month(month: &str) -> bool {
    if month.is_empty() {
        return false;
    }
    if month.eq_ignore_ascii_case(LATEST) {
        return true;
    }
    MONTH_ARG_REGEX.is_match(month)
}

/// Which period column to keep when projecting a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodSelector {
    /// Last period column of the header
    Latest,
    Month(String),
}

impl FromStr for PeriodSelector {
    type Err = PivotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_month(s) {
            return Err(PivotError::InvalidMonth {
                value: s.to_string(),
            });
        }
        if s.eq_ignore_ascii_case(LATEST) {
            Ok(PeriodSelector::Latest)
        } else {
            Ok(PeriodSelector::Month(s.to_string()))
        }
    }
}

impl std::fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodSelector::Latest => write!(f, "{}", LATEST),
            PeriodSelector::Month(m) => write!(f, "{}", m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_month() {
        let cases = [
            ("latest", true),
            ("LATEST", true),
            ("", false),
            ("2023-08", true),
            ("2013-08", true),
            ("2023-12", true),
            ("2020-12", true),
            ("2023-13", false),
            ("2023-00", false),
            ("2003-08", false),
            ("2023", false),
            ("blaah", false),
        ];
        for (month, expected) in cases {
            assert_eq!(is_valid_month(month), expected, "month {:?}", month);
        }
    }

    #[test]
    fn test_selector_from_str() {
        assert_eq!("Latest".parse::<PeriodSelector>().unwrap(), PeriodSelector::Latest);
        assert_eq!(
            "2024-02".parse::<PeriodSelector>().unwrap(),
            PeriodSelector::Month("2024-02".to_string())
        );
        assert!(matches!(
            "2024-2".parse::<PeriodSelector>(),
            Err(PivotError::InvalidMonth { .. })
        ));
    }
}
