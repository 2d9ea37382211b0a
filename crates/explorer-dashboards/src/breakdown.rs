//! Histogram breakdowns offered by the "who the people are" chart

use explorer_filter::FilterField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unknown breakdown slug
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown breakdown: '{0}'")]
pub struct UnknownBreakdown(pub String);

/// What the comparison histogram is broken down by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Breakdown {
    Age,
    AgeBucket,
    Gender,
    Profession,
    Country,
}

impl Breakdown {
    pub const ALL: [Breakdown; 5] = [
        Breakdown::Age,
        Breakdown::AgeBucket,
        Breakdown::Gender,
        Breakdown::Profession,
        Breakdown::Country,
    ];

    /// Option value served by the API
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Breakdown::Age => "breakdown-age",
            Breakdown::AgeBucket => "breakdown-age-bucket",
            Breakdown::Gender => "breakdown-gender",
            Breakdown::Profession => "breakdown-profession",
            Breakdown::Country => "breakdown-country",
        }
    }

    /// Filter field a bar click adds to
    #[must_use]
    pub fn target_field(self) -> FilterField {
        match self {
            Breakdown::Age => FilterField::Ages,
            Breakdown::AgeBucket => FilterField::AgeBuckets,
            Breakdown::Gender => FilterField::Genders,
            Breakdown::Profession => FilterField::Professions,
            Breakdown::Country => FilterField::Countries,
        }
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Breakdown {
    type Err = UnknownBreakdown;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Breakdown::ALL
            .into_iter()
            .find(|b| b.slug() == wanted || b.slug().trim_start_matches("breakdown-") == wanted)
            .ok_or_else(|| UnknownBreakdown(s.to_string()))
    }
}

impl TryFrom<String> for Breakdown {
    type Error = UnknownBreakdown;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Breakdown> for String {
    fn from(breakdown: Breakdown) -> Self {
        breakdown.slug().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_short_slugs() {
        assert_eq!("breakdown-age-bucket".parse(), Ok(Breakdown::AgeBucket));
        assert_eq!("country".parse(), Ok(Breakdown::Country));
        assert!("breakdown-height".parse::<Breakdown>().is_err());
    }

    #[test]
    fn target_fields() {
        assert_eq!(Breakdown::Age.target_field(), FilterField::Ages);
        assert_eq!(Breakdown::AgeBucket.target_field(), FilterField::AgeBuckets);
        assert_eq!(Breakdown::Country.target_field(), FilterField::Countries);
    }
}
