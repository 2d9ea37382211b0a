//! Dashboard identities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unknown dashboard slug
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dashboard: '{0}'")]
pub struct UnknownDashboard(pub String);

/// The campaign dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DashboardName {
    WhatWomenWant,
    WhatYoungPeopleWant,
    MidwivesVoices,
    HealthWellbeing,
    WhatWomenWantPakistan,
    EconomicEmpowermentMexico,
    AllCampaigns,
}

impl DashboardName {
    /// Every dashboard, in menu order
    pub const ALL: [DashboardName; 7] = [
        DashboardName::WhatWomenWant,
        DashboardName::WhatYoungPeopleWant,
        DashboardName::MidwivesVoices,
        DashboardName::HealthWellbeing,
        DashboardName::WhatWomenWantPakistan,
        DashboardName::EconomicEmpowermentMexico,
        DashboardName::AllCampaigns,
    ];

    /// URL slug
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            DashboardName::WhatWomenWant => "whatwomenwant",
            DashboardName::WhatYoungPeopleWant => "whatyoungpeoplewant",
            DashboardName::MidwivesVoices => "midwivesvoices",
            DashboardName::HealthWellbeing => "healthwellbeing",
            DashboardName::WhatWomenWantPakistan => "wwwpakistan",
            DashboardName::EconomicEmpowermentMexico => "giz",
            DashboardName::AllCampaigns => "allcampaigns",
        }
    }

    /// Slug used by the legacy dashboard schema, where it differs
    #[must_use]
    pub fn legacy_slug(self) -> Option<&'static str> {
        match self {
            DashboardName::WhatWomenWantPakistan => Some("whatwomenwantpakistan"),
            DashboardName::EconomicEmpowermentMexico => Some("economic_empowerment_mexico"),
            DashboardName::AllCampaigns => Some("all-campaigns"),
            _ => None,
        }
    }

    /// Whether this dashboard merges every campaign
    #[inline]
    #[must_use]
    pub fn is_all_campaigns(self) -> bool {
        self == DashboardName::AllCampaigns
    }
}

impl fmt::Display for DashboardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DashboardName {
    type Err = UnknownDashboard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DashboardName::ALL
            .into_iter()
            .find(|name| name.slug() == wanted || name.legacy_slug() == Some(wanted.as_str()))
            .ok_or_else(|| UnknownDashboard(s.to_string()))
    }
}

impl TryFrom<String> for DashboardName {
    type Error = UnknownDashboard;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DashboardName> for String {
    fn from(name: DashboardName) -> Self {
        name.slug().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_roundtrip() {
        for name in DashboardName::ALL {
            assert_eq!(name.slug().parse::<DashboardName>(), Ok(name));
        }
    }

    #[test]
    fn legacy_slugs_parse() {
        assert_eq!(
            "whatwomenwantpakistan".parse::<DashboardName>(),
            Ok(DashboardName::WhatWomenWantPakistan)
        );
        assert_eq!(
            "economic_empowerment_mexico".parse::<DashboardName>(),
            Ok(DashboardName::EconomicEmpowermentMexico)
        );
        assert_eq!(
            " All-Campaigns ".parse::<DashboardName>(),
            Ok(DashboardName::AllCampaigns)
        );
    }

    #[test]
    fn unknown_slug_rejected() {
        let err = "nope".parse::<DashboardName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown dashboard: 'nope'");
    }

    #[test]
    fn serde_uses_slug() {
        let json = serde_json::to_string(&DashboardName::WhatWomenWantPakistan).unwrap();
        assert_eq!(json, "\"wwwpakistan\"");
        let name: DashboardName = serde_json::from_str("\"giz\"").unwrap();
        assert_eq!(name, DashboardName::EconomicEmpowermentMexico);
    }
}
