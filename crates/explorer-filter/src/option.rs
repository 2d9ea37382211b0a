//! Select options as served by the dashboard API

use serde::{Deserialize, Serialize};

/// A selectable value with its display label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption<T> {
    /// Canonical value stored in the filter
    pub value: T,
    /// Human-readable label
    pub label: String,
}

impl<T> SelectOption<T> {
    /// Create new option
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<T>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Region options offered for one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRegionOption {
    /// ISO alpha-2 code of the country
    pub country_alpha2_code: String,
    /// Regions of that country
    #[serde(default)]
    pub options: Vec<SelectOption<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_region_option_decodes_without_options() {
        let option: CountryRegionOption =
            serde_json::from_str(r#"{"country_alpha2_code":"PK"}"#).unwrap();
        assert_eq!(option.country_alpha2_code, "PK");
        assert!(option.options.is_empty());
    }

    #[test]
    fn boolean_option_decodes() {
        let option: SelectOption<bool> =
            serde_json::from_str(r#"{"value":true,"label":"Yes"}"#).unwrap();
        assert!(option.value);
        assert_eq!(option.label, "Yes");
    }
}
