//! Error types for filter validation

use crate::filter::FilterField;

/// Filter validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Regions selected while zero or several countries are selected
    #[error("regions require exactly one selected country, found {selected}")]
    RegionsRequireSingleCountry { selected: usize },

    /// Region not offered for the selected country
    #[error("region '{region}' is not offered for country '{country}'")]
    UnknownRegion { country: String, region: String },

    /// Field cannot be edited on this dashboard
    #[error("field '{0}' is locked for this dashboard")]
    FieldLocked(FilterField),
}

impl FilterError {
    /// Create unknown region error
    pub fn unknown_region(country: impl Into<String>, region: impl Into<String>) -> Self {
        Self::UnknownRegion {
            country: country.into(),
            region: region.into(),
        }
    }

    /// Field the error is about
    #[must_use]
    pub fn field(&self) -> FilterField {
        match self {
            Self::RegionsRequireSingleCountry { .. } | Self::UnknownRegion { .. } => {
                FilterField::Regions
            }
            Self::FieldLocked(field) => *field,
        }
    }
}
