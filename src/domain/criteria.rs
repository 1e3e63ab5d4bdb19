//! Filter criteria: the visitor's current search intent.
//!
//! A [`FilterCriteria`] value is immutable once broadcast. Every interaction
//! with a filter control produces a new value through the `with_*` builders.

use std::collections::BTreeSet;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::Sport;
use crate::error::CatalogError;

/// Highest valid month index (December, zero-based).
pub const LAST_MONTH: u8 = 11;

/// Complete set of active search constraints.
///
/// The year restriction is always active; there is no "all years" state.
/// The month restriction applies only when one is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive title substring; empty disables the predicate.
    #[serde(default)]
    pub search_term: String,
    /// Case-insensitive location substring; empty disables the predicate.
    #[serde(default)]
    pub location: String,
    /// Allowed sports; empty means no sport restriction.
    #[serde(default)]
    pub selected_sports: BTreeSet<Sport>,
    /// Zero-based month of the start date, `None` for any month.
    #[serde(default)]
    pub selected_month: Option<u8>,
    /// Year of the start date.
    #[serde(default = "current_year")]
    pub selected_year: i32,
}

impl FilterCriteria {
    /// Criteria for the given year with every other predicate disabled.
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self {
            search_term: String::new(),
            location: String::new(),
            selected_sports: BTreeSet::new(),
            selected_month: None,
            selected_year: year,
        }
    }

    /// Returns a copy with the given title search term.
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Returns a copy with the given location term.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Returns a copy restricted to the given sports.
    #[must_use]
    pub fn with_sports(mut self, sports: impl IntoIterator<Item = Sport>) -> Self {
        self.selected_sports = sports.into_iter().collect();
        self
    }

    /// Returns a copy restricted to a zero-based month, or any month.
    #[must_use]
    pub fn with_month(mut self, month: Option<u8>) -> Self {
        self.selected_month = month;
        self
    }

    /// Returns a copy for another year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.selected_year = year;
        self
    }

    /// Checks the value ranges of the criteria.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRequest`] if the month is outside
    /// `0..=11`.
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self.selected_month {
            Some(month) if month > LAST_MONTH => Err(CatalogError::InvalidRequest(format!(
                "month must be between 0 and {LAST_MONTH}, got {month}"
            ))),
            _ => Ok(()),
        }
    }
}

impl Default for FilterCriteria {
    /// No restriction besides the current year.
    fn default() -> Self {
        Self::for_year(current_year())
    }
}

fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_current_year() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.selected_year, Utc::now().year());
        assert!(criteria.selected_month.is_none());
        assert!(criteria.selected_sports.is_empty());
    }

    #[test]
    fn builders_leave_original_untouched() {
        let base = FilterCriteria::for_year(2025);
        let narrowed = base.clone().with_search_term("copa").with_month(Some(5));
        assert_eq!(base, FilterCriteria::for_year(2025));
        assert_eq!(narrowed.search_term, "copa");
        assert_eq!(narrowed.selected_month, Some(5));
    }

    #[test]
    fn validate_rejects_month_twelve() {
        assert!(FilterCriteria::for_year(2025).with_month(Some(11)).validate().is_ok());
        assert!(FilterCriteria::for_year(2025).with_month(Some(12)).validate().is_err());
    }

    #[test]
    fn deserializes_broadcast_payload() {
        let json = r#"{
            "searchTerm": "wimbledon",
            "location": "",
            "selectedSports": ["tenis"],
            "selectedMonth": null,
            "selectedYear": 2025
        }"#;
        let Ok(criteria) = serde_json::from_str::<FilterCriteria>(json) else {
            panic!("payload should deserialize");
        };
        assert_eq!(criteria.selected_year, 2025);
        assert!(criteria.selected_sports.contains(&Sport::Tenis));
    }

    #[test]
    fn missing_year_defaults_to_current() {
        let Ok(criteria) = serde_json::from_str::<FilterCriteria>("{}") else {
            panic!("empty payload should deserialize");
        };
        assert_eq!(criteria.selected_year, Utc::now().year());
    }
}
