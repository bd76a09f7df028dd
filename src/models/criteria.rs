//! Filter criteria and reference options for the public job listing.

use serde::{Deserialize, Serialize};

use super::JobCategory;

/// Locations offered in the location drop-down.
pub const LOCATIONS: [&str; 7] = [
    "All India",
    "Uttar Pradesh",
    "Bihar",
    "Delhi",
    "Maharashtra",
    "Rajasthan",
    "Madhya Pradesh",
];

/// Qualifications offered in the qualification drop-down.
pub const QUALIFICATIONS: [&str; 8] = [
    "10th",
    "12th",
    "Graduate",
    "Post Graduate",
    "ITI",
    "Diploma",
    "B.Tech",
    "PhD",
];

/// Transient filter state selected in the UI. Empty fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.qualification.is_empty()
            && self.location.is_empty()
            && self.category.is_empty()
    }
}

/// Values used to populate the filter and form drop-downs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingOptions {
    pub categories: Vec<JobCategory>,
    pub locations: Vec<&'static str>,
    pub qualifications: Vec<&'static str>,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            categories: JobCategory::ALL.to_vec(),
            locations: LOCATIONS.to_vec(),
            qualifications: QUALIFICATIONS.to_vec(),
        }
    }
}
