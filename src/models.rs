//! Core data types shared across the planner and the API layer

use serde::{Deserialize, Serialize};

/// The six-field preferences record extracted from free-text user input.
///
/// Every field is free-form and may be empty; the model output is never
/// validated beyond JSON shape. Missing keys deserialize to their defaults
/// so a partial model reply still produces a usable record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelPreferences {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub start_date: String,
    /// Intended to be a day count, but kept free-form
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub accommodation_type: String,
}

/// How a preferences record was obtained.
///
/// Models the two-tier extraction contract as a value instead of nested
/// error handling, so the fallback path is independently testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceSource {
    /// Parsed from the JSON object in the model's reply
    Structured,
    /// Recovered from the raw user input after a client or parse failure
    Heuristic,
}

/// Result of preference extraction: always a record, plus its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedPreferences {
    pub preferences: TravelPreferences,
    pub source: PreferenceSource,
}

/// Aggregate result of one planning request.
///
/// Either the whole plan exists or planning failed entirely; no partial
/// aggregate is ever produced (individual sections may hold their fixed
/// fallback text).
#[derive(Debug, Clone, Serialize)]
pub struct TripPlan {
    pub preferences: TravelPreferences,
    pub itinerary: String,
    pub additional_tips: String,
}
