//! Trip planning orchestration
//!
//! One planning request is three sequential generation calls: extract
//! preferences from the user's text, generate an itinerary from those
//! preferences, then fetch tips for the destination. The calls are
//! deliberately not parallelized. Extraction and generation never fail;
//! each converts errors into its documented fallback. Only a request
//! where every generation call failed produces no plan at all.

pub mod preferences;
pub mod prompts;

use tracing::{error, info, warn};

use crate::Result;
use crate::error::TripPlannerError;
use crate::gemini::TextGenerator;
use crate::models::{ExtractedPreferences, PreferenceSource, TravelPreferences, TripPlan};

/// Fixed fallback shown when itinerary generation fails
pub const ITINERARY_FALLBACK: &str =
    "Unable to generate itinerary. Please check your API key and try again.";

/// Fixed fallback shown when tips generation fails
pub const TIPS_FALLBACK: &str =
    "Unable to generate travel tips. Please check your API key and try again.";

/// Orchestrates the extract → itinerary → tips pipeline over any
/// [`TextGenerator`].
pub struct TravelPlanner<G> {
    generator: G,
}

impl<G: TextGenerator> TravelPlanner<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Ask the model for a preferences object and decode it.
    async fn request_preferences(&self, user_text: &str) -> Result<TravelPreferences> {
        let prompt = prompts::extraction_prompt(user_text);
        let reply = self.generator.generate(&prompt).await?;
        preferences::parse_model_reply(&reply)
    }

    /// Extract preferences from free-text input. Total: any client or
    /// parse failure falls back to heuristics over the ORIGINAL input,
    /// never the failed model output.
    pub async fn extract_preferences(&self, user_text: &str) -> ExtractedPreferences {
        match self.request_preferences(user_text).await {
            Ok(prefs) => ExtractedPreferences {
                preferences: prefs,
                source: PreferenceSource::Structured,
            },
            Err(e) => {
                warn!("Preference extraction failed, using heuristic fallback: {e}");
                ExtractedPreferences {
                    preferences: preferences::heuristic_preferences(user_text),
                    source: PreferenceSource::Heuristic,
                }
            }
        }
    }

    async fn try_itinerary(&self, prefs: &TravelPreferences) -> Result<String> {
        self.generator
            .generate(&prompts::itinerary_prompt(prefs))
            .await
    }

    async fn try_tips(&self, destination: &str) -> Result<String> {
        self.generator.generate(&prompts::tips_prompt(destination)).await
    }

    /// Generate a day-by-day itinerary; returns [`ITINERARY_FALLBACK`]
    /// on any underlying failure.
    pub async fn generate_itinerary(&self, prefs: &TravelPreferences) -> String {
        match self.try_itinerary(prefs).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error generating itinerary: {e}");
                ITINERARY_FALLBACK.to_string()
            }
        }
    }

    /// Get 3-5 travel tips for a destination; returns [`TIPS_FALLBACK`]
    /// on any underlying failure.
    pub async fn travel_tips(&self, destination: &str) -> String {
        match self.try_tips(destination).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error getting travel tips: {e}");
                TIPS_FALLBACK.to_string()
            }
        }
    }

    /// Plan a trip from one block of user text.
    ///
    /// Returns `None` only when every generation call failed; a plan is
    /// otherwise always produced, with fallback text permitted in
    /// individual sections.
    pub async fn plan_trip(&self, user_text: &str) -> Option<TripPlan> {
        let (extracted, extraction_transport_failed) =
            match self.request_preferences(user_text).await {
                Ok(prefs) => (
                    ExtractedPreferences {
                        preferences: prefs,
                        source: PreferenceSource::Structured,
                    },
                    false,
                ),
                Err(e) => {
                    warn!("Preference extraction failed, using heuristic fallback: {e}");
                    let transport_failed = matches!(e, TripPlannerError::Api { .. });
                    (
                        ExtractedPreferences {
                            preferences: preferences::heuristic_preferences(user_text),
                            source: PreferenceSource::Heuristic,
                        },
                        transport_failed,
                    )
                }
            };

        let preferences = extracted.preferences;

        let itinerary = self.try_itinerary(&preferences).await;
        let tips = self.try_tips(&preferences.destination).await;

        if extraction_transport_failed && itinerary.is_err() && tips.is_err() {
            error!("Every generation call failed; no trip plan produced");
            return None;
        }

        let itinerary = itinerary.unwrap_or_else(|e| {
            error!("Error generating itinerary: {e}");
            ITINERARY_FALLBACK.to_string()
        });
        let additional_tips = tips.unwrap_or_else(|e| {
            error!("Error getting travel tips: {e}");
            TIPS_FALLBACK.to_string()
        });

        info!(
            "Trip plan generated (preferences: {:?}, destination: '{}')",
            extracted.source, preferences.destination
        );

        Some(TripPlan {
            preferences,
            itinerary,
            additional_tips,
        })
    }
}
