//! `TripPlanner` - AI-assisted travel planning
//!
//! This library provides the core functionality for extracting travel
//! preferences from free-text input, generating itineraries and travel
//! tips via the Gemini generation endpoint, and serving the web UI.

pub mod api;
pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod planner;
pub mod web;

// Re-export core types for public API
pub use config::TripPlannerConfig;
pub use error::TripPlannerError;
pub use gemini::{GeminiClient, TextGenerator};
pub use models::{ExtractedPreferences, PreferenceSource, TravelPreferences, TripPlan};
pub use planner::{ITINERARY_FALLBACK, TIPS_FALLBACK, TravelPlanner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripPlannerError>;
