//! Prompt builders for the three generation calls

use crate::models::TravelPreferences;

/// Prompt instructing the model to return only a JSON object with the
/// six fixed preference keys, with the raw user text embedded verbatim.
pub fn extraction_prompt(user_text: &str) -> String {
    format!(
        "Extract travel preferences from the following text and return only a JSON object \
         with these keys:\n\
         destination, start_date, duration, budget, interests, accommodation_type\n\n\
         Text: {user_text}\n\n\
         Return only the JSON object, nothing else."
    )
}

/// Day-by-day itinerary prompt built from the extracted preferences.
pub fn itinerary_prompt(preferences: &TravelPreferences) -> String {
    format!(
        "Create a detailed day-by-day travel itinerary based on these preferences:\n\
         Destination: {destination}\n\
         Duration: {duration} days\n\
         Budget: {budget}\n\
         Interests: {interests}\n\
         Accommodation: {accommodation}\n\n\
         Format the itinerary day by day with activities, recommended times, and estimated \
         costs. Use bullet points for each day and ensure the output is well-structured and \
         easy to read.",
        destination = preferences.destination,
        duration = preferences.duration,
        budget = preferences.budget,
        interests = preferences.interests.join(", "),
        accommodation = preferences.accommodation_type,
    )
}

/// Short tips prompt for a destination (which may be empty if extraction
/// found none).
pub fn tips_prompt(destination: &str) -> String {
    format!("Provide 3-5 essential travel tips for visiting {destination}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_prompt_embeds_user_text() {
        let prompt = extraction_prompt("a trip to Japan");
        assert!(prompt.contains("a trip to Japan"));
        assert!(prompt.contains("accommodation_type"));
        assert!(prompt.contains("Return only the JSON object"));
    }

    #[test]
    fn test_itinerary_prompt_embeds_preferences() {
        let prefs = TravelPreferences {
            destination: "Japan".to_string(),
            duration: "10".to_string(),
            budget: "$5000".to_string(),
            interests: vec!["food".to_string(), "temples".to_string()],
            accommodation_type: "boutique hotel".to_string(),
            ..TravelPreferences::default()
        };
        let prompt = itinerary_prompt(&prefs);
        assert!(prompt.contains("Destination: Japan"));
        assert!(prompt.contains("Duration: 10 days"));
        assert!(prompt.contains("food, temples"));
        assert!(prompt.contains("boutique hotel"));
    }

    #[test]
    fn test_tips_prompt() {
        assert!(tips_prompt("Japan").contains("visiting Japan"));
    }
}
