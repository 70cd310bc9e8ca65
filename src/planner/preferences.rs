//! Best-effort parsing of model output into a preferences record
//!
//! Two tiers: isolate and decode the JSON object the model was asked to
//! return, and if that is unusable, recover what we can from the raw
//! user input with substring heuristics. The second tier is documented
//! behavior, not a bug: extraction must always produce a record.

use crate::Result;
use crate::error::TripPlannerError;
use crate::models::TravelPreferences;

/// Isolate the substring between the first `{` and the last `}`.
///
/// Models routinely wrap the requested JSON object in prose; everything
/// outside the outermost braces is discarded before decoding.
pub fn isolate_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Decode a model reply into a preferences record.
///
/// Failure here is an expected, handled outcome; the caller falls back
/// to [`heuristic_preferences`].
pub fn parse_model_reply(reply: &str) -> Result<TravelPreferences> {
    let json = isolate_json(reply)
        .ok_or_else(|| TripPlannerError::parse("No JSON object found in model reply"))?;

    serde_json::from_str(json).map_err(|e| {
        TripPlannerError::parse(format!("Model reply is not a valid preferences object: {e}"))
    })
}

/// Recover preferences from the raw user input with substring heuristics.
///
/// Destination is the text between the last word `to` and the following
/// `for`; duration is the text after the first `for` up to `days`, and
/// is only filled when `days` occurs at all. Both are trimmed. Every
/// other field stays empty. Intentionally fragile and total.
pub fn heuristic_preferences(text: &str) -> TravelPreferences {
    // Last "to" so "a trip to Japan" beats "I want to plan"
    let destination = after_word(text, "to", true)
        .map(|rest| {
            let end = rest.find(" for ").unwrap_or(rest.len());
            rest[..end].trim().to_string()
        })
        .unwrap_or_default();

    let duration = if text.contains("days") {
        after_word(text, "for", false)
            .map(|rest| {
                let end = rest.find("days").unwrap_or(rest.len());
                rest[..end].trim().to_string()
            })
            .unwrap_or_default()
    } else {
        String::new()
    };

    TravelPreferences {
        destination,
        duration,
        ..TravelPreferences::default()
    }
}

/// The text following a word-bounded occurrence of `word`, either the
/// last or the first one. Also matches the word at the start of input.
fn after_word<'a>(text: &'a str, word: &str, last: bool) -> Option<&'a str> {
    let padded = format!(" {word} ");
    let idx = if last {
        text.rfind(&padded)
    } else {
        text.find(&padded)
    };
    match idx {
        Some(i) => Some(&text[i + padded.len()..]),
        None => text.strip_prefix(&format!("{word} ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_isolate_json_prose_wrapped() {
        let reply = "Sure! Here you go: {\"destination\": \"Paris\"} Hope that helps!";
        assert_eq!(isolate_json(reply), Some("{\"destination\": \"Paris\"}"));
    }

    #[test]
    fn test_isolate_json_pure_object() {
        assert_eq!(isolate_json("{\"a\": 1}"), Some("{\"a\": 1}"));
    }

    #[rstest]
    #[case("no braces here")]
    #[case("")]
    #[case("} backwards {")]
    fn test_isolate_json_none(#[case] input: &str) {
        assert_eq!(isolate_json(input), None);
    }

    #[test]
    fn test_parse_model_reply_prose_wrapped() {
        let reply = "Sure! Here you go: {\"destination\": \"Paris\", \"start_date\": \"\", \
                     \"duration\": \"5\", \"budget\": \"\", \"interests\": [], \
                     \"accommodation_type\": \"\"} Hope that helps!";
        let prefs = parse_model_reply(reply).unwrap();
        assert_eq!(prefs.destination, "Paris");
        assert_eq!(prefs.duration, "5");
        assert!(prefs.interests.is_empty());
    }

    #[test]
    fn test_parse_model_reply_rejects_non_json() {
        let result = parse_model_reply("I could not extract anything, sorry.");
        assert!(matches!(result, Err(TripPlannerError::Parse { .. })));
    }

    #[test]
    fn test_parse_model_reply_rejects_broken_object() {
        let result = parse_model_reply("{\"destination\": }");
        assert!(matches!(result, Err(TripPlannerError::Parse { .. })));
    }

    #[test]
    fn test_heuristic_destination_and_duration() {
        let prefs = heuristic_preferences("I want to plan a trip to Japan for 10 days");
        assert_eq!(prefs.destination, "Japan");
        assert_eq!(prefs.duration, "10");
        assert_eq!(prefs.start_date, "");
        assert_eq!(prefs.budget, "");
        assert!(prefs.interests.is_empty());
        assert_eq!(prefs.accommodation_type, "");
    }

    #[test]
    fn test_heuristic_empty_input() {
        let prefs = heuristic_preferences("");
        assert_eq!(prefs, TravelPreferences::default());
    }

    #[test]
    fn test_heuristic_no_markers() {
        let prefs = heuristic_preferences("Paris next spring please");
        assert_eq!(prefs.destination, "");
        assert_eq!(prefs.duration, "");
    }

    #[test]
    fn test_heuristic_destination_without_duration() {
        let prefs = heuristic_preferences("take me to Lisbon");
        assert_eq!(prefs.destination, "Lisbon");
        assert_eq!(prefs.duration, "");
    }

    #[test]
    fn test_heuristic_duration_needs_days_marker() {
        // "for" alone is not enough; "days" must occur in the input
        let prefs = heuristic_preferences("a trip to Rome for a while");
        assert_eq!(prefs.destination, "Rome");
        assert_eq!(prefs.duration, "");
    }

    #[test]
    fn test_heuristic_leading_to() {
        let prefs = heuristic_preferences("to Kyoto for 3 days");
        assert_eq!(prefs.destination, "Kyoto");
        assert_eq!(prefs.duration, "3");
    }
}
