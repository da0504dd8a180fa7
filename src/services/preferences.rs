//! Keyword-based preference extraction.
//!
//! Each dictionary maps a tag to the keywords that imply it. Matching is
//! plain lower-cased substring containment: one hit anywhere in the message
//! adds the tag, repeated hits add nothing. Tags come out in dictionary
//! declaration order, which keeps the output deterministic.

use crate::models::{ChatTurn, PreferenceSet};

const GENRE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "action",
        &["action", "fight", "battle", "war", "martial arts", "superhero", "adventure"],
    ),
    ("comedy", &["funny", "comedy", "laugh", "humor", "hilarious", "amusing"]),
    ("drama", &["drama", "emotional", "serious", "deep", "character", "touching"]),
    ("horror", &["scary", "horror", "frightening", "terror", "spooky", "creepy"]),
    ("romance", &["romantic", "love", "romance", "relationship", "dating"]),
    ("sci-fi", &["sci-fi", "science fiction", "space", "future", "alien", "robot"]),
    ("thriller", &["thriller", "suspense", "mystery", "crime", "detective"]),
    ("fantasy", &["fantasy", "magic", "wizard", "dragon", "supernatural"]),
    ("animation", &["animated", "cartoon", "animation", "pixar", "disney"]),
    ("documentary", &["documentary", "real", "true story", "factual"]),
];

const MOOD_KEYWORDS: &[(&str, &[&str])] = &[
    ("feel-good", &["feel good", "uplifting", "positive", "happy", "cheerful"]),
    ("dark", &["dark", "gritty", "noir", "serious", "intense"]),
    ("light", &["light", "easy", "casual", "simple", "relaxing"]),
    ("mind-bending", &["mind bending", "complex", "confusing", "twist", "puzzle"]),
];

const ERA_KEYWORDS: &[(&str, &[&str])] = &[
    ("classic", &["classic", "old", "vintage", "golden age"]),
    ("modern", &["recent", "new", "latest", "contemporary"]),
    ("80s", &["80s", "eighties", "1980"]),
    ("90s", &["90s", "nineties", "1990"]),
    ("2000s", &["2000s", "early 2000"]),
    ("2010s", &["2010s", "twenty tens"]),
];

const RATING_KEYWORDS: &[(&str, &[&str])] = &[
    ("family", &["family", "kids", "children", "pg"]),
    ("mature", &["mature", "adult", "r rated", "explicit"]),
];

/// Phrases suggesting the user is asking for something specific
/// ("movies like X", "directed by Y") rather than a category.
const SPECIFIC_REQUEST_KEYWORDS: &[&str] =
    &["like", "similar to", "reminds me of", "based on", "directed by"];

fn matched_tags(message: &str, dictionary: &[(&str, &[&str])]) -> Vec<String> {
    dictionary
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| message.contains(k)))
        .map(|(tag, _)| (*tag).to_string())
        .collect()
}

/// Extracts a preference set from a free-text message.
///
/// The conversation history is accepted for API compatibility but unused:
/// the heuristics only look at the latest message.
pub fn extract_preferences(message: &str, _history: &[ChatTurn]) -> PreferenceSet {
    let message_lower = message.to_lowercase();

    let mut preferences = PreferenceSet {
        genres: matched_tags(&message_lower, GENRE_KEYWORDS),
        moods: matched_tags(&message_lower, MOOD_KEYWORDS),
        eras: matched_tags(&message_lower, ERA_KEYWORDS),
        ratings: matched_tags(&message_lower, RATING_KEYWORDS),
        specific_requests: Vec::new(),
    };

    if SPECIFIC_REQUEST_KEYWORDS
        .iter()
        .any(|k| message_lower.contains(k))
    {
        preferences.specific_requests.push(message.to_string());
    }

    preferences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funny_maps_to_comedy_only() {
        let prefs = extract_preferences("funny", &[]);
        assert_eq!(prefs.genres, vec!["comedy"]);
        assert!(prefs.moods.is_empty());
        assert!(prefs.eras.is_empty());
        assert!(prefs.ratings.is_empty());
        assert!(prefs.specific_requests.is_empty());
    }

    #[test]
    fn test_action_from_the_90s() {
        let prefs = extract_preferences("I want action movies from the 90s", &[]);
        assert_eq!(prefs.genres, vec!["action"]);
        assert_eq!(prefs.eras, vec!["90s"]);
    }

    #[test]
    fn test_tags_follow_declaration_order() {
        let prefs = extract_preferences("a funny action movie", &[]);
        assert_eq!(prefs.genres, vec!["action", "comedy"]);
    }

    #[test]
    fn test_one_hit_is_enough_and_not_double_counted() {
        let prefs = extract_preferences("scary scary scary", &[]);
        assert_eq!(prefs.genres, vec!["horror"]);
    }

    #[test]
    fn test_specific_request_records_raw_message_once() {
        let message = "something like Inception, similar to Memento";
        let prefs = extract_preferences(message, &[]);
        assert_eq!(prefs.specific_requests, vec![message]);
    }

    #[test]
    fn test_blank_message_yields_empty_set() {
        let prefs = extract_preferences("", &[]);
        assert!(prefs.is_empty());
        assert!(prefs.specific_requests.is_empty());
    }

    #[test]
    fn test_history_is_ignored() {
        let history = vec![ChatTurn {
            role: "user".to_string(),
            content: "horror please".to_string(),
        }];
        let prefs = extract_preferences("funny", &history);
        assert_eq!(prefs.genres, vec!["comedy"]);
    }
}
