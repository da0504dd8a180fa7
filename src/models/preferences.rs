use serde::{Deserialize, Serialize};

/// Categorical preferences extracted from one user message.
///
/// Each list holds tag names from a fixed vocabulary, in dictionary
/// declaration order. Produced fresh per message and never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreferenceSet {
    pub genres: Vec<String>,
    pub moods: Vec<String>,
    pub eras: Vec<String>,
    pub ratings: Vec<String>,
    /// Raw message, recorded when it looks like a "movies like X" request.
    /// Carried for parity with the extraction contract; scoring ignores it.
    pub specific_requests: Vec<String>,
}

impl PreferenceSet {
    /// True when no tag of any category was detected.
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
            && self.moods.is_empty()
            && self.eras.is_empty()
            && self.ratings.is_empty()
    }
}

/// One prior turn of the suggestion conversation. Accepted by the extractor
/// for API compatibility; the current heuristics only look at the latest
/// message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_detection() {
        let mut prefs = PreferenceSet::default();
        assert!(prefs.is_empty());

        prefs.specific_requests.push("like The Matrix".to_string());
        assert!(prefs.is_empty(), "specific requests alone carry no tags");

        prefs.genres.push("action".to_string());
        assert!(!prefs.is_empty());
    }
}
