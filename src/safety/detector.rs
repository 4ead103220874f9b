use anyhow::{bail, Result};
use serde::Serialize;

/// Trigger phrases checked against every outgoing chat message, in display order.
pub const DEFAULT_CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "want to die",
    "die",
    "hopeless",
    "worthless",
    "end my life",
];

/// Ordered, lowercase trigger phrases. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrisisKeywordSet {
    keywords: Vec<String>,
}

impl CrisisKeywordSet {
    /// Builds a set from caller-supplied phrases.
    ///
    /// Phrases are lowercased and blank or repeated phrases dropped; the first
    /// occurrence keeps its position. An empty result is rejected.
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        for phrase in phrases {
            let normalized = phrase.as_ref().trim().to_ascii_lowercase();
            if normalized.is_empty() || keywords.contains(&normalized) {
                continue;
            }
            keywords.push(normalized);
        }

        if keywords.is_empty() {
            bail!("crisis keyword set must contain at least one phrase");
        }

        Ok(Self { keywords })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for CrisisKeywordSet {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_CRISIS_KEYWORDS
                .iter()
                .map(|keyword| (*keyword).to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisCheckResult {
    pub flagged: bool,
    /// Every keyword that matched, in keyword-set order.
    pub matched_terms: Vec<String>,
}

/// Substring-based crisis filter.
///
/// There is no word-boundary check: "die" matches inside "died" and "diesel".
/// False positives are preferred over false negatives here.
#[derive(Debug, Clone, Default)]
pub struct CrisisDetector {
    keywords: CrisisKeywordSet,
}

impl CrisisDetector {
    pub fn new(keywords: CrisisKeywordSet) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &CrisisKeywordSet {
        &self.keywords
    }

    pub fn check(&self, message: &str) -> CrisisCheckResult {
        let normalized = message.to_ascii_lowercase();
        let matched_terms: Vec<String> = self
            .keywords
            .keywords()
            .iter()
            .filter(|keyword| normalized.contains(keyword.as_str()))
            .cloned()
            .collect();

        CrisisCheckResult {
            flagged: !matched_terms.is_empty(),
            matched_terms,
        }
    }

    /// Stops at the first matching keyword.
    pub fn is_flagged(&self, message: &str) -> bool {
        let normalized = message.to_ascii_lowercase();
        self.keywords
            .keywords()
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_is_not_flagged() {
        let detector = CrisisDetector::default();
        assert_eq!(detector.check(""), CrisisCheckResult::default());
        assert!(!detector.is_flagged("   \n\t"));
    }

    #[test]
    fn test_clean_message_has_no_matches() {
        let detector = CrisisDetector::default();
        let result = detector.check("Exams are stressful but I had a nice walk today.");
        assert!(!result.flagged);
        assert!(result.matched_terms.is_empty());
    }

    #[test]
    fn test_every_keyword_flags_in_any_case() {
        let detector = CrisisDetector::default();
        for keyword in DEFAULT_CRISIS_KEYWORDS {
            let message = format!("... {} ...", keyword.to_ascii_uppercase());
            let result = detector.check(&message);
            assert!(result.flagged, "expected {keyword:?} to flag");
            assert!(result.matched_terms.iter().any(|term| term == keyword));
            assert!(detector.is_flagged(&message));
        }
    }

    #[test]
    fn test_hopeless_matches_regardless_of_case() {
        let detector = CrisisDetector::default();
        let result = detector.check("I feel HOPELESS today");
        assert!(result.flagged);
        assert_eq!(result.matched_terms, vec!["hopeless".to_string()]);
    }

    #[test]
    fn test_overlapping_keywords_reported_in_set_order() {
        let detector = CrisisDetector::default();
        let result = detector.check("I want to die");
        assert!(result.flagged);
        assert_eq!(
            result.matched_terms,
            vec!["want to die".to_string(), "die".to_string()]
        );
    }

    #[test]
    fn test_order_follows_keyword_set_not_message() {
        let detector = CrisisDetector::default();
        let result = detector.check("worthless... thinking about suicide");
        assert_eq!(
            result.matched_terms,
            vec!["suicide".to_string(), "worthless".to_string()]
        );
    }

    #[test]
    fn test_substring_over_trigger_is_kept() {
        let detector = CrisisDetector::default();
        assert!(detector.check("my phone died").flagged);
        assert!(detector.check("the diesel truck").flagged);
    }

    #[test]
    fn test_custom_set_is_normalized() {
        let set = CrisisKeywordSet::new(["  Self Harm ", "self harm", "", "CUT"]).unwrap();
        assert_eq!(set.keywords(), &["self harm".to_string(), "cut".to_string()]);

        let detector = CrisisDetector::new(set);
        assert!(detector.check("thinking about SELF HARM").flagged);
    }

    #[test]
    fn test_empty_custom_set_is_rejected() {
        assert!(CrisisKeywordSet::new(Vec::<String>::new()).is_err());
        assert!(CrisisKeywordSet::new(["   "]).is_err());
    }
}
