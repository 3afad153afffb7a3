//! Saved research results

use super::{ResearchPaper, ResearchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-saved reference to a completed research result, keyed by topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Opaque, derived from the creation time in milliseconds
    pub id: String,
    pub topic: String,
    pub date: DateTime<Utc>,
    pub score: f64,
    pub top_paper: Option<ResearchPaper>,
}

impl Bookmark {
    /// Build a bookmark for `topic` from a finished result, stamped with the current time
    pub fn from_result(topic: impl Into<String>, result: &ResearchResult) -> Self {
        Self::at(topic, result, Utc::now())
    }

    pub fn at(topic: impl Into<String>, result: &ResearchResult, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            topic: topic.into(),
            date: now,
            score: result.score,
            top_paper: result.top_paper.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaperSource;
    use chrono::TimeZone;

    #[test]
    fn test_bookmark_from_result() {
        let mut result = ResearchResult::with_score(7.0);
        result.top_paper = Some(ResearchPaper::new("Top", PaperSource::Arxiv));
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let bookmark = Bookmark::at("Quantum Computing", &result, now);

        assert_eq!(bookmark.id, now.timestamp_millis().to_string());
        assert_eq!(bookmark.topic, "Quantum Computing");
        assert_eq!(bookmark.score, 7.0);
        assert_eq!(bookmark.top_paper.unwrap().title, "Top");
    }

    #[test]
    fn test_bookmark_json_uses_camel_case() {
        let result = ResearchResult::with_score(5.0);
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let value = serde_json::to_value(Bookmark::at("T", &result, now)).unwrap();

        assert!(value.get("topPaper").is_some());
        assert_eq!(value["date"], "2024-03-01T12:00:00Z");
    }
}
