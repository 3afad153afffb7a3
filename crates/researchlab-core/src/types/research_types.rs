//! Research Dashboard wire types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a paper was found
///
/// The backend sends a free-form string; `arXiv` and `IEEE` get their own
/// badge colors, anything else falls into `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaperSource {
    Arxiv,
    Ieee,
    Other(String),
}

impl Default for PaperSource {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl PaperSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Arxiv => "arXiv",
            Self::Ieee => "IEEE",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for PaperSource {
    fn from(s: String) -> Self {
        match s.as_str() {
            "arXiv" => Self::Arxiv,
            "IEEE" => Self::Ieee,
            _ => Self::Other(s),
        }
    }
}

impl From<PaperSource> for String {
    fn from(source: PaperSource) -> Self {
        match source {
            PaperSource::Other(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaperSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A paper returned by the research pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchPaper {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default)]
    pub source: PaperSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_link: Option<String>,
}

impl ResearchPaper {
    pub fn new(title: impl Into<String>, source: PaperSource) -> Self {
        Self {
            title: title.into(),
            authors: None,
            abstract_text: None,
            score: None,
            source,
            link: None,
            pdf_link: None,
        }
    }
}

/// Structured outcome of `POST /research`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResult {
    /// Overall research quality, 0-10
    pub score: f64,
    #[serde(default)]
    pub top_paper: Option<ResearchPaper>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub related_papers: Vec<ResearchPaper>,
    #[serde(default)]
    pub feedback: Vec<String>,
}

impl ResearchResult {
    pub fn with_score(score: f64) -> Self {
        Self {
            score,
            top_paper: None,
            insights: Vec::new(),
            related_papers: Vec::new(),
            feedback: Vec::new(),
        }
    }
}

/// Render a score the way the backend sent it: `8` stays `8`, `7.5` stays `7.5`
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{}", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_parsing() {
        assert_eq!(PaperSource::from("arXiv".to_string()), PaperSource::Arxiv);
        assert_eq!(PaperSource::from("IEEE".to_string()), PaperSource::Ieee);
        assert_eq!(
            PaperSource::from("ACM".to_string()),
            PaperSource::Other("ACM".to_string())
        );
    }

    #[test]
    fn test_result_from_backend_json() {
        let json = r#"{
            "score": 8.5,
            "top_paper": {
                "title": "Machine Unlearning",
                "authors": ["A. Author", "B. Author"],
                "abstract": "We study forgetting.",
                "score": 9,
                "source": "arXiv",
                "link": "https://arxiv.org/abs/1",
                "pdf_link": "https://arxiv.org/pdf/1"
            },
            "insights": ["first", "second"]
        }"#;

        let result: ResearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.score, 8.5);
        let top = result.top_paper.unwrap();
        assert_eq!(top.source, PaperSource::Arxiv);
        assert_eq!(top.abstract_text.as_deref(), Some("We study forgetting."));
        assert_eq!(top.score, Some(9.0));
        assert_eq!(result.insights, vec!["first", "second"]);
        assert!(result.related_papers.is_empty());
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn test_paper_serializes_source_as_string() {
        let paper = ResearchPaper::new("T", PaperSource::Ieee);
        let value = serde_json::to_value(&paper).unwrap();
        assert_eq!(value["source"], "IEEE");
        assert!(value.get("abstract").is_none());
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(8.0), "8");
        assert_eq!(format_score(7.5), "7.5");
        assert_eq!(format_score(0.0), "0");
        // Whole numbers past i64 range print in full
        assert_eq!(format_score(1e20), "100000000000000000000");
    }
}
