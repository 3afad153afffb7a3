//! Innovation Lab wire types

use serde::{Deserialize, Serialize};

/// A titled group of generated ideas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdeaSection {
    pub title: String,
    #[serde(default)]
    pub ideas: Vec<String>,
}

impl IdeaSection {
    pub fn new(title: impl Into<String>, ideas: Vec<String>) -> Self {
        Self {
            title: title.into(),
            ideas,
        }
    }
}

/// Body of `POST /innovation/generate` and `POST /research`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicRequest {
    pub topic: String,
}

impl TopicRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }
}

/// Response of `POST /innovation/generate`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    #[serde(default)]
    pub sections: Vec<IdeaSection>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_sections_defaults_to_empty() {
        let resp: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.sections.is_empty());
    }

    #[test]
    fn test_sections_keep_order() {
        let resp: GenerateResponse = serde_json::from_str(
            r#"{"sections":[{"title":"A","ideas":["x","y"]},{"title":"B","ideas":[]}]}"#,
        )
        .unwrap();
        assert_eq!(
            resp.sections,
            vec![
                IdeaSection::new("A", vec!["x".to_string(), "y".to_string()]),
                IdeaSection::new("B", vec![]),
            ]
        );
    }
}
