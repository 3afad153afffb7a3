//! Display model for a research paper card

use crate::types::{format_score, PaperSource, ResearchPaper};

/// Abstract previews are clamped to roughly three lines of card text
pub const ABSTRACT_PREVIEW_CHARS: usize = 240;

/// Badge color family for a paper's source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTone {
    Red,
    Blue,
    Green,
}

impl From<&PaperSource> for SourceTone {
    fn from(source: &PaperSource) -> Self {
        match source {
            PaperSource::Arxiv => Self::Red,
            PaperSource::Ieee => Self::Blue,
            PaperSource::Other(_) => Self::Green,
        }
    }
}

/// External link shown at the bottom of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub label: &'static str,
    pub url: String,
}

/// Everything a card renders, derived from an already-fetched paper
#[derive(Debug, Clone, PartialEq)]
pub struct PaperCard {
    pub title: String,
    /// Highlighted variant used for the top result
    pub is_main: bool,
    pub score_label: Option<String>,
    pub source_label: String,
    pub source_tone: SourceTone,
    pub authors_line: Option<String>,
    pub abstract_preview: Option<String>,
    pub links: Vec<CardLink>,
}

impl PaperCard {
    pub fn new(paper: &ResearchPaper, is_main: bool) -> Self {
        let mut links = Vec::new();
        if let Some(url) = &paper.link {
            links.push(CardLink {
                label: "View Paper →",
                url: url.clone(),
            });
        }
        if let Some(url) = &paper.pdf_link {
            links.push(CardLink {
                label: "PDF →",
                url: url.clone(),
            });
        }

        Self {
            title: paper.title.clone(),
            is_main,
            score_label: paper
                .score
                .map(|score| format!("Score: {}/10", format_score(score))),
            source_label: paper.source.to_string(),
            source_tone: SourceTone::from(&paper.source),
            authors_line: paper.authors.as_ref().map(|authors| authors.join(", ")),
            abstract_preview: paper
                .abstract_text
                .as_deref()
                .map(|text| truncate(text, ABSTRACT_PREVIEW_CHARS)),
            links,
        }
    }
}

/// Truncate on a char boundary, appending an ellipsis when anything was cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", text[..idx].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_card() {
        let mut paper = ResearchPaper::new("Attention", PaperSource::Arxiv);
        paper.score = Some(9.5);
        paper.authors = Some(vec!["Vaswani".to_string(), "Shazeer".to_string()]);
        paper.abstract_text = Some("Transformers.".to_string());
        paper.link = Some("https://arxiv.org/abs/1706.03762".to_string());
        paper.pdf_link = Some("https://arxiv.org/pdf/1706.03762".to_string());

        let card = PaperCard::new(&paper, true);

        assert_eq!(card.score_label.as_deref(), Some("Score: 9.5/10"));
        assert_eq!(card.source_label, "arXiv");
        assert_eq!(card.source_tone, SourceTone::Red);
        assert_eq!(card.authors_line.as_deref(), Some("Vaswani, Shazeer"));
        assert_eq!(card.abstract_preview.as_deref(), Some("Transformers."));
        assert_eq!(
            card.links.iter().map(|l| l.label).collect::<Vec<_>>(),
            vec!["View Paper →", "PDF →"]
        );
    }

    #[test]
    fn test_sparse_card() {
        let paper = ResearchPaper::new("Untitled", PaperSource::Other("ACM".to_string()));
        let card = PaperCard::new(&paper, false);

        assert_eq!(card.score_label, None);
        assert_eq!(card.source_label, "ACM");
        assert_eq!(card.source_tone, SourceTone::Green);
        assert_eq!(card.authors_line, None);
        assert_eq!(card.abstract_preview, None);
        assert!(card.links.is_empty());
    }

    #[test]
    fn test_ieee_is_blue() {
        assert_eq!(SourceTone::from(&PaperSource::Ieee), SourceTone::Blue);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef ghij", 7), "abcdef…");
        assert_eq!(truncate("ééééé", 3), "ééé…");
    }
}
