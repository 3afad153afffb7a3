//! Innovation Lab page state

use crate::api::IdeaApi;
use crate::error::Result;
use crate::types::IdeaSection;
use std::sync::Arc;
use tracing::{debug, warn};

pub const EMPTY_TOPIC_ERROR: &str = "Please enter a topic.";
pub const GENERATE_FAILED_ERROR: &str = "Failed to generate ideas. Please try again.";

/// Topic input, loading flag, error line and the generated sections
pub struct IdeaGenerator {
    api: Arc<dyn IdeaApi>,
    topic: String,
    sections: Vec<IdeaSection>,
    is_loading: bool,
    error: Option<String>,
}

impl IdeaGenerator {
    pub fn new(api: Arc<dyn IdeaApi>) -> Self {
        Self {
            api,
            topic: String::new(),
            sections: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    pub fn api(&self) -> Arc<dyn IdeaApi> {
        Arc::clone(&self.api)
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Ignored while a request is in flight, the input is disabled then
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        if !self.is_loading {
            self.topic = topic.into();
        }
    }

    pub fn sections(&self) -> &[IdeaSection] {
        &self.sections
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading {
            "Generating..."
        } else {
            "Generate Ideas"
        }
    }

    /// Validate and enter the loading state.
    ///
    /// Returns the topic to send, or `None` when the submission is rejected
    /// (empty topic, or a request already running).
    pub fn begin_generate(&mut self) -> Option<String> {
        if self.is_loading {
            return None;
        }

        if self.topic.trim().is_empty() {
            debug!("Rejected idea generation: empty topic");
            self.error = Some(EMPTY_TOPIC_ERROR.to_string());
            return None;
        }

        self.error = None;
        self.is_loading = true;
        self.sections.clear();
        Some(self.topic.clone())
    }

    /// Apply the outcome of a request started with [`begin_generate`](Self::begin_generate)
    pub fn complete(&mut self, outcome: Result<Vec<IdeaSection>>) {
        match outcome {
            Ok(sections) => self.sections = sections,
            Err(e) => {
                warn!("Idea generation failed: {}", e);
                self.sections.clear();
                self.error = Some(GENERATE_FAILED_ERROR.to_string());
            }
        }
        self.is_loading = false;
    }

    /// Run a whole submission against the configured backend
    pub async fn generate(&mut self) {
        let Some(topic) = self.begin_generate() else {
            return;
        };
        let api = self.api();
        let outcome = api.generate_ideas(&topic).await;
        self.complete(outcome);
    }
}
