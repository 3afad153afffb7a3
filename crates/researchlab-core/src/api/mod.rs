//! Research backend collaborators
//!
//! The pages only ever talk to the backend through these two traits so the
//! view-models can be driven by the HTTP client in the app and by mocks in tests.

mod client;

pub use client::BackendClient;

use crate::error::Result;
use crate::types::{IdeaSection, ResearchResult};
use async_trait::async_trait;

/// Endpoint path for idea generation
pub const GENERATE_PATH: &str = "/innovation/generate";
/// Endpoint path for the research pipeline
pub const RESEARCH_PATH: &str = "/research";

/// Generates titled idea lists for a topic
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdeaApi: Send + Sync {
    async fn generate_ideas(&self, topic: &str) -> Result<Vec<IdeaSection>>;
}

/// Runs the backend multi-agent research pipeline for a topic
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResearchApi: Send + Sync {
    async fn research(&self, topic: &str) -> Result<ResearchResult>;
}
