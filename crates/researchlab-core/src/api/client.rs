//! HTTP client for the research backend

use super::{IdeaApi, ResearchApi, GENERATE_PATH, RESEARCH_PATH};
use crate::config::AppConfig;
use crate::error::{ApiError, Error, Result};
use crate::types::{GenerateResponse, IdeaSection, ResearchResult, TopicRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// JSON-over-HTTP client for `/innovation/generate` and `/research`
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base: String,
}

impl BackendClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("researchlab/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.backend_url.clone(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    async fn post_topic<T: DeserializeOwned>(&self, path: &str, topic: &str) -> Result<T> {
        let url = format!("{}{}", self.base, path);
        debug!("POST {}", url);

        let resp = self
            .http
            .post(&url)
            .json(&TopicRequest::new(topic))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            Error::Api(ApiError::Decode {
                endpoint: path.to_string(),
                message: e.to_string(),
            })
        })
    }
}

#[async_trait]
impl IdeaApi for BackendClient {
    async fn generate_ideas(&self, topic: &str) -> Result<Vec<IdeaSection>> {
        let resp: GenerateResponse = self.post_topic(GENERATE_PATH, topic).await?;
        info!("Received {} idea sections", resp.sections.len());
        Ok(resp.sections)
    }
}

#[async_trait]
impl ResearchApi for BackendClient {
    async fn research(&self, topic: &str) -> Result<ResearchResult> {
        let result: ResearchResult = self.post_topic(RESEARCH_PATH, topic).await?;
        info!(
            "Research finished with score {} and {} related papers",
            result.score,
            result.related_papers.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    fn client(base: String) -> BackendClient {
        BackendClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_generate_posts_topic_and_reads_sections() {
        let router = Router::new().route(
            GENERATE_PATH,
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "sections": [{ "title": body["topic"], "ideas": ["x", "y"] }]
                }))
            }),
        );
        let backend = client(spawn_backend(router).await);

        let sections = backend.generate_ideas("Edge AI").await.unwrap();

        assert_eq!(
            sections,
            vec![IdeaSection::new("Edge AI", vec!["x".into(), "y".into()])]
        );
    }

    #[tokio::test]
    async fn test_generate_without_sections_is_empty() {
        let router = Router::new().route(GENERATE_PATH, post(|| async { Json(json!({})) }));
        let backend = client(spawn_backend(router).await);

        assert!(backend.generate_ideas("t").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_research_non_success_status_is_error() {
        let router = Router::new().route(
            RESEARCH_PATH,
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let backend = client(spawn_backend(router).await);

        let err = backend.research("t").await.unwrap_err();

        assert!(matches!(
            err,
            Error::Api(ApiError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_research_malformed_body_is_decode_error() {
        let router = Router::new().route(RESEARCH_PATH, post(|| async { "not json" }));
        let backend = client(spawn_backend(router).await);

        let err = backend.research("t").await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let backend = client(format!("http://{}", addr));

        let err = backend.research("t").await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Transport(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let backend = client("http://localhost:5000/".to_string());
        assert_eq!(backend.base_url(), "http://localhost:5000");
    }
}
