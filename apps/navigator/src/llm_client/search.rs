//! Live web retrieval for retrieval-augmented calls.
//!
//! The production backend is Gemini's hosted `google_search` tool: a Reasoning-tier
//! call that searches, reads, and synthesizes the results into prose.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::llm_client::prompts::SEARCH_SYSTEM;
use crate::llm_client::{GeminiClient, LlmError, ModelTier, Prompt};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search backend failed: {0}")]
    Backend(#[from] LlmError),

    #[error("search returned no research context")]
    NoResults,
}

/// A web page the research context was grounded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSource {
    pub title: String,
    pub uri: String,
}

/// Synthesized research text plus the sources behind it.
#[derive(Debug, Clone, Default)]
pub struct SearchContext {
    pub summary: String,
    pub sources: Vec<SearchSource>,
    pub queries: Vec<String>,
}

#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchContext, SearchError>;
}

/// `SearchService` backed by the Gemini `google_search` tool.
#[derive(Debug, Clone)]
pub struct GoogleSearchGrounding {
    client: GeminiClient,
}

impl GoogleSearchGrounding {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchService for GoogleSearchGrounding {
    async fn search(&self, query: &str) -> Result<SearchContext, SearchError> {
        let prompt = Prompt {
            tier: ModelTier::Reasoning,
            system: SEARCH_SYSTEM.to_string(),
            user: query.to_string(),
            response_schema: None,
        };
        let response = self.client.call(&prompt, true).await?;

        let (sources, queries) = match response.grounding() {
            Some(grounding) => (
                grounding
                    .grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .filter_map(|web| {
                        let uri = web.uri.clone()?;
                        Some(SearchSource {
                            title: web.title.clone().unwrap_or_else(|| uri.clone()),
                            uri,
                        })
                    })
                    .collect::<Vec<_>>(),
                grounding.web_search_queries.clone(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        let summary = match response.into_text() {
            Ok(text) => text,
            Err(LlmError::EmptyContent) => return Err(SearchError::NoResults),
            Err(e) => return Err(e.into()),
        };

        debug!(
            "Grounded search returned {} chars from {} sources ({} queries)",
            summary.len(),
            sources.len(),
            queries.len()
        );

        Ok(SearchContext {
            summary,
            sources,
            queries,
        })
    }
}
