//! Scripted stand-ins for the model and search services.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::search::{SearchContext, SearchError, SearchService, SearchSource};
use crate::llm_client::{LlmError, Prompt, ReasoningService};

/// Replays canned replies in order and records every prompt it receives.
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<Prompt>>,
}

impl ScriptedLlm {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReasoningService for ScriptedLlm {
    async fn generate(&self, prompt: &Prompt) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}

/// Returns a fixed research context, or fails every time.
pub struct ScriptedSearch {
    outcome: Option<SearchContext>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedSearch {
    pub fn found(summary: &str) -> Self {
        Self {
            outcome: Some(SearchContext {
                summary: summary.to_string(),
                sources: vec![SearchSource {
                    title: "Job market report".to_string(),
                    uri: "https://example.com/report".to_string(),
                }],
                queries: vec!["ai engineer skills".to_string()],
            }),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            outcome: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchService for ScriptedSearch {
    async fn search(&self, query: &str) -> Result<SearchContext, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.outcome.clone().ok_or(SearchError::Backend(LlmError::Api {
            status: 503,
            message: "search backend down".to_string(),
        }))
    }
}

pub const CANDIDATE_REPLY: &str = r#"{
    "candidate_name": "Jordan Lee",
    "current_role": "Data Analyst",
    "total_experience_years": 5,
    "extracted_skills": ["Python", "SQL", "Tableau"]
}"#;

pub const MARKET_REPLY: &str = r#"{
    "target_role": "AI Engineer",
    "core_required_skills": ["Python", "SQL", "Kubernetes", "Go"],
    "in_demand_tools": ["Docker", "PyTorch", "LangChain"],
    "salary_range_usd": "$110,000 - $140,000",
    "top_3_career_gaps": ["Model deployment", "Deep learning", "System design"]
}"#;

pub const ROADMAP_REPLY: &str = "# 6-Month Career Transition Roadmap\n\n## Month 1\n### Week 1\nKubernetes basics.";
