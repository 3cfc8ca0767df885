//! Market Researcher: retrieval-augmented lookup of the skills a target role demands.
//!
//! Two calls: a grounded search that writes research prose, then a Fast-tier
//! structuring call that extracts a `MarketProfile` from that prose.

use std::str::FromStr;

use serde::Serialize;
use tracing::{info, warn};

use crate::agents::prompts::{
    MARKET_FALLBACK_CONTEXT_TEMPLATE, MARKET_SEARCH_PROMPT_TEMPLATE,
    MARKET_STRUCTURING_PROMPT_TEMPLATE, MARKET_STRUCTURING_SYSTEM,
};
use crate::errors::PipelineError;
use crate::llm_client::search::{SearchService, SearchSource};
use crate::llm_client::{ModelTier, Prompt, ReasoningService};
use crate::schema::{validate, MarketProfile, ResponseSchema};

/// What to do when live search fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchFailurePolicy {
    /// Abort the run with `SearchUnavailable`.
    #[default]
    Abort,
    /// Continue on the model's own knowledge; the result is flagged `live_search: false`.
    Degrade,
}

impl FromStr for SearchFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "degrade" => Ok(Self::Degrade),
            other => Err(format!(
                "unknown search failure policy '{other}' (expected 'abort' or 'degrade')"
            )),
        }
    }
}

/// Structured market data plus the provenance of the research behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketResearch {
    pub profile: MarketProfile,
    pub sources: Vec<SearchSource>,
    /// Queries the search backend actually issued.
    pub search_queries: Vec<String>,
    /// False when search failed and the `Degrade` policy kept the run going.
    pub live_search: bool,
}

/// Researches `target_role`, optionally framed as a move from `current_role`.
pub async fn research_market(
    target_role: &str,
    current_role: Option<&str>,
    llm: &dyn ReasoningService,
    search: &dyn SearchService,
    policy: SearchFailurePolicy,
) -> Result<MarketResearch, PipelineError> {
    let target_role = target_role.trim();
    if target_role.is_empty() {
        return Err(PipelineError::InvalidInput(
            "target_role cannot be empty".to_string(),
        ));
    }

    let transition = describe_transition(target_role, current_role);
    let query = MARKET_SEARCH_PROMPT_TEMPLATE.replace("{transition}", &transition);

    let searched = search.search(&query).await;
    let (research_context, sources, search_queries, live_search) = match searched {
        Ok(context) => {
            info!(
                "Live search for '{}' returned {} sources",
                target_role,
                context.sources.len()
            );
            (context.summary, context.sources, context.queries, true)
        }
        Err(e) => match policy {
            SearchFailurePolicy::Abort => {
                return Err(PipelineError::SearchUnavailable(e.to_string()));
            }
            SearchFailurePolicy::Degrade => {
                warn!("Live search failed ({e}); continuing without retrieval");
                (
                    MARKET_FALLBACK_CONTEXT_TEMPLATE.replace("{transition}", &transition),
                    Vec::new(),
                    Vec::new(),
                    false,
                )
            }
        },
    };

    let prompt = Prompt {
        tier: ModelTier::Fast,
        system: MARKET_STRUCTURING_SYSTEM.to_string(),
        user: MARKET_STRUCTURING_PROMPT_TEMPLATE
            .replace("{target_role}", target_role)
            .replace("{research_context}", &research_context),
        response_schema: Some(MarketProfile::response_schema()),
    };

    let reply = llm.generate(&prompt).await?;
    let profile: MarketProfile = validate(&reply)?;

    Ok(MarketResearch {
        profile,
        sources,
        search_queries,
        live_search,
    })
}

fn describe_transition(target_role: &str, current_role: Option<&str>) -> String {
    match current_role.map(str::trim).filter(|r| !r.is_empty()) {
        Some(current) => format!("the transition from '{current}' to '{target_role}'"),
        None => format!("the role '{target_role}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::test_support::{ScriptedLlm, ScriptedSearch, MARKET_REPLY};

    #[test]
    fn test_policy_parses_case_insensitively() {
        assert_eq!(
            "Degrade".parse::<SearchFailurePolicy>(),
            Ok(SearchFailurePolicy::Degrade)
        );
        assert_eq!(
            " abort ".parse::<SearchFailurePolicy>(),
            Ok(SearchFailurePolicy::Abort)
        );
        assert!("retry".parse::<SearchFailurePolicy>().is_err());
        assert_eq!(SearchFailurePolicy::default(), SearchFailurePolicy::Abort);
    }

    #[test]
    fn test_describe_transition() {
        assert_eq!(
            describe_transition("AI Engineer", Some("Data Analyst")),
            "the transition from 'Data Analyst' to 'AI Engineer'"
        );
        assert_eq!(
            describe_transition("AI Engineer", Some("  ")),
            "the role 'AI Engineer'"
        );
        assert_eq!(describe_transition("AI Engineer", None), "the role 'AI Engineer'");
    }

    #[tokio::test]
    async fn test_research_feeds_search_results_to_structuring_call() {
        let llm = ScriptedLlm::new(vec![Ok(MARKET_REPLY.to_string())]);
        let search = ScriptedSearch::found("AI Engineers need Kubernetes and Go.");

        let research = research_market(
            "AI Engineer",
            Some("Data Analyst"),
            &llm,
            &search,
            SearchFailurePolicy::Abort,
        )
        .await
        .unwrap();

        assert!(research.live_search);
        assert_eq!(research.sources.len(), 1);
        assert_eq!(research.search_queries, vec!["ai engineer skills"]);
        assert_eq!(research.profile.target_role, "AI Engineer");

        let queries = search.queries();
        assert_eq!(queries.len(), 1);
        assert!(queries[0].contains("from 'Data Analyst' to 'AI Engineer'"));

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].tier, ModelTier::Fast);
        assert!(prompts[0].user.contains("AI Engineers need Kubernetes and Go."));
    }

    #[tokio::test]
    async fn test_search_failure_aborts_under_abort_policy() {
        let llm = ScriptedLlm::new(vec![Ok(MARKET_REPLY.to_string())]);
        let search = ScriptedSearch::failing();

        let err = research_market("AI Engineer", None, &llm, &search, SearchFailurePolicy::Abort)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::SearchUnavailable(_)));
        assert!(llm.prompts().is_empty(), "structuring must not run");
    }

    #[tokio::test]
    async fn test_search_failure_degrades_under_degrade_policy() {
        let llm = ScriptedLlm::new(vec![Ok(MARKET_REPLY.to_string())]);
        let search = ScriptedSearch::failing();

        let research =
            research_market("AI Engineer", None, &llm, &search, SearchFailurePolicy::Degrade)
                .await
                .unwrap();

        assert!(!research.live_search);
        assert!(research.sources.is_empty());
        assert!(research.search_queries.is_empty());
        assert!(llm.prompts()[0].user.contains("No live search results"));
    }

    #[tokio::test]
    async fn test_blank_target_role_is_rejected_before_search() {
        let llm = ScriptedLlm::new(vec![]);
        let search = ScriptedSearch::found("unused");

        let err = research_market(" ", None, &llm, &search, SearchFailurePolicy::Abort)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::InvalidInput(_)));
        assert!(search.queries().is_empty());
    }
}
