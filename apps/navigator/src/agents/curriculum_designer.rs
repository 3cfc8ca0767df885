//! Curriculum Designer: synthesizes the six-month roadmap from all structured records.

use serde::Serialize;

use crate::agents::prompts::{CURRICULUM_PROMPT_TEMPLATE, CURRICULUM_SYSTEM};
use crate::agents::skill_gap::GapRecord;
use crate::errors::PipelineError;
use crate::llm_client::{ModelTier, Prompt, ReasoningService};
use crate::schema::{CandidateProfile, MarketProfile};

/// The terminal artifact of a run: a Markdown document, otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoadmapDocument(String);

impl RoadmapDocument {
    pub fn as_markdown(&self) -> &str {
        &self.0
    }
}

pub async fn design_curriculum(
    candidate: &CandidateProfile,
    market: &MarketProfile,
    gap: &GapRecord,
    llm: &dyn ReasoningService,
) -> Result<RoadmapDocument, PipelineError> {
    let prompt = Prompt {
        tier: ModelTier::Reasoning,
        system: CURRICULUM_SYSTEM.to_string(),
        user: build_curriculum_prompt(candidate, market, gap)?,
        response_schema: None,
    };

    let markdown = llm.generate(&prompt).await?;
    Ok(RoadmapDocument(markdown.trim().to_string()))
}

fn build_curriculum_prompt(
    candidate: &CandidateProfile,
    market: &MarketProfile,
    gap: &GapRecord,
) -> Result<String, PipelineError> {
    let candidate_json = serde_json::to_string_pretty(candidate)?;
    let market_json = serde_json::to_string_pretty(market)?;
    let skill_gap_json = serde_json::to_string(gap.missing_skills())?;

    Ok(CURRICULUM_PROMPT_TEMPLATE
        .replace("{candidate_json}", &candidate_json)
        .replace("{market_json}", &market_json)
        .replace("{skill_gap_json}", &skill_gap_json))
}
