//! Concierge: orchestrates one career-navigation run.
//!
//! Flow: analyze_resume → research_market → compute_gap → design_curriculum.
//!
//! Strictly linear. The first failing stage aborts the run and no later stage
//! is invoked; no partial result is returned.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::agents::curriculum_designer::{design_curriculum, RoadmapDocument};
use crate::agents::market_researcher::{research_market, MarketResearch, SearchFailurePolicy};
use crate::agents::resume_analyzer::analyze_resume;
use crate::agents::skill_gap::{compute_gap, GapRecord};
use crate::errors::PipelineError;
use crate::llm_client::search::SearchService;
use crate::llm_client::ReasoningService;
use crate::schema::CandidateProfile;

pub mod handlers;
pub mod upload;

/// Inputs of one run.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapRequest {
    pub resume_text: String,
    pub target_role: String,
    pub current_role: Option<String>,
}

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct CareerPlan {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub candidate: CandidateProfile,
    pub market: MarketResearch,
    pub skill_gap: GapRecord,
    pub roadmap: RoadmapDocument,
}

/// Owns the model client and search service for the lifetime of the process
/// and lends them to each stage.
pub struct Concierge {
    llm: Arc<dyn ReasoningService>,
    search: Arc<dyn SearchService>,
    search_policy: SearchFailurePolicy,
}

impl Concierge {
    pub fn new(
        llm: Arc<dyn ReasoningService>,
        search: Arc<dyn SearchService>,
        search_policy: SearchFailurePolicy,
    ) -> Self {
        Self {
            llm,
            search,
            search_policy,
        }
    }

    /// Runs the four stages in order.
    pub async fn run(&self, request: &RoadmapRequest) -> Result<CareerPlan, PipelineError> {
        validate_request(request)?;

        let run_id = Uuid::new_v4();
        let current_role = request
            .current_role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty());

        // Step 1: Resume Analyzer
        info!("[{run_id}] Analyzing resume");
        let candidate = analyze_resume(&request.resume_text, self.llm.as_ref()).await?;
        info!(
            "[{run_id}] Resume analyzed: {} skills, current role '{}'",
            candidate.extracted_skills.len(),
            candidate.current_role
        );

        // Step 2: Market Researcher (the stated current role wins over the parsed one)
        let starting_role = current_role.unwrap_or(candidate.current_role.as_str());
        info!("[{run_id}] Researching market for '{}'", request.target_role.trim());
        let market = research_market(
            &request.target_role,
            Some(starting_role),
            self.llm.as_ref(),
            self.search.as_ref(),
            self.search_policy,
        )
        .await?;
        info!(
            "[{run_id}] Market researched: {} required skills (live search: {})",
            market.profile.core_required_skills.len(),
            market.live_search
        );

        // Step 3: Gap Calculator
        let skill_gap = compute_gap(&candidate.skill_record(), &market.profile.skill_record());
        if skill_gap.is_empty() {
            info!("[{run_id}] Skill gap: none, candidate already covers the required skills");
        } else {
            info!("[{run_id}] Skill gap: {} missing skills", skill_gap.len());
        }

        // Step 4: Curriculum Designer
        info!("[{run_id}] Designing curriculum");
        let roadmap =
            design_curriculum(&candidate, &market.profile, &skill_gap, self.llm.as_ref()).await?;
        info!(
            "[{run_id}] Roadmap generated ({} chars)",
            roadmap.as_markdown().len()
        );

        Ok(CareerPlan {
            run_id,
            generated_at: Utc::now(),
            candidate,
            market,
            skill_gap,
            roadmap,
        })
    }
}

fn validate_request(request: &RoadmapRequest) -> Result<(), PipelineError> {
    if request.resume_text.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.target_role.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "target_role cannot be empty".to_string(),
        ));
    }
    Ok(())
}
