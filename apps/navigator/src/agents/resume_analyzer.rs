//! Resume Analyzer: extracts a structured candidate profile from raw resume text.

use crate::agents::prompts::{RESUME_ANALYSIS_PROMPT_TEMPLATE, RESUME_ANALYSIS_SYSTEM};
use crate::errors::PipelineError;
use crate::llm_client::{ModelTier, Prompt, ReasoningService};
use crate::schema::{validate, CandidateProfile, ResponseSchema};

/// Parses a resume with the Fast model and returns a validated `CandidateProfile`.
pub async fn analyze_resume(
    resume_text: &str,
    llm: &dyn ReasoningService,
) -> Result<CandidateProfile, PipelineError> {
    if resume_text.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let prompt = Prompt {
        tier: ModelTier::Fast,
        system: RESUME_ANALYSIS_SYSTEM.to_string(),
        user: RESUME_ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text.trim()),
        response_schema: Some(CandidateProfile::response_schema()),
    };

    let reply = llm.generate(&prompt).await?;
    Ok(validate(&reply)?)
}
