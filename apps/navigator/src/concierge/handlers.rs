//! Axum route handlers for the Roadmap API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::debug;

use crate::agents::skill_gap::{compute_gap, GapRecord, SkillGapRequest};
use crate::concierge::upload::extract_resume_text;
use crate::concierge::{CareerPlan, RoadmapRequest};
use crate::errors::AppError;
use crate::schema::SkillRecord;
use crate::state::AppState;

/// POST /api/v1/roadmap
///
/// Full pipeline: resume analysis → market research → skill gap → curriculum.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<CareerPlan>, AppError> {
    let plan = state.concierge.run(&request).await?;
    Ok(Json(plan))
}

/// POST /api/v1/roadmap/upload
///
/// Same pipeline, with the resume sent as a multipart file (PDF or text).
/// Fields: `target_role`, optional `current_role`, and `resume` (file) or `resume_text`.
pub async fn handle_roadmap_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CareerPlan>, AppError> {
    let mut target_role = None;
    let mut current_role = None;
    let mut resume_text = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "target_role" => target_role = Some(read_text(field).await?),
            "current_role" => current_role = Some(read_text(field).await?),
            "resume_text" => resume_text = Some(read_text(field).await?),
            "resume" => {
                let content_type = field.content_type().map(str::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
                resume_text = Some(extract_resume_text(content_type.as_deref(), data).await?);
            }
            other => debug!("Ignoring unknown multipart field '{other}'"),
        }
    }

    let request = RoadmapRequest {
        resume_text: resume_text
            .ok_or_else(|| AppError::Validation("resume or resume_text is required".to_string()))?,
        target_role: target_role
            .ok_or_else(|| AppError::Validation("target_role is required".to_string()))?,
        current_role,
    };

    let plan = state.concierge.run(&request).await?;
    Ok(Json(plan))
}

/// POST /api/v1/skill-gap
///
/// Pure gap calculation between two skill lists. No model call.
pub async fn handle_skill_gap(Json(request): Json<SkillGapRequest>) -> Json<GapRecord> {
    let existing = SkillRecord::new("existing", request.existing_skills);
    let required = SkillRecord::new("required", request.required_skills);
    Json(compute_gap(&existing, &required))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    let name = field.name().unwrap_or_default().to_string();
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read field '{name}': {e}")))
}
