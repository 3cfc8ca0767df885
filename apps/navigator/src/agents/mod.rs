// Pipeline stages: Resume Analyzer, Market Researcher, Gap Calculator, Curriculum Designer.
// All LLM calls go through llm_client. No direct Gemini calls here.

pub mod curriculum_designer;
pub mod market_researcher;
pub mod prompts;
pub mod resume_analyzer;
pub mod skill_gap;

#[cfg(test)]
pub(crate) mod test_support;
