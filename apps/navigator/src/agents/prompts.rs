// All LLM prompt constants for the pipeline stages.
// The grounded-search system prompt lives with the client in llm_client::prompts.

/// System prompt for resume analysis. The JSON contract is carried by the response schema.
pub const RESUME_ANALYSIS_SYSTEM: &str = "You are an expert resume parsing agent. \
    Accurately extract key information from raw resume text and normalize the skills \
    into a common list. Never invent skills, employers or titles that the text does not support.";

/// Resume analysis prompt template. Replace `{resume_text}` before sending.
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Extract the candidate's profile from the raw resume text below.

Rules:
- candidate_name: the full name; use "Unknown Candidate" if the text never states it.
- current_role: the most recent or current job title.
- total_experience_years: total professional experience in years, estimated from dates or stated tenure.
- extracted_skills: every hard technical and soft skill, one skill per entry, using the common
  industry spelling (e.g. "PostgreSQL", not "postgres db"). No duplicates.

RAW RESUME TEXT:
---
{resume_text}
---"#;

/// Retrieval prompt for the market search. Replace `{transition}` before sending.
pub const MARKET_SEARCH_PROMPT_TEMPLATE: &str = r#"Use the Google Search tool to find the most current and in-demand skills, tools, salary range, and career gaps for {transition}.

Synthesize the search results into a detailed, structured paragraph of text covering:
- the 5-8 most critical hard skills,
- 3-5 specific tools or frameworks employers ask for,
- the current average entry-level salary range in USD,
- the three biggest knowledge or experience gaps people face.

DO NOT output JSON."#;

/// System prompt for turning research prose into a `MarketProfile`.
pub const MARKET_STRUCTURING_SYSTEM: &str = "You are a precise data extraction agent. \
    Extract the required fields from market research context into the required JSON schema. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object.";

/// Structuring prompt. Replace `{target_role}` and `{research_context}` before sending.
pub const MARKET_STRUCTURING_PROMPT_TEMPLATE: &str = r#"Extract the required fields from the market research context provided below and format it perfectly into the required JSON schema.

The target_role field must be the final job title: {target_role}

Market Research Context:
---
{research_context}
---"#;

/// Research context used when live search is skipped. Replace `{transition}`.
pub const MARKET_FALLBACK_CONTEXT_TEMPLATE: &str = "No live search results are available. \
    Use your own knowledge of the current job market for {transition}.";

/// System prompt for the curriculum designer. Output is Markdown, not JSON.
pub const CURRICULUM_SYSTEM: &str = "You are the Curriculum Designer Agent. \
    You synthesize candidate and market data into practical, week-by-week learning plans. \
    Respond with a single Markdown document and nothing else.";

/// Curriculum prompt template.
/// Replace: {candidate_json}, {market_json}, {skill_gap_json}
pub const CURRICULUM_PROMPT_TEMPLATE: &str = r#"Synthesize the following data into a comprehensive, 6-month, week-by-week learning plan designed to close the Skill Gap.

CANDIDATE DATA:
{candidate_json}

MARKET DATA:
{market_json}

SKILL GAP (missing skills):
{skill_gap_json}

Create a detailed 6-Month Career Transition Roadmap.
1. Structure the plan by **Months and Weeks**: exactly six month sections, each broken into weeks.
2. Dedicate the first 4 months to learning the **Missing Skills** and **In-Demand Tools**.
3. Dedicate the last 2 months to **Capstone Projects** and **Interview Prep**.
4. Build on the candidate's existing skills instead of re-teaching them.
5. Format the entire output as a single, beautiful **Markdown** response."#;
