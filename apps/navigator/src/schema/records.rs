use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::schema::{require_items, require_text, ResponseSchema};

/// A named entity with an ordered list of skills.
/// The Gap Calculator only ever sees records of this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub skills: Vec<String>,
}

impl SkillRecord {
    pub fn new(name: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            name: name.into(),
            skills,
        }
    }
}

/// Structured output of the Resume Analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CandidateProfile {
    pub candidate_name: String,
    pub current_role: String,
    pub total_experience_years: f64,
    /// Hard technical and soft skills, normalized by the model.
    pub extracted_skills: Vec<String>,
}

impl CandidateProfile {
    pub fn skill_record(&self) -> SkillRecord {
        SkillRecord::new(&self.candidate_name, self.extracted_skills.clone())
    }
}

impl ResponseSchema for CandidateProfile {
    const NAME: &'static str = "CandidateProfile";

    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "candidate_name": {
                    "type": "STRING",
                    "description": "The full name of the candidate."
                },
                "current_role": {
                    "type": "STRING",
                    "description": "The candidate's most recent or current job title."
                },
                "total_experience_years": {
                    "type": "NUMBER",
                    "description": "The total estimated professional experience in years."
                },
                "extracted_skills": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "A comprehensive list of all hard technical and soft skills."
                }
            },
            "required": ["candidate_name", "current_role", "total_experience_years", "extracted_skills"],
            "propertyOrdering": ["candidate_name", "current_role", "total_experience_years", "extracted_skills"]
        })
    }

    fn check(&self) -> Result<(), String> {
        require_text("candidate_name", &self.candidate_name)?;
        require_text("current_role", &self.current_role)?;
        if !self.total_experience_years.is_finite() || self.total_experience_years < 0.0 {
            return Err(format!(
                "field `total_experience_years` must be a non-negative number, got {}",
                self.total_experience_years
            ));
        }
        require_items("extracted_skills", &self.extracted_skills)
    }
}

/// Structured output of the Market Researcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketProfile {
    pub target_role: String,
    /// The 5-8 most critical hard skills for the role.
    pub core_required_skills: Vec<String>,
    /// 3-5 specific tools or frameworks.
    pub in_demand_tools: Vec<String>,
    pub salary_range_usd: String,
    pub top_3_career_gaps: Vec<String>,
}

impl MarketProfile {
    pub fn skill_record(&self) -> SkillRecord {
        SkillRecord::new(&self.target_role, self.core_required_skills.clone())
    }
}

impl ResponseSchema for MarketProfile {
    const NAME: &'static str = "MarketProfile";

    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "target_role": {
                    "type": "STRING",
                    "description": "The final job title."
                },
                "core_required_skills": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "A list of 5-8 most critical hard skills."
                },
                "in_demand_tools": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "A list of 3-5 specific tools or frameworks."
                },
                "salary_range_usd": {
                    "type": "STRING",
                    "description": "The current average entry-level salary range."
                },
                "top_3_career_gaps": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "The three biggest knowledge/experience gaps."
                }
            },
            "required": ["target_role", "core_required_skills", "in_demand_tools", "salary_range_usd", "top_3_career_gaps"],
            "propertyOrdering": ["target_role", "core_required_skills", "in_demand_tools", "salary_range_usd", "top_3_career_gaps"]
        })
    }

    fn check(&self) -> Result<(), String> {
        require_text("target_role", &self.target_role)?;
        require_items("core_required_skills", &self.core_required_skills)?;
        require_items("in_demand_tools", &self.in_demand_tools)?;
        require_text("salary_range_usd", &self.salary_range_usd)?;
        require_items("top_3_career_gaps", &self.top_3_career_gaps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{validate, SchemaError};

    fn market_reply() -> Value {
        json!({
            "target_role": "AI Engineer",
            "core_required_skills": ["Python", "PyTorch", "MLOps", "Kubernetes", "Go"],
            "in_demand_tools": ["LangChain", "Docker", "Weights & Biases"],
            "salary_range_usd": "$110,000 - $140,000",
            "top_3_career_gaps": ["Model deployment", "Deep learning", "System design"]
        })
    }

    #[test]
    fn test_market_profile_validates_and_exposes_skill_record() {
        let profile: MarketProfile = validate(&market_reply().to_string()).unwrap();
        let record = profile.skill_record();
        assert_eq!(record.name, "AI Engineer");
        assert_eq!(record.skills[1], "PyTorch");
    }

    #[test]
    fn test_market_profile_rejects_blank_target_role() {
        let mut reply = market_reply();
        reply["target_role"] = json!("   ");
        let err = validate::<MarketProfile>(&reply.to_string()).unwrap_err();
        assert!(matches!(err, SchemaError::Contract { schema: "MarketProfile", .. }));
    }

    #[test]
    fn test_candidate_profile_rejects_negative_experience() {
        let reply = json!({
            "candidate_name": "Jordan Lee",
            "current_role": "Data Analyst",
            "total_experience_years": -2.0,
            "extracted_skills": ["Python"]
        });
        let err = validate::<CandidateProfile>(&reply.to_string()).unwrap_err();
        match err {
            SchemaError::Contract { message, .. } => {
                assert!(message.contains("total_experience_years"))
            }
            other => panic!("expected Contract error, got {other:?}"),
        }
    }

    #[test]
    fn test_candidate_skill_record_uses_name_and_skills() {
        let profile = CandidateProfile {
            candidate_name: "Jordan Lee".to_string(),
            current_role: "Data Analyst".to_string(),
            total_experience_years: 5.0,
            extracted_skills: vec!["Python".to_string(), "SQL".to_string()],
        };
        assert_eq!(
            profile.skill_record(),
            SkillRecord::new("Jordan Lee", vec!["Python".to_string(), "SQL".to_string()])
        );
    }

    #[test]
    fn test_response_schemas_require_every_property() {
        for schema in [
            CandidateProfile::response_schema(),
            MarketProfile::response_schema(),
        ] {
            let properties = schema["properties"].as_object().unwrap();
            let required: Vec<&str> = schema["required"]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_str().unwrap())
                .collect();
            assert_eq!(properties.len(), required.len());
            for key in properties.keys() {
                assert!(required.contains(&key.as_str()), "{key} not required");
            }
        }
    }
}
