//! Gap Calculator: pure, local set difference between two skill records.
//!
//! Skills are compared by their trimmed, lower-cased form, so "Python " and
//! "python" are the same skill. The gap keeps the first spelling seen in the
//! required record and follows its order, which makes the result deterministic.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::schema::SkillRecord;

/// Skills present in the required record but absent from the existing one.
///
/// Invariant: no duplicates (by comparison key), and no element matches any
/// existing skill. Only `compute_gap` builds one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GapRecord {
    missing_skills: Vec<String>,
}

impl GapRecord {
    pub fn missing_skills(&self) -> &[String] {
        &self.missing_skills
    }

    pub fn len(&self) -> usize {
        self.missing_skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missing_skills.is_empty()
    }

    /// Case- and whitespace-insensitive membership.
    #[cfg(test)]
    pub fn contains(&self, skill: &str) -> bool {
        let key = comparison_key(skill);
        self.missing_skills.iter().any(|s| comparison_key(s) == key)
    }
}

/// Request body for the standalone gap endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillGapRequest {
    pub existing_skills: Vec<String>,
    pub required_skills: Vec<String>,
}

/// `required.skills − existing.skills`.
pub fn compute_gap(existing: &SkillRecord, required: &SkillRecord) -> GapRecord {
    let owned: HashSet<String> = existing
        .skills
        .iter()
        .map(|s| comparison_key(s))
        .filter(|k| !k.is_empty())
        .collect();

    let mut seen = HashSet::new();
    let missing_skills = required
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let key = comparison_key(s);
            !owned.contains(&key) && seen.insert(key)
        })
        .map(str::to_string)
        .collect();

    GapRecord { missing_skills }
}

fn comparison_key(skill: &str) -> String {
    skill.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, skills: &[&str]) -> SkillRecord {
        SkillRecord::new(name, skills.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_gap_matches_reference_example() {
        let existing = record("candidate", &["Python", "SQL"]);
        let required = record("AI Engineer", &["Python", "SQL", "Kubernetes", "Go"]);

        let gap = compute_gap(&existing, &required);

        let got: HashSet<&str> = gap.missing_skills().iter().map(String::as_str).collect();
        assert_eq!(got, HashSet::from(["Kubernetes", "Go"]));
    }

    #[test]
    fn test_gap_is_empty_when_existing_covers_required() {
        let existing = record("candidate", &["Go", "Rust", "SQL", "Kubernetes"]);
        let required = record("role", &["Rust", "Kubernetes"]);
        assert!(compute_gap(&existing, &required).is_empty());
    }

    #[test]
    fn test_gap_is_idempotent() {
        let existing = record("candidate", &["Python", "Tableau"]);
        let required = record("role", &["PyTorch", "python", "Docker", "MLOps"]);
        let first = compute_gap(&existing, &required);
        let second = compute_gap(&existing, &required);
        assert_eq!(first, second);
    }

    #[test]
    fn test_gap_ignores_case_and_whitespace() {
        let existing = record("candidate", &[" python ", "SQL"]);
        let required = record("role", &["Python", "sql", "Docker"]);
        let gap = compute_gap(&existing, &required);
        assert_eq!(gap.missing_skills(), ["Docker"]);
    }

    #[test]
    fn test_gap_deduplicates_and_keeps_first_spelling() {
        let existing = record("candidate", &[]);
        let required = record("role", &["Kubernetes", "kubernetes ", "Go", "KUBERNETES"]);
        let gap = compute_gap(&existing, &required);
        assert_eq!(gap.missing_skills(), ["Kubernetes", "Go"]);
    }

    #[test]
    fn test_gap_never_contains_existing_skills() {
        let existing = record("candidate", &["Rust", "Go", "AWS"]);
        let required = record("role", &["aws", "Terraform", "rust", "Terraform", "GCP"]);
        let gap = compute_gap(&existing, &required);
        for skill in &existing.skills {
            assert!(!gap.contains(skill), "gap contains existing skill {skill}");
        }
        assert_eq!(gap.len(), 2);
    }

    #[test]
    fn test_gap_skips_blank_required_entries() {
        let existing = record("candidate", &[""]);
        let required = record("role", &["", "   ", "Go"]);
        assert_eq!(compute_gap(&existing, &required).missing_skills(), ["Go"]);
    }

    #[test]
    fn test_gap_record_serializes_missing_skills() {
        let gap = compute_gap(&record("a", &[]), &record("b", &["Go"]));
        let json = serde_json::to_value(&gap).unwrap();
        assert_eq!(json, serde_json::json!({"missing_skills": ["Go"]}));
    }
}
