//! Schema Layer: the structured contracts exchanged between pipeline stages.
//!
//! Every contract is rendered twice: as a Gemini `responseSchema` that constrains
//! the model's output, and as a typed record that the reply is validated into.
//! Validation is a pure function; nothing here performs I/O.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub mod records;

pub use records::{CandidateProfile, MarketProfile, SkillRecord};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("{schema}: model returned an empty reply")]
    Empty { schema: &'static str },

    #[error("{schema}: reply is not valid JSON: {message}")]
    Malformed {
        schema: &'static str,
        message: String,
    },

    #[error("{schema}: reply violates the contract: {message}")]
    Contract {
        schema: &'static str,
        message: String,
    },
}

/// A record that a model reply must conform to.
pub trait ResponseSchema: DeserializeOwned {
    /// Contract name used in error messages and logs.
    const NAME: &'static str;

    /// The contract as a Gemini `responseSchema` (OpenAPI subset).
    fn response_schema() -> Value;

    /// Field-level rules serde cannot express. Returns a description of the first violation.
    fn check(&self) -> Result<(), String>;
}

/// Validates a raw model reply against `T`'s contract.
pub fn validate<T: ResponseSchema>(reply: &str) -> Result<T, SchemaError> {
    let text = strip_json_fences(reply);
    if text.is_empty() {
        return Err(SchemaError::Empty { schema: T::NAME });
    }

    let value: Value = serde_json::from_str(text).map_err(|e| SchemaError::Malformed {
        schema: T::NAME,
        message: e.to_string(),
    })?;

    let record: T = serde_json::from_value(value).map_err(|e| SchemaError::Contract {
        schema: T::NAME,
        message: e.to_string(),
    })?;

    record.check().map_err(|message| SchemaError::Contract {
        schema: T::NAME,
        message,
    })?;

    Ok(record)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("field `{field}` must not be blank"));
    }
    Ok(())
}

pub(crate) fn require_items(field: &str, items: &[String]) -> Result<(), String> {
    match items.iter().position(|item| item.trim().is_empty()) {
        Some(index) => Err(format!("field `{field}` has a blank entry at index {index}")),
        None => Ok(()),
    }
}
