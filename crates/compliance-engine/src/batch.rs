//! Batch intake and record identifiers
//!
//! Turns a parsed JSON document into records. Only the batch shape can be
//! rejected; individual entries with missing or non-text bodies are kept as
//! empty records so one bad entry never aborts a sweep.

use std::collections::HashSet;

use serde_json::Value;
use sha2::{Digest, Sha256};
use shared_types::{Record, RecordInput};

use crate::error::AuditError;

/// Body fields checked on each record object, in order
pub const BODY_FIELDS: &[&str] = &["response", "body", "text"];

const GENERATED_ID_PREFIX: &str = "rec-";
const GENERATED_ID_HEX_LEN: usize = 12;

/// Read a batch of records from a JSON value.
///
/// # Errors
///
/// Returns [`AuditError::MalformedBatch`] unless `value` is an array.
pub fn parse_batch(value: &Value) -> Result<Vec<RecordInput>, AuditError> {
    let entries = value.as_array().ok_or_else(|| {
        AuditError::MalformedBatch(format!(
            "expected a JSON array of records, found {}",
            json_kind(value)
        ))
    })?;

    Ok(entries.iter().map(parse_record).collect())
}

fn parse_record(entry: &Value) -> RecordInput {
    match entry {
        Value::Object(fields) => RecordInput {
            id: fields.get("id").and_then(parse_id),
            body: BODY_FIELDS
                .iter()
                .find_map(|field| fields.get(*field).and_then(Value::as_str))
                .map(str::to_string),
        },
        Value::String(text) => RecordInput {
            id: None,
            body: Some(text.clone()),
        },
        _ => RecordInput::default(),
    }
}

fn parse_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Resolve identifiers for a batch.
///
/// Caller-supplied ids are kept verbatim. Missing or blank ids get a
/// content-derived id (hash of position and body) that is unique within the
/// batch and never equal to a caller-supplied id.
pub fn assign_ids(inputs: &[RecordInput]) -> Vec<Record> {
    let mut taken: HashSet<String> = inputs
        .iter()
        .filter_map(supplied_id)
        .map(str::to_string)
        .collect();

    inputs
        .iter()
        .enumerate()
        .map(|(position, input)| {
            let body = input.body.clone().unwrap_or_default();
            let id = match supplied_id(input) {
                Some(id) => id.to_string(),
                None => claim_unique(derived_id(position, &body), &mut taken),
            };
            Record { id, body }
        })
        .collect()
}

fn supplied_id(input: &RecordInput) -> Option<&str> {
    input.id.as_deref().filter(|id| !id.trim().is_empty())
}

fn derived_id(position: usize, body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update((position as u64).to_le_bytes());
    hasher.update(body.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("{}{}", GENERATED_ID_PREFIX, &digest[..GENERATED_ID_HEX_LEN])
}

fn claim_unique(base: String, taken: &mut HashSet<String>) -> String {
    let mut candidate = base.clone();
    let mut suffix = 2;
    while taken.contains(&candidate) {
        candidate = format!("{}-{}", base, suffix);
        suffix += 1;
    }
    taken.insert(candidate.clone());
    candidate
}
