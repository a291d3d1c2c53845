//! Bundled sample resume used on first run and for recovery.

use serde_json::Value;

use crate::errors::AppError;
use crate::models::ResumeDocument;
use crate::validation::structure::LIST_FIELDS;

const SEED_JSON: &str = include_str!("resume.json");

/// The seed as an untyped JSON value.
pub fn seed_value() -> Result<Value, AppError> {
    Ok(serde_json::from_str(SEED_JSON)?)
}

/// The seed decoded as-is.
pub fn seed_document() -> Result<ResumeDocument, AppError> {
    Ok(serde_json::from_value(seed_value()?)?)
}

/// The seed with any missing or null list field replaced by an empty list.
pub fn seed_document_with_defaults() -> Result<ResumeDocument, AppError> {
    let mut value = seed_value()?;
    let Some(doc) = value.as_object_mut() else {
        return Err(AppError::InvalidDocument("seed is not a JSON object".to_string()));
    };

    for field in LIST_FIELDS {
        let entry = doc.entry(*field).or_insert(Value::Null);
        if entry.is_null() {
            *entry = Value::Array(Vec::new());
        }
    }

    Ok(serde_json::from_value(value)?)
}
