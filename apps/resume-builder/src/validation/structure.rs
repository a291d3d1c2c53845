use serde_json::Value;

const REQUIRED_FIELDS: &[&str] = &[
    "personalInfo",
    "summary",
    "skills",
    "experiences",
    "education",
    "projects",
    "certifications",
    "languages",
    "theme",
    "template",
];

const REQUIRED_PERSONAL_INFO_FIELDS: &[&str] = &["fullName", "email", "phone", "location", "title"];

pub(crate) const LIST_FIELDS: &[&str] = &[
    "skills",
    "experiences",
    "education",
    "projects",
    "certifications",
    "languages",
];

const REQUIRED_THEME_FIELDS: &[&str] = &[
    "primaryColor",
    "secondaryColor",
    "backgroundColor",
    "textColor",
    "fontFamily",
];

/// Shallow structural check of a persisted resume document.
///
/// PASS requires:
/// - an object with all ten top-level keys
/// - `personalInfo` an object with the five core contact keys
/// - the six list fields all arrays
/// - `theme` an object with all five style keys
///
/// Values inside list items and scalar types are NOT inspected. Keep it
/// that way: documents with partially-filled items must keep loading.
pub fn is_valid_document(candidate: &Value) -> bool {
    let Some(doc) = candidate.as_object() else {
        return false;
    };

    if !REQUIRED_FIELDS.iter().all(|field| doc.contains_key(*field)) {
        return false;
    }

    if !has_keys(&doc["personalInfo"], REQUIRED_PERSONAL_INFO_FIELDS) {
        return false;
    }

    if !LIST_FIELDS.iter().all(|field| doc[*field].is_array()) {
        return false;
    }

    has_keys(&doc["theme"], REQUIRED_THEME_FIELDS)
}

fn has_keys(value: &Value, keys: &[&str]) -> bool {
    value
        .as_object()
        .is_some_and(|obj| keys.iter().all(|key| obj.contains_key(*key)))
}
