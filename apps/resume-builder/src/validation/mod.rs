// Two kinds of checks live here and they never meet:
// - `structure` gates persisted documents at load time (shallow, key presence only).
// - `fields` and `dates` produce inline form messages; the store never sees them.

pub mod dates;
pub mod fields;
pub mod structure;

pub use dates::{
    format_date_input, is_plausible_date, validate_certification_dates, validate_date_range,
    validate_experience_dates, validate_project_dates,
};
pub use fields::{
    validate_field, validate_form, validate_url, FieldKind, FieldRule, FnValidator, RuleSet,
    TextValidator, UrlKind, ValidationError, REQUIRED_MESSAGE,
};
pub use structure::is_valid_document;
