//! Field-level validation for the section forms.
//!
//! Each field kind has a rule: whether it is required, a pluggable
//! `TextValidator`, and the message shown under the input when the check
//! fails. Errors are plain values handed back to the form; nothing here
//! is ever routed to the store.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const REQUIRED_MESSAGE: &str = "This field is required";

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const PHONE_PATTERN: &str = r"^\+?[1-9]\d{1,14}$";
const URL_PATTERN: &str = r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$";
const LINKEDIN_PATTERN: &str = r"^(https?://)?(www\.)?linkedin\.com/in/[\w-]+/?$";
const GITHUB_PATTERN: &str = r"^(https?://)?(www\.)?github\.com/[\w-]+/?$";
const WEBSITE_PATTERN: &str = r"^(https?://)?(www\.)?[\w-]+\.[a-z]{2,}(/[\w-]*)*/?$";
const DATE_PATTERN: &str = r"^(0[1-9]|1[0-2])/(19|20)\d{2}$";
const CREDENTIAL_ID_PATTERN: &str = r"^[a-zA-Z0-9_-]+$";
const NAME_PATTERN: &str = r"^[a-zA-Z\s\-'.]+$";
const LOCATION_PATTERN: &str = r"^[a-zA-Z0-9\s\-',.]+$";
const INSTITUTION_PATTERN: &str = r"^[a-zA-Z0-9\s\-',.&]+$";
const TITLE_PATTERN: &str = r"^[a-zA-Z0-9\s\-',.&]+$";
const PROJECT_NAME_PATTERN: &str = r"^[a-zA-Z0-9\s\-',.&]+$";
const TECHNOLOGY_PATTERN: &str = r"^[a-zA-Z0-9\s\-',.&+#]+$";
const DESCRIPTION_PATTERN: &str = r"^[a-zA-Z0-9\s\-',.&!?()]+$";

/// A single inline error for one form field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, REQUIRED_MESSAGE)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Email,
    Phone,
    Website,
    Linkedin,
    Github,
    FullName,
    Location,
    Title,
    Institution,
    Degree,
    Company,
    Position,
    ProjectName,
    Technology,
    Description,
    CredentialId,
    CredentialUrl,
    Date,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Website => "website",
            FieldKind::Linkedin => "linkedin",
            FieldKind::Github => "github",
            FieldKind::FullName => "fullName",
            FieldKind::Location => "location",
            FieldKind::Title => "title",
            FieldKind::Institution => "institution",
            FieldKind::Degree => "degree",
            FieldKind::Company => "company",
            FieldKind::Position => "position",
            FieldKind::ProjectName => "projectName",
            FieldKind::Technology => "technology",
            FieldKind::Description => "description",
            FieldKind::CredentialId => "credentialId",
            FieldKind::CredentialUrl => "credentialUrl",
            FieldKind::Date => "date",
        }
    }
}

/// Profile links checked by `validate_url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Website,
    Linkedin,
    Github,
    Credential,
}

impl UrlKind {
    fn field_kind(self) -> FieldKind {
        match self {
            UrlKind::Website => FieldKind::Website,
            UrlKind::Linkedin => FieldKind::Linkedin,
            UrlKind::Github => FieldKind::Github,
            UrlKind::Credential => FieldKind::CredentialUrl,
        }
    }
}

/// Checks a non-empty field value. Implement this to swap in a
/// different rule without touching the forms.
pub trait TextValidator: Send + Sync {
    fn is_valid(&self, value: &str) -> bool;
}

impl TextValidator for Regex {
    fn is_valid(&self, value: &str) -> bool {
        self.is_match(value)
    }
}

/// Adapts a plain function or closure into a `TextValidator`.
pub struct FnValidator<F>(pub F);

impl<F> TextValidator for FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, value: &str) -> bool {
        (self.0)(value)
    }
}

#[derive(Clone)]
pub struct FieldRule {
    pub required: bool,
    pub validator: Arc<dyn TextValidator>,
    pub message: String,
}

impl FieldRule {
    pub fn new(required: bool, validator: impl TextValidator + 'static, message: &str) -> Self {
        Self {
            required,
            validator: Arc::new(validator),
            message: message.to_string(),
        }
    }

    fn pattern(required: bool, pattern: &str, message: &str) -> Self {
        let regex = Regex::new(pattern).expect("built-in validation pattern must compile");
        Self::new(required, regex, message)
    }
}

/// The full mapping from field kind to rule.
#[derive(Clone)]
pub struct RuleSet {
    rules: HashMap<FieldKind, FieldRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        let rules = [
            (
                FieldKind::Email,
                FieldRule::pattern(true, EMAIL_PATTERN, "Please enter a valid email address"),
            ),
            (
                FieldKind::Phone,
                FieldRule::pattern(true, PHONE_PATTERN, "Please enter a valid phone number"),
            ),
            (
                FieldKind::Website,
                FieldRule::pattern(false, WEBSITE_PATTERN, "Please enter a valid website URL"),
            ),
            (
                FieldKind::Linkedin,
                FieldRule::pattern(
                    false,
                    LINKEDIN_PATTERN,
                    "Please enter a valid LinkedIn profile URL",
                ),
            ),
            (
                FieldKind::Github,
                FieldRule::pattern(
                    false,
                    GITHUB_PATTERN,
                    "Please enter a valid GitHub profile URL",
                ),
            ),
            (
                FieldKind::FullName,
                FieldRule::pattern(true, NAME_PATTERN, "Please enter a valid name"),
            ),
            (
                FieldKind::Location,
                FieldRule::pattern(true, LOCATION_PATTERN, "Please enter a valid location"),
            ),
            (
                FieldKind::Title,
                FieldRule::pattern(true, TITLE_PATTERN, "Please enter a valid title"),
            ),
            (
                FieldKind::Institution,
                FieldRule::pattern(
                    true,
                    INSTITUTION_PATTERN,
                    "Please enter a valid institution name",
                ),
            ),
            (
                FieldKind::Degree,
                FieldRule::pattern(true, TITLE_PATTERN, "Please enter a valid title"),
            ),
            (
                FieldKind::Company,
                FieldRule::pattern(
                    true,
                    INSTITUTION_PATTERN,
                    "Please enter a valid institution name",
                ),
            ),
            (
                FieldKind::Position,
                FieldRule::pattern(true, TITLE_PATTERN, "Please enter a valid title"),
            ),
            (
                FieldKind::ProjectName,
                FieldRule::pattern(true, PROJECT_NAME_PATTERN, "Please enter a valid project name"),
            ),
            (
                FieldKind::Technology,
                FieldRule::pattern(
                    true,
                    TECHNOLOGY_PATTERN,
                    "Please enter a valid technology name",
                ),
            ),
            (
                FieldKind::Description,
                FieldRule::pattern(true, DESCRIPTION_PATTERN, "Please enter a valid description"),
            ),
            (
                FieldKind::CredentialId,
                FieldRule::pattern(
                    false,
                    CREDENTIAL_ID_PATTERN,
                    "Please enter a valid credential ID",
                ),
            ),
            (
                FieldKind::CredentialUrl,
                FieldRule::pattern(false, URL_PATTERN, "Please enter a valid URL"),
            ),
            (
                FieldKind::Date,
                FieldRule::pattern(
                    true,
                    DATE_PATTERN,
                    "Please enter a valid date in MM/YYYY format",
                ),
            ),
        ];
        Self {
            rules: rules.into_iter().collect(),
        }
    }
}

impl RuleSet {
    /// A rule set with no rules: every field passes.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_rule(mut self, kind: FieldKind, rule: FieldRule) -> Self {
        self.rules.insert(kind, rule);
        self
    }

    pub fn rule(&self, kind: FieldKind) -> Option<&FieldRule> {
        self.rules.get(&kind)
    }

    /// Required fields fail when empty; optional fields are only checked when filled in.
    pub fn validate_field(&self, kind: FieldKind, value: &str) -> Option<ValidationError> {
        let rule = self.rule(kind)?;

        if value.is_empty() {
            return rule.required.then(|| ValidationError::required(kind.as_str()));
        }

        if !rule.validator.is_valid(value) {
            return Some(ValidationError::new(kind.as_str(), rule.message.as_str()));
        }

        None
    }

    pub fn validate_form(&self, fields: &[(FieldKind, &str)]) -> Vec<ValidationError> {
        fields
            .iter()
            .filter_map(|(kind, value)| self.validate_field(*kind, value))
            .collect()
    }

    /// An empty link is always fine, whatever the rule's `required` flag says.
    pub fn validate_url(&self, url: &str, kind: UrlKind) -> Option<ValidationError> {
        if url.is_empty() {
            return None;
        }
        self.validate_field(kind.field_kind(), url)
    }
}

static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::default);

/// Validates one field against the built-in rule set.
pub fn validate_field(kind: FieldKind, value: &str) -> Option<ValidationError> {
    DEFAULT_RULES.validate_field(kind, value)
}

/// Validates every field, collecting all failures.
pub fn validate_form(fields: &[(FieldKind, &str)]) -> Vec<ValidationError> {
    DEFAULT_RULES.validate_form(fields)
}

pub fn validate_url(url: &str, kind: UrlKind) -> Option<ValidationError> {
    DEFAULT_RULES.validate_url(url, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_valid_email() {
        assert!(validate_field(FieldKind::Email, "jane.doe+cv@example.co.uk").is_none());
    }

    #[test]
    fn test_fail_email_without_domain() {
        let err = validate_field(FieldKind::Email, "jane@").unwrap();
        assert_eq!(err.field, "email");
        assert_eq!(err.message, "Please enter a valid email address");
    }

    #[test]
    fn test_fail_required_email_empty() {
        let err = validate_field(FieldKind::Email, "").unwrap();
        assert_eq!(err.message, REQUIRED_MESSAGE);
    }

    #[test]
    fn test_pass_international_phone() {
        assert!(validate_field(FieldKind::Phone, "+447911123456").is_none());
    }

    #[test]
    fn test_fail_phone_with_dashes() {
        assert!(validate_field(FieldKind::Phone, "+1-555-0142").is_some());
    }

    #[test]
    fn test_pass_optional_website_empty() {
        assert!(validate_field(FieldKind::Website, "").is_none());
    }

    #[test]
    fn test_pass_linkedin_profile() {
        assert!(validate_url("https://www.linkedin.com/in/jane-doe", UrlKind::Linkedin).is_none());
    }

    #[test]
    fn test_fail_linkedin_company_page() {
        let err = validate_url("https://linkedin.com/company/acme", UrlKind::Linkedin).unwrap();
        assert_eq!(err.message, "Please enter a valid LinkedIn profile URL");
    }

    #[test]
    fn test_pass_github_without_scheme() {
        assert!(validate_url("github.com/jane-doe", UrlKind::Github).is_none());
    }

    #[test]
    fn test_credential_url_uses_credential_field_name() {
        let err = validate_url("not a url", UrlKind::Credential).unwrap();
        assert_eq!(err.field, "credentialUrl");
    }

    #[test]
    fn test_pass_empty_url_of_any_kind() {
        assert!(validate_url("", UrlKind::Website).is_none());
        assert!(validate_url("", UrlKind::Credential).is_none());
    }

    #[test]
    fn test_fail_name_with_digits() {
        assert!(validate_field(FieldKind::FullName, "Jane D0e").is_some());
        assert!(validate_field(FieldKind::FullName, "Jane O'Neil-Smith").is_none());
    }

    #[test]
    fn test_pass_technology_with_symbols() {
        assert!(validate_field(FieldKind::Technology, "C++").is_none());
        assert!(validate_field(FieldKind::Technology, "C#").is_none());
    }

    #[test]
    fn test_date_field_format() {
        assert!(validate_field(FieldKind::Date, "05/2024").is_none());
        assert!(validate_field(FieldKind::Date, "13/2024").is_some());
        assert!(validate_field(FieldKind::Date, "May 2024").is_some());
    }

    #[test]
    fn test_validate_form_collects_all_errors() {
        let errors = validate_form(&[
            (FieldKind::FullName, "Jane Doe"),
            (FieldKind::Email, "nope"),
            (FieldKind::Phone, ""),
        ]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[1].message, REQUIRED_MESSAGE);
    }

    #[test]
    fn test_custom_validator_replaces_default_rule() {
        let rules = RuleSet::default().with_rule(
            FieldKind::Phone,
            FieldRule::new(
                true,
                FnValidator(|v: &str| v.chars().all(|c| c.is_ascii_digit() || c == '-')),
                "Digits and dashes only",
            ),
        );
        assert!(rules.validate_field(FieldKind::Phone, "555-0142").is_none());
        let err = rules.validate_field(FieldKind::Phone, "call me").unwrap();
        assert_eq!(err.message, "Digits and dashes only");
    }

    #[test]
    fn test_empty_rule_set_accepts_everything() {
        let rules = RuleSet::empty();
        assert!(rules.validate_field(FieldKind::Email, "").is_none());
    }
}
