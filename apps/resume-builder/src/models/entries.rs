//! List-item entities of the resume document.
//!
//! Every item carries an `id` assigned when the form's "add" action creates it.
//! Items deserialize with defaults for missing or mistyped fields: the
//! structural check in `validation::structure` is the only integrity gate, and
//! it never looks inside list items. Enum values this build does not know are
//! kept verbatim in an `Other` variant.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::lenient;

/// Generates a fresh list-item id.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum SkillCategory {
    Language,
    Soft,
    #[default]
    Technical,
    Tool,
    Other(String),
}

impl SkillCategory {
    pub fn as_str(&self) -> &str {
        match self {
            SkillCategory::Language => "language",
            SkillCategory::Soft => "soft",
            SkillCategory::Technical => "technical",
            SkillCategory::Tool => "tool",
            SkillCategory::Other(raw) => raw,
        }
    }
}

impl From<String> for SkillCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "language" => SkillCategory::Language,
            "soft" => SkillCategory::Soft,
            "technical" => SkillCategory::Technical,
            "tool" => SkillCategory::Tool,
            _ => SkillCategory::Other(raw),
        }
    }
}

impl From<SkillCategory> for String {
    fn from(category: SkillCategory) -> Self {
        match category {
            SkillCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub category: SkillCategory,
    /// Proficiency shown as 0–5 dots. Not validated.
    #[serde(deserialize_with = "lenient::level", skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

impl Skill {
    pub fn blank() -> Self {
        Self {
            id: new_entry_id(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub position: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    /// Shown as "Present" when `current` is set, whatever it holds.
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub current: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub achievements: Vec<String>,
}

impl WorkExperience {
    pub fn blank() -> Self {
        Self {
            id: new_entry_id(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub institution: String,
    #[serde(deserialize_with = "lenient::string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub year: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub achievements: Vec<String>,
}

impl Education {
    pub fn blank() -> Self {
        Self {
            id: new_entry_id(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub current: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub link: String,
    #[serde(deserialize_with = "lenient::string")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
}

impl Project {
    pub fn blank() -> Self {
        Self {
            id: new_entry_id(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub issuer: String,
    #[serde(deserialize_with = "lenient::string")]
    pub issue_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub expiry_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub credential_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub credential_url: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub never_expires: bool,
}

impl Certification {
    pub fn blank() -> Self {
        Self {
            id: new_entry_id(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum LanguageProficiency {
    Native,
    Fluent,
    Advanced,
    #[default]
    Intermediate,
    Basic,
    Other(String),
}

impl From<String> for LanguageProficiency {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Native" => LanguageProficiency::Native,
            "Fluent" => LanguageProficiency::Fluent,
            "Advanced" => LanguageProficiency::Advanced,
            "Intermediate" => LanguageProficiency::Intermediate,
            "Basic" => LanguageProficiency::Basic,
            _ => LanguageProficiency::Other(raw),
        }
    }
}

impl From<LanguageProficiency> for String {
    fn from(proficiency: LanguageProficiency) -> Self {
        match proficiency {
            LanguageProficiency::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl LanguageProficiency {
    pub const ALL: [LanguageProficiency; 5] = [
        LanguageProficiency::Native,
        LanguageProficiency::Fluent,
        LanguageProficiency::Advanced,
        LanguageProficiency::Intermediate,
        LanguageProficiency::Basic,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            LanguageProficiency::Native => "Native",
            LanguageProficiency::Fluent => "Fluent",
            LanguageProficiency::Advanced => "Advanced",
            LanguageProficiency::Intermediate => "Intermediate",
            LanguageProficiency::Basic => "Basic",
            LanguageProficiency::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub proficiency: LanguageProficiency,
}

impl Language {
    pub fn blank() -> Self {
        Self {
            id: new_entry_id(),
            ..Self::default()
        }
    }
}
