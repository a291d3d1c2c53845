use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The section currently open in the editor.
///
/// Several sections are declared without a form (awards, interests, ...).
/// They stay in the enum so a persisted or deep-linked id always parses; the
/// dispatcher shows a placeholder for them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    #[serde(rename = "personal-info")]
    PersonalInfo,
    #[serde(rename = "summary")]
    Summary,
    #[serde(rename = "skills")]
    Skills,
    #[serde(rename = "experience")]
    Experience,
    #[serde(rename = "projects")]
    Projects,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "certifications")]
    Certifications,
    #[serde(rename = "awards")]
    Awards,
    #[serde(rename = "languages")]
    Languages,
    #[serde(rename = "interests")]
    Interests,
    #[serde(rename = "volunteer")]
    Volunteer,
    #[serde(rename = "references")]
    References,
    #[serde(rename = "publications")]
    Publications,
    #[serde(rename = "THEME")]
    Theme,
}

impl SectionId {
    pub const ALL: [SectionId; 14] = [
        SectionId::PersonalInfo,
        SectionId::Summary,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Certifications,
        SectionId::Awards,
        SectionId::Languages,
        SectionId::Interests,
        SectionId::Volunteer,
        SectionId::References,
        SectionId::Publications,
        SectionId::Theme,
    ];

    /// Sections shown as editor tabs, in tab order.
    pub const EDITABLE: [SectionId; 8] = [
        SectionId::PersonalInfo,
        SectionId::Summary,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Certifications,
        SectionId::Languages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::PersonalInfo => "personal-info",
            SectionId::Summary => "summary",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Certifications => "certifications",
            SectionId::Awards => "awards",
            SectionId::Languages => "languages",
            SectionId::Interests => "interests",
            SectionId::Volunteer => "volunteer",
            SectionId::References => "references",
            SectionId::Publications => "publications",
            SectionId::Theme => "THEME",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::PersonalInfo => "Personal Information",
            SectionId::Summary => "Professional Summary",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Work Experience",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Certifications => "Certifications",
            SectionId::Awards => "Awards",
            SectionId::Languages => "Languages",
            SectionId::Interests => "Interests",
            SectionId::Volunteer => "Volunteer",
            SectionId::References => "References",
            SectionId::Publications => "Publications",
            SectionId::Theme => "Theme",
        }
    }

    pub fn has_form(&self) -> bool {
        Self::EDITABLE.contains(self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_as_str() {
        for section in SectionId::ALL {
            let encoded = serde_json::to_string(&section).unwrap();
            assert_eq!(encoded, format!("\"{}\"", section.as_str()));
        }
    }

    #[test]
    fn test_from_str_round_trips_every_section() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>().unwrap(), section);
        }
        assert!("theme".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_declared_only_sections_have_no_form() {
        for section in [
            SectionId::Awards,
            SectionId::Interests,
            SectionId::Volunteer,
            SectionId::References,
            SectionId::Publications,
            SectionId::Theme,
        ] {
            assert!(!section.has_form(), "{section} should not have a form");
        }
        assert!(SectionId::Languages.has_form());
    }
}
