use serde::{Deserialize, Serialize};

use crate::models::entries::{Certification, Education, Language, Project, Skill, WorkExperience};
use crate::models::lenient;
use crate::models::section::SectionId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(deserialize_with = "lenient::string")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub website: String,
    #[serde(deserialize_with = "lenient::string")]
    pub linkedin: String,
    #[serde(deserialize_with = "lenient::string")]
    pub github: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
}

/// Presentation settings. Colors are hex strings, `font_family` a font id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    #[serde(deserialize_with = "lenient::string")]
    pub primary_color: String,
    #[serde(deserialize_with = "lenient::string")]
    pub secondary_color: String,
    #[serde(deserialize_with = "lenient::string")]
    pub background_color: String,
    #[serde(deserialize_with = "lenient::string")]
    pub text_color: String,
    #[serde(deserialize_with = "lenient::string")]
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#007AFF".to_string(),
            secondary_color: "#5856D6".to_string(),
            background_color: "#FFFFFF".to_string(),
            text_color: "#000000".to_string(),
            font_family: "System".to_string(),
        }
    }
}

/// Template id as stored. Ids this build does not know are kept verbatim in
/// `Other` so they survive a load/save cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Creative,
    Minimal,
    Professional,
    Other(String),
}

impl From<String> for TemplateId {
    fn from(id: String) -> Self {
        match id.as_str() {
            "modern" => TemplateId::Modern,
            "classic" => TemplateId::Classic,
            "creative" => TemplateId::Creative,
            "minimal" => TemplateId::Minimal,
            "professional" => TemplateId::Professional,
            _ => TemplateId::Other(id),
        }
    }
}

impl From<TemplateId> for String {
    fn from(id: TemplateId) -> Self {
        match id {
            TemplateId::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl TemplateId {
    pub const ALL: [TemplateId; 5] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Creative,
        TemplateId::Minimal,
        TemplateId::Professional,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Creative => "creative",
            TemplateId::Minimal => "minimal",
            TemplateId::Professional => "professional",
            TemplateId::Other(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::Modern | TemplateId::Other(_) => "Modern",
            TemplateId::Classic => "Classic",
            TemplateId::Creative => "Creative",
            TemplateId::Minimal => "Minimal",
            TemplateId::Professional => "Professional",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateId::Modern => "Contemporary design with bold colors and modern typography",
            TemplateId::Classic => "Traditional single-column layout with centered header",
            TemplateId::Creative => "Unique and eye-catching design for creative professionals",
            TemplateId::Minimal => "Simple and elegant design focusing on content",
            TemplateId::Professional => "Clean and traditional layout perfect for any industry",
            TemplateId::Other(_) => "Unknown template, shown with the modern layout",
        }
    }

    /// Only modern and classic have renderers.
    pub fn has_renderer(&self) -> bool {
        matches!(self, TemplateId::Modern | TemplateId::Classic)
    }

    /// The template actually used to render: unimplemented or unknown ids
    /// fall back to modern.
    pub fn resolve(&self) -> TemplateId {
        if self.has_renderer() {
            self.clone()
        } else {
            TemplateId::Modern
        }
    }
}

/// The single aggregate root holding all resume content and presentation settings.
///
/// All ten keys are required when decoding, but their values are read
/// leniently (see [`lenient`]). `Default` is the all-empty document used
/// when even the seed data cannot be produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(deserialize_with = "lenient::or_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "lenient::string")]
    pub summary: String,
    #[serde(deserialize_with = "lenient::records")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "lenient::records")]
    pub experiences: Vec<WorkExperience>,
    #[serde(deserialize_with = "lenient::records")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "lenient::records")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "lenient::records")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "lenient::records")]
    pub languages: Vec<Language>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub theme: Theme,
    #[serde(deserialize_with = "lenient::or_default")]
    pub template: TemplateId,
}

/// A full replacement value for exactly one top-level field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeField {
    PersonalInfo(PersonalInfo),
    Summary(String),
    Skills(Vec<Skill>),
    Experiences(Vec<WorkExperience>),
    Education(Vec<Education>),
    Projects(Vec<Project>),
    Certifications(Vec<Certification>),
    Languages(Vec<Language>),
    Theme(Theme),
    Template(TemplateId),
}

impl ResumeField {
    /// JSON key of the field this value replaces.
    pub fn key(&self) -> &'static str {
        match self {
            ResumeField::PersonalInfo(_) => "personalInfo",
            ResumeField::Summary(_) => "summary",
            ResumeField::Skills(_) => "skills",
            ResumeField::Experiences(_) => "experiences",
            ResumeField::Education(_) => "education",
            ResumeField::Projects(_) => "projects",
            ResumeField::Certifications(_) => "certifications",
            ResumeField::Languages(_) => "languages",
            ResumeField::Theme(_) => "theme",
            ResumeField::Template(_) => "template",
        }
    }

    /// The editor section whose form edits this field. The template is
    /// picked on the preview screen, not in a section form.
    pub fn section(&self) -> Option<SectionId> {
        match self {
            ResumeField::PersonalInfo(_) => Some(SectionId::PersonalInfo),
            ResumeField::Summary(_) => Some(SectionId::Summary),
            ResumeField::Skills(_) => Some(SectionId::Skills),
            ResumeField::Experiences(_) => Some(SectionId::Experience),
            ResumeField::Education(_) => Some(SectionId::Education),
            ResumeField::Projects(_) => Some(SectionId::Projects),
            ResumeField::Certifications(_) => Some(SectionId::Certifications),
            ResumeField::Languages(_) => Some(SectionId::Languages),
            ResumeField::Theme(_) => Some(SectionId::Theme),
            ResumeField::Template(_) => None,
        }
    }
}

impl ResumeDocument {
    /// Returns a copy of the document with one field replaced.
    #[must_use]
    pub fn with(mut self, field: ResumeField) -> Self {
        match field {
            ResumeField::PersonalInfo(v) => self.personal_info = v,
            ResumeField::Summary(v) => self.summary = v,
            ResumeField::Skills(v) => self.skills = v,
            ResumeField::Experiences(v) => self.experiences = v,
            ResumeField::Education(v) => self.education = v,
            ResumeField::Projects(v) => self.projects = v,
            ResumeField::Certifications(v) => self.certifications = v,
            ResumeField::Languages(v) => self.languages = v,
            ResumeField::Theme(v) => self.theme = v,
            ResumeField::Template(v) => self.template = v,
        }
        self
    }

    /// Current value of the field edited by `section`'s form, if it has one.
    pub fn section_value(&self, section: SectionId) -> Option<ResumeField> {
        if !section.has_form() {
            return None;
        }
        let field = match section {
            SectionId::PersonalInfo => ResumeField::PersonalInfo(self.personal_info.clone()),
            SectionId::Summary => ResumeField::Summary(self.summary.clone()),
            SectionId::Skills => ResumeField::Skills(self.skills.clone()),
            SectionId::Experience => ResumeField::Experiences(self.experiences.clone()),
            SectionId::Projects => ResumeField::Projects(self.projects.clone()),
            SectionId::Education => ResumeField::Education(self.education.clone()),
            SectionId::Certifications => {
                ResumeField::Certifications(self.certifications.clone())
            }
            SectionId::Languages => ResumeField::Languages(self.languages.clone()),
            _ => return None,
        };
        Some(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entries::SkillCategory;

    #[test]
    fn test_with_replaces_only_target_field() {
        let before = ResumeDocument {
            summary: "Backend engineer".to_string(),
            ..ResumeDocument::default()
        };
        let skills = vec![Skill {
            name: "Rust".to_string(),
            category: SkillCategory::Technical,
            level: Some(4),
            ..Skill::blank()
        }];
        let after = before.clone().with(ResumeField::Skills(skills.clone()));

        assert_eq!(after.skills, skills);
        assert_eq!(after.summary, before.summary);
        assert_eq!(after.personal_info, before.personal_info);
        assert_eq!(after.theme, before.theme);
    }

    #[test]
    fn test_default_theme_matches_empty_document() {
        let theme = ResumeDocument::default().theme;
        assert_eq!(theme.primary_color, "#007AFF");
        assert_eq!(theme.font_family, "System");
    }

    #[test]
    fn test_unimplemented_templates_resolve_to_modern() {
        assert_eq!(TemplateId::Classic.resolve(), TemplateId::Classic);
        assert_eq!(TemplateId::Creative.resolve(), TemplateId::Modern);
        assert_eq!(TemplateId::Professional.resolve(), TemplateId::Modern);
    }

    #[test]
    fn test_section_value_is_none_for_placeholder_sections() {
        let doc = ResumeDocument::default();
        assert!(doc.section_value(SectionId::Awards).is_none());
        assert!(doc.section_value(SectionId::Theme).is_none());
        assert_eq!(
            doc.section_value(SectionId::Summary),
            Some(ResumeField::Summary(String::new()))
        );
    }

    #[test]
    fn test_field_sections_round_trip_through_section_value() {
        let doc = ResumeDocument::default();
        for section in SectionId::EDITABLE {
            let field = doc.section_value(section).unwrap();
            assert_eq!(field.section(), Some(section));
        }
    }

    #[test]
    fn test_template_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TemplateId::Professional).unwrap(),
            "\"professional\""
        );
    }

    #[test]
    fn test_unknown_template_keeps_raw_id() {
        let template: TemplateId = serde_json::from_str("\"executive\"").unwrap();
        assert_eq!(template, TemplateId::Other("executive".to_string()));
        assert_eq!(template.resolve(), TemplateId::Modern);
        assert_eq!(template.display_name(), "Modern");
        assert_eq!(serde_json::to_string(&template).unwrap(), "\"executive\"");
    }

    #[test]
    fn test_document_with_null_scalars_decodes() {
        let mut value = serde_json::to_value(ResumeDocument::default()).unwrap();
        value["summary"] = serde_json::Value::Null;
        value["personalInfo"]["website"] = serde_json::Value::Null;
        value["theme"] = serde_json::json!({ "primaryColor": null, "fontFamily": "Inter" });

        let doc: ResumeDocument = serde_json::from_value(value).unwrap();
        assert_eq!(doc.summary, "");
        assert_eq!(doc.personal_info.website, "");
        assert_eq!(doc.theme.primary_color, "");
        assert_eq!(doc.theme.font_family, "Inter");
        assert_eq!(doc.theme.text_color, "#000000");
    }
}
