pub mod entries;
pub mod lenient;
pub mod resume;
pub mod section;

pub use entries::{
    new_entry_id, Certification, Education, Language, LanguageProficiency, Project, Skill,
    SkillCategory, WorkExperience,
};
pub use resume::{PersonalInfo, ResumeDocument, ResumeField, TemplateId, Theme};
pub use section::SectionId;
