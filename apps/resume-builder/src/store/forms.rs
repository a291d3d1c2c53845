use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{ResumeDocument, ResumeField, SectionId};
use crate::store::ResumeStore;

/// What a section form is handed: the current field value and the theme's
/// font family. `data` is `None` for sections that only show a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionForm {
    pub section: SectionId,
    pub data: Option<ResumeField>,
    pub font_family: String,
}

impl SectionForm {
    pub fn is_placeholder(&self) -> bool {
        self.data.is_none()
    }
}

impl ResumeStore {
    pub fn section_form(&self, section: SectionId) -> SectionForm {
        let document = self.document();
        SectionForm {
            section,
            data: document.section_value(section),
            font_family: document.theme.font_family.clone(),
        }
    }

    /// Form for the section the editor has open.
    pub fn current_form(&self) -> SectionForm {
        self.section_form(self.current_section())
    }

    /// A form's change handler: full replacement of the section's field.
    ///
    /// Rejected without touching the document when the section has no form
    /// or `next` belongs to a different section.
    pub fn submit_section(
        &self,
        section: SectionId,
        next: ResumeField,
    ) -> Result<Arc<ResumeDocument>, AppError> {
        if !section.has_form() {
            return Err(AppError::NoForm(section));
        }
        if next.section() != Some(section) {
            return Err(AppError::SectionMismatch { expected: section });
        }
        Ok(self.apply(next))
    }
}
