// Resume export: plain text is produced directly, PDF goes through an HTML
// document handed to a `PdfRenderer`, DOCX is declared but not supported.

pub mod html;
pub mod text;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use async_trait::async_trait;
use bytes::Bytes;
use regex::Regex;
use tracing::info;

use crate::errors::AppError;
use crate::models::ResumeDocument;

pub use html::{HtmlTemplate, TemplateRenderer, DEFAULT_FONT_SIZE};
pub use text::render_text;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    Docx,
    Txt,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Txt => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Txt => "text/plain",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            "txt" => Ok(ExportFormat::Txt),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A finished export, ready to be written to disk or shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Bytes,
}

/// Turns a complete HTML document into PDF bytes.
///
/// The platform print service lives behind this trait.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render_pdf(&self, html: &str) -> Result<Bytes, AppError>;
}

/// `<Full_Name>_Resume.<ext>`, whitespace runs collapsed to `_`.
pub fn export_file_name(document: &ResumeDocument, format: ExportFormat) -> String {
    let name = document.personal_info.full_name.trim();
    if name.is_empty() {
        return format!("Resume.{}", format.extension());
    }
    format!(
        "{}_Resume.{}",
        WHITESPACE.replace_all(name, "_"),
        format.extension()
    )
}

/// Adds an `https://` scheme to bare URLs. Empty input stays empty.
pub fn format_url(url: &str) -> String {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

pub async fn export(
    document: &ResumeDocument,
    format: ExportFormat,
    pdf: &dyn PdfRenderer,
) -> Result<ExportArtifact, AppError> {
    let bytes = match format {
        ExportFormat::Txt => Bytes::from(render_text(document)),
        ExportFormat::Pdf => {
            let html =
                HtmlTemplate::new(&document.template).render(document, false, DEFAULT_FONT_SIZE);
            pdf.render_pdf(&html).await?
        }
        ExportFormat::Docx => return Err(AppError::UnsupportedFormat(format.to_string())),
    };

    let artifact = ExportArtifact {
        file_name: export_file_name(document, format),
        mime_type: format.mime_type(),
        bytes,
    };
    info!(
        "Exported '{}' ({} bytes)",
        artifact.file_name,
        artifact.bytes.len()
    );
    Ok(artifact)
}
