//! Standalone HTML documents for the two implemented templates.
//!
//! Every piece of user text goes through `html_escape`; URLs additionally get
//! a scheme via `format_url`. Empty lists render as empty sections.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::export::format_url;
use crate::models::{ResumeDocument, Skill, TemplateId};

/// Base body font size in px for exported documents.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Renders a resume into a complete HTML document.
pub trait TemplateRenderer: Send + Sync {
    /// `preview_mode` produces a non-interactive document: links are plain
    /// text and print rules are left out.
    fn render(&self, document: &ResumeDocument, preview_mode: bool, font_size: f32) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTemplate {
    template: TemplateId,
}

impl HtmlTemplate {
    /// Templates without a renderer fall back to modern.
    pub fn new(template: &TemplateId) -> Self {
        Self {
            template: template.resolve(),
        }
    }

    pub fn template(&self) -> &TemplateId {
        &self.template
    }
}

impl TemplateRenderer for HtmlTemplate {
    fn render(&self, document: &ResumeDocument, preview_mode: bool, font_size: f32) -> String {
        let page = Page {
            document,
            preview_mode,
            font_size,
            classic: self.template == TemplateId::Classic,
        };
        page.render()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page assembly
// ────────────────────────────────────────────────────────────────────────────

struct Page<'a> {
    document: &'a ResumeDocument,
    preview_mode: bool,
    font_size: f32,
    classic: bool,
}

impl Page<'_> {
    fn render(&self) -> String {
        let doc = self.document;
        let mut body = String::new();

        self.header(&mut body);
        section(&mut body, "Summary", &paragraph("summary", &doc.summary));
        section(&mut body, "Skills", &skills_columns(&doc.skills));
        section(&mut body, "Experience", &self.experiences());
        section(&mut body, "Projects", &self.projects());
        section(&mut body, "Education", &self.education());
        if !doc.certifications.is_empty() {
            section(&mut body, "Certifications", &self.certifications());
        }
        let languages = doc
            .languages
            .iter()
            .map(|lang| format!("{} ({})", lang.name, lang.proficiency.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        section(&mut body, "Languages", &paragraph("languages", &languages));

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{} - Resume</title>\n<style>\n{}</style>\n</head>\n\
             <body>\n{}</body>\n</html>\n",
            encode_text(&doc.personal_info.full_name),
            self.styles(),
            body
        )
    }

    fn styles(&self) -> String {
        let theme = &self.document.theme;
        let accent = if self.classic {
            &theme.text_color
        } else {
            &theme.primary_color
        };
        let header_align = if self.classic { "center" } else { "left" };
        let base = self.font_size;

        let mut css = format!(
            "body {{ font-family: '{font}', 'Segoe UI', sans-serif; font-size: {base}px; \
             line-height: 1.5; color: {text}; background-color: {bg}; max-width: 800px; \
             margin: 0 auto; padding: 20px; }}\n\
             .header {{ text-align: {header_align}; margin-bottom: 20px; }}\n\
             .name {{ font-size: {name}px; margin: 0 0 4px 0; }}\n\
             .title {{ font-size: {title}px; margin: 0 0 12px 0; }}\n\
             .contact p {{ margin: 0 0 2px 0; }}\n\
             .section {{ margin: 8px 0 4px 0; }}\n\
             .section-title {{ font-size: {heading}px; color: {accent}; margin: 0 0 8px 0; }}\n\
             .item {{ margin-bottom: 8px; page-break-inside: avoid; }}\n\
             .item h3 {{ font-size: {item}px; margin: 0 0 4px 0; }}\n\
             .item p {{ margin: 0 0 4px 0; }}\n\
             .skills {{ display: flex; gap: 16px; }}\n\
             .skills div {{ flex: 1; }}\n\
             .tag {{ display: inline-block; background-color: #f0f0f0; padding: 2px 8px; \
             margin: 2px 4px 2px 0; border-radius: 4px; font-size: {tag}px; }}\n\
             a {{ color: {link}; text-decoration: none; }}\n",
            font = encode_text(&theme.font_family),
            text = encode_text(&theme.text_color),
            bg = encode_text(&theme.background_color),
            accent = encode_text(accent),
            link = encode_text(&theme.primary_color),
            name = base * 2.25,
            title = base * 1.3,
            heading = base * 1.4,
            item = base * 1.2,
            tag = base * 0.85,
        );
        if self.classic {
            css.push_str(
                ".section-title { border-bottom: 1px solid currentColor; \
                 text-transform: uppercase; }\n",
            );
        }
        if !self.preview_mode {
            css.push_str(
                "@media print { body { margin: 0; padding: 15px; } \
                 .section { page-break-inside: avoid; } }\n",
            );
        }
        css
    }

    fn header(&self, out: &mut String) {
        let info = &self.document.personal_info;
        out.push_str("<div class=\"header\">\n");
        let _ = writeln!(out, "<h1 class=\"name\">{}</h1>", encode_text(&info.full_name));
        let _ = writeln!(out, "<p class=\"title\">{}</p>", encode_text(&info.title));
        out.push_str("<div class=\"contact\">\n");
        for (label, value) in [
            ("Email", &info.email),
            ("Phone", &info.phone),
            ("Location", &info.location),
        ] {
            if !value.is_empty() {
                let _ = writeln!(out, "<p>{label}: {}</p>", encode_text(value));
            }
        }
        for (label, url) in [
            ("Website", &info.website),
            ("LinkedIn", &info.linkedin),
            ("GitHub", &info.github),
        ] {
            if !url.is_empty() {
                let _ = writeln!(out, "<p>{label}: {}</p>", self.link(url));
            }
        }
        out.push_str("</div>\n</div>\n");
    }

    fn link(&self, url: &str) -> String {
        if self.preview_mode {
            return encode_text(url).into_owned();
        }
        format!(
            "<a href=\"{}\">{}</a>",
            encode_double_quoted_attribute(&format_url(url)),
            encode_text(url)
        )
    }

    fn experiences(&self) -> String {
        let mut out = String::new();
        for exp in &self.document.experiences {
            let end = if exp.current { "Present" } else { exp.end_date.as_str() };
            let _ = write!(
                out,
                "<div class=\"item\">\n<h3>{} @ {}</h3>\n<p>{} - {} | {}</p>\n<p>{}</p>\n",
                encode_text(&exp.position),
                encode_text(&exp.company),
                encode_text(&exp.start_date),
                encode_text(end),
                encode_text(&exp.location),
                encode_text(&exp.description),
            );
            bullet_list(&mut out, &exp.achievements);
            out.push_str("</div>\n");
        }
        out
    }

    fn projects(&self) -> String {
        let mut out = String::new();
        for project in &self.document.projects {
            let _ = write!(
                out,
                "<div class=\"item\">\n<h3>{}</h3>\n<p>{}</p>\n<p>",
                encode_text(&project.name),
                encode_text(&project.description),
            );
            for tech in &project.technologies {
                let _ = write!(out, "<span class=\"tag\">{}</span>", encode_text(tech));
            }
            out.push_str("</p>\n");
            if !project.link.is_empty() {
                let _ = writeln!(out, "<p>Link: {}</p>", self.link(&project.link));
            }
            out.push_str("</div>\n");
        }
        out
    }

    fn education(&self) -> String {
        let mut out = String::new();
        for edu in &self.document.education {
            let _ = writeln!(
                out,
                "<div class=\"item\">\n<h3>{} - {}</h3>\n<p>{} | {}</p>\n</div>",
                encode_text(&edu.degree),
                encode_text(&edu.institution),
                encode_text(&edu.year),
                encode_text(&edu.location),
            );
        }
        out
    }

    fn certifications(&self) -> String {
        let mut out = String::new();
        for cert in &self.document.certifications {
            let validity = if cert.never_expires {
                " - No expiry".to_string()
            } else if cert.expiry_date.is_empty() {
                String::new()
            } else {
                format!(" - {}", cert.expiry_date)
            };
            let _ = write!(
                out,
                "<div class=\"item\">\n<h3>{}</h3>\n<p>{} | {}{}</p>\n",
                encode_text(&cert.name),
                encode_text(&cert.issuer),
                encode_text(&cert.issue_date),
                encode_text(&validity),
            );
            if !cert.credential_url.is_empty() {
                let _ = writeln!(out, "<p>Credential: {}</p>", self.link(&cert.credential_url));
            }
            out.push_str("</div>\n");
        }
        out
    }
}

fn section(out: &mut String, title: &str, content: &str) {
    let _ = write!(
        out,
        "<div class=\"section\">\n<h2 class=\"section-title\">{title}</h2>\n{content}</div>\n"
    );
}

fn paragraph(class: &str, text: &str) -> String {
    format!("<p class=\"{class}\">{}</p>\n", encode_text(text))
}

fn bullet_list(out: &mut String, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str("<ul>\n");
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", encode_text(item));
    }
    out.push_str("</ul>\n");
}

/// One column up to 10 skills, two up to 20, three beyond. Skills are dealt
/// round-robin across columns.
fn skills_columns(skills: &[Skill]) -> String {
    let columns = match skills.len() {
        n if n > 20 => 3,
        n if n > 10 => 2,
        _ => 1,
    };
    let mut dealt: Vec<Vec<&Skill>> = vec![Vec::new(); columns];
    for (index, skill) in skills.iter().enumerate() {
        dealt[index % columns].push(skill);
    }

    let mut out = String::from("<div class=\"skills\">\n");
    for column in dealt {
        out.push_str("<div>\n");
        for skill in column {
            let _ = writeln!(out, "<p>• {}</p>", encode_text(&skill.name));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    out
}
