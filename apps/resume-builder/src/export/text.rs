//! Plain-text resume: upper-cased name, then one block per section separated
//! by a rule of `=`. Certifications are omitted when empty; every other
//! section is always present.

use crate::models::{ResumeDocument, WorkExperience};

const RULE_WIDTH: usize = 50;

pub fn render_text(document: &ResumeDocument) -> String {
    let info = &document.personal_info;
    let rule = "=".repeat(RULE_WIDTH);

    let header = format!("{}\n{}", info.full_name.to_uppercase(), info.title);

    let mut contact = vec![join_present(&[&info.email, &info.phone, &info.location], " | ")];
    for (label, value) in [
        ("Website", &info.website),
        ("LinkedIn", &info.linkedin),
        ("GitHub", &info.github),
    ] {
        if !value.is_empty() {
            contact.push(format!("{label}: {value}"));
        }
    }

    let skills = document
        .skills
        .iter()
        .map(|skill| format!("• {}", skill.name))
        .collect::<Vec<_>>()
        .join("\n");

    let experiences = document
        .experiences
        .iter()
        .map(|exp| {
            format!(
                "{}\n{} | {} - {} | {}\n{}",
                exp.position,
                exp.company,
                exp.start_date,
                end_label(exp),
                exp.location,
                exp.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let projects = document
        .projects
        .iter()
        .map(|project| {
            let mut lines = vec![
                project.name.clone(),
                format!("Description: {}", project.description),
                format!("Technologies: {}", project.technologies.join(", ")),
            ];
            if !project.link.is_empty() {
                lines.push(format!("Link: {}", project.link));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let education = document
        .education
        .iter()
        .map(|edu| {
            format!(
                "{}\n{}",
                edu.degree,
                join_present(&[&edu.institution, &edu.year, &edu.location], " | ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let languages = document
        .languages
        .iter()
        .map(|lang| format!("{} ({})", lang.name, lang.proficiency.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut sections = vec![
        ("CONTACT INFORMATION", contact.join("\n")),
        ("PROFESSIONAL SUMMARY", document.summary.clone()),
        ("SKILLS", skills),
        ("WORK EXPERIENCE", experiences),
        ("PROJECTS", projects),
        ("EDUCATION", education),
    ];

    if !document.certifications.is_empty() {
        let certifications = document
            .certifications
            .iter()
            .map(|cert| {
                let mut lines = vec![
                    cert.name.clone(),
                    join_present(&[&cert.issuer, &cert.issue_date], " | "),
                ];
                if !cert.credential_url.is_empty() {
                    lines.push(format!("Link: {}", cert.credential_url));
                }
                lines.join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        sections.push(("CERTIFICATIONS", certifications));
    }

    sections.push(("LANGUAGES", languages));

    let mut out = header;
    for (heading, body) in sections {
        out.push_str(&format!("\n{rule}\n\n{heading}\n{body}\n"));
    }
    out.trim().to_string()
}

fn end_label(exp: &WorkExperience) -> &str {
    if exp.current {
        "Present"
    } else {
        &exp.end_date
    }
}

fn join_present(parts: &[&String], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Certification, Language, LanguageProficiency, Skill};
    use crate::seed::seed_document;

    #[test]
    fn test_header_and_section_order() {
        let text = render_text(&seed_document().unwrap());

        assert!(text.starts_with("ALEX MORGAN\nSenior Software Engineer\n"));
        let order = [
            "CONTACT INFORMATION",
            "PROFESSIONAL SUMMARY",
            "SKILLS",
            "WORK EXPERIENCE",
            "PROJECTS",
            "EDUCATION",
            "CERTIFICATIONS",
            "LANGUAGES",
        ];
        let positions: Vec<_> = order.iter().map(|h| text.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains(&"=".repeat(50)));
    }

    #[test]
    fn test_current_role_shows_present() {
        let text = render_text(&seed_document().unwrap());
        assert!(text.contains("Northwind Labs | 03/2021 - Present | Portland, OR"));
    }

    #[test]
    fn test_skills_and_languages_formatting() {
        let doc = ResumeDocument {
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    ..Skill::blank()
                },
                Skill {
                    name: "SQL".to_string(),
                    ..Skill::blank()
                },
            ],
            languages: vec![
                Language {
                    name: "English".to_string(),
                    proficiency: LanguageProficiency::Native,
                    ..Language::blank()
                },
                Language {
                    name: "French".to_string(),
                    proficiency: LanguageProficiency::Basic,
                    ..Language::blank()
                },
            ],
            ..ResumeDocument::default()
        };

        let text = render_text(&doc);
        assert!(text.contains("SKILLS\n• Rust\n• SQL\n"));
        assert!(text.ends_with("LANGUAGES\nEnglish (Native), French (Basic)"));
    }

    #[test]
    fn test_certifications_omitted_when_empty() {
        let text = render_text(&ResumeDocument::default());
        assert!(!text.contains("CERTIFICATIONS"));
        assert!(text.contains("LANGUAGES"));
    }

    #[test]
    fn test_certification_block() {
        let doc = ResumeDocument {
            certifications: vec![Certification {
                name: "CKA".to_string(),
                issuer: "CNCF".to_string(),
                issue_date: "01/2024".to_string(),
                credential_url: "https://cncf.io/verify".to_string(),
                ..Certification::blank()
            }],
            ..ResumeDocument::default()
        };
        let text = render_text(&doc);
        assert!(text.contains("CERTIFICATIONS\nCKA\nCNCF | 01/2024\nLink: https://cncf.io/verify"));
    }

    #[test]
    fn test_empty_document_renders_without_panicking() {
        let text = render_text(&ResumeDocument::default());
        assert!(text.starts_with(&"=".repeat(50)));
    }
}
