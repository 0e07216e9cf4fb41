//! CLI output formatting.
//!
//! Output is an inventory of the content, not of files: each entity is a
//! header line (positional index + title) followed by indented context
//! lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Person
//!     Ada Example <ada@example.org>
//!     Resumes: ml, swe
//!
//! Projects
//! 001 Flood Extent Mapper (1 link)
//!     Primary: https://github.com/ada-example/flood-mapper
//!     Tags: PyTorch, SAR, U-Net
//!
//! Publications
//! 001 Diffusion Models for Kilometre-Scale Climate Downscaling (2025, Under review)
//!     Links: arXiv, Code
//!
//! Experience
//! 001 Research Assistant at Earth Vision Lab (2024 to Present)
//!
//! Skills
//! 001 Languages (3 skills)
//! ```
//!
//! ## Build
//!
//! ```text
//! Ada Example | Climate ML Researcher → dist/index.html
//!     9 sections, 2 projects, 3 publications, 2 jobs, 3 skill groups
//!     Structured data: 4 records
//!     Assets: 2 files copied
//! ```
//!
//! Each `format_*` function returns lines and does no I/O; `print_*`
//! wrappers write them to stdout.

use crate::generate::BuildReport;
use crate::types::SiteData;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 link`, `2 links`.
fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Positional index + title, with optional detail in parentheses.
///
/// Missing titles show as `(untitled)` so the line still identifies a slot.
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    let title = if title.is_empty() { "(untitled)" } else { title };
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(data: &SiteData) -> Vec<String> {
    let mut lines = Vec::new();
    let person = &data.person;

    lines.push("Person".to_string());
    lines.push(format!("{}{} <{}>", indent(1), person.name, person.email));
    if !person.resumes.is_empty() {
        let codes: Vec<&str> = person.resumes.keys().map(String::as_str).collect();
        lines.push(format!("{}Resumes: {}", indent(1), codes.join(", ")));
    }

    if !data.projects.is_empty() {
        lines.push(String::new());
        lines.push("Projects".to_string());
        for (i, project) in data.projects.iter().enumerate() {
            let links = project.links.entries().len();
            lines.push(entity_header(
                i + 1,
                &project.title,
                Some(&plural(links, "link")),
            ));
            let primary = project.links.primary_url();
            if !primary.is_empty() {
                lines.push(format!("{}Primary: {}", indent(1), primary));
            }
            if !project.tags.is_empty() {
                lines.push(format!("{}Tags: {}", indent(1), project.tags.join(", ")));
            }
        }
    }

    if !data.publications.is_empty() {
        lines.push(String::new());
        lines.push("Publications".to_string());
        for (i, publication) in data.publications.iter().enumerate() {
            let detail = [publication.year.as_str(), publication.status.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            let detail = (!detail.is_empty()).then_some(detail);
            lines.push(entity_header(
                i + 1,
                &truncate_desc(&publication.title, 72),
                detail.as_deref(),
            ));
            if !publication.links.is_empty() {
                let labels: Vec<&str> =
                    publication.links.iter().map(|l| l.label.as_str()).collect();
                lines.push(format!("{}Links: {}", indent(1), labels.join(", ")));
            }
        }
    }

    if !data.experience.is_empty() {
        lines.push(String::new());
        lines.push("Experience".to_string());
        for (i, item) in data.experience.iter().enumerate() {
            let title = format!("{} at {}", item.role, item.place);
            let span = format!("{} to {}", item.from, item.to);
            lines.push(entity_header(i + 1, &title, Some(&span)));
        }
    }

    if !data.skills.is_empty() {
        lines.push(String::new());
        lines.push("Skills".to_string());
        for (i, (group, skills)) in data.skills.iter().enumerate() {
            lines.push(entity_header(
                i + 1,
                group,
                Some(&plural(skills.len(), "skill")),
            ));
        }
    }

    lines
}

pub fn print_check_output(data: &SiteData) {
    for line in format_check_output(data) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let title = if report.title.is_empty() {
        "(untitled)"
    } else {
        report.title.as_str()
    };
    vec![
        format!("{} → {}", title, report.index.display()),
        format!(
            "{}{}, {}, {}, {}, {}",
            indent(1),
            plural(report.sections, "section"),
            plural(report.projects, "project"),
            plural(report.publications, "publication"),
            plural(report.experience, "job"),
            plural(report.skill_groups, "skill group"),
        ),
        format!(
            "{}Structured data: {}",
            indent(1),
            plural(report.structured_records, "record")
        ),
        format!(
            "{}Assets: {} copied",
            indent(1),
            plural(report.assets_copied, "file")
        ),
    ]
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_data;
    use std::path::PathBuf;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn entity_header_variants() {
        assert_eq!(entity_header(1, "Skills", None), "001 Skills");
        assert_eq!(entity_header(2, "ML", Some("3 skills")), "002 ML (3 skills)");
        assert_eq!(entity_header(3, "", None), "003 (untitled)");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_desc("short", 10), "short");
        assert_eq!(truncate_desc("abcdef", 3), "abc...");
        assert_eq!(truncate_desc("ééééé", 2), "éé...");
    }

    #[test]
    fn check_output_lists_everything_in_order() {
        let lines = format_check_output(&sample_data());
        assert_eq!(lines[0], "Person");
        assert_eq!(lines[1], "    Ada Example <ada@example.org>");
        assert_eq!(lines[2], "    Resumes: ml, swe");
        assert!(lines.contains(&"001 Flood Extent Mapper (1 link)".to_string()));
        assert!(lines.contains(&"002 Downscaling with Diffusion (2 links)".to_string()));
        assert!(lines.contains(&"    Primary: https://arxiv.org/abs/2401.00001".to_string()));
        assert!(lines.contains(&"    Tags: PyTorch, SAR, U-Net".to_string()));
        assert!(lines.contains(&"002 Benchmarking Flood Segmentation on SAR (2024, Published)".to_string()));
        assert!(lines.contains(&"    Links: Link".to_string()));
        assert!(lines.contains(&"001 Research Assistant at Earth Vision Lab (2024 to Present)".to_string()));
        assert!(lines.contains(&"001 Languages (3 skills)".to_string()));
    }

    #[test]
    fn check_output_for_empty_document() {
        let lines = format_check_output(&SiteData::default());
        assert_eq!(lines, vec!["Person".to_string(), "     <>".to_string()]);
    }

    #[test]
    fn build_output_summarizes_report() {
        let report = BuildReport {
            index: PathBuf::from("dist/index.html"),
            title: "Ada".to_string(),
            projects: 2,
            publications: 1,
            experience: 2,
            skill_groups: 3,
            sections: 9,
            structured_records: 2,
            assets_copied: 0,
        };
        let lines = format_build_output(&report);
        assert_eq!(lines[0], "Ada → dist/index.html");
        assert_eq!(
            lines[1],
            "    9 sections, 2 projects, 1 publication, 2 jobs, 3 skill groups"
        );
        assert_eq!(lines[2], "    Structured data: 2 records");
        assert_eq!(lines[3], "    Assets: 0 files copied");
    }
}
