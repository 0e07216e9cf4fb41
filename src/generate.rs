//! Page generation.
//!
//! Runs the whole pipeline for one site and writes the result:
//!
//! ```text
//! 1. Load        data.json      →  SiteData            (source)
//! 2. Render      SiteData       →  section fragments   (render)
//! 3. Wire        Person/config  →  copy + resume models, runtime config (interact)
//! 4. Describe    SiteData       →  JSON-LD records     (jsonld)
//! 5. Track       config         →  nav links + observer options (nav)
//! 6. Compose     fragments      →  dist/index.html
//! ```
//!
//! Steps 2-5 are pure and only read the [`RenderContext`]; nothing is
//! shared between them. If step 1 fails nothing is written, so a previous
//! good build in the output directory is left intact. Assets are copied
//! before `index.html` is written, so a new page never references a
//! partially copied asset tree.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # The page, with CSS, JSON-LD and runtime inlined
//! └── assets/
//!     ├── icons/*.svg     # Stock icons, overridable from the source assets/
//!     └── ...             # Everything under <source>/assets/, copied verbatim
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (colors injected from config)
//! - `static/folio.js`: email copy, resume dropdown and nav tracking runtime

use crate::config::{self, ConfigError, SiteConfig};
use crate::interact::{CopyFeedback, ResumeMenu, RuntimeConfig};
use crate::jsonld;
use crate::nav::{NavTracker, ObserverOptions};
use crate::render;
use crate::source::{self, FetchError};
use crate::types::SiteData;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/folio.js");

/// Stock icons written before the user's assets are copied.
const STOCK_ICONS: &[(&str, &str)] = &[
    ("email.svg", include_str!("../static/icons/email.svg")),
    ("download.svg", include_str!("../static/icons/download.svg")),
    ("external.svg", include_str!("../static/icons/external.svg")),
    ("github.svg", include_str!("../static/icons/github.svg")),
    ("linkedin.svg", include_str!("../static/icons/linkedin.svg")),
];

/// Everything the renderers may read. Built once per generation.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub data: &'a SiteData,
    pub config: &'a SiteConfig,
}

/// Summary of a finished build, for CLI output.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub index: PathBuf,
    pub title: String,
    pub projects: usize,
    pub publications: usize,
    pub experience: usize,
    pub skill_groups: usize,
    pub sections: usize,
    /// Person record plus one record per publication.
    pub structured_records: usize,
    pub assets_copied: usize,
}

/// Build the site in `source_dir` into `output_dir`.
pub fn generate(source_dir: &Path, output_dir: &Path) -> Result<BuildReport, GenerateError> {
    let config = config::load_config(source_dir)?;
    let data = source::load(&source_dir.join(&config.data))?;
    let ctx = RenderContext {
        data: &data,
        config: &config,
    };

    let records = jsonld::build(&data);
    let page = render_page(&ctx, &records)?;

    fs::create_dir_all(output_dir)?;
    write_stock_icons(output_dir)?;
    let assets_copied = copy_assets(&source_dir.join("assets"), &output_dir.join("assets"))?;

    let index = output_dir.join("index.html");
    fs::write(&index, page.into_string())?;
    println!("Generated index.html");

    Ok(BuildReport {
        index,
        title: data.meta.title.clone(),
        projects: data.projects.len(),
        publications: data.publications.len(),
        experience: data.experience.len(),
        skill_groups: data.skills.len(),
        sections: config.nav.sections.len(),
        structured_records: records.as_array().map_or(0, Vec::len),
        assets_copied,
    })
}

fn write_stock_icons(output_dir: &Path) -> std::io::Result<()> {
    let icons_dir = output_dir.join("assets/icons");
    fs::create_dir_all(&icons_dir)?;
    for (name, svg) in STOCK_ICONS {
        fs::write(icons_dir.join(name), svg)?;
    }
    Ok(())
}

/// Copy `src` into `dst` recursively. A missing `src` copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Page composition
// ============================================================================

/// Compose the full page from the section fragments.
pub fn render_page(
    ctx: &RenderContext,
    records: &serde_json::Value,
) -> Result<Markup, GenerateError> {
    let data = ctx.data;
    let config = ctx.config;
    let person = &data.person;

    let hero_copy = CopyFeedback::hero(person, &config.copy);
    let footer_copy = CopyFeedback::footer(person, &config.copy);
    let resume = ResumeMenu::from_person(person);
    let observer = ObserverOptions::from_config(&config.nav);
    let tracker = NavTracker::new(observer.sections.iter().map(String::as_str));
    let runtime = RuntimeConfig::new(person, &config.copy, observer);
    let ld_json = jsonld::script_body(records)?;
    let runtime_json = jsonld::script_body(&runtime)?;

    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );
    let head = html! {
        @if !data.meta.canonical.is_empty() {
            link rel="canonical" href=(data.meta.canonical);
        }
        @if !person.tagline.is_empty() {
            meta name="description" content=(person.tagline);
        }
        style { (PreEscaped(css)) }
        script type="application/ld+json" { (PreEscaped(ld_json)) }
    };

    let content = html! {
        header.site-header {
            a #brand href="#home" { (render::render_brand(person)) }
            nav.nav { (render::render_nav(&tracker)) }
        }
        main {
            @for id in &config.nav.sections {
                section id=(id) {
                    (render_section(ctx, id, hero_copy.as_ref(), resume.as_ref()))
                }
            }
        }
        footer.site-footer {
            (render::render_footer(person, footer_copy.as_ref()))
        }
        script type="application/json" id="folio-config" {
            (PreEscaped(runtime_json))
        }
        script { (PreEscaped(JS)) }
    };

    Ok(base_document(&data.meta.title, head, content))
}

/// Inner content of one `<section>`.
///
/// Sections without a renderer (achievements, certifications, contact, or
/// any custom id) get a heading only.
fn render_section(
    ctx: &RenderContext,
    id: &str,
    hero_copy: Option<&CopyFeedback>,
    resume: Option<&ResumeMenu>,
) -> Markup {
    let data = ctx.data;
    let title = render::section_title(id);
    match id {
        "home" => render::render_hero(&data.person, hero_copy, resume),
        "projects" => html! {
            h2 { (title) }
            div.grid { (render::render_projects(&data.projects)) }
        },
        "publications" => html! {
            h2 { (title) }
            ul #pubList { (render::render_publications(&data.publications)) }
        },
        "about" => html! {
            h2 { (title) }
            (render::render_about(&ctx.config.about.markdown))
        },
        "experience" => html! {
            h2 { (title) }
            div #timeline { (render::render_experience(&data.experience)) }
        },
        "skills" => html! {
            h2 { (title) }
            div #skillGrid { (render::render_skills(&data.skills)) }
        },
        _ => html! { h2 { (title) } },
    }
}

/// Renders the base HTML document structure
fn base_document(title: &str, head: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                (head)
            }
            body {
                (content)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
