//! Section renderers.
//!
//! Each renderer projects one part of the data document into a `Markup`
//! fragment: the children of a fixed container in the page shell (see
//! [`crate::generate`]). Renderers never look at each other's output.
//!
//! All interpolation goes through maud, which HTML-escapes every value.
//! The About paragraph is the one exception: it is Markdown from the site
//! owner's `config.toml` and is inserted as rendered HTML.
//!
//! | Renderer | Container |
//! |----------|-----------|
//! | [`render_brand`] | `#brand` |
//! | [`render_hero`] | `#home` |
//! | [`render_projects`] | `#projects .grid` |
//! | [`render_publications`] | `#pubList` |
//! | [`render_about`] | `#about` |
//! | [`render_experience`] | `#timeline` |
//! | [`render_skills`] | `#skillGrid` |
//! | [`render_footer`] | `footer` |

use crate::interact::{CopyFeedback, HERO_EMAIL_LABEL, ResumeMenu};
use crate::nav::NavTracker;
use crate::types::{Experience, Person, Project, Publication};
use indexmap::IndexMap;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Separator between publication links.
pub const LINK_SEPARATOR: &str = " · ";

/// An inline icon followed by text.
pub fn icon_label(icon: &str, text: &str) -> Markup {
    html! {
        img.icon src={ "assets/icons/" (icon) ".svg" } alt="" aria-hidden="true";
        " " (text)
    }
}

/// Site name in the header.
pub fn render_brand(person: &Person) -> Markup {
    html! { (person.name) }
}

/// Navigation links, one per tracked section.
pub fn render_nav(tracker: &NavTracker) -> Markup {
    html! {
        @for link in tracker.links() {
            a href={ "#" (link.section) } data-section=(link.section)
                class=[link.active.then_some("active")] {
                (section_title(&link.section))
            }
        }
    }
}

/// Hero section: name, tagline, email/resume actions and social links.
pub fn render_hero(
    person: &Person,
    email: Option<&CopyFeedback>,
    resume: Option<&ResumeMenu>,
) -> Markup {
    html! {
        h1.name { (person.name) }
        p.tag { (person.tagline) }
        div.actions {
            a #emailBtn .btn href="#" {
                @match email {
                    Some(feedback) => { (PreEscaped(&feedback.view().label)) }
                    None => { (icon_label("email", HERO_EMAIL_LABEL)) }
                }
            }
            @if let Some(menu) = resume {
                div.resume {
                    a #resumeBtn .btn .btn-secondary href="#" aria-haspopup="true" {
                        (icon_label("download", "Resume"))
                    }
                    div #resumeDropdown .dropdown .hidden[!menu.is_open()] role="menu" {
                        @for option in menu.options() {
                            button.resume-option type="button" role="menuitem"
                                data-type=(option.code)
                                data-href=(option.href)
                                data-filename=(option.filename) {
                                (option.code)
                            }
                        }
                    }
                }
            }
            a #socialLinkedin .social href=(person.linkedin) target="_blank" rel="noopener" {
                (icon_label("linkedin", "LinkedIn"))
            }
            a #socialGithub .social href=(person.github) target="_blank" rel="noopener" {
                (icon_label("github", "GitHub"))
            }
        }
    }
}

/// Project cards, in data order.
pub fn render_projects(projects: &[Project]) -> Markup {
    html! {
        @for project in projects {
            (render_project_card(project))
        }
    }
}

fn render_project_card(project: &Project) -> Markup {
    html! {
        article class="card col-6 col-4" tabindex="0" {
            a.thumb href=(project.links.primary_url()) target="_blank" rel="noopener" {
                img src=(project.image) loading="lazy" alt=(project.alt);
            }
            h3 { (project.title) }
            p { (project.summary) }
            p.meta { (project.metric) }
            div.chips {
                @for tag in &project.tags {
                    span.chip { (tag) }
                }
            }
            @let links = project.links.entries();
            @if !links.is_empty() {
                p class="mt-12" {
                    @for (index, link) in links.iter().enumerate() {
                        @if index > 0 { " " }
                        a class=(button_class(index)) href=(link.url) target="_blank" rel="noopener" {
                            (icon_label("external", &link.label))
                        }
                    }
                }
            }
        }
    }
}

/// The first link of a card is the primary button.
fn button_class(index: usize) -> &'static str {
    if index == 0 { "btn" } else { "btn btn-secondary ml-8" }
}

/// Publication list items, in data order.
pub fn render_publications(publications: &[Publication]) -> Markup {
    html! {
        @for publication in publications {
            li {
                strong { (publication.title) }
                " "
                span.muted { "(" (publication.year) ")" }
                " "
                span.chip aria-label=(publication.status) { (publication.status) }
                br;
                span.muted { (publication.summary) }
                @if !publication.links.is_empty() {
                    span.links {
                        (LINK_SEPARATOR)
                        @for (index, link) in publication.links.iter().enumerate() {
                            @if index > 0 { (LINK_SEPARATOR) }
                            a href=(link.url) target="_blank" rel="noopener" { (link.label) }
                        }
                    }
                }
            }
        }
    }
}

/// Experience timeline items, in data order.
pub fn render_experience(experience: &[Experience]) -> Markup {
    html! {
        @for item in experience {
            div.tl-item {
                h3 { (item.role) " — " (item.place) }
                div.muted { (item.from) " to " (item.to) ", " (item.location) }
                ul class="mt-8" {
                    @for bullet in &item.bullets {
                        li { (bullet) }
                    }
                }
            }
        }
    }
}

/// Skill groups in document order, chips in array order.
pub fn render_skills(skills: &IndexMap<String, Vec<String>>) -> Markup {
    html! {
        @for (group, items) in skills {
            div.skill-group {
                h4 { (group) }
                div.chips {
                    @for skill in items {
                        span.chip { (skill) }
                    }
                }
            }
        }
    }
}

/// The About paragraph from owner-authored Markdown.
pub fn render_about(markdown: &str) -> Markup {
    let mut body = String::new();
    md_html::push_html(&mut body, Parser::new(markdown));
    PreEscaped(body)
}

/// Footer: copyable email, social links and availability note.
pub fn render_footer(person: &Person, email: Option<&CopyFeedback>) -> Markup {
    html! {
        a #footerEmail href="#" {
            span {
                @match email {
                    Some(feedback) => { (PreEscaped(&feedback.view().label)) }
                    None => { (person.email) }
                }
            }
        }
        a #footerLinkedin href=(person.linkedin) target="_blank" rel="noopener" { "LinkedIn" }
        a #footerGithub href=(person.github) target="_blank" rel="noopener" { "GitHub" }
        p #openTo .muted { (person.open_to) }
    }
}

/// Heading for a section id: `"projects"` → `"Projects"`.
pub fn section_title(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================
