//! # folio
//!
//! A static generator for single-page personal portfolio sites. One JSON
//! document (`data.json`) describes the person, projects, publications,
//! experience and skills; folio turns it into one `index.html`.
//!
//! # Architecture: Load, Render, Compose
//!
//! ```text
//! data.json ──source──▶ SiteData ──render──▶ section fragments ─┐
//! config.toml ─config─▶ SiteConfig ─interact/nav──▶ runtime ────┼─generate─▶ index.html
//!                       SiteData ──jsonld──▶ structured data ───┘
//! ```
//!
//! The data document is loaded once and never mutated. Every renderer is
//! a pure function from part of it to a `Markup` fragment, and
//! [`generate`] composes the fragments in a fixed order. There is no
//! global state: a [`generate::RenderContext`] carries the data and config
//! to whoever needs them.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`source`] | Reads and parses the data document |
//! | [`types`] | The data model: lenient text, normalized link shapes, ordered groups |
//! | [`render`] | One renderer per page section, built with Maud |
//! | [`interact`] | Email copy and resume dropdown behaviour, runtime parameters |
//! | [`nav`] | Scroll-synced active nav link tracking |
//! | [`jsonld`] | schema.org Person and CreativeWork records |
//! | [`generate`] | Page composition and output writing |
//! | [`config`] | `config.toml` loading, validation and CSS variables |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Render at Build Time
//!
//! The page is complete HTML when it leaves the generator. Crawlers,
//! readers with scripts disabled and slow connections all see the content
//! immediately; the browser only runs the small interaction runtime.
//! A broken data document fails the build instead of shipping a blank page.
//!
//! ## Behaviour as State Machines
//!
//! The email copy feedback, resume dropdown and nav highlighting run in
//! the browser, but their rules live here as plain Rust types
//! ([`interact::CopyFeedback`], [`interact::ResumeMenu`],
//! [`nav::NavTracker`]). The generator derives the runtime's parameters
//! and the page's initial state from them, and their unit tests document
//! the timing and exclusivity rules.
//!
//! ## Escaping
//!
//! Maud escapes every interpolated value. Data that lands inside
//! `<script>` elements (JSON-LD, runtime config) has `<` written as a JSON
//! unicode escape. The About text is the only trusted markup, and it
//! comes from `config.toml`, not from the data document.

pub mod config;
pub mod generate;
pub mod interact;
pub mod jsonld;
pub mod nav;
pub mod output;
pub mod render;
pub mod source;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
