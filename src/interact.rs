//! Interaction behaviours for the hero and footer.
//!
//! Two behaviours run in the visitor's browser:
//!
//! - **Email copy**: the hero button and the footer link both copy the
//!   email address and briefly swap their label for a "Copied!" indicator.
//! - **Resume dropdown**: the resume button opens a panel of variants;
//!   picking one downloads the matching file.
//!
//! The types here are the reference model of those behaviours. The
//! generator derives the browser runtime's parameters from them
//! ([`RuntimeConfig`]), and the unit tests pin down their timing and
//! state rules without a browser.

use crate::config::CopyConfig;
use crate::types::Person;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Host clipboard access.
///
/// `write_text` is the asynchronous clipboard API; `fallback_copy` is the
/// select-a-hidden-textarea-and-copy path used when the former fails.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
    fn fallback_copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy `text`, falling back once. Returns whether either path succeeded.
pub fn copy_text(clipboard: &mut impl Clipboard, text: &str) -> bool {
    clipboard.write_text(text).is_ok() || clipboard.fallback_copy(text).is_ok()
}

// ============================================================================
// Email copy feedback
// ============================================================================

/// Inline style applied to a trigger while it shows the copied label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub background: String,
    pub color: String,
}

/// What a copy trigger currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    /// Inner markup of the trigger (or of its label span).
    pub label: String,
    pub highlight: Option<Highlight>,
}

impl TriggerView {
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            highlight: None,
        }
    }
}

#[derive(Debug, Clone)]
struct PendingRevert {
    due: Duration,
    restore: TriggerView,
}

/// One email copy trigger.
///
/// Each activation captures whatever the trigger shows at that moment and
/// schedules its own revert; nothing is debounced or cancelled. Activating
/// twice inside the window therefore captures the copied label as the
/// "original" the second time, matching what the browser does.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    email: String,
    copied: TriggerView,
    revert_after: Duration,
    current: TriggerView,
    pending: Vec<PendingRevert>,
}

impl CopyFeedback {
    pub fn new(
        email: impl Into<String>,
        initial: TriggerView,
        copied: TriggerView,
        revert_after: Duration,
    ) -> Self {
        Self {
            email: email.into(),
            copied,
            revert_after,
            current: initial,
            pending: Vec::new(),
        }
    }

    /// The hero button: icon plus label, highlighted while copied.
    ///
    /// `None` when the person has no email; the button is left unwired.
    pub fn hero(person: &Person, copy: &CopyConfig) -> Option<Self> {
        if person.email.is_empty() {
            return None;
        }
        Some(Self::new(
            &person.email,
            TriggerView::plain(hero_label_html(HERO_EMAIL_LABEL)),
            TriggerView {
                label: hero_label_html(&copy.label),
                highlight: Some(Highlight {
                    background: copy.highlight_background.clone(),
                    color: copy.highlight_color.clone(),
                }),
            },
            Duration::from_millis(copy.revert_ms),
        ))
    }

    /// The footer link: only the text of its inner span changes.
    pub fn footer(person: &Person, copy: &CopyConfig) -> Option<Self> {
        if person.email.is_empty() {
            return None;
        }
        Some(Self::new(
            &person.email,
            TriggerView::plain(maud::html! { (person.email) }.into_string()),
            TriggerView::plain(maud::html! { (copy.label) }.into_string()),
            Duration::from_millis(copy.revert_ms),
        ))
    }

    /// Handle a click at time `now`.
    ///
    /// Returns `false` when both clipboard paths failed; the trigger is then
    /// left untouched.
    pub fn activate(&mut self, now: Duration, clipboard: &mut impl Clipboard) -> bool {
        if !copy_text(clipboard, &self.email) {
            return false;
        }
        let restore = std::mem::replace(&mut self.current, self.copied.clone());
        self.pending.push(PendingRevert {
            due: now + self.revert_after,
            restore,
        });
        true
    }

    /// Apply every revert due at or before `now`, in scheduling order.
    pub fn advance(&mut self, now: Duration) {
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;
        if let Some(last) = due.into_iter().last() {
            self.current = last.restore;
        }
    }

    pub fn view(&self) -> &TriggerView {
        &self.current
    }

    pub fn pending_reverts(&self) -> usize {
        self.pending.len()
    }
}

/// Resting label of the hero email button.
pub const HERO_EMAIL_LABEL: &str = "Email";

/// Icon plus text, as the hero button renders it.
pub fn hero_label_html(text: &str) -> String {
    crate::render::icon_label("email", text).into_string()
}

// ============================================================================
// Resume dropdown
// ============================================================================

/// One entry of the resume panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeOption {
    /// Variant code, the `data-type` of the option.
    pub code: String,
    pub href: String,
    /// Suggested download filename: last path segment of `href`.
    pub filename: String,
}

/// A synthetic download the runtime triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub href: String,
    pub filename: String,
}

/// Where a document-level click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Trigger,
    Panel,
    Outside,
}

/// Last `/`-separated segment of a path.
pub fn download_name(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

#[derive(Debug, Clone)]
pub struct ResumeMenu {
    options: Vec<ResumeOption>,
    open: bool,
}

impl ResumeMenu {
    /// Build the menu from the person's resume variants.
    ///
    /// `None` when there are no variants; the button is then not rendered.
    /// Variants without a file are listed but do nothing when picked.
    pub fn from_person(person: &Person) -> Option<Self> {
        if person.resumes.is_empty() {
            return None;
        }
        let options = person
            .resumes
            .iter()
            .map(|(code, resume)| ResumeOption {
                code: code.to_string(),
                href: resume.file.clone(),
                filename: download_name(&resume.file).to_string(),
            })
            .collect();
        Some(Self {
            options,
            open: false,
        })
    }

    pub fn options(&self) -> &[ResumeOption] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Click on the resume button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Click on the option with `code`.
    pub fn select(&mut self, code: &str) -> Option<Download> {
        let option = self
            .options
            .iter()
            .find(|o| o.code == code && !o.href.is_empty())?;
        self.open = false;
        Some(Download {
            href: option.href.clone(),
            filename: option.filename.clone(),
        })
    }

    /// Any click on the document, after the element's own handler ran.
    pub fn click_elsewhere(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.open = false;
        }
    }
}

// ============================================================================
// Browser runtime parameters
// ============================================================================

/// Parameters embedded in the page for the runtime script.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Empty when there is no email; copy triggers are then not wired.
    pub email: String,
    pub copy: CopyRuntime,
    pub nav: crate::nav::ObserverOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyRuntime {
    pub revert_ms: u64,
    pub hero_html: String,
    pub background: String,
    pub color: String,
    pub footer_text: String,
}

impl RuntimeConfig {
    pub fn new(person: &Person, copy: &CopyConfig, nav: crate::nav::ObserverOptions) -> Self {
        Self {
            email: person.email.clone(),
            copy: CopyRuntime {
                revert_ms: copy.revert_ms,
                hero_html: hero_label_html(&copy.label),
                background: copy.highlight_background.clone(),
                color: copy.highlight_color.clone(),
                footer_text: copy.label.clone(),
            },
            nav,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_data;

    /// Scripted clipboard: each path succeeds or fails as configured and
    /// records what it was asked to copy.
    #[derive(Default)]
    struct FakeClipboard {
        primary_fails: bool,
        fallback_fails: bool,
        primary_calls: Vec<String>,
        fallback_calls: Vec<String>,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.primary_calls.push(text.to_string());
            if self.primary_fails {
                Err(ClipboardError("denied".into()))
            } else {
                Ok(())
            }
        }

        fn fallback_copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.fallback_calls.push(text.to_string());
            if self.fallback_fails {
                Err(ClipboardError("execCommand failed".into()))
            } else {
                Ok(())
            }
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn hero() -> CopyFeedback {
        let data = sample_data();
        CopyFeedback::hero(&data.person, &CopyConfig::default()).unwrap()
    }

    #[test]
    fn hero_shows_copied_then_reverts_exactly() {
        let mut fb = hero();
        let before = fb.view().clone();
        let mut cb = FakeClipboard::default();

        assert!(fb.activate(ms(0), &mut cb));
        assert!(fb.view().label.contains("Copied!"));
        assert_eq!(
            fb.view().highlight,
            Some(Highlight {
                background: "var(--accent)".into(),
                color: "white".into()
            })
        );
        assert_eq!(cb.primary_calls, vec!["ada@example.org"]);

        fb.advance(ms(1999));
        assert!(fb.view().label.contains("Copied!"));

        fb.advance(ms(2000));
        assert_eq!(fb.view(), &before);
        assert_eq!(fb.pending_reverts(), 0);
    }

    #[test]
    fn footer_swaps_only_text() {
        let data = sample_data();
        let mut fb = CopyFeedback::footer(&data.person, &CopyConfig::default()).unwrap();
        assert_eq!(fb.view(), &TriggerView::plain("ada@example.org"));

        fb.activate(ms(10), &mut FakeClipboard::default());
        assert_eq!(fb.view(), &TriggerView::plain("Copied!"));

        fb.advance(ms(2010));
        assert_eq!(fb.view(), &TriggerView::plain("ada@example.org"));
    }

    #[test]
    fn primary_failure_uses_fallback() {
        let mut fb = hero();
        let mut cb = FakeClipboard {
            primary_fails: true,
            ..Default::default()
        };
        assert!(fb.activate(ms(0), &mut cb));
        assert_eq!(cb.fallback_calls, vec!["ada@example.org"]);
        assert!(fb.view().label.contains("Copied!"));
    }

    #[test]
    fn primary_success_skips_fallback() {
        let mut cb = FakeClipboard::default();
        assert!(copy_text(&mut cb, "x@y.z"));
        assert!(cb.fallback_calls.is_empty());
    }

    #[test]
    fn both_paths_failing_changes_nothing() {
        let mut fb = hero();
        let before = fb.view().clone();
        let mut cb = FakeClipboard {
            primary_fails: true,
            fallback_fails: true,
            ..Default::default()
        };
        assert!(!fb.activate(ms(0), &mut cb));
        assert_eq!(fb.view(), &before);
        assert_eq!(fb.pending_reverts(), 0);
    }

    #[test]
    fn overlapping_activations_revert_independently() {
        let mut fb = hero();
        let original = fb.view().clone();
        let mut cb = FakeClipboard::default();

        fb.activate(ms(0), &mut cb);
        fb.activate(ms(500), &mut cb);
        assert_eq!(fb.pending_reverts(), 2);

        // First revert restores the original markup...
        fb.advance(ms(2000));
        assert_eq!(fb.view(), &original);
        // ...then the second restores what it captured: the copied label.
        fb.advance(ms(2500));
        assert!(fb.view().label.contains("Copied!"));
        assert_eq!(fb.pending_reverts(), 0);
    }

    #[test]
    fn hero_and_footer_do_not_share_timers() {
        let data = sample_data();
        let copy = CopyConfig::default();
        let mut hero = CopyFeedback::hero(&data.person, &copy).unwrap();
        let mut footer = CopyFeedback::footer(&data.person, &copy).unwrap();
        let mut cb = FakeClipboard::default();

        hero.activate(ms(0), &mut cb);
        footer.activate(ms(1000), &mut cb);
        hero.advance(ms(2000));
        footer.advance(ms(2000));

        assert!(!hero.view().label.contains("Copied!"));
        assert_eq!(footer.view().label, "Copied!");
    }

    #[test]
    fn configured_revert_window_is_used() {
        let data = sample_data();
        let copy = CopyConfig {
            revert_ms: 500,
            ..CopyConfig::default()
        };
        let mut fb = CopyFeedback::footer(&data.person, &copy).unwrap();
        fb.activate(ms(0), &mut FakeClipboard::default());
        fb.advance(ms(500));
        assert_eq!(fb.view().label, "ada@example.org");
    }

    #[test]
    fn no_email_means_no_trigger() {
        let mut data = sample_data();
        data.person.email.clear();
        assert!(CopyFeedback::hero(&data.person, &CopyConfig::default()).is_none());
        assert!(CopyFeedback::footer(&data.person, &CopyConfig::default()).is_none());
    }

    #[test]
    fn footer_label_is_escaped() {
        let mut data = sample_data();
        data.person.email = "<b>@x".to_string();
        let fb = CopyFeedback::footer(&data.person, &CopyConfig::default()).unwrap();
        assert_eq!(fb.view().label, "&lt;b&gt;@x");
    }

    // =========================================================================
    // Resume dropdown
    // =========================================================================

    #[test]
    fn download_name_takes_last_segment() {
        assert_eq!(download_name("assets/resume/cv.pdf"), "cv.pdf");
        assert_eq!(download_name("cv.pdf"), "cv.pdf");
        assert_eq!(download_name("dir/"), "");
    }

    #[test]
    fn menu_lists_variants_in_order() {
        let menu = ResumeMenu::from_person(&sample_data().person).unwrap();
        let codes: Vec<&str> = menu.options().iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, vec!["ml", "swe"]);
        assert_eq!(menu.options()[0].filename, "Ada_Example_ML.pdf");
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut menu = ResumeMenu::from_person(&sample_data().person).unwrap();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn select_downloads_and_closes() {
        let mut menu = ResumeMenu::from_person(&sample_data().person).unwrap();
        menu.toggle();
        let download = menu.select("swe").unwrap();
        assert_eq!(
            download,
            Download {
                href: "assets/resume/Ada_Example_SWE.pdf".into(),
                filename: "Ada_Example_SWE.pdf".into(),
            }
        );
        assert!(!menu.is_open());
    }

    #[test]
    fn select_unknown_code_keeps_panel_open() {
        let mut menu = ResumeMenu::from_person(&sample_data().person).unwrap();
        menu.toggle();
        assert!(menu.select("phd").is_none());
        assert!(menu.is_open());
    }

    #[test]
    fn variant_without_file_does_nothing() {
        let person: Person =
            serde_json::from_str(r#"{"resumes":{"draft":{}}}"#).unwrap();
        let mut menu = ResumeMenu::from_person(&person).unwrap();
        menu.toggle();
        assert!(menu.select("draft").is_none());
        assert!(menu.is_open());
    }

    #[test]
    fn outside_click_closes_inside_click_does_not() {
        let mut menu = ResumeMenu::from_person(&sample_data().person).unwrap();
        menu.toggle();
        menu.click_elsewhere(ClickTarget::Panel);
        assert!(menu.is_open());
        menu.click_elsewhere(ClickTarget::Trigger);
        assert!(menu.is_open());
        menu.click_elsewhere(ClickTarget::Outside);
        assert!(!menu.is_open());
    }

    #[test]
    fn no_resumes_no_menu() {
        assert!(ResumeMenu::from_person(&Person::default()).is_none());
    }

    #[test]
    fn runtime_config_serializes_camel_case() {
        let data = sample_data();
        let runtime = RuntimeConfig::new(
            &data.person,
            &CopyConfig::default(),
            crate::nav::ObserverOptions::default(),
        );
        let json = serde_json::to_value(&runtime).unwrap();
        assert_eq!(json["email"], "ada@example.org");
        assert_eq!(json["copy"]["revertMs"], 2000);
        assert_eq!(json["copy"]["footerText"], "Copied!");
        assert!(json["copy"]["heroHtml"].as_str().unwrap().contains("Copied!"));
        assert_eq!(json["nav"]["rootMargin"], "0px 0px -70% 0px");
    }
}
