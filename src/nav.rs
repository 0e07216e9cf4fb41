//! Scroll-synced navigation highlighting.
//!
//! Every configured section has a nav link with a matching `data-section`.
//! An intersection observer watches the sections with the bottom of the
//! viewport shaved off (70% by default) and a 20% visibility threshold, so
//! the section that "owns" the upper part of the screen is the one that
//! fires. Whenever a section reports that it entered, every link is
//! cleared and the matching link becomes active.
//!
//! [`NavTracker`] is that state machine; [`ObserverOptions`] is what the
//! browser runtime feeds to `IntersectionObserver`.

use crate::config::NavConfig;
use serde::Serialize;

/// One observer callback entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    /// Id of the observed section element.
    pub target: String,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn entering(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_intersecting: true,
        }
    }

    pub fn leaving(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_intersecting: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub section: String,
    pub active: bool,
}

/// Active state of the nav links. At most one link is active.
#[derive(Debug, Clone)]
pub struct NavTracker {
    links: Vec<NavLink>,
}

impl NavTracker {
    /// Track one link per section id, all inactive.
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            links: sections
                .into_iter()
                .map(|s| NavLink {
                    section: s.into(),
                    active: false,
                })
                .collect(),
        }
    }

    /// Process one observer batch in reported order.
    ///
    /// Each intersecting entry clears every link and activates the one for
    /// its section, so the last intersecting entry of the batch wins. An
    /// entry for a section without a link leaves everything inactive.
    pub fn observe(&mut self, batch: &[IntersectionEntry]) {
        for entry in batch.iter().filter(|e| e.is_intersecting) {
            for link in &mut self.links {
                link.active = link.section == entry.target;
            }
        }
    }

    /// Section of the active link, if any.
    pub fn active(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.active)
            .map(|l| l.section.as_str())
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}

/// `IntersectionObserver` parameters for the runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverOptions {
    /// Section ids to observe, in page order.
    pub sections: Vec<String>,
    /// CSS margin string, e.g. `0px 0px -70% 0px`.
    pub root_margin: String,
    pub threshold: f64,
}

impl ObserverOptions {
    pub fn from_config(nav: &NavConfig) -> Self {
        Self {
            sections: nav.sections.clone(),
            root_margin: format!("0px 0px -{}% 0px", nav.root_margin_bottom),
            threshold: nav.threshold,
        }
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::from_config(&NavConfig::default())
    }
}
