//! The site data document.
//!
//! `data.json` is deserialized straight into these types. Two rules shape
//! the schema:
//!
//! - **Text is lenient.** A missing field, an explicit `null`, a number or a
//!   boolean all deserialize into a `String` (`""` for the first two). A
//!   half-filled document still renders.
//! - **Link shapes are resolved once.** Projects accept either the legacy
//!   `link`/`linkLabel` pair or a `links` array; publications accept `links`
//!   or a legacy `link`. Both are normalized here so renderers and the
//!   structured-data builder never branch on the raw shape.
//!
//! `projects[].tags` is the one strict field: it must be an array.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Label used for a legacy project `link` without a `linkLabel`.
pub const DEFAULT_PROJECT_LINK_LABEL: &str = "Open";
/// Label used for a legacy publication `link`.
pub const DEFAULT_PUBLICATION_LINK_LABEL: &str = "Link";

/// Root document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteData {
    pub meta: Meta,
    pub person: Person,
    pub projects: Vec<Project>,
    pub publications: Vec<Publication>,
    pub experience: Vec<Experience>,
    /// Skill groups in document order; chips are lenient text.
    #[serde(deserialize_with = "lenient_groups")]
    pub skills: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Meta {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub canonical: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub tagline: String,
    #[serde(deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(deserialize_with = "lenient_text")]
    pub linkedin: String,
    #[serde(deserialize_with = "lenient_text")]
    pub github: String,
    #[serde(deserialize_with = "lenient_text")]
    pub open_to: String,
    /// Resume variants keyed by type code, in document order.
    #[serde(deserialize_with = "nullable_map")]
    pub resumes: IndexMap<String, Resume>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Resume {
    #[serde(deserialize_with = "lenient_text")]
    pub file: String,
}

/// A labelled URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(deserialize_with = "lenient_text")]
    pub label: String,
}

impl Link {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

/// Normalized project links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProjectLinks {
    /// Neither `links` nor `link` was given.
    #[default]
    None,
    /// Legacy single `link` + `linkLabel`.
    Legacy(Link),
    /// Non-empty `links` array; the first entry is primary.
    Multi(Vec<Link>),
}

impl ProjectLinks {
    /// All link entries in display order.
    pub fn entries(&self) -> &[Link] {
        match self {
            ProjectLinks::None => &[],
            ProjectLinks::Legacy(link) => std::slice::from_ref(link),
            ProjectLinks::Multi(links) => links,
        }
    }

    /// Target of the card thumbnail. Empty when there are no links.
    pub fn primary_url(&self) -> &str {
        self.entries().first().map_or("", |l| l.url.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawProject")]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub metric: String,
    pub image: String,
    pub alt: String,
    pub tags: Vec<String>,
    pub links: ProjectLinks,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    #[serde(default, deserialize_with = "lenient_text")]
    title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    summary: String,
    #[serde(default, deserialize_with = "lenient_text")]
    metric: String,
    #[serde(default, deserialize_with = "lenient_text")]
    image: String,
    #[serde(default, deserialize_with = "lenient_text")]
    alt: String,
    #[serde(deserialize_with = "lenient_list")]
    tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    link: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    link_label: Option<String>,
    #[serde(default)]
    links: Option<Vec<Link>>,
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        let links = match (raw.links, raw.link) {
            (Some(links), _) if !links.is_empty() => ProjectLinks::Multi(links),
            (_, Some(url)) => ProjectLinks::Legacy(Link {
                url,
                label: raw
                    .link_label
                    .unwrap_or_else(|| DEFAULT_PROJECT_LINK_LABEL.to_string()),
            }),
            _ => ProjectLinks::None,
        };
        Self {
            title: raw.title,
            summary: raw.summary,
            metric: raw.metric,
            image: raw.image,
            alt: raw.alt,
            tags: raw.tags,
            links,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawPublication")]
pub struct Publication {
    pub title: String,
    pub year: String,
    pub status: String,
    pub summary: String,
    /// Normalized links; empty when the publication has none.
    pub links: Vec<Link>,
}

#[derive(Deserialize)]
struct RawPublication {
    #[serde(default, deserialize_with = "lenient_text")]
    title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    year: String,
    #[serde(default, deserialize_with = "lenient_text")]
    status: String,
    #[serde(default, deserialize_with = "lenient_text")]
    summary: String,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    link: Option<String>,
    #[serde(default)]
    links: Option<Vec<Link>>,
}

impl From<RawPublication> for Publication {
    fn from(raw: RawPublication) -> Self {
        let links = match (raw.links, raw.link) {
            (Some(links), _) if !links.is_empty() => links,
            (_, Some(url)) => vec![Link::new(url, DEFAULT_PUBLICATION_LINK_LABEL)],
            _ => Vec::new(),
        };
        Self {
            title: raw.title,
            year: raw.year,
            status: raw.status,
            summary: raw.summary,
            links,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient_text")]
    pub role: String,
    #[serde(deserialize_with = "lenient_text")]
    pub place: String,
    #[serde(deserialize_with = "lenient_text")]
    pub from: String,
    #[serde(deserialize_with = "lenient_text")]
    pub to: String,
    #[serde(deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(deserialize_with = "nullable_list")]
    pub bullets: Vec<String>,
}

// ============================================================================
// Lenient text
// ============================================================================

/// Stringify a JSON scalar the way the page displays it.
fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .map(value_to_text)
        .unwrap_or_default())
}

/// Like [`lenient_text`] but an empty result means "absent".
fn lenient_opt_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Some(lenient_text(deserializer)?).filter(|s| !s.is_empty()))
}

fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let items = Vec::<Value>::deserialize(deserializer)?;
    Ok(items.into_iter().map(value_to_text).collect())
}

/// Like [`lenient_list`] but `null` is an empty list.
fn nullable_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(value_to_text).collect())
}

/// A JSON object in document order; `null` is an empty map.
///
/// A repeated key keeps its first position and its last value, as
/// `JSON.parse` does.
fn nullable_map<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    Ok(Option::<IndexMap<String, V>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Skill groups: an ordered map of lenient text lists.
fn lenient_groups<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, Vec<String>>, D::Error> {
    let groups: IndexMap<String, Option<Vec<Value>>> = nullable_map(deserializer)?;
    Ok(groups
        .into_iter()
        .map(|(group, items)| {
            let items = items.unwrap_or_default();
            (group, items.into_iter().map(value_to_text).collect())
        })
        .collect())
}
