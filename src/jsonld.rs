//! JSON-LD structured data for search engines.
//!
//! The page head carries one `application/ld+json` script holding an array:
//! a schema.org `Person` followed by one `CreativeWork` per publication.

use crate::types::SiteData;
use serde::Serialize;
use serde_json::{Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Build `[person, ...works]`.
pub fn build(data: &SiteData) -> Value {
    let person = &data.person;
    let mut records = Vec::with_capacity(data.publications.len() + 1);
    records.push(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Person",
        "name": person.name,
        "email": format!("mailto:{}", person.email),
        "url": data.meta.canonical,
        "sameAs": [person.linkedin, person.github],
    }));
    for publication in &data.publications {
        let mut work = json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "CreativeWork",
            "name": publication.title,
            "datePublished": publication.year,
            "description": publication.summary,
        });
        if let Some(link) = publication.links.first() {
            work["url"] = Value::String(link.url.clone());
        }
        records.push(work);
    }
    Value::Array(records)
}

/// Serialize for embedding inside a `<script>` element.
///
/// `<` is written as `\u003c`, which JSON parsers read back unchanged, so
/// no string in the data can close the element early.
pub fn script_body<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}
