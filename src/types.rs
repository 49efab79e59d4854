//! Shared types used across the pipeline stages.
//!
//! These types are serialized into the generated index files and must stay
//! stable: the client-side renderer consumes them as-is.

use serde::{Deserialize, Serialize};

/// Content types that produce indexed items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Blog,
    Project,
}

impl ContentType {
    /// Singular name used in the `type` field and in content page paths.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::Project => "project",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved content item as it appears in the generated indexes.
///
/// Every field is derived from the item's folder: the folder name is the
/// slug, `meta.json` overrides derived defaults, and sibling files fill the
/// cover/excerpt/content roles. Web-path fields are empty strings (not
/// absent) when the folder has no matching file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: ContentType,
    /// Folder name; unique within its type by construction.
    pub slug: String,
    pub title: String,
    /// Sortable ISO-like date string; never empty (falls back to the
    /// folder's modification time).
    pub updated: String,
    pub excerpt: String,
    /// Web path of the cover image, or empty when the folder has none.
    pub cover: String,
    /// Web path of the generated content page, or empty without content.
    pub content_url: String,
    /// Web path of the item's `meta.json`, or empty without one.
    pub meta_url: String,
    /// Passthrough of the metadata `alsoPublished`/`links` value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub also_published: Option<serde_json::Value>,
}
