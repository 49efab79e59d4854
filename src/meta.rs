//! Per-item metadata loading and field resolution.
//!
//! Every content or shop item may carry a `meta.json` overriding its
//! filename-derived defaults. Metadata is strictly optional and read
//! leniently: a missing file, unreadable file, or malformed JSON all behave
//! as an empty metadata set. A bad `meta.json` must never abort a build.
//!
//! ## Resolution priority
//!
//! Several logical fields accept more than one key, kept compatible with
//! existing content folders. The first non-empty value wins:
//!
//! ```text
//! title:    title → name
//! updated:  updated → date → lastEdited → last_edit
//! excerpt:  excerpt (blog) / excerpt → synopsis (projects)
//! ```
//!
//! The same first-non-empty rule combines file-based and metadata-based
//! sources (an excerpt file on disk trumps the metadata field); [`resolve`]
//! is the shared merge operation for those chains.

use serde_json::{Map, Value};
use std::path::Path;

/// Per-item metadata filename.
pub const META_FILENAME: &str = "meta.json";

/// Lenient view over an item's `meta.json`.
#[derive(Debug, Clone, Default)]
pub struct ItemMeta {
    fields: Map<String, Value>,
    present: bool,
}

impl ItemMeta {
    /// Load the metadata file of an item folder.
    ///
    /// Missing files yield an empty set silently; files that exist but do
    /// not parse into a JSON object yield an empty set with a warning.
    pub fn load(item_dir: &Path) -> Self {
        let path = item_dir.join(META_FILENAME);
        if !path.is_file() {
            return Self::default();
        }
        let fields = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            });
        match fields {
            Some(fields) => Self {
                fields,
                present: true,
            },
            None => {
                log::warn!("ignoring malformed metadata in {}", path.display());
                Self {
                    fields: Map::new(),
                    present: true,
                }
            }
        }
    }

    /// Whether a `meta.json` file exists for the item (even a malformed one).
    pub fn exists(&self) -> bool {
        self.present
    }

    /// First non-empty string value among `keys`, trimmed.
    pub fn first(&self, keys: &[&str]) -> Option<String> {
        let sources: Vec<Option<&str>> = keys.iter().map(|key| self.str_field(key)).collect();
        resolve(&sources)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Boolean field; anything but a JSON `true` reads as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.fields.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// String-array field; present only when the value is a JSON array.
    /// Non-string entries are dropped.
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        let list = self.fields.get(key)?.as_array()?;
        Some(
            list.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect(),
        )
    }

    /// Raw JSON value of the first non-null key. Used for passthrough
    /// fields that keep their shape.
    pub fn value(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.fields.get(*key))
            .find(|value| !value.is_null())
    }
}

/// Resolve a field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-empty value, trimmed. This is the core merge operation for
/// every field with more than one source.
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// Read a text file as a trimmed string.
///
/// Returns `None` if the file doesn't exist, can't be read, or is empty
/// after trimming. Used for excerpt and synopsis files.
pub fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
