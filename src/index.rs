//! Index building and persistence.
//!
//! An index is a disposable projection of the content folders: a build
//! timestamp plus the resolved items in display order. It is regenerated
//! wholesale on every run; there is no incremental update, and a removed
//! source folder simply disappears from the next index.
//!
//! Ordering is a lexical comparison of the `updated` strings, newest first.
//! This relies on zero-padded ISO-like values; everything the tool derives
//! itself (mtime fallbacks, timestamps) is emitted in that form, while
//! hand-written metadata dates are trusted as-is.

use crate::types::ContentItem;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A generated content index.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIndex {
    pub generated_at: String,
    pub items: Vec<ContentItem>,
}

/// Build an index from resolved items, newest first.
///
/// The sort is stable, so items with equal `updated` values keep their
/// scan order (sorted slugs).
pub fn build(mut items: Vec<ContentItem>) -> ContentIndex {
    items.sort_by(|a, b| b.updated.cmp(&a.updated));
    ContentIndex {
        generated_at: generated_timestamp(),
        items,
    }
}

/// Merge already-built indexes into one combined feed, re-sorted newest
/// first by the same key.
pub fn merge(indexes: &[&ContentIndex]) -> ContentIndex {
    let items = indexes
        .iter()
        .flat_map(|index| index.items.iter().cloned())
        .collect();
    build(items)
}

/// Timestamp stamped into every generated file.
pub fn generated_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Write a generated output as pretty-printed JSON with a trailing newline.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), IndexError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
