//! Content page generation.
//!
//! Wraps an item's rendered body in the site's fixed page shell and
//! persists it as a standalone HTML document at a path derived from type
//! and slug. Re-running the build overwrites the page in place, so
//! unchanged inputs reproduce byte-identical output.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): templates are
//! type-safe Rust code and all interpolation is auto-escaped. The body
//! fragment is the one deliberate exception: it arrives pre-escaped from
//! the Markdown renderer, or verbatim from an author-provided HTML file.

use crate::config::PageConfig;
use crate::markdown;
use crate::scan::{ContentFile, ContentKind};
use crate::types::ContentType;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Body fragment for a content page: HTML files are embedded as-is,
/// Markdown goes through the restricted renderer.
pub fn build_body(content: &ContentFile) -> Result<String, PageError> {
    let raw = fs::read_to_string(&content.path)?;
    Ok(match content.kind {
        ContentKind::Html => raw.trim().to_string(),
        ContentKind::Markdown => markdown::to_html(&raw),
    })
}

/// Render the fixed page shell around a body fragment.
pub fn render_page(page: &PageConfig, title: &str, cover_url: &str, body_html: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(page.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href=(page.stylesheet);
                meta name="color-scheme" content="light dark";
            }
            body.page-content {
                main.container {
                    article.section {
                        h1 { (title) }
                        @if !cover_url.is_empty() {
                            img.content-cover src=(cover_url) alt="";
                        }
                        div.prose { (PreEscaped(body_html)) }
                    }
                }
            }
        }
    }
}

/// Filesystem path of an item's content page under the assets root.
pub fn page_path(assets_root: &Path, content_dir: &str, kind: ContentType, slug: &str) -> PathBuf {
    assets_root
        .join(content_dir)
        .join(kind.as_str())
        .join(format!("{slug}.html"))
}

/// Persist a rendered page, creating parent directories as needed.
pub fn write_page(path: &Path, markup: Markup) -> Result<(), PageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, markup.into_string())?;
    Ok(())
}
