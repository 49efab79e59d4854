//! Content-folder scanning and item resolution.
//!
//! First stage of the build pipeline. Lists the per-item subfolders of each
//! content root and resolves every folder into a [`ContentItem`] plus the
//! source file its content page will be built from.
//!
//! ## Directory Structure
//!
//! ```text
//! assets/                          # Assets root (--assets)
//! ├── config.toml                  # Tool configuration (optional)
//! ├── blog/
//! │   ├── sommerfest/              # Folder name = slug
//! │   │   ├── meta.json            # Optional metadata overrides
//! │   │   ├── article.md           # Full content (.html wins over .md)
//! │   │   ├── excerpt.txt          # Teaser text (preferred name wins)
//! │   │   ├── hof-cover.png        # Cover ("cover" in the name wins)
//! │   │   └── einladung.odt        # Ignored (document denylist)
//! │   └── alte-sorten/
//! │       └── bericht.html
//! └── projects/
//!     └── streuobstwiese/
//!         ├── synopsis.txt
//!         └── wiese-cover.jpeg
//! ```
//!
//! ## File Classification
//!
//! Roles are assigned by a priority-ordered list of predicates, evaluated
//! top-down over the folder's files (sorted by name), first match wins:
//!
//! - content: exact `article.html` → any `.html`/`.htm` → any `.md`
//! - excerpt: preferred name (`excerpt.txt` / `synopsis.txt`) → any `.txt`
//! - cover:   image named `*cover*` → first image
//!
//! Files with document extensions (odt, doc, docx, pdf, psd, ai) and hidden
//! files are never considered; everything else unmatched is silently unused.
//!
//! ## Error Model
//!
//! A missing assets root is fatal. A missing per-type directory produces an
//! empty item list (a removed source folder disappears from the next
//! index). Per-item degradation, such as missing metadata or files, never
//! fails the scan; fields fall back to slug, folder mtime, and empty
//! strings.

use crate::config::SiteConfig;
use crate::meta::{self, ItemMeta};
use crate::types::{ContentItem, ContentType};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("content root not found: {0}")]
    RootMissing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the scanner resolved for one build.
#[derive(Debug)]
pub struct ContentScan {
    pub blog: Vec<ResolvedItem>,
    pub projects: Vec<ResolvedItem>,
}

impl ContentScan {
    /// All resolved items across types, blog first, in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedItem> {
        self.blog.iter().chain(self.projects.iter())
    }
}

/// A resolved item plus the source file its content page is built from.
#[derive(Debug)]
pub struct ResolvedItem {
    pub item: ContentItem,
    pub content: Option<ContentFile>,
}

/// Source file for a content page.
#[derive(Debug)]
pub struct ContentFile {
    pub path: PathBuf,
    pub kind: ContentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Markdown,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];
const HTML_EXTENSIONS: &[&str] = &["html", "htm"];
const IGNORED_EXTENSIONS: &[&str] = &["odt", "doc", "docx", "pdf", "psd", "ai"];

const ARTICLE_FILENAME: &str = "article.html";

/// Fallback when even the folder mtime is unavailable; keeps `updated`
/// non-empty so the index stays sortable.
const EPOCH: &str = "1970-01-01T00:00:00Z";

/// Scan both content roots under the assets root.
pub fn scan(assets_root: &Path, config: &SiteConfig) -> Result<ContentScan, ScanError> {
    if !assets_root.is_dir() {
        return Err(ScanError::RootMissing(assets_root.to_path_buf()));
    }
    Ok(ContentScan {
        blog: scan_type(assets_root, ContentType::Blog, config)?,
        projects: scan_type(assets_root, ContentType::Project, config)?,
    })
}

/// Scan one content type's root into resolved items, in slug order.
pub fn scan_type(
    assets_root: &Path,
    kind: ContentType,
    config: &SiteConfig,
) -> Result<Vec<ResolvedItem>, ScanError> {
    let type_root = assets_root.join(config.dirs.for_type(kind));
    if !type_root.is_dir() {
        log::warn!(
            "{kind} root {} does not exist, emitting an empty index",
            type_root.display()
        );
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for slug in list_slugs(&type_root)? {
        items.push(resolve_item(&type_root, kind, &slug, config)?);
    }
    Ok(items)
}

/// Immediate subdirectories of a content root, sorted by name.
pub(crate) fn list_slugs(type_root: &Path) -> Result<Vec<String>, ScanError> {
    let mut slugs: Vec<String> = fs::read_dir(type_root)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect();
    slugs.sort();
    Ok(slugs)
}

/// Files in an item folder, minus hidden files and the document denylist,
/// sorted by name.
pub(crate) fn item_files(folder: &Path) -> Result<Vec<String>, ScanError> {
    let mut files: Vec<String> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.') && !has_extension(name, IGNORED_EXTENSIONS))
        .collect();
    files.sort();
    Ok(files)
}

fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn has_extension(name: &str, extensions: &[&str]) -> bool {
    extensions.contains(&extension_of(name).as_str())
}

/// First file matching any rule, rules tried top-down.
fn pick_file<'a>(files: &'a [String], rules: &[&dyn Fn(&str) -> bool]) -> Option<&'a str> {
    rules
        .iter()
        .find_map(|rule| files.iter().map(String::as_str).find(|name| rule(name)))
}

/// Cover image: a name containing "cover" wins, else the first image.
pub(crate) fn pick_cover(files: &[String]) -> Option<&str> {
    pick_file(
        files,
        &[
            &|name: &str| {
                has_extension(name, IMAGE_EXTENSIONS) && name.to_lowercase().contains("cover")
            },
            &|name: &str| has_extension(name, IMAGE_EXTENSIONS),
        ],
    )
}

/// Content file: exact article name, then any HTML, then any Markdown.
fn pick_content(files: &[String]) -> Option<&str> {
    pick_file(
        files,
        &[
            &|name: &str| name.eq_ignore_ascii_case(ARTICLE_FILENAME),
            &|name: &str| has_extension(name, HTML_EXTENSIONS),
            &|name: &str| has_extension(name, &["md"]),
        ],
    )
}

/// Excerpt file: the type's preferred name, then any text file.
fn pick_excerpt<'a>(files: &'a [String], preferred: &str) -> Option<&'a str> {
    pick_file(
        files,
        &[
            &|name: &str| name.eq_ignore_ascii_case(preferred),
            &|name: &str| has_extension(name, &["txt"]),
        ],
    )
}

fn resolve_item(
    type_root: &Path,
    kind: ContentType,
    slug: &str,
    config: &SiteConfig,
) -> Result<ResolvedItem, ScanError> {
    let folder = type_root.join(slug);
    let files = item_files(&folder)?;
    let metadata = ItemMeta::load(&folder);

    let title = metadata
        .first(&["title", "name"])
        .unwrap_or_else(|| slug.to_string());
    let updated = resolve_updated(&metadata, &folder);

    let (preferred_excerpt, excerpt_keys): (&str, &[&str]) = match kind {
        ContentType::Blog => ("excerpt.txt", &["excerpt"]),
        ContentType::Project => ("synopsis.txt", &["excerpt", "synopsis"]),
    };
    let excerpt = pick_excerpt(&files, preferred_excerpt)
        .and_then(|name| meta::read_trimmed(&folder.join(name)))
        .or_else(|| metadata.first(excerpt_keys))
        .unwrap_or_default();

    let cover = pick_cover(&files)
        .map(|name| item_url(config, kind, slug, name))
        .unwrap_or_default();

    let content = pick_content(&files).map(|name| ContentFile {
        path: folder.join(name),
        kind: if has_extension(name, &["md"]) {
            ContentKind::Markdown
        } else {
            ContentKind::Html
        },
    });
    let content_url = content
        .as_ref()
        .map(|_| page_url(config, kind, slug))
        .unwrap_or_default();

    let meta_url = if metadata.exists() {
        item_url(config, kind, slug, meta::META_FILENAME)
    } else {
        String::new()
    };

    // Cross-posting links only exist for blog posts
    let also_published = match kind {
        ContentType::Blog => metadata.value(&["alsoPublished", "links"]).cloned(),
        ContentType::Project => None,
    };

    log::debug!("resolved {kind} item {slug} (updated {updated})");

    Ok(ResolvedItem {
        item: ContentItem {
            kind,
            slug: slug.to_string(),
            title,
            updated,
            excerpt,
            cover,
            content_url,
            meta_url,
            also_published,
        },
        content,
    })
}

/// Web path of a file inside an item folder.
fn item_url(config: &SiteConfig, kind: ContentType, slug: &str, file: &str) -> String {
    format!(
        "{}/{}/{slug}/{file}",
        config.web_root,
        config.dirs.for_type(kind)
    )
}

/// Web path of the generated content page for an item.
pub fn page_url(config: &SiteConfig, kind: ContentType, slug: &str) -> String {
    format!(
        "{}/{}/{}/{slug}.html",
        config.web_root,
        config.dirs.content,
        kind.as_str()
    )
}

/// `updated` resolution: metadata chain, then folder mtime. Always non-empty.
fn resolve_updated(metadata: &ItemMeta, folder: &Path) -> String {
    metadata
        .first(&["updated", "date", "lastEdited", "last_edit"])
        .or_else(|| folder_mtime(folder))
        .unwrap_or_else(|| EPOCH.to_string())
}

/// Folder modification time as a zero-padded, lexically sortable timestamp.
fn folder_mtime(folder: &Path) -> Option<String> {
    let modified = fs::metadata(folder).ok()?.modified().ok()?;
    Some(
        DateTime::<Utc>::from(modified)
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string(),
    )
}
