//! Full-pipeline orchestration.
//!
//! Each `run_*` function computes its complete output in memory before the
//! first write, so a failing build never leaves behind a partial index.
//! The run either completes wholesale for that stage or aborts with the
//! files from the previous run still intact.

use crate::calendar::{self, CalendarIndex};
use crate::config::{ConfigError, SiteConfig};
use crate::index::{self, ContentIndex, IndexError};
use crate::page::{self, PageError};
use crate::products::{self, ProductsFile};
use crate::scan::{self, ContentScan, ScanError};
use maud::Markup;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output filenames under the assets root.
pub const BLOG_INDEX: &str = "blog-index.json";
pub const PROJECTS_INDEX: &str = "projects-index.json";
pub const ACTIVITIES_INDEX: &str = "activities-index.json";
pub const CALENDAR_INDEX: &str = "calendar-index.json";
pub const PRODUCTS_FILE: &str = "products.json";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("page error: {0}")]
    Page(#[from] PageError),
    #[error("index error: {0}")]
    Index(#[from] IndexError),
}

/// Result of the content stage, for reporting.
pub struct ContentBuild {
    pub scan: ContentScan,
    pub blog_index: ContentIndex,
    pub projects_index: ContentIndex,
    pub activities_index: ContentIndex,
    pub pages_written: usize,
}

/// Content stage: scan both content roots, render all content pages, build
/// the three content indexes, then persist pages and indexes.
pub fn run_content(assets_root: &Path, config: &SiteConfig) -> Result<ContentBuild, BuildError> {
    let scan = scan::scan(assets_root, config)?;

    // Render every page up front; a broken content file aborts before any
    // write happens.
    let mut pages: Vec<(PathBuf, Markup)> = Vec::new();
    for resolved in scan.iter() {
        if let Some(content) = &resolved.content {
            let body = page::build_body(content)?;
            let markup =
                page::render_page(&config.page, &resolved.item.title, &resolved.item.cover, &body);
            pages.push((
                page::page_path(
                    assets_root,
                    &config.dirs.content,
                    resolved.item.kind,
                    &resolved.item.slug,
                ),
                markup,
            ));
        }
    }

    let blog_index = index::build(scan.blog.iter().map(|r| r.item.clone()).collect());
    let projects_index = index::build(scan.projects.iter().map(|r| r.item.clone()).collect());
    let activities_index = index::merge(&[&blog_index, &projects_index]);

    let pages_written = pages.len();
    for (path, markup) in pages {
        page::write_page(&path, markup)?;
    }

    index::write_json(&assets_root.join(BLOG_INDEX), &blog_index)?;
    index::write_json(&assets_root.join(PROJECTS_INDEX), &projects_index)?;
    index::write_json(&assets_root.join(ACTIVITIES_INDEX), &activities_index)?;

    Ok(ContentBuild {
        scan,
        blog_index,
        projects_index,
        activities_index,
        pages_written,
    })
}

/// Calendar stage: build and persist the calendar index.
pub fn run_calendar(assets_root: &Path, config: &SiteConfig) -> Result<CalendarIndex, BuildError> {
    let index = calendar::build(&assets_root.join(&config.dirs.calendar))?;
    index::write_json(&assets_root.join(CALENDAR_INDEX), &index)?;
    Ok(index)
}

/// Products stage: build and persist the products file.
pub fn run_products(assets_root: &Path, config: &SiteConfig) -> Result<ProductsFile, BuildError> {
    let file = products::build(assets_root, config)?;
    index::write_json(&assets_root.join(PRODUCTS_FILE), &file)?;
    Ok(file)
}
