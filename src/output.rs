//! CLI output formatting for pipeline results.
//!
//! Output is information-centric, not file-centric: every entity leads
//! with a zero-padded positional index and its semantic identity (title,
//! date), with filesystem context as indented `Source:` lines.
//!
//! ```text
//! Blog (2 items)
//!     001 Sommerfest am Hof (2024-06-01)
//!         Source: blog/sommerfest/
//!         Content: article.md → /assets/content/blog/sommerfest.html
//!         Cover: hof-cover.png
//!
//! Calendar (2 events)
//!     001 2024-09-14 Apfelpressen
//! ```
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::calendar::CalendarIndex;
use crate::config::SiteConfig;
use crate::products::ProductsFile;
use crate::scan::{ContentScan, ResolvedItem};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Last path segment of a web path or filesystem path string.
fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// ============================================================================
// Content scan output
// ============================================================================

/// Format the content scan as an inventory, one section per content type.
pub fn format_content_output(scan: &ContentScan, config: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();
    push_type_section(&mut lines, "Blog", &scan.blog, config);
    lines.push(String::new());
    push_type_section(&mut lines, "Projects", &scan.projects, config);
    lines
}

fn push_type_section(
    lines: &mut Vec<String>,
    heading: &str,
    items: &[ResolvedItem],
    config: &SiteConfig,
) {
    lines.push(format!("{} ({} items)", heading, items.len()));
    for (i, resolved) in items.iter().enumerate() {
        let item = &resolved.item;
        lines.push(format!(
            "    {} {} ({})",
            format_index(i + 1),
            item.title,
            item.updated
        ));
        lines.push(format!(
            "        Source: {}/{}/",
            config.dirs.for_type(item.kind),
            item.slug
        ));
        if let Some(content) = &resolved.content {
            let source = content
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            lines.push(format!(
                "        Content: {source} \u{2192} {}",
                item.content_url
            ));
        }
        if !item.cover.is_empty() {
            lines.push(format!("        Cover: {}", file_name(&item.cover)));
        }
    }
}

/// Print the content inventory to stdout.
pub fn print_content_output(scan: &ContentScan, config: &SiteConfig) {
    for line in format_content_output(scan, config) {
        println!("{}", line);
    }
}

// ============================================================================
// Calendar output
// ============================================================================

/// Format the calendar index, events in their final (ascending) order.
pub fn format_calendar_output(index: &CalendarIndex) -> Vec<String> {
    let mut lines = vec![format!("Calendar ({} events)", index.items.len())];
    for (i, event) in index.items.iter().enumerate() {
        lines.push(format!(
            "    {} {} {}",
            format_index(i + 1),
            event.date,
            event.title
        ));
        if !event.location.is_empty() {
            lines.push(format!("        Where: {}", event.location));
        }
    }
    lines
}

/// Print the calendar summary to stdout.
pub fn print_calendar_output(index: &CalendarIndex) {
    for line in format_calendar_output(index) {
        println!("{}", line);
    }
}

// ============================================================================
// Products output
// ============================================================================

/// Format the products payload.
pub fn format_products_output(file: &ProductsFile) -> Vec<String> {
    let mut lines = vec![format!("Products ({} items)", file.products.len())];
    for (i, product) in file.products.iter().enumerate() {
        let variants = match product.variants.len() {
            1 => "1 variant".to_string(),
            n => format!("{n} variants"),
        };
        lines.push(format!(
            "    {} {} ({}, {})",
            format_index(i + 1),
            product.name,
            product.status,
            variants
        ));
        if !product.image.is_empty() {
            lines.push(format!("        Image: {}", file_name(&product.image)));
        }
    }
    lines
}

/// Print the products summary to stdout.
pub fn print_products_output(file: &ProductsFile) {
    for line in format_products_output(file) {
        println!("{}", line);
    }
}
