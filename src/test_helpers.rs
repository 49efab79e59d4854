//! Shared test utilities for the site-index test suite.
//!
//! Provides a programmatic fixture tree (the inputs are tiny text files,
//! so tests build them on the fly instead of checking in fixtures) and
//! lookup helpers for resolved items.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let scan = scan::scan(tmp.path(), &SiteConfig::default()).unwrap();
//! let post = find_item(&scan.blog, "sommerfest");
//! assert_eq!(post.item.title, "Sommerfest am Hof");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::scan::ResolvedItem;

/// Create an item folder under `root` and fill it with the given files.
///
/// `rel` is a path like `"blog/sommerfest"`; parents are created as needed.
pub fn write_item(root: &Path, rel: &str, files: &[(&str, &str)]) {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

/// Build a representative assets tree in a temp directory.
///
/// ```text
/// blog/sommerfest       meta.json (title, updated, alsoPublished),
///                       article.md, excerpt.txt, hof-cover.png, einladung.odt
/// blog/alte-sorten      bericht.html, notiz.txt, baum.jpg  (no metadata)
/// projects/streuobstwiese  meta.json (name, date), synopsis.txt, wiese-cover.jpeg
/// projects/saftpresse   presse.md  (no metadata)
/// calendar/             two valid events, one dateless, one unparseable
/// shop/apfelsaft        meta.json (full), saft.jpg
/// shop/quittengelee     glas-cover.png  (no metadata)
/// ```
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write_item(
        root,
        "blog/sommerfest",
        &[
            (
                "meta.json",
                r#"{
                    "title": "Sommerfest am Hof",
                    "updated": "2024-06-01",
                    "alsoPublished": ["https://example.org/sommerfest"]
                }"#,
            ),
            (
                "article.md",
                "# Sommerfest\n\nWir feiern auf dem Hof.\n\n- Musik\n- Saft & Kuchen",
            ),
            ("excerpt.txt", "Wir feiern auf dem Hof.\n"),
            ("hof-cover.png", "png bytes"),
            ("einladung.odt", "ignored"),
        ],
    );
    write_item(
        root,
        "blog/alte-sorten",
        &[
            ("bericht.html", "<p>Alte Apfelsorten im Bestand.</p>"),
            ("notiz.txt", "Bestandsaufnahme der alten Sorten."),
            ("baum.jpg", "jpg bytes"),
        ],
    );

    write_item(
        root,
        "projects/streuobstwiese",
        &[
            ("meta.json", r#"{"name": "Streuobstwiese", "date": "2023-05-05"}"#),
            ("synopsis.txt", "Eine Wiese, viele Sorten."),
            ("wiese-cover.jpeg", "jpeg bytes"),
        ],
    );
    write_item(root, "projects/saftpresse", &[("presse.md", "# Saftpresse\n\nBaubericht.")]);

    write_item(
        root,
        "calendar",
        &[
            (
                "apfelpressen.json",
                r#"{
                    "id": "apfelpressen",
                    "date": "2024-09-14",
                    "title": "Apfelpressen",
                    "projects": ["streuobstwiese"],
                    "tags": ["mitmachen"],
                    "where": "Alte Ziegelei",
                    "note": ""
                }"#,
            ),
            ("fruehjahrsputz.json", r#"{"date": "2025-03-01T10:00:00Z"}"#),
            ("ohne-datum.json", r#"{"title": "Ohne Datum"}"#),
            ("kaputt.json", "{not json"),
        ],
    );

    write_item(
        root,
        "shop/apfelsaft",
        &[
            (
                "meta.json",
                r#"{
                    "name": "Apfelsaft",
                    "description": "Direktsaft von der Streuobstwiese",
                    "variants": ["0,75 l", "5 l Box"],
                    "unit": "Flasche",
                    "pickupRequired": true,
                    "decorateJuice": true
                }"#,
            ),
            ("saft.jpg", "jpg bytes"),
        ],
    );
    write_item(root, "shop/quittengelee", &[("glas-cover.png", "png bytes")]);

    tmp
}

/// Find a resolved item by slug, panicking with a useful message.
pub fn find_item<'a>(items: &'a [ResolvedItem], slug: &str) -> &'a ResolvedItem {
    items
        .iter()
        .find(|resolved| resolved.item.slug == slug)
        .unwrap_or_else(|| {
            let known: Vec<&str> = items.iter().map(|r| r.item.slug.as_str()).collect();
            panic!("no item with slug {slug:?}, have {known:?}")
        })
}
