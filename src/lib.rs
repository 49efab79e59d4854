//! # site-index
//!
//! A content-folder indexer for a static website. The filesystem is the
//! data source: each folder under a content root (blog, projects, shop,
//! calendar) is one item, and the tool projects those folders into the
//! JSON index files and standalone content pages the site's client-side
//! renderer consumes.
//!
//! # Architecture: Scan → Resolve → Render → Index
//!
//! ```text
//! 1. Scan      blog/, projects/   →  slugs             (one per subfolder)
//! 2. Resolve   slug folder        →  ContentItem       (meta.json + file roles)
//! 3. Render    article.md/.html   →  content/<type>/<slug>.html
//! 4. Index     resolved items     →  *-index.json      (sorted, wholesale)
//! ```
//!
//! Every output is a disposable projection rebuilt from scratch on each
//! run. There is no incremental state: a removed source folder disappears
//! from the next index, and re-running the tool is always safe because all
//! writes are whole-file overwrites. Indexes are assembled completely in
//! memory before anything touches disk, so a failing run never leaves a
//! partial index behind.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Folder scanner and item resolver — slugs, file role classification, metadata fallbacks |
//! | [`meta`] | Lenient `meta.json` loading and first-non-empty field resolution |
//! | [`markdown`] | Restricted Markdown → escaped HTML fragments |
//! | [`page`] | Content page shell (maud) and deterministic page paths |
//! | [`index`] | Content index assembly, merge, and JSON persistence |
//! | [`calendar`] | Per-event JSON files → ascending calendar index |
//! | [`products`] | Shop folders → `products.json` with order metadata |
//! | [`build`] | Stage orchestration with wholesale-write semantics |
//! | [`config`] | Optional `config.toml` at the assets root |
//! | [`output`] | CLI summary formatting — pure `format_*` + `print_*` |
//!
//! # Design Decisions
//!
//! ## Degrade Per Item, Fail Per Run
//!
//! Authors drop folders in and expect the next build to cope. Everything
//! item-level is therefore best-effort with defaults: missing `meta.json`
//! falls back to the slug, a malformed one counts as absent, a dateless
//! calendar file is skipped with a warning. Only run-level problems (a
//! missing assets root, an unwritable output) abort the build, with a
//! non-zero exit.
//!
//! ## Restricted Markdown, Escaped by Construction
//!
//! Article sources use a tiny Markdown subset (h1–h3, `- ` lists,
//! paragraphs) rendered by [`markdown::to_html`], which escapes every
//! piece of text it emits. A general Markdown engine would pass raw HTML
//! through and quietly grow the supported syntax; the restricted renderer
//! makes "content cannot inject markup" a property of the code rather
//! than a convention.
//!
//! ## Maud Over Template Engines
//!
//! The content page shell is generated with
//! [Maud](https://maud.lambda.xyz/): malformed HTML is a compile error,
//! interpolation is auto-escaped, and there is no template directory to
//! ship or get out of sync. The pre-rendered body fragment is the single
//! deliberate `PreEscaped` injection point.
//!
//! ## String-Sortable Dates
//!
//! Items are ordered by lexical comparison of their `updated` strings.
//! Every value the tool derives itself (mtime fallbacks, `generatedAt`)
//! is zero-padded `YYYY-MM-DDTHH:MM:SSZ`, so tool-generated values always
//! sort correctly; hand-written metadata dates are trusted as-is.

pub mod build;
pub mod calendar;
pub mod config;
pub mod index;
pub mod markdown;
pub mod meta;
pub mod output;
pub mod page;
pub mod products;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
