use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use site_index::config::SiteConfig;
use site_index::{build, calendar, config, output, page, products, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "site-index")]
#[command(about = "Content indexer for a static website")]
#[command(long_about = "\
Content indexer for a static website

Your filesystem is the data source. Each folder under a content root is one
item; the folder name is its slug, meta.json overrides derived defaults, and
sibling files fill the cover/excerpt/content roles by name and extension.

Content structure:

  assets/
  ├── config.toml                  # Tool config (optional)
  ├── blog/
  │   └── sommerfest/              # Folder name = slug
  │       ├── meta.json            # Optional overrides (title, updated, …)
  │       ├── article.md           # Full content (.html wins over .md)
  │       ├── excerpt.txt          # Teaser shown on list pages
  │       └── hof-cover.png        # Cover ('cover' in the name wins)
  ├── projects/
  │   └── streuobstwiese/
  │       ├── synopsis.txt         # Project teaser
  │       └── wiese-cover.jpeg
  ├── calendar/
  │   └── apfelpressen.json        # One event per file; needs a date
  └── shop/
      └── apfelsaft/
          ├── meta.json            # name, variants, unit, …
          └── saft.jpg

Generated output (all under the assets dir):

  blog-index.json, projects-index.json, activities-index.json (merged,
  newest first), calendar-index.json (ascending), products.json, and
  content/<type>/<slug>.html pages for items with full content.

Run 'site-index gen-config' for a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Assets directory holding the content folders and generated output
    #[arg(long, default_value = "assets", global = true)]
    assets: PathBuf,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: content indexes, pages, calendar, products
    Build,
    /// Generate the content indexes and content pages only
    Content,
    /// Generate the calendar index only
    Calendar,
    /// Generate the products file only
    Products,
    /// Validate the content folders without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.assets)?;
            run_content(&cli.assets, &config)?;
            run_calendar(&cli.assets, &config)?;
            run_products(&cli.assets, &config)?;
            println!("==> Build complete: {}", cli.assets.display());
        }
        Command::Content => {
            let config = config::load_config(&cli.assets)?;
            run_content(&cli.assets, &config)?;
        }
        Command::Calendar => {
            let config = config::load_config(&cli.assets)?;
            run_calendar(&cli.assets, &config)?;
        }
        Command::Products => {
            let config = config::load_config(&cli.assets)?;
            run_products(&cli.assets, &config)?;
        }
        Command::Check => {
            let config = config::load_config(&cli.assets)?;
            check(&cli.assets, &config)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn run_content(assets: &Path, config: &SiteConfig) -> Result<(), build::BuildError> {
    println!("==> Indexing content in {}", assets.display());
    let result = build::run_content(assets, config)?;
    output::print_content_output(&result.scan, config);
    println!("Wrote {} content pages", result.pages_written);
    println!(
        "Wrote {} ({} items)",
        build::BLOG_INDEX,
        result.blog_index.items.len()
    );
    println!(
        "Wrote {} ({} items)",
        build::PROJECTS_INDEX,
        result.projects_index.items.len()
    );
    println!(
        "Wrote {} ({} items)",
        build::ACTIVITIES_INDEX,
        result.activities_index.items.len()
    );
    Ok(())
}

fn run_calendar(assets: &Path, config: &SiteConfig) -> Result<(), build::BuildError> {
    let index = build::run_calendar(assets, config)?;
    output::print_calendar_output(&index);
    println!(
        "Wrote {} ({} items)",
        build::CALENDAR_INDEX,
        index.items.len()
    );
    Ok(())
}

fn run_products(assets: &Path, config: &SiteConfig) -> Result<(), build::BuildError> {
    let file = build::run_products(assets, config)?;
    output::print_products_output(&file);
    println!(
        "Wrote {} ({} items)",
        build::PRODUCTS_FILE,
        file.products.len()
    );
    Ok(())
}

/// Resolve everything and render all content pages in memory, writing
/// nothing. Fails on the same conditions a real build would fail on.
fn check(assets: &Path, config: &SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("==> Checking {}", assets.display());
    let scan = scan::scan(assets, config)?;
    for resolved in scan.iter() {
        if let Some(content) = &resolved.content {
            page::build_body(content)?;
        }
    }
    let calendar_index = calendar::build(&assets.join(&config.dirs.calendar))?;
    let products_file = products::build(assets, config)?;

    output::print_content_output(&scan, config);
    println!();
    output::print_calendar_output(&calendar_index);
    println!();
    output::print_products_output(&products_file);
    println!("==> Content is valid");
    Ok(())
}

/// Warnings by default; `--verbose` turns on debug logging.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init().ok();
}
