//! Tool configuration module.
//!
//! Handles loading and validating the optional `config.toml` at the assets
//! root. Configuration is sparse: every field has a stock default, user
//! files only need the keys they want to override, and unknown keys are
//! rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! web_root = "/assets"        # Prefix for all generated web paths
//!
//! [dirs]
//! blog = "blog"               # Content roots, relative to the assets dir
//! projects = "projects"
//! calendar = "calendar"
//! shop = "shop"
//! content = "content"         # Where generated pages land
//!
//! [page]
//! lang = "de"                 # <html lang> of generated pages
//! stylesheet = "/assets/styles.css"
//!
//! [order]
//! pickup_hint = "..."         # Copied verbatim into products.json
//! [order.default_center]
//! lat = 49.989
//! lng = 9.578
//! [[order.locations]]
//! label = "Lohr Zentrum"
//! lat = 49.989
//! lng = 9.578
//! ```

use crate::types::ContentType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Web path prefix prepended to every generated URL.
    #[serde(default = "default_web_root")]
    pub web_root: String,
    /// Directory names of the content roots under the assets dir.
    pub dirs: DirsConfig,
    /// Page shell settings for generated content pages.
    pub page: PageConfig,
    /// Pickup/order metadata emitted verbatim into `products.json`.
    pub order: OrderConfig,
}

fn default_web_root() -> String {
    "/assets".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            web_root: default_web_root(),
            dirs: DirsConfig::default(),
            page: PageConfig::default(),
            order: OrderConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.web_root.starts_with('/') || self.web_root.ends_with('/') {
            return Err(ConfigError::Validation(
                "web_root must start with '/' and carry no trailing slash".into(),
            ));
        }
        for (key, name) in [
            ("dirs.blog", &self.dirs.blog),
            ("dirs.projects", &self.dirs.projects),
            ("dirs.calendar", &self.dirs.calendar),
            ("dirs.shop", &self.dirs.shop),
            ("dirs.content", &self.dirs.content),
        ] {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a plain directory name"
                )));
            }
        }
        if self.page.lang.is_empty() {
            return Err(ConfigError::Validation("page.lang must not be empty".into()));
        }
        Ok(())
    }
}

/// Directory names of the content roots under the assets dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirsConfig {
    pub blog: String,
    pub projects: String,
    pub calendar: String,
    pub shop: String,
    /// Output directory for generated content pages.
    pub content: String,
}

impl Default for DirsConfig {
    fn default() -> Self {
        Self {
            blog: "blog".to_string(),
            projects: "projects".to_string(),
            calendar: "calendar".to_string(),
            shop: "shop".to_string(),
            content: "content".to_string(),
        }
    }
}

impl DirsConfig {
    /// Source directory name for a content type.
    pub fn for_type(&self, kind: ContentType) -> &str {
        match kind {
            ContentType::Blog => &self.blog,
            ContentType::Project => &self.projects,
        }
    }
}

/// Page shell settings for generated content pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// `<html lang>` attribute.
    pub lang: String,
    /// Stylesheet href linked from every generated page.
    pub stylesheet: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lang: "de".to_string(),
            stylesheet: "/assets/styles.css".to_string(),
        }
    }
}

/// Pickup/order metadata block of `products.json`.
///
/// Deserialized from snake_case TOML, serialized with the camelCase keys
/// the shop frontend expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct OrderConfig {
    pub pickup_hint: String,
    pub default_center: GeoPoint,
    pub locations: Vec<PickupLocation>,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            pickup_hint: "Bestellung = Reservierung zur Abholung. Du wählst Ort + Zeitpunkt, \
                          ich bestätige per Mail."
                .to_string(),
            default_center: GeoPoint {
                lat: 49.989,
                lng: 9.578,
            },
            locations: vec![
                PickupLocation {
                    label: "Lohr Zentrum".to_string(),
                    lat: 49.989,
                    lng: 9.578,
                },
                PickupLocation {
                    label: "Niederwürschnitz – Alte Ziegelei (Nach den Steegen 2)".to_string(),
                    lat: 50.735_716_1,
                    lng: 12.768_662_7,
                },
                PickupLocation {
                    label: "Chemnitz – Stadtpark".to_string(),
                    lat: 50.808_727_8,
                    lng: 12.9012,
                },
            ],
        }
    }
}

/// A geographic point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A named pickup location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickupLocation {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

/// Load config from `config.toml` in the given directory.
///
/// Returns the stock defaults when no file exists; rejects unknown keys and
/// validates the result otherwise.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# site-index Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Web path prefix prepended to every generated URL (cover images, content
# pages, meta.json links). Must start with '/' and carry no trailing slash.
web_root = "/assets"

# ---------------------------------------------------------------------------
# Content roots, as directory names under the assets dir
# ---------------------------------------------------------------------------
[dirs]
blog = "blog"
projects = "projects"
calendar = "calendar"
shop = "shop"

# Where generated content pages land (content/<type>/<slug>.html).
content = "content"

# ---------------------------------------------------------------------------
# Page shell for generated content pages
# ---------------------------------------------------------------------------
[page]
# <html lang> attribute of generated pages.
lang = "de"

# Stylesheet linked from every generated page.
stylesheet = "/assets/styles.css"

# ---------------------------------------------------------------------------
# Pickup/order metadata, copied verbatim into products.json
# ---------------------------------------------------------------------------
[order]
pickup_hint = "Bestellung = Reservierung zur Abholung. Du wählst Ort + Zeitpunkt, ich bestätige per Mail."

[order.default_center]
lat = 49.989
lng = 9.578

[[order.locations]]
label = "Lohr Zentrum"
lat = 49.989
lng = 9.578

[[order.locations]]
label = "Niederwürschnitz – Alte Ziegelei (Nach den Steegen 2)"
lat = 50.7357161
lng = 12.7686627

[[order.locations]]
label = "Chemnitz – Stadtpark"
lat = 50.8087278
lng = 12.9012
"##
}
