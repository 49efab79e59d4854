//! Products file building.
//!
//! Scans the shop content root into `products.json`: one product per
//! folder, metadata read leniently with shop-specific defaults, plus the
//! configured pickup/order metadata copied through verbatim.

use crate::config::{OrderConfig, SiteConfig};
use crate::meta::ItemMeta;
use crate::scan::{self, ScanError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page association stamped onto every product.
const PRODUCT_PAGE: &str = "webshop";

const DEFAULT_STATUS: &str = "verfügbar";
const DEFAULT_UNIT: &str = "Stück";
const DEFAULT_VARIANT: &str = "Standard";

/// The complete `products.json` payload.
#[derive(Debug, Serialize)]
pub struct ProductsFile {
    pub products: Vec<ProductItem>,
    pub order: OrderConfig,
}

/// A shop item as emitted into `products.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    pub id: String,
    pub page: String,
    pub name: String,
    pub description: String,
    /// Web path of the product image, or empty without one.
    pub image: String,
    pub status: String,
    /// Ordered variant list; never empty.
    pub variants: Vec<String>,
    pub unit: String,
    pub pickup_required: bool,
    pub decorate_juice: bool,
}

/// Build the products payload from the shop content root.
pub fn build(assets_root: &Path, config: &SiteConfig) -> Result<ProductsFile, ScanError> {
    let shop_root = assets_root.join(&config.dirs.shop);

    let mut products = Vec::new();
    if shop_root.is_dir() {
        for slug in scan::list_slugs(&shop_root)? {
            products.push(resolve_product(&shop_root, &slug, config)?);
        }
    } else {
        log::warn!(
            "shop root {} does not exist, emitting an empty product list",
            shop_root.display()
        );
    }

    Ok(ProductsFile {
        products,
        order: config.order.clone(),
    })
}

fn resolve_product(
    shop_root: &Path,
    slug: &str,
    config: &SiteConfig,
) -> Result<ProductItem, ScanError> {
    let folder = shop_root.join(slug);
    let files = scan::item_files(&folder)?;
    let metadata = ItemMeta::load(&folder);

    let image = scan::pick_cover(&files)
        .map(|name| format!("{}/{}/{slug}/{name}", config.web_root, config.dirs.shop))
        .unwrap_or_default();

    let variants = metadata
        .string_list("variants")
        .filter(|variants| !variants.is_empty())
        .unwrap_or_else(|| vec![DEFAULT_VARIANT.to_string()]);

    Ok(ProductItem {
        id: slug.to_string(),
        page: PRODUCT_PAGE.to_string(),
        name: metadata
            .first(&["name", "title"])
            .unwrap_or_else(|| slug.to_string()),
        description: metadata.first(&["description", "desc"]).unwrap_or_default(),
        image,
        status: metadata
            .first(&["status"])
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        variants,
        unit: metadata
            .first(&["unit"])
            .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
        pickup_required: metadata.flag("pickupRequired"),
        decorate_juice: metadata.flag("decorateJuice"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_item;
    use tempfile::TempDir;

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn product_defaults_without_metadata() {
        let tmp = TempDir::new().unwrap();
        write_item(tmp.path(), "shop/quittengelee", &[("glas.png", "x")]);

        let file = build(tmp.path(), &config()).unwrap();
        assert_eq!(file.products.len(), 1);

        let product = &file.products[0];
        assert_eq!(product.id, "quittengelee");
        assert_eq!(product.page, "webshop");
        assert_eq!(product.name, "quittengelee");
        assert_eq!(product.description, "");
        assert_eq!(product.status, "verfügbar");
        assert_eq!(product.variants, vec!["Standard"]);
        assert_eq!(product.unit, "Stück");
        assert!(!product.pickup_required);
        assert!(!product.decorate_juice);
        assert_eq!(product.image, "/assets/shop/quittengelee/glas.png");
    }

    #[test]
    fn product_fields_from_metadata() {
        let tmp = TempDir::new().unwrap();
        write_item(
            tmp.path(),
            "shop/apfelsaft",
            &[
                (
                    "meta.json",
                    r#"{
                        "name": "Apfelsaft",
                        "description": "Direktsaft von der Streuobstwiese",
                        "status": "ausverkauft",
                        "variants": ["0,75 l", "5 l Box"],
                        "unit": "Flasche",
                        "pickupRequired": true,
                        "decorateJuice": true
                    }"#,
                ),
                ("saft-cover.jpg", "x"),
            ],
        );

        let file = build(tmp.path(), &config()).unwrap();
        let product = &file.products[0];
        assert_eq!(product.name, "Apfelsaft");
        assert_eq!(product.description, "Direktsaft von der Streuobstwiese");
        assert_eq!(product.status, "ausverkauft");
        assert_eq!(product.variants, vec!["0,75 l", "5 l Box"]);
        assert_eq!(product.unit, "Flasche");
        assert!(product.pickup_required);
        assert!(product.decorate_juice);
        assert_eq!(product.image, "/assets/shop/apfelsaft/saft-cover.jpg");
    }

    #[test]
    fn empty_variant_list_replaced_by_placeholder() {
        let tmp = TempDir::new().unwrap();
        write_item(
            tmp.path(),
            "shop/saft",
            &[("meta.json", r#"{"variants": []}"#)],
        );

        let file = build(tmp.path(), &config()).unwrap();
        assert_eq!(file.products[0].variants, vec!["Standard"]);
    }

    #[test]
    fn missing_shop_root_yields_empty_products() {
        let tmp = TempDir::new().unwrap();
        let file = build(tmp.path(), &config()).unwrap();
        assert!(file.products.is_empty());
        // Order metadata still carried
        assert_eq!(file.order.locations.len(), 3);
    }

    #[test]
    fn payload_serializes_with_frontend_field_names() {
        let tmp = TempDir::new().unwrap();
        write_item(tmp.path(), "shop/saft", &[]);

        let file = build(tmp.path(), &config()).unwrap();
        let json = serde_json::to_value(&file).unwrap();

        assert_eq!(json["products"][0]["pickupRequired"], false);
        assert_eq!(json["products"][0]["decorateJuice"], false);
        assert!(json["order"]["pickupHint"].is_string());
        assert_eq!(json["order"]["defaultCenter"]["lat"], 49.989);
        assert_eq!(json["order"]["locations"][0]["label"], "Lohr Zentrum");
    }

    #[test]
    fn products_sorted_by_slug() {
        let tmp = TempDir::new().unwrap();
        write_item(tmp.path(), "shop/zwetschgenmus", &[]);
        write_item(tmp.path(), "shop/apfelsaft", &[]);

        let file = build(tmp.path(), &config()).unwrap();
        let ids: Vec<&str> = file.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["apfelsaft", "zwetschgenmus"]);
    }
}
