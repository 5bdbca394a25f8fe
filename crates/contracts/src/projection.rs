//! Mode-dependent projection of a product for the detail view, plus the
//! machine-readable description emitted while a detail view is active.

use serde::Serialize;

use crate::catalog::Product;
use crate::session::Mode;

pub const BRAND_NAME: &str = "Yuvaraj Nuts";
pub const PRICE_CURRENCY: &str = "USD";
pub const AVAILABILITY_IN_STOCK: &str = "https://schema.org/InStock";

/// Price shown for a product under the given mode. Read live from the
/// catalog record; nothing is ever snapshotted.
pub fn display_price(product: &Product, mode: Mode) -> f64 {
    match mode {
        Mode::Retail => product.price_b2c,
        Mode::Wholesale => product.price_b2b,
    }
}

/// Unit of sale caption next to the price.
pub fn unit_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Retail => "per 500g pack",
        Mode::Wholesale => "per kg, minimum 50kg",
    }
}

/// Call-to-action caption. Label only: both modes invoke the same cart
/// operation.
pub fn cta_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Retail => "Add to Cart",
        Mode::Wholesale => "Add to Quote Request",
    }
}

/// schema.org Product record for search-engine indexing.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    schema_type: &'static str,
    name: String,
    image: Vec<String>,
    description: String,
    sku: String,
    brand: BrandSchema,
    offers: OfferSchema,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandSchema {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfferSchema {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    #[serde(rename = "priceCurrency")]
    price_currency: &'static str,
    price: f64,
    availability: &'static str,
}

impl ProductSchema {
    pub fn for_product(product: &Product, mode: Mode) -> Self {
        Self {
            context: "https://schema.org/",
            schema_type: "Product",
            name: product.name.clone(),
            image: vec![product.image.clone()],
            description: product.description.clone(),
            sku: product.grade.clone(),
            brand: BrandSchema {
                schema_type: "Brand",
                name: BRAND_NAME,
            },
            offers: OfferSchema {
                schema_type: "Offer",
                price_currency: PRICE_CURRENCY,
                price: display_price(product, mode),
                availability: AVAILABILITY_IN_STOCK,
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn price_follows_mode() {
        let product = &catalog::catalog()[0];
        assert_eq!(display_price(product, Mode::Retail), product.price_b2c);
        assert_eq!(display_price(product, Mode::Wholesale), product.price_b2b);
    }

    #[test]
    fn labels_follow_mode() {
        assert_eq!(unit_label(Mode::Retail), "per 500g pack");
        assert_eq!(unit_label(Mode::Wholesale), "per kg, minimum 50kg");
        assert_eq!(cta_label(Mode::Retail), "Add to Cart");
        assert_eq!(cta_label(Mode::Wholesale), "Add to Quote Request");
    }

    #[test]
    fn schema_uses_grade_as_sku_and_mode_price() {
        let product = &catalog::catalog()[0];
        let schema = ProductSchema::for_product(product, Mode::Wholesale);
        let json = schema.to_json();
        assert!(json.contains("\"@type\":\"Product\""));
        assert!(json.contains(&format!("\"sku\":\"{}\"", product.grade)));
        assert!(json.contains("\"priceCurrency\":\"USD\""));
        assert!(json.contains("\"price\":18.0"));
        assert!(json.contains("\"availability\":\"https://schema.org/InStock\""));
    }
}
