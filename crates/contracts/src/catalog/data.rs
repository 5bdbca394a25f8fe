//! The fixed product catalog.
//!
//! Four records, built once and never mutated. Everything downstream
//! (cart, selection, search) references these entries by id.

use once_cell::sync::Lazy;

use super::product::{Category, Product, ProductId, ProductSpecs};

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Royal W180 King Cashews".to_string(),
            grade: "W180".to_string(),
            price_b2c: 28.50,
            price_b2b: 18.00,
            image: "https://images.unsplash.com/photo-1596484552882-628d3224b75c?q=80&w=800&auto=format&fit=crop".to_string(),
            description: "The \"King of Cashews\". Extra large, white, whole kernels. Handpicked for premium gifting and luxury retail.".to_string(),
            category: Category::Whole,
            inventory: 4500,
            certifications: vec!["FSSAI".to_string(), "Organic".to_string()],
            specs: ProductSpecs {
                moisture: "<5%".to_string(),
                count: 180,
                origin: "Goa, India".to_string(),
            },
        },
        Product {
            id: ProductId::new("2"),
            name: "Premium W240 Whole".to_string(),
            grade: "W240".to_string(),
            price_b2c: 22.00,
            price_b2b: 14.50,
            image: "https://images.unsplash.com/photo-1509909756405-be0199881695?q=80&w=800&auto=format&fit=crop".to_string(),
            description: "Standard large size, perfect for everyday snacking and confectionery use. Consistent size and crunch.".to_string(),
            category: Category::Whole,
            inventory: 12000,
            certifications: vec!["ISO 22000".to_string(), "Fair Trade".to_string()],
            specs: ProductSpecs {
                moisture: "<5%".to_string(),
                count: 240,
                origin: "Kerala, India".to_string(),
            },
        },
        Product {
            id: ProductId::new("3"),
            name: "Roasted & Salted Gold".to_string(),
            grade: "W320".to_string(),
            price_b2c: 24.00,
            price_b2b: 16.00,
            image: "https://images.unsplash.com/photo-1596484552993-9426f8c7e30d?q=80&w=800&auto=format&fit=crop".to_string(),
            description: "Slow-roasted to perfection with a hint of Himalayan pink salt. The ultimate party snack.".to_string(),
            category: Category::Flavored,
            inventory: 3000,
            certifications: vec!["HACCP".to_string()],
            specs: ProductSpecs {
                moisture: "<3%".to_string(),
                count: 320,
                origin: "Maharashtra, India".to_string(),
            },
        },
        Product {
            id: ProductId::new("4"),
            name: "Broken LWP Pieces".to_string(),
            grade: "LWP".to_string(),
            price_b2c: 12.00,
            price_b2b: 8.50,
            image: "https://images.unsplash.com/photo-1550583724-b2692b85b150?q=80&w=800&auto=format&fit=crop".to_string(),
            description: "Large White Pieces. Ideal for bakeries, restaurants, and paste making. High economical value.".to_string(),
            category: Category::Pieces,
            inventory: 25000,
            certifications: vec!["FSSAI".to_string()],
            specs: ProductSpecs {
                moisture: "<5%".to_string(),
                count: 0,
                origin: "Mixed Origins".to_string(),
            },
        },
    ]
});

/// The full catalog, in display order.
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

/// Look up a catalog entry by id.
pub fn find(id: &ProductId) -> Option<&'static Product> {
    CATALOG.iter().find(|p| &p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_fixed_entries() {
        let products = catalog();
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].grade, "W180");
        assert_eq!(products[3].grade, "LWP");
    }

    #[test]
    fn find_resolves_by_identity() {
        let first = &catalog()[0];
        let found = find(&first.id).expect("id 1 present");
        assert!(std::ptr::eq(first, found));
        assert!(find(&ProductId::new("nope")).is_none());
    }

    #[test]
    fn zero_count_renders_sentinel() {
        let pieces = find(&ProductId::new("4")).expect("id 4 present");
        assert_eq!(pieces.specs.count_label(), "N/A");
        let whole = find(&ProductId::new("1")).expect("id 1 present");
        assert_eq!(whole.specs.count_label(), "180");
    }
}
