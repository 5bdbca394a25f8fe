use serde::{Deserialize, Serialize};

/// Unique identifier of a catalog entry.
///
/// Cart and selection state hold these ids; the product record itself is
/// always read back from the catalog, never copied into session state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Product category, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Whole,
    Pieces,
    Flavored,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Whole => "Whole",
            Category::Pieces => "Pieces",
            Category::Flavored => "Flavored",
        }
    }
}

/// Technical record shown on the specs tab of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpecs {
    pub moisture: String,
    /// Kernel count per pound. Zero means the grade has no meaningful count
    /// (broken pieces) and renders as "N/A".
    pub count: u32,
    pub origin: String,
}

impl ProductSpecs {
    pub fn count_label(&self) -> String {
        if self.count == 0 {
            "N/A".to_string()
        } else {
            self.count.to_string()
        }
    }
}

/// A catalog product. Immutable for the lifetime of the session.
///
/// Both prices are carried on the record; which one is displayed is decided
/// at render time by the current mode (see `projection::display_price`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Industry size/quality code (e.g. W180). Doubles as a search key.
    pub grade: String,
    pub price_b2c: f64,
    pub price_b2b: f64,
    /// URI of the display asset. The core never fetches or validates it.
    pub image: String,
    pub description: String,
    pub category: Category,
    /// Kilograms in stock.
    pub inventory: u32,
    pub certifications: Vec<String>,
    pub specs: ProductSpecs,
}
