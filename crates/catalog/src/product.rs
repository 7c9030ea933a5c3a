use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, Entity, PriceRangeId, ProductId, SubcategoryId};

/// Category reference embedded in a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    #[serde(default)]
    pub name: String,
}

/// Subcategory reference embedded in a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(rename = "_id")]
    pub id: SubcategoryId,
    #[serde(default)]
    pub name: String,
}

/// Product read model (matches the backend response shape).
///
/// Owned by the backend; the storefront never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discounted_price: f64,
    /// Discount as a percentage (e.g. `25.0` for 25 % off).
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub subcategory: Option<Subcategory>,
    #[serde(rename = "image_id", default)]
    pub image_ids: Vec<String>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
}

impl Product {
    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category.as_ref().map(|c| &c.id)
    }

    pub fn subcategory_id(&self) -> Option<&SubcategoryId> {
        self.subcategory.as_ref().map(|s| &s.id)
    }

    pub fn is_in_category(&self, category_id: &CategoryId) -> bool {
        self.category_id() == Some(category_id)
    }

    /// First image id with embedded double quotes stripped.
    ///
    /// Returns `None` when the product has no images or the first id is
    /// empty once cleaned.
    pub fn primary_image_id(&self) -> Option<String> {
        let cleaned = self.image_ids.first()?.replace('"', "");
        if cleaned.is_empty() { None } else { Some(cleaned) }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Backend-defined price bucket used as a coarse filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    #[serde(rename = "_id")]
    pub id: PriceRangeId,
    pub min_price: f64,
    pub max_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PriceRange {
    /// Label shown in the sort sidebar.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) if !label.trim().is_empty() => label.clone(),
            _ => format!("₹{} - ₹{}", self.min_price, self.max_price),
        }
    }

    /// Inclusive bounds check.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min_price && price <= self.max_price
    }
}

impl Entity for PriceRange {
    type Id = PriceRangeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// `{ "products": [...] }` envelope returned by the product endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Price-range collection as returned by `/pricerange/getpriceranges`.
///
/// Deployments answer either with a bare array or with a wrapping object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceRangesResponse {
    List(Vec<PriceRange>),
    Wrapped {
        #[serde(rename = "priceRanges")]
        price_ranges: Vec<PriceRange>,
    },
}

impl PriceRangesResponse {
    pub fn into_ranges(self) -> Vec<PriceRange> {
        match self {
            PriceRangesResponse::List(ranges) => ranges,
            PriceRangesResponse::Wrapped { price_ranges } => price_ranges,
        }
    }
}
