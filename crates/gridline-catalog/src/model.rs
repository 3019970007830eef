//! Product catalog schema (mapped records).
//!
//! Field names match the target catalog JSON exactly; the mixed casing
//! (camelCase top level, snake_case inside variants) is the consumer's,
//! not ours.

use serde::{Deserialize, Serialize};

/// One mapped product record, derived 1:1 from a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub game: String,
    pub category: String,
    #[serde(rename = "optimizationLevel")]
    pub optimization_level: String,
    pub description: String,
    #[serde(rename = "longDescription")]
    pub long_description: String,
    pub status: String,
    #[serde(rename = "gfnData")]
    pub gfn_data: GfnData,
    pub variants: Vec<ProductVariant>,
    pub reviews: Reviews,
    pub discount: Discount,
}

/// Streaming details carried over from the source catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GfnData {
    #[serde(rename = "playType")]
    pub play_type: String,
    #[serde(rename = "minimumTier")]
    pub minimum_tier: String,
    pub stores: Vec<String>,
    #[serde(rename = "iconUrl")]
    pub icon_url: String,
    #[serde(rename = "logoUrl")]
    pub logo_url: String,
}

/// One offering tier of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: String,
    pub name: String,
    pub tier: String,
    pub gpu: String,
    pub ram: String,
    pub cpu: String,
    pub usage: String,
    pub description: String,
    pub use_cases: Vec<String>,
    pub features: Vec<String>,
    pub target_audience: String,
    pub highlight: String,
    pub protection: String,
    pub updates: String,
    pub pricing: Pricing,
    pub sla: String,
    pub support_level: String,
    pub badges: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub hourly: f64,
    pub monthly: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reviews {
    pub average: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub active: bool,
    pub percentage: u32,
    pub code: String,
}
