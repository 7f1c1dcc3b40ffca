//! Promotion and meal models

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned promotion identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromotionId(String);

impl PromotionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PromotionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A named bundle of meals offered as one marketing unit.
///
/// A promotion without an `id` is a draft that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    /// Promotion ID (absent until the backend persists it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PromotionId>,

    /// Display name
    pub name: String,

    /// Ordered meal line items
    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl Promotion {
    /// Whether the promotion has been persisted (and can be deleted or previewed)
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Sum of all meal prices
    pub fn total_price(&self) -> f64 {
        self.meals.iter().map(|m| m.price).sum()
    }
}

/// A line item within a promotion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional free-text extras ("with fries", "sauce of choice", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additionals: Option<String>,

    /// Price; the backend may send decimals as strings
    #[serde(deserialize_with = "price_from_number_or_string")]
    pub price: f64,
}

/// Response of `GET /promotion/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionWithImage {
    pub promotion: Promotion,

    /// Opaque image reference (data URL or plain URL), used for preview only
    pub image: String,
}

/// Meal fields accepted by the backend; nothing else is ever sent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPayload {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additionals: Option<String>,

    pub price: f64,
}

impl From<MealPayload> for Meal {
    fn from(payload: MealPayload) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            additionals: payload.additionals,
            price: payload.price,
        }
    }
}

/// Body of `POST /promotion`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPromotion {
    pub name: String,
    pub meals: Vec<MealPayload>,
}

/// Body of `PUT /promotion/{id}`; every field is optional (partial update)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals: Option<Vec<MealPayload>>,

    /// Ask the backend to also publish the generated image to Facebook
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_to_facebook: Option<bool>,
}

fn price_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
