//! Promotion display models for table output
//!
//! Display models flatten API types into CLI-friendly rows.

use tabled::Tabled;

use crate::client::models::{Meal, Promotion};

/// Format a price with two decimals and a currency label
pub fn format_price(price: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", price)
    } else {
        format!("{:.2} {}", price, currency)
    }
}

/// One promotion per table row
#[derive(Debug, Clone, Tabled)]
pub struct PromotionDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "MEALS")]
    pub meals: usize,

    #[tabled(rename = "TOTAL")]
    pub total: String,
}

impl PromotionDisplay {
    pub fn new(promotion: &Promotion, currency: &str) -> Self {
        Self {
            id: promotion
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            name: promotion.name.clone(),
            meals: promotion.meals.len(),
            total: format_price(promotion.total_price(), currency),
        }
    }
}

/// One meal per table row, used by `promotion get`
#[derive(Debug, Clone, Tabled)]
pub struct MealDisplay {
    #[tabled(rename = "#")]
    pub position: usize,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "ADDITIONALS")]
    pub additionals: String,

    #[tabled(rename = "PRICE")]
    pub price: String,
}

impl MealDisplay {
    pub fn new(position: usize, meal: &Meal, currency: &str) -> Self {
        Self {
            position,
            name: meal.name.clone(),
            description: meal.description.clone().unwrap_or_default(),
            additionals: meal.additionals.clone().unwrap_or_default(),
            price: format_price(meal.price, currency),
        }
    }

    /// Rows for every meal of a promotion, numbered from 1
    pub fn rows(promotion: &Promotion, currency: &str) -> Vec<Self> {
        promotion
            .meals
            .iter()
            .enumerate()
            .map(|(i, meal)| Self::new(i + 1, meal, currency))
            .collect()
    }
}
