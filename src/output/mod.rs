//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::client::models::Promotion;
use crate::error::Result;
use crate::models::{MealDisplay, PromotionDisplay};

pub mod image;
pub mod json;
pub mod pretty;
pub mod table;

/// Render a promotion list in the requested format
pub fn render_promotions(
    promotions: &[Promotion],
    format: OutputFormat,
    currency: &str,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Pretty => pretty::format_cards(promotions, currency),
        OutputFormat::Table => {
            let rows: Vec<PromotionDisplay> = promotions
                .iter()
                .map(|p| PromotionDisplay::new(p, currency))
                .collect();
            table::format_table(&rows)
        }
        OutputFormat::Json => json::format_json(promotions)?,
    })
}

/// Render a single promotion with its meals
pub fn render_promotion(
    promotion: &Promotion,
    format: OutputFormat,
    currency: &str,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Pretty => pretty::format_card(promotion, currency),
        OutputFormat::Table => {
            let header = PromotionDisplay::new(promotion, currency);
            format!(
                "{} ({})\n{}",
                header.name,
                header.id,
                table::format_table(&MealDisplay::rows(promotion, currency))
            )
        }
        OutputFormat::Json => json::format_json(promotion)?,
    })
}
