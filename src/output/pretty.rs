//! Card-style output for humans

use colored::Colorize;

use crate::client::models::Promotion;
use crate::models::format_price;

/// Render one promotion as a card: name, then one line per meal
pub fn format_card(promotion: &Promotion, currency: &str) -> String {
    let mut out = String::new();

    out.push_str(&promotion.name.bold().to_string());
    if let Some(id) = &promotion.id {
        out.push_str(&format!("  {}", format!("({})", id).dimmed()));
    }
    out.push('\n');

    if promotion.meals.is_empty() {
        out.push_str(&format!("  {}\n", "No meals".dimmed()));
    }
    for meal in &promotion.meals {
        out.push_str(&format!(
            "  {} - {}\n",
            meal.name,
            format_price(meal.price, currency)
        ));
        if let Some(description) = meal.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!("    {}\n", description.dimmed()));
        }
        if let Some(additionals) = meal.additionals.as_deref().filter(|a| !a.is_empty()) {
            out.push_str(&format!("    + {}\n", additionals.dimmed()));
        }
    }

    out
}

/// Render every promotion as a card, separated by blank lines
pub fn format_cards(promotions: &[Promotion], currency: &str) -> String {
    if promotions.is_empty() {
        return "No promotions found.".to_string();
    }

    promotions
        .iter()
        .map(|p| format_card(p, currency))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::{Meal, PromotionId};

    fn promo() -> Promotion {
        Promotion {
            id: Some(PromotionId::new("7")),
            name: "Dinner".to_string(),
            meals: vec![Meal {
                name: "Pierogi".to_string(),
                description: Some("Ruskie".to_string()),
                additionals: Some("sour cream".to_string()),
                price: 24.0,
            }],
        }
    }

    #[test]
    fn test_card_lists_meals_with_price() {
        colored::control::set_override(false);
        let card = format_card(&promo(), "zł");

        assert!(card.starts_with("Dinner"));
        assert!(card.contains("(7)"));
        assert!(card.contains("Pierogi - 24.00 zł"));
        assert!(card.contains("Ruskie"));
        assert!(card.contains("+ sour cream"));
    }

    #[test]
    fn test_empty_cards() {
        assert_eq!(format_cards(&[], "zł"), "No promotions found.");
    }
}
