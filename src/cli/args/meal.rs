//! Meal arguments for `promotion create` and `promotion edit`

use crate::error::FormError;
use crate::flow::MealDraft;

/// Parse `NAME=PRICE[;DESCRIPTION[;ADDITIONALS]]` into a meal row.
///
/// The price is kept as typed; it is validated with the rest of the form
/// on submit.
pub fn parse_meal_spec(spec: &str) -> Result<MealDraft, FormError> {
    let invalid = || FormError::InvalidMealSpec(spec.to_string());

    let (name, rest) = spec.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    let mut parts = rest.splitn(3, ';');
    let price = parts.next().unwrap_or_default().trim();
    if price.is_empty() {
        return Err(invalid());
    }

    Ok(MealDraft {
        name: name.to_string(),
        price: price.to_string(),
        description: parts.next().unwrap_or_default().trim().to_string(),
        additionals: parts.next().unwrap_or_default().trim().to_string(),
    })
}
