//! Promotion edit form
//!
//! Holds a form-local draft of a promotion. Nothing reaches the backend
//! until [`PromotionForm::submit`], which maps the draft onto exactly one
//! create or update call.

use crate::client::PromotionApi;
use crate::client::models::{
    Meal, MealPayload, NewPromotion, Promotion, PromotionId, PromotionUpdate,
};
use crate::error::{FormError, Result};

/// Whether the form creates a new promotion or edits a persisted one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(PromotionId),
}

/// Editable field of a meal row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealField {
    Name,
    Description,
    Additionals,
    Price,
}

impl MealField {
    pub const ALL: [MealField; 4] = [
        MealField::Name,
        MealField::Description,
        MealField::Additionals,
        MealField::Price,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealField::Name => "Name",
            MealField::Description => "Description",
            MealField::Additionals => "Additionals",
            MealField::Price => "Price",
        }
    }
}

/// One meal row as typed into the form; the price stays raw text until submit
#[derive(Debug, Clone, PartialEq)]
pub struct MealDraft {
    pub name: String,
    pub description: String,
    pub additionals: String,
    pub price: String,
}

impl MealDraft {
    /// Empty row appended by "Add Meal"
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            additionals: String::new(),
            price: "0".to_string(),
        }
    }

    pub fn get(&self, field: MealField) -> &str {
        match field {
            MealField::Name => &self.name,
            MealField::Description => &self.description,
            MealField::Additionals => &self.additionals,
            MealField::Price => &self.price,
        }
    }

    fn set(&mut self, field: MealField, value: String) {
        match field {
            MealField::Name => self.name = value,
            MealField::Description => self.description = value,
            MealField::Additionals => self.additionals = value,
            MealField::Price => self.price = value,
        }
    }

    /// Keep only the fields the backend accepts, coercing the price.
    ///
    /// `row` is 1-based and only used for error messages.
    fn to_payload(&self, row: usize) -> std::result::Result<MealPayload, FormError> {
        Ok(MealPayload {
            name: self.name.clone(),
            description: non_empty(&self.description),
            additionals: non_empty(&self.additionals),
            price: parse_price(&self.price, row)?,
        })
    }
}

impl From<&Meal> for MealDraft {
    fn from(meal: &Meal) -> Self {
        Self {
            name: meal.name.clone(),
            description: meal.description.clone().unwrap_or_default(),
            additionals: meal.additionals.clone().unwrap_or_default(),
            price: meal.price.to_string(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse a price typed by the user.
///
/// Accepts `.` or `,` as decimal separator. Empty, non-numeric, non-finite
/// and negative input (including `-0`) is rejected instead of silently
/// coerced.
pub fn parse_price(input: &str, row: usize) -> std::result::Result<f64, FormError> {
    let normalized = input.trim().replace(',', ".");
    let invalid = || FormError::InvalidPrice {
        row,
        input: input.to_string(),
    };

    let price: f64 = normalized.parse().map_err(|_| invalid())?;
    if !price.is_finite() {
        return Err(invalid());
    }
    if price.is_sign_negative() {
        return Err(FormError::NegativePrice { row });
    }
    Ok(price)
}

/// Draft of a promotion being created or edited
#[derive(Debug, Clone)]
pub struct PromotionForm {
    mode: FormMode,
    name: String,
    meals: Vec<MealDraft>,
    publish: bool,
    in_flight: bool,
}

impl PromotionForm {
    /// Empty draft for a new promotion, seeded with one blank meal row
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            meals: vec![MealDraft::blank()],
            publish: false,
            in_flight: false,
        }
    }

    /// Draft seeded from a promotion; edits it when the promotion has an id
    pub fn from_promotion(promotion: &Promotion) -> Self {
        let mode = match &promotion.id {
            Some(id) => FormMode::Edit(id.clone()),
            None => FormMode::Create,
        };

        Self {
            mode,
            name: promotion.name.clone(),
            meals: promotion.meals.iter().map(MealDraft::from).collect(),
            publish: false,
            in_flight: false,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Promotion"
        } else {
            "Create New Promotion"
        }
    }

    /// Label of the submit action, distinct while a submission is in flight
    pub fn submit_label(&self) -> &'static str {
        match (self.is_edit(), self.in_flight) {
            (true, true) => "Saving...",
            (false, true) => "Creating...",
            (true, false) => "Save Changes",
            (false, false) => "Create Promotion",
        }
    }

    /// In-flight label for this form's mode
    pub fn progress_label(&self) -> &'static str {
        if self.is_edit() { "Saving..." } else { "Creating..." }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn meals(&self) -> &[MealDraft] {
        &self.meals
    }

    /// Replace every meal row at once
    pub fn set_meals(&mut self, meals: Vec<MealDraft>) {
        self.meals = meals;
    }

    /// Publish flag; only sent when updating
    pub fn publish(&self) -> bool {
        self.publish
    }

    pub fn set_publish(&mut self, publish: bool) {
        self.publish = publish;
    }

    /// Append a blank meal row
    pub fn add_meal(&mut self) {
        self.meals.push(MealDraft::blank());
    }

    /// Remove the meal row at `index`; later rows shift up
    pub fn remove_meal(&mut self, index: usize) -> Result<MealDraft> {
        if index >= self.meals.len() {
            return Err(FormError::NoSuchMeal(index + 1).into());
        }
        Ok(self.meals.remove(index))
    }

    /// Set one field of the meal row at `index`
    pub fn set_meal_field(
        &mut self,
        index: usize,
        field: MealField,
        value: impl Into<String>,
    ) -> Result<()> {
        let meal = self
            .meals
            .get_mut(index)
            .ok_or(FormError::NoSuchMeal(index + 1))?;
        meal.set(field, value.into());
        Ok(())
    }

    fn meal_payloads(&self) -> std::result::Result<Vec<MealPayload>, FormError> {
        self.meals
            .iter()
            .enumerate()
            .map(|(i, meal)| meal.to_payload(i + 1))
            .collect()
    }

    /// Body for `POST /promotion`
    pub fn to_new_promotion(&self) -> Result<NewPromotion> {
        Ok(NewPromotion {
            name: self.name.clone(),
            meals: self.meal_payloads()?,
        })
    }

    /// Body for `PUT /promotion/{id}`
    pub fn to_update(&self) -> Result<PromotionUpdate> {
        Ok(PromotionUpdate {
            name: Some(self.name.clone()),
            meals: Some(self.meal_payloads()?),
            publish_to_facebook: Some(self.publish),
        })
    }

    /// Submit the draft: create when it has no id, update otherwise.
    ///
    /// Prices are validated before anything is sent. A second submit while
    /// one is in flight is refused. On failure the draft is left intact so
    /// the user can correct it and retry.
    pub async fn submit<A: PromotionApi + ?Sized>(&mut self, api: &A) -> Result<Promotion> {
        if self.in_flight {
            return Err(FormError::SubmissionInProgress.into());
        }

        let request = match &self.mode {
            FormMode::Create => Submission::Create(self.to_new_promotion()?),
            FormMode::Edit(id) => Submission::Update(id.clone(), self.to_update()?),
        };

        self.in_flight = true;
        let result = match request {
            Submission::Create(body) => api.create_promotion(body).await,
            Submission::Update(id, body) => api.update_promotion(&id, body).await,
        };
        self.in_flight = false;

        if let Err(ref e) = result {
            log::error!(
                "Failed to {} promotion: {}",
                if self.is_edit() { "update" } else { "create" },
                e
            );
        }
        result
    }
}

impl Default for PromotionForm {
    fn default() -> Self {
        Self::new()
    }
}

enum Submission {
    Create(NewPromotion),
    Update(PromotionId, PromotionUpdate),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockPromoClient;
    use crate::client::mock::CapturedRequest;
    use crate::error::{ApiError, Error};
    use serde_json::json;

    fn meal(name: &str, price: f64) -> Meal {
        Meal {
            name: name.to_string(),
            description: None,
            additionals: None,
            price,
        }
    }

    fn persisted(id: &str, name: &str, meals: Vec<Meal>) -> Promotion {
        Promotion {
            id: Some(PromotionId::new(id)),
            name: name.to_string(),
            meals,
        }
    }

    #[test]
    fn test_new_form_has_one_blank_row() {
        let form = PromotionForm::new();
        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.meals(), &[MealDraft::blank()]);
        assert_eq!(form.title(), "Create New Promotion");
        assert_eq!(form.submit_label(), "Create Promotion");
    }

    #[test]
    fn test_form_from_persisted_promotion_edits() {
        let form = PromotionForm::from_promotion(&persisted("42", "Lunch", vec![meal("A", 1.0)]));
        assert_eq!(form.mode(), &FormMode::Edit(PromotionId::new("42")));
        assert_eq!(form.title(), "Edit Promotion");
        assert_eq!(form.submit_label(), "Save Changes");
        assert_eq!(form.progress_label(), "Saving...");
        assert_eq!(form.meals()[0].price, "1");
    }

    #[test]
    fn test_remove_middle_row_preserves_order() {
        let mut form = PromotionForm::from_promotion(&persisted(
            "1",
            "P",
            vec![meal("A", 1.0), meal("B", 2.0), meal("C", 3.0)],
        ));

        let removed = form.remove_meal(1).unwrap();

        assert_eq!(removed.name, "B");
        let names: Vec<&str> = form.meals().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range_row_fails() {
        let mut form = PromotionForm::new();
        let err = form.remove_meal(5).unwrap_err();
        assert!(matches!(err, Error::Form(FormError::NoSuchMeal(6))));
        assert_eq!(form.meals().len(), 1);
    }

    #[test]
    fn test_edit_field_touches_only_that_row() {
        let mut form = PromotionForm::from_promotion(&persisted(
            "1",
            "P",
            vec![meal("A", 1.0), meal("B", 2.0)],
        ));

        form.set_meal_field(1, MealField::Description, "Spicy")
            .unwrap();
        form.add_meal();

        assert_eq!(form.meals()[0].description, "");
        assert_eq!(form.meals()[1].description, "Spicy");
        assert_eq!(form.meals()[1].name, "B");
        assert_eq!(form.meals()[2], MealDraft::blank());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.5", 1), Ok(12.5));
        assert_eq!(parse_price(" 7,90 ", 1), Ok(7.9));
        assert_eq!(parse_price("0", 1), Ok(0.0));
        assert_eq!(
            parse_price("", 2),
            Err(FormError::InvalidPrice {
                row: 2,
                input: String::new()
            })
        );
        assert!(matches!(
            parse_price("abc", 1),
            Err(FormError::InvalidPrice { .. })
        ));
        assert!(matches!(
            parse_price("NaN", 1),
            Err(FormError::InvalidPrice { .. })
        ));
        assert_eq!(parse_price("-1", 3), Err(FormError::NegativePrice { row: 3 }));
        assert_eq!(parse_price("-0", 1), Err(FormError::NegativePrice { row: 1 }));
        assert_eq!(parse_price("-0,0", 2), Err(FormError::NegativePrice { row: 2 }));
    }

    #[tokio::test]
    async fn test_create_sends_only_allow_listed_fields() {
        let api = MockPromoClient::new();
        let mut form = PromotionForm::new();
        form.set_name("Lunch");
        form.set_meal_field(0, MealField::Name, "Burger").unwrap();
        form.set_meal_field(0, MealField::Price, "12.5").unwrap();
        form.set_publish(true);

        let created = form.submit(&api).await.unwrap();

        assert!(created.is_persisted());
        let counts = api.call_counts().await;
        assert_eq!(counts.create_promotion, 1);
        assert_eq!(counts.update_promotion, 0);

        let captured = api.captured_requests().await;
        let CapturedRequest::Create(body) = &captured[0] else {
            panic!("expected a create request");
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "name": "Lunch", "meals": [{ "name": "Burger", "price": 12.5 }] })
        );
    }

    #[tokio::test]
    async fn test_edit_calls_update_never_create() {
        let original = persisted("42", "Lunch", vec![meal("Burger", 12.5)]);
        let api = MockPromoClient::new()
            .with_promotions(vec![original.clone()])
            .await;
        let mut form = PromotionForm::from_promotion(&original);
        form.set_name("Dinner");

        let updated = form.submit(&api).await.unwrap();

        assert_eq!(updated.name, "Dinner");
        let counts = api.call_counts().await;
        assert_eq!(counts.update_promotion, 1);
        assert_eq!(counts.create_promotion, 0);

        let captured = api.captured_requests().await;
        let CapturedRequest::Update(id, body) = &captured[0] else {
            panic!("expected an update request");
        };
        assert_eq!(id.as_str(), "42");
        assert_eq!(body.publish_to_facebook, Some(false));
    }

    #[tokio::test]
    async fn test_publish_flag_sent_on_update() {
        let original = persisted("7", "Promo", vec![meal("Soup", 5.0)]);
        let api = MockPromoClient::new()
            .with_promotions(vec![original.clone()])
            .await;
        let mut form = PromotionForm::from_promotion(&original);
        form.set_publish(true);

        form.submit(&api).await.unwrap();

        let captured = api.captured_requests().await;
        let CapturedRequest::Update(_, body) = &captured[0] else {
            panic!("expected an update request");
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "name": "Promo",
                "meals": [{ "name": "Soup", "price": 5.0 }],
                "publishToFacebook": true
            })
        );
    }

    #[tokio::test]
    async fn test_invalid_price_blocks_submission() {
        let api = MockPromoClient::new();
        let mut form = PromotionForm::new();
        form.set_meal_field(0, MealField::Price, "twelve").unwrap();

        let err = form.submit(&api).await.unwrap_err();

        assert!(matches!(err, Error::Form(FormError::InvalidPrice { row: 1, .. })));
        assert_eq!(api.call_counts().await.total(), 0);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_draft() {
        let api = MockPromoClient::new()
            .with_error(ApiError::ServerError("down".to_string()))
            .await;
        let mut form = PromotionForm::new();
        form.set_name("Keep me");
        form.set_meal_field(0, MealField::Name, "Burger").unwrap();

        assert!(form.submit(&api).await.is_err());

        assert_eq!(form.name(), "Keep me");
        assert_eq!(form.meals()[0].name, "Burger");
        assert!(!form.is_submitting());

        // Retrying the same draft works once the backend recovers
        form.submit(&api).await.unwrap();
        assert_eq!(api.call_counts().await.create_promotion, 2);
    }

    #[tokio::test]
    async fn test_in_flight_form_refuses_resubmission() {
        let api = MockPromoClient::new();
        let mut form = PromotionForm::new();
        form.in_flight = true;

        assert_eq!(form.submit_label(), "Creating...");
        let err = form.submit(&api).await.unwrap_err();

        assert!(matches!(err, Error::Form(FormError::SubmissionInProgress)));
        assert_eq!(api.call_counts().await.mutations(), 0);
    }
}
