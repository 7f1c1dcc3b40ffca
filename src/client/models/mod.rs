//! Promotion backend data models
//!
//! Domain types exchanged with the promotion backend, grouped by resource.

mod auth;
mod promotion;

pub use auth::{AccessToken, LoginRequest};
pub use promotion::{
    Meal, MealPayload, NewPromotion, Promotion, PromotionId, PromotionUpdate, PromotionWithImage,
};
