//! Promotion backend API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod promo;

pub use api::{AuthApi, PromotionApi};
#[cfg(test)]
pub use mock::MockPromoClient;
pub use promo::PromoClient;
