//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login and bearer token handling
//! - [`PromotionApi`] - Promotion CRUD and image preview

mod auth;
mod promotion;

pub use auth::AuthApi;
pub use promotion::PromotionApi;
