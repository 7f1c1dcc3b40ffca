//! Display models for CLI output

pub mod display;

pub use display::{MealDisplay, PromotionDisplay, format_price};
