//! Shared CLI argument types

mod common;
mod global;
mod meal;

pub use common::OutputFormat;
pub use global::GlobalOptions;
pub use meal::parse_meal_spec;
