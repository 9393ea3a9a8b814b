//! Food lookup against a nutrition database.
//!
//! Nutrient values are per base unit of the food and feed straight into
//! [`Ingredient::macros`](mealdeck_shared::recipe::Ingredient).

mod food;
mod mock;
mod usda;

pub use food::*;
pub use mock::*;
pub use usda::*;

/// Food search backend.
#[async_trait::async_trait]
pub trait FoodSearch: Send + Sync {
    async fn search(&self, query: &str) -> mealdeck_shared::Result<Vec<FoodItem>>;

    async fn details(&self, fdc_id: &str) -> mealdeck_shared::Result<FoodItem>;
}
