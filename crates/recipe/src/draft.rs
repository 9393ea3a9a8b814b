use mealdeck_shared::recipe::{FridgeLifetime, Ingredient, Macros, Meal, Unit};
use validator::Validate;

use crate::aggregator::aggregate_ingredients;

pub const DEFAULT_AMOUNT: f64 = 1.0;
pub const DEFAULT_UNIT: Unit = Unit::Count;
pub const DEFAULT_FRIDGE_LIFETIME: FridgeLifetime = FridgeLifetime::Days(3);

/// Meal being composed from nutrition search results.
#[derive(Validate, Clone, Debug, Default)]
pub struct MealDraft {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub ingredients: Vec<Ingredient>,
}

impl MealDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: vec![],
        }
    }

    /// Adds a searched food with the default quantity of one count that
    /// keeps for three days.
    pub fn add_food(&mut self, name: impl Into<String>, macros: Macros) -> usize {
        self.add_ingredient(
            Ingredient::new(name, DEFAULT_AMOUNT, DEFAULT_UNIT, DEFAULT_FRIDGE_LIFETIME)
                .with_macros(macros),
        )
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> usize {
        self.ingredients.push(ingredient);
        self.ingredients.len() - 1
    }

    /// Returns `false` when `index` is out of range.
    pub fn update_ingredient(
        &mut self,
        index: usize,
        amount: f64,
        unit: Unit,
        fridge_lifetime: FridgeLifetime,
    ) -> bool {
        let Some(ingredient) = self.ingredients.get_mut(index) else {
            return false;
        };

        ingredient.amount = if amount.is_finite() && amount > 0.0 {
            amount
        } else {
            0.0
        };
        ingredient.unit = unit;
        ingredient.fridge_lifetime = fridge_lifetime;

        true
    }

    pub fn remove_ingredient(&mut self, index: usize) -> Option<Ingredient> {
        if index < self.ingredients.len() {
            Some(self.ingredients.remove(index))
        } else {
            None
        }
    }

    pub fn macros(&self) -> Macros {
        aggregate_ingredients(&self.ingredients)
    }

    pub fn into_meal(self, id: impl Into<String>, created_at: u64) -> Meal {
        let macros = self.macros();

        Meal {
            id: id.into(),
            name: self.name.trim().to_owned(),
            macros,
            ingredients: self.ingredients,
            created_at,
        }
    }
}
