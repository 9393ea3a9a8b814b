use mealdeck_mealplan::WeeklyPlan;
use mealdeck_shared::recipe::{FridgeLifetime, Unit};
use serde::Serialize;
use std::collections::HashMap;

/// Entries lasting fewer days than this are flagged as urgent.
pub const URGENT_THRESHOLD_DAYS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingEntry {
    pub ingredient: String,
    pub amount: f64,
    /// Unit of the first occurrence.
    pub unit: Unit,
    pub fridge_lifetime: FridgeLifetime,
    /// Set when later occurrences used another unit; their amounts were
    /// still added as is.
    pub mixed_units: bool,
}

impl ShoppingEntry {
    pub fn is_urgent(&self) -> bool {
        self.fridge_lifetime.is_below(URGENT_THRESHOLD_DAYS)
    }
}

/// Ingredients needed for a week, one entry per exact ingredient name, in
/// first-encounter order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    entries: Vec<ShoppingEntry>,
}

impl ShoppingList {
    /// Walks days Monday to Sunday, meals and ingredients in order.
    ///
    /// The first occurrence of a name fixes the unit, amounts are summed and
    /// the shortest fridge lifetime wins.
    pub fn derive(plan: &WeeklyPlan) -> Self {
        let mut entries: Vec<ShoppingEntry> = vec![];
        let mut positions: HashMap<&str, usize> = HashMap::new();

        let ingredients = plan
            .days()
            .flat_map(|(_, meals)| meals)
            .flat_map(|planned| &planned.meal.ingredients);

        for ingredient in ingredients {
            match positions.get(ingredient.name.as_str()) {
                Some(index) => {
                    let entry = &mut entries[*index];
                    entry.amount += ingredient.amount;
                    entry.fridge_lifetime = entry.fridge_lifetime.min(ingredient.fridge_lifetime);
                    if entry.unit != ingredient.unit {
                        entry.mixed_units = true;
                    }
                }
                _ => {
                    positions.insert(&ingredient.name, entries.len());
                    entries.push(ShoppingEntry {
                        ingredient: ingredient.name.to_owned(),
                        amount: ingredient.amount,
                        unit: ingredient.unit.clone(),
                        fridge_lifetime: ingredient.fridge_lifetime,
                        mixed_units: false,
                    });
                }
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[ShoppingEntry] {
        &self.entries
    }

    pub fn get(&self, ingredient: &str) -> Option<&ShoppingEntry> {
        self.entries.iter().find(|entry| entry.ingredient == ingredient)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn urgent(&self) -> impl Iterator<Item = &ShoppingEntry> {
        self.entries.iter().filter(|entry| entry.is_urgent())
    }

    /// Subtracts a stocked amount from the first entry whose name matches
    /// case-insensitively, never going below zero.
    ///
    /// The change only lives until the list is derived again.
    pub fn deduct(&mut self, name: &str, amount: f64) -> bool {
        let name = name.trim().to_lowercase();
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.ingredient.to_lowercase() == name)
        else {
            return false;
        };

        entry.amount = (entry.amount - amount).max(0.0);
        tracing::debug!(ingredient = %entry.ingredient, amount = entry.amount, "shopping entry deducted");

        true
    }
}
