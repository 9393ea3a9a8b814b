use mealdeck_recipe::sum_meals;
use mealdeck_shared::{
    mealplan::{Day, PlannedMeal},
    recipe::Macros,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use strum::VariantArray;

/// Meals placed on each day of one week. All seven days are always present.
#[derive(Clone, Debug, PartialEq)]
pub struct WeeklyPlan {
    days: BTreeMap<Day, Vec<PlannedMeal>>,
}

impl Default for WeeklyPlan {
    fn default() -> Self {
        Self {
            days: Day::VARIANTS.iter().map(|day| (*day, vec![])).collect(),
        }
    }
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a stored plan. Unknown day keys and unreadable meals are
    /// dropped, missing days come back empty.
    pub fn from_document(document: Value) -> Self {
        let mut plan = Self::default();
        let Value::Object(days) = document else {
            return plan;
        };

        for (label, meals) in days {
            let Ok(day) = label.parse::<Day>() else {
                tracing::warn!(label = %label, "ignoring unknown day in plan");
                continue;
            };

            let Value::Array(meals) = meals else {
                continue;
            };

            let entry = plan.days.entry(day).or_default();
            for meal in meals {
                match serde_json::from_value::<PlannedMeal>(meal) {
                    Ok(meal) => entry.push(meal),
                    Err(e) => tracing::warn!(%day, "skipping unreadable planned meal: {e}"),
                }
            }
        }

        plan
    }

    pub fn to_document(&self) -> mealdeck_shared::Result<Value> {
        let mut document = Map::new();
        for (day, meals) in &self.days {
            document.insert(day.to_string(), serde_json::to_value(meals)?);
        }

        Ok(Value::Object(document))
    }

    pub fn day(&self, day: Day) -> &[PlannedMeal] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Days in calendar order, Monday first.
    pub fn days(&self) -> impl Iterator<Item = (Day, &[PlannedMeal])> {
        self.days.iter().map(|(day, meals)| (*day, meals.as_slice()))
    }

    pub fn meals(&self) -> impl Iterator<Item = &PlannedMeal> {
        self.days.values().flatten()
    }

    pub fn meal_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.meal_count() == 0
    }

    pub fn day_totals(&self, day: Day) -> Macros {
        sum_meals(self.day(day).iter().map(|planned| &planned.meal))
    }

    pub fn week_totals(&self) -> Macros {
        sum_meals(self.meals().map(|planned| &planned.meal))
    }

    pub fn push(&mut self, day: Day, meal: PlannedMeal) {
        self.days.entry(day).or_default().push(meal);
    }

    pub fn remove(&mut self, day: Day, instance_id: &str) -> Option<PlannedMeal> {
        let meals = self.days.get_mut(&day)?;
        let index = meals
            .iter()
            .position(|meal| meal.instance_id == instance_id)?;

        Some(meals.remove(index))
    }
}
