use mealdeck_shared::recipe::{Ingredient, Macros, Meal};

use crate::conversion::factor;

/// Totals the macros of a list of ingredients.
///
/// Each ingredient contributes `macro * amount * factor(unit)`; missing
/// values were already decoded as zero so this never fails.
pub fn aggregate_ingredients<'a>(ingredients: impl IntoIterator<Item = &'a Ingredient>) -> Macros {
    ingredients
        .into_iter()
        .map(|ingredient| {
            ingredient
                .macros
                .scale(ingredient.amount * factor(&ingredient.unit))
        })
        .sum()
}

/// Sums the stored totals of already-composed meals without any conversion.
pub fn sum_meals<'a>(meals: impl IntoIterator<Item = &'a Meal>) -> Macros {
    meals.into_iter().map(|meal| &meal.macros).sum()
}
