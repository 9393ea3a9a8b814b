use mealdeck_mealplan::WeeklyPlan;
use std::collections::HashSet;

use crate::{Direction, ShoppingEntry, ShoppingList, SortBy};

/// Shopping list as browsed: checked ingredients and the active sort.
///
/// Checks are keyed by ingredient name and survive re-derivation.
#[derive(Clone, Debug, Default)]
pub struct ShoppingView {
    list: ShoppingList,
    checked: HashSet<String>,
    sort_by: SortBy,
    direction: Direction,
}

impl ShoppingView {
    pub fn new(plan: &WeeklyPlan) -> Self {
        Self {
            list: ShoppingList::derive(plan),
            ..Default::default()
        }
    }

    /// Re-derives from `plan`, dropping any deductions but keeping checks.
    pub fn refresh(&mut self, plan: &WeeklyPlan) {
        self.list = ShoppingList::derive(plan);
    }

    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ShoppingList {
        &mut self.list
    }

    pub fn toggle_checked(&mut self, ingredient: &str) -> bool {
        if self.checked.remove(ingredient) {
            return false;
        }

        self.checked.insert(ingredient.to_owned());
        true
    }

    pub fn is_checked(&self, ingredient: &str) -> bool {
        self.checked.contains(ingredient)
    }

    /// Urgent and not yet checked.
    pub fn is_highlighted(&self, entry: &ShoppingEntry) -> bool {
        entry.is_urgent() && !self.is_checked(&entry.ingredient)
    }

    /// Same column flips the direction, another column starts ascending.
    pub fn toggle_sort(&mut self, column: SortBy) {
        if self.sort_by == column {
            self.direction = self.direction.flip();
        } else {
            self.sort_by = column;
            self.direction = Direction::Asc;
        }
    }

    pub fn sort(&self) -> (SortBy, Direction) {
        (self.sort_by, self.direction)
    }

    pub fn entries(&self) -> Vec<&ShoppingEntry> {
        self.list.sorted(self.sort_by, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort() {
        let mut view = ShoppingView::default();
        assert_eq!(view.sort(), (SortBy::Ingredient, Direction::Asc));

        view.toggle_sort(SortBy::Ingredient);
        assert_eq!(view.sort(), (SortBy::Ingredient, Direction::Desc));

        view.toggle_sort(SortBy::Amount);
        assert_eq!(view.sort(), (SortBy::Amount, Direction::Asc));

        view.toggle_sort(SortBy::Amount);
        view.toggle_sort(SortBy::FridgeLifetime);
        assert_eq!(view.sort(), (SortBy::FridgeLifetime, Direction::Asc));
    }

    #[test]
    fn test_toggle_checked() {
        let mut view = ShoppingView::default();
        assert!(view.toggle_checked("Lettuce"));
        assert!(view.is_checked("Lettuce"));
        assert!(!view.is_checked("lettuce"));
        assert!(!view.toggle_checked("Lettuce"));
        assert!(!view.is_checked("Lettuce"));
    }
}
