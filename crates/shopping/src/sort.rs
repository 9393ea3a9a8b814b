use std::cmp::Ordering;
use strum::{AsRefStr, Display, EnumString};

use crate::ShoppingEntry;

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Ingredient,
    Amount,
    FridgeLifetime,
}

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

impl SortBy {
    pub fn compare(&self, a: &ShoppingEntry, b: &ShoppingEntry) -> Ordering {
        match self {
            SortBy::Ingredient => a
                .ingredient
                .to_lowercase()
                .cmp(&b.ingredient.to_lowercase())
                .then_with(|| a.ingredient.cmp(&b.ingredient)),
            SortBy::Amount => a.amount.total_cmp(&b.amount),
            SortBy::FridgeLifetime => a.fridge_lifetime.cmp(&b.fridge_lifetime),
        }
    }
}

/// Stable sort, so equal keys keep their first-encounter order.
pub fn sorted<'a>(
    entries: impl IntoIterator<Item = &'a ShoppingEntry>,
    by: SortBy,
    direction: Direction,
) -> Vec<&'a ShoppingEntry> {
    let mut entries = entries.into_iter().collect::<Vec<_>>();
    entries.sort_by(|a, b| match direction {
        Direction::Asc => by.compare(a, b),
        Direction::Desc => by.compare(b, a),
    });

    entries
}

impl crate::ShoppingList {
    pub fn sorted(&self, by: SortBy, direction: Direction) -> Vec<&ShoppingEntry> {
        sorted(self.entries(), by, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealdeck_shared::recipe::{FridgeLifetime, Unit};

    fn entry(name: &str, amount: f64, lifetime: FridgeLifetime) -> ShoppingEntry {
        ShoppingEntry {
            ingredient: name.to_owned(),
            amount,
            unit: Unit::G,
            fridge_lifetime: lifetime,
            mixed_units: false,
        }
    }

    fn names(entries: Vec<&ShoppingEntry>) -> Vec<&str> {
        entries.into_iter().map(|e| e.ingredient.as_str()).collect()
    }

    #[test]
    fn test_sort_columns() {
        let entries = vec![
            entry("lettuce", 100.0, FridgeLifetime::Days(2)),
            entry("Olive Oil", 15.0, FridgeLifetime::Infinite),
            entry("Bread", 50.0, FridgeLifetime::Days(7)),
        ];

        assert_eq!(
            names(sorted(&entries, SortBy::Ingredient, Direction::Asc)),
            vec!["Bread", "lettuce", "Olive Oil"]
        );
        assert_eq!(
            names(sorted(&entries, SortBy::Amount, Direction::Desc)),
            vec!["lettuce", "Bread", "Olive Oil"]
        );
        assert_eq!(
            names(sorted(&entries, SortBy::FridgeLifetime, Direction::Asc)),
            vec!["lettuce", "Bread", "Olive Oil"]
        );
        assert_eq!(
            names(sorted(&entries, SortBy::FridgeLifetime, Direction::Desc)),
            vec!["Olive Oil", "Bread", "lettuce"]
        );
    }

    #[test]
    fn test_ties_keep_order() {
        let entries = vec![
            entry("b", 1.0, FridgeLifetime::Days(3)),
            entry("a", 1.0, FridgeLifetime::Days(3)),
        ];

        assert_eq!(
            names(sorted(&entries, SortBy::Amount, Direction::Asc)),
            vec!["b", "a"]
        );
        assert_eq!(
            names(sorted(&entries, SortBy::Amount, Direction::Desc)),
            vec!["b", "a"]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("fridge-lifetime".parse::<SortBy>().unwrap(), SortBy::FridgeLifetime);
        assert_eq!("desc".parse::<Direction>().unwrap(), Direction::Desc);
        assert_eq!(Direction::Desc.flip(), Direction::Asc);
    }
}
