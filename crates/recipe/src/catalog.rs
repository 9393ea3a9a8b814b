use mealdeck_shared::recipe::{FridgeLifetime, Ingredient, Macros, Meal, Unit};

/// Sample recipes offered for browsing. Totals are fixed and ingredients
/// carry no per-unit macros.
pub fn catalog() -> Vec<Meal> {
    vec![
        sample(
            "1",
            "Grilled Chicken Salad",
            Macros::new(350.0, 30.0, 10.0, 15.0),
            vec![
                Ingredient::new("Chicken Breast", 150.0, Unit::G, FridgeLifetime::Days(3)),
                Ingredient::new("Lettuce", 100.0, Unit::G, FridgeLifetime::Days(2)),
                Ingredient::new("Olive Oil", 10.0, Unit::Ml, FridgeLifetime::Infinite),
            ],
        ),
        sample(
            "2",
            "Spaghetti Bolognese",
            Macros::new(450.0, 25.0, 50.0, 15.0),
            vec![
                Ingredient::new("Spaghetti", 100.0, Unit::G, FridgeLifetime::Days(180)),
                Ingredient::new("Ground Beef", 150.0, Unit::G, FridgeLifetime::Days(3)),
                Ingredient::new("Tomato Sauce", 100.0, Unit::Ml, FridgeLifetime::Days(7)),
            ],
        ),
        sample(
            "3",
            "Avocado Toast",
            Macros::new(300.0, 8.0, 30.0, 18.0),
            vec![
                Ingredient::new("Bread", 50.0, Unit::G, FridgeLifetime::Days(7)),
                Ingredient::new("Avocado", 100.0, Unit::G, FridgeLifetime::Days(2)),
                Ingredient::new("Olive Oil", 5.0, Unit::Ml, FridgeLifetime::Infinite),
            ],
        ),
    ]
}

pub fn find_in_catalog(id: &str) -> Option<Meal> {
    catalog().into_iter().find(|meal| meal.id == id)
}

fn sample(id: &str, name: &str, macros: Macros, ingredients: Vec<Ingredient>) -> Meal {
    Meal {
        id: id.to_owned(),
        name: name.to_owned(),
        macros,
        ingredients,
        created_at: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids() {
        let ids = catalog().into_iter().map(|m| m.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(find_in_catalog("3").unwrap().name, "Avocado Toast");
        assert!(find_in_catalog("4").is_none());
    }
}
