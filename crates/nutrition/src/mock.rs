use crate::{FoodItem, FoodSearch, Nutrient};

/// In-process food search over a fixed list, no network calls.
#[derive(Clone, Debug)]
pub struct MockFoodSearch {
    foods: Vec<FoodItem>,
}

impl MockFoodSearch {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }
}

impl Default for MockFoodSearch {
    fn default() -> Self {
        Self::new(vec![
            FoodItem {
                fdc_id: "171477".to_owned(),
                description: "Chicken, breast, meat only, cooked, roasted".to_owned(),
                nutrients: vec![
                    Nutrient::new("Energy", 1.65),
                    Nutrient::new("Protein", 0.3102),
                    Nutrient::new("Carbohydrate, by difference", 0.0),
                    Nutrient::new("Total lipid (fat)", 0.0357),
                ],
            },
            FoodItem {
                fdc_id: "171688".to_owned(),
                description: "Apples, raw, with skin".to_owned(),
                nutrients: vec![
                    Nutrient::new("Energy", 0.52),
                    Nutrient::new("Protein", 0.0026),
                    Nutrient::new("Carbohydrate, by difference", 0.1381),
                    Nutrient::new("Total lipid (fat)", 0.0017),
                ],
            },
        ])
    }
}

#[async_trait::async_trait]
impl FoodSearch for MockFoodSearch {
    async fn search(&self, query: &str) -> mealdeck_shared::Result<Vec<FoodItem>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(vec![]);
        }

        Ok(self
            .foods
            .iter()
            .filter(|food| food.description.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }

    async fn details(&self, fdc_id: &str) -> mealdeck_shared::Result<FoodItem> {
        match self.foods.iter().find(|food| food.fdc_id == fdc_id) {
            Some(food) => Ok(food.clone()),
            _ => mealdeck_shared::not_found!("food {fdc_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_search() -> anyhow::Result<()> {
        let search = MockFoodSearch::default();

        let foods = search.search("CHICKEN").await?;
        assert_eq!(foods.len(), 1);
        assert_eq!(search.details("171688").await?.description, "Apples, raw, with skin");
        assert!(search.details("1").await.is_err());

        Ok(())
    }
}
