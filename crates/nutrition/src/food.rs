use mealdeck_shared::recipe::Macros;
use serde::{Deserialize, Serialize};

pub const ENERGY: &str = "Energy";
pub const PROTEIN: &str = "Protein";
pub const CARBS: &str = "Carbohydrate, by difference";
pub const FAT: &str = "Total lipid (fat)";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub value: f64,
}

impl Nutrient {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One food returned by a search or a details lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub fdc_id: String,
    pub description: String,
    pub nutrients: Vec<Nutrient>,
}

impl FoodItem {
    /// Value of the first nutrient called `name`, zero when absent.
    pub fn nutrient(&self, name: &str) -> f64 {
        self.nutrients
            .iter()
            .find(|nutrient| nutrient.name == name)
            .map(|nutrient| nutrient.value)
            .unwrap_or_default()
    }

    pub fn macros(&self) -> Macros {
        Macros::new(
            self.nutrient(ENERGY),
            self.nutrient(PROTEIN),
            self.nutrient(CARBS),
            self.nutrient(FAT),
        )
    }
}
