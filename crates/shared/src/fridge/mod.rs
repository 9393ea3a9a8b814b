use serde::{Deserialize, Serialize};

use crate::{
    de::{number_or_zero, string_or_empty},
    recipe::Unit,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FridgeEntry {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub unit: Unit,
}

impl FridgeEntry {
    pub fn new(name: impl Into<String>, amount: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
        }
    }

    /// Merge key, also used as the document key.
    pub fn key(&self) -> String {
        key_of(&self.name)
    }
}

pub fn key_of(name: &str) -> String {
    name.trim().to_lowercase()
}
