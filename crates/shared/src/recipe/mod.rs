use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use crate::de::{number_or_zero, string_or_empty, timestamp_or_zero, to_number};

/// Measurement unit attached to an ingredient quantity.
///
/// Symbols outside the known set are kept verbatim in `Other`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    Count,
    Serving,
    #[default]
    G,
    Ml,
    Oz,
    Cup,
    Tbsp,
    Tsp,
    Other(String),
}

impl Unit {
    pub const KNOWN: [Unit; 8] = [
        Unit::Count,
        Unit::Serving,
        Unit::G,
        Unit::Ml,
        Unit::Oz,
        Unit::Cup,
        Unit::Tbsp,
        Unit::Tsp,
    ];

    pub fn symbol(&self) -> &str {
        match self {
            Unit::Count => "count",
            Unit::Serving => "serving",
            Unit::G => "g",
            Unit::Ml => "ml",
            Unit::Oz => "oz",
            Unit::Cup => "cup",
            Unit::Tbsp => "tbsp",
            Unit::Tsp => "tsp",
            Unit::Other(symbol) => symbol,
        }
    }
}

impl AsRef<str> for Unit {
    fn as_ref(&self) -> &str {
        self.symbol()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        let unit = match symbol.to_lowercase().as_str() {
            "" => Unit::default(),
            "count" => Unit::Count,
            "serving" => Unit::Serving,
            "g" => Unit::G,
            "ml" => Unit::Ml,
            "oz" => Unit::Oz,
            "cup" => Unit::Cup,
            "tbsp" => Unit::Tbsp,
            "tsp" => Unit::Tsp,
            _ => Unit::Other(symbol.to_owned()),
        };

        Ok(unit)
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        let unit = match value {
            Some(Value::String(s)) => s.parse().unwrap_or_default(),
            _ => Unit::default(),
        };

        Ok(unit)
    }
}

/// Days an ingredient stays usable once bought.
///
/// Ordering puts every finite lifetime before `Infinite`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FridgeLifetime {
    Days(u32),
    Infinite,
}

impl FridgeLifetime {
    pub fn days(&self) -> Option<u32> {
        match self {
            FridgeLifetime::Days(days) => Some(*days),
            FridgeLifetime::Infinite => None,
        }
    }

    pub fn is_below(&self, threshold: u32) -> bool {
        matches!(self, FridgeLifetime::Days(days) if *days < threshold)
    }
}

// Missing lifetimes decode as zero days like every other missing number.
impl Default for FridgeLifetime {
    fn default() -> Self {
        FridgeLifetime::Days(0)
    }
}

impl fmt::Display for FridgeLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FridgeLifetime::Days(days) => write!(f, "{days}"),
            FridgeLifetime::Infinite => f.write_str("infinite"),
        }
    }
}

impl FromStr for FridgeLifetime {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if is_infinite_label(s) {
            return Ok(FridgeLifetime::Infinite);
        }

        Ok(FridgeLifetime::Days(s.parse()?))
    }
}

fn is_infinite_label(s: &str) -> bool {
    matches!(
        s.to_lowercase().as_str(),
        "infinite" | "infinity" | "inf" | "unbounded"
    )
}

impl Serialize for FridgeLifetime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FridgeLifetime::Days(days) => serializer.serialize_u32(*days),
            FridgeLifetime::Infinite => serializer.serialize_str("infinite"),
        }
    }
}

impl<'de> Deserialize<'de> for FridgeLifetime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        let lifetime = match value {
            // JSON has no Infinity, browsers wrote it as null
            None | Some(Value::Null) => FridgeLifetime::Infinite,
            Some(Value::String(s)) if is_infinite_label(s.trim()) => FridgeLifetime::Infinite,
            Some(Value::Number(n)) if n.as_f64().is_some_and(f64::is_infinite) => {
                FridgeLifetime::Infinite
            }
            Some(other) => {
                let days = to_number(&other).floor().min(u32::MAX as f64);
                FridgeLifetime::Days(days as u32)
            }
        };

        Ok(lifetime)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    #[serde(default, deserialize_with = "number_or_zero")]
    pub calories: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub protein: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub fat: f64,
}

impl Macros {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Self) -> Self::Output {
        Macros {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::default(), Add::add)
    }
}

impl<'a> Sum<&'a Macros> for Macros {
    fn sum<I: Iterator<Item = &'a Macros>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Macros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} kcal, {:.0}g protein, {:.0}g carbs, {:.0}g fat",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

/// Quantified ingredient inside a meal.
///
/// `macros` holds values per base unit, as returned by nutrition search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub fridge_lifetime: FridgeLifetime,
    #[serde(default)]
    pub macros: Macros,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        unit: Unit,
        fridge_lifetime: FridgeLifetime,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
            fridge_lifetime,
            macros: Macros::default(),
        }
    }

    pub fn with_macros(mut self, macros: Macros) -> Self {
        self.macros = macros;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub macros: Macros,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "timestamp_or_zero")]
    pub created_at: u64,
}
