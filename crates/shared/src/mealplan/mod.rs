use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{de::string_or_empty, recipe::Meal};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    #[strum(to_string = "Mon", serialize = "Monday")]
    #[serde(rename = "Mon")]
    Monday,
    #[strum(to_string = "Tue", serialize = "Tuesday")]
    #[serde(rename = "Tue")]
    Tuesday,
    #[strum(to_string = "Wed", serialize = "Wednesday")]
    #[serde(rename = "Wed")]
    Wednesday,
    #[strum(to_string = "Thu", serialize = "Thursday")]
    #[serde(rename = "Thu")]
    Thursday,
    #[strum(to_string = "Fri", serialize = "Friday")]
    #[serde(rename = "Fri")]
    Friday,
    #[strum(to_string = "Sat", serialize = "Saturday")]
    #[serde(rename = "Sat")]
    Saturday,
    #[strum(to_string = "Sun", serialize = "Sunday")]
    #[serde(rename = "Sun")]
    Sunday,
}

impl Day {
    /// Zero-based offset from the start of the week.
    pub fn offset(&self) -> i64 {
        match self {
            Day::Monday => 0,
            Day::Tuesday => 1,
            Day::Wednesday => 2,
            Day::Thursday => 3,
            Day::Friday => 4,
            Day::Saturday => 5,
            Day::Sunday => 6,
        }
    }
}

/// A meal placed on one day of a week.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    #[serde(flatten)]
    pub meal: Meal,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub instance_id: String,
}

impl PlannedMeal {
    pub fn new(meal: Meal) -> Self {
        Self {
            meal,
            instance_id: ulid::Ulid::new().to_string(),
        }
    }
}
