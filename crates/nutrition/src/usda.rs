use mealdeck_shared::de::{number_or_zero, string_or_empty};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;

use crate::{FoodItem, FoodSearch, Nutrient};

pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

#[derive(Debug, Clone)]
pub struct UsdaClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for UsdaClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: 10,
        }
    }
}

/// USDA FoodData Central client.
#[derive(Clone)]
pub struct UsdaClient {
    config: UsdaClientConfig,
    http_client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchFood {
    #[serde(default, deserialize_with = "string_or_empty")]
    fdc_id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    description: String,
    #[serde(default)]
    food_nutrients: Vec<SearchNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchNutrient {
    #[serde(default, deserialize_with = "string_or_empty")]
    nutrient_name: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodDetailsResponse {
    #[serde(default, deserialize_with = "string_or_empty")]
    fdc_id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    description: String,
    #[serde(default)]
    food_nutrients: Vec<DetailsNutrient>,
}

#[derive(Debug, Deserialize)]
struct DetailsNutrient {
    nutrient: Option<NutrientInfo>,
    #[serde(default, deserialize_with = "number_or_zero")]
    amount: f64,
}

#[derive(Debug, Deserialize)]
struct NutrientInfo {
    #[serde(default, deserialize_with = "string_or_empty")]
    name: String,
}

impl From<SearchFood> for FoodItem {
    fn from(food: SearchFood) -> Self {
        FoodItem {
            fdc_id: food.fdc_id,
            description: food.description,
            nutrients: food
                .food_nutrients
                .into_iter()
                .map(|n| Nutrient::new(n.nutrient_name, n.value))
                .collect(),
        }
    }
}

impl From<FoodDetailsResponse> for FoodItem {
    fn from(food: FoodDetailsResponse) -> Self {
        FoodItem {
            fdc_id: food.fdc_id,
            description: food.description,
            nutrients: food
                .food_nutrients
                .into_iter()
                .filter_map(|n| Some(Nutrient::new(n.nutrient?.name, n.amount)))
                .collect(),
        }
    }
}

impl UsdaClient {
    pub fn new(config: UsdaClientConfig) -> mealdeck_shared::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| mealdeck_shared::Error::Nutrition(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> mealdeck_shared::Result<T> {
        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| mealdeck_shared::Error::Nutrition(e.to_string()))?;

        if !response.status().is_success() {
            return Err(mealdeck_shared::Error::Nutrition(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| mealdeck_shared::Error::Nutrition(format!("JSON parse error: {e}")))
    }
}

#[async_trait::async_trait]
impl FoodSearch for UsdaClient {
    async fn search(&self, query: &str) -> mealdeck_shared::Result<Vec<FoodItem>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(vec![]);
        }

        let response: SearchResponse = self
            .get("/foods/search", &[("query", query)])
            .await?;

        tracing::debug!(query, count = response.foods.len(), "food search");

        Ok(response.foods.into_iter().map(FoodItem::from).collect())
    }

    async fn details(&self, fdc_id: &str) -> mealdeck_shared::Result<FoodItem> {
        let path = format!("/food/{}", urlencoding::encode(fdc_id.trim()));
        let response: FoodDetailsResponse = self.get(&path, &[]).await?;

        Ok(response.into())
    }
}
