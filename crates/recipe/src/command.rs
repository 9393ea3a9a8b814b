use mealdeck_shared::{
    Collection, DocumentStore, Session, SyncStatus,
    recipe::{Macros, Meal},
    write_through,
};
use serde_json::Value;
use time::OffsetDateTime;
use validator::Validate;

use crate::{aggregator::sum_meals, catalog::find_in_catalog, draft::MealDraft};

/// Totals shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
    pub meal_count: usize,
    pub macros: Macros,
}

/// Reads and writes the user's `meals` collection.
#[derive(Clone)]
pub struct Command<S> {
    store: S,
}

impl<S: DocumentStore> Command<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates the draft, freezes its totals and persists it under a fresh id.
    pub async fn create(
        &self,
        session: &Session,
        mut draft: MealDraft,
    ) -> mealdeck_shared::Result<(Meal, SyncStatus)> {
        draft.name = draft.name.trim().to_owned();
        draft.validate()?;

        let id = ulid::Ulid::new().to_string();
        let meal = draft.into_meal(&id, now());
        let status = self.write(session, &meal).await?;

        tracing::info!(meal_id = %meal.id, name = %meal.name, "meal created");

        Ok((meal, status))
    }

    /// Copies a catalog recipe into the user's meals, keyed by its catalog id.
    pub async fn save_catalog(
        &self,
        session: &Session,
        id: &str,
    ) -> mealdeck_shared::Result<(Meal, SyncStatus)> {
        let Some(mut meal) = find_in_catalog(id) else {
            mealdeck_shared::not_found!("catalog recipe {id}");
        };

        meal.created_at = now();
        let status = self.write(session, &meal).await?;

        Ok((meal, status))
    }

    pub async fn list(&self, session: &Session) -> mealdeck_shared::Result<Vec<Meal>> {
        let Some(user_id) = session.user() else {
            return Ok(vec![]);
        };

        let documents = self.store.get_all(user_id, Collection::Meals).await?;

        Ok(documents
            .into_iter()
            .filter_map(|(key, document)| decode(key, document))
            .collect())
    }

    pub async fn load(
        &self,
        session: &Session,
        id: &str,
    ) -> mealdeck_shared::Result<Option<Meal>> {
        let Some(user_id) = session.user() else {
            return Ok(None);
        };

        let document = self.store.get(user_id, Collection::Meals, id).await?;

        Ok(document.and_then(|document| decode(id.to_owned(), document)))
    }

    pub async fn stats(&self, session: &Session) -> mealdeck_shared::Result<Stats> {
        let meals = self.list(session).await?;

        Ok(Stats {
            meal_count: meals.len(),
            macros: sum_meals(&meals),
        })
    }

    async fn write(&self, session: &Session, meal: &Meal) -> mealdeck_shared::Result<SyncStatus> {
        let document = serde_json::to_value(meal)?;

        Ok(write_through(&self.store, session, Collection::Meals, &meal.id, document).await)
    }
}

// The document key is the meal id, whatever the body says.
fn decode(key: String, document: Value) -> Option<Meal> {
    match serde_json::from_value::<Meal>(document) {
        Ok(mut meal) => {
            meal.id = key;
            Some(meal)
        }
        Err(e) => {
            tracing::warn!(key = %key, "skipping unreadable meal: {e}");
            None
        }
    }
}

fn now() -> u64 {
    OffsetDateTime::now_utc().unix_timestamp().max(0) as u64
}
