use mealdeck_shared::{
    Collection, DocumentStore, Session, SyncStatus,
    mealplan::{Day, PlannedMeal},
    recipe::{Macros, Meal},
    write_through,
};

use crate::{Week, WeeklyPlan};

/// The plan of the week currently on screen, backed by the `mealPlans`
/// collection.
///
/// Mutations apply locally first and then write the whole week. The last
/// plan known to be stored is kept so a failed write can be rolled back.
pub struct Planner<S> {
    store: S,
    week: Week,
    plan: WeeklyPlan,
    persisted: WeeklyPlan,
}

impl<S: DocumentStore> Planner<S> {
    pub fn new(store: S, week: Week) -> Self {
        Self {
            store,
            week,
            plan: WeeklyPlan::default(),
            persisted: WeeklyPlan::default(),
        }
    }

    pub fn week(&self) -> Week {
        self.week
    }

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    /// Replaces the resident plan with the stored plan of `week`.
    ///
    /// On a read failure nothing changes, including the current week.
    pub async fn load(&mut self, session: &Session, week: Week) -> mealdeck_shared::Result<()> {
        let plan = match session.user() {
            Some(user_id) => {
                let document = self
                    .store
                    .get(user_id, Collection::MealPlans, &week.key())
                    .await
                    .inspect_err(|e| {
                        tracing::error!(user_id, week = %week, "error loading meal plan: {e}")
                    })?;

                document.map(WeeklyPlan::from_document).unwrap_or_default()
            }
            _ => WeeklyPlan::default(),
        };

        self.week = week;
        self.persisted = plan.clone();
        self.plan = plan;

        Ok(())
    }

    pub async fn next_week(&mut self, session: &Session) -> mealdeck_shared::Result<()> {
        self.load(session, self.week.next()).await
    }

    pub async fn prev_week(&mut self, session: &Session) -> mealdeck_shared::Result<()> {
        self.load(session, self.week.prev()).await
    }

    /// Appends a new placement of `meal`, even when the day already has it.
    pub async fn add_meal(
        &mut self,
        session: &Session,
        day: Day,
        meal: Meal,
    ) -> (String, SyncStatus) {
        let planned = PlannedMeal::new(meal);
        let instance_id = planned.instance_id.clone();
        self.plan.push(day, planned);

        tracing::debug!(week = %self.week, %day, instance_id = %instance_id, "meal added to plan");

        (instance_id, self.save(session).await)
    }

    /// Removes one placement. Unknown ids change nothing and write nothing.
    pub async fn remove_meal(
        &mut self,
        session: &Session,
        day: Day,
        instance_id: &str,
    ) -> SyncStatus {
        if self.plan.remove(day, instance_id).is_none() {
            return SyncStatus::Skipped;
        }

        self.save(session).await
    }

    /// Writes the whole week, overwriting the stored document.
    pub async fn save(&mut self, session: &Session) -> SyncStatus {
        let document = match self.plan.to_document() {
            Ok(document) => document,
            Err(e) => {
                tracing::error!(week = %self.week, "error encoding meal plan: {e}");
                return SyncStatus::Failed(e.to_string());
            }
        };

        let status = write_through(
            &self.store,
            session,
            Collection::MealPlans,
            &self.week.key(),
            document,
        )
        .await;

        if status.is_saved() {
            self.persisted = self.plan.clone();
        }

        status
    }

    /// Local changes not yet confirmed by the store.
    pub fn is_dirty(&self) -> bool {
        self.plan != self.persisted
    }

    pub fn rollback(&mut self) {
        self.plan = self.persisted.clone();
    }

    pub fn day_totals(&self, day: Day) -> Macros {
        self.plan.day_totals(day)
    }

    pub fn week_totals(&self) -> Macros {
        self.plan.week_totals()
    }
}
