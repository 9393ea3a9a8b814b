use mealdeck_mealplan::{Planner, Week};
use mealdeck_recipe::{Command, find_in_catalog};
use mealdeck_shared::{DocumentStore, Session, recipe::Meal};
use std::io::Write;

use super::{PlanCommand, check};

pub async fn plan<S, W>(
    store: &S,
    session: &Session,
    week: Week,
    command: PlanCommand,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: DocumentStore + Clone,
    W: Write,
{
    let mut planner = Planner::new(store.clone(), week);
    planner.load(session, week).await?;

    match command {
        PlanCommand::Show => {
            writeln!(out, "Week of {}", planner.week())?;
            for (day, _) in week.dates() {
                writeln!(out, "{day} {}", week.label(day))?;
                for planned in planner.plan().day(day) {
                    writeln!(
                        out,
                        "  {}  {}  ({})",
                        planned.instance_id, planned.meal.name, planned.meal.macros
                    )?;
                }
                writeln!(out, "  total: {}", planner.day_totals(day))?;
            }
            writeln!(out, "Week total: {}", planner.week_totals())?;
        }
        PlanCommand::Add { day, meal_id } => {
            let meal = find_meal(store, session, &meal_id).await?;
            let name = meal.name.to_owned();
            let (instance_id, status) = planner.add_meal(session, day, meal).await;
            let status = check(status)?;
            writeln!(out, "{name} added to {day} as {instance_id}: {status}")?;
        }
        PlanCommand::Remove { day, instance_id } => {
            let status = planner.remove_meal(session, day, &instance_id).await;
            let status = check(status)?;
            writeln!(out, "{instance_id} removed from {day}: {status}")?;
        }
    }

    Ok(())
}

/// Saved meals first, then the sample catalog.
async fn find_meal<S: DocumentStore + Clone>(
    store: &S,
    session: &Session,
    id: &str,
) -> anyhow::Result<Meal> {
    if let Some(meal) = Command::new(store.clone()).load(session, id).await? {
        return Ok(meal);
    }

    match find_in_catalog(id) {
        Some(meal) => Ok(meal),
        _ => anyhow::bail!("meal {id} not found"),
    }
}
