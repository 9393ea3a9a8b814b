use mealdeck_mealplan::{Planner, Week};
use mealdeck_shared::{DocumentStore, Session};
use mealdeck_shopping::{Direction, ShoppingEntry, ShoppingList, SortBy};
use std::io::Write;

pub async fn shopping<S, W>(
    store: &S,
    session: &Session,
    week: Week,
    sort: SortBy,
    direction: Direction,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: DocumentStore + Clone,
    W: Write,
{
    let mut planner = Planner::new(store.clone(), week);
    planner.load(session, week).await?;

    let list = ShoppingList::derive(planner.plan());
    writeln!(out, "Shopping list for week of {week}")?;
    if list.is_empty() {
        writeln!(out, "Nothing to buy")?;
    }

    for entry in list.sorted(sort, direction) {
        print_entry(out, entry)?;
    }

    Ok(())
}

pub(crate) fn print_entry<W: Write>(out: &mut W, entry: &ShoppingEntry) -> std::io::Result<()> {
    let urgent = if entry.is_urgent() { " !" } else { "" };
    let mixed = if entry.mixed_units {
        " (mixed units)"
    } else {
        ""
    };

    let lasts = match entry.fridge_lifetime.days() {
        Some(days) => format!("lasts {days} days"),
        _ => "keeps".to_owned(),
    };

    writeln!(
        out,
        "  {} {} {}  {lasts}{urgent}{mixed}",
        entry.ingredient, entry.amount, entry.unit
    )
}
