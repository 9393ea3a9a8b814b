use mealdeck_fridge::{Fridge, FridgeInput};
use mealdeck_mealplan::{Planner, Week};
use mealdeck_shared::{DocumentStore, Session, fridge::FridgeEntry};
use mealdeck_shopping::ShoppingList;
use std::io::Write;

use super::{FridgeCommand, check, shopping::print_entry};

pub async fn fridge<S, W>(
    store: &S,
    session: &Session,
    command: FridgeCommand,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: DocumentStore + Clone,
    W: Write,
{
    let mut fridge = Fridge::new(store.clone());
    fridge.load(session).await?;

    match command {
        FridgeCommand::List { search } => {
            let entries = fridge.search(search.as_deref().unwrap_or_default());
            if entries.is_empty() {
                writeln!(out, "Fridge is empty")?;
            }
            for entry in entries {
                print_fridge_entry(out, entry)?;
            }
        }
        FridgeCommand::Add { name, amount, unit } => {
            let week = Week::current();
            let mut planner = Planner::new(store.clone(), week);
            planner.load(session, week).await?;
            let mut list = ShoppingList::derive(planner.plan());

            let input = FridgeInput::new(&name, amount, unit);
            let status = fridge.stock(session, input, &mut list).await?;
            let status = check(status)?;

            if let Some(entry) = fridge.get(&name) {
                print_fridge_entry(out, entry)?;
            }
            let key = name.trim().to_lowercase();
            if let Some(entry) = list
                .entries()
                .iter()
                .find(|entry| entry.ingredient.to_lowercase() == key)
            {
                writeln!(out, "Still to buy:")?;
                print_entry(out, entry)?;
            }
            writeln!(out, "{status}")?;
        }
        FridgeCommand::Adjust { name, delta } => {
            let status = check(fridge.adjust(session, &name, delta).await)?;
            print_after_change(out, &fridge, &name)?;
            writeln!(out, "{status}")?;
        }
        FridgeCommand::Remove { name, amount } => {
            let status = check(fridge.remove(session, &name, amount).await)?;
            print_after_change(out, &fridge, &name)?;
            writeln!(out, "{status}")?;
        }
    }

    Ok(())
}

fn print_after_change<S: DocumentStore, W: Write>(
    out: &mut W,
    fridge: &Fridge<S>,
    name: &str,
) -> std::io::Result<()> {
    match fridge.get(name) {
        Some(entry) => print_fridge_entry(out, entry),
        _ => writeln!(out, "{} is not in the fridge", name.trim()),
    }
}

fn print_fridge_entry<W: Write>(out: &mut W, entry: &FridgeEntry) -> std::io::Result<()> {
    writeln!(out, "  {} {} {}", entry.amount, entry.unit, entry.name)
}
