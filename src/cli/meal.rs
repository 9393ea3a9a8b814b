use mealdeck_nutrition::FoodSearch;
use mealdeck_recipe::{Command, MealDraft, catalog};
use mealdeck_shared::{
    DocumentStore, Session,
    recipe::{FridgeLifetime, Ingredient, Meal, Unit},
};
use std::{io::Write, str::FromStr};

use super::{MealCommand, check};

/// `name[:amount[:unit[:lifetime]]]`, missing parts default to one count
/// lasting three days.
#[derive(Clone, Debug, PartialEq)]
pub struct IngredientArg(pub Ingredient);

impl FromStr for IngredientArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(':').map(str::trim).collect::<Vec<_>>();
        if parts.len() > 4 {
            return Err(format!("too many fields in `{s}`"));
        }

        let name = parts[0];
        if name.is_empty() {
            return Err("ingredient name is empty".to_owned());
        }

        let amount = match parts.get(1) {
            Some(amount) => amount
                .parse::<f64>()
                .ok()
                .filter(|amount| amount.is_finite() && *amount >= 0.0)
                .ok_or_else(|| format!("invalid amount `{amount}`"))?,
            _ => mealdeck_recipe::DEFAULT_AMOUNT,
        };

        let unit = match parts.get(2).filter(|unit| !unit.is_empty()) {
            Some(unit) => Unit::from_str(unit).unwrap_or_default(),
            _ => mealdeck_recipe::DEFAULT_UNIT,
        };

        let fridge_lifetime = match parts.get(3) {
            Some(lifetime) => lifetime
                .parse::<FridgeLifetime>()
                .map_err(|e| format!("invalid fridge lifetime `{lifetime}`: {e}"))?,
            _ => mealdeck_recipe::DEFAULT_FRIDGE_LIFETIME,
        };

        Ok(Self(Ingredient::new(name, amount, unit, fridge_lifetime)))
    }
}

pub async fn meal<S, F, W>(
    store: &S,
    food: &F,
    session: &Session,
    command: MealCommand,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: DocumentStore + Clone,
    F: FoodSearch,
    W: Write,
{
    let cmd = Command::new(store.clone());

    match command {
        MealCommand::List => {
            for meal in cmd.list(session).await? {
                print_meal(out, &meal)?;
            }
        }
        MealCommand::Catalog => {
            for meal in catalog() {
                print_meal(out, &meal)?;
                for ingredient in &meal.ingredients {
                    writeln!(
                        out,
                        "    {} {} {} (lasts {} days)",
                        ingredient.amount, ingredient.unit, ingredient.name, ingredient.fridge_lifetime
                    )?;
                }
            }
        }
        MealCommand::SaveCatalog { id } => {
            let (meal, status) = cmd.save_catalog(session, &id).await?;
            let status = check(status)?;
            writeln!(out, "{} {}: {status}", meal.id, meal.name)?;
        }
        MealCommand::Create {
            name,
            ingredients,
            lookup,
        } => {
            let mut draft = MealDraft::new(name);
            for IngredientArg(ingredient) in ingredients {
                let ingredient = if lookup {
                    with_looked_up_macros(food, ingredient).await
                } else {
                    ingredient
                };
                draft.add_ingredient(ingredient);
            }

            let (meal, status) = cmd.create(session, draft).await?;
            let status = check(status)?;
            print_meal(out, &meal)?;
            writeln!(out, "{status}")?;
        }
    }

    Ok(())
}

pub async fn stats<S: DocumentStore + Clone, W: Write>(
    store: &S,
    session: &Session,
    out: &mut W,
) -> anyhow::Result<()> {
    let stats = Command::new(store.clone()).stats(session).await?;

    writeln!(out, "Meals: {}", stats.meal_count)?;
    writeln!(out, "Totals: {}", stats.macros)?;

    Ok(())
}

async fn with_looked_up_macros<F: FoodSearch>(food: &F, ingredient: Ingredient) -> Ingredient {
    match food.search(&ingredient.name).await {
        Ok(foods) => match foods.first() {
            Some(item) => {
                let macros = item.macros();
                ingredient.with_macros(macros)
            }
            _ => {
                tracing::warn!(name = %ingredient.name, "no nutrition data found");
                ingredient
            }
        },
        Err(e) => {
            tracing::error!(name = %ingredient.name, "error searching nutrition data: {e}");
            ingredient
        }
    }
}

fn print_meal<W: Write>(out: &mut W, meal: &Meal) -> std::io::Result<()> {
    writeln!(out, "{}  {}  ({})", meal.id, meal.name, meal.macros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_arg() {
        let IngredientArg(rice) = "Rice:1.5:cup:180".parse().unwrap();
        assert_eq!(rice.name, "Rice");
        assert_eq!(rice.amount, 1.5);
        assert_eq!(rice.unit, Unit::Cup);
        assert_eq!(rice.fridge_lifetime, FridgeLifetime::Days(180));

        let IngredientArg(egg) = "Egg".parse().unwrap();
        assert_eq!(egg.amount, 1.0);
        assert_eq!(egg.unit, Unit::Count);
        assert_eq!(egg.fridge_lifetime, FridgeLifetime::Days(3));

        let IngredientArg(rice) = "Rice:2:".parse().unwrap();
        assert_eq!(rice.amount, 2.0);
        assert_eq!(rice.unit, Unit::Count);

        let IngredientArg(oats) = "Oats:40: :7".parse().unwrap();
        assert_eq!(oats.unit, Unit::Count);
        assert_eq!(oats.fridge_lifetime, FridgeLifetime::Days(7));

        let IngredientArg(salt) = "Salt:2:pinch:infinite".parse().unwrap();
        assert_eq!(salt.unit, Unit::Other("pinch".to_owned()));
        assert_eq!(salt.fridge_lifetime, FridgeLifetime::Infinite);
    }

    #[test]
    fn test_ingredient_arg_errors() {
        assert!(":1:g".parse::<IngredientArg>().is_err());
        assert!("Rice:lots".parse::<IngredientArg>().is_err());
        assert!("Rice:-1".parse::<IngredientArg>().is_err());
        assert!("Rice:1:g:soon".parse::<IngredientArg>().is_err());
        assert!("Rice:1:g:3:x".parse::<IngredientArg>().is_err());
    }
}
