use clap::{Parser, Subcommand};
use mealdeck_mealplan::Week;
use mealdeck_nutrition::FoodSearch;
use mealdeck_shared::{DocumentStore, Session, SyncStatus, mealplan::Day, recipe::Unit};
use mealdeck_shopping::{Direction, SortBy};
use std::io::Write;

mod fridge;
mod meal;
mod plan;
mod search;
mod shopping;

pub use fridge::*;
pub use meal::*;
pub use plan::*;
pub use search::*;
pub use shopping::*;

/// mealdeck - weekly meal planning, shopping list and fridge
#[derive(Parser)]
#[command(name = "mealdeck")]
#[command(about = "Weekly meal planning, shopping list and fridge tracking", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// User whose documents are read and written. Without it nothing is
    /// persisted.
    #[arg(long, global = true, env = "MEALDECK_USER")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn session(&self) -> Session {
        Session::new(self.user.clone())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run database migrations
    Migrate,
    /// Search the nutrition database
    Search {
        query: String,
    },
    /// Meals
    #[command(subcommand)]
    Meal(MealCommand),
    /// Meal count and macro totals over every saved meal
    Stats,
    /// Weekly meal plan
    Plan {
        /// Any date of the week, yyyy-mm-dd (default: current week)
        #[arg(long, global = true)]
        week: Option<Week>,

        #[command(subcommand)]
        command: PlanCommand,
    },
    /// Shopping list derived from the weekly plan
    Shopping {
        /// Any date of the week, yyyy-mm-dd (default: current week)
        #[arg(long)]
        week: Option<Week>,

        /// ingredient, amount or fridge-lifetime
        #[arg(long, default_value = "ingredient")]
        sort: SortBy,

        #[arg(long)]
        desc: bool,
    },
    /// Fridge inventory
    #[command(subcommand)]
    Fridge(FridgeCommand),
}

#[derive(Subcommand)]
pub enum MealCommand {
    /// List saved meals
    List,
    /// Show the sample recipes
    Catalog,
    /// Save a sample recipe into your meals
    SaveCatalog { id: String },
    /// Compose a meal
    Create {
        #[arg(long)]
        name: String,

        /// name[:amount[:unit[:lifetime]]], repeatable
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<IngredientArg>,

        /// Fill ingredient macros from the first nutrition search hit
        #[arg(long)]
        lookup: bool,
    },
}

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Print the week with day and week totals
    Show,
    /// Place a meal (saved or catalog id) on a day
    Add { day: Day, meal_id: String },
    /// Remove one placement by instance id
    Remove { day: Day, instance_id: String },
}

#[derive(Subcommand)]
pub enum FridgeCommand {
    /// List entries, optionally filtered by name
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Stock an ingredient and take it off this week's shopping list
    Add {
        name: String,
        amount: f64,
        #[arg(default_value = "g")]
        unit: Unit,
    },
    /// Change an amount by a signed delta
    Adjust {
        name: String,
        #[arg(allow_negative_numbers = true)]
        delta: f64,
    },
    /// Take an amount out
    Remove { name: String, amount: f64 },
}

/// Runs every command except `migrate`, writing human-readable output to `out`.
pub async fn execute<S, F, W>(
    command: Commands,
    store: &S,
    food: &F,
    session: &Session,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: DocumentStore + Clone,
    F: FoodSearch,
    W: Write,
{
    if !session.is_authenticated() {
        tracing::warn!("no --user given, nothing will be saved");
    }

    match command {
        Commands::Migrate => Ok(()),
        Commands::Search { query } => search(food, &query, out).await,
        Commands::Meal(command) => meal(store, food, session, command, out).await,
        Commands::Stats => stats(store, session, out).await,
        Commands::Plan { week, command } => {
            plan(store, session, week.unwrap_or_else(Week::current), command, out).await
        }
        Commands::Shopping { week, sort, desc } => {
            let direction = if desc { Direction::Desc } else { Direction::Asc };
            shopping(
                store,
                session,
                week.unwrap_or_else(Week::current),
                sort,
                direction,
                out,
            )
            .await
        }
        Commands::Fridge(command) => fridge(store, session, command, out).await,
    }
}

/// A command whose write failed exits with an error; local state is gone
/// with the process anyway.
pub fn check(status: SyncStatus) -> anyhow::Result<SyncStatus> {
    if let SyncStatus::Failed(reason) = &status {
        anyhow::bail!("save failed: {reason}");
    }

    Ok(status)
}
