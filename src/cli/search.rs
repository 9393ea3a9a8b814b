use mealdeck_nutrition::FoodSearch;
use std::io::Write;

pub async fn search<F: FoodSearch, W: Write>(
    food: &F,
    query: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let foods = food.search(query).await?;
    if foods.is_empty() {
        writeln!(out, "No foods found")?;
    }

    for item in foods {
        writeln!(out, "{}  {}  ({} per unit)", item.fdc_id, item.description, item.macros())?;
    }

    Ok(())
}
