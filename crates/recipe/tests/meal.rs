use mealdeck_recipe::MealDraft;
use mealdeck_shared::{
    Collection, DocumentStore, MemoryStore, Session,
    recipe::{FridgeLifetime, Macros, Unit},
};
use serde_json::json;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_create() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let store = helpers::setup_test_store(path).await?;
    let cmd = mealdeck_recipe::Command::new(store.clone());
    let john = Session::new("john".to_owned());

    let mut draft = MealDraft::new("  Chicken Rice ");
    draft.add_food("Chicken", Macros::new(1.65, 0.31, 0.0, 0.036));
    draft.add_food("Rice", Macros::new(1.3, 0.027, 0.28, 0.003));
    draft.update_ingredient(0, 150.0, Unit::G, FridgeLifetime::Days(3));
    draft.update_ingredient(1, 1.0, Unit::Cup, FridgeLifetime::Days(180));

    let (meal, status) = cmd.create(&john, draft).await?;
    assert!(status.is_saved());
    assert_eq!(meal.name, "Chicken Rice");
    assert!((meal.macros.calories - (1.65 * 150.0 + 1.3 * 240.0)).abs() < 1e-9);

    let loaded = cmd.load(&john, &meal.id).await?.unwrap();
    assert_eq!(loaded, meal);

    let doc = store
        .get("john", Collection::Meals, &meal.id)
        .await?
        .unwrap();
    assert_eq!(doc["ingredients"][0]["fridgeLifetime"], 3);
    assert!(doc["createdAt"].as_u64().unwrap() > 0);

    Ok(())
}

#[tokio::test]
async fn test_create_requires_name_and_ingredient() -> anyhow::Result<()> {
    let cmd = mealdeck_recipe::Command::new(MemoryStore::new());
    let john = Session::new("john".to_owned());

    let mut draft = MealDraft::new("   ");
    draft.add_food("Egg", Macros::default());
    assert!(cmd.create(&john, draft).await.is_err());

    let draft = MealDraft::new("Omelette");
    assert!(cmd.create(&john, draft).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_create_without_session_is_skipped() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let cmd = mealdeck_recipe::Command::new(store.clone());

    let mut draft = MealDraft::new("Omelette");
    draft.add_food("Egg", Macros::default());
    let (_, status) = cmd.create(&Session::anonymous(), draft).await?;

    assert!(status.is_skipped());
    assert!(store.is_empty().await);
    assert!(cmd.list(&Session::anonymous()).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_create_reports_failed_write() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    store.set_fail_writes(true);
    let cmd = mealdeck_recipe::Command::new(store.clone());

    let mut draft = MealDraft::new("Omelette");
    draft.add_food("Egg", Macros::default());
    let (_, status) = cmd.create(&Session::new("john".to_owned()), draft).await?;

    assert!(status.is_failed());

    Ok(())
}

#[tokio::test]
async fn test_save_catalog_and_stats() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let store = helpers::setup_test_store(path).await?;
    let cmd = mealdeck_recipe::Command::new(store);
    let john = Session::new("john".to_owned());

    let (meal, status) = cmd.save_catalog(&john, "1").await?;
    assert!(status.is_saved());
    assert_eq!(meal.name, "Grilled Chicken Salad");

    cmd.save_catalog(&john, "1").await?;
    cmd.save_catalog(&john, "3").await?;

    let err = cmd.save_catalog(&john, "42").await.unwrap_err();
    assert_eq!(err.to_string(), "not found: catalog recipe 42");

    let meals = cmd.list(&john).await?;
    assert_eq!(meals.len(), 2);

    let stats = cmd.stats(&john).await?;
    assert_eq!(stats.meal_count, 2);
    assert_eq!(stats.macros, Macros::new(650.0, 38.0, 40.0, 33.0));

    Ok(())
}

#[tokio::test]
async fn test_list_uses_document_key_and_tolerates_gaps() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    store
        .set(
            "john",
            Collection::Meals,
            "abc",
            json!({"id": "other", "name": "Old", "macros": {"calories": "120"}}),
        )
        .await?;
    let cmd = mealdeck_recipe::Command::new(store);

    let meals = cmd.list(&Session::new("john".to_owned())).await?;
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].id, "abc");
    assert_eq!(meals[0].macros.calories, 120.0);
    assert_eq!(meals[0].macros.protein, 0.0);
    assert!(meals[0].ingredients.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_list_reads_iso_created_at() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    store
        .set(
            "john",
            Collection::Meals,
            "Xk29",
            json!({
                "name": "Chicken Rice",
                "ingredients": [
                    {"name": "Chicken", "amount": 150, "unit": "g", "fridgeLifetime": 3}
                ],
                "macros": {"calories": 420, "protein": 45, "carbs": 40, "fat": 8},
                "createdAt": "2024-03-04T10:15:30.123Z"
            }),
        )
        .await?;
    let john = Session::new("john".to_owned());
    let cmd = mealdeck_recipe::Command::new(store);

    let meals = cmd.list(&john).await?;
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].id, "Xk29");
    assert_eq!(meals[0].created_at, 1709547330);

    let stats = cmd.stats(&john).await?;
    assert_eq!(stats.meal_count, 1);
    assert_eq!(stats.macros.calories, 420.0);

    Ok(())
}
