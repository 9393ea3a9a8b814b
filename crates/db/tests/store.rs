use mealdeck_shared::{Collection, DocumentStore};
use serde_json::json;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_set_then_get() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let store = helpers::setup_test_store(path).await?;

    assert!(store.get("john", Collection::Meals, "m1").await?.is_none());

    store
        .set("john", Collection::Meals, "m1", json!({"name": "Salad"}))
        .await?;
    store
        .set("john", Collection::Meals, "m1", json!({"name": "Soup"}))
        .await?;

    let doc = store.get("john", Collection::Meals, "m1").await?.unwrap();
    assert_eq!(doc["name"], "Soup");

    Ok(())
}

#[tokio::test]
async fn test_get_all_is_scoped() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let store = helpers::setup_test_store(path).await?;

    store
        .set("john", Collection::Fridge, "milk", json!({"amount": 1}))
        .await?;
    store
        .set("john", Collection::Fridge, "eggs", json!({"amount": 12}))
        .await?;
    store
        .set("albert", Collection::Fridge, "flour", json!({"amount": 500}))
        .await?;
    store
        .set("john", Collection::MealPlans, "2024-03-04", json!({}))
        .await?;

    let fridge = store.get_all("john", Collection::Fridge).await?;
    let keys = fridge.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["eggs", "milk"]);

    Ok(())
}

#[tokio::test]
async fn test_migrate_twice() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let store = helpers::setup_test_store(path).await?;
    mealdeck_db::migrate(&store.0).await?;

    Ok(())
}
