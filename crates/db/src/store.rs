use mealdeck_shared::{Collection, DocumentStore};
use sea_query::{Expr, ExprTrait, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde_json::Value;
use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::table::Document;

/// Document store backed by a single SQLite table keyed by
/// `(user_id, collection, key)`. Bodies are stored as JSON text.
#[derive(Clone)]
pub struct SqliteStore(pub SqlitePool);

#[derive(sqlx::FromRow)]
struct DocumentRow {
    key: String,
    body: String,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self(pool)
    }
}

#[async_trait::async_trait]
impl DocumentStore for SqliteStore {
    async fn get(
        &self,
        user_id: &str,
        collection: Collection,
        key: &str,
    ) -> mealdeck_shared::Result<Option<Value>> {
        let statement = Query::select()
            .columns([Document::Key, Document::Body])
            .from(Document::Table)
            .and_where(Expr::col(Document::UserId).eq(user_id.to_owned()))
            .and_where(Expr::col(Document::Collection).eq(collection.to_string()))
            .and_where(Expr::col(Document::Key).eq(key.to_owned()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, DocumentRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        match row {
            Some(row) => Ok(Some(serde_json::from_str(&row.body)?)),
            _ => Ok(None),
        }
    }

    async fn get_all(
        &self,
        user_id: &str,
        collection: Collection,
    ) -> mealdeck_shared::Result<Vec<(String, Value)>> {
        let statement = Query::select()
            .columns([Document::Key, Document::Body])
            .from(Document::Table)
            .and_where(Expr::col(Document::UserId).eq(user_id.to_owned()))
            .and_where(Expr::col(Document::Collection).eq(collection.to_string()))
            .order_by(Document::Key, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, DocumentRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            match serde_json::from_str(&row.body) {
                Ok(body) => documents.push((row.key, body)),
                Err(e) => {
                    tracing::warn!(user_id, %collection, key = %row.key, "skipping unreadable document: {e}");
                }
            }
        }

        Ok(documents)
    }

    async fn set(
        &self,
        user_id: &str,
        collection: Collection,
        key: &str,
        document: Value,
    ) -> mealdeck_shared::Result<()> {
        let body = serde_json::to_string(&document)?;
        let updated_at = OffsetDateTime::now_utc().unix_timestamp();

        let statement = Query::insert()
            .into_table(Document::Table)
            .columns([
                Document::UserId,
                Document::Collection,
                Document::Key,
                Document::Body,
                Document::UpdatedAt,
            ])
            .values_panic([
                user_id.to_owned().into(),
                collection.to_string().into(),
                key.to_owned().into(),
                body.into(),
                updated_at.into(),
            ])
            .on_conflict(
                OnConflict::columns([Document::UserId, Document::Collection, Document::Key])
                    .update_columns([Document::Body, Document::UpdatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
