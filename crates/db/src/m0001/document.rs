use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Document;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Document::Table)
        .col(
            ColumnDef::new(Document::UserId)
                .string()
                .not_null()
                .string_len(128),
        )
        .col(
            ColumnDef::new(Document::Collection)
                .string()
                .not_null()
                .string_len(20),
        )
        .col(ColumnDef::new(Document::Key).string().not_null())
        .col(ColumnDef::new(Document::Body).text().not_null())
        .col(ColumnDef::new(Document::UpdatedAt).big_integer().not_null())
        .primary_key(
            Index::create()
                .col(Document::UserId)
                .col(Document::Collection)
                .col(Document::Key),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Document::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_document_user_collection")
        .table(Document::Table)
        .col(Document::UserId)
        .col(Document::Collection)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_document_user_collection")
        .table(Document::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
