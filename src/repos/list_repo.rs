/*
 * Responsibility
 * - lists テーブル向け SQLx 操作 (ListStore の Postgres 実装)
 * - name は UNIQUE。更新/削除の lookup key として使う
 * - todos は "listId" の FK (CASCADE) 前提で削除挙動を意識
 */
use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::{
    error::RepoResult,
    store::{ListPatch, ListRow, ListStore, NewList},
};

#[derive(Clone, Debug)]
pub struct PgListStore {
    db: PgPool,
}

impl PgListStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ListStore for PgListStore {
    async fn find_all(&self) -> RepoResult<Vec<ListRow>> {
        let rows = sqlx::query_as::<_, ListRow>(
            r#"
            SELECT id, name, color
            FROM lists
            ORDER BY "createdAt" ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn create(&self, list: NewList) -> RepoResult<ListRow> {
        let row = sqlx::query_as::<_, ListRow>(
            r#"
            INSERT INTO lists (name, color)
            VALUES ($1, $2)
            RETURNING id, name, color
            "#,
        )
        .bind(&list.name)
        .bind(&list.color)
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(&self, patch: ListPatch, name: &str) -> RepoResult<Option<ListRow>> {
        let row = sqlx::query_as::<_, ListRow>(
            r#"
            UPDATE lists
            SET
                name = COALESCE($2, name),
                color = COALESCE($3, color),
                "updatedAt" = now()
            WHERE name = $1
            RETURNING id, name, color
            "#,
        )
        .bind(name)
        .bind(patch.name.as_deref())
        .bind(patch.color.as_deref())
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn destroy(&self, name: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM lists
            WHERE name = $1
            "#,
        )
        .bind(name)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
