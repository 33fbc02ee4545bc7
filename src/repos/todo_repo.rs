/*
 * Responsibility
 * - todos テーブル向け SQLx 操作 (TodoStore の Postgres 実装)
 * - list の指定は name で受け取り、"listId" へはここで解決する
 */
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::{
    error::RepoResult,
    store::{NewTodo, TodoPatch, TodoRow, TodoStore},
};

#[derive(Clone, Debug)]
pub struct PgTodoStore {
    db: PgPool,
}

impl PgTodoStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn find_all(&self) -> RepoResult<Vec<TodoRow>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, text, done, "listId"
            FROM todos
            ORDER BY "createdAt" ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn create(&self, todo: NewTodo) -> RepoResult<TodoRow> {
        // Subquery yields NULL when the list name is absent or unknown.
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (text, "listId")
            VALUES ($1, (SELECT id FROM lists WHERE name = $2))
            RETURNING id, text, done, "listId"
            "#,
        )
        .bind(&todo.text)
        .bind(todo.list.as_deref())
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(&self, patch: TodoPatch, id: Uuid) -> RepoResult<Option<TodoRow>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET
                text = COALESCE($2, text),
                done = COALESCE($3, done),
                "updatedAt" = now()
            WHERE id = $1
            RETURNING id, text, done, "listId"
            "#,
        )
        .bind(id)
        .bind(patch.text.as_deref())
        .bind(patch.done)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn destroy(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
