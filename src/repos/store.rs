/*
 * Responsibility
 * - handler から見た永続化インターフェース (ListStore / TodoStore)
 * - AppState に Arc<dyn ...> で注入する (global は持たない)
 * - 実装は Postgres (list_repo / todo_repo) とテスト用 mock
 */
use async_trait::async_trait;
use uuid::Uuid;

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ListRow {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TodoRow {
    pub id: Uuid,
    pub text: String,
    pub done: bool,

    #[sqlx(rename = "listId")]
    pub list_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    pub name: String,
    pub color: String,
}

/// Fields to overwrite on an existing list. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
    /// Name of the owning list; unknown names leave the todo unassigned.
    pub list: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub done: Option<bool>,
}

#[async_trait]
pub trait ListStore: Send + Sync + 'static {
    async fn find_all(&self) -> RepoResult<Vec<ListRow>>;

    async fn create(&self, list: NewList) -> RepoResult<ListRow>;

    // Returns:
    // - Ok(Some(row)) => updated row
    // - Ok(None)      => no list with `name`
    async fn update(&self, patch: ListPatch, name: &str) -> RepoResult<Option<ListRow>>;

    // Todos of the list go with it (ON DELETE CASCADE).
    async fn destroy(&self, name: &str) -> RepoResult<bool>;
}

#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    async fn find_all(&self) -> RepoResult<Vec<TodoRow>>;

    async fn create(&self, todo: NewTodo) -> RepoResult<TodoRow>;

    async fn update(&self, patch: TodoPatch, id: Uuid) -> RepoResult<Option<TodoRow>>;

    async fn destroy(&self, id: Uuid) -> RepoResult<bool>;
}
