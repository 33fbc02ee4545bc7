/*
 * Responsibility
 * - store trait (handler が依存する永続化の境界) と Postgres 実装の公開
 */
pub mod error;
pub mod list_repo;
pub mod store;
pub mod todo_repo;

pub use error::{RepoError, RepoResult};
pub use list_repo::PgListStore;
pub use store::{ListPatch, ListRow, ListStore, NewList, NewTodo, TodoPatch, TodoRow, TodoStore};
pub use todo_repo::PgTodoStore;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Applies pending schema migrations.
pub async fn migrate(db: &sqlx::PgPool) -> RepoResult<()> {
    MIGRATOR.run(db).await?;
    Ok(())
}
