/*
 * Responsibility
 * - /api の URL 構造を定義
 * - lists は複数形 (一覧), list/todo は単数形 (body で対象を指定する CRUD)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::handlers::{
    lists::{create_list, delete_list, list_lists, update_list},
    todos::{create_todo, delete_todo, update_todo},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lists", get(list_lists))
        .route("/list", post(create_list).put(update_list).delete(delete_list))
        .route("/todo", post(create_todo).put(update_todo).delete(delete_todo))
}
