/*
 * Responsibility
 * - /todo 系 handler (作成・更新・削除。一覧は GET /lists に含まれる)
 */
use axum::{Json, extract::State};

use crate::{
    api::{
        dto::{
            Ack,
            todos::{CreateTodoRequest, DeleteTodoRequest, TodoPayload, UpdateTodoRequest},
        },
        extractors::ApiBody,
    },
    error::AppError,
    state::AppState,
};

pub async fn create_todo(
    State(state): State<AppState>,
    ApiBody(req): ApiBody<CreateTodoRequest>,
) -> Result<Json<TodoPayload>, AppError> {
    let new_todo = req.into_new_todo()?;

    let row = state.todos.create(new_todo).await?;

    Ok(Json(TodoPayload {
        error: false,
        todo: Some(row.into()),
    }))
}

pub async fn update_todo(
    State(state): State<AppState>,
    ApiBody(req): ApiBody<UpdateTodoRequest>,
) -> Result<Json<TodoPayload>, AppError> {
    let (id, patch) = req.into_patch()?;

    let row = state.todos.update(patch, id).await?;

    Ok(Json(TodoPayload {
        error: false,
        todo: row.map(Into::into),
    }))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    ApiBody(req): ApiBody<DeleteTodoRequest>,
) -> Result<Json<Ack>, AppError> {
    state.todos.destroy(req.id).await?;

    Ok(Json(Ack::ok()))
}
