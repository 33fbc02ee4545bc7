/*
 * Responsibility
 * - /lists, /list 系 handler
 * - body を extractor で受け、DTO validation → store 呼び出し → envelope 整形
 * - 永続化は AppState の ListStore / TodoStore に委譲 (handler は状態を持たない)
 */
use axum::{Json, extract::State};

use crate::{
    api::{
        dto::{
            Ack,
            lists::{
                CreateListRequest, DEFAULT_LIST_COLOR, DEFAULT_LIST_NAME, DeleteListRequest,
                ListPayload, ListResponse, ListsOverview, UpdateListRequest,
            },
        },
        extractors::ApiBody,
    },
    error::AppError,
    repos::NewList,
    state::AppState,
};

/// `GET /api/lists`: every list and todo, seeding a default list into an empty store.
pub async fn list_lists(State(state): State<AppState>) -> Result<Json<ListsOverview>, AppError> {
    let mut lists = state.lists.find_all().await?;
    let todos = state.todos.find_all().await?;

    // Concurrent empty reads may both get here; the unique index on name lets one of them fail.
    if lists.is_empty() {
        let created = state
            .lists
            .create(NewList {
                name: DEFAULT_LIST_NAME.to_string(),
                color: DEFAULT_LIST_COLOR.to_string(),
            })
            .await?;
        tracing::info!(list_id = %created.id, "created default list");
        lists.push(created);
    }

    Ok(Json(ListsOverview {
        error: false,
        lists: lists.into_iter().map(ListResponse::from).collect(),
        todos: todos.into_iter().map(Into::into).collect(),
    }))
}

pub async fn create_list(
    State(state): State<AppState>,
    ApiBody(req): ApiBody<CreateListRequest>,
) -> Result<Json<ListPayload>, AppError> {
    let new_list = req.into_new_list()?;

    let row = state.lists.create(new_list).await?;

    Ok(Json(ListPayload {
        error: false,
        list: Some(row.into()),
    }))
}

pub async fn update_list(
    State(state): State<AppState>,
    ApiBody(req): ApiBody<UpdateListRequest>,
) -> Result<Json<ListPayload>, AppError> {
    let (name, patch) = req.into_patch()?;

    let row = state.lists.update(patch, &name).await?;
    if row.is_none() {
        tracing::debug!(%name, "update matched no list");
    }

    Ok(Json(ListPayload {
        error: false,
        list: row.map(Into::into),
    }))
}

pub async fn delete_list(
    State(state): State<AppState>,
    ApiBody(req): ApiBody<DeleteListRequest>,
) -> Result<Json<Ack>, AppError> {
    let deleted = state.lists.destroy(&req.name).await?;
    if !deleted {
        tracing::debug!(name = %req.name, "delete matched no list");
    }

    Ok(Json(Ack::ok()))
}
