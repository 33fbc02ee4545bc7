//! Recording mock stores and request helpers shared by the API tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    http::{self, Request},
    response::Response,
};
use http_body_util::BodyExt;
use todo_lists::{
    app,
    config::HttpLimits,
    repos::{
        ListPatch, ListRow, ListStore, NewList, NewTodo, RepoError, RepoResult, TodoPatch,
        TodoRow, TodoStore,
    },
    state::AppState,
};
use uuid::Uuid;

fn store_failure() -> RepoError {
    RepoError::Db(sqlx::Error::PoolTimedOut)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCall {
    FindAll,
    Create(NewList),
    Update(ListPatch, String),
    Destroy(String),
}

/// `find_all` answers with `rows`; every call is recorded.
#[derive(Default)]
pub struct MockListStore {
    rows: Vec<ListRow>,
    fail: bool,
    calls: Mutex<Vec<ListCall>>,
}

impl MockListStore {
    pub fn with_rows(rows: Vec<ListRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ListCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn creates(&self) -> Vec<NewList> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ListCall::Create(new) => Some(new),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ListCall) -> RepoResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail { Err(store_failure()) } else { Ok(()) }
    }
}

#[async_trait]
impl ListStore for MockListStore {
    async fn find_all(&self) -> RepoResult<Vec<ListRow>> {
        self.record(ListCall::FindAll)?;
        Ok(self.rows.clone())
    }

    async fn create(&self, list: NewList) -> RepoResult<ListRow> {
        self.record(ListCall::Create(list.clone()))?;
        Ok(ListRow {
            id: Uuid::new_v4(),
            name: list.name,
            color: list.color,
        })
    }

    async fn update(&self, patch: ListPatch, name: &str) -> RepoResult<Option<ListRow>> {
        self.record(ListCall::Update(patch.clone(), name.to_string()))?;
        let Some(current) = self.rows.iter().find(|r| r.name == name) else {
            return Ok(None);
        };
        Ok(Some(ListRow {
            id: current.id,
            name: patch.name.unwrap_or_else(|| current.name.clone()),
            color: patch.color.unwrap_or_else(|| current.color.clone()),
        }))
    }

    async fn destroy(&self, name: &str) -> RepoResult<bool> {
        self.record(ListCall::Destroy(name.to_string()))?;
        Ok(self.rows.iter().any(|r| r.name == name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCall {
    FindAll,
    Create(NewTodo),
    Update(TodoPatch, Uuid),
    Destroy(Uuid),
}

#[derive(Default)]
pub struct MockTodoStore {
    rows: Vec<TodoRow>,
    fail: bool,
    calls: Mutex<Vec<TodoCall>>,
}

impl MockTodoStore {
    pub fn with_rows(rows: Vec<TodoRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<TodoCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: TodoCall) -> RepoResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail { Err(store_failure()) } else { Ok(()) }
    }
}

#[async_trait]
impl TodoStore for MockTodoStore {
    async fn find_all(&self) -> RepoResult<Vec<TodoRow>> {
        self.record(TodoCall::FindAll)?;
        Ok(self.rows.clone())
    }

    async fn create(&self, todo: NewTodo) -> RepoResult<TodoRow> {
        self.record(TodoCall::Create(todo.clone()))?;
        Ok(TodoRow {
            id: Uuid::new_v4(),
            text: todo.text,
            done: false,
            list_id: None,
        })
    }

    async fn update(&self, patch: TodoPatch, id: Uuid) -> RepoResult<Option<TodoRow>> {
        self.record(TodoCall::Update(patch.clone(), id))?;
        let Some(current) = self.rows.iter().find(|r| r.id == id) else {
            return Ok(None);
        };
        Ok(Some(TodoRow {
            id,
            text: patch.text.unwrap_or_else(|| current.text.clone()),
            done: patch.done.unwrap_or(current.done),
            list_id: current.list_id,
        }))
    }

    async fn destroy(&self, id: Uuid) -> RepoResult<bool> {
        self.record(TodoCall::Destroy(id))?;
        Ok(self.rows.iter().any(|r| r.id == id))
    }
}

pub fn list_row(name: &str, color: &str) -> ListRow {
    ListRow {
        id: Uuid::new_v4(),
        name: name.to_string(),
        color: color.to_string(),
    }
}

pub fn todo_row(text: &str, done: bool) -> TodoRow {
    TodoRow {
        id: Uuid::new_v4(),
        text: text.to_string(),
        done,
        list_id: None,
    }
}

pub fn app_with(lists: &Arc<MockListStore>, todos: &Arc<MockTodoStore>) -> Router {
    let state = AppState::new(lists.clone(), todos.clone());
    app::router(state, &HttpLimits::default())
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

pub fn form_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(body.to_string())
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
