/*
 * Responsibility
 * - Todos の request/response DTO
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::dto::non_empty,
    error::AppError,
    repos::{NewTodo, TodoPatch, TodoRow},
};

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
    /// Owning list, by name.
    pub list: Option<String>,
}

impl CreateTodoRequest {
    pub fn into_new_todo(self) -> Result<NewTodo, AppError> {
        if self.text.trim().is_empty() {
            return Err(AppError::invalid_input("text is required"));
        }

        Ok(NewTodo {
            text: self.text,
            list: non_empty(self.list),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub id: Uuid,
    pub text: Option<String>,
    pub done: Option<bool>,
}

impl UpdateTodoRequest {
    pub fn into_patch(self) -> Result<(Uuid, TodoPatch), AppError> {
        if let Some(text) = &self.text
            && text.trim().is_empty()
        {
            return Err(AppError::invalid_input("text cannot be empty"));
        }
        if self.text.is_none() && self.done.is_none() {
            return Err(AppError::NothingToUpdate);
        }

        Ok((
            self.id,
            TodoPatch {
                text: self.text,
                done: self.done,
            },
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteTodoRequest {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: Uuid,
    pub text: String,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<Uuid>,
}

impl From<TodoRow> for TodoResponse {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            done: row.done,
            list_id: row.list_id,
        }
    }
}

/// `POST` / `PUT /api/todo`
#[derive(Debug, Serialize)]
pub struct TodoPayload {
    pub error: bool,
    pub todo: Option<TodoResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_text() {
        let req = CreateTodoRequest {
            text: " ".into(),
            list: None,
        };
        assert_eq!(req.into_new_todo().unwrap_err().to_string(), "text is required");
    }

    #[test]
    fn create_drops_blank_list_name() {
        let req = CreateTodoRequest {
            text: "buy milk".into(),
            list: Some(String::new()),
        };
        assert_eq!(req.into_new_todo().unwrap().list, None);
    }

    #[test]
    fn update_without_fields_is_nothing_to_update() {
        let req = UpdateTodoRequest {
            id: Uuid::nil(),
            text: None,
            done: None,
        };
        assert!(matches!(
            req.into_patch().unwrap_err(),
            AppError::NothingToUpdate
        ));
    }

    #[test]
    fn update_rejects_blank_text() {
        let req = UpdateTodoRequest {
            id: Uuid::nil(),
            text: Some("".into()),
            done: Some(true),
        };
        assert_eq!(req.into_patch().unwrap_err().to_string(), "text cannot be empty");
    }

    #[test]
    fn unassigned_todo_omits_list_id() {
        let todo = TodoResponse {
            id: Uuid::nil(),
            text: "todo".into(),
            done: false,
            list_id: None,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "text": "todo",
                "done": false
            })
        );
    }
}
