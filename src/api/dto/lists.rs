/*
 * Responsibility
 * - Lists の request/response DTO
 * - validation (hex color / 更新内容の有無) と store に渡す型への変換
 */
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    api::dto::{non_empty, todos::TodoResponse},
    error::AppError,
    repos::{ListPatch, ListRow, NewList},
};

/// Created by `GET /api/lists` when the store holds no list at all.
pub const DEFAULT_LIST_NAME: &str = "default";
pub const DEFAULT_LIST_COLOR: &str = "#000000";

pub const INVALID_COLOR_MSG: &str = "invalid hex color (#rrggbb)";

/// `#rrggbb`, hex digits in either case.
pub fn is_hex_color(color: &str) -> bool {
    let bytes = color.as_bytes();
    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
}

// Any JSON value is accepted here so that numbers, null or a missing color
// fail with the hex message rather than a body parse error.
fn check_color(color: Option<Value>) -> Result<String, AppError> {
    match color {
        Some(Value::String(color)) if is_hex_color(&color) => Ok(color),
        _ => Err(AppError::invalid_input(INVALID_COLOR_MSG)),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub name: String,
    #[serde(default)]
    pub color: Option<Value>,
}

impl CreateListRequest {
    pub fn into_new_list(self) -> Result<NewList, AppError> {
        let color = check_color(self.color)?;
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("name is required"));
        }

        Ok(NewList {
            name: self.name,
            color,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListRequest {
    /// Current name; the lookup key.
    pub name: String,
    pub new_name: Option<String>,
    #[serde(default)]
    pub color: Option<Value>,
}

impl UpdateListRequest {
    /// Returns the lookup key and a patch holding only the provided fields.
    ///
    /// Color is validated before the "nothing to update" check.
    pub fn into_patch(self) -> Result<(String, ListPatch), AppError> {
        let new_name = non_empty(self.new_name);
        // Absent, null and "" mean "leave the color alone"; anything else must be #rrggbb.
        let color = match self.color {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            other => Some(check_color(other)?),
        };
        if new_name.is_none() && color.is_none() {
            return Err(AppError::NothingToUpdate);
        }
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("name is required"));
        }

        Ok((
            self.name,
            ListPatch {
                name: new_name,
                color,
            },
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteListRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

impl From<ListRow> for ListResponse {
    fn from(row: ListRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            color: row.color,
        }
    }
}

/// `GET /api/lists`
#[derive(Debug, Serialize)]
pub struct ListsOverview {
    pub error: bool,
    pub lists: Vec<ListResponse>,
    pub todos: Vec<TodoResponse>,
}

/// `POST` / `PUT /api/list`. `list` is `null` when a PUT matched nothing.
#[derive(Debug, Serialize)]
pub struct ListPayload {
    pub error: bool,
    pub list: Option<ListResponse>,
}
