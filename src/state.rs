/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - lists: ListStore, todos: TodoStore (request ごとに State で注入)
 * - Clone 前提で持つ (内部は Arc なので clone は安い)
 */
use std::sync::Arc;

use crate::repos::{ListStore, TodoStore};

#[derive(Clone)]
pub struct AppState {
    pub lists: Arc<dyn ListStore>,
    pub todos: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(lists: Arc<dyn ListStore>, todos: Arc<dyn TodoStore>) -> Self {
        Self { lists, todos }
    }
}
